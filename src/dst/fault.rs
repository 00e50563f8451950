//! `FaultInjector` - Probabilistic Fault Injection
//!
//! `TigerStyle`: Explicit fault injection for chaos testing.

use std::collections::HashMap;
use std::sync::Mutex;

use super::rng::DeterministicRng;
use crate::constants::DST_FAULT_PROBABILITY_MAX;

/// Types of faults that can be injected.
///
/// `TigerStyle`: Every fault type is explicit and documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultType {
    // =========================================================================
    // Store Faults
    // =========================================================================
    /// Insert (single or bulk) fails
    StoreInsertFail,
    /// Find/read operation fails
    StoreFindFail,
    /// Partial update fails
    StoreUpdateFail,
    /// Delete (single or wipe) fails
    StoreDeleteFail,

    // =========================================================================
    // Listing Faults
    // =========================================================================
    /// Listing fetch times out
    ListingTimeout,
    /// Listing endpoint unavailable
    ListingUnavailable,
    /// Listing body parses but entry URLs carry no catalog number
    ListingMalformed,
}

impl FaultType {
    /// Get the fault type name as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StoreInsertFail => "store_insert_fail",
            Self::StoreFindFail => "store_find_fail",
            Self::StoreUpdateFail => "store_update_fail",
            Self::StoreDeleteFail => "store_delete_fail",
            Self::ListingTimeout => "listing_timeout",
            Self::ListingUnavailable => "listing_unavailable",
            Self::ListingMalformed => "listing_malformed",
        }
    }
}

/// Configuration for a specific fault.
#[derive(Debug, Clone)]
pub struct FaultConfig {
    /// The type of fault
    pub fault_type: FaultType,
    /// Probability of injection (0.0 to 1.0)
    pub probability: f64,
    /// Optional operation filter (substring match)
    pub operation_filter: Option<String>,
    /// Maximum number of injections (None = unlimited)
    pub max_injections: Option<u64>,
}

impl FaultConfig {
    /// Create a new fault configuration.
    ///
    /// # Panics
    /// Panics if probability is not in [0, 1].
    #[must_use]
    pub fn new(fault_type: FaultType, probability: f64) -> Self {
        // Precondition
        assert!(
            (0.0..=DST_FAULT_PROBABILITY_MAX).contains(&probability),
            "probability must be in [0, {DST_FAULT_PROBABILITY_MAX}], got {probability}"
        );

        Self {
            fault_type,
            probability,
            operation_filter: None,
            max_injections: None,
        }
    }

    /// Set operation filter (fault only applies to matching operations).
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.operation_filter = Some(filter.into());
        self
    }

    /// Set maximum number of injections.
    ///
    /// # Panics
    /// Panics if max is zero.
    #[must_use]
    pub fn with_max_injections(mut self, max: u64) -> Self {
        // Precondition
        assert!(max > 0, "max_injections must be positive");
        self.max_injections = Some(max);
        self
    }
}

/// Fault injector for simulation testing.
///
/// `TigerStyle`:
/// - Explicit fault registration
/// - Deterministic through RNG
/// - Interior mutability for sharing via Arc
#[derive(Debug)]
pub struct FaultInjector {
    /// RNG wrapped in Mutex for interior mutability (allows sharing via Arc)
    rng: Mutex<DeterministicRng>,
    configs: Vec<FaultConfig>,
    /// Injection counts per fault type (wrapped in Mutex for interior mutability)
    injection_counts: Mutex<HashMap<FaultType, u64>>,
}

impl FaultInjector {
    /// Create a new fault injector with the given RNG.
    #[must_use]
    pub fn new(rng: DeterministicRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            configs: Vec::new(),
            injection_counts: Mutex::new(HashMap::new()),
        }
    }

    /// Register a fault configuration.
    ///
    /// Note: Registration must happen before sharing via Arc.
    pub fn register(&mut self, config: FaultConfig) {
        self.injection_counts
            .lock()
            .unwrap()
            .entry(config.fault_type)
            .or_insert(0);

        self.configs.push(config);
    }

    /// Check if a fault should be injected for the given operation.
    ///
    /// Returns the fault type if one should be injected, None otherwise.
    ///
    /// `TigerStyle`: Uses interior mutability (Mutex) so can be called on
    /// `&self`, allowing the injector to be shared via Arc.
    pub fn should_inject(&self, operation: &str) -> Option<FaultType> {
        for config in &self.configs {
            // Check operation filter
            if let Some(ref filter) = config.operation_filter {
                if !operation.contains(filter) {
                    continue;
                }
            }

            // Check max injections
            if let Some(max) = config.max_injections {
                let counts = self.injection_counts.lock().unwrap();
                let count = counts.get(&config.fault_type).copied().unwrap_or(0);
                if count >= max {
                    continue;
                }
            }

            // Roll for injection
            let inject = {
                let mut rng = self.rng.lock().unwrap();
                rng.next_bool(config.probability)
            };

            if inject {
                let mut counts = self.injection_counts.lock().unwrap();
                *counts.entry(config.fault_type).or_insert(0) += 1;

                return Some(config.fault_type);
            }
        }

        None
    }

    /// Number of times the given fault has been injected so far.
    #[must_use]
    pub fn injection_count(&self, fault_type: FaultType) -> u64 {
        self.injection_counts
            .lock()
            .unwrap()
            .get(&fault_type)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_faults_registered() {
        let injector = FaultInjector::new(DeterministicRng::new(42));
        assert!(injector.should_inject("insert").is_none());
    }

    #[test]
    fn test_certain_fault_always_injects() {
        let mut injector = FaultInjector::new(DeterministicRng::new(42));
        injector.register(FaultConfig::new(FaultType::StoreInsertFail, 1.0));

        for _ in 0..10 {
            assert_eq!(
                injector.should_inject("insert"),
                Some(FaultType::StoreInsertFail)
            );
        }
        assert_eq!(injector.injection_count(FaultType::StoreInsertFail), 10);
    }

    #[test]
    fn test_zero_probability_never_injects() {
        let mut injector = FaultInjector::new(DeterministicRng::new(42));
        injector.register(FaultConfig::new(FaultType::StoreFindFail, 0.0));

        for _ in 0..100 {
            assert!(injector.should_inject("find").is_none());
        }
    }

    #[test]
    fn test_operation_filter() {
        let mut injector = FaultInjector::new(DeterministicRng::new(42));
        injector.register(FaultConfig::new(FaultType::StoreDeleteFail, 1.0).with_filter("delete"));

        assert!(injector.should_inject("insert").is_none());
        assert_eq!(
            injector.should_inject("delete_many"),
            Some(FaultType::StoreDeleteFail)
        );
    }

    #[test]
    fn test_max_injections_cap() {
        let mut injector = FaultInjector::new(DeterministicRng::new(42));
        injector.register(
            FaultConfig::new(FaultType::ListingTimeout, 1.0).with_max_injections(2),
        );

        assert!(injector.should_inject("fetch").is_some());
        assert!(injector.should_inject("fetch").is_some());
        assert!(injector.should_inject("fetch").is_none());
        assert_eq!(injector.injection_count(FaultType::ListingTimeout), 2);
    }

    #[test]
    fn test_deterministic_schedule() {
        let roll = |seed: u64| -> Vec<bool> {
            let mut injector = FaultInjector::new(DeterministicRng::new(seed));
            injector.register(FaultConfig::new(FaultType::StoreInsertFail, 0.5));
            (0..20)
                .map(|_| injector.should_inject("insert").is_some())
                .collect()
        };

        assert_eq!(roll(7), roll(7), "same seed must give same fault schedule");
    }

    #[test]
    #[should_panic(expected = "probability must be in")]
    fn test_invalid_probability() {
        let _ = FaultConfig::new(FaultType::StoreInsertFail, 1.5);
    }
}
