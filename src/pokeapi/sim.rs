//! `SimListingProvider` - Simulation-First Listing Provider
//!
//! `TigerStyle`: Primary implementation for all tests and development.
//! The real provider (`PokeApiProvider`) is secondary.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ListingError, ListingProvider, SpeciesEntry, SpeciesListing};
use crate::dst::{DeterministicRng, FaultConfig, FaultInjector, FaultType};

/// Well-known species names for the head of the simulated listing; entries
/// past the table fall back to a generated name.
const SPECIES_NAMES: [&str; 15] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
    "caterpie",
    "metapod",
    "butterfree",
    "weedle",
    "kakuna",
    "beedrill",
];

// =============================================================================
// SimListingProvider
// =============================================================================

/// Deterministic listing provider.
///
/// Produces the same listing shape as the real endpoint: entries numbered
/// from 1 with PokeAPI-style reference URLs. Fault injection covers the
/// failure modes a real fetch has (timeout, unavailable endpoint) plus a
/// malformed payload whose URLs carry no catalog number.
///
/// # Example
///
/// ```rust
/// use pokedex::pokeapi::{ListingProvider, SimListingProvider};
///
/// #[tokio::main]
/// async fn main() {
///     let provider = SimListingProvider::with_seed(42);
///     let listing = provider.fetch_listing(3).await.unwrap();
///
///     assert_eq!(listing.results[0].name, "bulbasaur");
///     assert_eq!(listing.results[2].catalog_no(), Some(3));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SimListingProvider {
    /// Fault injector for simulating failures
    fault_injector: Arc<FaultInjector>,
}

impl SimListingProvider {
    /// Create a new standalone provider with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            fault_injector: Arc::new(FaultInjector::new(DeterministicRng::new(seed))),
        }
    }

    /// Create a provider with a shared fault injector.
    ///
    /// Use this when the store and the listing provider should draw from
    /// one fault schedule.
    #[must_use]
    pub fn with_fault_injector(fault_injector: Arc<FaultInjector>) -> Self {
        Self { fault_injector }
    }

    /// Add fault configuration.
    ///
    /// # Panics
    /// Panics if the fault injector is already shared.
    #[must_use]
    pub fn with_faults(mut self, config: FaultConfig) -> Self {
        Arc::get_mut(&mut self.fault_injector)
            .expect("cannot add faults after provider is shared")
            .register(config);
        self
    }

    /// Get fault injector for inspection.
    #[must_use]
    pub fn fault_injector(&self) -> &Arc<FaultInjector> {
        &self.fault_injector
    }

    fn entry(index: usize, malformed: bool) -> SpeciesEntry {
        let no = index + 1;
        let name = SPECIES_NAMES
            .get(index)
            .map_or_else(|| format!("species-{no}"), ToString::to_string);

        // Malformed payloads keep the name but drop the numeric segment
        // from the URL, so number extraction fails downstream.
        let url = if malformed {
            "https://pokeapi.co/api/v2/pokemon/".to_string()
        } else {
            format!("https://pokeapi.co/api/v2/pokemon/{no}/")
        };

        SpeciesEntry { name, url }
    }
}

#[async_trait]
impl ListingProvider for SimListingProvider {
    async fn fetch_listing(&self, limit: usize) -> Result<SpeciesListing, ListingError> {
        // Check for faults
        match self.fault_injector.should_inject("fetch_listing") {
            Some(FaultType::ListingTimeout) => return Err(ListingError::Timeout),
            Some(FaultType::ListingUnavailable) => {
                return Err(ListingError::unavailable("simulated outage"))
            }
            Some(FaultType::ListingMalformed) => {
                let results = (0..limit).map(|i| Self::entry(i, true)).collect();
                return Ok(SpeciesListing { results });
            }
            Some(other) => {
                return Err(ListingError::network(format!(
                    "simulated fault: {}",
                    other.as_str()
                )))
            }
            None => {}
        }

        let results = (0..limit).map(|i| Self::entry(i, false)).collect();
        Ok(SpeciesListing { results })
    }
}
