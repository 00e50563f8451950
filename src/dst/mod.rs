//! DST - Deterministic Simulation Testing
//!
//! TigerBeetle/FoundationDB-style deterministic simulation testing substrate.
//!
//! # Philosophy
//!
//! > "If you're not testing with fault injection, you're not testing."
//!
//! Every external collaborator in this crate (the catalog store, the species
//! listing endpoint) has a simulation implementation driven by a single seed.
//! Same seed = same assigned record ids = same fault schedule = reproducible
//! bugs.
//!
//! # Usage
//!
//! ```rust
//! use pokedex::dst::{DeterministicRng, FaultConfig, FaultInjector, FaultType};
//!
//! let mut injector = FaultInjector::new(DeterministicRng::new(42));
//! injector.register(FaultConfig::new(FaultType::StoreInsertFail, 1.0));
//!
//! assert_eq!(
//!     injector.should_inject("insert_one"),
//!     Some(FaultType::StoreInsertFail)
//! );
//! ```
//!
//! Run the test suite with an explicit seed for reproducibility:
//! ```bash
//! DST_SEED=12345 cargo test
//! ```

mod config;
mod fault;
mod rng;

pub use config::SimConfig;
pub use fault::{FaultConfig, FaultInjector, FaultType};
pub use rng::DeterministicRng;
