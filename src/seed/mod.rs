//! Seed Service - Bulk Rebuild of the Catalog
//!
//! `TigerStyle`: Sim-first, explicit errors, constructor injection.
//!
//! # Overview
//!
//! `SeedService` wipes the catalog and repopulates it from a species
//! listing endpoint in one pass: delete-all, one unary fetch with a fixed
//! limit, one bulk insert. No retry layer, no partial recovery.
//!
//! # Example
//!
//! ```rust
//! use pokedex::constants::SEED_CONFIRMATION;
//! use pokedex::seed::SeedService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let seeder = SeedService::sim(42).with_fetch_count(10);
//!
//!     let confirmation = seeder.execute_seed().await.unwrap();
//!     assert_eq!(confirmation, SEED_CONFIRMATION);
//! }
//! ```

use thiserror::Error;

use crate::constants::{SEED_CONFIRMATION, SEED_FETCH_COUNT_DEFAULT};
use crate::dst::SimConfig;
use crate::pokeapi::{ListingError, ListingProvider, SimListingProvider};
use crate::storage::{CatalogStore, NewPokemon, SimCatalogStore, StoreError};

// =============================================================================
// Error Types
// =============================================================================

/// Errors from the seed routine.
#[derive(Debug, Clone, Error)]
pub enum SeedError {
    /// The listing fetch failed
    #[error("listing fetch failed: {0}")]
    Listing(#[from] ListingError),

    /// A listing entry's URL carried no catalog number
    #[error("malformed listing entry: {url}")]
    MalformedEntry {
        /// The URL that yielded no number
        url: String,
    },

    /// A store operation failed
    #[error("store operation failed during seed: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// SeedService
// =============================================================================

/// Destructive catalog rebuild from a species listing.
pub struct SeedService<S: CatalogStore, P: ListingProvider> {
    store: S,
    listing: P,
    fetch_count: usize,
}

impl SeedService<SimCatalogStore, SimListingProvider> {
    /// Create a seeder over fresh simulated collaborators (deterministic,
    /// given seed).
    #[must_use]
    pub fn sim(seed: u64) -> Self {
        Self::new(
            SimCatalogStore::new(SimConfig::with_seed(seed)),
            SimListingProvider::with_seed(seed),
        )
    }
}

impl<S: CatalogStore, P: ListingProvider> SeedService<S, P> {
    /// Create a new seed service.
    ///
    /// # Arguments
    /// - `store` - Backing document collection (shared with the catalog)
    /// - `listing` - Species listing endpoint
    #[must_use]
    pub fn new(store: S, listing: P) -> Self {
        Self {
            store,
            listing,
            fetch_count: SEED_FETCH_COUNT_DEFAULT,
        }
    }

    /// Set how many entries to fetch from the listing.
    ///
    /// # Panics
    /// Panics if count is zero.
    #[must_use]
    pub fn with_fetch_count(mut self, count: usize) -> Self {
        // Precondition
        assert!(count > 0, "fetch_count must be positive");
        self.fetch_count = count;
        self
    }

    /// The configured fetch limit.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    /// Wipe the catalog and repopulate it from the listing.
    ///
    /// Sequence: delete every record; fetch the listing (fixed limit, one
    /// GET); extract each entry's catalog number from its URL; bulk-insert
    /// the whole batch. Returns [`SEED_CONFIRMATION`] on success.
    ///
    /// # Known hazard
    ///
    /// The wipe happens before the fetch and the sequence is not atomic: a
    /// fetch or parse failure aborts the operation and leaves the catalog
    /// EMPTY, and a concurrent read during seeding can observe an empty
    /// catalog. Callers triggering a seed accept this window.
    ///
    /// # Errors
    /// - [`SeedError::Listing`] when the fetch fails;
    /// - [`SeedError::MalformedEntry`] when any entry URL carries no
    ///   number (nothing is inserted);
    /// - [`SeedError::Store`] when the wipe or bulk insert fails.
    pub async fn execute_seed(&self) -> Result<&'static str, SeedError> {
        let wiped = self.store.delete_many().await?;
        tracing::info!(wiped, "catalog wiped before reseed");

        let listing = self.listing.fetch_listing(self.fetch_count).await?;

        let mut batch: Vec<NewPokemon> = Vec::with_capacity(listing.results.len());
        for entry in &listing.results {
            let no = entry.catalog_no().ok_or_else(|| SeedError::MalformedEntry {
                url: entry.url.clone(),
            })?;
            batch.push(NewPokemon::new(entry.name.to_lowercase(), Some(no)));
        }

        let inserted = self.store.insert_many(batch).await?;
        tracing::info!(inserted, "catalog reseeded");

        Ok(SEED_CONFIRMATION)
    }
}
