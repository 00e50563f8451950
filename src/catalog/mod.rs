//! Catalog Service - CRUD over the Pokemon Collection
//!
//! `TigerStyle`: Sim-first, explicit errors, constructor injection.
//!
//! # Overview
//!
//! `CatalogService` exposes the catalog's operations over any
//! [`CatalogStore`]: create, paged listing, free-form lookup, partial
//! update, delete. It holds no cross-request state besides the configured
//! default page size.
//!
//! # Example
//!
//! ```rust
//! use pokedex::catalog::{CatalogService, Pagination};
//! use pokedex::storage::NewPokemon;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = CatalogService::sim(42);
//!
//!     let stored = catalog
//!         .create(NewPokemon::new("Pikachu", Some(25)))
//!         .await
//!         .unwrap();
//!     assert_eq!(stored.name, "pikachu");
//!
//!     let found = catalog.find_one("25").await.unwrap();
//!     assert_eq!(found.id, stored.id);
//! }
//! ```

mod config;

pub use config::CatalogConfig;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{CATALOG_PAGE_OFFSET_DEFAULT, POKEMON_NAME_BYTES_MAX};
use crate::dst::SimConfig;
use crate::storage::{
    CatalogStore, NewPokemon, Pokemon, PokemonPatch, RecordId, SimCatalogStore, StoreError,
};

// =============================================================================
// Error Types
// =============================================================================

/// Errors from catalog operations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// A record with the same unique key already exists
    #[error("pokemon already exists in catalog ({field}: {value})")]
    AlreadyExists {
        /// Unique field that collided (`name` or `no`)
        field: String,
        /// Colliding value
        value: String,
    },

    /// No record matched the lookup
    #[error("pokemon with id, name or no \"{term}\" not found")]
    NotFound {
        /// The term or id that matched nothing
        term: String,
    },

    /// Name input is empty
    #[error("pokemon name must not be empty")]
    EmptyName,

    /// Name input exceeds the size limit
    #[error("pokemon name too long: {len} bytes (max {max})")]
    NameTooLong {
        /// Actual length
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Any other store failure. The cause is logged server-side and never
    /// leaked to the caller.
    #[error("catalog operation failed, check server logs")]
    Internal,
}

/// Map a store failure at the service boundary.
///
/// Duplicate keys become client errors carrying the offending field and
/// value; everything else is logged and surfaced as an opaque failure.
fn map_store_error(err: StoreError) -> CatalogError {
    match err {
        StoreError::DuplicateKey { field, value } => CatalogError::AlreadyExists { field, value },
        other => {
            tracing::error!(error = %other, "catalog store operation failed");
            CatalogError::Internal
        }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Optional paging bounds for catalog listings.
///
/// Omitted fields fall back to the configured default page size and a zero
/// offset.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    /// Maximum records to return
    pub limit: Option<usize>,
    /// Records to skip
    pub offset: Option<usize>,
}

impl Pagination {
    /// Create an empty pagination (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

// =============================================================================
// CatalogService
// =============================================================================

/// CRUD service over the Pokemon catalog.
///
/// Generic over the store so any document collection satisfying
/// [`CatalogStore`] can back it; collaborators are handed in at
/// construction.
pub struct CatalogService<S: CatalogStore> {
    store: S,
    default_limit: usize,
}

impl CatalogService<SimCatalogStore> {
    /// Create a catalog over a fresh simulated store (deterministic, given
    /// seed) with default configuration.
    #[must_use]
    pub fn sim(seed: u64) -> Self {
        Self::new(
            SimCatalogStore::new(SimConfig::with_seed(seed)),
            CatalogConfig::default(),
        )
    }
}

impl<S: CatalogStore> CatalogService<S> {
    /// Create a new catalog service.
    ///
    /// # Arguments
    /// - `store` - Backing document collection
    /// - `config` - Service configuration (default page size)
    ///
    /// # Panics
    /// Panics if the configured default limit is zero.
    #[must_use]
    pub fn new(store: S, config: CatalogConfig) -> Self {
        // Precondition
        assert!(config.default_limit > 0, "default_limit must be positive");

        Self {
            store,
            default_limit: config.default_limit,
        }
    }

    /// The configured default page size.
    #[must_use]
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Get reference to the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create one record.
    ///
    /// The name is lower-cased before storing. A uniqueness violation on
    /// `name` or `no` surfaces as [`CatalogError::AlreadyExists`] with the
    /// conflicting key and value.
    ///
    /// # Returns
    /// The stored record including its assigned identifier.
    pub async fn create(&self, mut input: NewPokemon) -> Result<Pokemon, CatalogError> {
        // Preconditions
        if input.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if input.name.len() > POKEMON_NAME_BYTES_MAX {
            return Err(CatalogError::NameTooLong {
                len: input.name.len(),
                max: POKEMON_NAME_BYTES_MAX,
            });
        }

        input.name = input.name.to_lowercase();

        self.store.insert_one(input).await.map_err(map_store_error)
    }

    /// List the catalog, sorted ascending by catalog number.
    ///
    /// `pagination.limit` defaults to the configured page size,
    /// `pagination.offset` to 0. Internal storage metadata is stripped
    /// from the returned records.
    pub async fn find_all(&self, pagination: Pagination) -> Result<Vec<Pokemon>, CatalogError> {
        let limit = pagination.limit.unwrap_or(self.default_limit);
        let offset = pagination.offset.unwrap_or(CATALOG_PAGE_OFFSET_DEFAULT);

        self.store
            .find_page(limit, offset)
            .await
            .map_err(map_store_error)
    }

    /// Resolve a single record from a free-form term.
    ///
    /// Strategies run in order, each only when the previous one yielded
    /// nothing:
    /// 1. the term parses fully as a number: lookup by catalog number;
    /// 2. the term is a syntactically valid record id: lookup by id;
    /// 3. lookup by name, term lower-cased and trimmed.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] when no strategy matches.
    pub async fn find_one(&self, term: &str) -> Result<Pokemon, CatalogError> {
        let mut found: Option<Pokemon> = None;

        if let Ok(no) = term.parse::<u32>() {
            found = self.store.find_by_no(no).await.map_err(map_store_error)?;
        }

        if found.is_none() {
            if let Some(id) = RecordId::parse(term) {
                found = self.store.find_by_id(&id).await.map_err(map_store_error)?;
            }
        }

        if found.is_none() {
            let name = term.to_lowercase();
            found = self
                .store
                .find_by_name(name.trim())
                .await
                .map_err(map_store_error)?;
        }

        found.ok_or_else(|| CatalogError::NotFound {
            term: term.to_string(),
        })
    }

    /// Partially update the record resolved from `term`.
    ///
    /// The target is resolved via [`find_one`](Self::find_one), whose
    /// NotFound propagates unchanged. A patched name is lower-cased before
    /// applying. Store failures map exactly as in
    /// [`create`](Self::create).
    ///
    /// # Returns
    /// The pre-update record merged with the applied patch fields. This is
    /// a client-side approximation of the post-update state, not a re-read
    /// of the persisted record.
    pub async fn update(&self, term: &str, mut patch: PokemonPatch) -> Result<Pokemon, CatalogError> {
        let current = self.find_one(term).await?;

        if let Some(name) = patch.name.take() {
            patch.name = Some(name.to_lowercase());
        }

        self.store
            .update_one(&current.id, &patch)
            .await
            .map_err(map_store_error)?;

        Ok(current.merge(&patch))
    }

    /// Delete a record by id, with no prior existence read.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] when the store reports zero deleted
    /// documents.
    pub async fn remove(&self, id: &RecordId) -> Result<(), CatalogError> {
        let deleted = self.store.delete_one(id).await.map_err(map_store_error)?;

        if deleted == 0 {
            return Err(CatalogError::NotFound {
                term: id.to_string(),
            });
        }

        Ok(())
    }
}
