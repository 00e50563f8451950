//! Catalog Store Trait
//!
//! `TigerStyle`: Abstract interface for the catalog's document collection.
//!
//! # Simulation-First
//!
//! Tests are written against `SimCatalogStore` first. All implementations
//! must satisfy the same trait contract, including the uniqueness
//! constraints on `name` and `no`.

use async_trait::async_trait;

use super::error::StoreResult;
use super::record::{NewPokemon, Pokemon, PokemonPatch, RecordId};

/// Abstract document collection holding the Pokemon catalog.
///
/// `TigerStyle`: All operations are async, return explicit errors.
///
/// Implementations must enforce uniqueness on `name` and `no` and surface
/// violations as [`StoreError::DuplicateKey`](super::StoreError::DuplicateKey)
/// carrying the offending field and value.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert one record, assigning a fresh id.
    ///
    /// Returns the stored record including its assigned identifier.
    async fn insert_one(&self, record: NewPokemon) -> StoreResult<Pokemon>;

    /// Insert a batch of records in one operation.
    ///
    /// All-or-nothing: a uniqueness violation anywhere in the batch (or
    /// against existing records) inserts nothing. Returns the inserted
    /// count.
    async fn insert_many(&self, records: Vec<NewPokemon>) -> StoreResult<usize>;

    /// Page through the catalog sorted ascending by `no` (records without a
    /// number first), skipping `offset` records and returning at most
    /// `limit`.
    ///
    /// Internal storage metadata is stripped from the returned records
    /// (projection).
    async fn find_page(&self, limit: usize, offset: usize) -> StoreResult<Vec<Pokemon>>;

    /// Find the record with the given catalog number.
    async fn find_by_no(&self, no: u32) -> StoreResult<Option<Pokemon>>;

    /// Find a record by its identifier.
    async fn find_by_id(&self, id: &RecordId) -> StoreResult<Option<Pokemon>>;

    /// Find the record with the given (lower-case) name.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Pokemon>>;

    /// Apply a partial update to the record with the given id.
    ///
    /// Only the fields present in the patch change. Uniqueness constraints
    /// apply to the patched values.
    async fn update_one(&self, id: &RecordId, patch: &PokemonPatch) -> StoreResult<()>;

    /// Delete the record with the given id.
    ///
    /// Returns the deleted count (0 or 1); callers check the count rather
    /// than reading first.
    async fn delete_one(&self, id: &RecordId) -> StoreResult<u64>;

    /// Delete every record in the catalog. Returns the deleted count.
    async fn delete_many(&self) -> StoreResult<u64>;

    /// Count records in the catalog.
    async fn count(&self) -> StoreResult<usize>;
}
