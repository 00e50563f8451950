//! `SimCatalogStore` - In-Memory Document Collection for Testing
//!
//! `TigerStyle`: Deterministic testing with fault injection.
//!
//! # Simulation-First
//!
//! This file follows simulation-first development:
//! 1. Tests are written FIRST (below)
//! 2. Implementation follows to make tests pass
//! 3. DST integration enables fault injection
//!
//! The collection models a MongoDB-like document store: object-id shaped
//! identifiers, non-sparse unique indexes on `name` and `no`, a `__v`-style
//! metadata counter stripped by the paged-find projection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;

use crate::dst::{DeterministicRng, FaultConfig, FaultInjector, SimConfig};

use super::error::{StoreError, StoreResult};
use super::record::{NewPokemon, Pokemon, PokemonPatch, RecordId};
use super::store::CatalogStore;

// =============================================================================
// SimCatalogStore
// =============================================================================

/// In-memory catalog store for testing.
///
/// `TigerStyle`:
/// - Deterministic via `DeterministicRng` (id assignment)
/// - Fault injection via `FaultInjector`
/// - Thread-safe with `RwLock`
/// - `Clone` shares the same underlying collection, so a catalog service
///   and a seed service can operate on one store
#[derive(Debug, Clone)]
pub struct SimCatalogStore {
    /// Stored records indexed by id
    collection: Arc<RwLock<HashMap<RecordId, Pokemon>>>,
    /// Fault injector for simulating failures
    fault_injector: Arc<FaultInjector>,
    /// Deterministic RNG for id assignment
    rng: Arc<Mutex<DeterministicRng>>,
}

impl SimCatalogStore {
    /// Create a new `SimCatalogStore` with the given config.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        let mut rng = DeterministicRng::new(config.seed());
        let fault_rng = rng.fork();

        Self {
            collection: Arc::new(RwLock::new(HashMap::new())),
            fault_injector: Arc::new(FaultInjector::new(fault_rng)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Create a new `SimCatalogStore` with a shared fault injector.
    ///
    /// Use this when several sim collaborators (store and listing provider)
    /// should draw from one fault schedule.
    #[must_use]
    pub fn with_fault_injector(config: SimConfig, fault_injector: Arc<FaultInjector>) -> Self {
        let rng = DeterministicRng::new(config.seed());

        Self {
            collection: Arc::new(RwLock::new(HashMap::new())),
            fault_injector,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Add fault configuration.
    ///
    /// Note: Creates the store with the fault registered. Only callable
    /// before the store has been cloned or shared.
    ///
    /// # Panics
    /// Panics if the fault injector is already shared.
    #[must_use]
    pub fn with_faults(mut self, config: FaultConfig) -> Self {
        Arc::get_mut(&mut self.fault_injector)
            .expect("cannot add faults after store is shared")
            .register(config);
        self
    }

    /// Get fault injector for inspection.
    #[must_use]
    pub fn fault_injector(&self) -> &Arc<FaultInjector> {
        &self.fault_injector
    }

    /// Get record count (for testing).
    ///
    /// # Panics
    /// Panics if the collection lock is poisoned.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.collection.read().unwrap().len()
    }

    /// Check if a fault should be injected for an operation.
    fn maybe_inject_fault(&self, operation: &str) -> StoreResult<()> {
        if let Some(fault_type) = self.fault_injector.should_inject(operation) {
            Err(StoreError::simulated_fault(format!(
                "{} during {operation}",
                fault_type.as_str()
            )))
        } else {
            Ok(())
        }
    }
}

/// Check the unique indexes on `name` and `no` against the collection.
///
/// `exclude` skips one record (the one being updated). Absent catalog
/// numbers participate in the index: two records without a `no` conflict,
/// as under a non-sparse unique index.
fn check_unique(
    collection: &HashMap<RecordId, Pokemon>,
    name: &str,
    no: Option<u32>,
    exclude: Option<&RecordId>,
) -> StoreResult<()> {
    for (id, existing) in collection {
        if exclude == Some(id) {
            continue;
        }
        if existing.name == name {
            return Err(StoreError::duplicate_key("name", name));
        }
        if existing.no == no {
            return Err(StoreError::duplicate_key("no", display_no(no)));
        }
    }
    Ok(())
}

fn display_no(no: Option<u32>) -> String {
    no.map_or_else(|| "null".to_string(), |n| n.to_string())
}

#[async_trait]
impl CatalogStore for SimCatalogStore {
    #[tracing::instrument(skip(self, record), fields(name = %record.name))]
    async fn insert_one(&self, record: NewPokemon) -> StoreResult<Pokemon> {
        // Check for faults
        self.maybe_inject_fault("insert_one")?;

        // Precondition
        debug_assert!(!record.name.is_empty(), "record must have a name");

        let mut collection = self.collection.write().unwrap();
        check_unique(&collection, &record.name, record.no, None)?;

        let id = {
            let mut rng = self.rng.lock().unwrap();
            RecordId::generate(&mut rng)
        };

        let stored = Pokemon {
            id: id.clone(),
            name: record.name,
            no: record.no,
            version: Some(0),
        };
        collection.insert(id, stored.clone());

        Ok(stored)
    }

    #[tracing::instrument(skip(self, records), fields(count = records.len()))]
    async fn insert_many(&self, records: Vec<NewPokemon>) -> StoreResult<usize> {
        // Check for faults
        self.maybe_inject_fault("insert_many")?;

        let mut collection = self.collection.write().unwrap();

        // Validate the whole batch before committing anything: against the
        // existing collection and against earlier entries in the batch.
        let mut staged: Vec<Pokemon> = Vec::with_capacity(records.len());
        for record in records {
            check_unique(&collection, &record.name, record.no, None)?;
            for earlier in &staged {
                if earlier.name == record.name {
                    return Err(StoreError::duplicate_key("name", record.name));
                }
                if earlier.no == record.no {
                    return Err(StoreError::duplicate_key("no", display_no(record.no)));
                }
            }

            let id = {
                let mut rng = self.rng.lock().unwrap();
                RecordId::generate(&mut rng)
            };
            staged.push(Pokemon {
                id,
                name: record.name,
                no: record.no,
                version: Some(0),
            });
        }

        let inserted = staged.len();
        for stored in staged {
            collection.insert(stored.id.clone(), stored);
        }

        Ok(inserted)
    }

    #[tracing::instrument(skip(self))]
    async fn find_page(&self, limit: usize, offset: usize) -> StoreResult<Vec<Pokemon>> {
        // Check for faults
        self.maybe_inject_fault("find_page")?;

        let collection = self.collection.read().unwrap();

        let mut results: Vec<Pokemon> = collection.values().cloned().collect();

        // Ascending by catalog number; absent numbers sort first, ties
        // broken by name for determinism.
        results.sort_by(|a, b| a.no.cmp(&b.no).then_with(|| a.name.cmp(&b.name)));

        // Apply offset, limit, and the metadata projection
        let results = results
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|mut record| {
                record.version = None;
                record
            })
            .collect();

        Ok(results)
    }

    async fn find_by_no(&self, no: u32) -> StoreResult<Option<Pokemon>> {
        // Check for faults
        self.maybe_inject_fault("find_by_no")?;

        let collection = self.collection.read().unwrap();
        Ok(collection.values().find(|r| r.no == Some(no)).cloned())
    }

    async fn find_by_id(&self, id: &RecordId) -> StoreResult<Option<Pokemon>> {
        // Check for faults
        self.maybe_inject_fault("find_by_id")?;

        let collection = self.collection.read().unwrap();
        Ok(collection.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Pokemon>> {
        // Check for faults
        self.maybe_inject_fault("find_by_name")?;

        let collection = self.collection.read().unwrap();
        Ok(collection.values().find(|r| r.name == name).cloned())
    }

    #[tracing::instrument(skip(self, patch))]
    async fn update_one(&self, id: &RecordId, patch: &PokemonPatch) -> StoreResult<()> {
        // Check for faults
        self.maybe_inject_fault("update_one")?;

        let mut collection = self.collection.write().unwrap();

        // Matching zero documents is not an error (the store reports a zero
        // matched count; nothing to apply).
        let Some(current) = collection.get(id) else {
            return Ok(());
        };

        let name = patch.name.clone().unwrap_or_else(|| current.name.clone());
        let no = patch.no.or(current.no);
        check_unique(&collection, &name, no, Some(id))?;

        if let Some(record) = collection.get_mut(id) {
            record.name = name;
            record.no = no;
        }

        Ok(())
    }

    async fn delete_one(&self, id: &RecordId) -> StoreResult<u64> {
        // Check for faults
        self.maybe_inject_fault("delete_one")?;

        let mut collection = self.collection.write().unwrap();
        Ok(u64::from(collection.remove(id).is_some()))
    }

    async fn delete_many(&self) -> StoreResult<u64> {
        // Check for faults
        self.maybe_inject_fault("delete_many")?;

        let mut collection = self.collection.write().unwrap();
        let deleted = collection.len() as u64;
        collection.clear();
        Ok(deleted)
    }

    async fn count(&self) -> StoreResult<usize> {
        // Check for faults
        self.maybe_inject_fault("count")?;

        let collection = self.collection.read().unwrap();
        Ok(collection.len())
    }
}

// =============================================================================
// TESTS - Written FIRST (Simulation-First)
// =============================================================================
