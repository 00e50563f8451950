//! # Pokedex
//!
//! A Pokemon catalog over a pluggable document store, with deterministic
//! simulation testing and a PokeAPI seed routine.
//!
//! ## Features
//!
//! - **📇 Catalog CRUD**: create, paged listing, free-form lookup (number,
//!   id, or name), partial update, delete
//! - **🌱 One-shot Seeding**: wipe and rebuild the catalog from the public
//!   species listing in a single bulk insert
//! - **🔌 Capability Interfaces**: the store and the listing endpoint are
//!   traits; any document collection or HTTP stack can be substituted
//! - **🎯 Deterministic Testing**: seeded simulation backends with fault
//!   injection for reproducible failure scenarios
//!
//! ## Quick Start
//!
//! ```rust
//! use pokedex::catalog::{CatalogService, Pagination};
//! use pokedex::storage::NewPokemon;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a catalog over a simulated store (deterministic, seed 42)
//! let catalog = CatalogService::sim(42);
//!
//! // Names are stored lower-case regardless of input casing
//! let stored = catalog.create(NewPokemon::new("Pikachu", Some(25))).await?;
//! assert_eq!(stored.name, "pikachu");
//!
//! // Lookup by catalog number, record id, or name
//! let found = catalog.find_one("25").await?;
//! assert_eq!(found.id, stored.id);
//!
//! // Paged listing, ascending by catalog number
//! let page = catalog.find_all(Pagination::default()).await?;
//! assert_eq!(page.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │    CatalogService    │      │     SeedService      │
//! │ create/find/update/  │      │ wipe → fetch → bulk  │
//! │ remove               │      │ insert               │
//! └──────────┬───────────┘      └─────┬──────────┬─────┘
//!            │                        │          │
//!            ▼                        ▼          ▼
//! ┌──────────────────────────────────────┐  ┌────────────────────┐
//! │         CatalogStore (trait)         │  │ ListingProvider    │
//! │  SimCatalogStore │ any doc store     │  │ Sim │ PokeAPI      │
//! └──────────────────────────────────────┘  └────────────────────┘
//! ```
//!
//! The two services share nothing but the store: a catalog service and a
//! seed service constructed over clones of one `SimCatalogStore` operate
//! on the same collection.
//!
//! ## Simulation-First Philosophy
//!
//! > "If you're not testing with fault injection, you're not testing."
//!
//! Every external collaborator has a deterministic simulation
//! implementation. Same seed = same assigned ids = same fault schedule.
//! Replay a failing run with `DST_SEED=<seed> cargo test`.
//!
//! ## Feature Flags
//!
//! - `pokeapi` (default) - reqwest-backed [`PokeApiProvider`](pokeapi::PokeApiProvider)
//!
//! ## Known Seeding Hazard
//!
//! The seed routine deletes the whole catalog before fetching the listing
//! and the sequence is not atomic. A fetch or parse failure leaves the
//! catalog empty; see [`SeedService::execute_seed`](seed::SeedService::execute_seed).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod constants;
pub mod dst;
pub mod pokeapi;
pub mod seed;
pub mod storage;
pub mod telemetry;

// Re-export common types
pub use catalog::{CatalogConfig, CatalogError, CatalogService, Pagination};
pub use dst::{DeterministicRng, FaultConfig, FaultInjector, FaultType, SimConfig};
pub use pokeapi::{ListingError, ListingProvider, SimListingProvider, SpeciesEntry, SpeciesListing};
pub use seed::{SeedError, SeedService};
pub use storage::{
    CatalogStore, NewPokemon, Pokemon, PokemonPatch, RecordId, SimCatalogStore, StoreError,
};

#[cfg(feature = "pokeapi")]
pub use pokeapi::PokeApiProvider;
