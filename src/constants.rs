//! `TigerStyle` Constants
//!
//! All limits use big-endian naming: `CATEGORY_SPECIFICS_UNIT_LIMIT`
//! Example: `CATALOG_PAGE_LIMIT_DEFAULT` (not `DEFAULT_PAGE_LIMIT`)
//!
//! Every constant includes units in the name:
//! - _`BYTES_MAX` for size limits
//! - _`SECS_DEFAULT` for time durations
//! - _`COUNT_DEFAULT/MAX` for quantity limits

// =============================================================================
// Catalog Limits
// =============================================================================

/// Default page size for catalog listings when the caller omits a limit.
///
/// Overridable at construction via `CatalogConfig` or the `DEFAULT_LIMIT`
/// environment variable.
pub const CATALOG_PAGE_LIMIT_DEFAULT: usize = 7;

/// Default offset for catalog listings when the caller omits one.
pub const CATALOG_PAGE_OFFSET_DEFAULT: usize = 0;

/// Maximum length of a pokemon name.
pub const POKEMON_NAME_BYTES_MAX: usize = 256;

// =============================================================================
// Record Identifiers
// =============================================================================

/// Length of a record identifier in lowercase hex characters.
///
/// Matches the document-store object-id shape (12 bytes, hex encoded).
pub const RECORD_ID_HEX_LEN: usize = 24;

// =============================================================================
// Seed Routine
// =============================================================================

/// Number of species fetched from the listing endpoint during a seed.
pub const SEED_FETCH_COUNT_DEFAULT: usize = 650;

/// Confirmation value returned by a successful seed.
pub const SEED_CONFIRMATION: &str = "seed executed";

// =============================================================================
// PokeAPI Provider
// =============================================================================

/// Default species-listing endpoint.
pub const POKEAPI_URL_DEFAULT: &str = "https://pokeapi.co/api/v2/pokemon";

/// Request timeout for listing fetches.
pub const POKEAPI_TIMEOUT_SECS_DEFAULT: u64 = 30;

// =============================================================================
// DST Limits
// =============================================================================

/// Maximum fault injection probability.
pub const DST_FAULT_PROBABILITY_MAX: f64 = 1.0;

/// Maximum number of bytes a `DeterministicRng` hands out per call.
pub const DST_RNG_BYTES_MAX: usize = 1024;
