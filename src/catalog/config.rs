//! Catalog Configuration
//!
//! `TigerStyle`: Sensible defaults, builder pattern, explicit over implicit.

use std::env;

use crate::constants::CATALOG_PAGE_LIMIT_DEFAULT;

// =============================================================================
// CatalogConfig
// =============================================================================

/// Configuration for the catalog service.
///
/// `TigerStyle`:
/// - Sensible defaults via Default impl
/// - Builder pattern for customization
/// - All fields public for transparency
///
/// # Example
///
/// ```rust
/// use pokedex::catalog::CatalogConfig;
///
/// let config = CatalogConfig::default().with_default_limit(20);
/// assert_eq!(config.default_limit, 20);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogConfig {
    /// Maximum records returned by a listing when the caller omits a limit.
    ///
    /// Default: `CATALOG_PAGE_LIMIT_DEFAULT`
    pub default_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_limit: CATALOG_PAGE_LIMIT_DEFAULT,
        }
    }
}

impl CatalogConfig {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default page size.
    ///
    /// # Panics
    /// Panics if limit is zero.
    #[must_use]
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        // Precondition
        assert!(limit > 0, "default_limit must be positive");
        self.default_limit = limit;
        self
    }

    /// Create a config from the `DEFAULT_LIMIT` env var.
    ///
    /// Falls back to the built-in default when the variable is absent or
    /// not a positive integer (a warning is logged, the service still
    /// starts).
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("DEFAULT_LIMIT") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(limit) if limit > 0 => Self::default().with_default_limit(limit),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "DEFAULT_LIMIT is not a positive integer, using default"
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
