//! PokeAPI Listing Provider - Unified Interface for Sim and Production
//!
//! `TigerStyle`: Simulation-first external-API abstraction.
//!
//! # Architecture
//!
//! ```text
//! ListingProvider (trait)
//! ├── SimListingProvider   (always available, deterministic)
//! └── PokeApiProvider      (feature: pokeapi)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pokedex::pokeapi::{ListingProvider, SimListingProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Simulation (always available, no external deps)
//!     let provider = SimListingProvider::with_seed(42);
//!
//!     let listing = provider.fetch_listing(10).await.unwrap();
//!     assert_eq!(listing.results.len(), 10);
//! }
//! ```

mod sim;

#[cfg(feature = "pokeapi")]
mod http;

pub use sim::SimListingProvider;

#[cfg(feature = "pokeapi")]
pub use http::PokeApiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for all listing providers.
///
/// `TigerStyle`: Explicit variants for all failure modes. No retry layer
/// sits above this; a fetch failure is terminal for the triggering call.
#[derive(Debug, Clone, Error)]
pub enum ListingError {
    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Network error
    #[error("network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Service unavailable
    #[error("service unavailable: {message}")]
    Unavailable {
        /// Reason for unavailability
        message: String,
    },

    /// Invalid response from the endpoint
    #[error("invalid response: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },
}

impl ListingError {
    /// Create a `Network` error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an `Unavailable` error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create an `InvalidResponse` error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// One entry of the species listing: a display name plus a reference URL
/// that encodes the catalog number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    /// Species display name
    pub name: String,
    /// Reference URL, e.g. `https://pokeapi.co/api/v2/pokemon/25/`
    pub url: String,
}

impl SpeciesEntry {
    /// Extract the catalog number from the reference URL.
    ///
    /// The number is the second-to-last `/`-separated segment (the listing
    /// URLs end with a trailing slash). Returns None when the segment is
    /// missing or not a number.
    ///
    /// # Example
    ///
    /// ```
    /// use pokedex::pokeapi::SpeciesEntry;
    ///
    /// let entry = SpeciesEntry {
    ///     name: "pikachu".to_string(),
    ///     url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
    /// };
    /// assert_eq!(entry.catalog_no(), Some(25));
    /// ```
    #[must_use]
    pub fn catalog_no(&self) -> Option<u32> {
        let segments: Vec<&str> = self.url.split('/').collect();
        if segments.len() < 2 {
            return None;
        }
        segments[segments.len() - 2].parse().ok()
    }
}

/// Listing body returned by the species endpoint:
/// `{ results: [{ name, url }] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesListing {
    /// Listed species entries
    pub results: Vec<SpeciesEntry>,
}

// =============================================================================
// ListingProvider Trait
// =============================================================================

/// Abstract species-listing endpoint.
///
/// `TigerStyle`: One unary GET, explicit errors, no retry.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Fetch the listing, bounded to `limit` entries.
    async fn fetch_listing(&self, limit: usize) -> Result<SpeciesListing, ListingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str) -> SpeciesEntry {
        SpeciesEntry {
            name: "pikachu".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_catalog_no_from_trailing_slash_url() {
        assert_eq!(
            entry("https://pokeapi.co/api/v2/pokemon/25/").catalog_no(),
            Some(25)
        );
        assert_eq!(
            entry("https://pokeapi.co/api/v2/pokemon/1/").catalog_no(),
            Some(1)
        );
    }

    #[test]
    fn test_catalog_no_missing_number() {
        // No trailing slash: the second-to-last segment is not a number.
        assert_eq!(entry("https://pokeapi.co/api/v2/pokemon/25").catalog_no(), None);
        assert_eq!(entry("https://pokeapi.co/api/v2/pokemon/").catalog_no(), None);
        assert_eq!(entry("pikachu").catalog_no(), None);
    }

    #[test]
    fn test_listing_body_shape() {
        let body = r#"{"results":[{"name":"pikachu","url":"https://pokeapi.co/api/v2/pokemon/25/"}]}"#;
        let listing: SpeciesListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.results.len(), 1);
        assert_eq!(listing.results[0].catalog_no(), Some(25));
    }
}
