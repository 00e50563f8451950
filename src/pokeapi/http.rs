//! `PokeApiProvider` - PokeAPI Integration
//!
//! `TigerStyle`: Production provider, feature-gated.
//!
//! Requires the `pokeapi` feature flag (enabled by default):
//! ```toml
//! pokedex = { version = "0.1", features = ["pokeapi"] }
//! ```

use std::time::Duration;

use async_trait::async_trait;

use super::{ListingError, ListingProvider, SpeciesListing};
use crate::constants::{POKEAPI_TIMEOUT_SECS_DEFAULT, POKEAPI_URL_DEFAULT};

// =============================================================================
// PokeApiProvider
// =============================================================================

/// PokeAPI species-listing provider.
///
/// `TigerStyle`: Production provider with explicit configuration.
///
/// # Example
///
/// ```rust,ignore
/// use pokedex::pokeapi::{ListingProvider, PokeApiProvider};
///
/// #[tokio::main]
/// async fn main() {
///     let provider = PokeApiProvider::new();
///     let listing = provider.fetch_listing(650).await.unwrap();
///     println!("{} species", listing.results.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiProvider {
    /// HTTP client
    client: reqwest::Client,
    /// Listing endpoint (overridable for testing/proxies)
    base_url: String,
    /// Per-request timeout
    timeout: Duration,
}

impl PokeApiProvider {
    /// Create a new provider against the public PokeAPI endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: POKEAPI_URL_DEFAULT.to_string(),
            timeout: Duration::from_secs(POKEAPI_TIMEOUT_SECS_DEFAULT),
        }
    }

    /// Set a custom endpoint URL (for testing or proxies).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the configured endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map a non-success HTTP status to a provider error.
    fn parse_error(status: reqwest::StatusCode, body: &str) -> ListingError {
        match status {
            reqwest::StatusCode::SERVICE_UNAVAILABLE | reqwest::StatusCode::BAD_GATEWAY => {
                ListingError::unavailable("listing endpoint unavailable")
            }
            reqwest::StatusCode::REQUEST_TIMEOUT | reqwest::StatusCode::GATEWAY_TIMEOUT => {
                ListingError::Timeout
            }
            _ => ListingError::invalid_response(format!("HTTP {status}: {body}")),
        }
    }
}

impl Default for PokeApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingProvider for PokeApiProvider {
    async fn fetch_listing(&self, limit: usize) -> Result<SpeciesListing, ListingError> {
        // Precondition
        debug_assert!(limit > 0, "limit must be positive");

        let url = format!("{}?limit={limit}", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ListingError::Timeout
                } else if e.is_connect() {
                    ListingError::network("connection failed")
                } else {
                    ListingError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &body));
        }

        response
            .json::<SpeciesListing>()
            .await
            .map_err(|e| ListingError::invalid_response(e.to_string()))
    }
}
