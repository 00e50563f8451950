//! Telemetry - Tracing Subscriber Setup
//!
//! `TigerStyle`: Optional, graceful. Never panics if a subscriber is
//! already installed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! pokedex::telemetry::init();
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG` - Filter directives (default: `info`)

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Idempotent: a second call (or a subscriber installed by the test
/// harness) is a no-op rather than an error.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
