//! Store Errors
//!
//! `TigerStyle`: Explicit error types with context.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Uniqueness-constraint violation, carrying the offending field and
    /// value. The one error kind callers are expected to distinguish.
    #[error("duplicate key on {field}: {value}")]
    DuplicateKey {
        /// Indexed field that collided (`name` or `no`)
        field: String,
        /// Colliding value
        value: String,
    },

    /// Connection error
    #[error("connection error: {message}")]
    Connection {
        /// Connection error message
        message: String,
    },

    /// Query error
    #[error("query error: {message}")]
    Query {
        /// Query error message
        message: String,
    },

    /// Simulated fault (for DST)
    #[error("simulated fault: {fault}")]
    SimulatedFault {
        /// Type of simulated fault
        fault: String,
    },

    /// Internal error
    #[error("internal error: {message}")]
    Internal {
        /// Internal error message
        message: String,
    },
}

impl StoreError {
    /// Create a `DuplicateKey` error.
    pub fn duplicate_key(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::DuplicateKey {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a `Connection` error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a `Query` error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a `SimulatedFault` error.
    pub fn simulated_fault(fault: impl Into<String>) -> Self {
        Self::SimulatedFault {
            fault: fault.into(),
        }
    }

    /// Create an `Internal` error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True if this is a uniqueness-constraint violation.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = StoreError::duplicate_key("name", "pikachu");
        assert_eq!(err.to_string(), "duplicate key on name: pikachu");
        assert!(err.is_duplicate_key());
    }

    #[test]
    fn test_other_errors_not_duplicate() {
        assert!(!StoreError::connection("refused").is_duplicate_key());
        assert!(!StoreError::query("bad filter").is_duplicate_key());
    }
}
