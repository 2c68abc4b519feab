//! Error types for the persistence layer.
//!
//! Two failure classes exist: the datastore could not be reached at all
//! ([`StoreError::Unavailable`]), or an individual operation against a live
//! connection failed ([`StoreError::Backend`]). No retries are performed at
//! this layer; a single failure surfaces immediately to the caller.

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The datastore connection could not be established or verified.
    ///
    /// Raised by connection acquisition and liveness probes. A failed
    /// attempt is never cached; the next call re-dials.
    #[error("datastore unavailable: {message}")]
    Unavailable {
        /// Underlying driver error detail.
        message: String,
    },

    /// An individual operation against the datastore failed.
    #[error("datastore operation failed: {message}")]
    Backend {
        /// Underlying driver error detail.
        message: String,
    },
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend {
            message: err.to_string(),
        }
    }
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = StoreError::Unavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "datastore unavailable: connection refused"
        );
    }

    #[test]
    fn test_backend_display() {
        let err = StoreError::Backend {
            message: "write concern error".to_string(),
        };
        assert!(err.to_string().starts_with("datastore operation failed"));
    }
}
