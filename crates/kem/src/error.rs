// kem/src/error.rs

//! Error handling for KEM boundary operations

use kemlink_rng::EntropyError;
use thiserror::Error as ThisError;

/// Result type for KEM boundary operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for KEM boundary operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A caller-supplied buffer has the wrong length for the level.
    #[error("{context}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The engine rejected an encapsulation request.
    #[error("{algorithm} encapsulation failed: {details}")]
    Encapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// The engine rejected a decapsulation request.
    #[error("{algorithm} decapsulation failed: {details}")]
    Decapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// The entropy source could not supply randomness.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] EntropyError),
}
