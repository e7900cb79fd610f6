//! Error handling for entropy sourcing

use thiserror::Error;

/// Error type for entropy-sourcing operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// No secure provider is available and the fallback policy refuses to
    /// degrade to the insecure generator.
    #[error("no secure entropy source available and the fallback policy refuses degradation")]
    NoSecureSource,

    /// Every provider in the chain was attempted once and failed.
    #[error("entropy provider chain exhausted")]
    Exhausted,

    /// A single provider failed to produce bytes.
    #[error("entropy provider `{provider}` failed")]
    Provider { provider: &'static str },
}
