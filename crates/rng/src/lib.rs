//! Host entropy sourcing for the kemlink boundary layer.
//!
//! The execution environments this boundary targets expose a secure RNG
//! through different interfaces depending on host version and embedding
//! context. Rather than assuming one interface, an [`EntropySource`] probes
//! an ordered chain of [`EntropyProvider`] candidates once at construction
//! and uses the first one available. If no secure provider exists at all,
//! the source either degrades to a non-cryptographic generator with a
//! visible warning or refuses outright, depending on [`FallbackPolicy`].
//!
//! The source is an explicit capability: consumers receive it as an
//! argument, and tests can substitute their own provider chains via
//! [`EntropySource::from_providers`].

mod error;
mod provider;
mod source;

pub use error::EntropyError;
pub use provider::{
    ClockSeededPrng, DevUrandom, EntropyProvider, OsBackedRandom, SystemRandom,
};
pub use source::{default_chain, EntropySource, FallbackPolicy};
