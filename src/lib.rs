//! # kemlink
//!
//! A boundary layer exposing the ML-KEM post-quantum key-encapsulation
//! mechanism (FIPS 203) at three security levels through a fixed, flat
//! calling surface, together with the entropy-sourcing chain that supplies
//! the mechanism with host randomness.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - [`kemlink-params`]: fixed per-level buffer lengths
//! - [`kemlink-rng`]: the host entropy source and its fallback chain
//! - [`kemlink-kem`]: level descriptors and the buffer-level operations
//!
//! The flat `extern "C"` entry points live in `kemlink-ffi`, which is built
//! as a `cdylib` and is not re-exported here.
//!
//! ## Usage
//!
//! ```
//! use kemlink::prelude::*;
//!
//! let mut entropy = EntropySource::new();
//! let mut pk = [0u8; kemlink::params::MLKEM768.public_key_size];
//! let mut sk = [0u8; kemlink::params::MLKEM768.secret_key_size];
//! let mut ct = [0u8; kemlink::params::MLKEM768.ciphertext_size];
//! let mut ss_a = [0u8; kemlink::params::MLKEM768.shared_secret_size];
//! let mut ss_b = [0u8; kemlink::params::MLKEM768.shared_secret_size];
//!
//! ops::keypair::<MlKem768>(&mut entropy, &mut pk, &mut sk).unwrap();
//! ops::encapsulate::<MlKem768>(&mut entropy, &pk, &mut ct, &mut ss_a).unwrap();
//! ops::decapsulate::<MlKem768>(&ct, &sk, &mut ss_b).unwrap();
//! assert_eq!(ss_a, ss_b);
//! ```

// Re-exports
pub use kemlink_kem as kem;
pub use kemlink_params as params;
pub use kemlink_rng as rng;

/// Common imports for kemlink users
pub mod prelude {
    pub use kemlink_kem::{ops, Error, Level, MlKem1024, MlKem512, MlKem768};
    pub use kemlink_rng::{EntropyError, EntropyProvider, EntropySource, FallbackPolicy};
}
