// kem/src/lib.rs

//! Security-level descriptors and buffer-level KEM operations.
//!
//! The KEM itself — lattice arithmetic, NTT, compression, sampling, the
//! CPA-secure PKE and the FO transform — is the external `ml-kem` engine,
//! consumed as an opaque capability. This crate binds each of the three
//! fixed parameter sets to that engine through the [`Level`] descriptor
//! trait and implements each operation exactly once, generically, over
//! caller-provided byte buffers. The flat per-level entry points the host
//! ABI requires live in `kemlink-ffi` and are thin instantiations of the
//! generic [`ops`].

mod error;
mod level;
pub mod ops;

pub use error::{Error, Result};
pub use level::{Level, MlKem1024, MlKem512, MlKem768};
