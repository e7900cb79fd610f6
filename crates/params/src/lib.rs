//! Fixed parameter-set constants for the kemlink boundary layer.
//!
//! Every buffer crossing the boundary has a length that is constant per
//! security level and known at compile time. The tables here are the single
//! source of truth for those lengths; the boundary performs no length
//! inference at runtime.

#![no_std]

/// Byte lengths for one ML-KEM parameter set.
///
/// One descriptor type covers all three levels; only the values differ.
/// The seed lengths are fixed by FIPS 203: key generation consumes the
/// 64-byte `d || z` pair, encapsulation consumes the 32-byte message `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKemParams {
    /// Human-readable parameter-set name
    pub name: &'static str,

    /// Module dimension (k)
    pub k: usize,

    /// Size of the encapsulation (public) key in bytes
    pub public_key_size: usize,

    /// Size of the expanded decapsulation (secret) key in bytes
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,

    /// Size of the key-generation seed (`d || z`) in bytes
    pub keypair_seed_size: usize,

    /// Size of the encapsulation seed (`m`) in bytes
    pub encaps_seed_size: usize,
}

/// ML-KEM-512 parameters (security category 1)
pub const MLKEM512: MlKemParams = MlKemParams {
    name: "ML-KEM-512",
    k: 2,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: 32,
    keypair_seed_size: 64,
    encaps_seed_size: 32,
};

/// ML-KEM-768 parameters (security category 3)
pub const MLKEM768: MlKemParams = MlKemParams {
    name: "ML-KEM-768",
    k: 3,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: 32,
    keypair_seed_size: 64,
    encaps_seed_size: 32,
};

/// ML-KEM-1024 parameters (security category 5)
pub const MLKEM1024: MlKemParams = MlKemParams {
    name: "ML-KEM-1024",
    k: 4,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: 32,
    keypair_seed_size: 64,
    encaps_seed_size: 32,
};

/// All parameter sets, ordered by security category.
pub const ALL: [MlKemParams; 3] = [MLKEM512, MLKEM768, MLKEM1024];
