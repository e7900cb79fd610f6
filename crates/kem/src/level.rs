// kem/src/level.rs

//! Security-level descriptors.
//!
//! A [`Level`] is a compile-time descriptor tying the fixed buffer lengths
//! of one parameter set to the engine type implementing it. All operation
//! logic is generic over this trait; the three concrete descriptors exist
//! so the boundary can instantiate the generic operations once per level.

use kemlink_params as params;
use ml_kem::KemCore;

/// Compile-time descriptor for one ML-KEM parameter set.
pub trait Level {
    /// Parameter-set name, e.g. `"ML-KEM-768"`.
    const NAME: &'static str;

    /// Encapsulation (public) key length in bytes.
    const PUBLIC_KEY_BYTES: usize;

    /// Expanded decapsulation (secret) key length in bytes.
    const SECRET_KEY_BYTES: usize;

    /// Ciphertext length in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Shared-secret length in bytes.
    const SHARED_SECRET_BYTES: usize;

    /// Key-generation seed (`d || z`) length in bytes.
    const KEYPAIR_SEED_BYTES: usize;

    /// Encapsulation seed (`m`) length in bytes.
    const ENCAPS_SEED_BYTES: usize;

    /// The engine parameter set this level forwards to.
    type Engine: KemCore;
}

/// ML-KEM-512 (security category 1).
pub struct MlKem512;

/// ML-KEM-768 (security category 3).
pub struct MlKem768;

/// ML-KEM-1024 (security category 5).
pub struct MlKem1024;

impl Level for MlKem512 {
    const NAME: &'static str = params::MLKEM512.name;
    const PUBLIC_KEY_BYTES: usize = params::MLKEM512.public_key_size;
    const SECRET_KEY_BYTES: usize = params::MLKEM512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = params::MLKEM512.ciphertext_size;
    const SHARED_SECRET_BYTES: usize = params::MLKEM512.shared_secret_size;
    const KEYPAIR_SEED_BYTES: usize = params::MLKEM512.keypair_seed_size;
    const ENCAPS_SEED_BYTES: usize = params::MLKEM512.encaps_seed_size;
    type Engine = ml_kem::MlKem512;
}

impl Level for MlKem768 {
    const NAME: &'static str = params::MLKEM768.name;
    const PUBLIC_KEY_BYTES: usize = params::MLKEM768.public_key_size;
    const SECRET_KEY_BYTES: usize = params::MLKEM768.secret_key_size;
    const CIPHERTEXT_BYTES: usize = params::MLKEM768.ciphertext_size;
    const SHARED_SECRET_BYTES: usize = params::MLKEM768.shared_secret_size;
    const KEYPAIR_SEED_BYTES: usize = params::MLKEM768.keypair_seed_size;
    const ENCAPS_SEED_BYTES: usize = params::MLKEM768.encaps_seed_size;
    type Engine = ml_kem::MlKem768;
}

impl Level for MlKem1024 {
    const NAME: &'static str = params::MLKEM1024.name;
    const PUBLIC_KEY_BYTES: usize = params::MLKEM1024.public_key_size;
    const SECRET_KEY_BYTES: usize = params::MLKEM1024.secret_key_size;
    const CIPHERTEXT_BYTES: usize = params::MLKEM1024.ciphertext_size;
    const SHARED_SECRET_BYTES: usize = params::MLKEM1024.shared_secret_size;
    const KEYPAIR_SEED_BYTES: usize = params::MLKEM1024.keypair_seed_size;
    const ENCAPS_SEED_BYTES: usize = params::MLKEM1024.encaps_seed_size;
    type Engine = ml_kem::MlKem1024;
}
