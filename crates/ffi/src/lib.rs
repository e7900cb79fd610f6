// ffi/src/lib.rs

//! Flat `extern "C"` entry points for the kemlink boundary layer.
//!
//! The host resolves these symbols from a fixed function table at link
//! time, so each security level gets its own fixed-name entry point: five
//! operations times three levels, naming pattern `<level>_<op>`. Every
//! function is a thin instantiation of the generic operations in
//! `kemlink-kem`; the status code is `0` on success and nonzero on
//! failure, passed back untouched.
//!
//! # Buffer contract
//!
//! Callers supply raw pointers to buffers of exactly the published lengths
//! for the level (see `kemlink-params`). No bounds checking happens at
//! this boundary; a wrong-length or null pointer is undefined behavior.
//! Input and output buffers must not overlap within a single call.
//!
//! # Entropy posture
//!
//! Randomized operations draw from a process-global entropy source built
//! on first use. By default an exhausted secure-provider chain degrades to
//! an insecure generator with a `tracing` warning; building with the
//! `strict-entropy` feature makes those operations fail with
//! [`STATUS_ENTROPY_UNAVAILABLE`] instead.

use core::ffi::c_int;
use std::slice;
use std::sync::{Mutex, OnceLock, PoisonError};

use kemlink_kem::{ops, Error, Level, MlKem1024, MlKem512, MlKem768};
use kemlink_rng::{EntropyError, EntropySource, FallbackPolicy};

/// Operation completed successfully.
pub const STATUS_OK: c_int = 0;
/// The engine rejected the operation.
pub const STATUS_ENGINE_FAILURE: c_int = -1;
/// No secure entropy source is available (`strict-entropy` builds only).
pub const STATUS_ENTROPY_UNAVAILABLE: c_int = -2;

static ENTROPY: OnceLock<Mutex<EntropySource>> = OnceLock::new();

fn fallback_policy() -> FallbackPolicy {
    if cfg!(feature = "strict-entropy") {
        FallbackPolicy::Refuse
    } else {
        FallbackPolicy::Degrade
    }
}

fn with_entropy<T>(f: impl FnOnce(&mut EntropySource) -> T) -> T {
    let source = ENTROPY.get_or_init(|| Mutex::new(EntropySource::with_policy(fallback_policy())));
    let mut guard = source.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

fn status(result: Result<(), Error>) -> c_int {
    match result {
        Ok(()) => STATUS_OK,
        Err(Error::Entropy(EntropyError::NoSecureSource)) => STATUS_ENTROPY_UNAVAILABLE,
        Err(_) => STATUS_ENGINE_FAILURE,
    }
}

// Generic bodies, instantiated once per level by the extern wrappers below.

unsafe fn keypair<L: Level>(pk: *mut u8, sk: *mut u8) -> c_int {
    let pk = slice::from_raw_parts_mut(pk, L::PUBLIC_KEY_BYTES);
    let sk = slice::from_raw_parts_mut(sk, L::SECRET_KEY_BYTES);
    status(with_entropy(|entropy| ops::keypair::<L>(entropy, pk, sk)))
}

unsafe fn keypair_seeded<L: Level>(pk: *mut u8, sk: *mut u8, seed: *const u8) -> c_int {
    let pk = slice::from_raw_parts_mut(pk, L::PUBLIC_KEY_BYTES);
    let sk = slice::from_raw_parts_mut(sk, L::SECRET_KEY_BYTES);
    let seed = slice::from_raw_parts(seed, L::KEYPAIR_SEED_BYTES);
    status(ops::keypair_seeded::<L>(seed, pk, sk))
}

unsafe fn enc<L: Level>(ct: *mut u8, ss: *mut u8, pk: *const u8) -> c_int {
    let ct = slice::from_raw_parts_mut(ct, L::CIPHERTEXT_BYTES);
    let ss = slice::from_raw_parts_mut(ss, L::SHARED_SECRET_BYTES);
    let pk = slice::from_raw_parts(pk, L::PUBLIC_KEY_BYTES);
    status(with_entropy(|entropy| {
        ops::encapsulate::<L>(entropy, pk, ct, ss)
    }))
}

unsafe fn enc_seeded<L: Level>(ct: *mut u8, ss: *mut u8, pk: *const u8, seed: *const u8) -> c_int {
    let ct = slice::from_raw_parts_mut(ct, L::CIPHERTEXT_BYTES);
    let ss = slice::from_raw_parts_mut(ss, L::SHARED_SECRET_BYTES);
    let pk = slice::from_raw_parts(pk, L::PUBLIC_KEY_BYTES);
    let seed = slice::from_raw_parts(seed, L::ENCAPS_SEED_BYTES);
    status(ops::encapsulate_seeded::<L>(pk, seed, ct, ss))
}

unsafe fn dec<L: Level>(ss: *mut u8, ct: *const u8, sk: *const u8) -> c_int {
    let ss = slice::from_raw_parts_mut(ss, L::SHARED_SECRET_BYTES);
    let ct = slice::from_raw_parts(ct, L::CIPHERTEXT_BYTES);
    let sk = slice::from_raw_parts(sk, L::SECRET_KEY_BYTES);
    status(ops::decapsulate::<L>(ct, sk, ss))
}

/* ----------------------------------------------- */
/*                   ML-KEM-512                    */
/* ----------------------------------------------- */

/// # Safety
/// `pk` and `sk` must point to 800 and 1632 writable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem512_keypair(pk: *mut u8, sk: *mut u8) -> c_int {
    keypair::<MlKem512>(pk, sk)
}

/// # Safety
/// `pk`/`sk` as for `mlkem512_keypair`; `seed` must point to 64 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem512_keypair_seeded(
    pk: *mut u8,
    sk: *mut u8,
    seed: *const u8,
) -> c_int {
    keypair_seeded::<MlKem512>(pk, sk, seed)
}

/// # Safety
/// `ct` and `ss` must point to 768 and 32 writable bytes; `pk` to 800 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem512_enc(ct: *mut u8, ss: *mut u8, pk: *const u8) -> c_int {
    enc::<MlKem512>(ct, ss, pk)
}

/// # Safety
/// As for `mlkem512_enc`; `seed` must point to 32 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem512_enc_seeded(
    ct: *mut u8,
    ss: *mut u8,
    pk: *const u8,
    seed: *const u8,
) -> c_int {
    enc_seeded::<MlKem512>(ct, ss, pk, seed)
}

/// # Safety
/// `ss` must point to 32 writable bytes; `ct` and `sk` to 768 and 1632 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem512_dec(ss: *mut u8, ct: *const u8, sk: *const u8) -> c_int {
    dec::<MlKem512>(ss, ct, sk)
}

/* ----------------------------------------------- */
/*                   ML-KEM-768                    */
/* ----------------------------------------------- */

/// # Safety
/// `pk` and `sk` must point to 1184 and 2400 writable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem768_keypair(pk: *mut u8, sk: *mut u8) -> c_int {
    keypair::<MlKem768>(pk, sk)
}

/// # Safety
/// `pk`/`sk` as for `mlkem768_keypair`; `seed` must point to 64 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem768_keypair_seeded(
    pk: *mut u8,
    sk: *mut u8,
    seed: *const u8,
) -> c_int {
    keypair_seeded::<MlKem768>(pk, sk, seed)
}

/// # Safety
/// `ct` and `ss` must point to 1088 and 32 writable bytes; `pk` to 1184 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem768_enc(ct: *mut u8, ss: *mut u8, pk: *const u8) -> c_int {
    enc::<MlKem768>(ct, ss, pk)
}

/// # Safety
/// As for `mlkem768_enc`; `seed` must point to 32 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem768_enc_seeded(
    ct: *mut u8,
    ss: *mut u8,
    pk: *const u8,
    seed: *const u8,
) -> c_int {
    enc_seeded::<MlKem768>(ct, ss, pk, seed)
}

/// # Safety
/// `ss` must point to 32 writable bytes; `ct` and `sk` to 1088 and 2400 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem768_dec(ss: *mut u8, ct: *const u8, sk: *const u8) -> c_int {
    dec::<MlKem768>(ss, ct, sk)
}

/* ----------------------------------------------- */
/*                   ML-KEM-1024                   */
/* ----------------------------------------------- */

/// # Safety
/// `pk` and `sk` must point to 1568 and 3168 writable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem1024_keypair(pk: *mut u8, sk: *mut u8) -> c_int {
    keypair::<MlKem1024>(pk, sk)
}

/// # Safety
/// `pk`/`sk` as for `mlkem1024_keypair`; `seed` must point to 64 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem1024_keypair_seeded(
    pk: *mut u8,
    sk: *mut u8,
    seed: *const u8,
) -> c_int {
    keypair_seeded::<MlKem1024>(pk, sk, seed)
}

/// # Safety
/// `ct` and `ss` must point to 1568 and 32 writable bytes; `pk` to 1568 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem1024_enc(ct: *mut u8, ss: *mut u8, pk: *const u8) -> c_int {
    enc::<MlKem1024>(ct, ss, pk)
}

/// # Safety
/// As for `mlkem1024_enc`; `seed` must point to 32 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem1024_enc_seeded(
    ct: *mut u8,
    ss: *mut u8,
    pk: *const u8,
    seed: *const u8,
) -> c_int {
    enc_seeded::<MlKem1024>(ct, ss, pk, seed)
}

/// # Safety
/// `ss` must point to 32 writable bytes; `ct` and `sk` to 1568 and 3168 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mlkem1024_dec(ss: *mut u8, ct: *const u8, sk: *const u8) -> c_int {
    dec::<MlKem1024>(ss, ct, sk)
}
