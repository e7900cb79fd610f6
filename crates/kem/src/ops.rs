// kem/src/ops.rs

//! The five boundary operations, written once, generically over [`Level`].
//!
//! Each operation is a direct forward into the external engine; the only
//! logic here is moving bytes between caller buffers and the engine's
//! fixed-size encodings. The randomized operations are the derandomized
//! ones layered over a seed drawn from the injected [`EntropySource`],
//! which is exactly how the engine itself layers them.
//!
//! Callers own every buffer; nothing is retained across calls. Slice
//! lengths are validated here and reported as [`Error::InvalidLength`];
//! the FFI layer constructs exact-length slices from the published
//! constants and never hits that branch.

use kemlink_rng::EntropySource;
use ml_kem::kem::Decapsulate;
use ml_kem::{Ciphertext, EncapsulateDeterministic, Encoded, EncodedSizeUser, KemCore, B32};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::level::Level;

type EngineEk<L> = <<L as Level>::Engine as KemCore>::EncapsulationKey;
type EngineDk<L> = <<L as Level>::Engine as KemCore>::DecapsulationKey;

fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            context,
            expected,
            actual,
        })
    }
}

/// Generate a keypair, drawing the key-generation seed from `entropy`.
pub fn keypair<L: Level>(
    entropy: &mut EntropySource,
    pk_out: &mut [u8],
    sk_out: &mut [u8],
) -> Result<()> {
    // d || z, 32 bytes each, fixed across levels by FIPS 203
    let mut coins = [0u8; 64];
    entropy.fill(&mut coins)?;
    let result = keypair_seeded::<L>(&coins, pk_out, sk_out);
    coins.zeroize();
    result
}

/// Generate a keypair deterministically from a caller-supplied `d || z`
/// seed. Equal seeds produce byte-identical keypairs.
pub fn keypair_seeded<L: Level>(seed: &[u8], pk_out: &mut [u8], sk_out: &mut [u8]) -> Result<()> {
    check_len("keypair seed", L::KEYPAIR_SEED_BYTES, seed.len())?;
    check_len("public key", L::PUBLIC_KEY_BYTES, pk_out.len())?;
    check_len("secret key", L::SECRET_KEY_BYTES, sk_out.len())?;

    let mut d = [0u8; 32];
    let mut z = [0u8; 32];
    d.copy_from_slice(&seed[..32]);
    z.copy_from_slice(&seed[32..]);
    let (dk, ek) = L::Engine::generate_deterministic(&B32::from(d), &B32::from(z));
    d.zeroize();
    z.zeroize();

    pk_out.copy_from_slice(&ek.as_bytes());
    let mut dk_bytes = dk.as_bytes();
    sk_out.copy_from_slice(&dk_bytes);
    dk_bytes.zeroize();
    Ok(())
}

/// Encapsulate to `pk`, drawing the encapsulation seed from `entropy`.
pub fn encapsulate<L: Level>(
    entropy: &mut EntropySource,
    pk: &[u8],
    ct_out: &mut [u8],
    ss_out: &mut [u8],
) -> Result<()> {
    let mut m = [0u8; 32];
    entropy.fill(&mut m)?;
    let result = encapsulate_seeded::<L>(pk, &m, ct_out, ss_out);
    m.zeroize();
    result
}

/// Encapsulate deterministically from a caller-supplied 32-byte seed.
/// Output is a deterministic function of `(pk, seed)`.
pub fn encapsulate_seeded<L: Level>(
    pk: &[u8],
    seed: &[u8],
    ct_out: &mut [u8],
    ss_out: &mut [u8],
) -> Result<()> {
    check_len("public key", L::PUBLIC_KEY_BYTES, pk.len())?;
    check_len("encapsulation seed", L::ENCAPS_SEED_BYTES, seed.len())?;
    check_len("ciphertext", L::CIPHERTEXT_BYTES, ct_out.len())?;
    check_len("shared secret", L::SHARED_SECRET_BYTES, ss_out.len())?;

    let pk_encoded =
        Encoded::<EngineEk<L>>::try_from(pk).map_err(|_| Error::InvalidLength {
            context: "public key",
            expected: L::PUBLIC_KEY_BYTES,
            actual: pk.len(),
        })?;
    let ek = EngineEk::<L>::from_bytes(&pk_encoded);

    let mut m = [0u8; 32];
    m.copy_from_slice(seed);
    let result = ek.encapsulate_deterministic(&B32::from(m));
    m.zeroize();
    let (ct, mut ss) = result.map_err(|_| Error::Encapsulation {
        algorithm: L::NAME,
        details: "engine rejected the encapsulation request",
    })?;

    ct_out.copy_from_slice(&ct);
    ss_out.copy_from_slice(&ss);
    ss.zeroize();
    Ok(())
}

/// Recover the shared secret from `ct` under `sk`.
///
/// A mangled ciphertext is implicitly rejected by the engine: the call
/// still succeeds and yields a pseudorandom shared secret that will not
/// match the encapsulated one. This layer does not (and cannot) tell the
/// two cases apart.
pub fn decapsulate<L: Level>(ct: &[u8], sk: &[u8], ss_out: &mut [u8]) -> Result<()> {
    check_len("ciphertext", L::CIPHERTEXT_BYTES, ct.len())?;
    check_len("secret key", L::SECRET_KEY_BYTES, sk.len())?;
    check_len("shared secret", L::SHARED_SECRET_BYTES, ss_out.len())?;

    let mut sk_encoded =
        Encoded::<EngineDk<L>>::try_from(sk).map_err(|_| Error::InvalidLength {
            context: "secret key",
            expected: L::SECRET_KEY_BYTES,
            actual: sk.len(),
        })?;
    let dk = EngineDk::<L>::from_bytes(&sk_encoded);
    sk_encoded.zeroize();

    let ct_encoded =
        Ciphertext::<L::Engine>::try_from(ct).map_err(|_| Error::InvalidLength {
            context: "ciphertext",
            expected: L::CIPHERTEXT_BYTES,
            actual: ct.len(),
        })?;

    let mut ss = dk.decapsulate(&ct_encoded).map_err(|_| Error::Decapsulation {
        algorithm: L::NAME,
        details: "engine rejected the decapsulation request",
    })?;
    ss_out.copy_from_slice(&ss);
    ss.zeroize();
    Ok(())
}
