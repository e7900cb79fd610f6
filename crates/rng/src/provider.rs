//! Entropy provider candidates.
//!
//! Each provider is one way of reaching randomness on the host. The default
//! chain in [`crate::default_chain`] orders them from the preferred secure
//! interface down to the insecure last resort.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zeroize::Zeroize;

use crate::error::EntropyError;

/// One candidate source of random bytes.
///
/// `available` is the probe used when an [`crate::EntropySource`] is
/// constructed; `fill` is the per-call operation and must write the whole
/// buffer or fail. Providers hold no per-call state visible to callers.
pub trait EntropyProvider: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Whether bytes from this provider are cryptographically secure.
    fn is_secure(&self) -> bool {
        true
    }

    /// Probe whether this provider can be used on this host.
    fn available(&self) -> bool;

    /// Fill `dest` entirely with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Primary secure interface: the `getrandom` crate, which binds directly to
/// the host's CSPRNG syscall or equivalent.
pub struct SystemRandom;

impl EntropyProvider for SystemRandom {
    fn name(&self) -> &'static str {
        "getrandom"
    }

    fn available(&self) -> bool {
        let mut probe = [0u8; 1];
        getrandom::getrandom(&mut probe).is_ok()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::getrandom(dest).map_err(|_| EntropyError::Provider {
            provider: self.name(),
        })
    }
}

/// Alternate route to the host CSPRNG through `rand`'s `OsRng`. Reaches the
/// same underlying source through a second binding, covering hosts where
/// the primary interface misbehaves.
pub struct OsBackedRandom;

impl EntropyProvider for OsBackedRandom {
    fn name(&self) -> &'static str {
        "os-rng"
    }

    fn available(&self) -> bool {
        let mut probe = [0u8; 1];
        rand::rngs::OsRng.try_fill_bytes(&mut probe).is_ok()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        rand::rngs::OsRng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::Provider {
                provider: self.name(),
            })
    }
}

#[cfg(unix)]
const URANDOM_PATH: &str = "/dev/urandom";

/// Third, lowest-level secure path: read the `/dev/urandom` device directly.
/// Bytes land in a temporary buffer first and are copied out, so a short or
/// failed read never leaves `dest` partially written.
pub struct DevUrandom;

impl EntropyProvider for DevUrandom {
    fn name(&self) -> &'static str {
        "dev-urandom"
    }

    #[cfg(unix)]
    fn available(&self) -> bool {
        std::path::Path::new(URANDOM_PATH).exists()
    }

    #[cfg(not(unix))]
    fn available(&self) -> bool {
        false
    }

    #[cfg(unix)]
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        use std::io::Read;

        let err = EntropyError::Provider {
            provider: self.name(),
        };
        let mut device = std::fs::File::open(URANDOM_PATH).map_err(|_| err.clone())?;
        let mut staged = vec![0u8; dest.len()];
        device.read_exact(&mut staged).map_err(|_| err)?;
        dest.copy_from_slice(&staged);
        staged.zeroize();
        Ok(())
    }

    #[cfg(not(unix))]
    fn fill(&self, _dest: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::Provider {
            provider: self.name(),
        })
    }
}

/// Insecure last resort: a ChaCha8 stream seeded from the wall clock and
/// process id. Output is NOT cryptographically secure; the owning
/// [`crate::EntropySource`] warns on every fill routed here.
pub struct ClockSeededPrng {
    rng: Mutex<ChaCha8Rng>,
}

impl ClockSeededPrng {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let seed = nanos ^ u64::from(std::process::id()).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for ClockSeededPrng {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropyProvider for ClockSeededPrng {
    fn name(&self) -> &'static str {
        "clock-seeded-prng"
    }

    fn is_secure(&self) -> bool {
        false
    }

    fn available(&self) -> bool {
        true
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for byte in dest.iter_mut() {
            *byte = rng.gen();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_fills_whole_buffer() {
        let provider = SystemRandom;
        assert!(provider.available());
        let mut buf = [0u8; 128];
        provider.fill(&mut buf).unwrap();
        // 128 zero bytes from a working CSPRNG is a 2^-1024 event
        assert_ne!(buf, [0u8; 128]);
    }

    #[test]
    fn os_backed_random_fills_whole_buffer() {
        let provider = OsBackedRandom;
        assert!(provider.available());
        let mut buf = [0u8; 128];
        provider.fill(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 128]);
    }

    #[cfg(unix)]
    #[test]
    fn dev_urandom_fills_whole_buffer() {
        let provider = DevUrandom;
        assert!(provider.available());
        let mut buf = [0u8; 128];
        provider.fill(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 128]);
    }

    #[test]
    fn clock_seeded_prng_is_flagged_insecure() {
        let provider = ClockSeededPrng::new();
        assert!(!provider.is_secure());
        assert!(provider.available());
        let mut buf = [0u8; 64];
        provider.fill(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 64]);
    }

    #[test]
    fn clock_seeded_prng_streams_differ_between_calls() {
        let provider = ClockSeededPrng::new();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        provider.fill(&mut a).unwrap();
        provider.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
