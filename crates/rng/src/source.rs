//! The entropy source: an ordered provider chain behind one `fill` call.

use tracing::{debug, warn};

use crate::error::EntropyError;
use crate::provider::{
    ClockSeededPrng, DevUrandom, EntropyProvider, OsBackedRandom, SystemRandom,
};

/// What to do when every secure provider is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fill from the insecure generator and emit a warning. Availability
    /// over hard failure; callers are expected to monitor the warning
    /// channel.
    #[default]
    Degrade,

    /// Return [`EntropyError::NoSecureSource`] instead of degrading.
    Refuse,
}

/// The default provider chain, in probe order.
pub fn default_chain() -> Vec<Box<dyn EntropyProvider>> {
    vec![
        Box::new(SystemRandom),
        Box::new(OsBackedRandom),
        Box::new(DevUrandom),
        Box::new(ClockSeededPrng::new()),
    ]
}

/// A probed chain of entropy providers.
///
/// The chain is walked once at construction to select the first available
/// provider; `fill` starts there. If the selected provider fails at fill
/// time the remaining chain is walked within that call, each provider
/// attempted at most once, in order. There are no retries beyond that.
pub struct EntropySource {
    providers: Vec<Box<dyn EntropyProvider>>,
    selected: usize,
    policy: FallbackPolicy,
    degraded_fills: u64,
}

impl EntropySource {
    /// Default chain, degrade-with-warning policy.
    pub fn new() -> Self {
        Self::with_policy(FallbackPolicy::Degrade)
    }

    /// Default chain with an explicit fallback policy.
    pub fn with_policy(policy: FallbackPolicy) -> Self {
        Self::from_providers(default_chain(), policy)
    }

    /// Build a source over a caller-supplied provider chain.
    pub fn from_providers(
        providers: Vec<Box<dyn EntropyProvider>>,
        policy: FallbackPolicy,
    ) -> Self {
        let selected = providers
            .iter()
            .position(|p| p.available())
            .unwrap_or(providers.len());
        if let Some(provider) = providers.get(selected) {
            debug!(
                provider = provider.name(),
                secure = provider.is_secure(),
                "entropy provider selected"
            );
        }
        Self {
            providers,
            selected,
            policy,
            degraded_fills: 0,
        }
    }

    /// The configured fallback policy.
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Whether the provider selected at construction is secure.
    pub fn is_secure(&self) -> bool {
        self.providers
            .get(self.selected)
            .map_or(false, |p| p.is_secure())
    }

    /// Number of fills that were served by an insecure provider. One
    /// warning is emitted per degraded fill, so this doubles as a warning
    /// count for instrumentation.
    pub fn degraded_fills(&self) -> u64 {
        self.degraded_fills
    }

    /// Fill `dest` entirely with random bytes.
    ///
    /// Under [`FallbackPolicy::Degrade`] this cannot fail with the default
    /// chain: the insecure generator is always available and is used, with
    /// a warning, once the secure candidates are exhausted.
    pub fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }
        let mut index = self.selected;
        while index < self.providers.len() {
            if !self.providers[index].is_secure() {
                match self.policy {
                    FallbackPolicy::Refuse => return Err(EntropyError::NoSecureSource),
                    FallbackPolicy::Degrade => {
                        self.providers[index].fill(dest)?;
                        self.degraded_fills += 1;
                        warn!(
                            provider = self.providers[index].name(),
                            "no secure entropy source available; \
                             output is NOT cryptographically secure"
                        );
                        return Ok(());
                    }
                }
            }
            if self.providers[index].fill(dest).is_ok() {
                return Ok(());
            }
            index += 1;
        }
        Err(EntropyError::Exhausted)
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted provider for chain tests: counts fills, optionally fails.
    struct MockProvider {
        name: &'static str,
        secure: bool,
        available: bool,
        fails: bool,
        pattern: u8,
        fills: Arc<AtomicUsize>,
    }

    impl MockProvider {
        fn boxed(
            name: &'static str,
            secure: bool,
            available: bool,
            fails: bool,
            pattern: u8,
        ) -> (Box<dyn EntropyProvider>, Arc<AtomicUsize>) {
            let fills = Arc::new(AtomicUsize::new(0));
            let provider = Box::new(MockProvider {
                name,
                secure,
                available,
                fails,
                pattern,
                fills: Arc::clone(&fills),
            });
            (provider, fills)
        }
    }

    impl EntropyProvider for MockProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_secure(&self) -> bool {
            self.secure
        }

        fn available(&self) -> bool {
            self.available
        }

        fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
            self.fills.fetch_add(1, Ordering::SeqCst);
            if self.fails {
                return Err(EntropyError::Provider {
                    provider: self.name,
                });
            }
            dest.fill(self.pattern);
            Ok(())
        }
    }

    #[test]
    fn secure_provider_wins_insecure_never_consulted() {
        let (secure, secure_fills) = MockProvider::boxed("mock-secure", true, true, false, 0xA5);
        let (insecure, insecure_fills) =
            MockProvider::boxed("mock-insecure", false, true, false, 0x5A);
        let mut source =
            EntropySource::from_providers(vec![secure, insecure], FallbackPolicy::Degrade);

        assert!(source.is_secure());
        let mut buf = [0u8; 48];
        for _ in 0..10 {
            source.fill(&mut buf).unwrap();
            assert_eq!(buf, [0xA5; 48]);
        }
        assert_eq!(secure_fills.load(Ordering::SeqCst), 10);
        assert_eq!(insecure_fills.load(Ordering::SeqCst), 0);
        assert_eq!(source.degraded_fills(), 0);
    }

    #[test]
    fn degrades_with_one_warning_per_fill() {
        let (unavailable, _) = MockProvider::boxed("mock-secure", true, false, true, 0xA5);
        let (insecure, insecure_fills) =
            MockProvider::boxed("mock-insecure", false, true, false, 0x5A);
        let mut source =
            EntropySource::from_providers(vec![unavailable, insecure], FallbackPolicy::Degrade);

        assert!(!source.is_secure());
        let mut buf = [0u8; 96];
        source.fill(&mut buf).unwrap();
        // entire requested length filled despite degradation
        assert_eq!(buf, [0x5A; 96]);
        assert_eq!(source.degraded_fills(), 1);

        source.fill(&mut buf).unwrap();
        assert_eq!(source.degraded_fills(), 2);
        assert_eq!(insecure_fills.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn refuse_policy_errors_instead_of_degrading() {
        let (unavailable, _) = MockProvider::boxed("mock-secure", true, false, true, 0xA5);
        let (insecure, insecure_fills) =
            MockProvider::boxed("mock-insecure", false, true, false, 0x5A);
        let mut source =
            EntropySource::from_providers(vec![unavailable, insecure], FallbackPolicy::Refuse);

        let mut buf = [0u8; 32];
        assert_eq!(source.fill(&mut buf), Err(EntropyError::NoSecureSource));
        assert_eq!(buf, [0u8; 32]);
        assert_eq!(insecure_fills.load(Ordering::SeqCst), 0);
        assert_eq!(source.degraded_fills(), 0);
    }

    #[test]
    fn fill_walks_chain_when_selected_provider_fails() {
        // Probes fine, fails at fill time; the next secure candidate serves
        // the call without degradation.
        let (flaky, flaky_fills) = MockProvider::boxed("mock-flaky", true, true, true, 0x00);
        let (backup, backup_fills) = MockProvider::boxed("mock-backup", true, true, false, 0xC3);
        let (insecure, insecure_fills) =
            MockProvider::boxed("mock-insecure", false, true, false, 0x5A);
        let mut source = EntropySource::from_providers(
            vec![flaky, backup, insecure],
            FallbackPolicy::Degrade,
        );

        let mut buf = [0u8; 16];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [0xC3; 16]);
        assert_eq!(flaky_fills.load(Ordering::SeqCst), 1);
        assert_eq!(backup_fills.load(Ordering::SeqCst), 1);
        assert_eq!(insecure_fills.load(Ordering::SeqCst), 0);
        assert_eq!(source.degraded_fills(), 0);
    }

    #[test]
    fn every_provider_attempted_at_most_once_per_fill() {
        let (flaky, flaky_fills) = MockProvider::boxed("mock-flaky", true, true, true, 0x00);
        let mut source =
            EntropySource::from_providers(vec![flaky], FallbackPolicy::Degrade);

        let mut buf = [0u8; 8];
        assert_eq!(source.fill(&mut buf), Err(EntropyError::Exhausted));
        assert_eq!(flaky_fills.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_fill_is_a_no_op() {
        let (insecure, insecure_fills) =
            MockProvider::boxed("mock-insecure", false, true, false, 0x5A);
        let mut source = EntropySource::from_providers(vec![insecure], FallbackPolicy::Degrade);
        source.fill(&mut []).unwrap();
        assert_eq!(insecure_fills.load(Ordering::SeqCst), 0);
        assert_eq!(source.degraded_fills(), 0);
    }

    #[test]
    fn default_chain_selects_a_secure_provider() {
        let mut source = EntropySource::new();
        assert!(source.is_secure());
        let mut buf = [0u8; 64];
        source.fill(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 64]);
        assert_eq!(source.degraded_fills(), 0);
    }
}
