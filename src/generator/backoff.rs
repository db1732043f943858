//! Exponential backoff for transient generator failures
//!
//! This retry sits below the solve attempt loop: a rate-limited or briefly
//! failing generator is retried here, and only a generator that stays down
//! surfaces as `Unavailable` to the attempt loop.

use super::{CandidateGenerator, GenerationRequest, GeneratorError, RawCandidate};
use std::time::Duration;

/// How often and how patiently to retry transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Retries after the first call (0 disables retrying)
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl BackoffPolicy {
    #[must_use]
    pub const fn new(max_retries: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
            max_delay,
        }
    }

    /// Delay before retry number `retry` (0-based), doubling each time
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.initial_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(250), Duration::from_secs(4))
    }
}

/// Something that can wait; injected so tests don't sleep
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Wraps a generator and retries its transient failures
pub struct BackoffGenerator<G, S = ThreadSleeper> {
    inner: G,
    policy: BackoffPolicy,
    sleeper: S,
}

impl<G: CandidateGenerator> BackoffGenerator<G> {
    #[must_use]
    pub const fn new(inner: G, policy: BackoffPolicy) -> Self {
        Self {
            inner,
            policy,
            sleeper: ThreadSleeper,
        }
    }
}

impl<G: CandidateGenerator, S: Sleeper> BackoffGenerator<G, S> {
    #[must_use]
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> BackoffGenerator<G, T> {
        BackoffGenerator {
            inner: self.inner,
            policy: self.policy,
            sleeper,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: CandidateGenerator, S: Sleeper> CandidateGenerator for BackoffGenerator<G, S> {
    fn generate(
        &mut self,
        request: &GenerationRequest<'_>,
    ) -> Result<Vec<Vec<RawCandidate>>, GeneratorError> {
        let mut retry = 0;
        loop {
            match self.inner.generate(request) {
                Err(GeneratorError::Transient(reason)) if retry < self.policy.max_retries => {
                    let delay = self.policy.delay_for(retry);
                    log::warn!(
                        target: "generator",
                        "transient failure ({reason}), retry {} of {} in {delay:?}",
                        retry + 1,
                        self.policy.max_retries
                    );
                    self.sleeper.sleep(delay);
                    retry += 1;
                }
                Err(GeneratorError::Transient(reason)) => {
                    return Err(GeneratorError::Unavailable(format!(
                        "still failing after {} retries: {reason}",
                        self.policy.max_retries
                    )));
                }
                other => return other,
            }
        }
    }
}
