//! Validation branch selection
//!
//! Whether a simulated day also exercises the validation path is decided
//! by a policy object rather than an inline random draw, so the
//! orchestrator can be driven deterministically in tests. The first-day
//! override (day one is always training-only) belongs to the
//! orchestrator, not the policy.

use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Decides whether a simulated day exercises the validation path
pub trait ValidationPolicy {
    /// `run_index` is the 1-based loop index of the simulated day
    fn include_validation(&mut self, run_index: u32) -> bool;
}

impl<F> ValidationPolicy for F
where
    F: FnMut(u32) -> bool,
{
    fn include_validation(&mut self, run_index: u32) -> bool {
        self(run_index)
    }
}

/// The demo's default policy: a uniform draw over `0..=round(days_back / 4)`
/// takes the validation branch when it lands on zero.
///
/// With the default `days_back = 8` the threshold is 2, so roughly one
/// eligible day in three touches validation data. A threshold of zero
/// (very small `days_back`) makes every eligible day a validation day.
pub struct RandomValidationPolicy {
    threshold: u32,
    rng: ChaCha8Rng,
}

impl RandomValidationPolicy {
    pub fn new(days_back: u32) -> Self {
        Self::with_rng(days_back, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Seeded variant for reproducible runs
    pub fn with_seed(days_back: u32, seed: u64) -> Self {
        Self::with_rng(days_back, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(days_back: u32, rng: ChaCha8Rng) -> Self {
        Self {
            threshold: (f64::from(days_back) / 4.0).round() as u32,
            rng,
        }
    }

    /// Upper bound of the draw (inclusive)
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl ValidationPolicy for RandomValidationPolicy {
    fn include_validation(&mut self, _run_index: u32) -> bool {
        self.rng.random_range(0..=self.threshold) == 0
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod tests;
