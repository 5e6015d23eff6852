//! Seedable RNG used for card shuffles.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

/// `SmallRng` behind the [`RandomSource`] seam. Not cryptographic.
#[derive(Clone, Debug)]
pub struct ShuffleRng(SmallRng);

impl ShuffleRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Seed from browser / OS entropy when the `rng` feature is enabled,
    /// otherwise from the page clock.
    pub fn from_entropy() -> Self {
        Self::seeded(entropy_seed())
    }
}

impl RandomSource for ShuffleRng {
    fn below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            tracing::warn!(%err, "entropy unavailable, seeding shuffle from clock");
            clock_seed()
        }
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (crate::performance_now() * 1000.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }
}
