//! Deterministic tie-breaking for contested cells.
//!
//! When several teams reach the same cell in the same round, the winner is
//! drawn from a single generator threaded through the whole expansion. The
//! default generator is ChaCha8 seeded through `SeedableRng::seed_from_u64`;
//! each contested cell consumes exactly one `next_u64()` and picks index
//! `draw % claimants` into the ascending list of claimant team ids. Cells
//! with a single claimant never draw.

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Chooses one of `claimants` contenders.
pub trait TieBreaker {
    /// Return an index in `0..claimants`. `claimants` is at least 2.
    fn pick(&mut self, claimants: usize) -> usize;
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn pick(&mut self, claimants: usize) -> usize {
        (**self).pick(claimants)
    }
}

/// The portable default: ChaCha8 with modulo reduction.
#[derive(Debug, Clone)]
pub struct ChaChaTieBreaker {
    rng: ChaCha8Rng,
    draws: u64,
}

impl ChaChaTieBreaker {
    /// Seed the generator from a single integer.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Number of draws consumed so far.
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl TieBreaker for ChaChaTieBreaker {
    fn pick(&mut self, claimants: usize) -> usize {
        debug_assert!(claimants > 0, "tie-break over no claimants");
        self.draws += 1;
        (self.rng.next_u64() % claimants as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ChaChaTieBreaker::from_seed(7);
        let mut b = ChaChaTieBreaker::from_seed(7);
        let left: Vec<_> = (2..50).map(|n| a.pick(n)).collect();
        let right: Vec<_> = (2..50).map(|n| b.pick(n)).collect();
        assert_eq!(left, right);
        assert_eq!(a.draws(), 48);
    }

    #[test]
    fn picks_stay_in_range() {
        let mut tb = ChaChaTieBreaker::from_seed(0);
        for n in 2..200 {
            assert!(tb.pick(n) < n);
        }
    }

    #[test]
    fn matches_raw_chacha_stream() {
        let mut raw = ChaCha8Rng::seed_from_u64(1234);
        let mut tb = ChaChaTieBreaker::from_seed(1234);
        for n in [2usize, 3, 5, 4, 2] {
            assert_eq!(tb.pick(n), (raw.next_u64() % n as u64) as usize);
        }
    }

    #[test]
    fn borrowed_breaker_advances_owner() {
        fn draw_twice(mut breaker: impl TieBreaker) {
            breaker.pick(2);
            breaker.pick(3);
        }

        let mut tb = ChaChaTieBreaker::from_seed(3);
        draw_twice(&mut tb);
        assert_eq!(tb.draws(), 2);
    }
}
