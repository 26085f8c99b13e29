//! Adapter from `rand` generators to the rules' RNG oracle.

use game_core::RngOracle;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// [`RngOracle`] backed by any [`rand::RngCore`].
#[derive(Clone, Debug)]
pub struct RandRng<R = StdRng> {
    inner: R,
}

impl RandRng<StdRng> {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> RandRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore> RngOracle for RandRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.inner.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RandRng::seeded(42);
        let mut b = RandRng::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn below_respects_bounds() {
        let mut rng = RandRng::seeded(7);
        assert_eq!(rng.below(0), 0);
        for _ in 0..200 {
            assert!(rng.below(5) < 5);
            let unit = rng.unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }
}
