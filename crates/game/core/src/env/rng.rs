//! RNG oracle for breeding, hatching and combat rolls.
//!
//! Every random decision in the rules (allele picks, bonus traits, pool
//! draws, dodge checks, damage variance) is drawn through [`RngOracle`], so a
//! seeded implementation replays a session exactly.

/// Source of uniformly distributed random values.
///
/// Only [`next_u32`](RngOracle::next_u32) must be provided; the helpers are
/// derived from it.
pub trait RngOracle {
    /// Next raw 32-bit value from the stream.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Multiply-shift maps the full u32 range onto [0, bound).
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// Uniform index into a collection of `len` elements.
    fn index(&mut self, len: usize) -> usize {
        self.below(len.min(u32::MAX as usize) as u32) as usize
    }

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform value in `[low, high)`.
    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// True with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
///
/// - **Deterministic**: same seed always produces the same stream
/// - **Small state**: only 64 bits, cheap to clone into tests
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}
