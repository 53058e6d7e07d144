//! RNG oracle for deterministic random number generation.
//!
//! Book gains, rolled starting skills, and random skill selection all draw from
//! an [`RngOracle`] supplied by the caller. The model never owns a global
//! generator, so replays with the same seed reproduce the same progression.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same sequence
/// given the same seed.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Returns a uniform value in `0..bound` for `1 <= bound <= 2^32`.
    ///
    /// Draws falling in the truncated top bucket are rejected so every
    /// residue is equally likely.
    fn below(&mut self, bound: u64) -> u64 {
        const SPACE: u64 = 1 << 32;
        let bound = bound.clamp(1, SPACE);
        let zone = SPACE - SPACE % bound;
        loop {
            let draw = u64::from(self.next_u32());
            if draw < zone {
                return draw % bound;
            }
        }
    }

    /// Generate a random value in range [min, max] inclusive.
    ///
    /// Reversed bounds are swapped rather than rejected.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo == hi {
            return lo;
        }
        let span = u64::from(hi - lo) + 1;
        lo + self.below(span) as u32
    }

    /// Returns an index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let bound = u64::try_from(len).unwrap_or(u64::MAX);
        self.below(bound) as usize
    }

    /// Returns true with probability `1/n`. `n <= 1` always succeeds.
    fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.next_u32() % n == 0
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed ^ 0x9e3779b97f4a7c15),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}
