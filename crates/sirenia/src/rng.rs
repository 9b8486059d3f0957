//! Seeded pseudo-random source for start positions and degenerate force directions.
//!
//! Every layout run owns its own generator, so concurrent runs never share state and identical
//! inputs always consume the same sequence.

use crate::geometry::Vector;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 3;

#[derive(Debug, Clone)]
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state.
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_unit(&mut self) -> f64 {
        let u = self.next_u64() >> 11;
        (u as f64) / ((1u64 << 53) as f64)
    }

    /// Uniform in `[-1, 1)`.
    pub fn next_f64_signed(&mut self) -> f64 {
        (self.next_f64_unit() * 2.0) - 1.0
    }

    /// Unit vector at a uniformly drawn angle.
    pub fn next_direction(&mut self) -> Vector {
        let angle = self.next_f64_unit() * std::f64::consts::TAU;
        Vector::new(angle.cos(), angle.sin())
    }
}

impl Default for XorShift64Star {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
