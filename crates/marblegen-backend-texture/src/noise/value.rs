//! Value noise implementation.
//!
//! Each integer lattice corner gets a pseudo-random value from a fixed integer
//! hash; samples between corners are blended with quintic weights.

use super::{lerp, quintic, Noise2D};

/// 2D value noise generator.
///
/// Sampling never consumes randomness: the channel seed is mixed into the
/// lattice hash once, so `sample` is a pure function of `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNoise {
    seed: u32,
}

impl ValueNoise {
    /// Create a new value noise channel with the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// The channel seed mixed into the lattice hash.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Hash an integer lattice corner to a value in [0, 1].
    ///
    /// Coordinates are reduced mod 2^32 and every step wraps, so the result
    /// is identical on all platforms.
    #[inline]
    pub fn lattice_value(&self, x: i64, y: i64) -> f64 {
        let a = x as u32;
        let b = y as u32;
        let mut h = (a.wrapping_mul(1_664_525) ^ b.wrapping_mul(1_622_650_073) ^ self.seed)
            .wrapping_add(1_013_904_223);
        h = (h ^ (h >> 16)).wrapping_mul(0x045d_9f3b);
        h ^= h >> 16;
        h as f64 / u32::MAX as f64
    }
}

impl Noise2D for ValueNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xi = x0 as i64;
        let yi = y0 as i64;

        let fx = x - x0;
        let fy = y - y0;

        let n00 = self.lattice_value(xi, yi);
        let n10 = self.lattice_value(xi.wrapping_add(1), yi);
        let n01 = self.lattice_value(xi, yi.wrapping_add(1));
        let n11 = self.lattice_value(xi.wrapping_add(1), yi.wrapping_add(1));

        let u = quintic(fx);
        let v = quintic(fy);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }
}
