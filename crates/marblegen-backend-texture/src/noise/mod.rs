//! Noise generation primitives.
//!
//! All noise functions are pure Rust, use fixed-width wrapping integer
//! arithmetic for hashing, and produce deterministic output given the same
//! seed.

mod fbm;
mod value;

pub use fbm::Fbm;
pub use value::ValueNoise;

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    /// Returns a value in [0, 1] for every generator in this module.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Quintic interpolation, `t³(t(6t − 15) + 10)`.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
