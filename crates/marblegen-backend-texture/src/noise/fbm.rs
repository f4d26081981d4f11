//! Fractal Brownian Motion (FBM) noise.
//!
//! FBM layers multiple octaves of noise to create natural-looking patterns.
//! Each octave doubles the frequency and halves the amplitude.

use super::Noise2D;

/// Fractal Brownian Motion generator.
///
/// The sum is divided by `1 − 0.5^octaves` so the result stays roughly in
/// [0, 1] whatever the octave count. With a single octave the output is the
/// base noise exactly.
#[derive(Debug, Clone)]
pub struct Fbm<N: Noise2D> {
    /// The base noise function.
    noise: N,
    /// Octave count used by the [`Noise2D`] impl.
    octaves: u32,
}

impl<N: Noise2D> Fbm<N> {
    /// Create a new FBM generator with 4 octaves.
    pub fn new(noise: N) -> Self {
        Self { noise, octaves: 4 }
    }

    /// Set the number of octaves used by [`Noise2D::sample`].
    ///
    /// Zero follows [`Fbm::sample_octaves`] and samples as 0.0.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// The wrapped base noise.
    pub fn base(&self) -> &N {
        &self.noise
    }

    /// Sum `octaves` layers at `(x, y)`.
    ///
    /// Zero octaves is defined as an empty sum and returns 0.0.
    pub fn sample_octaves(&self, x: f64, y: f64, octaves: u32) -> f64 {
        if octaves == 0 {
            return 0.0;
        }

        let mut value = 0.0;
        let mut amplitude = 0.5;
        let mut frequency = 1.0;

        for _ in 0..octaves {
            value += amplitude * self.noise.sample(x * frequency, y * frequency);
            frequency *= 2.0;
            amplitude *= 0.5;
        }

        value / (1.0 - 0.5f64.powi(octaves as i32))
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.sample_octaves(x, y, self.octaves)
    }
}
