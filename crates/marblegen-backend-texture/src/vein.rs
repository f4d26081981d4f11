//! Vein mask, hairline highlights and grain for the stone palettes.

use crate::rng::SeededRng;
use crate::warp::{NoiseChannel, WarpSample};

/// Hairline values at or below this are not blended.
pub const HIGHLIGHT_THRESHOLD: f64 = 0.02;

/// Weight multiplier applied to the hairline before blending.
pub const HIGHLIGHT_STRENGTH: f64 = 0.6;

/// Peak grain offset per channel.
pub const GRAIN_AMPLITUDE: f64 = 0.015;

/// Vein mask components at one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VeinMask {
    /// Ridge strength after the sharpness exponent, in [0, 1].
    pub veins: f64,
    /// Blend weight for the vein color, in [0, 1].
    pub amount: f64,
}

/// Derives veins from the warp's auxiliary vectors and a dedicated channel.
#[derive(Debug, Clone)]
pub struct VeinPostProcess {
    noise: NoiseChannel,
    sharpness: f64,
    octaves: u32,
}

impl VeinPostProcess {
    pub fn new(noise: NoiseChannel, sharpness: f64, octaves: u32) -> Self {
        Self {
            noise,
            sharpness,
            octaves,
        }
    }

    /// Compute the vein mask at pattern-space `(px, py)`.
    ///
    /// `f` is the contrast-adjusted base pattern; bright areas carry a little
    /// vein color even away from a ridge.
    pub fn mask(&self, px: f64, py: f64, warp: &WarpSample, f: f64) -> VeinMask {
        let flow = (px * 1.6 + warp.rx * 6.0 + warp.ry * 3.4).sin();
        let vein_noise = self.noise.sample_octaves(
            px * 2.5 + warp.qx * 1.2,
            py * 2.5 + warp.qy * 1.4,
            self.octaves,
        );
        let veins = (1.0 - (flow - vein_noise).abs())
            .max(0.0)
            .powf(self.sharpness);
        let amount = (veins * 0.9 + f * 0.15).min(1.0);
        VeinMask { veins, amount }
    }
}

/// Thin highlight ridge, `max(0, sin(5·px + 7·ry))^8`.
pub fn hairline(px: f64, ry: f64) -> f64 {
    (px * 5.0 + ry * 7.0).sin().max(0.0).powf(8.0)
}

/// One grain offset in `[-GRAIN_AMPLITUDE, GRAIN_AMPLITUDE)`.
///
/// Consumes one draw, so the grain pattern depends on pixel visiting order.
pub fn grain(rng: &mut SeededRng) -> f64 {
    (rng.next_f64() - 0.5) * (2.0 * GRAIN_AMPLITUDE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warp::noise_channel;

    fn sample(rx: f64, ry: f64) -> WarpSample {
        WarpSample {
            f: 0.5,
            qx: 0.4,
            qy: 0.6,
            rx,
            ry,
        }
    }

    #[test]
    fn test_mask_in_range() {
        let mut rng = SeededRng::new(10);
        let vein = VeinPostProcess::new(noise_channel(&mut rng), 6.0, 6);
        for i in 0..200 {
            let px = i as f64 * 0.05;
            let m = vein.mask(px, px * 0.7, &sample(0.3, 0.8), 0.5);
            assert!((0.0..=1.0).contains(&m.veins));
            assert!((0.0..=1.0).contains(&m.amount));
        }
    }

    #[test]
    fn test_sharpness_thins_veins() {
        let mut rng = SeededRng::new(10);
        let channel = noise_channel(&mut rng);
        let soft = VeinPostProcess::new(channel.clone(), 2.0, 4);
        let sharp = VeinPostProcess::new(channel, 12.0, 4);
        for i in 0..100 {
            let px = i as f64 * 0.031;
            let s = sample(0.2, 0.9);
            assert!(sharp.mask(px, 0.4, &s, 0.0).veins <= soft.mask(px, 0.4, &s, 0.0).veins);
        }
    }

    #[test]
    fn test_hairline_is_selective() {
        assert_eq!(hairline(0.0, 0.0), 0.0);
        let peak = hairline(std::f64::consts::FRAC_PI_2 / 5.0, 0.0);
        assert!((peak - 1.0).abs() < 1e-12);
        // Negative half of the sine contributes nothing.
        assert_eq!(hairline(-0.3, 0.0), 0.0);
    }

    #[test]
    fn test_grain_bounds() {
        let mut rng = SeededRng::new(99);
        for _ in 0..10_000 {
            let g = grain(&mut rng);
            assert!((-GRAIN_AMPLITUDE..GRAIN_AMPLITUDE).contains(&g));
        }
    }
}
