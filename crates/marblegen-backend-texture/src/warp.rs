//! Two-level domain warping.
//!
//! Coordinates are displaced by one FBM vector field (`q`), then sampled again
//! through a second field (`r`) that was itself displaced by `q`. The final
//! scalar is read at the `r`-displaced position. The stacked displacement
//! turns plain fractal noise into the swirling streaks of marble.

use crate::noise::{Fbm, ValueNoise};
use crate::rng::SeededRng;

/// Offset separating the two `q` components.
pub const Q_OFFSET: (f64, f64) = (5.2, 1.3);

/// Offset separating the two `r` components.
pub const R_OFFSET: (f64, f64) = (1.7, 9.2);

/// An FBM over value noise with its own seed.
pub type NoiseChannel = Fbm<ValueNoise>;

/// Build a noise channel from one draw of the parent stream.
pub fn noise_channel(rng: &mut SeededRng) -> NoiseChannel {
    Fbm::new(ValueNoise::new(rng.next_seed()))
}

/// Output of a warp evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpSample {
    /// Final warped fractal value, roughly in [0, 1].
    pub f: f64,
    pub qx: f64,
    pub qy: f64,
    pub rx: f64,
    pub ry: f64,
}

/// The five noise channels of the warp pipeline.
#[derive(Debug, Clone)]
pub struct DomainWarper {
    qx: NoiseChannel,
    qy: NoiseChannel,
    rx: NoiseChannel,
    ry: NoiseChannel,
    final_stage: NoiseChannel,
}

impl DomainWarper {
    /// Derive the channels from `rng` in the order q.x, q.y, r.x, r.y, final.
    pub fn from_rng(rng: &mut SeededRng) -> Self {
        let qx = noise_channel(rng);
        let qy = noise_channel(rng);
        let rx = noise_channel(rng);
        let ry = noise_channel(rng);
        let final_stage = noise_channel(rng);
        Self {
            qx,
            qy,
            rx,
            ry,
            final_stage,
        }
    }

    /// Stage 1: base undulation vector `q`.
    pub fn stage_q(&self, x: f64, y: f64, octaves: u32) -> (f64, f64) {
        let qx = self.qx.sample_octaves(x, y, octaves);
        let qy = self
            .qy
            .sample_octaves(x + Q_OFFSET.0, y + Q_OFFSET.1, octaves);
        (qx, qy)
    }

    /// Stage 2: refinement vector `r`, sampled at the `q`-displaced point.
    pub fn stage_r(&self, x: f64, y: f64, q: (f64, f64), distortion: f64, octaves: u32) -> (f64, f64) {
        let wx = x + distortion * q.0;
        let wy = y + distortion * q.1;
        let rx = self.rx.sample_octaves(wx, wy, octaves);
        let ry = self
            .ry
            .sample_octaves(wx + R_OFFSET.0, wy + R_OFFSET.1, octaves);
        (rx, ry)
    }

    /// Stage 3: final scalar, sampled at the `r`-displaced point.
    pub fn stage_final(&self, x: f64, y: f64, r: (f64, f64), distortion: f64, octaves: u32) -> f64 {
        self.final_stage
            .sample_octaves(x + distortion * r.0, y + distortion * r.1, octaves)
    }

    /// Run all three stages.
    ///
    /// `complexity` drives the `q` and `r` stages; the final stage receives
    /// `complexity + final_offset` octaves.
    pub fn warp(&self, x: f64, y: f64, distortion: f64, complexity: u32, final_offset: u32) -> WarpSample {
        let q = self.stage_q(x, y, complexity);
        let r = self.stage_r(x, y, q, distortion, complexity);
        let f = self.stage_final(x, y, r, distortion, complexity.saturating_add(final_offset));
        WarpSample {
            f,
            qx: q.0,
            qy: q.1,
            rx: r.0,
            ry: r.1,
        }
    }

    /// The channel used for the final stage.
    pub fn final_channel(&self) -> &NoiseChannel {
        &self.final_stage
    }
}
