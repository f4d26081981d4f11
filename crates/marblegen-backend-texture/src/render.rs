//! Main entry point for surface rendering.
//!
//! [`SurfaceRenderer`] prepares every noise channel from the seed, then walks
//! the output grid row by row (y outer, x inner). The visiting order is part of
//! the output contract: stone palettes draw one grain value per pixel from the
//! shared seeded stream.

use std::time::Instant;

use marblegen_spec::{OctaveOffsets, ParamError, RenderOptions, RenderParams};
use thiserror::Error;
use tracing::debug;

use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::color::Color;
use crate::palette::{select_palette, Palette};
use crate::rng::SeededRng;
use crate::vein::{grain, hairline, VeinPostProcess, HIGHLIGHT_STRENGTH, HIGHLIGHT_THRESHOLD};
use crate::warp::{noise_channel, DomainWarper, WarpSample};

/// How strongly the `r.x` warp component shifts the cosine gradient.
pub const COSINE_WARP_TINT: f64 = 0.6;

/// Errors from surface rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid dimensions {width}x{height}: both sides must be non-zero and the buffer must fit in memory")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(transparent)]
    InvalidParameter(#[from] ParamError),
}

/// Check that a `width × height` RGBA8 buffer can be allocated.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(RenderError::InvalidDimensions { width, height })?;

    Ok(())
}

/// Map pixel `(x, y)` to pattern space.
///
/// The shorter side spans `scale` pattern units; the longer side's coordinate
/// is stretched by the aspect ratio so features keep their proportions.
pub fn normalize(x: u32, y: u32, width: u32, height: u32, scale: f64) -> (f64, f64) {
    let w = width as f64;
    let h = height as f64;
    let aspect = w / h;
    let px = (x as f64 / w) * scale * if aspect > 1.0 { aspect } else { 1.0 };
    let py = (y as f64 / h) * scale * if aspect < 1.0 { 1.0 / aspect } else { 1.0 };
    (px, py)
}

/// Linear stretch around 0.5, clamped to [0, 1].
pub fn apply_contrast(f: f64, contrast: f64) -> f64 {
    ((f - 0.5) * contrast + 0.5).clamp(0.0, 1.0)
}

/// Renders one surface from a fixed parameter set.
///
/// Construction derives the noise channels from the seed in a fixed order:
/// q.x, q.y, r.x, r.y, final, vein, then one palette draw when the palette is
/// chosen by seed. Rendering consumes the renderer because grain keeps drawing
/// from the same stream.
#[derive(Debug, Clone)]
pub struct SurfaceRenderer {
    params: RenderParams,
    palette: Palette,
    offsets: OctaveOffsets,
    warper: DomainWarper,
    vein: VeinPostProcess,
    rng: SeededRng,
}

impl SurfaceRenderer {
    /// Validate the parameters and prepare all channels.
    pub fn new(params: &RenderParams, options: &RenderOptions) -> Result<Self, RenderError> {
        params.validate()?;
        options.validate(params)?;

        let mut rng = SeededRng::new(params.seed);
        let warper = DomainWarper::from_rng(&mut rng);
        let vein_channel = noise_channel(&mut rng);

        let kind = select_palette(options.palette, &mut rng);
        let palette = Palette::from_kind(kind);
        let offsets = options.resolve_octave_offsets(kind);
        offsets.validate(params.complexity)?;

        let sharpness = match &palette {
            Palette::Discrete(d) => d.sharpness,
            Palette::Cosine(_) => 1.0,
        };
        let vein = VeinPostProcess::new(
            vein_channel,
            sharpness,
            params.complexity + offsets.vein,
        );

        Ok(Self {
            params: *params,
            palette,
            offsets,
            warper,
            vein,
            rng,
        })
    }

    /// The resolved palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The resolved octave offsets.
    pub fn octave_offsets(&self) -> OctaveOffsets {
        self.offsets
    }

    /// Warp sample at pattern-space `(px, py)`.
    pub fn sample(&self, px: f64, py: f64) -> WarpSample {
        self.warper.warp(
            px,
            py,
            self.params.distortion,
            self.params.complexity,
            self.offsets.final_stage,
        )
    }

    /// Render the full `width × height` buffer.
    pub fn render(mut self, width: u32, height: u32) -> Result<PixelBuffer, RenderError> {
        validate_dimensions(width, height)?;

        let started = Instant::now();
        let mut buffer = PixelBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let (px, py) = normalize(x, y, width, height, self.params.scale);
                let warp = self.sample(px, py);
                let f = apply_contrast(warp.f, self.params.contrast);
                let color = self.shade(px, py, &warp, f);
                buffer.set_color(x, y, color);
            }
        }

        debug!(
            width,
            height,
            seed = self.params.seed,
            palette = %self.palette.kind(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "rendered surface"
        );

        Ok(buffer)
    }

    /// Turn one pixel's scalar fields into a clamped color.
    fn shade(&mut self, px: f64, py: f64, warp: &WarpSample, f: f64) -> Color {
        match &self.palette {
            Palette::Cosine(cosine) => cosine.color(f + COSINE_WARP_TINT * warp.rx),
            Palette::Discrete(stone) => {
                let mask = self.vein.mask(px, py, warp, f);
                let mut color = stone.with_vein(&stone.base(f), mask.amount);

                let highlight = hairline(px, warp.ry);
                if highlight > HIGHLIGHT_THRESHOLD {
                    color = stone.with_highlight(&color, highlight * HIGHLIGHT_STRENGTH);
                }

                color.offset(grain(&mut self.rng)).clamp()
            }
        }
    }
}

/// Render a surface with the default options (cosine palette).
pub fn generate(width: u32, height: u32, params: &RenderParams) -> Result<PixelBuffer, RenderError> {
    generate_with_options(width, height, params, &RenderOptions::default())
}

/// Render a surface with explicit palette and octave options.
///
/// Dimensions and parameters are both checked before any pixel is computed.
pub fn generate_with_options(
    width: u32,
    height: u32,
    params: &RenderParams,
    options: &RenderOptions,
) -> Result<PixelBuffer, RenderError> {
    validate_dimensions(width, height)?;
    SurfaceRenderer::new(params, options)?.render(width, height)
}
