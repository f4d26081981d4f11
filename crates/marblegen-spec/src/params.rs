//! Render parameters and their bounds.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Largest accepted octave count.
///
/// At 24 octaves the finest layer samples 2^23 lattice cells per pattern unit,
/// which keeps every frequency finite and every lattice coordinate exact.
pub const MAX_COMPLEXITY: u32 = 24;

/// The full set of knobs that determines a rendered surface.
///
/// Together with the width, height and [`crate::RenderOptions`] these fully
/// determine the output pixels; nothing else is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderParams {
    /// Seed for every random stream used in the render.
    pub seed: u32,
    /// Pattern-space zoom. Larger values pack more features into the canvas.
    pub scale: f64,
    /// Domain warp strength. Zero disables warping.
    pub distortion: f64,
    /// Octave count for the fractal sums.
    pub complexity: u32,
    /// Linear stretch around the 0.5 midpoint.
    pub contrast: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            seed: 20251028,
            scale: 3.2,
            distortion: 1.2,
            complexity: 4,
            contrast: 1.2,
        }
    }
}

impl RenderParams {
    /// Creates parameters with the given seed and default shape values.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Checks every parameter against its documented bounds.
    ///
    /// NaN and infinite values are rejected for all floating point fields.
    pub fn validate(&self) -> Result<(), ParamError> {
        require_finite("scale", self.scale)?;
        if self.scale <= 0.0 {
            return Err(ParamError::invalid(
                "scale",
                format!("must be > 0, got {}", self.scale),
            ));
        }

        require_finite("distortion", self.distortion)?;
        if self.distortion < 0.0 {
            return Err(ParamError::invalid(
                "distortion",
                format!("must be >= 0, got {}", self.distortion),
            ));
        }

        require_finite("contrast", self.contrast)?;
        if self.contrast < 0.0 {
            return Err(ParamError::invalid(
                "contrast",
                format!("must be >= 0, got {}", self.contrast),
            ));
        }

        if !(1..=MAX_COMPLEXITY).contains(&self.complexity) {
            return Err(ParamError::invalid(
                "complexity",
                format!(
                    "must be in [1, {}], got {}",
                    MAX_COMPLEXITY, self.complexity
                ),
            ));
        }

        Ok(())
    }

    /// Parses parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ParamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the parameters to a compact JSON string.
    pub fn to_json(&self) -> Result<String, ParamError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the parameters to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, ParamError> {
        Ok(serde_json::to_value(self)?)
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// File name used when a render is exported as PNG.
pub fn export_file_name(seed: u32) -> String {
    format!("marble_{}.png", seed)
}
