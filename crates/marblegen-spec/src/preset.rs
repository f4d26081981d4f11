//! Static preset catalog.
//!
//! Serves the same payload as the preset listing endpoint: a fixed list of
//! named parameter sets with no computation behind it.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::options::{PaletteKind, PaletteSelection};
use crate::params::RenderParams;

/// Model identifier shared by every preset in the catalog.
pub const MODEL_DOMAIN_WARPED_MARBLE: &str = "domain-warped-marble";

/// A named parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Stable identifier (kebab-case).
    pub id: String,
    /// Generator model the parameters are tuned for.
    pub model: String,
    /// Render parameters.
    pub params: RenderParams,
    /// Palette selection, when the preset is tuned for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteSelection>,
    /// Free-form description.
    pub notes: String,
}

/// Response body of the preset listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetListing {
    pub presets: Vec<Preset>,
}

impl PresetListing {
    /// The full built-in catalog.
    pub fn builtin() -> Self {
        Self { presets: catalog() }
    }
}

fn preset(
    id: &str,
    params: RenderParams,
    palette: Option<PaletteSelection>,
    notes: &str,
) -> Preset {
    Preset {
        id: id.to_string(),
        model: MODEL_DOMAIN_WARPED_MARBLE.to_string(),
        params,
        palette,
        notes: notes.to_string(),
    }
}

/// Returns the built-in presets. The first entry is the default render.
pub fn catalog() -> Vec<Preset> {
    vec![
        preset(
            "marble-default",
            RenderParams::default(),
            None,
            "Domain-warped FBM tuned for flowing marble veins.",
        ),
        preset(
            "carrara-calm",
            RenderParams {
                seed: 1504,
                scale: 2.4,
                distortion: 0.8,
                complexity: 5,
                contrast: 1.0,
            },
            Some(PaletteSelection::Fixed(PaletteKind::Carrara)),
            "Low warp and soft grey veining on white stone.",
        ),
        preset(
            "nero-storm",
            RenderParams {
                seed: 77031,
                scale: 3.6,
                distortion: 1.6,
                complexity: 5,
                contrast: 1.5,
            },
            Some(PaletteSelection::Fixed(PaletteKind::NeroMarquina)),
            "Strong double warp; bright veins over near-black stone.",
        ),
        preset(
            "calacatta-gold",
            RenderParams {
                seed: 4242,
                scale: 2.0,
                distortion: 1.1,
                complexity: 4,
                contrast: 1.3,
            },
            Some(PaletteSelection::Fixed(PaletteKind::Calacatta)),
            "Wide gold veins with sparse hairline highlights.",
        ),
        preset(
            "quarry-lottery",
            RenderParams {
                seed: 90210,
                scale: 3.0,
                distortion: 1.3,
                complexity: 4,
                contrast: 1.2,
            },
            Some(PaletteSelection::BySeed),
            "Stone palette picked from the seed.",
        ),
    ]
}

/// Looks up a preset by id.
pub fn find(id: &str) -> Result<Preset, ParamError> {
    catalog()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ParamError::UnknownPreset(id.to_string()))
}
