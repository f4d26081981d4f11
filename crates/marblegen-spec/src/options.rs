//! Palette selection and octave offsets.
//!
//! These settings sit beside [`crate::RenderParams`]: they choose between the
//! continuous cosine gradient and the discrete stone palettes, and control how
//! many extra octaves the final and vein stages receive.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::params::{RenderParams, MAX_COMPLEXITY};

/// Largest octave count any single stage may receive once offsets are added.
///
/// Leaves room for the stone palettes' default offsets at [`MAX_COMPLEXITY`].
pub const MAX_STAGE_OCTAVES: u32 = MAX_COMPLEXITY + 2;

/// Identifies a palette in the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    /// Continuous cosine gradient.
    Cosine,
    /// White stone with soft grey veins.
    Carrara,
    /// Near-black stone with bright white veins.
    NeroMarquina,
    /// Deep green serpentine with pale veins.
    VerdeAlpi,
    /// Oxblood red with cream veins.
    RossoLevanto,
    /// Warm white with heavy gold veining.
    Calacatta,
}

impl PaletteKind {
    /// Every palette in catalog order.
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::Cosine,
        PaletteKind::Carrara,
        PaletteKind::NeroMarquina,
        PaletteKind::VerdeAlpi,
        PaletteKind::RossoLevanto,
        PaletteKind::Calacatta,
    ];

    /// The discrete palettes, in the order used for seeded selection.
    pub const DISCRETE: [PaletteKind; 5] = [
        PaletteKind::Carrara,
        PaletteKind::NeroMarquina,
        PaletteKind::VerdeAlpi,
        PaletteKind::RossoLevanto,
        PaletteKind::Calacatta,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteKind::Cosine => "cosine",
            PaletteKind::Carrara => "carrara",
            PaletteKind::NeroMarquina => "nero-marquina",
            PaletteKind::VerdeAlpi => "verde-alpi",
            PaletteKind::RossoLevanto => "rosso-levanto",
            PaletteKind::Calacatta => "calacatta",
        }
    }

    /// Whether this palette runs the vein post-process.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, PaletteKind::Cosine)
    }

    /// Octave offsets used when none are configured explicitly.
    pub fn default_octave_offsets(&self) -> OctaveOffsets {
        if self.is_discrete() {
            OctaveOffsets {
                final_stage: 1,
                vein: 2,
            }
        } else {
            OctaveOffsets::default()
        }
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        PaletteKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ParamError::UnknownPalette(s.to_string()))
    }
}

/// How the palette for a render is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteSelection {
    /// Always use the named palette.
    Fixed(PaletteKind),
    /// Draw one value from the seeded stream to pick a discrete palette.
    BySeed,
}

impl Default for PaletteSelection {
    fn default() -> Self {
        PaletteSelection::Fixed(PaletteKind::Cosine)
    }
}

impl FromStr for PaletteSelection {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "by-seed" | "random" => Ok(PaletteSelection::BySeed),
            _ => s.parse().map(PaletteSelection::Fixed),
        }
    }
}

/// Extra octaves added to `complexity` for the later pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OctaveOffsets {
    /// Added for the final domain-warp evaluation.
    pub final_stage: u32,
    /// Added for the vein noise channel.
    pub vein: u32,
}

impl OctaveOffsets {
    /// Checks that `complexity` plus each offset stays within
    /// [`MAX_STAGE_OCTAVES`].
    pub fn validate(&self, complexity: u32) -> Result<(), ParamError> {
        check_stage("octave_offsets.final_stage", complexity, self.final_stage)?;
        check_stage("octave_offsets.vein", complexity, self.vein)
    }
}

fn check_stage(name: &'static str, complexity: u32, offset: u32) -> Result<(), ParamError> {
    match complexity.checked_add(offset) {
        Some(total) if total <= MAX_STAGE_OCTAVES => Ok(()),
        _ => Err(ParamError::invalid(
            name,
            format!(
                "complexity {} + offset {} exceeds {} octaves",
                complexity, offset, MAX_STAGE_OCTAVES
            ),
        )),
    }
}

/// Options that complement [`crate::RenderParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Palette selection rule.
    #[serde(default)]
    pub palette: PaletteSelection,
    /// Explicit octave offsets. `None` picks the palette's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub octave_offsets: Option<OctaveOffsets>,
}

impl RenderOptions {
    /// Options for a fixed palette with its default offsets.
    pub fn with_palette(kind: PaletteKind) -> Self {
        Self {
            palette: PaletteSelection::Fixed(kind),
            octave_offsets: None,
        }
    }

    /// Checks explicit octave offsets against the parameters' complexity.
    ///
    /// Default offsets always fit once the parameters themselves are valid.
    pub fn validate(&self, params: &RenderParams) -> Result<(), ParamError> {
        match self.octave_offsets {
            Some(offsets) => offsets.validate(params.complexity),
            None => Ok(()),
        }
    }

    /// Resolves the offsets once the palette is known.
    pub fn resolve_octave_offsets(&self, kind: PaletteKind) -> OctaveOffsets {
        self.octave_offsets
            .unwrap_or_else(|| kind.default_octave_offsets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_names_round_trip() {
        for kind in PaletteKind::ALL {
            assert_eq!(kind.name().parse::<PaletteKind>().unwrap(), kind);
        }
        assert_eq!(
            "NERO_MARQUINA".parse::<PaletteKind>().unwrap(),
            PaletteKind::NeroMarquina
        );
        assert!("granite".parse::<PaletteKind>().is_err());
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!(
            "by-seed".parse::<PaletteSelection>().unwrap(),
            PaletteSelection::BySeed
        );
        assert_eq!(
            "carrara".parse::<PaletteSelection>().unwrap(),
            PaletteSelection::Fixed(PaletteKind::Carrara)
        );
    }

    #[test]
    fn test_default_offsets_follow_palette() {
        let options = RenderOptions::default();
        assert_eq!(
            options.resolve_octave_offsets(PaletteKind::Cosine),
            OctaveOffsets::default()
        );
        assert_eq!(
            options.resolve_octave_offsets(PaletteKind::Carrara),
            OctaveOffsets {
                final_stage: 1,
                vein: 2
            }
        );
    }

    #[test]
    fn test_explicit_offsets_win() {
        let options = RenderOptions {
            palette: PaletteSelection::Fixed(PaletteKind::Carrara),
            octave_offsets: Some(OctaveOffsets::default()),
        };
        assert_eq!(
            options.resolve_octave_offsets(PaletteKind::Carrara),
            OctaveOffsets::default()
        );
    }

    #[test]
    fn test_offsets_within_stage_bound() {
        let offsets = OctaveOffsets {
            final_stage: 1,
            vein: 2,
        };
        assert!(offsets.validate(MAX_COMPLEXITY).is_ok());
        assert!(offsets.validate(MAX_COMPLEXITY - 1).is_ok());

        let too_many = OctaveOffsets {
            final_stage: 3,
            vein: 0,
        };
        let err = too_many.validate(MAX_COMPLEXITY).unwrap_err();
        assert!(err.to_string().contains("final_stage"));
    }

    #[test]
    fn test_offset_overflow_is_rejected() {
        let offsets = OctaveOffsets {
            final_stage: 0,
            vein: u32::MAX,
        };
        let err = offsets.validate(4).unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::InvalidParameter);
        assert!(err.to_string().contains("vein"));
    }

    #[test]
    fn test_options_validate_only_checks_explicit_offsets() {
        let params = RenderParams {
            complexity: MAX_COMPLEXITY,
            ..RenderParams::default()
        };
        assert!(RenderOptions::with_palette(PaletteKind::Carrara)
            .validate(&params)
            .is_ok());

        let options = RenderOptions {
            palette: PaletteSelection::Fixed(PaletteKind::Cosine),
            octave_offsets: Some(OctaveOffsets {
                final_stage: 1100,
                vein: 0,
            }),
        };
        assert!(options.validate(&RenderParams::default()).is_err());
    }

    #[test]
    fn test_selection_json_shape() {
        let json = serde_json::to_string(&PaletteSelection::Fixed(PaletteKind::VerdeAlpi)).unwrap();
        assert_eq!(json, r#"{"fixed":"verde_alpi"}"#);
        let json = serde_json::to_string(&PaletteSelection::BySeed).unwrap();
        assert_eq!(json, r#""by_seed""#);
    }
}
