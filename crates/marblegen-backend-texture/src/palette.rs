//! Palettes that turn scalar fields into color.
//!
//! Two strategies exist: a continuous cosine gradient and discrete stone
//! palettes that blend a base, a vein and a highlight color. The choice is
//! made once per render.

use std::f64::consts::TAU;

use marblegen_spec::{PaletteKind, PaletteSelection};

use crate::color::Color;
use crate::rng::SeededRng;

/// Continuous palette `a + b·cos(2π(c·t + d))`, evaluated per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosinePalette {
    pub a: [f64; 3],
    pub b: [f64; 3],
    pub c: [f64; 3],
    pub d: [f64; 3],
}

impl CosinePalette {
    /// The marble gradient: full hue cycle with phase-shifted channels.
    pub const MARBLE: CosinePalette = CosinePalette {
        a: [0.5, 0.5, 0.5],
        b: [0.5, 0.5, 0.5],
        c: [1.0, 1.0, 1.0],
        d: [0.00, 0.33, 0.67],
    };

    /// Evaluate the gradient at `t`. Each channel is clamped to [0, 1].
    pub fn color(&self, t: f64) -> Color {
        let channel = |i: usize| {
            (self.a[i] + self.b[i] * (TAU * (self.c[i] * t + self.d[i])).cos()).clamp(0.0, 1.0)
        };
        Color::rgb(channel(0), channel(1), channel(2))
    }
}

impl Default for CosinePalette {
    fn default() -> Self {
        Self::MARBLE
    }
}

/// A named stone palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscretePalette {
    pub kind: PaletteKind,
    pub base_light: Color,
    pub base_dark: Color,
    pub vein: Color,
    pub highlight: Color,
    /// Exponent applied to the vein mask. Higher values give thinner veins.
    pub sharpness: f64,
}

impl DiscretePalette {
    /// Base stone color, light at `t = 0` and dark at `t = 1`.
    pub fn base(&self, t: f64) -> Color {
        self.base_light.lerp(&self.base_dark, t).clamp()
    }

    /// Mix the vein color into `color` by `amount`.
    pub fn with_vein(&self, color: &Color, amount: f64) -> Color {
        color.lerp(&self.vein, amount).clamp()
    }

    /// Move `color` toward its screen blend with the highlight by `weight`.
    pub fn with_highlight(&self, color: &Color, weight: f64) -> Color {
        color.lerp(&color.screen(&self.highlight), weight).clamp()
    }
}

/// Look up a discrete palette. Returns `None` for [`PaletteKind::Cosine`].
pub fn discrete_palette(kind: PaletteKind) -> Option<DiscretePalette> {
    let (base_light, base_dark, vein, highlight, sharpness) = match kind {
        PaletteKind::Cosine => return None,
        PaletteKind::Carrara => (
            [0.93, 0.93, 0.91],
            [0.74, 0.75, 0.76],
            [0.42, 0.44, 0.47],
            [1.0, 1.0, 1.0],
            6.0,
        ),
        PaletteKind::NeroMarquina => (
            [0.16, 0.15, 0.15],
            [0.04, 0.04, 0.05],
            [0.90, 0.89, 0.86],
            [1.0, 0.98, 0.94],
            9.0,
        ),
        PaletteKind::VerdeAlpi => (
            [0.18, 0.36, 0.29],
            [0.05, 0.16, 0.12],
            [0.72, 0.82, 0.74],
            [0.88, 0.96, 0.90],
            5.0,
        ),
        PaletteKind::RossoLevanto => (
            [0.55, 0.17, 0.14],
            [0.30, 0.07, 0.07],
            [0.90, 0.82, 0.70],
            [0.98, 0.92, 0.84],
            4.0,
        ),
        PaletteKind::Calacatta => (
            [0.96, 0.94, 0.90],
            [0.84, 0.81, 0.76],
            [0.72, 0.56, 0.28],
            [1.0, 0.88, 0.58],
            3.0,
        ),
    };

    Some(DiscretePalette {
        kind,
        base_light: Color::from_array(base_light),
        base_dark: Color::from_array(base_dark),
        vein: Color::from_array(vein),
        highlight: Color::from_array(highlight),
        sharpness,
    })
}

/// The palette used for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Palette {
    Cosine(CosinePalette),
    Discrete(DiscretePalette),
}

impl Palette {
    /// Build the palette for a catalog entry.
    pub fn from_kind(kind: PaletteKind) -> Palette {
        match discrete_palette(kind) {
            Some(discrete) => Palette::Discrete(discrete),
            None => Palette::Cosine(CosinePalette::MARBLE),
        }
    }

    /// Catalog entry this palette was built from.
    pub fn kind(&self) -> PaletteKind {
        match self {
            Palette::Cosine(_) => PaletteKind::Cosine,
            Palette::Discrete(d) => d.kind,
        }
    }
}

/// Resolve a selection rule to a concrete palette kind.
///
/// [`PaletteSelection::BySeed`] consumes exactly one draw from `rng`; fixed
/// selections consume nothing.
pub fn select_palette(selection: PaletteSelection, rng: &mut SeededRng) -> PaletteKind {
    match selection {
        PaletteSelection::Fixed(kind) => kind,
        PaletteSelection::BySeed => {
            PaletteKind::DISCRETE[rng.next_index(PaletteKind::DISCRETE.len())]
        }
    }
}
