//! CLI argument definitions for the marblegen command-line interface.
//!
//! All clap derive types are defined here, keeping `main.rs` focused on
//! dispatch logic.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use marblegen_cli::commands::render::{RenderRequest, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use marblegen_cli::input::ParamSources;
use marblegen_spec::PaletteSelection;

/// Marblegen - deterministic marble surface renderer
#[derive(Parser)]
#[command(name = "marblegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Print structured diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a surface and write marble_<seed>.png
    Render {
        #[command(flatten)]
        surface: SurfaceArgs,

        /// Directory the PNG is written into
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Replace seed, scale, distortion and contrast with random values
        #[arg(long)]
        randomize: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in preset listing as JSON
    Presets {
        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render in memory and print the golden-image hash
    Hash {
        #[command(flatten)]
        surface: SurfaceArgs,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parameter and canvas flags shared by `render` and `hash`.
#[derive(Args, Debug, Clone)]
pub(crate) struct SurfaceArgs {
    /// Start from a built-in preset
    #[arg(long)]
    pub preset: Option<String>,

    /// JSON parameter file (replaces the preset)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Render seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Pattern units across the shorter side
    #[arg(long)]
    pub scale: Option<f64>,

    /// Domain-warp strength
    #[arg(long)]
    pub distortion: Option<f64>,

    /// Octave count for the warp stages (1-24)
    #[arg(long)]
    pub complexity: Option<u32>,

    /// Contrast stretch around mid-gray
    #[arg(long)]
    pub contrast: Option<f64>,

    /// Palette name (cosine, carrara, nero-marquina, verde-alpi,
    /// rosso-levanto, calacatta) or by-seed
    #[arg(long, value_parser = parse_palette)]
    pub palette: Option<PaletteSelection>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

fn parse_palette(s: &str) -> Result<PaletteSelection, String> {
    s.parse().map_err(|e: marblegen_spec::ParamError| e.to_string())
}

impl SurfaceArgs {
    pub fn into_request(self, randomize: bool) -> RenderRequest {
        RenderRequest {
            sources: ParamSources {
                preset: self.preset,
                params_file: self.params,
                seed: self.seed,
                scale: self.scale,
                distortion: self.distortion,
                complexity: self.complexity,
                contrast: self.contrast,
                palette: self.palette,
            },
            width: self.width,
            height: self.height,
            randomize,
        }
    }
}
