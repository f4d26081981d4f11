//! Parameter resolution for render requests.
//!
//! Parameters are layered: a preset supplies a starting point, a JSON file
//! replaces it, and individual flags override single fields. Later layers win.

use std::path::{Path, PathBuf};

use marblegen_spec::{preset, ParamError, PaletteSelection, RenderOptions, RenderParams};
use rand::Rng;

/// Inclusive upper bound for randomized seeds.
pub const RANDOM_SEED_MAX: u32 = 100_000;

/// Every source a render request can draw its parameters from.
#[derive(Debug, Clone, Default)]
pub struct ParamSources {
    pub preset: Option<String>,
    pub params_file: Option<PathBuf>,
    pub seed: Option<u32>,
    pub scale: Option<f64>,
    pub distortion: Option<f64>,
    pub complexity: Option<u32>,
    pub contrast: Option<f64>,
    pub palette: Option<PaletteSelection>,
}

/// Parameters and options after all layers are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub params: RenderParams,
    pub options: RenderOptions,
    /// Preset the parameters started from, if any.
    pub preset_id: Option<String>,
}

/// Errors that can occur while resolving parameters.
#[derive(Debug)]
pub enum InputError {
    /// Params file could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Params file is not a valid parameter document.
    JsonParse { path: PathBuf, source: ParamError },

    /// Preset lookup or validation failed.
    Param(ParamError),
}

impl InputError {
    /// Stable code for JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => crate::commands::json_output::error_codes::FILE_READ,
            InputError::JsonParse { source, .. } | InputError::Param(source) => {
                source.code().code()
            }
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            InputError::Param(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::JsonParse { source, .. } => Some(source),
            InputError::Param(e) => Some(e),
        }
    }
}

impl From<ParamError> for InputError {
    fn from(e: ParamError) -> Self {
        InputError::Param(e)
    }
}

/// Load a parameter document from a JSON file.
pub fn load_params_file(path: &Path) -> Result<RenderParams, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    RenderParams::from_json(&content).map_err(|e| InputError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Apply every layer in `sources` and validate the result.
pub fn resolve(sources: &ParamSources) -> Result<ResolvedInput, InputError> {
    let mut params = RenderParams::default();
    let mut options = RenderOptions::default();

    if let Some(id) = &sources.preset {
        let preset = preset::find(id)?;
        params = preset.params;
        if let Some(palette) = preset.palette {
            options.palette = palette;
        }
    }

    if let Some(path) = &sources.params_file {
        params = load_params_file(path)?;
    }

    if let Some(seed) = sources.seed {
        params.seed = seed;
    }
    if let Some(scale) = sources.scale {
        params.scale = scale;
    }
    if let Some(distortion) = sources.distortion {
        params.distortion = distortion;
    }
    if let Some(complexity) = sources.complexity {
        params.complexity = complexity;
    }
    if let Some(contrast) = sources.contrast {
        params.contrast = contrast;
    }
    if let Some(palette) = sources.palette {
        options.palette = palette;
    }

    params.validate()?;
    options.validate(&params)?;

    Ok(ResolvedInput {
        params,
        options,
        preset_id: sources.preset.clone(),
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Draw a fresh seed and look, keeping `complexity`.
///
/// Ranges: seed in `1..=100000`, scale in [1, 4) at one decimal, distortion
/// in [0.2, 1.7) at two decimals, contrast in [0.8, 2.3) at one decimal.
pub fn randomize<R: Rng + ?Sized>(params: &RenderParams, rng: &mut R) -> RenderParams {
    RenderParams {
        seed: rng.gen_range(1..=RANDOM_SEED_MAX),
        scale: round_to(rng.gen_range(1.0..4.0), 1),
        distortion: round_to(rng.gen_range(0.2..1.7), 2),
        complexity: params.complexity,
        contrast: round_to(rng.gen_range(0.8..2.3), 1),
    }
}
