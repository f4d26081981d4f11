//! Render command implementation
//!
//! Resolves parameters, renders the surface and writes `marble_{seed}.png`.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

use marblegen_backend_texture::png::{encode_png_with_hash, PngConfig};
use marblegen_backend_texture::render::validate_dimensions;
use marblegen_backend_texture::{PixelBuffer, RenderError, SurfaceRenderer};
use marblegen_spec::{canonical_render_hash, export_file_name, PaletteKind};

use super::json_output::{
    error_codes, input_error_to_json, render_error_to_json, JsonError, RenderOutput, RenderResult,
};
use crate::input::{self, InputError, ParamSources, ResolvedInput};

/// Default canvas width.
pub const DEFAULT_WIDTH: u32 = 600;
/// Default canvas height.
pub const DEFAULT_HEIGHT: u32 = 800;

/// A render request as given on the command line.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub sources: ParamSources,
    pub width: u32,
    pub height: u32,
    /// Replace seed, scale, distortion and contrast with random values.
    pub randomize: bool,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            sources: ParamSources::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            randomize: false,
        }
    }
}

/// A finished render.
pub(crate) struct Rendered {
    pub buffer: PixelBuffer,
    pub palette: PaletteKind,
    pub duration_ms: u64,
}

/// Resolve parameters for a request, applying `--randomize` last.
pub(crate) fn resolve_request(request: &RenderRequest) -> Result<ResolvedInput, InputError> {
    let mut resolved = input::resolve(&request.sources)?;
    if request.randomize {
        resolved.params = input::randomize(&resolved.params, &mut rand::thread_rng());
    }
    debug!(
        seed = resolved.params.seed,
        scale = resolved.params.scale,
        distortion = resolved.params.distortion,
        complexity = resolved.params.complexity,
        contrast = resolved.params.contrast,
        preset = resolved.preset_id.as_deref().unwrap_or("-"),
        "resolved render parameters"
    );
    Ok(resolved)
}

/// Canonical hash of the resolved parameters and options, as reported in JSON.
pub(crate) fn settings_hash(resolved: &ResolvedInput) -> Result<String, JsonError> {
    canonical_render_hash(&resolved.params, &resolved.options)
        .map_err(|e| JsonError::new(error_codes::JSON_SERIALIZE, e.to_string()))
}

/// Render a resolved request.
pub(crate) fn render_surface(
    resolved: &ResolvedInput,
    width: u32,
    height: u32,
) -> Result<Rendered, RenderError> {
    let start = Instant::now();
    validate_dimensions(width, height)?;
    let renderer = SurfaceRenderer::new(&resolved.params, &resolved.options)?;
    let palette = renderer.palette().kind();
    let buffer = renderer.render(width, height)?;
    Ok(Rendered {
        buffer,
        palette,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Run the render command
///
/// # Arguments
/// * `request` - Parameter sources and canvas size
/// * `out_dir` - Directory the PNG is written into (created if missing)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(request: &RenderRequest, out_dir: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request, out_dir)
    } else {
        run_human(request, out_dir)
    }
}

fn output_path(out_dir: &str, seed: u32) -> PathBuf {
    Path::new(out_dir).join(export_file_name(seed))
}

/// Encode `buffer` and write it to `path`. Returns the PNG hash.
fn write_png_file(buffer: &PixelBuffer, path: &Path) -> Result<String> {
    let (png_bytes, png_hash) =
        encode_png_with_hash(buffer, &PngConfig::default()).context("Failed to encode PNG")?;
    fs::write(path, &png_bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(png_hash)
}

/// Run render with human-readable (colored) output
fn run_human(request: &RenderRequest, out_dir: &str) -> Result<ExitCode> {
    let resolved = resolve_request(request).context("Failed to resolve render parameters")?;
    let params = &resolved.params;

    println!(
        "{} {}x{} (seed {})",
        "Rendering:".cyan().bold(),
        request.width,
        request.height,
        params.seed
    );
    if let Some(id) = &resolved.preset_id {
        println!("{} {}", "Preset:".dimmed(), id);
    }
    println!(
        "{} scale {:.1}, distortion {:.2}, complexity {}, contrast {:.1}",
        "Params:".dimmed(),
        params.scale,
        params.distortion,
        params.complexity,
        params.contrast
    );

    let rendered = render_surface(&resolved, request.width, request.height)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;
    let path = output_path(out_dir, params.seed);
    write_png_file(&rendered.buffer, &path)?;

    println!("{} {}", "Palette:".dimmed(), rendered.palette);
    println!("{} {}", "Image hash:".dimmed(), rendered.buffer.hash());
    println!(
        "\n{} {} ({} ms)",
        "SUCCESS".green().bold(),
        path.display(),
        rendered.duration_ms
    );

    Ok(ExitCode::SUCCESS)
}

fn fail_json(error: JsonError) -> Result<ExitCode> {
    println!("{}", RenderOutput::failure(vec![error]).to_json_pretty());
    Ok(ExitCode::from(1))
}

/// Run render with machine-readable JSON output
fn run_json(request: &RenderRequest, out_dir: &str) -> Result<ExitCode> {
    let resolved = match resolve_request(request) {
        Ok(resolved) => resolved,
        Err(e) => return fail_json(input_error_to_json(&e)),
    };

    let rendered = match render_surface(&resolved, request.width, request.height) {
        Ok(rendered) => rendered,
        Err(e) => return fail_json(render_error_to_json(&e)),
    };

    let params_hash = match settings_hash(&resolved) {
        Ok(hash) => hash,
        Err(e) => return fail_json(e),
    };

    if let Err(e) = fs::create_dir_all(out_dir) {
        return fail_json(
            JsonError::new(error_codes::OUTPUT_DIR, e.to_string()).with_path(out_dir),
        );
    }

    let path = output_path(out_dir, resolved.params.seed);
    let png_hash = match write_png_file(&rendered.buffer, &path) {
        Ok(hash) => hash,
        Err(e) => {
            return fail_json(
                JsonError::new(error_codes::PNG_WRITE, format!("{:#}", e))
                    .with_path(path.display().to_string()),
            )
        }
    };

    let result = RenderResult {
        file: Some(path.display().to_string()),
        width: request.width,
        height: request.height,
        params: resolved.params,
        palette: rendered.palette,
        params_hash,
        image_hash: rendered.buffer.hash(),
        png_hash: Some(png_hash),
        duration_ms: rendered.duration_ms,
    };
    println!("{}", RenderOutput::success(result).to_json_pretty());

    Ok(ExitCode::SUCCESS)
}
