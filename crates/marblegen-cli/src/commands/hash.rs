//! Hash command implementation
//!
//! Renders in memory and prints the golden-image hash (BLAKE3 of the raw RGBA
//! bytes) without writing any file.

use anyhow::{Context, Result};
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, render_error_to_json, JsonError, RenderOutput, RenderResult,
};
use super::render::{render_surface, resolve_request, settings_hash, RenderRequest};

/// Run the hash command
///
/// Prints the bare hash on stdout, or a JSON report with `--json`.
pub fn run(request: &RenderRequest, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(request);
    }

    let resolved = resolve_request(request).context("Failed to resolve render parameters")?;
    let rendered = render_surface(&resolved, request.width, request.height)?;
    println!("{}", rendered.buffer.hash());

    Ok(ExitCode::SUCCESS)
}

fn fail_json(error: JsonError) -> Result<ExitCode> {
    println!("{}", RenderOutput::failure(vec![error]).to_json_pretty());
    Ok(ExitCode::from(1))
}

fn run_json(request: &RenderRequest) -> Result<ExitCode> {
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

    let result = RenderResult {
        file: None,
        width: request.width,
        height: request.height,
        params: resolved.params,
        palette: rendered.palette,
        params_hash,
        image_hash: rendered.buffer.hash(),
        png_hash: None,
        duration_ms: rendered.duration_ms,
    };
    println!("{}", RenderOutput::success(result).to_json_pretty());

    Ok(ExitCode::SUCCESS)
}
