//! Presets command implementation
//!
//! Prints the built-in preset listing as `{"presets": [...]}`.

use anyhow::{Context, Result};
use std::process::ExitCode;

use marblegen_spec::PresetListing;

/// Serialize the built-in listing.
pub fn listing_json(pretty: bool) -> Result<String> {
    let listing = PresetListing::builtin();
    let json = if pretty {
        serde_json::to_string_pretty(&listing)
    } else {
        serde_json::to_string(&listing)
    };
    json.context("Failed to serialize preset listing")
}

/// Run the presets command
pub fn run(pretty: bool) -> Result<ExitCode> {
    println!("{}", listing_json(pretty)?);
    Ok(ExitCode::SUCCESS)
}
