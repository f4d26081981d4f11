//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `render` and `hash`, so scripts can
//! parse results without scraping colored text.

use serde::{Deserialize, Serialize};

use marblegen_backend_texture::RenderError;
use marblegen_spec::{ErrorCode, PaletteKind, ParamError, RenderParams};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable. CLI-level failures use CLI_XXX; parameter errors
/// pass through the library codes (E001...).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Output directory could not be created
    pub const OUTPUT_DIR: &str = "CLI_002";
    /// PNG encoding or write failed
    pub const PNG_WRITE: &str = "CLI_003";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Parameter or file the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Converts a parameter error to its JSON record.
pub fn param_error_to_json(error: &ParamError) -> JsonError {
    let json = JsonError::new(error.code().code(), error.to_string());
    match error {
        ParamError::InvalidParameter { name, .. } => json.with_path(*name),
        _ => json,
    }
}

/// Converts an input error to its JSON record.
pub fn input_error_to_json(error: &InputError) -> JsonError {
    match error {
        InputError::FileRead { path, .. } | InputError::JsonParse { path, .. } => {
            JsonError::new(error.code(), error.to_string()).with_path(path.display().to_string())
        }
        InputError::Param(e) => param_error_to_json(e),
    }
}

/// Converts a render error to its JSON record.
pub fn render_error_to_json(error: &RenderError) -> JsonError {
    match error {
        RenderError::InvalidDimensions { .. } => {
            JsonError::new(ErrorCode::InvalidDimensions.code(), error.to_string())
        }
        RenderError::InvalidParameter(e) => param_error_to_json(e),
    }
}

/// Result payload of a successful render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderResult {
    /// Written PNG path; absent for `hash`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub width: u32,
    pub height: u32,
    pub params: RenderParams,
    pub palette: PaletteKind,
    /// Canonical hash of the parameters
    pub params_hash: String,
    /// BLAKE3 of the raw RGBA bytes
    pub image_hash: String,
    /// BLAKE3 of the encoded PNG; absent for `hash`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png_hash: Option<String>,
    pub duration_ms: u64,
}

/// JSON output for the `render` and `hash` commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderResult>,
}

impl RenderOutput {
    /// Creates a successful output.
    pub fn success(result: RenderResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Pretty JSON text. Falls back to a fixed error record if serialization
    /// fails.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                r#"{{"success":false,"errors":[{{"code":"{}","message":"{}"}}]}}"#,
                error_codes::JSON_SERIALIZE,
                e.to_string().replace('"', "'")
            )
        })
    }
}
