//! Error types for parameter validation and preset lookup.

use thiserror::Error;

/// Stable error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: A numeric render parameter is out of range or not finite
    InvalidParameter,
    /// E002: Width or height is zero or the buffer would not fit in memory
    InvalidDimensions,
    /// E003: No preset with the requested id
    UnknownPreset,
    /// E004: Palette name not in the catalog
    UnknownPalette,
    /// E005: Parameter document could not be parsed
    MalformedParams,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "E001",
            ErrorCode::InvalidDimensions => "E002",
            ErrorCode::UnknownPreset => "E003",
            ErrorCode::UnknownPalette => "E004",
            ErrorCode::MalformedParams => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while validating or loading render parameters.
#[derive(Debug, Error)]
pub enum ParamError {
    /// A parameter failed its bounds check.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Field name as it appears in JSON (`scale`, `complexity`, ...).
        name: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    /// A preset id did not match the catalog.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// A palette name did not match the catalog.
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),

    /// JSON (de)serialization failed.
    #[error("malformed parameters: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParamError {
    /// Shorthand for [`ParamError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ParamError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParamError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            ParamError::UnknownPreset(_) => ErrorCode::UnknownPreset,
            ParamError::UnknownPalette(_) => ErrorCode::UnknownPalette,
            ParamError::Json(_) => ErrorCode::MalformedParams,
        }
    }
}
