//! CLI command implementations

pub mod hash;
pub mod json_output;
pub mod presets;
pub mod render;
