//! Marblegen parameter library
//!
//! This crate provides the data model shared by the marble renderer and its
//! front ends: render parameters and their bounds, palette selection, the
//! static preset catalog, and canonical hashing.
//!
//! # Example
//!
//! ```
//! use marblegen_spec::{preset, RenderOptions, RenderParams};
//!
//! let default = preset::find("marble-default").unwrap();
//! assert_eq!(default.params, RenderParams::default());
//! default.params.validate().unwrap();
//!
//! let options = RenderOptions::default();
//! assert!(options.octave_offsets.is_none());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types and stable error codes
//! - [`params`]: Render parameters and validation
//! - [`options`]: Palette selection and octave offsets
//! - [`preset`]: Built-in preset catalog
//! - [`hash`]: Canonical parameter hashing

pub mod error;
pub mod hash;
pub mod options;
pub mod params;
pub mod preset;

pub use error::{ErrorCode, ParamError};
pub use hash::{canonical_params_hash, canonical_render_hash};
pub use options::{OctaveOffsets, PaletteKind, PaletteSelection, RenderOptions, MAX_STAGE_OCTAVES};
pub use params::{export_file_name, RenderParams, MAX_COMPLEXITY};
pub use preset::{Preset, PresetListing};
