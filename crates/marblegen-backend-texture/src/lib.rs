//! Marblegen surface synthesis backend.
//!
//! Renders marble-like RGBA surfaces from a small parameter set. Output is
//! byte-identical for the same seed, parameters, options and dimensions.
//!
//! # Pipeline
//!
//! - **Seeded stream**: [`SeededRng`] (Mulberry32) derives every noise channel
//! - **Noise**: hashed lattice [`ValueNoise`] summed by [`Fbm`]
//! - **Warp**: [`DomainWarper`] stacks two displacement fields before the final sample
//! - **Color**: cosine gradient or stone [`Palette`] with veins, hairlines and grain
//! - **Output**: [`PixelBuffer`] in row-major RGBA8, optional deterministic PNG
//!
//! # Example
//!
//! ```no_run
//! use marblegen_backend_texture::{generate, png::{write_png, PngConfig}};
//! use marblegen_spec::{export_file_name, RenderParams};
//! use std::path::Path;
//!
//! let params = RenderParams::with_seed(42);
//! let buffer = generate(600, 800, &params).unwrap();
//! let file = export_file_name(params.seed);
//! write_png(&buffer, Path::new(&file), &PngConfig::default()).unwrap();
//! ```

pub mod buffer;
pub mod color;
pub mod noise;
pub mod palette;
pub mod png;
pub mod render;
pub mod rng;
pub mod vein;
pub mod warp;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use noise::{Fbm, Noise2D, ValueNoise};
pub use palette::{CosinePalette, DiscretePalette, Palette};
pub use png::{PngConfig, PngError};
pub use render::{generate, generate_with_options, RenderError, SurfaceRenderer};
pub use rng::SeededRng;
pub use vein::VeinPostProcess;
pub use warp::{DomainWarper, WarpSample};
