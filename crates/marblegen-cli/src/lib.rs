//! Marblegen CLI library.
//!
//! This crate provides the core functionality for the `marblegen` binary:
//! parameter resolution, the render/presets/hash commands, and log setup.

pub mod commands;
pub mod input;
pub mod logging;
