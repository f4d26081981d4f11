//! Deterministic PNG writer.
//!
//! Compression and filter settings are fixed per [`PngConfig`], so the same
//! pixel buffer always encodes to the same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a pixel buffer to a PNG file.
pub fn write_png(buffer: &PixelBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_png_to_writer(buffer, writer, config)
}

/// Write a pixel buffer as RGBA8 PNG to any writer.
pub fn write_png_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // No timestamps or text chunks: the png crate adds none unless asked.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(buffer.as_bytes())?;

    Ok(())
}

/// BLAKE3 hash of encoded PNG bytes.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode into memory and return the bytes with their hash.
pub fn encode_png_with_hash(
    buffer: &PixelBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_png_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
