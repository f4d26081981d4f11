//! Output pixel buffer.

use crate::color::Color;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A `width × height` grid of RGBA8 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create an opaque black buffer.
    ///
    /// Callers validate dimensions first; see
    /// [`crate::render::validate_dimensions`].
    pub fn new(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];
        for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Quantize and store a color.
    #[inline]
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color.to_rgba8());
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(BYTES_PER_PIXEL)
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// BLAKE3 hash of the raw RGBA bytes, as lowercase hex.
    ///
    /// This is the golden-image hash: it ignores any container encoding.
    pub fn hash(&self) -> String {
        blake3::hash(&self.data).to_hex().to_string()
    }
}
