//! Frame buffer: a bounds-checked 2D view over a flat pixel store

use super::colors;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Row-major `0x00RRGGBB` pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Screen-sized buffer
    pub fn new() -> Self {
        Self::with_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Custom-sized buffer (tests, thumbnails)
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![colors::BACKGROUND; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Pixel at (x, y), None when out of range
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel; out-of-range writes are dropped and reported as false
    pub fn put(&mut self, x: i32, y: i32, color: u32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Fill with black
    pub fn clear(&mut self) {
        self.pixels.fill(colors::BACKGROUND);
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw bytes for handing to a presenter
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of non-black pixels
    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .iter()
            .filter(|&&p| p != colors::BACKGROUND)
            .count()
    }
}
