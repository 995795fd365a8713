//! Line rasterizer with toroidal addressing
//!
//! Every pixel write goes through `draw_point`, which wraps coordinates by
//! one period, so shapes straddling an edge reappear on the other side.

use glam::Vec2;

use super::frame::FrameBuffer;
use super::glyphs::{GLYPH_ADVANCE, GLYPH_SCALE, glyph};
use crate::rotate_degrees;
use crate::sim::FlyingObject;

/// Rasterizer errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// HUD text only knows digits
    #[error("no glyph for character {0:?}")]
    UnsupportedGlyph(char),
}

/// Single-step wrap of an integer coordinate into `[0, period)`
#[inline]
fn wrap_index(value: i32, period: i32) -> i32 {
    if value < 0 {
        value + period
    } else if value >= period {
        value - period
    } else {
        value
    }
}

/// Draws into a borrowed frame buffer
pub struct Rasterizer<'a> {
    frame: &'a mut FrameBuffer,
}

impl<'a> Rasterizer<'a> {
    pub fn new(frame: &'a mut FrameBuffer) -> Self {
        Self { frame }
    }

    /// Fill the whole buffer with black
    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Plot one pixel with wraparound.
    ///
    /// Coordinates more than one period away stay out of range and are dropped.
    pub fn draw_point(&mut self, x: i32, y: i32, color: u32) {
        let x = wrap_index(x, self.frame.width() as i32);
        let y = wrap_index(y, self.frame.height() as i32);
        if !self.frame.put(x, y, color) {
            log::trace!("Dropped pixel at ({x}, {y})");
        }
    }

    /// Draw a line; the far endpoint (in x, or in y for vertical lines) is
    /// not plotted.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        if x0 == x1 {
            if y1 >= y0 {
                for y in y0..y1 {
                    self.draw_point(x0, y, color);
                }
            } else {
                for y in (y1 + 1..=y0).rev() {
                    self.draw_point(x0, y, color);
                }
            }
            return;
        }

        let k = (y1 - y0) as f32 / (x1 - x0) as f32;
        let b = y1 as f32 - x1 as f32 * k;

        // Walk columns left to right, filling the span since the last column
        let (start, end, mut last_y) = if x1 > x0 { (x0, x1, y0) } else { (x1, x0, y1) };
        for x in start..end {
            let y = (k * x as f32 + b).round() as i32;
            let (lo, hi) = if y > last_y { (last_y, y) } else { (y, last_y) };
            for yy in lo..=hi {
                self.draw_point(x, yy, color);
            }
            last_y = y;
        }
    }

    /// Closed outline through all vertices
    pub fn draw_polygon(&mut self, vertices: &[Vec2], color: u32) {
        self.draw_path(vertices, color, true);
    }

    /// Like `draw_polygon` without the closing edge
    pub fn draw_open_figure(&mut self, vertices: &[Vec2], color: u32) {
        self.draw_path(vertices, color, false);
    }

    fn draw_path(&mut self, vertices: &[Vec2], color: u32, closed: bool) {
        match vertices {
            [] => {}
            [only] => self.draw_point(only.x as i32, only.y as i32, color),
            _ => {
                for pair in vertices.windows(2) {
                    self.draw_segment(pair[0], pair[1], color);
                }
                if closed {
                    self.draw_segment(vertices[vertices.len() - 1], vertices[0], color);
                }
            }
        }
    }

    #[inline]
    fn draw_segment(&mut self, a: Vec2, b: Vec2, color: u32) {
        self.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
    }

    /// Scale, rotate and translate an entity's model, then outline it
    pub fn draw_entity(&mut self, entity: &FlyingObject, color: u32) {
        let scale = entity.radius();
        let outline: Vec<Vec2> = entity
            .model
            .iter()
            .map(|&v| rotate_degrees(v * scale, entity.heading) + entity.position)
            .collect();
        self.draw_polygon(&outline, color);
    }

    /// Draw a digit string starting at `offset`.
    ///
    /// Any non-digit rejects the whole string before anything is drawn.
    pub fn draw_text(&mut self, text: &str, offset: Vec2, color: u32) -> Result<(), RasterError> {
        let strokes = text
            .chars()
            .map(|c| glyph(c).ok_or(RasterError::UnsupportedGlyph(c)))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, strokes) in strokes.into_iter().enumerate() {
            let origin = offset + Vec2::new(GLYPH_ADVANCE * i as f32, 0.0);
            let path: Vec<Vec2> = strokes.iter().map(|&v| v * GLYPH_SCALE + origin).collect();
            self.draw_open_figure(&path, color);
        }
        Ok(())
    }

    /// Draw an unsigned number (always representable)
    pub fn draw_number(&mut self, value: u32, offset: Vec2, color: u32) {
        if let Err(e) = self.draw_text(&value.to_string(), offset, color) {
            log::warn!("HUD number failed to draw: {e}");
        }
    }
}
