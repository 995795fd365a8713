//! Stroke font for HUD digits
//!
//! Each digit is a single open polyline on a 1×2 grid (x right, y down).

use glam::Vec2;

/// Grid units to pixels
pub const GLYPH_SCALE: f32 = 10.0;
/// Horizontal advance per character (pixels)
pub const GLYPH_ADVANCE: f32 = 15.0;

const fn p(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

const ZERO: &[Vec2] = &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 2.0), p(0.0, 2.0), p(0.0, 0.0)];
const ONE: &[Vec2] = &[p(1.0, 0.0), p(1.0, 2.0)];
const TWO: &[Vec2] = &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 2.0), p(1.0, 2.0)];
const THREE: &[Vec2] = &[
    p(0.0, 0.0),
    p(1.0, 0.0),
    p(1.0, 1.0),
    p(0.0, 1.0),
    p(1.0, 1.0),
    p(1.0, 2.0),
    p(0.0, 2.0),
];
const FOUR: &[Vec2] = &[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(1.0, 2.0)];
const FIVE: &[Vec2] = &[p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 2.0), p(0.0, 2.0)];
const SIX: &[Vec2] = &[p(1.0, 0.0), p(0.0, 0.0), p(0.0, 2.0), p(1.0, 2.0), p(1.0, 1.0), p(0.0, 1.0)];
const SEVEN: &[Vec2] = &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 2.0)];
const EIGHT: &[Vec2] = &[
    p(0.0, 0.0),
    p(1.0, 0.0),
    p(1.0, 2.0),
    p(0.0, 2.0),
    p(0.0, 0.0),
    p(0.0, 1.0),
    p(1.0, 1.0),
];
const NINE: &[Vec2] = &[p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 2.0), p(0.0, 2.0)];

/// Stroke path for a character, None for anything but '0'..='9'
pub fn glyph(c: char) -> Option<&'static [Vec2]> {
    let strokes = match c {
        '0' => ZERO,
        '1' => ONE,
        '2' => TWO,
        '3' => THREE,
        '4' => FOUR,
        '5' => FIVE,
        '6' => SIX,
        '7' => SEVEN,
        '8' => EIGHT,
        '9' => NINE,
        _ => return None,
    };
    Some(strokes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digits_defined() {
        for c in '0'..='9' {
            let strokes = glyph(c).unwrap();
            assert!(strokes.len() >= 2, "digit {c} has no strokes");
            assert!(
                strokes
                    .iter()
                    .all(|v| (0.0..=1.0).contains(&v.x) && (0.0..=2.0).contains(&v.y))
            );
        }
    }

    #[test]
    fn test_non_digits_have_no_glyph() {
        for c in ['a', ' ', '-', '.', 'Z'] {
            assert!(glyph(c).is_none());
        }
    }
}
