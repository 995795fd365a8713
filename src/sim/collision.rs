//! Collision tests
//!
//! Everything collides as a circle of radius `size`; model shapes are only
//! for drawing.

use glam::Vec2;

use super::entity::FlyingObject;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Sum-of-radii circle overlap test (symmetric)
#[inline]
pub fn collides(a: &FlyingObject, b: &FlyingObject) -> bool {
    a.position.distance(b.position) < (a.size + b.size) as f32
}

/// True when a bullet touches or crosses the play area border
#[inline]
pub fn out_of_bounds(pos: Vec2) -> bool {
    pos.x <= 0.0 || pos.y <= 0.0 || pos.x >= ARENA_WIDTH - 1.0 || pos.y >= ARENA_HEIGHT - 1.0
}

/// Index of the first asteroid hit by `bullet` (scan order, not nearest)
pub fn first_hit(bullet: &FlyingObject, asteroids: &[FlyingObject]) -> Option<usize> {
    asteroids.iter().position(|rock| collides(bullet, rock))
}
