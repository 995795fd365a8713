//! Vectoroids - A vector line-art asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Software rasterizer writing into a wrapped frame buffer
//! - `platform`: Host engine boundary (key polling, quit requests)
//! - `game`: Frame orchestrator driving `update`/`render`
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime settings and config loading

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::{ConfigError, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Frame buffer dimensions (fixed at build time)
    pub const SCREEN_WIDTH: usize = 1024;
    pub const SCREEN_HEIGHT: usize = 768;

    /// Play area as floats for physics
    pub const ARENA_WIDTH: f32 = SCREEN_WIDTH as f32;
    pub const ARENA_HEIGHT: f32 = SCREEN_HEIGHT as f32;

    /// Nominal host frame rate used by the headless runner
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Wrap a coordinate into `[0, period)` with a single wraparound step.
///
/// Values displaced by more than one period are only moved by one period.
#[inline]
pub fn wrap_coord(value: f32, period: f32) -> f32 {
    if value < 0.0 {
        let wrapped = value + period;
        // Tiny negatives round up to `period` itself
        if wrapped >= period { 0.0 } else { wrapped }
    } else if value >= period {
        value - period
    } else {
        value
    }
}

/// Wrap a position onto the toroidal play area
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(
        wrap_coord(pos.x, consts::ARENA_WIDTH),
        wrap_coord(pos.y, consts::ARENA_HEIGHT),
    )
}

/// Unit vector for a heading in degrees (0° = up, clockwise positive)
#[inline]
pub fn heading_vector(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Rotate a point around the origin by an angle in degrees
#[inline]
pub fn rotate_degrees(p: Vec2, angle_deg: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// Center of the play area
#[inline]
pub fn arena_center() -> Vec2 {
    Vec2::new(consts::ARENA_WIDTH / 2.0, consts::ARENA_HEIGHT / 2.0)
}
