//! Software rendering module
//!
//! Vector line-art rasterized straight into a CPU frame buffer.

pub mod frame;
pub mod glyphs;
pub mod raster;
pub mod scene;

pub use frame::FrameBuffer;
pub use raster::{RasterError, Rasterizer};
pub use scene::render;

/// Colors for game elements (`0x00RRGGBB`)
pub mod colors {
    pub const BACKGROUND: u32 = 0x000000;
    pub const PLAYER: u32 = 0x00FFFF;
    pub const PLAYER_INVINCIBLE: u32 = 0x2F6F6F; // Dimmed during the invincibility window
    pub const BULLET: u32 = 0xFFFF40;
    pub const ASTEROID: u32 = 0xC0C0C8;
    pub const HUD: u32 = 0xFFFFFF;
}
