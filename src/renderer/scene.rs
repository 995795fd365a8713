//! Draws a whole game frame

use glam::Vec2;

use super::colors;
use super::frame::FrameBuffer;
use super::glyphs::GLYPH_ADVANCE;
use super::raster::Rasterizer;
use crate::sim::GameState;

/// HUD anchor for the score (top-left)
pub const SCORE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);
/// Gap between the last health digit's origin and the right edge
pub const HEALTH_MARGIN: f32 = 40.0;

/// Health readout anchor, right-aligned so extra digits grow leftward
pub fn health_offset(frame_width: usize, health: u8) -> Vec2 {
    let digits = health.to_string().len() as f32;
    Vec2::new(
        frame_width as f32 - HEALTH_MARGIN - GLYPH_ADVANCE * (digits - 1.0),
        SCORE_OFFSET.y,
    )
}

/// Clear, then draw player, bullets, asteroids and the HUD
pub fn render(frame: &mut FrameBuffer, state: &GameState, show_hud: bool) {
    let health_anchor = health_offset(frame.width(), state.health);
    let mut r = Rasterizer::new(frame);
    r.clear();

    let ship_color = if state.is_invincible() {
        colors::PLAYER_INVINCIBLE
    } else {
        colors::PLAYER
    };
    r.draw_entity(&state.player.body, ship_color);

    for bullet in &state.bullets {
        r.draw_entity(bullet, colors::BULLET);
    }
    for rock in &state.asteroids {
        r.draw_entity(rock, colors::ASTEROID);
    }

    if show_hud {
        r.draw_number(state.score, SCORE_OFFSET, colors::HUD);
        r.draw_number(u32::from(state.health), health_anchor, colors::HUD);
    }
}
