//! Idle/demo mode - the game plays itself
//!
//! Turns toward the nearest asteroid (leading it slightly), fires once lined
//! up and creeps forward when the field is far away.

use std::cmp::Ordering;

use super::state::GameState;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Fire when the aim error is below this many degrees
const AIM_TOLERANCE: f32 = 8.0;
/// Dead zone to avoid oscillating around the target heading
const TURN_DEAD_ZONE: f32 = 2.0;
/// Approach targets farther away than this
const APPROACH_DISTANCE: f32 = 260.0;

/// Normalize an angle in degrees to [-180, 180)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Decide this tick's input from the current state
pub fn steer(state: &GameState, tuning: &Tuning) -> TickInput {
    let ship = &state.player.body;

    let Some(target) = state.asteroids.iter().min_by(|a, b| {
        let da = a.position.distance_squared(ship.position);
        let db = b.position.distance_squared(ship.position);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    }) else {
        return TickInput::default();
    };

    // Lead the target by the bullet's travel time
    let distance = target.position.distance(ship.position);
    let travel = if tuning.bullet_speed > 0.0 {
        distance / tuning.bullet_speed
    } else {
        0.0
    };
    let aim = target.position + target.velocity * travel - ship.position;

    // Heading convention: 0° = up, clockwise positive
    let desired = aim.x.atan2(-aim.y).to_degrees();
    let error = normalize_degrees(desired - ship.heading);

    let slow = ship.velocity.length() < state.player.pilot.speed_limit * 0.5;

    TickInput {
        rotate_left: error < -TURN_DEAD_ZONE,
        rotate_right: error > TURN_DEAD_ZONE,
        thrust: distance > APPROACH_DISTANCE && error.abs() < 30.0 && slow,
        fire: error.abs() < AIM_TOLERANCE,
    }
}
