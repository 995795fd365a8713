//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a round can be
//! rebalanced from a settings file without touching code.

use serde::{Deserialize, Serialize};

use crate::settings::ConfigError;

/// How asteroid speeds are sampled when a field (or split) spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpawnSpeedCurve {
    /// Uniform in `[min, max]`
    #[default]
    Uniform,
    /// `min + u * (min - max)`: the classic inverted range. Produces signed
    /// speeds in `(min - (max - min), min]`, so most rocks drift slowly and a
    /// negative value flips the travel direction.
    Legacy,
}

/// Asteroid speed range (pixels/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSpeed {
    pub min: f32,
    pub max: f32,
    pub curve: SpawnSpeedCurve,
}

impl Default for SpawnSpeed {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 75.0,
            curve: SpawnSpeedCurve::Uniform,
        }
    }
}

impl SpawnSpeed {
    /// Map a uniform sample `u ∈ [0, 1)` to a speed
    pub fn sample(&self, u: f32) -> f32 {
        match self.curve {
            SpawnSpeedCurve::Uniform => self.min + u * (self.max - self.min),
            SpawnSpeedCurve::Legacy => self.min + u * (self.min - self.max),
        }
    }
}

/// Gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Rotation speed (degrees/s)
    pub turn_rate: f32,
    /// Thrust acceleration (pixels/s²)
    pub player_acceleration: f32,
    /// Velocity updates beyond this magnitude are rejected
    pub player_speed_limit: f32,
    /// Collision radius and render scale
    pub player_size: u32,
    /// Health at round start and after a loss
    pub starting_health: u8,
    /// Invincibility after taking damage (seconds)
    pub invincibility_duration: f32,

    // === Shooting ===
    /// Minimum time between shots (seconds)
    pub shoot_cooldown: f32,
    pub bullet_speed: f32,
    pub bullet_size: u32,

    // === Asteroids ===
    /// Asteroids per wave
    pub field_size: usize,
    /// Size of freshly spawned field asteroids
    pub asteroid_size: u32,
    /// Asteroids larger than this split in two when shot
    pub split_threshold: u32,
    /// Score per asteroid destroyed
    pub asteroid_score: u32,
    pub spawn_speed: SpawnSpeed,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            turn_rate: 90.0,
            player_acceleration: 50.0,
            player_speed_limit: 200.0,
            player_size: 8,
            starting_health: 5,
            invincibility_duration: 3.0,

            shoot_cooldown: 1.0,
            bullet_speed: 200.0,
            bullet_size: 2,

            field_size: 5,
            asteroid_size: 20,
            split_threshold: 5,
            asteroid_score: 50,
            spawn_speed: SpawnSpeed::default(),
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.player_speed_limit > 0.0) {
            return invalid("player_speed_limit must be positive");
        }
        if self.player_acceleration < 0.0 || self.turn_rate < 0.0 {
            return invalid("player_acceleration and turn_rate must be non-negative");
        }
        if self.shoot_cooldown < 0.0 || self.invincibility_duration < 0.0 {
            return invalid("timers must be non-negative");
        }
        if self.starting_health == 0 {
            return invalid("starting_health must be at least 1");
        }
        if self.field_size == 0 {
            return invalid("field_size must be at least 1");
        }
        if self.spawn_speed.min > self.spawn_speed.max {
            return invalid("spawn_speed.min must not exceed spawn_speed.max");
        }
        Ok(())
    }
}
