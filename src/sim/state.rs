//! Game state and spawn logic
//!
//! All state that changes during a round lives here. Randomness only comes
//! from the seeded `rng`, so a seed plus an input stream replays exactly.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{ASTEROID_MODEL, BULLET_MODEL, FlyingObject, Pilot, Player};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::tuning::Tuning;
use crate::{arena_center, heading_vector};

/// Player damage state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerStatus {
    Normal,
    /// Collisions ignored until `elapsed` exceeds the invincibility duration
    Invincible { elapsed: f32 },
}

/// Things that happened during a tick, drained by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BulletFired,
    AsteroidDestroyed { size: u32, split: bool },
    PlayerHit { health: u8 },
    InvincibilityEnded,
    RoundLost { score: u32 },
    WaveSpawned { wave: u32 },
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u32,
    pub health: u8,
    /// Seconds since the last shot
    pub shoot_cooldown: f32,
    pub status: PlayerStatus,
    pub player: Player,
    pub asteroids: Vec<FlyingObject>,
    pub bullets: Vec<FlyingObject>,
    /// Waves spawned since the last reset
    pub wave: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the current tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new round with the given seed and an initial field
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            health: tuning.starting_health,
            shoot_cooldown: 0.0,
            status: PlayerStatus::Normal,
            player: spawn_player(tuning),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            wave: 0,
            time_ticks: 0,
            events: Vec::new(),
        };

        state.spawn_field(tuning);

        state
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        matches!(self.status, PlayerStatus::Invincible { .. })
    }

    /// Lost round: back to a fresh player with empty skies.
    ///
    /// The RNG keeps running so consecutive rounds differ.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.score = 0;
        self.health = tuning.starting_health;
        self.shoot_cooldown = 0.0;
        self.status = PlayerStatus::Normal;
        self.player = spawn_player(tuning);
        self.asteroids.clear();
        self.bullets.clear();
        self.wave = 0;
    }

    /// Spawn a wave of asteroids along the play area border
    pub fn spawn_field(&mut self, tuning: &Tuning) {
        for _ in 0..tuning.field_size {
            let s = self.rng.random_range(0.0..perimeter_length());
            let pos = perimeter_point(s);
            let rock = self.random_asteroid(pos, tuning.asteroid_size, tuning);
            self.asteroids.push(rock);
        }
        self.wave += 1;
        self.events.push(GameEvent::WaveSpawned { wave: self.wave });
    }

    /// Asteroid at `pos` with a random heading and speed
    pub fn random_asteroid(&mut self, pos: Vec2, size: u32, tuning: &Tuning) -> FlyingObject {
        let angle = self.rng.random_range(0.0..TAU);
        let speed = tuning.spawn_speed.sample(self.rng.random::<f32>());
        let velocity = heading_vector(angle.to_degrees()) * speed;
        FlyingObject::new(pos, velocity, size, angle.to_degrees(), ASTEROID_MODEL)
    }

    /// Remove the asteroid at `index`, splitting it when large enough.
    ///
    /// Returns the number of children spawned (0 or 2).
    pub fn destroy_asteroid(&mut self, index: usize, tuning: &Tuning) -> usize {
        let parent = self.asteroids.swap_remove(index);
        let split = parent.size > tuning.split_threshold;
        if split {
            for _ in 0..2 {
                let child = self.random_asteroid(parent.position, parent.size / 2, tuning);
                self.asteroids.push(child);
            }
        }
        self.events.push(GameEvent::AsteroidDestroyed {
            size: parent.size,
            split,
        });
        if split { 2 } else { 0 }
    }

    /// Fire a bullet from the player's nose direction
    pub fn fire_bullet(&mut self, tuning: &Tuning) {
        let body = &self.player.body;
        let velocity = heading_vector(body.heading) * tuning.bullet_speed;
        self.bullets.push(FlyingObject::new(
            body.position,
            velocity,
            tuning.bullet_size,
            body.heading,
            BULLET_MODEL,
        ));
        self.events.push(GameEvent::BulletFired);
    }
}

/// Fresh player at the arena center
fn spawn_player(tuning: &Tuning) -> Player {
    Player::new(
        arena_center(),
        tuning.player_size,
        Pilot {
            acceleration: tuning.player_acceleration,
            speed_limit: tuning.player_speed_limit,
        },
    )
}

/// Length of the spawn border: the outermost pixel ring of the play area
pub fn perimeter_length() -> f32 {
    2.0 * ((ARENA_WIDTH - 1.0) + (ARENA_HEIGHT - 1.0))
}

/// Map `s ∈ [0, perimeter_length())` onto the border: top, right, bottom, left.
///
/// Every point lies in `[0, W - 1] × [0, H - 1]`.
pub fn perimeter_point(s: f32) -> Vec2 {
    let (w, h) = (ARENA_WIDTH - 1.0, ARENA_HEIGHT - 1.0);
    let p = if s < w {
        Vec2::new(s, 0.0)
    } else if s < w + h {
        Vec2::new(w, s - w)
    } else if s < 2.0 * w + h {
        Vec2::new(2.0 * w + h - s, h)
    } else {
        Vec2::new(0.0, 2.0 * (w + h) - s)
    };
    p.clamp(Vec2::ZERO, Vec2::new(w, h))
}
