//! Frame orchestrator
//!
//! Owns the game state for the lifetime of a session and runs the host's
//! per-frame contract: `update(dt)` then `render()`.

use crate::platform::{Host, Key};
use crate::renderer::{self, FrameBuffer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, autopilot, tick};

/// Session totals reported at shutdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub best_score: u32,
    pub rounds_lost: u32,
    pub asteroids_destroyed: u32,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    settings: Settings,
    stats: SessionStats,
}

impl Game {
    /// Build the state for a new session
    pub fn initialize(settings: Settings) -> Self {
        let seed = settings.resolve_seed();
        let state = GameState::new(seed, &settings.tuning);
        log::info!("Game initialized with seed: {}", seed);

        let mut game = Self {
            state,
            settings,
            stats: SessionStats::default(),
        };
        game.drain_events();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.settings.idle_mode = idle;
        log::info!("Idle mode: {}", idle);
    }

    /// Advance one frame: input, then the simulation tick
    pub fn update(&mut self, host: &mut impl Host, dt: f32) {
        if host.is_key_pressed(Key::Escape) {
            host.schedule_quit();
        }

        let dt = self.settings.clamp_dt(dt);
        let input = if self.settings.idle_mode {
            autopilot::steer(&self.state, &self.settings.tuning)
        } else {
            read_input(host)
        };

        tick(&mut self.state, &input, &self.settings.tuning, dt);
        self.stats.frames += 1;
        self.drain_events();
    }

    /// Draw the current state into the host's buffer
    pub fn render(&self, frame: &mut FrameBuffer) {
        renderer::render(frame, &self.state, self.settings.show_hud);
    }

    /// End the session, releasing the state
    pub fn finalize(self) -> SessionStats {
        let stats = SessionStats {
            best_score: self.stats.best_score.max(self.state.score),
            ..self.stats
        };
        log::info!(
            "Session over: {} frames, best score {}, {} rounds lost, {} asteroids destroyed",
            stats.frames,
            stats.best_score,
            stats.rounds_lost,
            stats.asteroids_destroyed
        );
        stats
    }

    fn drain_events(&mut self) {
        for event in std::mem::take(&mut self.state.events) {
            match event {
                GameEvent::BulletFired => log::trace!("Bullet fired"),
                GameEvent::AsteroidDestroyed { size, split } => {
                    self.stats.asteroids_destroyed += 1;
                    log::debug!("Asteroid destroyed (size {}, split: {})", size, split);
                }
                GameEvent::PlayerHit { health } => {
                    log::debug!("Player hit, health {}", health);
                }
                GameEvent::InvincibilityEnded => log::debug!("Invincibility ended"),
                GameEvent::RoundLost { score } => {
                    self.stats.rounds_lost += 1;
                    self.stats.best_score = self.stats.best_score.max(score);
                    log::info!("Round lost with score {}", score);
                }
                GameEvent::WaveSpawned { wave } => log::info!("Wave {} incoming", wave),
            }
        }
    }
}

/// Map held keys to this frame's intents
fn read_input(host: &impl Host) -> TickInput {
    TickInput {
        rotate_left: host.is_key_pressed(Key::Left),
        rotate_right: host.is_key_pressed(Key::Right),
        thrust: host.is_key_pressed(Key::Up),
        fire: host.is_key_pressed(Key::Fire),
    }
}
