//! Per-frame simulation step
//!
//! Order matters: input first (so a same-frame turn affects this frame's
//! motion), then integration, culling, collisions and wave respawn.

use super::collision::{collides, first_hit, out_of_bounds};
use super::entity::VelocityUpdate;
use super::state::{GameEvent, GameState, PlayerStatus};
use crate::tuning::Tuning;
use crate::wrap_position;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    state.time_ticks += 1;

    apply_input(state, input, tuning, dt);
    integrate(state, dt);

    state.bullets.retain(|b| !out_of_bounds(b.position));

    resolve_bullet_hits(state, tuning);

    if resolve_player_hits(state, tuning, dt) {
        // Round lost: restart from empty skies, next wave arrives next tick
        return;
    }

    if state.asteroids.is_empty() {
        state.spawn_field(tuning);
    }
}

fn apply_input(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    let body = &mut state.player.body;
    if input.rotate_left {
        body.rotate(-tuning.turn_rate * dt);
    }
    if input.rotate_right {
        body.rotate(tuning.turn_rate * dt);
    }

    if input.thrust && state.player.thrust(dt) == VelocityUpdate::Rejected {
        log::trace!("Thrust dropped at speed limit");
    }

    state.shoot_cooldown += dt;
    if input.fire && state.shoot_cooldown > tuning.shoot_cooldown {
        state.shoot_cooldown = 0.0;
        state.fire_bullet(tuning);
    }
}

fn integrate(state: &mut GameState, dt: f32) {
    let player = &mut state.player.body;
    let pos = player.advance(dt);
    player.position = wrap_position(pos);

    // Bullets fly off the edge instead of wrapping
    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }

    for rock in &mut state.asteroids {
        let pos = rock.advance(dt);
        rock.position = wrap_position(pos);
    }
}

fn resolve_bullet_hits(state: &mut GameState, tuning: &Tuning) {
    let mut i = 0;
    while i < state.bullets.len() {
        match first_hit(&state.bullets[i], &state.asteroids) {
            Some(hit) => {
                state.destroy_asteroid(hit, tuning);
                state.bullets.swap_remove(i);
                state.score += tuning.asteroid_score;
            }
            None => i += 1,
        }
    }
}

/// Returns true when the round was lost this tick
fn resolve_player_hits(state: &mut GameState, tuning: &Tuning, dt: f32) -> bool {
    if let PlayerStatus::Invincible { elapsed } = &mut state.status {
        *elapsed += dt;
        if *elapsed > tuning.invincibility_duration {
            state.status = PlayerStatus::Normal;
            state.events.push(GameEvent::InvincibilityEnded);
        }
        return false;
    }

    let player = &state.player.body;
    if !state.asteroids.iter().any(|rock| collides(player, rock)) {
        return false;
    }

    state.health = state.health.saturating_sub(1);
    state.events.push(GameEvent::PlayerHit {
        health: state.health,
    });

    if state.health < 1 {
        state.events.push(GameEvent::RoundLost { score: state.score });
        state.reset(tuning);
        return true;
    }

    state.status = PlayerStatus::Invincible { elapsed: 0.0 };
    false
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::arena_center;
    use crate::consts::{ARENA_HEIGHT, FRAME_DT};
    use crate::sim::entity::{ASTEROID_MODEL, BULLET_MODEL, FlyingObject};

    fn quiet_state(seed: u64, tuning: &Tuning) -> GameState {
        let mut state = GameState::new(seed, tuning);
        state.asteroids.clear();
        state.events.clear();
        // One distant, stationary rock keeps waves from respawning
        state.asteroids.push(FlyingObject::new(
            Vec2::new(50.0, 50.0),
            Vec2::ZERO,
            20,
            0.0,
            ASTEROID_MODEL,
        ));
        state
    }

    fn bullet_at(x: f32, y: f32) -> FlyingObject {
        FlyingObject::new(Vec2::new(x, y), Vec2::ZERO, 2, 0.0, BULLET_MODEL)
    }

    #[test]
    fn test_rotation_applies_before_integration() {
        let tuning = Tuning::default();
        let mut state = quiet_state(1, &tuning);
        let input = TickInput {
            rotate_right: true,
            thrust: true,
            ..Default::default()
        };
        tick(&mut state, &input, &tuning, 1.0);

        // Turned 90° then thrust to the right within the same tick
        assert!((state.player.body.heading - 90.0).abs() < 1e-4);
        assert!(state.player.body.velocity.x > 0.0);
        assert!(state.player.body.velocity.y.abs() < 1e-3);
        assert!(state.player.body.position.x > arena_center().x);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let tuning = Tuning::default();
        let mut state = quiet_state(2, &tuning);
        state.shoot_cooldown = tuning.shoot_cooldown + 0.01;

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, &tuning, FRAME_DT);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.shoot_cooldown, 0.0);

        for _ in 0..10 {
            tick(&mut state, &fire, &tuning, FRAME_DT);
        }
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(
            state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::BulletFired))
                .count(),
            1
        );
    }

    #[test]
    fn test_bullet_culling_at_border() {
        let tuning = Tuning::default();
        let mut state = quiet_state(3, &tuning);
        state.bullets.push(bullet_at(0.0, 300.0));
        state.bullets.push(bullet_at(400.0, ARENA_HEIGHT - 1.0));
        state.bullets.push(bullet_at(400.0, 300.0));

        tick(&mut state, &TickInput::default(), &tuning, FRAME_DT);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_bullets_do_not_wrap() {
        let tuning = Tuning::default();
        let mut state = quiet_state(4, &tuning);
        let mut bullet = bullet_at(5.0, 300.0);
        bullet.velocity = Vec2::new(-200.0, 0.0);
        state.bullets.push(bullet);

        tick(&mut state, &TickInput::default(), &tuning, 0.1);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_bullet_destroys_one_asteroid_and_scores() {
        let tuning = Tuning::default();
        let mut state = quiet_state(5, &tuning);
        state.asteroids.push(FlyingObject::new(
            Vec2::new(400.0, 300.0),
            Vec2::ZERO,
            20,
            0.0,
            ASTEROID_MODEL,
        ));
        state.asteroids.push(FlyingObject::new(
            Vec2::new(405.0, 300.0),
            Vec2::ZERO,
            20,
            0.0,
            ASTEROID_MODEL,
        ));
        state.bullets.push(bullet_at(402.0, 300.0));

        tick(&mut state, &TickInput::default(), &tuning, 0.0);

        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 50);
        // One destroyed and split in two: 1 distant + 1 survivor + 2 children
        assert_eq!(state.asteroids.len(), 4);
        assert_eq!(state.asteroids.iter().filter(|a| a.size == 10).count(), 2);
    }

    #[test]
    fn test_player_hit_grants_invincibility() {
        let tuning = Tuning::default();
        let mut state = quiet_state(6, &tuning);
        state.asteroids.push(FlyingObject::new(
            arena_center(),
            Vec2::ZERO,
            20,
            0.0,
            ASTEROID_MODEL,
        ));

        tick(&mut state, &TickInput::default(), &tuning, 0.5);
        assert_eq!(state.health, 4);
        assert!(state.is_invincible());

        // Still overlapping, but invincible: no further damage
        // 3.5 s of overlap: the window only closes once elapsed passes 3 s
        for _ in 0..7 {
            tick(&mut state, &TickInput::default(), &tuning, 0.5);
        }
        assert_eq!(state.health, 4);
        assert!(!state.is_invincible());
        assert!(state.events.contains(&GameEvent::InvincibilityEnded));

        // Window over: the next overlap hurts again
        tick(&mut state, &TickInput::default(), &tuning, 0.5);
        assert_eq!(state.health, 3);
    }

    #[test]
    fn test_loss_resets_round_in_same_tick() {
        let tuning = Tuning::default();
        let mut state = quiet_state(7, &tuning);
        state.health = 1;
        state.score = 1200;
        state.bullets.push(bullet_at(700.0, 500.0));
        state.asteroids.push(FlyingObject::new(
            arena_center(),
            Vec2::ZERO,
            20,
            0.0,
            ASTEROID_MODEL,
        ));

        tick(&mut state, &TickInput::default(), &tuning, FRAME_DT);

        assert_eq!(state.health, 5);
        assert_eq!(state.score, 0);
        assert!(state.asteroids.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.player.body.position, arena_center());
        assert!(!state.is_invincible());
        assert!(state.events.contains(&GameEvent::RoundLost { score: 1200 }));

        // A new wave arrives on the following tick
        tick(&mut state, &TickInput::default(), &tuning, FRAME_DT);
        assert_eq!(state.asteroids.len(), tuning.field_size);
    }

    #[test]
    fn test_clearing_field_spawns_new_wave() {
        let tuning = Tuning::default();
        let mut state = quiet_state(8, &tuning);
        state.asteroids[0].size = 4;
        state.bullets.push(bullet_at(52.0, 50.0));

        tick(&mut state, &TickInput::default(), &tuning, 0.0);
        assert_eq!(state.asteroids.len(), tuning.field_size);
        assert_eq!(state.wave, 2);
        assert!(state.events.contains(&GameEvent::WaveSpawned { wave: 2 }));
    }

    #[test]
    fn test_player_wraps_across_edge() {
        let tuning = Tuning::default();
        let mut state = quiet_state(9, &tuning);
        state.player.body.position = Vec2::new(1020.0, 400.0);
        state.player.body.velocity = Vec2::new(100.0, 0.0);

        tick(&mut state, &TickInput::default(), &tuning, 0.1);
        assert!((state.player.body.position.x - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let tuning = Tuning::default();
        let mut state1 = GameState::new(99999, &tuning);
        let mut state2 = GameState::new(99999, &tuning);

        let inputs = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput {
                rotate_left: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                rotate_right: true,
                thrust: true,
                fire: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = inputs[i % inputs.len()];
            tick(&mut state1, &input, &tuning, FRAME_DT);
            tick(&mut state2, &input, &tuning, FRAME_DT);
        }

        assert_eq!(state1.time_ticks, 600);
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.health, state2.health);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.asteroids, state2.asteroids);
        assert_eq!(state1.bullets, state2.bullets);
    }
}
