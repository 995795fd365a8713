//! Flying objects and the pilot component
//!
//! Every moving thing (player, asteroids, bullets) is a `FlyingObject`.
//! Only the player carries a `Pilot`, which adds thrust and a speed cap.

use glam::Vec2;

use crate::heading_vector;

/// Player ship outline (nose up), unit space
pub const SHUTTLE_MODEL: &[Vec2] = &[
    Vec2::new(-1.5, 1.0),
    Vec2::new(0.0, -2.5),
    Vec2::new(1.5, 1.0),
];

/// Jagged rock outline, unit space
pub const ASTEROID_MODEL: &[Vec2] = &[
    Vec2::new(0.0, -1.0),
    Vec2::new(0.6, -0.8),
    Vec2::new(1.0, -0.2),
    Vec2::new(0.8, 0.5),
    Vec2::new(0.3, 1.0),
    Vec2::new(-0.4, 0.8),
    Vec2::new(-1.0, 0.3),
    Vec2::new(-0.8, -0.6),
];

/// Bullet outline, unit space
pub const BULLET_MODEL: &[Vec2] = &[
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
];

/// A moving entity with a polygon model
#[derive(Debug, Clone, PartialEq)]
pub struct FlyingObject {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Degrees, 0 = up, clockwise positive
    pub heading: f32,
    /// Collision radius, also the model scale
    pub size: u32,
    /// Vertices in object-local unit space
    pub model: &'static [Vec2],
}

impl FlyingObject {
    pub fn new(position: Vec2, velocity: Vec2, size: u32, heading: f32, model: &'static [Vec2]) -> Self {
        Self {
            position,
            velocity,
            heading,
            size,
            model,
        }
    }

    /// Integrate one step; the caller decides whether to wrap.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.position += self.velocity * dt;
        self.position
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.heading += degrees;
    }

    /// Collision radius as a float
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32
    }
}

/// Outcome of a velocity change on a piloted entity
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityUpdate {
    Accepted,
    /// The new speed would exceed the limit; velocity is untouched
    Rejected,
}

/// Thrust and speed cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pilot {
    pub acceleration: f32,
    pub speed_limit: f32,
}

impl Pilot {
    /// Accelerate along the body's heading for `dt` seconds
    pub fn apply_thrust(&self, body: &mut FlyingObject, dt: f32) -> VelocityUpdate {
        let delta = heading_vector(body.heading) * self.acceleration * dt;
        self.add_velocity(body, delta)
    }

    /// Add `delta` unless the result breaks the speed limit.
    ///
    /// Over-limit updates are dropped whole, never clamped to the limit.
    pub fn add_velocity(&self, body: &mut FlyingObject, delta: Vec2) -> VelocityUpdate {
        let candidate = body.velocity + delta;
        if candidate.length() > self.speed_limit {
            return VelocityUpdate::Rejected;
        }
        body.velocity = candidate;
        VelocityUpdate::Accepted
    }
}

/// The player ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: FlyingObject,
    pub pilot: Pilot,
}

impl Player {
    pub fn new(position: Vec2, size: u32, pilot: Pilot) -> Self {
        Self {
            body: FlyingObject::new(position, Vec2::ZERO, size, 0.0, SHUTTLE_MODEL),
            pilot,
        }
    }

    pub fn thrust(&mut self, dt: f32) -> VelocityUpdate {
        self.pilot.apply_thrust(&mut self.body, dt)
    }

    pub fn add_velocity(&mut self, delta: Vec2) -> VelocityUpdate {
        self.pilot.add_velocity(&mut self.body, delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pilot() -> Pilot {
        Pilot {
            acceleration: 50.0,
            speed_limit: 200.0,
        }
    }

    #[test]
    fn test_advance_integrates_velocity() {
        let mut rock = FlyingObject::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(30.0, -20.0),
            20,
            0.0,
            ASTEROID_MODEL,
        );
        let pos = rock.advance(0.5);
        assert_eq!(pos, Vec2::new(25.0, 0.0));
        assert_eq!(rock.position, pos);
    }

    #[test]
    fn test_thrust_follows_heading() {
        let mut player = Player::new(Vec2::ZERO, 8, pilot());
        assert_eq!(player.thrust(1.0), VelocityUpdate::Accepted);
        assert!(player.body.velocity.x.abs() < 1e-4);
        assert!((player.body.velocity.y + 50.0).abs() < 1e-4);

        player.body.velocity = Vec2::ZERO;
        player.body.rotate(90.0);
        assert_eq!(player.thrust(0.5), VelocityUpdate::Accepted);
        assert!((player.body.velocity.x - 25.0).abs() < 1e-4);
        assert!(player.body.velocity.y.abs() < 1e-4);
    }

    #[test]
    fn test_over_limit_update_is_rejected_not_clamped() {
        let mut player = Player::new(Vec2::ZERO, 8, pilot());
        player.body.velocity = Vec2::new(0.0, -190.0);

        let before = player.body.velocity;
        assert_eq!(player.thrust(1.0), VelocityUpdate::Rejected);
        assert_eq!(player.body.velocity, before);

        // A smaller push still fits under the cap
        assert_eq!(player.thrust(0.1), VelocityUpdate::Accepted);
        assert!((player.body.velocity.length() - 195.0).abs() < 1e-3);
    }

    #[test]
    fn test_exactly_at_limit_is_accepted() {
        let mut player = Player::new(Vec2::ZERO, 8, pilot());
        assert_eq!(
            player.add_velocity(Vec2::new(200.0, 0.0)),
            VelocityUpdate::Accepted
        );
        assert_eq!(player.body.velocity.length(), 200.0);
    }

    proptest! {
        #[test]
        fn prop_velocity_never_exceeds_limit(
            vx in -140.0f32..140.0,
            vy in -140.0f32..140.0,
            dx in -400.0f32..400.0,
            dy in -400.0f32..400.0,
        ) {
            let mut player = Player::new(Vec2::ZERO, 8, pilot());
            player.body.velocity = Vec2::new(vx, vy);
            let before = player.body.velocity;

            match player.add_velocity(Vec2::new(dx, dy)) {
                VelocityUpdate::Accepted => {
                    prop_assert!(player.body.velocity.length() <= 200.0);
                }
                VelocityUpdate::Rejected => {
                    prop_assert_eq!(player.body.velocity, before);
                }
            }
        }
    }
}
