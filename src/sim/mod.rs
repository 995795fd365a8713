//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Input arrives as `TickInput`, never from the host directly
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use collision::{collides, out_of_bounds};
pub use entity::{FlyingObject, Pilot, Player, VelocityUpdate};
pub use state::{GameEvent, GameState, PlayerStatus};
pub use tick::{TickInput, tick};
