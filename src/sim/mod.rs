//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `update` call is one tick)
//! - Seeded RNG only
//! - Stable iteration order (handler insertion order)
//! - Rendering goes through the abstract `Surface` trait, never a concrete
//!   platform

pub mod animation;
pub mod clouds;
pub mod counter;
pub mod enemy;
pub mod entity;
pub mod handler;
pub mod hud;
pub mod player;
pub mod rect;
pub mod world;

pub use animation::Animation;
pub use clouds::Clouds;
pub use counter::Counter;
pub use enemy::{Enemy, EnemyFactory, EnemyKind};
pub use entity::{Contact, Entity, EntityKind, Ground};
pub use handler::Handler;
pub use hud::Hud;
pub use player::Player;
pub use rect::Rect;
pub use world::{World, WorldInfo};

use crate::platform::Surface;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump key level (held down this tick)
    pub jump_held: bool,
    /// Jump key edge (pressed this tick, released the tick before)
    pub jump_pressed: bool,
    /// Session reset edge (restart after game over)
    pub reset: bool,
}

/// Anything driven by the fixed-timestep loop: advanced one tick at a time
/// and drawn once per frame from its current state.
pub trait Loopable {
    /// Advance own state by one tick. Side effects on `self` only.
    fn update(&mut self, input: &TickInput);

    /// Draw the current state. Must not mutate simulation state.
    fn render(&self, gfx: &mut dyn Surface);
}
