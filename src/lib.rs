//! Kiwi Run - a side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, world orchestration)
//! - `game_loop`: Fixed-timestep scheduler decoupling ticks from frames
//! - `input`: Key level/edge latching
//! - `platform`: Host collaborator traits (drawing surface, sprite registry)
//! - `tuning`: Data-driven game balance

pub mod game_loop;
pub mod input;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use game_loop::GameLoop;
pub use input::{Key, Keys};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate in ticks per second.
    pub const UPDATE_RATE: f64 = 60.0;

    /// Ground band height in screen units.
    pub const GROUND_HEIGHT: f32 = 100.0;
    /// Fraction of the ground band drawn as the grass strip.
    pub const GROUND_GRASS_FRACTION: f32 = 0.125;

    /// Downward acceleration applied per tick while airborne.
    pub const GRAVITY_Y: f32 = 0.68;
    /// Gravity multiplier while the jump key is held (variable jump height).
    pub const HOLD_GRAVITY_SCALE: f32 = 0.6;
    /// Instantaneous upward impulse applied on jump.
    pub const JUMP_IMPULSE_Y: f32 = -10.0;

    /// Player geometry
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Horizontal position the player runs at.
    pub const PLAYER_SPAWN_X: f32 = 25.0;
    /// Ticks per frame of the running animation.
    pub const RUN_FRAME_TICKS: u32 = 8;

    /// Score threshold between difficulty levels.
    pub const SCORE_PER_LEVEL: i64 = 500;
    /// Ticks between enemy spawns while the player is moving.
    pub const SPAWN_INTERVAL_TICKS: i64 = 100;
    /// World scroll speed per difficulty level.
    pub const SPEED_PER_LEVEL: f32 = 5.0;

    /// Extra upward offset range for flying enemies, drawn uniformly.
    pub const FLYING_LIFT_MIN: f32 = 70.0;
    pub const FLYING_LIFT_MAX: f32 = 190.0;

    /// Cloud layer scrolls at this fraction of the world speed (parallax).
    pub const CLOUD_TWEEN: f32 = 0.1;
    /// Gap between neighbouring cloud sprites.
    pub const CLOUD_MARGIN: f32 = 25.0;

    /// Game-over overlay geometry (keeps the sprite's aspect ratio).
    pub const GAME_OVER_WIDTH: f32 = 610.0;
    pub const GAME_OVER_HEIGHT: f32 = 128.0;
}
