//! The player character: runs in place, jumps, and dies to enemies.

use glam::Vec2;

use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH, RUN_FRAME_TICKS};
use crate::platform::{AssetError, SpriteHandle, SpriteStore, Surface};
use crate::sim::entity::{Contact, EntityKind};
use crate::sim::{Animation, Rect, TickInput, WorldInfo};
use crate::tuning::Tuning;

/// Player state is three independent flags, not one enum: combinations are
/// meaningful (alive but not moving is the initial/reset state).
#[derive(Debug)]
pub struct Player {
    bounds: Rect,
    direction: Vec2,

    alive: bool,
    moving: bool,
    jumping: bool,

    jump_force: Vec2,
    hold_gravity_scale: f32,

    standing: SpriteHandle,
    running: Animation,

    info: WorldInfo,
}

impl Player {
    pub fn new(info: WorldInfo, tuning: &Tuning, sprites: &SpriteStore) -> Result<Self, AssetError> {
        let standing = sprites.get("player_standing")?;
        let running = Animation::from_keys(
            sprites,
            RUN_FRAME_TICKS,
            &[
                "player_running0",
                "player_running1",
                "player_running2",
                "player_running3",
                "player_running4",
                "player_running5",
                "player_running6",
                "player_running7",
            ],
        )?;

        let mut player = Self {
            bounds: Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT),
            direction: Vec2::ZERO,
            alive: true,
            moving: false,
            jumping: false,
            jump_force: Vec2::new(0.0, tuning.jump_impulse),
            hold_gravity_scale: tuning.hold_gravity_scale,
            standing,
            running,
            info,
        };
        player.reset();
        Ok(player)
    }

    /// Back to the spawn state: at the spawn point, alive, standing still.
    pub fn reset(&mut self) {
        self.bounds.pos = self.info.spawn_point;
        self.alive = true;
        self.moving = false;
        self.jumping = false;
        self.direction = Vec2::ZERO;
    }

    pub fn update(&mut self, input: &TickInput) {
        if input.jump_pressed {
            if !self.moving {
                self.moving = true;
            }
            if !self.jumping {
                self.jumping = true;
                self.direction = self.jump_force;
            }
        }

        if self.moving {
            self.running.update();
        }

        self.apply_gravity(input);

        self.bounds.pos += self.direction;
    }

    /// Reduced gravity while the jump key is held implements variable jump
    /// height: a quick tap falls back sooner than a held press.
    fn apply_gravity(&mut self, input: &TickInput) {
        if !self.jumping {
            return;
        }
        let scalar = if input.jump_held {
            self.hold_gravity_scale
        } else {
            1.0
        };
        self.direction += self.info.gravity * scalar;
    }

    pub fn render(&self, gfx: &mut dyn Surface) {
        let sprite = if self.moving {
            self.running.current()
        } else {
            self.standing
        };
        gfx.draw_image(sprite, self.bounds);
    }

    /// React to an intersecting entity. Landing on the ground arrests the
    /// fall and snaps the player to rest exactly on top of it; touching an
    /// enemy ends the session.
    pub fn hit(&mut self, contact: &Contact) {
        match contact.kind {
            EntityKind::Ground => {
                self.jumping = false;
                self.bounds.pos.y = contact.bounds.pos.y - self.bounds.size.y;
                self.direction = Vec2::ZERO;
            }
            EntityKind::Enemy => {
                self.moving = false;
                self.alive = false;
                self.jumping = false;
                self.direction = Vec2::ZERO;
            }
            EntityKind::Player | EntityKind::Clouds => {}
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }
}
