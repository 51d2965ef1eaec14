//! Entity identity, collision notification and the static ground.

use glam::Vec2;

use crate::consts::GROUND_GRASS_FRACTION;
use crate::platform::{Color, Surface};
use crate::sim::{Enemy, Loopable, Player, Rect, TickInput};

/// Closed set of entity identities. Collision reactions match exhaustively
/// on this tag, so adding a kind is a compile-checked change everywhere it
/// matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Ground,
    Enemy,
    Clouds,
}

/// What an entity learns about the thing that intersected it: the identity
/// tag plus a snapshot of its bounds. Reacting to a contact mutates the
/// receiver only, which keeps the collision pass free of aliasing.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub kind: EntityKind,
    pub bounds: Rect,
}

/// A simulation unit tracked by the world's handler. Dispatch is a closed
/// enum rather than trait objects: the kind set is fixed and exhaustively
/// enumerable.
#[derive(Debug)]
pub enum Entity {
    Ground(Ground),
    Player(Player),
    Enemy(Enemy),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Ground(_) => EntityKind::Ground,
            Entity::Player(_) => EntityKind::Player,
            Entity::Enemy(_) => EntityKind::Enemy,
        }
    }

    pub fn is(&self, kind: EntityKind) -> bool {
        self.kind() == kind
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Ground(g) => g.bounds(),
            Entity::Player(p) => p.bounds(),
            Entity::Enemy(e) => e.bounds(),
        }
    }

    /// Current movement vector. The ground is static and always reports
    /// zero.
    pub fn direction(&self) -> Vec2 {
        match self {
            Entity::Ground(_) => Vec2::ZERO,
            Entity::Player(p) => p.direction(),
            Entity::Enemy(e) => e.direction(),
        }
    }

    /// Notify this entity that `contact` intersected it. The ground never
    /// reacts, and enemies deliberately ignore the player: only the player
    /// reacts to what it runs into.
    pub fn hit(&mut self, contact: &Contact) {
        match self {
            Entity::Ground(_) => {}
            Entity::Player(p) => p.hit(contact),
            Entity::Enemy(_) => {}
        }
    }
}

impl Loopable for Entity {
    fn update(&mut self, input: &TickInput) {
        match self {
            // Static reference surface.
            Entity::Ground(_) => {}
            Entity::Player(p) => p.update(input),
            Entity::Enemy(e) => e.update(),
        }
    }

    fn render(&self, gfx: &mut dyn Surface) {
        match self {
            Entity::Ground(g) => g.render(gfx),
            Entity::Player(p) => p.render(gfx),
            Entity::Enemy(e) => e.render(gfx),
        }
    }
}

/// The base nothing can fall through. Stops the player from sinking and
/// anchors enemy placement.
#[derive(Debug)]
pub struct Ground {
    bounds: Rect,
    grass: Rect,
}

impl Ground {
    pub fn new(height: f32, screen: Vec2) -> Self {
        let bounds = Rect::new(0.0, screen.y - height, screen.x, height);
        let grass = Rect::new(
            0.0,
            screen.y - height,
            screen.x,
            height * GROUND_GRASS_FRACTION,
        );
        Self { bounds, grass }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn render(&self, gfx: &mut dyn Surface) {
        gfx.draw_rect_outline(self.bounds, Color::BLACK, 3.0);
        gfx.fill_rect(self.bounds, Color::BROWN);
        gfx.draw_rect_outline(self.grass, Color::BLACK, 3.0);
        gfx.fill_rect(self.grass, Color::GREEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_spans_screen_bottom() {
        let ground = Ground::new(100.0, Vec2::new(1280.0, 720.0));
        let bounds = ground.bounds();
        assert_eq!(bounds.pos, Vec2::new(0.0, 620.0));
        assert_eq!(bounds.size, Vec2::new(1280.0, 100.0));
    }

    #[test]
    fn test_ground_ignores_hits() {
        let mut entity = Entity::Ground(Ground::new(100.0, Vec2::new(800.0, 600.0)));
        let before = entity.bounds();
        entity.hit(&Contact {
            kind: EntityKind::Player,
            bounds: Rect::new(0.0, 0.0, 40.0, 64.0),
        });
        assert_eq!(entity.bounds(), before);
    }

    #[test]
    fn test_kind_tags() {
        let entity = Entity::Ground(Ground::new(50.0, Vec2::new(800.0, 600.0)));
        assert!(entity.is(EntityKind::Ground));
        assert!(!entity.is(EntityKind::Player));
        assert_eq!(entity.direction(), Vec2::ZERO);
    }
}
