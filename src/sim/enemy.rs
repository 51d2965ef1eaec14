//! Enemies and their procedural factory.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{FLYING_LIFT_MAX, FLYING_LIFT_MIN};
use crate::platform::{AssetError, SpriteHandle, SpriteStore, Surface};
use crate::sim::{Rect, WorldInfo};

/// An obstacle scrolling leftward toward the player. Construction is
/// involved enough (geometry, sprite, placement) that enemies should come
/// from an [`EnemyFactory`] rather than be built at call sites.
#[derive(Debug)]
pub struct Enemy {
    kind: EnemyKind,
    bounds: Rect,
    direction: Vec2,
    img: SpriteHandle,
}

impl Enemy {
    pub fn new(kind: EnemyKind, bounds: Rect, img: SpriteHandle) -> Self {
        Self {
            kind,
            bounds,
            direction: Vec2::ZERO,
            img,
        }
    }

    /// Drift by the fixed direction vector. Enemies carry no state beyond
    /// position; they never react to being hit.
    pub fn update(&mut self) {
        self.bounds.pos += self.direction;
    }

    pub fn render(&self, gfx: &mut dyn Surface) {
        gfx.draw_image(self.img, self.bounds);
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction;
    }
}

/// The three obstacle shapes. Tall and Short sit on the ground; Flying
/// hovers at a randomized height and must be ducked under or jumped past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Short,
    Tall,
    Flying,
}

impl EnemyKind {
    /// Fixed (width, height) per kind; sprites are drawn to match.
    pub fn size(self) -> Vec2 {
        match self {
            EnemyKind::Tall => Vec2::new(32.0, 64.0),
            EnemyKind::Short => Vec2::new(48.0, 32.0),
            EnemyKind::Flying => Vec2::new(32.0, 24.0),
        }
    }

    fn sprite_key(self) -> &'static str {
        match self {
            EnemyKind::Tall => "tall_enemy",
            EnemyKind::Short => "short_enemy",
            EnemyKind::Flying => "flying_enemy",
        }
    }
}

/// Produces enemies with type-specific geometry and placement relative to
/// the ground and screen, so the math never leaks into call sites. Carries
/// its own seeded RNG for deterministic generation.
#[derive(Debug)]
pub struct EnemyFactory {
    short_img: SpriteHandle,
    tall_img: SpriteHandle,
    flying_img: SpriteHandle,

    screen: Vec2,
    info: WorldInfo,
    rng: Pcg32,
}

impl EnemyFactory {
    pub fn new(
        sprites: &SpriteStore,
        screen: Vec2,
        info: WorldInfo,
        seed: u64,
    ) -> Result<Self, AssetError> {
        Ok(Self {
            short_img: sprites.get(EnemyKind::Short.sprite_key())?,
            tall_img: sprites.get(EnemyKind::Tall.sprite_key())?,
            flying_img: sprites.get(EnemyKind::Flying.sprite_key())?,
            screen,
            info,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Generate one enemy of the given kind, spawned at the right edge of
    /// the screen, resting on the ground line (flying enemies are lifted by
    /// a uniform draw from [70, 190)), moving leftward at `speed`.
    pub fn generate(&mut self, speed: f32, kind: EnemyKind) -> Enemy {
        let size = kind.size();
        let img = match kind {
            EnemyKind::Tall => self.tall_img,
            EnemyKind::Short => self.short_img,
            EnemyKind::Flying => self.flying_img,
        };

        let x = self.screen.x;
        let mut y = self.screen.y - self.info.ground_height - size.y;
        if kind == EnemyKind::Flying {
            y -= self.rng.random_range(FLYING_LIFT_MIN..FLYING_LIFT_MAX);
        }

        let mut enemy = Enemy::new(kind, Rect::from_pos_size(Vec2::new(x, y), size), img);
        enemy.set_direction(Vec2::new(-speed, 0.0));
        enemy
    }

    /// Weighted random generation: a uniform draw in [0, 300) partitioned
    /// as [0,125) Tall, [125,250) Short, [250,300) Flying, i.e. roughly
    /// 41.7% / 41.7% / 16.7%.
    pub fn generate_random(&mut self, speed: f32) -> Enemy {
        let roll = self.rng.random_range(0.0..300.0);
        let kind = if roll < 125.0 {
            EnemyKind::Tall
        } else if roll < 250.0 {
            EnemyKind::Short
        } else {
            EnemyKind::Flying
        };
        self.generate(speed, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_sprites() -> SpriteStore {
        let mut store = SpriteStore::new();
        store.register("short_enemy", SpriteHandle(1));
        store.register("tall_enemy", SpriteHandle(2));
        store.register("flying_enemy", SpriteHandle(3));
        store
    }

    fn test_factory(seed: u64) -> EnemyFactory {
        let info = WorldInfo {
            ground_height: 100.0,
            gravity: Vec2::new(0.0, 0.68),
            spawn_point: Vec2::new(25.0, 408.0),
        };
        EnemyFactory::new(&test_sprites(), Vec2::new(1280.0, 720.0), info, seed).unwrap()
    }

    #[test]
    fn test_missing_sprite_fails_construction() {
        let info = WorldInfo {
            ground_height: 100.0,
            gravity: Vec2::ZERO,
            spawn_point: Vec2::ZERO,
        };
        let err = EnemyFactory::new(&SpriteStore::new(), Vec2::new(800.0, 600.0), info, 0);
        assert!(err.is_err());
    }

    #[test]
    fn test_grounded_placement() {
        let mut factory = test_factory(1);
        for kind in [EnemyKind::Tall, EnemyKind::Short] {
            let enemy = factory.generate(5.0, kind);
            let bounds = enemy.bounds();
            // Spawns exactly at the right edge of the screen.
            assert_eq!(bounds.pos.x, 1280.0);
            // Rests exactly on the ground line.
            assert_eq!(bounds.bottom(), 720.0 - 100.0);
            assert_eq!(bounds.size, kind.size());
        }
    }

    #[test]
    fn test_flying_placement_range() {
        let mut factory = test_factory(2);
        let ground_line = 720.0 - 100.0;
        for _ in 0..1000 {
            let enemy = factory.generate(5.0, EnemyKind::Flying);
            let lift = ground_line - enemy.bounds().bottom();
            assert!(
                (FLYING_LIFT_MIN..FLYING_LIFT_MAX).contains(&lift),
                "lift {lift} out of range"
            );
        }
    }

    #[test]
    fn test_leftward_movement() {
        let mut factory = test_factory(3);
        let mut enemy = factory.generate(15.0, EnemyKind::Short);
        assert_eq!(enemy.direction(), Vec2::new(-15.0, 0.0));

        let x0 = enemy.bounds().pos.x;
        enemy.update();
        assert_eq!(enemy.bounds().pos.x, x0 - 15.0);
        assert_eq!(enemy.bounds().bottom(), 720.0 - 100.0);
    }

    #[test]
    fn test_random_distribution() {
        let mut factory = test_factory(0xdecade);
        let mut counts: HashMap<EnemyKind, u32> = HashMap::new();

        const TRIALS: u32 = 300_000;
        for _ in 0..TRIALS {
            let enemy = factory.generate_random(5.0);
            *counts.entry(enemy.kind()).or_insert(0) += 1;
        }

        let share = |kind| counts[&kind] as f64 / TRIALS as f64;
        // Expected 125/300, 125/300, 50/300.
        assert!((share(EnemyKind::Tall) - 125.0 / 300.0).abs() < 0.01);
        assert!((share(EnemyKind::Short) - 125.0 / 300.0).abs() < 0.01);
        assert!((share(EnemyKind::Flying) - 50.0 / 300.0).abs() < 0.01);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = test_factory(99);
        let mut b = test_factory(99);
        for _ in 0..50 {
            let ea = a.generate_random(5.0);
            let eb = b.generate_random(5.0);
            assert_eq!(ea.kind(), eb.kind());
            assert_eq!(ea.bounds(), eb.bounds());
        }
    }
}
