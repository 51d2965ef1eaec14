//! One playthrough's entity graph and tick-level orchestration.

use glam::Vec2;

use crate::consts::{GAME_OVER_HEIGHT, GAME_OVER_WIDTH, PLAYER_HEIGHT, PLAYER_SPAWN_X};
use crate::platform::{AssetError, Color, SpriteHandle, SpriteStore, Surface};
use crate::sim::entity::{Contact, Entity, EntityKind, Ground};
use crate::sim::{
    Clouds, Counter, EnemyFactory, Handler, Hud, Loopable, Player, Rect, TickInput,
};
use crate::tuning::Tuning;

/// Session constants, immutable after construction. Shared (by copy) with
/// the player and the enemy factory.
#[derive(Debug, Clone, Copy)]
pub struct WorldInfo {
    pub ground_height: f32,
    /// Per-tick acceleration applied to airborne entities.
    pub gravity: Vec2,
    pub spawn_point: Vec2,
}

/// Terminal overlay shown while the player is dead.
#[derive(Debug)]
struct GameOverScreen {
    bounds: Rect,
    img: SpriteHandle,
}

impl GameOverScreen {
    fn new(sprites: &SpriteStore, screen: Vec2) -> Result<Self, AssetError> {
        let size = Vec2::new(GAME_OVER_WIDTH, GAME_OVER_HEIGHT);
        Ok(Self {
            bounds: Rect::from_pos_size((screen - size) / 2.0, size),
            img: sprites.get("game_over")?,
        })
    }

    fn render(&self, gfx: &mut dyn Surface) {
        gfx.draw_image(self.img, self.bounds);
    }
}

/// Owns the ground, player and spawned enemies (all tracked by one
/// handler), the cloud decoration, the HUD counters and the enemy factory,
/// and drives collision detection, difficulty progression and spawn
/// cadence each tick.
#[derive(Debug)]
pub struct World {
    info: WorldInfo,
    tuning: Tuning,

    handler: Handler<Entity>,
    clouds: Clouds,
    factory: EnemyFactory,

    score: Counter,
    difficulty: Counter,
    /// Elapsed moving ticks, drives the spawn cadence.
    timer: Counter,
    hud: Hud,

    game_over: GameOverScreen,
}

impl World {
    /// Build a session for the given screen size. All sprite lookups happen
    /// here, so a missing asset fails startup instead of drawing nothing.
    pub fn new(
        screen: Vec2,
        sprites: &SpriteStore,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, AssetError> {
        let info = WorldInfo {
            ground_height: tuning.ground_height,
            gravity: Vec2::new(0.0, tuning.gravity),
            spawn_point: Vec2::new(PLAYER_SPAWN_X, screen.y - PLAYER_HEIGHT * 3.0),
        };

        let ground = Ground::new(info.ground_height, screen);
        let player = Player::new(info, &tuning, sprites)?;
        let clouds = Clouds::new(tuning.cloud_tween, sprites)?;
        let factory = EnemyFactory::new(sprites, screen, info, seed)?;

        let score = Counter::new(0);
        let difficulty = Counter::new(1);
        let timer = Counter::new(0);
        let hud = Hud::new(score.clone(), difficulty.clone());

        let game_over = GameOverScreen::new(sprites, screen)?;

        let mut handler = Handler::new();
        handler.add(Entity::Ground(ground));
        handler.add(Entity::Player(player));

        let mut world = Self {
            info,
            tuning,
            handler,
            clouds,
            factory,
            score,
            difficulty,
            timer,
            hud,
            game_over,
        };
        world.reset();
        Ok(world)
    }

    /// Reinitialize for a fresh run: difficulty 1, score and timer 0,
    /// player back at the spawn state, all spawned enemies discarded so
    /// the handler tracks exactly {ground, player}.
    pub fn reset(&mut self) {
        self.difficulty.set(1);
        self.score.set(0);
        self.timer.set(0);

        self.handler.retain(|e| !e.is(EntityKind::Enemy));
        if let Some(player) = self.player_mut() {
            player.reset();
        }
        self.hud.refresh();

        let speed = self.scroll_speed();
        self.clouds.set_relative_speed_x(speed);
    }

    /// Current world scroll speed, a scalar since the world only moves
    /// along one axis.
    pub fn scroll_speed(&self) -> f32 {
        self.difficulty.value() as f32 * self.tuning.speed_per_level
    }

    pub fn info(&self) -> WorldInfo {
        self.info
    }

    /// Shared handle to the score cell.
    pub fn score_counter(&self) -> Counter {
        self.score.clone()
    }

    /// Shared handle to the difficulty cell.
    pub fn difficulty_counter(&self) -> Counter {
        self.difficulty.clone()
    }

    /// Number of entities currently tracked by the handler.
    pub fn tracked_entities(&self) -> usize {
        self.handler.len()
    }

    pub fn player_alive(&self) -> bool {
        self.player().is_some_and(Player::is_alive)
    }

    pub fn player_moving(&self) -> bool {
        self.player().is_some_and(Player::is_moving)
    }

    fn player(&self) -> Option<&Player> {
        self.handler.iter().find_map(|e| match e {
            Entity::Player(p) => Some(p),
            _ => None,
        })
    }

    fn player_mut(&mut self) -> Option<&mut Player> {
        self.handler.iter_mut().find_map(|e| match e {
            Entity::Player(p) => Some(p),
            _ => None,
        })
    }

    /// Test every tracked non-player entity against the player's bounds
    /// and notify the player of each intersection, in handler insertion
    /// order. Simultaneous overlaps resolve in that (arbitrary but stable)
    /// order.
    fn check_player_collision(&mut self) {
        let Some(player_bounds) = self.player().map(Player::bounds) else {
            return;
        };

        let contacts: Vec<Contact> = self
            .handler
            .iter()
            .filter(|e| !e.is(EntityKind::Player))
            .filter(|e| player_bounds.intersects(&e.bounds()))
            .map(|e| Contact {
                kind: e.kind(),
                bounds: e.bounds(),
            })
            .collect();
        if contacts.is_empty() {
            return;
        }

        if let Some(player) = self
            .handler
            .iter_mut()
            .find(|e| e.is(EntityKind::Player))
        {
            for contact in &contacts {
                player.hit(contact);
            }
        }
    }

    fn next_level(&mut self) {
        self.difficulty.inc();
        let speed = self.scroll_speed();
        self.clouds.set_relative_speed_x(speed);
    }

    fn spawn_enemy(&mut self) {
        let speed = self.scroll_speed();
        let enemy = self.factory.generate_random(speed);
        self.handler.add(Entity::Enemy(enemy));
    }

    /// Enemies that scrolled fully past the left edge are gone for good.
    fn despawn_offscreen(&mut self) {
        self.handler.retain(|e| match e {
            Entity::Enemy(enemy) => enemy.bounds().right() >= 0.0,
            _ => true,
        });
    }
}

impl Loopable for World {
    fn update(&mut self, input: &TickInput) {
        if input.reset {
            self.reset();
        }

        // 1. Notify the player of anything it currently intersects; the
        //    player decides its own reaction per entity kind.
        self.check_player_collision();

        // 2. While the player is moving: score, difficulty progression,
        //    spawn cadence and background scroll all advance.
        if self.player_moving() {
            self.score.inc();
            if self.score.value() % self.tuning.score_per_level == 0 {
                self.next_level();
            }

            self.hud.refresh();

            self.timer.inc();
            if self.timer.value() % self.tuning.spawn_interval_ticks == 0 {
                self.spawn_enemy();
            }

            self.clouds.update(input);
        }

        // 3. While the player is alive, advance every tracked entity.
        if self.player_alive() {
            self.handler.update(input);
            self.despawn_offscreen();
        }
    }

    fn render(&self, gfx: &mut dyn Surface) {
        gfx.fill_background(Color::LIGHT_BLUE);
        self.handler.render(gfx);

        self.clouds.render(gfx);
        self.hud.render(gfx);

        if !self.player_alive() {
            self.game_over.render(gfx);
        }
    }
}
