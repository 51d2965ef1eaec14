//! Kiwi Run entry point.
//!
//! Headless native harness: wires the simulation to a null surface and a
//! scripted input source, then drives the fixed-timestep loop in real time
//! for a short demo run. A windowed host would do the same wiring with a
//! real surface and keyboard events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use glam::Vec2;

use kiwi_run::consts::UPDATE_RATE;
use kiwi_run::platform::{NullSurface, SpriteHandle, SpriteStore};
use kiwi_run::sim::{Loopable, World};
use kiwi_run::{GameLoop, Key, Keys, Tuning};

/// Stand-in handles; a windowed host registers handles that map to real
/// decoded images.
fn sprite_store() -> SpriteStore {
    let mut store = SpriteStore::new();
    let mut next = 0u32;
    let mut handle = || {
        next += 1;
        SpriteHandle(next)
    };

    store.register("player_standing", handle());
    let running: Vec<SpriteHandle> = (0..8).map(|_| handle()).collect();
    store.register_class("player_running", &running);

    store.register("short_enemy", handle());
    store.register("tall_enemy", handle());
    store.register("flying_enemy", handle());

    let clouds: Vec<SpriteHandle> = (0..4).map(|_| handle()).collect();
    store.register_class("clouds", &clouds);

    store.register("game_over", handle());
    store
}

fn main() {
    env_logger::init();

    let screen = Vec2::new(1280.0, 720.0);
    let sprites = sprite_store();
    let tuning = Tuning::default();

    let world = match World::new(screen, &sprites, tuning, 0xc1a0) {
        Ok(world) => Rc::new(RefCell::new(world)),
        Err(err) => {
            log::error!("asset setup failed: {err}");
            std::process::exit(1);
        }
    };
    let keys = Rc::new(RefCell::new(Keys::new()));
    let surface = Rc::new(RefCell::new(NullSurface::new(screen.x, screen.y)));

    let mut game_loop = GameLoop::new(UPDATE_RATE);

    {
        let world = Rc::clone(&world);
        let keys = Rc::clone(&keys);
        let tick = Cell::new(0u64);
        game_loop.set_update(move || {
            let t = tick.get();
            tick.set(t + 1);

            let mut keys = keys.borrow_mut();
            // Scripted pilot: hold the jump key for 20 of every 90 ticks.
            keys.set_pressed(Key::Space, t % 90 < 20);

            let input = keys.tick_input();
            world.borrow_mut().update(&input);
            keys.update();
        });
    }
    {
        let world = Rc::clone(&world);
        let surface = Rc::clone(&surface);
        game_loop.set_render(move || {
            world.borrow().render(&mut *surface.borrow_mut());
        });
    }

    if !game_loop.start() {
        std::process::exit(1);
    }

    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(10) {
        game_loop.frame(start.elapsed().as_secs_f64() * 1000.0);
        std::thread::sleep(Duration::from_millis(16));
    }

    let world = world.borrow();
    log::info!(
        "demo finished: score {} | difficulty {} | alive {}",
        world.score_counter().value(),
        world.difficulty_counter().value(),
        world.player_alive()
    );
}
