//! Fixed-timestep scheduler.
//!
//! Runs simulation updates at a fixed logical rate regardless of how fast
//! the host presents frames, so physics never depends on display refresh.
//! The host calls [`GameLoop::frame`] once per presentation frame with the
//! current timestamp; the loop drains whole ticks from an accumulator and
//! then renders exactly once.
//!
//! There is no cap on catch-up ticks: an extremely long stall produces a
//! burst of updates rather than silently dropping simulation time. That
//! spiral-of-death risk is an accepted trade-off, not hidden.

/// Update/render callback.
pub type Callback = Box<dyn FnMut()>;

/// Fixed-timestep scheduler. One instance per process, constructed at
/// startup and driven until the process exits; there is no teardown.
pub struct GameLoop {
    update_rate: f64,
    ms_per_tick: f64,

    update: Option<Callback>,
    render: Option<Callback>,

    /// Fractional tick debt carried between frames.
    delta: f64,
    /// Timestamp of the previous frame; `None` until the first frame,
    /// which only establishes the baseline.
    last_ms: Option<f64>,
    running: bool,

    // Per-second diagnostics. Counting must never affect scheduling.
    ups: u32,
    fps: u32,
    timer_ms: f64,
}

impl GameLoop {
    pub fn new(update_rate: f64) -> Self {
        Self {
            update_rate,
            ms_per_tick: 1000.0 / update_rate,
            update: None,
            render: None,
            delta: 0.0,
            last_ms: None,
            running: false,
            ups: 0,
            fps: 0,
            timer_ms: 0.0,
        }
    }

    /// Ticks per second. May be changed at any time, even mid-run; the
    /// per-tick quantum updates immediately.
    pub fn set_update_rate(&mut self, rate: f64) {
        self.update_rate = rate;
        self.ms_per_tick = 1000.0 / rate;
    }

    pub fn update_rate(&self) -> f64 {
        self.update_rate
    }

    /// Milliseconds of real time one tick represents.
    pub fn ms_per_tick(&self) -> f64 {
        self.ms_per_tick
    }

    pub fn set_update(&mut self, update: impl FnMut() + 'static) {
        self.update = Some(Box::new(update));
    }

    pub fn set_render(&mut self, render: impl FnMut() + 'static) {
        self.render = Some(Box::new(render));
    }

    /// Begin scheduling. Reports and refuses if either callback is unset;
    /// a loop without both halves is a configuration error, not a panic.
    pub fn start(&mut self) -> bool {
        if self.update.is_none() || self.render.is_none() {
            log::warn!("game loop not started: update or render callback is unset");
            return false;
        }
        self.running = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the loop for one host frame at `now_ms`. Runs as many whole
    /// ticks as the accumulated real time covers (possibly zero), then
    /// renders exactly once so the frame always reflects the latest
    /// simulated state.
    pub fn frame(&mut self, now_ms: f64) {
        if !self.running {
            return;
        }

        let Some(last_ms) = self.last_ms else {
            // First frame: establish the time baseline only.
            self.last_ms = Some(now_ms);
            self.timer_ms = now_ms;
            if let Some(render) = self.render.as_mut() {
                render();
                self.fps += 1;
            }
            return;
        };

        self.delta += (now_ms - last_ms) / self.ms_per_tick;
        self.last_ms = Some(now_ms);

        while self.delta >= 1.0 {
            if let Some(update) = self.update.as_mut() {
                update();
            }
            self.ups += 1;
            self.delta -= 1.0;
        }

        if let Some(render) = self.render.as_mut() {
            render();
        }
        self.fps += 1;

        if now_ms - self.timer_ms > 1000.0 {
            self.timer_ms = now_ms;
            log::debug!("fps: {} | ups: {}", self.fps, self.ups);
            self.fps = 0;
            self.ups = 0;
        }
    }
}
