//! Ticked sprite-frame cycling.

use crate::platform::{AssetError, SpriteHandle, SpriteStore};

/// A series of sprites, each displayed for a fixed number of ticks.
#[derive(Debug)]
pub struct Animation {
    frames: Vec<SpriteHandle>,
    ticks_per_frame: u32,
    ticks: u32,
    index: usize,
}

impl Animation {
    /// Resolve `keys` against the sprite store up front so a missing frame
    /// fails at construction, not mid-game.
    pub fn from_keys(
        sprites: &SpriteStore,
        ticks_per_frame: u32,
        keys: &[&str],
    ) -> Result<Self, AssetError> {
        let frames = keys
            .iter()
            .map(|key| sprites.get(key))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(ticks_per_frame, frames))
    }

    pub fn new(ticks_per_frame: u32, frames: Vec<SpriteHandle>) -> Self {
        Self {
            frames,
            ticks_per_frame,
            ticks: 0,
            index: 0,
        }
    }

    /// Advance the tick counter, cycling to the next frame when it elapses.
    pub fn update(&mut self) {
        self.ticks += 1;
        if self.ticks == self.ticks_per_frame {
            self.ticks = 0;
            self.next(1);
        }
    }

    /// Skip forwards `amount` frames, wrapping.
    pub fn next(&mut self, amount: usize) {
        self.index = (self.index + amount) % self.frames.len();
    }

    /// Skip backwards `amount` frames, wrapping.
    pub fn prev(&mut self, amount: usize) {
        let len = self.frames.len();
        self.index = (self.index + len - amount % len) % len;
    }

    /// The sprite to draw this tick.
    pub fn current(&self) -> SpriteHandle {
        self.frames[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: u32) -> Vec<SpriteHandle> {
        (0..n).map(SpriteHandle).collect()
    }

    #[test]
    fn test_cycles_after_ticks_elapse() {
        let mut anim = Animation::new(3, frames(2));
        assert_eq!(anim.current(), SpriteHandle(0));
        anim.update();
        anim.update();
        assert_eq!(anim.current(), SpriteHandle(0));
        anim.update();
        assert_eq!(anim.current(), SpriteHandle(1));
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut anim = Animation::new(1, frames(4));
        anim.next(5);
        assert_eq!(anim.current(), SpriteHandle(1));
        anim.prev(2);
        assert_eq!(anim.current(), SpriteHandle(3));
    }

    #[test]
    fn test_from_keys_missing_sprite() {
        let store = SpriteStore::new();
        assert!(Animation::from_keys(&store, 8, &["player_running0"]).is_err());
    }
}
