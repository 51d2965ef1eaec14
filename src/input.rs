//! Key state latching with edge detection.
//!
//! The host feeds raw key levels in from its event source; the simulation
//! asks either for levels (`is_pressed`) or edges (`is_clicked`). Calling
//! [`Keys::update`] once per simulation tick latches the previous state so
//! edge detection lines up with ticks, not host events.

use crate::sim::TickInput;

/// The keys the game cares about. A closed set: adding one is a variant
/// plus a name mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Enter,
    Ctrl,
    Shift,
    Esc,
    G,
}

impl Key {
    pub const COUNT: usize = 10;

    fn index(self) -> usize {
        self as usize
    }

    /// Map a host key name (browser `KeyboardEvent.key` style) to a key.
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            " " => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            "Control" => Some(Key::Ctrl),
            "Shift" => Some(Key::Shift),
            "Escape" => Some(Key::Esc),
            "g" => Some(Key::G),
            _ => None,
        }
    }
}

/// Current and previous-tick key state.
#[derive(Debug, Default)]
pub struct Keys {
    state: [bool; Key::COUNT],
    prev: [bool; Key::COUNT],
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key level from the host event source.
    pub fn set_pressed(&mut self, key: Key, pressed: bool) {
        self.state[key.index()] = pressed;
    }

    /// Latch current state as previous. Call exactly once per simulation
    /// tick, after the tick has consumed input.
    pub fn update(&mut self) {
        self.prev = self.state;
    }

    /// Level check: the key is down right now.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.state[key.index()]
    }

    /// Edge check: down this tick and up the tick before. True for exactly
    /// one tick per press, however long the key is held.
    pub fn is_clicked(&self, key: Key) -> bool {
        self.state[key.index()] && !self.prev[key.index()]
    }

    /// Snapshot the input commands for one world tick.
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            jump_held: self.is_pressed(Key::Space),
            jump_pressed: self.is_clicked(Key::Space),
            reset: self.is_clicked(Key::Enter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_only_on_transition_tick() {
        let mut keys = Keys::new();

        keys.set_pressed(Key::Space, true);
        assert!(keys.is_clicked(Key::Space));
        assert!(keys.is_pressed(Key::Space));

        // Still held on later ticks: pressed yes, clicked no.
        keys.update();
        assert!(keys.is_pressed(Key::Space));
        assert!(!keys.is_clicked(Key::Space));

        keys.update();
        assert!(!keys.is_clicked(Key::Space));
    }

    #[test]
    fn test_release_rearms_click() {
        let mut keys = Keys::new();

        keys.set_pressed(Key::Space, true);
        keys.update();
        keys.set_pressed(Key::Space, false);
        keys.update();
        assert!(!keys.is_clicked(Key::Space));

        keys.set_pressed(Key::Space, true);
        assert!(keys.is_clicked(Key::Space));
    }

    #[test]
    fn test_tick_input_snapshot() {
        let mut keys = Keys::new();
        keys.set_pressed(Key::Space, true);
        keys.set_pressed(Key::Enter, true);

        let input = keys.tick_input();
        assert!(input.jump_held);
        assert!(input.jump_pressed);
        assert!(input.reset);

        keys.update();
        let input = keys.tick_input();
        assert!(input.jump_held);
        assert!(!input.jump_pressed);
        assert!(!input.reset);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("q"), None);
    }
}
