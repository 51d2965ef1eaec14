//! Score and difficulty readout.

use glam::Vec2;

use crate::platform::{Color, Surface};
use crate::sim::Counter;

/// Heads-up display. Holds shared handles to the score and difficulty
/// counters, so it always reads current values; `refresh` re-formats the
/// text shown on screen.
#[derive(Debug)]
pub struct Hud {
    score: Counter,
    difficulty: Counter,
    score_text: String,
    difficulty_text: String,
    pos: Vec2,
}

impl Hud {
    pub fn new(score: Counter, difficulty: Counter) -> Self {
        let mut hud = Self {
            score,
            difficulty,
            score_text: String::new(),
            difficulty_text: String::new(),
            pos: Vec2::new(10.0, 10.0),
        };
        hud.refresh();
        hud
    }

    /// Re-read the counters into display text.
    pub fn refresh(&mut self) {
        self.score_text = format!("Score: {}", self.score.value());
        self.difficulty_text = format!("Difficulty: {}", self.difficulty.value());
    }

    pub fn render(&self, gfx: &mut dyn Surface) {
        gfx.draw_text(self.pos, &self.score_text, Color::BLACK);
        gfx.draw_text(self.pos + Vec2::new(0.0, 20.0), &self.difficulty_text, Color::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_reads_shared_counters() {
        let score = Counter::new(0);
        let difficulty = Counter::new(1);
        let mut hud = Hud::new(score.clone(), difficulty.clone());
        assert_eq!(hud.score_text, "Score: 0");

        score.inc_by(731);
        difficulty.inc();
        hud.refresh();
        assert_eq!(hud.score_text, "Score: 731");
        assert_eq!(hud.difficulty_text, "Difficulty: 2");
    }
}
