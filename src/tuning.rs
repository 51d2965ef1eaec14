//! Data-driven game balance.
//!
//! Defaults live in [`crate::consts`]; hosts may override them with a JSON
//! document at startup. Invalid JSON is a startup error, never a runtime
//! one.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Balance values for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick while airborne.
    pub gravity: f32,
    /// Upward impulse applied on jump (negative = up).
    pub jump_impulse: f32,
    /// Gravity multiplier while the jump key stays held.
    pub hold_gravity_scale: f32,
    /// Ground band height in screen units.
    pub ground_height: f32,
    /// Score threshold between difficulty levels.
    pub score_per_level: i64,
    /// Moving ticks between enemy spawns.
    pub spawn_interval_ticks: i64,
    /// World scroll speed per difficulty level.
    pub speed_per_level: f32,
    /// Cloud layer speed as a fraction of world speed.
    pub cloud_tween: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY_Y,
            jump_impulse: consts::JUMP_IMPULSE_Y,
            hold_gravity_scale: consts::HOLD_GRAVITY_SCALE,
            ground_height: consts::GROUND_HEIGHT,
            score_per_level: consts::SCORE_PER_LEVEL,
            spawn_interval_ticks: consts::SPAWN_INTERVAL_TICKS,
            speed_per_level: consts::SPEED_PER_LEVEL,
            cloud_tween: consts::CLOUD_TWEEN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document; missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, consts::GRAVITY_Y);
        assert_eq!(tuning.score_per_level, 500);
        assert_eq!(tuning.spawn_interval_ticks, 100);
        assert_eq!(tuning.speed_per_level, 5.0);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.0);
        assert_eq!(tuning.jump_impulse, consts::JUMP_IMPULSE_Y);
    }

    #[test]
    fn test_round_trip() {
        let tuning = Tuning {
            score_per_level: 250,
            ..Tuning::default()
        };
        let json = tuning.to_json().unwrap();
        let parsed = Tuning::from_json(&json).unwrap();
        assert_eq!(parsed.score_per_level, 250);
        assert_eq!(parsed.gravity, tuning.gravity);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(Tuning::from_json("{ gravity: oops").is_err());
    }
}
