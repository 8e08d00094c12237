//! Data-driven game timing
//!
//! All durations are in simulation ticks. Timings left out of a tuning file
//! are derived from its `tick_rate`, so they keep their length in seconds.
//! The defaults reproduce the reference game at 60 Hz.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Speeds and timers consumed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TuningFile")]
pub struct Tuning {
    /// Ticks per simulated second
    pub tick_rate: u32,
    /// Player displacement per tick on each held axis
    pub player_speed: i32,
    /// Stunned ticks before the player respawns
    pub stun_ticks: u32,
    /// Length of the "Level N complete!" banner
    pub banner_ticks: u32,
    /// Length of each closing message window
    pub end_message_ticks: u32,
    /// Ending tick at which the credits title appears
    pub credits_start_ticks: u32,
    /// Ending tick at which the credits byline appears
    pub byline_start_ticks: u32,
    /// Total length of the ending
    pub ending_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate: FPS,
            player_speed: PLAYER_SPEED,
            stun_ticks: STUN_TICKS,
            banner_ticks: BANNER_TICKS,
            end_message_ticks: END_MESSAGE_TICKS,
            credits_start_ticks: CREDITS_START_TICKS,
            byline_start_ticks: BYLINE_START_TICKS,
            ending_ticks: ENDING_TICKS,
        }
    }
}

/// Tuning as written on disk: every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TuningFile {
    tick_rate: Option<u32>,
    player_speed: Option<i32>,
    stun_ticks: Option<u32>,
    banner_ticks: Option<u32>,
    end_message_ticks: Option<u32>,
    credits_start_ticks: Option<u32>,
    byline_start_ticks: Option<u32>,
    ending_ticks: Option<u32>,
}

impl From<TuningFile> for Tuning {
    fn from(file: TuningFile) -> Self {
        let base = Tuning::at_rate(file.tick_rate.unwrap_or(FPS));
        Self {
            tick_rate: base.tick_rate,
            player_speed: file.player_speed.unwrap_or(base.player_speed),
            stun_ticks: file.stun_ticks.unwrap_or(base.stun_ticks),
            banner_ticks: file.banner_ticks.unwrap_or(base.banner_ticks),
            end_message_ticks: file.end_message_ticks.unwrap_or(base.end_message_ticks),
            credits_start_ticks: file.credits_start_ticks.unwrap_or(base.credits_start_ticks),
            byline_start_ticks: file.byline_start_ticks.unwrap_or(base.byline_start_ticks),
            ending_ticks: file.ending_ticks.unwrap_or(base.ending_ticks),
        }
    }
}

impl Tuning {
    /// Reference timings expressed at `tick_rate` ticks per second
    pub fn at_rate(tick_rate: u32) -> Self {
        Self {
            tick_rate,
            player_speed: PLAYER_SPEED,
            stun_ticks: tick_rate,
            banner_ticks: 2 * tick_rate,
            end_message_ticks: 2 * tick_rate,
            credits_start_ticks: 8 * tick_rate,
            byline_start_ticks: 19 * tick_rate / 2,
            ending_ticks: 12 * tick_rate,
        }
    }

    /// Parse and validate tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Zero { field: "tick_rate" });
        }
        if self.player_speed <= 0 {
            return Err(ConfigError::Zero {
                field: "player_speed",
            });
        }
        if self.banner_ticks == 0 {
            return Err(ConfigError::Zero {
                field: "banner_ticks",
            });
        }
        if self.end_message_ticks == 0 {
            return Err(ConfigError::Zero {
                field: "end_message_ticks",
            });
        }
        if self.credits_start_ticks > self.byline_start_ticks
            || self.byline_start_ticks > self.ending_ticks
        {
            return Err(ConfigError::Timeline(format!(
                "credits {} <= byline {} <= end {} does not hold",
                self.credits_start_ticks, self.byline_start_ticks, self.ending_ticks
            )));
        }
        Ok(())
    }

    /// Duration of one tick in seconds (for the host's frame pacing)
    pub fn tick_seconds(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_timing() {
        let t = Tuning::default();
        assert_eq!(t.tick_rate, 60);
        assert_eq!(t.stun_ticks, 60);
        assert_eq!(t.banner_ticks, 120);
        assert_eq!(t.byline_start_ticks, 570);
        assert_eq!(t.ending_ticks, 720);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "player_speed": 5 }"#).unwrap();
        assert_eq!(t.player_speed, 5);
        assert_eq!(t.stun_ticks, STUN_TICKS);
    }

    #[test]
    fn test_timings_follow_tick_rate() {
        assert_eq!(Tuning::at_rate(FPS), Tuning::default());

        let t = Tuning::from_json(r#"{ "tick_rate": 30 }"#).unwrap();
        assert_eq!(t.stun_ticks, 30);
        assert_eq!(t.banner_ticks, 60);
        assert_eq!(t.byline_start_ticks, 285);
        assert_eq!(t.ending_ticks, 360);

        let t = Tuning::from_json(r#"{ "tick_rate": 30, "stun_ticks": 90 }"#).unwrap();
        assert_eq!(t.stun_ticks, 90);
        assert_eq!(t.banner_ticks, 60);
    }

    #[test]
    fn test_rejects_zero_speed() {
        let err = Tuning::from_json(r#"{ "player_speed": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { field: "player_speed" }));
    }

    #[test]
    fn test_rejects_out_of_order_credits() {
        let err = Tuning::from_json(r#"{ "byline_start_ticks": 800 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Timeline(_)));
    }
}
