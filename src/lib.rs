//! Block Dodge - reach the goal, avoid the blocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision, entity behavior, levels, session)
//! - `render`: Render boundary (frame description and vertex building)
//! - `autopilot`: Seeded input driver for headless runs
//! - `tuning`: Data-driven game timing
//! - `settings`: Runner preferences

pub mod autopilot;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use error::{ConfigError, LayoutError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame)
    pub const FPS: u32 = 60;

    /// Arena dimensions
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
    /// Thickness of the four boundary walls
    pub const BORDER: i32 = 50;

    /// Player defaults
    pub const PLAYER_SPEED: i32 = 3;
    pub const PLAYER_SIZE: i32 = 10;

    /// Hazard blocks are all the same size
    pub const HAZARD_SIZE: i32 = 10;

    /// Hit-stun window (1 second)
    pub const STUN_TICKS: u32 = FPS;
    /// "Level complete" banner (2 seconds)
    pub const BANNER_TICKS: u32 = 2 * FPS;
    /// Each closing message stays up for 2 seconds
    pub const END_MESSAGE_TICKS: u32 = 2 * FPS;
    /// Credits title appears 8 seconds into the ending
    pub const CREDITS_START_TICKS: u32 = 8 * FPS;
    /// Credits byline appears 9.5 seconds into the ending
    pub const BYLINE_START_TICKS: u32 = 19 * FPS / 2;
    /// Session ends 12 seconds into the ending
    pub const ENDING_TICKS: u32 = 12 * FPS;

    pub const GAME_TITLE: &str = "Block Dodge";
    pub const GAME_BYLINE: &str = "a hardest-game spin-off";
}
