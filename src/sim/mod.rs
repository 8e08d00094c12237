//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, integer positions and velocities
//! - Stable iteration order (player first, then hazards in layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layouts;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Side, WallContact, WallResponse, resolve_walls};
pub use level::{HazardSpec, Hint, HintAlign, HintTone, Level, LevelLayout};
pub use rect::{Body, Rect};
pub use state::{Hazard, HazardFlags, Obstacle, Player, PlayerEvent, PlayerState, Session, SessionPhase};
pub use tick::{TickInput, TickStatus, tick};
