//! Levels built from declarative layout data
//!
//! Every level runs the same logic; they only differ in where the walls,
//! hazards, goal and spawn point are.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Hazard, HazardFlags, Obstacle, Player, PlayerEvent};
use super::tick::TickInput;
use crate::consts::PLAYER_SIZE;
use crate::error::LayoutError;
use crate::tuning::Tuning;

/// Largest coordinate, size or speed a layout may use. Keeps every edge and
/// every tick of motion far away from `i32` overflow.
pub const MAX_COORD: i32 = 1 << 20;

/// Initial state of one hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub rect: Rect,
    pub vel: IVec2,
    #[serde(default = "default_true")]
    pub bounces_off_walls: bool,
    #[serde(default)]
    pub bounces_off_hazards: bool,
}

fn default_true() -> bool {
    true
}

/// Which entity a hint's text is colored after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintTone {
    Player,
    Goal,
    Hazard,
}

/// Horizontal anchoring of a hint's `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HintAlign {
    #[default]
    Left,
    Right,
}

/// Static instructional text drawn on a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub tone: HintTone,
    #[serde(default)]
    pub align: HintAlign,
}

fn default_player_size() -> IVec2 {
    IVec2::splat(PLAYER_SIZE)
}

/// Everything needed to build a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub walls: Vec<Rect>,
    pub goal: Rect,
    pub hazards: Vec<HazardSpec>,
    pub spawn: IVec2,
    #[serde(default = "default_player_size")]
    pub player_size: IVec2,
    #[serde(default)]
    pub hints: Vec<Hint>,
}

impl LevelLayout {
    /// Check the preconditions a level needs before it can be played.
    /// `number` is 1-based and only used in error messages.
    pub fn validate(&self, number: u32) -> Result<(), LayoutError> {
        let empty = |what: &'static str, r: &Rect| LayoutError::EmptyRect {
            level: number,
            what,
            width: r.width,
            height: r.height,
        };

        let out_of_range = |what: &'static str| LayoutError::OutOfRange { level: number, what };
        let player = Rect::new(self.spawn.x, self.spawn.y, self.player_size.x, self.player_size.y);

        if !self.goal.within(MAX_COORD) {
            return Err(out_of_range("goal"));
        }
        if !self.walls.iter().all(|w| w.within(MAX_COORD)) {
            return Err(out_of_range("wall"));
        }
        if !self.hazards.iter().all(|h| {
            let speed_ok = |v: i32| v.unsigned_abs() <= MAX_COORD as u32;
            h.rect.within(MAX_COORD) && speed_ok(h.vel.x) && speed_ok(h.vel.y)
        }) {
            return Err(out_of_range("hazard"));
        }
        if !player.within(MAX_COORD) {
            return Err(out_of_range("player"));
        }

        if self.goal.is_empty() {
            return Err(empty("goal", &self.goal));
        }
        if let Some(wall) = self.walls.iter().find(|w| w.is_empty()) {
            return Err(empty("wall", wall));
        }
        if let Some(hazard) = self.hazards.iter().find(|h| h.rect.is_empty()) {
            return Err(empty("hazard", &hazard.rect));
        }

        if player.is_empty() {
            return Err(empty("player", &player));
        }
        if self.walls.iter().any(|w| w.overlaps(&player)) {
            return Err(LayoutError::SpawnInsideWall {
                level: number,
                x: self.spawn.x,
                y: self.spawn.y,
            });
        }
        Ok(())
    }

    /// Parse a campaign (a JSON array of layouts)
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, LayoutError> {
        serde_json::from_str(json).map_err(|e| LayoutError::Json(e.to_string()))
    }
}

/// One playable level
#[derive(Debug, Clone)]
pub struct Level {
    /// 1-based level number
    number: u32,
    /// Goal first, then the walls
    obstacles: Vec<Obstacle>,
    /// Updated in this order every tick
    hazards: Vec<Hazard>,
    player: Player,
    hints: Vec<Hint>,
}

impl Level {
    /// Build a level, rejecting layouts that break its preconditions
    pub fn from_layout(number: u32, layout: &LevelLayout) -> Result<Self, LayoutError> {
        layout.validate(number)?;

        let obstacles = std::iter::once(Obstacle::goal(layout.goal))
            .chain(layout.walls.iter().copied().map(Obstacle::wall))
            .collect();

        let hazards = layout
            .hazards
            .iter()
            .map(|spec| {
                Hazard::new(
                    spec.rect,
                    spec.vel,
                    HazardFlags {
                        bounces_off_walls: spec.bounces_off_walls,
                        bounces_off_hazards: spec.bounces_off_hazards,
                    },
                )
            })
            .collect();

        Ok(Self {
            number,
            obstacles,
            hazards,
            player: Player::new(layout.spawn, layout.player_size),
            hints: layout.hints.clone(),
        })
    }

    /// Advance every entity by one tick: the player first, then each hazard
    /// in layout order.
    pub fn advance(&mut self, input: &TickInput, tuning: &Tuning) -> Option<PlayerEvent> {
        let deaths = self.player.deaths;
        let event = self.player.update(
            input,
            &self.obstacles,
            self.hazards.iter().map(|h| &h.body.rect),
            tuning,
        );

        // a hit and the goal can land on the same tick; the event only names the goal
        if self.player.deaths > deaths {
            log::debug!(
                "Level {}: player hit at ({}, {}), deaths={}",
                self.number,
                self.player.body.rect.x,
                self.player.body.rect.y,
                self.player.deaths
            );
        }
        if event == Some(PlayerEvent::Respawned) {
            log::debug!("Level {}: player respawned", self.number);
        }

        for i in 0..self.hazards.len() {
            let (before, rest) = self.hazards.split_at_mut(i);
            if let Some((hazard, after)) = rest.split_first_mut() {
                let others = before.iter().chain(after.iter()).map(|h| &h.body.rect);
                hazard.update(&self.obstacles, others);
            }
        }

        event
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn deaths(&self) -> u32 {
        self.player.deaths
    }

    /// Carry the death count over from the previous level
    pub fn set_deaths(&mut self, deaths: u32) {
        self.player.deaths = deaths;
    }

    pub fn reached_goal(&self) -> bool {
        self.player.reached_goal
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    /// All static obstacles, goal included
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn goal(&self) -> &Obstacle {
        &self.obstacles[0]
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }
}
