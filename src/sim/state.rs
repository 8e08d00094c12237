//! Entity and session types
//!
//! Obstacles never move. Hazards and the player are mutated in place by
//! their own update every tick. The session owns the levels and the
//! progression phase.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{WallResponse, bounce_off_others, resolve_walls, touches_any};
use super::layouts::{self, arena_walls};
use super::level::{Level, LevelLayout};
use super::rect::{Body, Rect};
use super::tick::TickInput;
use crate::error::LayoutError;
use crate::tuning::Tuning;

/// A static wall. One obstacle per level is the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub is_goal: bool,
}

impl Obstacle {
    pub fn wall(rect: Rect) -> Self {
        Self {
            rect,
            is_goal: false,
        }
    }

    pub fn goal(rect: Rect) -> Self {
        Self {
            rect,
            is_goal: true,
        }
    }
}

/// What a hazard bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardFlags {
    pub bounces_off_walls: bool,
    pub bounces_off_hazards: bool,
}

impl Default for HazardFlags {
    fn default() -> Self {
        Self {
            bounces_off_walls: true,
            bounces_off_hazards: false,
        }
    }
}

/// A moving block that stuns the player on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub body: Body,
    pub flags: HazardFlags,
}

impl Hazard {
    pub fn new(rect: Rect, vel: IVec2, flags: HazardFlags) -> Self {
        Self {
            body: Body::new(rect, vel),
            flags,
        }
    }

    /// Move, bounce off walls, then bounce off the other hazards.
    ///
    /// `others` must not include this hazard.
    pub fn update<'a>(&mut self, obstacles: &[Obstacle], others: impl IntoIterator<Item = &'a Rect>) {
        self.body.step();
        if self.flags.bounces_off_walls {
            resolve_walls(&mut self.body, obstacles, WallResponse::Bounce);
        }
        if self.flags.bounces_off_hazards {
            bounce_off_others(&mut self.body, others);
        }
    }
}

/// Player behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Under input control
    Active,
    /// Frozen after a hazard hit; counts ticks until respawn
    Stunned { ticks: u32 },
}

/// Notable things that happened to the player during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Hit,
    Respawned,
    ReachedGoal,
}

/// The player's block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Where the player starts and respawns
    pub spawn: IVec2,
    pub deaths: u32,
    pub state: PlayerState,
    pub reached_goal: bool,
}

impl Player {
    pub fn new(spawn: IVec2, size: IVec2) -> Self {
        Self {
            body: Body::new(Rect::new(spawn.x, spawn.y, size.x, size.y), IVec2::ZERO),
            spawn,
            deaths: 0,
            state: PlayerState::Active,
            reached_goal: false,
        }
    }

    pub fn is_stunned(&self) -> bool {
        matches!(self.state, PlayerState::Stunned { .. })
    }

    /// Drawn see-through while stunned
    pub fn is_translucent(&self) -> bool {
        self.is_stunned()
    }

    /// Advance one tick. `hazards` are the hazard rectangles as they stand
    /// before the hazards move this tick.
    ///
    /// `ReachedGoal` wins over `Hit` when both happen on the same tick; the
    /// death is counted either way.
    pub fn update<'a>(
        &mut self,
        input: &TickInput,
        obstacles: &[Obstacle],
        hazards: impl IntoIterator<Item = &'a Rect>,
        tuning: &Tuning,
    ) -> Option<PlayerEvent> {
        match self.state {
            PlayerState::Stunned { ticks } => {
                let ticks = ticks + 1;
                if ticks > tuning.stun_ticks {
                    self.respawn();
                    Some(PlayerEvent::Respawned)
                } else {
                    self.state = PlayerState::Stunned { ticks };
                    None
                }
            }
            PlayerState::Active => {
                self.body.vel = input.direction() * tuning.player_speed;
                self.body.step();

                let mut event = None;
                if touches_any(&self.body.rect, hazards) {
                    self.state = PlayerState::Stunned { ticks: 0 };
                    self.deaths += 1;
                    event = Some(PlayerEvent::Hit);
                }

                if resolve_walls(&mut self.body, obstacles, WallResponse::Stop).is_goal() {
                    self.reached_goal = true;
                    event = Some(PlayerEvent::ReachedGoal);
                }
                event
            }
        }
    }

    fn respawn(&mut self) {
        self.state = PlayerState::Active;
        self.body.rect.set_position(self.spawn);
        self.body.vel = IVec2::ZERO;
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Simulating a level (0-based index)
    Playing { level: usize },
    /// Banner up, simulation frozen
    LevelComplete { level: usize },
    /// Closing messages and credits
    Ending,
    /// Nothing left to run
    Finished,
}

/// The whole run: every level in order, then the ending
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) levels: Vec<Level>,
    /// Last level entered; stays put through the ending
    pub(super) current: usize,
    pub(super) phase: SessionPhase,
    /// Ticks spent in the current phase
    pub(super) phase_ticks: u32,
    pub(super) tuning: Tuning,
    /// Walls shown behind the ending
    pub(super) backdrop: Vec<Obstacle>,
    /// Filled in when the ending starts
    pub(super) end_messages: Vec<String>,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
}

impl Session {
    /// Build a session from an ordered list of layouts. Every layout is
    /// validated up front so a broken level never reaches play.
    pub fn new(layouts: Vec<LevelLayout>, tuning: Tuning) -> Result<Self, LayoutError> {
        if layouts.is_empty() {
            return Err(LayoutError::NoLevels);
        }
        let levels = layouts
            .iter()
            .enumerate()
            .map(|(i, layout)| Level::from_layout(i as u32 + 1, layout))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Session ready with {} levels", levels.len());

        Ok(Self {
            levels,
            current: 0,
            phase: SessionPhase::Playing { level: 0 },
            phase_ticks: 0,
            tuning,
            backdrop: arena_walls().into_iter().map(Obstacle::wall).collect(),
            end_messages: Vec::new(),
            time_ticks: 0,
        })
    }

    /// The built-in four-level campaign
    pub fn campaign(tuning: Tuning) -> Result<Self, LayoutError> {
        Self::new(layouts::campaign(), tuning)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn phase_ticks(&self) -> u32 {
        self.phase_ticks
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn backdrop(&self) -> &[Obstacle] {
        &self.backdrop
    }

    pub fn end_messages(&self) -> &[String] {
        &self.end_messages
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// The level being played or just completed
    pub fn current_level(&self) -> Option<&Level> {
        match self.phase {
            SessionPhase::Playing { level } | SessionPhase::LevelComplete { level } => {
                self.levels.get(level)
            }
            SessionPhase::Ending | SessionPhase::Finished => None,
        }
    }

    /// Deaths accumulated so far across the whole run
    pub fn deaths(&self) -> u32 {
        self.levels.get(self.current).map(|l| l.deaths()).unwrap_or(0)
    }

    /// Index into `end_messages` on screen at this point of the ending.
    /// `None` before the first tick or once the credits take over.
    pub fn end_message_index(&self) -> Option<usize> {
        if self.phase != SessionPhase::Ending
            || self.phase_ticks == 0
            || self.phase_ticks > self.tuning.credits_start_ticks
        {
            return None;
        }
        let index = ((self.phase_ticks - 1) / self.tuning.end_message_ticks) as usize;
        (index < self.end_messages.len()).then_some(index)
    }

    /// (title shown, byline shown) for the credits at the end of the ending
    pub fn credits_visible(&self) -> (bool, bool) {
        if self.phase != SessionPhase::Ending {
            return (false, false);
        }
        (
            self.phase_ticks > self.tuning.credits_start_ticks,
            self.phase_ticks > self.tuning.byline_start_ticks,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<Obstacle> {
        vec![
            Obstacle::goal(Rect::new(700, 50, 50, 500)),
            Obstacle::wall(Rect::new(0, 0, 50, 600)),
            Obstacle::wall(Rect::new(750, 0, 50, 600)),
            Obstacle::wall(Rect::new(0, 0, 800, 50)),
            Obstacle::wall(Rect::new(0, 550, 800, 50)),
        ]
    }

    fn right() -> TickInput {
        TickInput {
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_player_moves_with_input() {
        let tuning = Tuning::default();
        let mut player = Player::new(IVec2::new(100, 100), IVec2::new(10, 10));
        let input = TickInput {
            down: true,
            left: true,
            ..Default::default()
        };
        player.update(&input, &arena(), [], &tuning);
        assert_eq!(player.body.rect.position(), IVec2::new(97, 103));

        // opposing keys cancel
        let input = TickInput {
            up: true,
            down: true,
            ..Default::default()
        };
        player.update(&input, &arena(), [], &tuning);
        assert_eq!(player.body.rect.position(), IVec2::new(97, 103));
    }

    #[test]
    fn test_player_stops_flush_at_wall() {
        let tuning = Tuning::default();
        let mut player = Player::new(IVec2::new(52, 100), IVec2::new(10, 10));
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        player.update(&input, &arena(), [], &tuning);
        assert_eq!(player.body.rect.x, 50);
        player.update(&input, &arena(), [], &tuning);
        assert_eq!(player.body.rect.x, 50);
    }

    #[test]
    fn test_hit_stun_and_respawn() {
        let tuning = Tuning::default();
        let spawn = IVec2::new(100, 100);
        let mut player = Player::new(spawn, IVec2::new(10, 10));
        let hazard = [Rect::new(110, 100, 10, 10)];

        // walk into the hazard
        let mut event = None;
        for _ in 0..5 {
            event = player.update(&right(), &arena(), hazard.iter(), &tuning);
            if event.is_some() {
                break;
            }
        }
        assert_eq!(event, Some(PlayerEvent::Hit));
        assert_eq!(player.deaths, 1);
        let hit_pos = player.body.rect.position();
        assert_ne!(hit_pos, spawn);

        // frozen and still overlapping, no extra deaths
        for _ in 0..tuning.stun_ticks {
            let event = player.update(&right(), &arena(), hazard.iter(), &tuning);
            assert_eq!(event, None);
            assert!(player.is_translucent());
            assert_eq!(player.body.rect.position(), hit_pos);
        }
        assert_eq!(player.deaths, 1);

        let event = player.update(&right(), &arena(), hazard.iter(), &tuning);
        assert_eq!(event, Some(PlayerEvent::Respawned));
        assert_eq!(player.state, PlayerState::Active);
        assert_eq!(player.body.rect.position(), spawn);
        assert_eq!(player.body.vel, IVec2::ZERO);
    }

    #[test]
    fn test_goal_contact_allows_overlap() {
        let tuning = Tuning::default();
        let mut player = Player::new(IVec2::new(689, 300), IVec2::new(10, 10));
        let event = player.update(&right(), &arena(), [], &tuning);
        assert_eq!(event, Some(PlayerEvent::ReachedGoal));
        assert!(player.reached_goal);
        assert_eq!(player.body.rect.x, 692);
        assert!(player.body.rect.overlaps(&arena()[0].rect));
    }

    #[test]
    fn test_hazard_bounces_between_walls() {
        let mut hazard = Hazard::new(
            Rect::new(100, 58, 10, 10),
            IVec2::new(0, -5),
            HazardFlags::default(),
        );
        hazard.update(&arena(), []);
        hazard.update(&arena(), []);
        // second step lands at y=48, top edge inside [45, 50]
        assert_eq!(hazard.body.vel, IVec2::new(0, 5));
        assert_eq!(hazard.body.rect.y, 48);
    }

    #[test]
    fn test_plain_hazards_pass_through_each_other() {
        let mut a = Hazard::new(Rect::new(100, 100, 10, 10), IVec2::new(5, 0), HazardFlags::default());
        let other = [Rect::new(104, 100, 10, 10)];
        a.update(&arena(), other.iter());
        assert_eq!(a.body.vel, IVec2::new(5, 0));
    }
}
