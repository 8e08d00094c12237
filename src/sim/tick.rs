//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically.

use glam::IVec2;

use super::state::{Session, SessionPhase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Stop the session before this tick runs
    pub quit: bool,
}

impl TickInput {
    /// Unit direction of the held keys. Opposing keys cancel out,
    /// perpendicular keys combine into a diagonal.
    pub fn direction(&self) -> IVec2 {
        let mut dir = IVec2::ZERO;
        if self.up {
            dir.y -= 1;
        }
        if self.down {
            dir.y += 1;
        }
        if self.left {
            dir.x -= 1;
        }
        if self.right {
            dir.x += 1;
        }
        dir
    }
}

/// Whether the caller should keep ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    /// The ending sequence ran out
    Completed,
    /// Stopped by the quit signal
    Quit,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut Session, input: &TickInput) -> TickStatus {
    if session.phase == SessionPhase::Finished {
        return TickStatus::Completed;
    }
    if input.quit {
        log::info!(
            "Quit during {:?} after {} ticks, deaths={}",
            session.phase,
            session.time_ticks,
            session.deaths()
        );
        session.phase = SessionPhase::Finished;
        return TickStatus::Quit;
    }

    session.time_ticks += 1;

    match session.phase {
        SessionPhase::Playing { level } => {
            if level >= session.levels.len() {
                start_ending(session);
                return TickStatus::Running;
            }
            let tuning = session.tuning;
            let current = &mut session.levels[level];

            current.advance(input, &tuning);

            if current.reached_goal() {
                log::info!(
                    "Level {} complete (deaths so far: {})",
                    current.number(),
                    current.deaths()
                );
                session.phase = SessionPhase::LevelComplete { level };
                session.phase_ticks = 0;
            }
        }

        SessionPhase::LevelComplete { level } => {
            session.phase_ticks += 1;
            if session.phase_ticks > session.tuning.banner_ticks {
                let next = level + 1;
                if next < session.levels.len() {
                    let deaths = session.levels[level].deaths();
                    session.levels[next].set_deaths(deaths);
                    session.current = next;
                    session.phase = SessionPhase::Playing { level: next };
                    session.phase_ticks = 0;
                    log::info!("Starting level {}", next + 1);
                } else {
                    start_ending(session);
                }
            }
        }

        SessionPhase::Ending => {
            session.phase_ticks += 1;
            if session.phase_ticks > session.tuning.ending_ticks {
                log::info!("Session finished after {} ticks", session.time_ticks);
                session.phase = SessionPhase::Finished;
                return TickStatus::Completed;
            }
        }

        SessionPhase::Finished => return TickStatus::Completed,
    }

    TickStatus::Running
}

fn start_ending(session: &mut Session) {
    let deaths = session.deaths();
    session.end_messages = vec![
        "Congratulations!".to_string(),
        "You beat all the levels!".to_string(),
        "Thanks for playing!".to_string(),
        format!("Total number of deaths: {}", deaths),
    ];
    session.phase = SessionPhase::Ending;
    session.phase_ticks = 0;
    log::info!("All levels cleared, total deaths: {}", deaths);
}
