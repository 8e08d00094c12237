//! Autopilot - plays the game without a keyboard
//!
//! Mostly heads straight for the goal, sometimes wanders off in a random
//! direction to get unstuck from walls. Seeded, so a run with the same seed
//! and tuning always produces the same inputs.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Rect, Session, TickInput};

/// Shortest and longest time a chosen direction is held (ticks)
const MIN_HOLD_TICKS: u32 = 6;
const MAX_HOLD_TICKS: u32 = 40;

pub struct Autopilot {
    rng: Pcg32,
    /// Chance of picking a random direction instead of chasing the goal
    wander: f64,
    held: TickInput,
    hold_ticks: u32,
}

fn center(rect: &Rect) -> IVec2 {
    IVec2::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

impl Autopilot {
    pub fn new(seed: u64, wander: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            wander: wander.clamp(0.0, 1.0),
            held: TickInput::default(),
            hold_ticks: 0,
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self, session: &Session) -> TickInput {
        let Some(level) = session.current_level() else {
            return TickInput::default();
        };

        if self.hold_ticks > 0 {
            self.hold_ticks -= 1;
            return self.held;
        }

        self.held = if self.rng.random_bool(self.wander) {
            TickInput {
                up: self.rng.random_bool(0.5),
                down: self.rng.random_bool(0.5),
                left: self.rng.random_bool(0.5),
                right: self.rng.random_bool(0.5),
                quit: false,
            }
        } else {
            let to_goal = (center(&level.goal().rect) - center(&level.player().body.rect)).signum();
            TickInput {
                up: to_goal.y < 0,
                down: to_goal.y > 0,
                left: to_goal.x < 0,
                right: to_goal.x > 0,
                quit: false,
            }
        };
        self.hold_ticks = self.rng.random_range(MIN_HOLD_TICKS..=MAX_HOLD_TICKS);
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_same_seed_same_inputs() {
        let session = Session::campaign(Tuning::default()).unwrap();
        let mut a = Autopilot::new(7, 0.5);
        let mut b = Autopilot::new(7, 0.5);
        for _ in 0..500 {
            assert_eq!(a.next_input(&session), b.next_input(&session));
        }
    }

    #[test]
    fn test_no_wander_heads_for_goal() {
        // level 1: spawn bottom-left, goal on the right
        let session = Session::campaign(Tuning::default()).unwrap();
        let mut pilot = Autopilot::new(1, 0.0);
        let input = pilot.next_input(&session);
        assert!(input.right);
        assert!(!input.left);
        assert!(!input.quit);
    }
}
