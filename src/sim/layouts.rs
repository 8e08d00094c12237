//! Built-in campaign
//!
//! Four levels on an 800x600 arena framed by 50 px boundary walls.

use glam::IVec2;

use super::level::{HazardSpec, Hint, HintAlign, HintTone, LevelLayout};
use super::rect::Rect;
use crate::consts::*;

/// The four boundary walls: left, right, top, bottom
pub fn arena_walls() -> Vec<Rect> {
    vec![
        Rect::new(0, 0, BORDER, SCREEN_HEIGHT),
        Rect::new(SCREEN_WIDTH - BORDER, 0, BORDER, SCREEN_HEIGHT),
        Rect::new(0, 0, SCREEN_WIDTH, BORDER),
        Rect::new(0, SCREEN_HEIGHT - BORDER, SCREEN_WIDTH, BORDER),
    ]
}

/// `count` hazards starting at (`x`, `y`) and spaced by `step`
fn hazard_row(count: i32, x: i32, y: i32, step: IVec2, vel: IVec2, bounces_off_hazards: bool) -> Vec<HazardSpec> {
    (0..count)
        .map(|i| HazardSpec {
            rect: Rect::new(x + step.x * i, y + step.y * i, HAZARD_SIZE, HAZARD_SIZE),
            vel,
            bounces_off_walls: true,
            bounces_off_hazards,
        })
        .collect()
}

fn hint(text: &str, x: i32, y: i32, tone: HintTone, align: HintAlign) -> Hint {
    Hint {
        text: text.to_string(),
        x,
        y,
        tone,
        align,
    }
}

/// Level 1: a single line of slow vertical blockers
pub fn level_one() -> LevelLayout {
    let goal = Rect::new(SCREEN_WIDTH - 2 * BORDER, BORDER, 50, SCREEN_HEIGHT - 2 * BORDER);
    LevelLayout {
        walls: arena_walls(),
        goal,
        hazards: hazard_row(12, 100, 400, IVec2::new(50, 0), IVec2::new(0, 2), false),
        spawn: IVec2::new(BORDER + 10, SCREEN_HEIGHT - BORDER - 20),
        player_size: IVec2::splat(PLAYER_SIZE),
        hints: vec![
            hint(
                "Move your red block using the arrow keys.",
                60,
                60,
                HintTone::Player,
                HintAlign::Left,
            ),
            hint(
                "Get to the green goal ==>",
                goal.left() - 50,
                SCREEN_HEIGHT - 137,
                HintTone::Goal,
                HintAlign::Right,
            ),
            hint(
                "Don't touch the black blocks!",
                60,
                140,
                HintTone::Hazard,
                HintAlign::Left,
            ),
        ],
    }
}

/// Level 2: a fast vertical row crossed by a fast horizontal column
pub fn level_two() -> LevelLayout {
    let mut hazards = hazard_row(14, 50, 100, IVec2::new(50, 0), IVec2::new(0, 5), false);
    hazards.extend(hazard_row(10, 150, 75, IVec2::new(0, 50), IVec2::new(5, 0), false));
    LevelLayout {
        walls: arena_walls(),
        goal: Rect::new(BORDER, SCREEN_HEIGHT - BORDER - 50, 50, 50),
        hazards,
        spawn: IVec2::new(SCREEN_WIDTH - BORDER - 20, BORDER + 10),
        player_size: IVec2::splat(PLAYER_SIZE),
        hints: vec![],
    }
}

/// Level 3: a corridor wrapped around a central block
pub fn level_three() -> LevelLayout {
    let divider = Rect::new(SCREEN_WIDTH / 2 - 20, BORDER, 40, SCREEN_HEIGHT / 2 - BORDER);
    let block = Rect::new(SCREEN_WIDTH / 2 - 200, divider.top() + 50, 400, 400);

    let mut hazards = hazard_row(7, 50, 75, IVec2::new(45, 0), IVec2::new(0, 3), false);
    hazards.extend(hazard_row(11, 250, 525, IVec2::new(45, 0), IVec2::new(0, 3), false));
    hazards.extend(hazard_row(7, 75, 90, IVec2::new(0, 75), IVec2::new(3, 0), false));
    hazards.extend(hazard_row(6, 625, 125, IVec2::new(0, 75), IVec2::new(3, 0), false));

    let mut walls = vec![divider, block];
    walls.extend(arena_walls());

    LevelLayout {
        walls,
        goal: Rect::new(divider.right(), BORDER, 60, block.top() - BORDER),
        hazards,
        spawn: IVec2::new(divider.left() - 20, divider.top() + 10),
        player_size: IVec2::splat(PLAYER_SIZE),
        hints: vec![],
    }
}

/// Level 4: hazards that also bounce off each other, goal in the middle
pub fn level_four() -> LevelLayout {
    let ledge = Rect::new(BORDER, BORDER + 30, 100, 25);

    let mut hazards = hazard_row(16, 60, 200, IVec2::new(45, 0), IVec2::new(0, 5), true);
    hazards.extend(hazard_row(10, 150, 90, IVec2::new(0, 50), IVec2::new(5, 0), true));

    let mut walls = vec![ledge];
    walls.extend(arena_walls());

    LevelLayout {
        walls,
        goal: Rect::new(SCREEN_WIDTH / 2 - 10, SCREEN_HEIGHT / 2 - 10, 20, 20),
        hazards,
        spawn: IVec2::new(BORDER + 10, BORDER + 10),
        player_size: IVec2::splat(PLAYER_SIZE),
        hints: vec![],
    }
}

/// The full built-in campaign in play order
pub fn campaign() -> Vec<LevelLayout> {
    vec![level_one(), level_two(), level_three(), level_four()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_layouts_are_valid() {
        for (i, layout) in campaign().iter().enumerate() {
            assert!(layout.validate(i as u32 + 1).is_ok(), "level {}", i + 1);
        }
    }

    #[test]
    fn test_level_three_geometry() {
        let l = level_three();
        assert_eq!(l.walls[0], Rect::new(380, 50, 40, 250));
        assert_eq!(l.walls[1], Rect::new(200, 100, 400, 400));
        assert_eq!(l.goal, Rect::new(420, 50, 60, 50));
        assert_eq!(l.spawn, IVec2::new(360, 60));
        assert_eq!(l.hazards.len(), 31);
    }

    #[test]
    fn test_only_level_four_hazards_bounce_off_each_other() {
        let c = campaign();
        assert!(c[..3].iter().all(|l| l.hazards.iter().all(|h| !h.bounces_off_hazards)));
        assert!(c[3].hazards.iter().all(|h| h.bounces_off_hazards));
        assert_eq!(c[3].hazards.len(), 26);
    }

    #[test]
    fn test_campaign_survives_json_round_trip() {
        let json = serde_json::to_string(&campaign()).unwrap();
        assert_eq!(LevelLayout::list_from_json(&json).unwrap(), campaign());
    }
}
