//! Collision detection and response for axis-aligned blocks
//!
//! Runs once per entity per tick, after the entity has already been moved by
//! its velocity. The wall pass looks at the set of obstacles the moved body
//! now overlaps and either bounces the body (hazards) or pushes it flush
//! against the wall (player).

use super::rect::{Body, Rect};
use super::state::Obstacle;

/// Face of a wall that the body crossed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// How a body reacts to a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallResponse {
    /// Negate velocity on each entered axis, position stays as moved
    Bounce,
    /// Snap flush against the entered face. Touching the goal suppresses
    /// all correction.
    Stop,
}

/// What the wall pass found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    /// No obstacle overlapped
    Clear,
    /// Stop response touched the goal; nothing was corrected
    Goal,
    /// Exactly one wall overlapped. Axes with `None` were not entered this
    /// tick and were left alone.
    Single {
        wall: usize,
        x: Option<Side>,
        y: Option<Side>,
    },
    /// Two or more walls overlapped (a corner). Both axes were reverted.
    Corner { hits: usize },
}

impl WallContact {
    pub fn is_goal(&self) -> bool {
        matches!(self, WallContact::Goal)
    }
}

/// Which faces of `wall` the body crossed during this tick's displacement.
///
/// An axis only counts when the leading edge landed inside the span the body
/// travelled this tick, so a body resting against a wall with zero velocity on
/// that axis is not flagged, and a body that was already past the face before
/// moving is not either.
pub fn entry_sides(body: &Body, wall: &Rect) -> (Option<Side>, Option<Side>) {
    let r = &body.rect;
    let v = body.vel;

    let x = if v.x > 0 && wall.left() <= r.right() && r.right() <= wall.left() + v.x {
        Some(Side::Left)
    } else if v.x < 0 && wall.right() + v.x <= r.left() && r.left() <= wall.right() {
        Some(Side::Right)
    } else {
        None
    };

    let y = if v.y > 0 && wall.top() <= r.bottom() && r.bottom() <= wall.top() + v.y {
        Some(Side::Top)
    } else if v.y < 0 && wall.bottom() + v.y <= r.top() && r.top() <= wall.bottom() {
        Some(Side::Bottom)
    } else {
        None
    };

    (x, y)
}

/// Run the wall pass for a body that has just moved.
pub fn resolve_walls(body: &mut Body, obstacles: &[Obstacle], response: WallResponse) -> WallContact {
    let mut hits = 0usize;
    let mut first = 0usize;
    let mut goal = false;

    for (i, obstacle) in obstacles.iter().enumerate() {
        if obstacle.rect.overlaps(&body.rect) {
            if hits == 0 {
                first = i;
            }
            hits += 1;
            goal |= obstacle.is_goal;
        }
    }

    if hits == 0 {
        return WallContact::Clear;
    }

    if goal && response == WallResponse::Stop {
        return WallContact::Goal;
    }

    if hits == 1 {
        let wall = obstacles[first].rect;
        let (x, y) = entry_sides(body, &wall);
        match response {
            WallResponse::Bounce => {
                if x.is_some() {
                    body.vel.x = -body.vel.x;
                }
                if y.is_some() {
                    body.vel.y = -body.vel.y;
                }
            }
            WallResponse::Stop => {
                match x {
                    Some(Side::Left) => body.rect.x = wall.left() - body.rect.width,
                    Some(Side::Right) => body.rect.x = wall.right(),
                    _ => {}
                }
                match y {
                    Some(Side::Top) => body.rect.y = wall.top() - body.rect.height,
                    Some(Side::Bottom) => body.rect.y = wall.bottom(),
                    _ => {}
                }
            }
        }
        return WallContact::Single { wall: first, x, y };
    }

    // Corner: which faces were involved is ambiguous, revert both axes.
    // Three or more hits take the same path.
    match response {
        WallResponse::Bounce => body.vel = -body.vel,
        WallResponse::Stop => body.rect.translate(-body.vel),
    }
    WallContact::Corner { hits }
}

/// True if `rect` overlaps any of `others`
pub fn touches_any<'a>(rect: &Rect, others: impl IntoIterator<Item = &'a Rect>) -> bool {
    others.into_iter().any(|other| rect.overlaps(other))
}

/// Bounce off other hazards. `others` must not contain the body itself.
///
/// Any overlap negates both axes; there is no per-axis analysis here.
pub fn bounce_off_others<'a>(body: &mut Body, others: impl IntoIterator<Item = &'a Rect>) -> bool {
    if touches_any(&body.rect, others) {
        body.vel = -body.vel;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn wall(x: i32, y: i32, w: i32, h: i32) -> Obstacle {
        Obstacle::wall(Rect::new(x, y, w, h))
    }

    #[test]
    fn test_no_hits_is_clear() {
        let mut body = Body::new(Rect::new(0, 0, 10, 10), IVec2::new(3, 3));
        let before = body;
        let contact = resolve_walls(&mut body, &[wall(100, 100, 10, 10)], WallResponse::Stop);
        assert_eq!(contact, WallContact::Clear);
        assert_eq!(body, before);
    }

    #[test]
    fn test_stop_snaps_flush_to_left_face() {
        // Already moved: was at x=35, now x=45, right edge 55 inside [50, 60]
        let mut body = Body::new(Rect::new(45, 100, 10, 10), IVec2::new(10, 0));
        let contact = resolve_walls(&mut body, &[wall(50, 0, 50, 600)], WallResponse::Stop);
        assert_eq!(body.rect.x, 40);
        assert_eq!(body.rect.y, 100);
        assert!(matches!(
            contact,
            WallContact::Single { wall: 0, x: Some(Side::Left), y: None }
        ));
        assert!(!body.rect.overlaps(&Rect::new(50, 0, 50, 600)));
    }

    #[test]
    fn test_stop_snaps_flush_to_right_and_bottom_faces() {
        let w = Rect::new(0, 0, 50, 50);
        let mut body = Body::new(Rect::new(47, 60, 10, 10), IVec2::new(-3, 0));
        resolve_walls(&mut body, &[Obstacle::wall(w)], WallResponse::Stop);
        // no overlap on y, nothing to do
        assert_eq!(body.rect.x, 47);

        let mut body = Body::new(Rect::new(47, 20, 10, 10), IVec2::new(-3, 0));
        resolve_walls(&mut body, &[Obstacle::wall(w)], WallResponse::Stop);
        assert_eq!(body.rect.x, 50);

        let mut body = Body::new(Rect::new(20, 48, 10, 10), IVec2::new(0, -3));
        resolve_walls(&mut body, &[Obstacle::wall(w)], WallResponse::Stop);
        assert_eq!(body.rect.y, 50);
    }

    #[test]
    fn test_resting_body_not_resolved_on_still_axis() {
        // Sliding down along a wall it already overlaps by one pixel on x:
        // x velocity is zero so the x axis must not be touched.
        let mut body = Body::new(Rect::new(41, 100, 10, 10), IVec2::new(0, 3));
        resolve_walls(&mut body, &[wall(50, 0, 50, 600)], WallResponse::Stop);
        assert_eq!(body.rect.position(), IVec2::new(41, 100));
    }

    #[test]
    fn test_bounce_flips_entered_axis_only() {
        let mut body = Body::new(Rect::new(0, 45, 10, 10), IVec2::new(5, 5));
        let contact = resolve_walls(&mut body, &[wall(-100, 50, 300, 50)], WallResponse::Bounce);
        assert_eq!(body.vel, IVec2::new(5, -5));
        // position is left as moved
        assert_eq!(body.rect.position(), IVec2::new(0, 45));
        assert!(matches!(contact, WallContact::Single { y: Some(Side::Top), .. }));
    }

    #[test]
    fn test_corner_reverts_player_position() {
        // Pre-tick at (42, 42), moved by (3, 3) into the corner of two walls
        let walls = [wall(50, 0, 50, 100), wall(0, 50, 50, 50)];
        let mut body = Body::new(Rect::new(45, 45, 10, 10), IVec2::new(3, 3));
        let contact = resolve_walls(&mut body, &walls, WallResponse::Stop);
        assert_eq!(contact, WallContact::Corner { hits: 2 });
        assert_eq!(body.rect.position(), IVec2::new(42, 42));
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let walls = [wall(50, 0, 50, 100), wall(0, 50, 50, 50)];
        let mut body = Body::new(Rect::new(45, 45, 10, 10), IVec2::new(3, -2));
        resolve_walls(&mut body, &walls, WallResponse::Bounce);
        assert_eq!(body.vel, IVec2::new(-3, 2));
    }

    #[test]
    fn test_three_hits_degrade_to_revert() {
        let walls = [
            wall(50, 0, 50, 50),
            wall(0, 50, 50, 50),
            wall(50, 50, 50, 50),
        ];
        let mut body = Body::new(Rect::new(45, 45, 10, 10), IVec2::new(2, 2));
        let contact = resolve_walls(&mut body, &walls, WallResponse::Stop);
        assert_eq!(contact, WallContact::Corner { hits: 3 });
        assert_eq!(body.rect.position(), IVec2::new(43, 43));
    }

    #[test]
    fn test_goal_short_circuits_stop() {
        let obstacles = [Obstacle::goal(Rect::new(50, 0, 50, 600)), wall(0, 0, 10, 10)];
        let mut body = Body::new(Rect::new(45, 100, 10, 10), IVec2::new(10, 0));
        let contact = resolve_walls(&mut body, &obstacles, WallResponse::Stop);
        assert!(contact.is_goal());
        assert_eq!(body.rect.x, 45);
        assert!(body.rect.overlaps(&obstacles[0].rect));
    }

    #[test]
    fn test_goal_is_a_wall_for_bounce() {
        let obstacles = [Obstacle::goal(Rect::new(50, 0, 50, 600))];
        let mut body = Body::new(Rect::new(45, 100, 10, 10), IVec2::new(10, 0));
        let contact = resolve_walls(&mut body, &obstacles, WallResponse::Bounce);
        assert!(!contact.is_goal());
        assert_eq!(body.vel, IVec2::new(-10, 0));
    }

    #[test]
    fn test_bounce_off_others() {
        let mut body = Body::new(Rect::new(0, 0, 10, 10), IVec2::new(5, 1));
        let others = [Rect::new(100, 100, 10, 10)];
        assert!(!bounce_off_others(&mut body, others.iter()));
        assert_eq!(body.vel, IVec2::new(5, 1));

        let others = [Rect::new(100, 100, 10, 10), Rect::new(8, 8, 10, 10)];
        assert!(bounce_off_others(&mut body, others.iter()));
        assert_eq!(body.vel, IVec2::new(-5, -1));
    }
}
