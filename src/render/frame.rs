//! Per-tick description of what the host should draw
//!
//! The core never rasterizes. Each tick it hands out a list of colored
//! rectangles and a few text strings.

use crate::consts::{GAME_BYLINE, GAME_TITLE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{HintAlign, HintTone, Level, Rect, Session, SessionPhase};

/// Alpha of the player while stunned (75/255)
pub const STUNNED_ALPHA: f32 = 75.0 / 255.0;

/// Semantic color of a drawn item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Background,
    Wall,
    Goal,
    Hazard,
    BouncingHazard,
    Player,
    /// Death counter and level number
    Hud,
    /// Level complete banner, closing messages, credits
    Banner,
}

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectItem {
    pub rect: Rect,
    pub tag: ColorTag,
    pub alpha: f32,
}

/// Which point of the text's bounding box sits at (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    TopRight,
    Center,
    /// Horizontally centered, text sits above y
    BottomCenter,
    /// Horizontally centered, text hangs below y
    TopCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// 20 pt bold
    Hud,
    /// 32 pt
    Hint,
    /// 48 pt bold
    Banner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub anchor: TextAnchor,
    pub size: TextSize,
    pub tag: ColorTag,
}

impl TextItem {
    fn new(text: impl Into<String>, x: i32, y: i32, anchor: TextAnchor, size: TextSize, tag: ColorTag) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            anchor,
            size,
            tag,
        }
    }
}

/// Everything to draw for one tick, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub rects: Vec<RectItem>,
    pub texts: Vec<TextItem>,
}

impl Frame {
    /// Describe the session as it stands after the latest tick
    pub fn build(session: &Session) -> Self {
        let mut frame = Frame::default();
        if session.phase() != SessionPhase::Finished {
            frame.push_rect(
                Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
                ColorTag::Background,
            );
        }
        match session.phase() {
            SessionPhase::Playing { level } | SessionPhase::LevelComplete { level } => {
                if let Some(current) = session.levels().get(level) {
                    frame.push_level(current);
                    if matches!(session.phase(), SessionPhase::LevelComplete { .. }) {
                        frame.texts.push(TextItem::new(
                            format!("Level {} complete!", current.number()),
                            SCREEN_WIDTH / 2,
                            SCREEN_HEIGHT / 2,
                            TextAnchor::Center,
                            TextSize::Banner,
                            ColorTag::Banner,
                        ));
                    }
                }
            }
            SessionPhase::Ending => frame.push_ending(session),
            SessionPhase::Finished => {}
        }
        frame
    }

    fn push_rect(&mut self, rect: Rect, tag: ColorTag) {
        self.rects.push(RectItem {
            rect,
            tag,
            alpha: 1.0,
        });
    }

    fn push_level(&mut self, level: &Level) {
        self.rects.extend(level.render_items());

        for hint in level.hints() {
            let anchor = match hint.align {
                HintAlign::Left => TextAnchor::TopLeft,
                HintAlign::Right => TextAnchor::TopRight,
            };
            let tag = match hint.tone {
                HintTone::Player => ColorTag::Player,
                HintTone::Goal => ColorTag::Goal,
                HintTone::Hazard => ColorTag::Hazard,
            };
            self.texts
                .push(TextItem::new(hint.text.clone(), hint.x, hint.y, anchor, TextSize::Hint, tag));
        }

        self.texts.push(TextItem::new(
            format!("Deaths: {}", level.deaths()),
            10,
            10,
            TextAnchor::TopLeft,
            TextSize::Hud,
            ColorTag::Hud,
        ));
        self.texts.push(TextItem::new(
            format!("Level {}", level.number()),
            SCREEN_WIDTH - 10,
            10,
            TextAnchor::TopRight,
            TextSize::Hud,
            ColorTag::Hud,
        ));
    }

    fn push_ending(&mut self, session: &Session) {
        for wall in session.backdrop() {
            self.push_rect(wall.rect, ColorTag::Wall);
        }

        let (cx, cy) = (SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
        if let Some(i) = session.end_message_index() {
            self.texts.push(TextItem::new(
                session.end_messages()[i].clone(),
                cx,
                cy,
                TextAnchor::Center,
                TextSize::Banner,
                ColorTag::Banner,
            ));
        }

        let (title, byline) = session.credits_visible();
        if title {
            self.texts.push(TextItem::new(
                GAME_TITLE,
                cx,
                cy,
                TextAnchor::BottomCenter,
                TextSize::Banner,
                ColorTag::Banner,
            ));
        }
        if byline {
            self.texts.push(TextItem::new(
                GAME_BYLINE,
                cx,
                cy,
                TextAnchor::TopCenter,
                TextSize::Banner,
                ColorTag::Banner,
            ));
        }
    }
}

impl Level {
    /// Rectangles to draw for this level: obstacles, hazards, then the player
    pub fn render_items(&self) -> Vec<RectItem> {
        let solid = |rect: Rect, tag: ColorTag| RectItem {
            rect,
            tag,
            alpha: 1.0,
        };

        let obstacles = self.obstacles().iter().map(|o| {
            solid(o.rect, if o.is_goal { ColorTag::Goal } else { ColorTag::Wall })
        });
        let hazards = self.hazards().iter().map(|h| {
            let tag = if h.flags.bounces_off_hazards {
                ColorTag::BouncingHazard
            } else {
                ColorTag::Hazard
            };
            solid(h.body.rect, tag)
        });

        let player = self.player();
        let player_item = RectItem {
            rect: player.body.rect,
            tag: ColorTag::Player,
            alpha: if player.is_translucent() {
                STUNNED_ALPHA
            } else {
                1.0
            },
        };

        obstacles.chain(hazards).chain(std::iter::once(player_item)).collect()
    }
}
