//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::frame::ColorTag;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` inside a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();
}

/// Raw bytes ready for upload to a GPU vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const WALL: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const GOAL: [f32; 4] = [0.196, 0.804, 0.196, 1.0];
    pub const HAZARD: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BOUNCING_HAZARD: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HUD: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BANNER: [f32; 4] = [0.0, 0.502, 0.0, 1.0];
}

impl ColorTag {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            ColorTag::Background => colors::BACKGROUND,
            ColorTag::Wall => colors::WALL,
            ColorTag::Goal => colors::GOAL,
            ColorTag::Hazard => colors::HAZARD,
            ColorTag::BouncingHazard => colors::BOUNCING_HAZARD,
            ColorTag::Player => colors::PLAYER,
            ColorTag::Hud => colors::HUD,
            ColorTag::Banner => colors::BANNER,
        }
    }

    /// Color with alpha multiplied in
    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        let [r, g, b, a] = self.rgba();
        [r, g, b, a * alpha]
    }
}
