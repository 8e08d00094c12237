//! Shape generation for 2D primitives
//!
//! Arena pixels (origin top-left, y down) are mapped to clip space
//! (origin center, y up) so the host can draw the vertices as-is.

use glam::Vec2;

use super::frame::Frame;
use super::vertex::Vertex;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

/// Pixel-to-clip-space mapping for a fixed-size arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32),
        }
    }
}

impl Viewport {
    /// Map an arena pixel coordinate to clip space
    #[inline]
    pub fn to_clip(&self, x: i32, y: i32) -> Vec2 {
        let p = Vec2::new(x as f32, y as f32) / self.size;
        Vec2::new(p.x * 2.0 - 1.0, 1.0 - p.y * 2.0)
    }
}

/// Two triangles covering `rect`
pub fn quad(rect: &Rect, color: [f32; 4], viewport: &Viewport) -> [Vertex; 6] {
    let tl = viewport.to_clip(rect.left(), rect.top());
    let br = viewport.to_clip(rect.right(), rect.bottom());

    let v = |p: Vec2| Vertex::new(p.x, p.y, color);
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);

    [v(tl), v(bl), v(tr), v(tr), v(bl), v(br)]
}

/// Triangle list for every rectangle in the frame, in draw order.
/// Text is left to the host's text renderer.
pub fn frame_vertices(frame: &Frame, viewport: &Viewport) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.rects.len() * 6);
    for item in &frame.rects {
        vertices.extend_from_slice(&quad(&item.rect, item.tag.with_alpha(item.alpha), viewport));
    }
    vertices
}
