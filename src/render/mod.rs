//! Render boundary
//!
//! Describes each tick as colored rectangles and text, and turns the
//! rectangles into vertices. Rasterization belongs to the host.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{ColorTag, Frame, RectItem, TextAnchor, TextItem, TextSize};
pub use shapes::{Viewport, frame_vertices, quad};
pub use vertex::{Vertex, as_bytes};
