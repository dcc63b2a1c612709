/// TCube Core Library - geometry and simulation for the bouncing cube
///
/// This library provides the stateless core of the renderer: Euler
/// rotation, orthographic projection, front-face selection, convex hull
/// construction with point containment, and the per-tick dynamics. It has
/// no terminal dependency; the viewport type only describes the mapping
/// between aspect-space and character cells.

pub mod cube;
pub mod dynamics;
pub mod geometry;
pub mod hull;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use cube::{Cube, Face, VisibleFace, VISIBLE_FACE_LIMIT};
pub use dynamics::Dynamics;
pub use geometry::{Bounds, GeometryError};
pub use hull::{ConvexHull, FaceHull};
pub use projection::Viewport;
