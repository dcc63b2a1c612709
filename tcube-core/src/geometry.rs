/// Planar geometry primitives shared by the cube pipeline
use std::fmt;

use nalgebra::{Point2, Vector2};

/// Errors raised by the geometry layer.
///
/// All pipeline inputs are internally generated, so these only fire on
/// contract violations by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Bounds were requested for an empty point set.
    EmptyPointSet,
    /// A hull rebuild was handed more points than its buffer can hold.
    HullCapacity { points: usize, capacity: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::EmptyPointSet => write!(f, "bounds of an empty point set"),
            GeometryError::HullCapacity { points, capacity } => {
                write!(f, "hull capacity {capacity} cannot hold {points} input points")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Signed area of the parallelogram spanned by AB and AC.
///
/// Positive when `c` lies left of the directed line a -> b, zero when the
/// three points are collinear, negative when it lies right.
pub fn cross(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (b - a).perp(&(c - a))
}

/// Axis-aligned bounding box in normalized aspect-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Bounds {
    pub fn span(&self) -> Vector2<f64> {
        self.max - self.min
    }
}

/// Componentwise min/max over a non-empty point slice.
pub fn bounds(points: &[Point2<f64>]) -> Result<Bounds, GeometryError> {
    let (first, rest) = points.split_first().ok_or(GeometryError::EmptyPointSet)?;
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Ok(Bounds { min, max })
}
