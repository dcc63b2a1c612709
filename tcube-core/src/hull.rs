/// Convex hulls of projected face corners and point containment
use arrayvec::ArrayVec;
use nalgebra::Point2;

use crate::geometry::{cross, GeometryError};

/// Hull capacity for a quad's four projected corners (2x the input size).
pub const FACE_HULL_CAPACITY: usize = 8;

/// Hull of one visible face.
pub type FaceHull = ConvexHull<FACE_HULL_CAPACITY>;

/// Convex polygon boundary in monotone-chain order.
///
/// The backing buffer is bounded at `CAP` and reused across rebuilds;
/// inputs of up to `CAP / 2` points are accepted. For a non-degenerate
/// input the stored chain ends with the first vertex repeated, closing the
/// polygon; collinear input collapses the chain to as few as 2 distinct
/// vertices.
#[derive(Debug, Clone, Default)]
pub struct ConvexHull<const CAP: usize> {
    points: ArrayVec<Point2<f64>, CAP>,
}

impl<const CAP: usize> ConvexHull<CAP> {
    pub fn new() -> Self {
        Self {
            points: ArrayVec::new(),
        }
    }

    /// Stored hull vertices in winding order.
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rebuild the hull from `points`, reusing the internal buffer.
    ///
    /// Sorts the input slice in place, ascending by (x, then y), then runs
    /// the monotone chain: the upper chain left-to-right, the lower chain
    /// right-to-left, popping the last accepted vertex while the turn to
    /// the candidate is not strictly left (`cross <= 0`).
    pub fn rebuild(&mut self, points: &mut [Point2<f64>]) -> Result<(), GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPointSet);
        }
        if points.len() * 2 > CAP {
            return Err(GeometryError::HullCapacity {
                points: points.len(),
                capacity: CAP,
            });
        }
        points.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

        let hull = &mut self.points;
        hull.clear();

        // Upper chain, left to right.
        for &p in points.iter() {
            while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }

        // Lower chain, right to left. The pop floor keeps the upper
        // chain's tail vertex from being consumed.
        let floor = hull.len() + 1;
        for &p in points.iter().rev().skip(1) {
            while hull.len() >= floor && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
            {
                hull.pop();
            }
            hull.push(p);
        }

        Ok(())
    }

    /// Whether `p` lies inside the hull.
    ///
    /// Walks consecutive stored edges `points[i-1] -> points[i]`; any
    /// negative cross product rejects the point. No closing edge is
    /// synthesized: a non-degenerate chain already ends on its first
    /// vertex, while a degenerate chain (all vertices on one line) only
    /// accepts points on the segment. Fewer than 2 vertices accept every
    /// point.
    pub fn contains(&self, p: Point2<f64>) -> bool {
        for edge in self.points.windows(2) {
            if cross(edge[0], edge[1], p) < 0.0 {
                return false;
            }
        }
        true
    }
}
