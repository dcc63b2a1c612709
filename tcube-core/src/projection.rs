/// Orthographic projection and the terminal viewport mapping
use nalgebra::{Point2, Point3, Vector2};

use crate::geometry::Bounds;

/// Project a face's corners along Z into normalized aspect-space.
///
/// Each point maps to `(x * size / 2 + position.x, y * size / 2 +
/// position.y)`; Z is discarded. No perspective division.
pub fn project(points: [Point3<f64>; 4], position: Point2<f64>, size: f64) -> [Point2<f64>; 4] {
    points.map(|p| project_point(p, position, size))
}

pub fn project_point(point: Point3<f64>, position: Point2<f64>, size: f64) -> Point2<f64> {
    Point2::new(
        point.x * size / 2.0 + position.x,
        point.y * size / 2.0 + position.y,
    )
}

/// Mapping between normalized aspect-space and terminal character cells.
///
/// Rebuilt from the live terminal size every tick and threaded explicitly
/// through the raster pass; `new` is the only guarded constructor.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
    pub aspect: Vector2<f64>,
}

/// Cell region covered by a raster pass: `0..=width` columns and
/// `0..=height` rows, offset by `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// `None` when either dimension is zero; the frame must be skipped
    /// rather than dividing by the terminal size.
    pub fn new(columns: u16, rows: u16) -> Option<Self> {
        if columns == 0 || rows == 0 {
            return None;
        }
        let aspect = Vector2::new(f64::from(columns) / f64::from(rows) * 0.5, 1.0);
        Some(Self {
            columns,
            rows,
            aspect,
        })
    }

    /// Map an aspect-space bounding box to the cell region that covers it.
    pub fn scan_region(&self, bounds: &Bounds) -> ScanRegion {
        let span = bounds.span();
        ScanRegion {
            x: (bounds.min.x / self.aspect.x * f64::from(self.columns)).floor() as i32,
            y: (bounds.min.y / self.aspect.y * f64::from(self.rows)).floor() as i32,
            width: (span.x / self.aspect.x * f64::from(self.columns)).ceil() as i32,
            height: (span.y / self.aspect.y * f64::from(self.rows)).floor() as i32,
        }
    }

    /// Aspect-space sample point for an absolute cell (inverse of
    /// `scan_region`'s mapping).
    pub fn sample(&self, col: i32, row: i32) -> Point2<f64> {
        Point2::new(
            f64::from(col) * self.aspect.x / f64::from(self.columns),
            f64::from(row) * self.aspect.y / f64::from(self.rows),
        )
    }
}
