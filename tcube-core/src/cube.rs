/// Cube state, face templates, and front-face selection
use arrayvec::ArrayVec;
use nalgebra::{Point2, Point3, Vector3};

use crate::projection;
use crate::transform;

/// At most three faces of a convex cube can face the viewer at once.
pub const VISIBLE_FACE_LIMIT: usize = 3;

/// Cube faces in selection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    /// Corner quad in object-local coordinates (unit cube, corners at ±1).
    pub fn corners(self) -> [Point3<f64>; 4] {
        match self {
            Face::Right => [
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, -1.0, 1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(1.0, 1.0, -1.0),
            ],
            Face::Left => [
                Point3::new(-1.0, 1.0, 1.0),
                Point3::new(-1.0, -1.0, 1.0),
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(-1.0, 1.0, -1.0),
            ],
            Face::Top => [
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, 1.0, -1.0),
                Point3::new(-1.0, 1.0, -1.0),
                Point3::new(-1.0, 1.0, 1.0),
            ],
            Face::Bottom => [
                Point3::new(1.0, -1.0, 1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(-1.0, -1.0, 1.0),
            ],
            Face::Front => [
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, -1.0, 1.0),
                Point3::new(-1.0, -1.0, 1.0),
                Point3::new(-1.0, 1.0, 1.0),
            ],
            Face::Back => [
                Point3::new(1.0, 1.0, -1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(-1.0, 1.0, -1.0),
            ],
        }
    }

    /// Outward unit normal.
    pub fn normal(self) -> Vector3<f64> {
        match self {
            Face::Right => Vector3::x(),
            Face::Left => -Vector3::x(),
            Face::Top => Vector3::y(),
            Face::Bottom => -Vector3::y(),
            Face::Front => Vector3::z(),
            Face::Back => -Vector3::z(),
        }
    }
}

/// One selected face: the rotated, projected corner quad for a raster slot.
#[derive(Debug, Clone, Copy)]
pub struct VisibleFace {
    pub face: Face,
    pub corners: [Point2<f64>; 4],
}

/// Cube state advanced once per tick by the dynamics pass.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    /// Euler angles in radians, unbounded (wrapped implicitly by trig).
    pub rotation: Vector3<f64>,
    /// Center in normalized aspect-space.
    pub position: Point2<f64>,
    /// Scale factor applied to the unit-cube corners.
    pub size: f64,
}

impl Cube {
    pub fn new(rotation: Vector3<f64>, position: Point2<f64>, size: f64) -> Self {
        Self {
            rotation,
            position,
            size,
        }
    }

    /// Select up to three front-facing quads, rotated and projected.
    ///
    /// All six normals are rotated by the cube's rotation; faces are then
    /// walked in priority order, keeping those whose rotated normal has a
    /// non-negative Z component (the camera looks down -Z, so ties at
    /// Z = 0 count as facing the viewer). Selection stops at the slot
    /// limit. The result can be shorter than three slots; missing slots
    /// never match during rasterization.
    pub fn visible_faces(&self) -> ArrayVec<VisibleFace, VISIBLE_FACE_LIMIT> {
        let mut normals = Face::ALL.map(|face| face.normal());
        transform::rotate_vectors(&mut normals, self.rotation);

        let mut selected = ArrayVec::new();
        for (face, normal) in Face::ALL.into_iter().zip(normals) {
            if normal.z < 0.0 {
                continue;
            }
            let mut corners = face.corners();
            transform::rotate_points(&mut corners, self.rotation);
            selected.push(VisibleFace {
                face,
                corners: projection::project(corners, self.position, self.size),
            });
            if selected.is_full() {
                break;
            }
        }
        selected
    }
}
