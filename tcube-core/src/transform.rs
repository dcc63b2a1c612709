/// Euler rotation applied to cube geometry and face normals
use nalgebra::{Point3, Rotation3, Vector3};

/// Rotation matrix for the given per-axis angles (radians).
///
/// Composed as `Rz * Ry * Rx`, so applying the matrix rotates about X
/// first, then Y, then Z. The normal-based visibility test relies on this
/// order; do not reorder the composition.
pub fn rotation_matrix(rotation: Vector3<f64>) -> Rotation3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);

    rz * ry * rx
}

/// Rotate each point in place; output order matches input order.
pub fn rotate_points(points: &mut [Point3<f64>], rotation: Vector3<f64>) {
    let m = rotation_matrix(rotation);
    for p in points.iter_mut() {
        *p = m * *p;
    }
}

/// Rotate each direction vector in place (used for face normals).
pub fn rotate_vectors(vectors: &mut [Vector3<f64>], rotation: Vector3<f64>) {
    let m = rotation_matrix(rotation);
    for v in vectors.iter_mut() {
        *v = m * *v;
    }
}
