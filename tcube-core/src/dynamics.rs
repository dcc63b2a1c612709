/// Per-tick motion integration and boundary collision response
use nalgebra::{Point2, Vector2, Vector3};

use crate::cube::Cube;
use crate::geometry::{self, GeometryError};

/// Padding that keeps the cube strictly inside the aspect box.
const EDGE_EPSILON: f64 = 0.01;

/// Linear and angular velocity owned by the simulation loop.
#[derive(Debug, Clone, Copy)]
pub struct Dynamics {
    pub velocity: Vector2<f64>,
    pub angular_velocity: Vector3<f64>,
}

impl Dynamics {
    pub fn new(velocity: Vector2<f64>, angular_velocity: Vector3<f64>) -> Self {
        Self {
            velocity,
            angular_velocity,
        }
    }

    /// Advance position and rotation by one tick.
    pub fn step(&self, cube: &mut Cube) {
        cube.position += self.velocity;
        cube.rotation += self.angular_velocity;
    }

    /// Reflect off the aspect-space bounds.
    ///
    /// `corners` are the frame's projected face corners; their bounding
    /// box is tested against the epsilon-padded `[0, aspect]` box. A
    /// violated vertical wall negates `velocity.x` and
    /// `angular_velocity.y`, a horizontal wall negates `velocity.y` and
    /// `angular_velocity.x`; in both cases the cube is shifted back
    /// inside by the penetration depth. Axis-aligned reflection only.
    pub fn handle_edge_collision(
        &mut self,
        corners: &[Point2<f64>],
        cube: &mut Cube,
        aspect: Vector2<f64>,
    ) -> Result<(), GeometryError> {
        let bounds = geometry::bounds(corners)?;

        if bounds.min.x < EDGE_EPSILON {
            self.velocity.x = -self.velocity.x;
            self.angular_velocity.y = -self.angular_velocity.y;
            cube.position.x += EDGE_EPSILON - bounds.min.x;
        }
        if bounds.max.x + EDGE_EPSILON > aspect.x {
            self.velocity.x = -self.velocity.x;
            self.angular_velocity.y = -self.angular_velocity.y;
            cube.position.x -= bounds.max.x + EDGE_EPSILON - aspect.x;
        }
        if bounds.min.y < EDGE_EPSILON {
            self.velocity.y = -self.velocity.y;
            self.angular_velocity.x = -self.angular_velocity.x;
            cube.position.y += EDGE_EPSILON - bounds.min.y;
        }
        if bounds.max.y + EDGE_EPSILON > aspect.y {
            self.velocity.y = -self.velocity.y;
            self.angular_velocity.x = -self.angular_velocity.x;
            cube.position.y -= bounds.max.y + EDGE_EPSILON - aspect.y;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cube() -> Cube {
        Cube::new(Vector3::zeros(), Point2::new(0.5, 0.5), 0.3)
    }

    fn test_dynamics() -> Dynamics {
        Dynamics::new(Vector2::new(0.01, 0.02), Vector3::new(0.05, 0.06, 0.0))
    }

    #[test]
    fn step_integrates_velocities() {
        let mut cube = test_cube();
        let dynamics = test_dynamics();
        dynamics.step(&mut cube);

        assert!((cube.position - Point2::new(0.51, 0.52)).norm() < 1e-12);
        assert!((cube.rotation - Vector3::new(0.05, 0.06, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn min_x_wall_reflects_and_pushes_back() {
        let mut cube = test_cube();
        cube.position.x = 0.1;
        let mut dynamics = test_dynamics();

        let corners = [
            Point2::new(-0.05, 0.5),
            Point2::new(0.2, 0.5),
            Point2::new(0.2, 0.6),
            Point2::new(-0.05, 0.6),
        ];
        dynamics
            .handle_edge_collision(&corners, &mut cube, Vector2::new(1.0, 1.0))
            .unwrap();

        assert_eq!(dynamics.velocity.x, -0.01);
        assert_eq!(dynamics.angular_velocity.y, -0.06);
        // Pushed back by the penetration depth: the corrected min-x sits
        // on the epsilon pad.
        assert!((cube.position.x - 0.16).abs() < 1e-12);
        assert_eq!(dynamics.velocity.y, 0.02);
        assert_eq!(dynamics.angular_velocity.x, 0.05);
    }

    #[test]
    fn max_x_wall_reflects_and_pushes_back() {
        let mut cube = test_cube();
        cube.position.x = 0.9;
        let mut dynamics = test_dynamics();

        let corners = [Point2::new(0.7, 0.5), Point2::new(0.995, 0.5)];
        dynamics
            .handle_edge_collision(&corners, &mut cube, Vector2::new(1.0, 1.0))
            .unwrap();

        assert_eq!(dynamics.velocity.x, -0.01);
        assert_eq!(dynamics.angular_velocity.y, -0.06);
        assert!((cube.position.x - 0.895).abs() < 1e-12);
    }

    #[test]
    fn horizontal_walls_pair_with_angular_x() {
        let mut cube = test_cube();
        let mut dynamics = test_dynamics();

        let corners = [Point2::new(0.5, -0.02), Point2::new(0.5, 0.4)];
        dynamics
            .handle_edge_collision(&corners, &mut cube, Vector2::new(1.0, 1.0))
            .unwrap();

        assert_eq!(dynamics.velocity.y, -0.02);
        assert_eq!(dynamics.angular_velocity.x, -0.05);
        assert_eq!(dynamics.velocity.x, 0.01);
        assert!((cube.position.y - 0.53).abs() < 1e-12);
    }

    #[test]
    fn centered_cube_is_untouched() {
        let mut cube = test_cube();
        let mut dynamics = test_dynamics();
        let before_cube = cube;
        let before = dynamics;

        let corners = [Point2::new(0.35, 0.35), Point2::new(0.65, 0.65)];
        dynamics
            .handle_edge_collision(&corners, &mut cube, Vector2::new(1.0, 1.0))
            .unwrap();

        assert_eq!(cube.position, before_cube.position);
        assert_eq!(dynamics.velocity, before.velocity);
        assert_eq!(dynamics.angular_velocity, before.angular_velocity);
    }

    #[test]
    fn collision_requires_corners() {
        let mut cube = test_cube();
        let mut dynamics = test_dynamics();
        let result = dynamics.handle_edge_collision(&[], &mut cube, Vector2::new(1.0, 1.0));
        assert_eq!(result, Err(GeometryError::EmptyPointSet));
    }
}
