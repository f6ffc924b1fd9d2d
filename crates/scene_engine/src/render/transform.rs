//! Model matrix composition
//!
//! A draw is placed with a non-uniform scale, three Euler angles in degrees
//! and a world position. The model matrix is always
//!
//! ```text
//! T(position) * Rz(z) * Ry(y) * Rx(x) * S(scale)
//! ```
//!
//! so a vertex is scaled first, then rotated about the object's own X, Y and
//! Z axes in that order, then translated. Changing this order changes the
//! rendered result for any object with non-uniform scale and more than one
//! rotation, so it is fixed here and nowhere else.

use crate::foundation::math::{utils::deg_to_rad, Mat4, Vec3};

/// Placement of a single draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Per-axis scale
    pub scale: Vec3,
    /// Rotation about X, Y and Z in degrees
    pub rotation_degrees: Vec3,
    /// World position
    pub position: Vec3,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vec3::zeros(),
            position: Vec3::zeros(),
        }
    }
}

impl TransformParams {
    /// Create transform parameters
    pub fn new(scale: Vec3, rotation_degrees: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// Scale and position with no rotation
    pub fn scaled_at(scale: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            position,
            ..Self::default()
        }
    }

    /// Builder pattern: Set rotation in degrees
    pub fn with_rotation(mut self, x_degrees: f32, y_degrees: f32, z_degrees: f32) -> Self {
        self.rotation_degrees = Vec3::new(x_degrees, y_degrees, z_degrees);
        self
    }

    /// The composed model matrix
    pub fn model_matrix(&self) -> Mat4 {
        compose_model_matrix(
            self.scale,
            self.rotation_degrees.x,
            self.rotation_degrees.y,
            self.rotation_degrees.z,
            self.position,
        )
    }
}

/// Compose `T * Rz * Ry * Rx * S` from scale, degrees and position
pub fn compose_model_matrix(
    scale: Vec3,
    x_rotation_degrees: f32,
    y_rotation_degrees: f32,
    z_rotation_degrees: f32,
    position: Vec3,
) -> Mat4 {
    let scaling = Mat4::new_nonuniform_scaling(&scale);
    let rotation_x = Mat4::from_axis_angle(&Vec3::x_axis(), deg_to_rad(x_rotation_degrees));
    let rotation_y = Mat4::from_axis_angle(&Vec3::y_axis(), deg_to_rad(y_rotation_degrees));
    let rotation_z = Mat4::from_axis_angle(&Vec3::z_axis(), deg_to_rad(z_rotation_degrees));
    let translation = Mat4::new_translation(&position);

    translation * rotation_z * rotation_y * rotation_x * scaling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn apply(params: &TransformParams, point: Point3) -> Point3 {
        params.model_matrix().transform_point(&point)
    }

    fn origin() -> Point3 {
        Point3::origin()
    }

    fn unit_x() -> Point3 {
        Point3::new(1.0, 0.0, 0.0)
    }

    fn unit_y() -> Point3 {
        Point3::new(0.0, 1.0, 0.0)
    }

    fn unit_z() -> Point3 {
        Point3::new(0.0, 0.0, 1.0)
    }

    #[test]
    fn test_default_is_identity() {
        assert_relative_eq!(TransformParams::default().model_matrix(), Mat4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_zero_rotation_is_scale_then_translate() {
        let params = TransformParams::scaled_at(Vec3::new(30.0, 1.0, 30.0), Vec3::new(1.0, 2.0, 3.0));

        assert_relative_eq!(apply(&params, origin()), Point3::new(1.0, 2.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_x()), Point3::new(31.0, 2.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_y()), Point3::new(1.0, 3.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_z()), Point3::new(1.0, 2.0, 33.0), epsilon = EPSILON);
    }

    #[test]
    fn test_ninety_degrees_about_x() {
        let params = TransformParams::default().with_rotation(90.0, 0.0, 0.0);

        assert_relative_eq!(apply(&params, origin()), origin(), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_x()), unit_x(), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_y()), unit_z(), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_z()), Point3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_ninety_degrees_about_y() {
        let params = TransformParams::default().with_rotation(0.0, 90.0, 0.0);

        assert_relative_eq!(apply(&params, unit_x()), Point3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_y()), unit_y(), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_z()), unit_x(), epsilon = EPSILON);
    }

    #[test]
    fn test_ninety_degrees_about_z() {
        let params = TransformParams::default().with_rotation(0.0, 0.0, 90.0);

        assert_relative_eq!(apply(&params, unit_x()), unit_y(), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_y()), Point3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, unit_z()), unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn test_y_then_z_with_non_uniform_scale() {
        // S(2,1,1), Ry(90), Rz(90), T(1,2,3)
        let params = TransformParams::new(
            Vec3::new(2.0, 1.0, 1.0),
            Vec3::new(0.0, 90.0, 90.0),
            Vec3::new(1.0, 2.0, 3.0),
        );

        // (1,0,0) -> S (2,0,0) -> Ry (0,0,-2) -> Rz (0,0,-2) -> T (1,2,1)
        assert_relative_eq!(apply(&params, unit_x()), Point3::new(1.0, 2.0, 1.0), epsilon = EPSILON);
        // (0,1,0) -> S (0,1,0) -> Ry (0,1,0) -> Rz (-1,0,0) -> T (0,2,3)
        assert_relative_eq!(apply(&params, unit_y()), Point3::new(0.0, 2.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!(apply(&params, origin()), Point3::new(1.0, 2.0, 3.0), epsilon = EPSILON);

        // Applying Z before Y would land the X axis somewhere else entirely
        let reversed = Mat4::new_translation(&params.position)
            * Mat4::from_axis_angle(&Vec3::y_axis(), deg_to_rad(90.0))
            * Mat4::from_axis_angle(&Vec3::z_axis(), deg_to_rad(90.0))
            * Mat4::new_nonuniform_scaling(&params.scale);
        assert_relative_eq!(reversed.transform_point(&unit_x()), Point3::new(1.0, 4.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn test_x_then_z_with_non_uniform_scale() {
        let params = TransformParams::new(
            Vec3::new(1.0, 2.0, 1.0),
            Vec3::new(90.0, 0.0, 90.0),
            Vec3::new(-5.0, 0.0, 5.0),
        );

        // (0,1,0) -> S (0,2,0) -> Rx (0,0,2) -> Rz (0,0,2) -> T (-5,0,7)
        assert_relative_eq!(apply(&params, unit_y()), Point3::new(-5.0, 0.0, 7.0), epsilon = EPSILON);
        // (1,0,0) -> Rx (1,0,0) -> Rz (0,1,0) -> T (-5,1,5)
        assert_relative_eq!(apply(&params, unit_x()), Point3::new(-5.0, 1.0, 5.0), epsilon = EPSILON);
    }

    #[test]
    fn test_matches_explicit_product() {
        let cases = [
            (Vec3::new(3.5, 5.0, 1.5), Vec3::new(0.0, 0.0, 0.0), Vec3::new(-15.0, 2.5, -15.0)),
            (Vec3::new(22.0, 0.1, 11.0), Vec3::new(0.0, -60.0, 0.0), Vec3::new(-18.0, 0.1, -5.0)),
            (Vec3::new(1.5, 1.5, 0.75), Vec3::new(90.0, 0.0, 0.0), Vec3::new(-22.25, 0.3, -12.75)),
            (Vec3::new(0.5, 2.0, 3.0), Vec3::new(30.0, 45.0, -120.0), Vec3::new(4.0, -1.0, 0.5)),
        ];

        for (scale, degrees, position) in cases {
            let expected = Mat4::new_translation(&position)
                * Mat4::from_axis_angle(&Vec3::z_axis(), deg_to_rad(degrees.z))
                * Mat4::from_axis_angle(&Vec3::y_axis(), deg_to_rad(degrees.y))
                * Mat4::from_axis_angle(&Vec3::x_axis(), deg_to_rad(degrees.x))
                * Mat4::new_nonuniform_scaling(&scale);

            let composed = compose_model_matrix(scale, degrees.x, degrees.y, degrees.z, position);
            assert_relative_eq!(composed, expected, epsilon = EPSILON);
            assert_relative_eq!(
                TransformParams::new(scale, degrees, position).model_matrix(),
                expected,
                epsilon = EPSILON
            );
        }
    }
}
