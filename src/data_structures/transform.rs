//! Rotation and transform composition.
//!
//! Models and sub-models are positioned with a translation, an Euler
//! [`Rotation`] and a non-uniform scale. [`create_transform`] folds these into a
//! single matrix that applies scale first, then rotation, then translation.

use cgmath::{Deg, Matrix4, Rad, SquareMatrix, Vector3};

/// Euler rotation stored in radians.
///
/// Pitch turns about the X axis, yaw about the Y axis and roll about the Z axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation {
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
    };

    pub fn from_radians(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self { pitch, roll, yaw }
    }

    pub fn from_degrees(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self {
            pitch: Rad::from(Deg(pitch)).0,
            roll: Rad::from(Deg(roll)).0,
            yaw: Rad::from(Deg(yaw)).0,
        }
    }

    pub fn pitch_degrees(&self) -> f32 {
        Deg::from(Rad(self.pitch)).0
    }

    pub fn roll_degrees(&self) -> f32 {
        Deg::from(Rad(self.roll)).0
    }

    pub fn yaw_degrees(&self) -> f32 {
        Deg::from(Rad(self.yaw)).0
    }

    pub fn set_pitch_degrees(&mut self, degrees: f32) {
        self.pitch = Rad::from(Deg(degrees)).0;
    }

    pub fn set_roll_degrees(&mut self, degrees: f32) {
        self.roll = Rad::from(Deg(degrees)).0;
    }

    pub fn set_yaw_degrees(&mut self, degrees: f32) {
        self.yaw = Rad::from(Deg(degrees)).0;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Rotation matrix applying roll, then pitch, then yaw.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_y(Rad(self.yaw))
            * Matrix4::from_angle_x(Rad(self.pitch))
            * Matrix4::from_angle_z(Rad(self.roll))
    }
}

/**
 * Composes `translation * rotation * scale`.
 *
 * Components that are absent or equal to their identity value (zero position,
 * zero rotation, unit scale) are skipped entirely.
 */
pub fn create_transform(
    position: Option<Vector3<f32>>,
    rotation: Option<Rotation>,
    scale: Option<Vector3<f32>>,
) -> Matrix4<f32> {
    let mut result = Matrix4::identity();

    if let Some(position) = position.filter(|p| *p != Vector3::new(0.0, 0.0, 0.0)) {
        result = result * Matrix4::from_translation(position);
    }
    if let Some(rotation) = rotation.filter(|r| !r.is_zero()) {
        result = result * rotation.to_matrix();
    }
    if let Some(scale) = scale.filter(|s| *s != Vector3::new(1.0, 1.0, 1.0)) {
        result = result * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    }

    result
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Vector4};

    use super::*;

    fn close(a: Vector4<f32>, b: Vector4<f32>) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn identity_components_are_skipped() {
        let m = create_transform(
            Some(Vector3::new(0.0, 0.0, 0.0)),
            Some(Rotation::ZERO),
            Some(Vector3::new(1.0, 1.0, 1.0)),
        );
        assert_eq!(m, Matrix4::identity());
        assert_eq!(create_transform(None, None, None), Matrix4::identity());
    }

    #[test]
    fn scale_is_applied_before_translation() {
        let m = create_transform(
            Some(Vector3::new(1.0, 0.0, 0.0)),
            None,
            Some(Vector3::new(2.0, 2.0, 2.0)),
        );
        let v = m * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert!(close(v, Vector4::new(3.0, 2.0, 2.0, 1.0)), "{v:?}");
    }

    #[test]
    fn yaw_turns_about_y() {
        let m = create_transform(None, Some(Rotation::from_degrees(0.0, 0.0, 90.0)), None);
        let v = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!(close(v, Vector4::new(0.0, 0.0, -1.0, 1.0)), "{v:?}");
    }

    #[test]
    fn degree_accessors_round_trip() {
        let mut r = Rotation::ZERO;
        r.set_pitch_degrees(-45.0);
        assert!((r.pitch_degrees() + 45.0).abs() < 1e-4);
        assert!((r.pitch + std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }
}
