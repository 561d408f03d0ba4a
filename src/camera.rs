//! Perspective camera for the software projector.
//!
//! The camera keeps its position, viewing direction, field of view and aspect
//! ratio, and re-derives the combined view-perspective matrix on every update so
//! the matrix can never go stale.

use cgmath::{Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3};

pub const NEAR_PLANE: f32 = 0.01;
pub const FAR_PLANE: f32 = 10000.0;

/// Remaps cgmath's `-w..w` clip depth to `0..w`, so clip Z is zero on the near plane.
#[rustfmt::skip]
pub const ZERO_TO_ONE_DEPTH: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

fn world_up() -> Vector3<f32> {
    Vector3::unit_y()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera3D {
    position: Vector3<f32>,
    direction: Vector3<f32>,
    up: Vector3<f32>,
    /// Vertical field of view in degrees.
    fov: f32,
    aspect_ratio: f32,
    view_perspective: Matrix4<f32>,
}

impl Camera3D {
    /// Camera looking along an explicit `direction`.
    pub fn new(position: Vector3<f32>, direction: Vector3<f32>, fov: f32, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position,
            direction,
            up: world_up(),
            fov,
            aspect_ratio,
            view_perspective: Matrix4::identity(),
        };
        camera.update_matrix();
        camera
    }

    /// Camera oriented by `pitch` and `yaw` in degrees. A yaw of -90 looks down -Z.
    pub fn from_angles(position: Vector3<f32>, pitch: f32, yaw: f32, fov: f32, aspect_ratio: f32) -> Self {
        Self::new(position, direction_from_angles(pitch, yaw), fov, aspect_ratio)
    }

    pub fn update(&mut self, position: Option<Vector3<f32>>, direction: Option<Vector3<f32>>) {
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(direction) = direction {
            self.direction = direction;
        }
        self.update_matrix();
    }

    pub fn update_angles(&mut self, position: Option<Vector3<f32>>, pitch: f32, yaw: f32) {
        self.update(position, Some(direction_from_angles(pitch, yaw)));
    }

    pub fn update_projection(&mut self, fov: f32, aspect_ratio: f32) {
        self.fov = fov;
        self.aspect_ratio = aspect_ratio;
        self.update_matrix();
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn direction(&self) -> Vector3<f32> {
        self.direction
    }

    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn view_perspective_matrix(&self) -> Matrix4<f32> {
        self.view_perspective
    }

    fn update_matrix(&mut self) {
        let right = self.direction.cross(-world_up());
        if right.magnitude2() > f32::EPSILON {
            let right = right.normalize();
            self.up = self.direction.cross(right).normalize();
        } else {
            // Looking straight up or down: keep the previous up vector.
            log::debug!("camera direction {:?} is parallel to world up", self.direction);
        }

        let eye = Point3::from_vec(self.position);
        let view = Matrix4::look_at_rh(eye, eye + self.direction, self.up);
        let perspective = cgmath::perspective(Deg(self.fov), self.aspect_ratio, NEAR_PLANE, FAR_PLANE);
        self.view_perspective = ZERO_TO_ONE_DEPTH * perspective * view;
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::from_angles(Vector3::new(0.0, 0.0, 0.0), 0.0, -90.0, 90.0, 1.0)
    }
}

fn direction_from_angles(pitch: f32, yaw: f32) -> Vector3<f32> {
    let pitch = Rad::from(Deg(pitch)).0;
    let yaw = Rad::from(Deg(yaw)).0;
    Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
}
