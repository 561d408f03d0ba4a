//! Axis-aligned bounding cuboid.

use cgmath::Vector3;

/// An axis-aligned box described by its centre and full extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingCuboid {
    pub position: Vector3<f32>,
    pub size: Vector3<f32>,
}

impl BoundingCuboid {
    pub fn new(size: Vector3<f32>, position: Vector3<f32>) -> Self {
        Self { position, size }
    }

    /// A cuboid of the given size centred on the origin.
    pub fn with_size(size: Vector3<f32>) -> Self {
        Self::new(size, Vector3::new(0.0, 0.0, 0.0))
    }

    pub fn empty() -> Self {
        Self::with_size(Vector3::new(0.0, 0.0, 0.0))
    }

    /// Inclusive containment test on all three axes.
    pub fn is_inside(&self, point: Vector3<f32>) -> bool {
        let half = self.size * 0.5;
        let min = self.position - half;
        let max = self.position + half;
        (min.x..=max.x).contains(&point.x)
            && (min.y..=max.y).contains(&point.y)
            && (min.z..=max.z).contains(&point.z)
    }
}

impl Default for BoundingCuboid {
    fn default() -> Self {
        Self::empty()
    }
}
