//! Model instances and the 3D-to-2D projector.
//!
//! A [`Model`] is a cheap, per-frame value: a catalog [`ModelType`] plus a world
//! placement and tint. Rendering it projects every sub-model's mesh through the
//! camera into flat polygons and writes them into drawable slots, farthest
//! sub-model first so nearer geometry overdraws it.

use cgmath::{InnerSpace, Matrix4, Vector2, Vector3, Vector4};

use crate::{
    camera::Camera3D,
    data_structures::{
        color::Color,
        render_buffer::{Drawable, Polygon, RenderBuffer},
        transform::{Rotation, create_transform},
    },
    resources::{
        mesh::get_mesh,
        model::{ModelType, SubModel, get_sub_models},
    },
};

/// Substitute `w` for vertices at or behind the near plane.
pub const BEHIND_CAMERA_W: f32 = 1e-5;

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub position: Vector3<f32>,
    pub rotation: Rotation,
    pub scale: Vector3<f32>,
    /// Multiplied into every sub-model colour.
    pub tint: Color,
    model_type: ModelType,
}

impl Model {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Rotation::ZERO,
            scale: Vector3::new(1.0, 1.0, 1.0),
            tint: Color::WHITE,
            model_type,
        }
    }

    pub fn at(model_type: ModelType, position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Self::new(model_type)
        }
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn sub_models(&self) -> &'static [SubModel] {
        get_sub_models(self.model_type)
    }

    pub fn sub_model_count(&self) -> usize {
        self.sub_models().len()
    }

    /// World transform: scale, then rotation, then translation.
    pub fn world_transform(&self) -> Matrix4<f32> {
        create_transform(Some(self.position), Some(self.rotation), Some(self.scale))
    }

    /// Sub-model indices ordered farthest-from-camera first.
    pub fn draw_order(&self, camera_position: Vector3<f32>) -> Vec<usize> {
        let distances = self
            .sub_models()
            .iter()
            .map(|sub_model| (self.position + sub_model.position - camera_position).magnitude2())
            .collect::<Vec<_>>();
        let mut order = (0..distances.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| distances[b].total_cmp(&distances[a]));
        order
    }

    /**
     * Projects the model and writes one polygon per sub-model into `buffer`.
     *
     * Exactly [`Self::sub_model_count`] slots are requested, back to front. If
     * the buffer is smaller than that, it wraps and earlier slots of this frame
     * get overwritten.
     */
    pub fn render<D: Drawable>(&self, buffer: &mut RenderBuffer<D>, camera: &Camera3D) {
        let sub_models = self.sub_models();
        let mvp = camera.view_perspective_matrix() * self.world_transform();

        for index in self.draw_order(camera.position()) {
            let sub_model = &sub_models[index];
            let mesh = get_mesh(sub_model.mesh);
            let vertices = project_vertices(mesh.vertices, &(mvp * sub_model.transform));

            let Some(slot) = buffer.next_slot() else {
                log::warn!("you tried to render {:?} into an empty render buffer", self.model_type);
                return;
            };
            slot.set_shape(Polygon::new(vertices, mesh.triangles));
            slot.set_color(sub_model.color * self.tint);
        }
    }
}

/**
 * Transforms each vertex to clip space and divides X and Y by W.
 *
 * Clip depth runs from zero on the near plane (see [`crate::camera::ZERO_TO_ONE_DEPTH`]), so a
 * vertex whose clip-space Z is at or below zero sits at or behind the camera's
 * near plane. Its W is replaced by [`BEHIND_CAMERA_W`] so the divide pushes it far
 * off-screen instead of mirroring it back into view. This is not clipping.
 */
pub fn project_vertices(vertices: &[[f32; 3]], transform: &Matrix4<f32>) -> Vec<Vector2<f32>> {
    vertices
        .iter()
        .map(|&[x, y, z]| {
            let mut clip = *transform * Vector4::new(x, y, z, 1.0);
            if clip.z <= 0.0 {
                clip.w = BEHIND_CAMERA_W;
            }
            Vector2::new(clip.x / clip.w, clip.y / clip.w)
        })
        .collect()
}
