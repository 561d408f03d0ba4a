use cgmath::Vector3;

use crate::{
    camera::Camera3D,
    data_structures::{
        color::Color,
        render_buffer::{Drawable, PolygonSlot},
    },
    game::level::DEFAULT_LEVEL_SIZE,
    render::{RenderLayer, Renderer},
};

/// Tunables for a game session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of track segments kept alive.
    pub level_size: usize,
    /// Scroll speed in segments per second.
    pub scroll_speed: f32,
    pub slots_per_layer: usize,
    /// Colour the far end of the track fades to.
    pub accent: Color,
    pub camera_position: Vector3<f32>,
    /// Degrees.
    pub camera_pitch: f32,
    /// Degrees.
    pub camera_yaw: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect_ratio: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level_size: DEFAULT_LEVEL_SIZE,
            scroll_speed: 1.0,
            slots_per_layer: 256,
            accent: Color::SKY_BLUE,
            camera_position: Vector3::new(0.0, 1.0, 0.0),
            camera_pitch: -45.0,
            camera_yaw: -90.0,
            fov: 90.0,
            aspect_ratio: 1.0,
        }
    }
}

impl Config {
    pub fn camera(&self) -> Camera3D {
        Camera3D::from_angles(
            self.camera_position,
            self.camera_pitch,
            self.camera_yaw,
            self.fov,
            self.aspect_ratio,
        )
    }
}

pub struct Context<L: RenderLayer, D: Drawable> {
    pub config: Config,
    pub camera: Camera3D,
    pub renderer: Renderer<L, D>,
}

impl<L: RenderLayer, D: Drawable> Context<L, D> {
    /// `slots` is called once per layer with the configured slot count and
    /// returns the host's drawables for that layer.
    pub fn new(config: Config, mut slots: impl FnMut(usize) -> Vec<D>) -> Self {
        let slots_per_layer = config.slots_per_layer;
        Self {
            camera: config.camera(),
            renderer: Renderer::new(|| slots(slots_per_layer)),
            config,
        }
    }

    /// Window resize hook.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.config.aspect_ratio = aspect_ratio;
        self.camera.update_projection(self.config.fov, aspect_ratio);
    }
}

impl<L: RenderLayer> Context<L, PolygonSlot> {
    /// Context drawing into plain in-memory slots.
    pub fn headless(config: Config) -> Self {
        Self::new(config, |count| vec![PolygonSlot::default(); count])
    }
}
