//! Frame protocol and layer routing.
//!
//! The [`Renderer`] owns one [`RenderBuffer`] per render layer and enforces the
//! frame protocol:
//!
//! `Idle -> begin_render -> InFrame -> end_render -> Idle`
//!
//! A camera is held exactly while a frame is in progress. Submitting a model
//! routes it to its layer's buffer, where it is projected with that camera.
//!
//! # Key types
//!
//! - [`RenderLayer`] is implemented by the closed set of layers a host draws to
//! - [`Renderer<L, D>`] is the frame driver over drawables of type `D`
//! - [`RenderError`] describes protocol misuse
//!

use std::{collections::HashMap, hash::Hash};

use thiserror::Error;

use crate::{
    camera::Camera3D,
    data_structures::{
        model::Model,
        render_buffer::{Drawable, RenderBuffer},
    },
};

/// A closed set of render layers. Each value gets its own slot buffer.
pub trait RenderLayer: Copy + Eq + Hash + std::fmt::Debug + 'static {
    fn all() -> &'static [Self];
}

/// The single layer used by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Default,
}

impl RenderLayer for Layer {
    fn all() -> &'static [Self] {
        &[Layer::Default]
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("current frame has to be ended with end_render() before beginning a new frame")]
    FrameInProgress,

    #[error("a frame has to be begun with begin_render() first")]
    NoFrameInProgress,

    #[error("expected a slot buffer for each of the {expected} layers, got {supplied}")]
    MissingLayerBuffers { expected: usize, supplied: usize },
}

pub struct Renderer<L: RenderLayer, D: Drawable> {
    buffers: HashMap<L, RenderBuffer<D>>,
    camera: Option<Camera3D>,
}

impl<L: RenderLayer, D: Drawable> Renderer<L, D> {
    /// Builds one buffer per layer, each filled by a call to `generator`.
    pub fn new(mut generator: impl FnMut() -> Vec<D>) -> Self {
        let buffers = L::all()
            .iter()
            .map(|layer| (*layer, RenderBuffer::new(generator())))
            .collect();
        Self {
            buffers,
            camera: None,
        }
    }

    /// Builds from explicit per-layer slot arrays, in [`RenderLayer::all`] order.
    ///
    /// Extra arrays beyond the number of layers are ignored.
    pub fn from_buffers(buffers: Vec<Vec<D>>) -> Result<Self, RenderError> {
        let layers = L::all();
        if buffers.len() < layers.len() {
            return Err(RenderError::MissingLayerBuffers {
                expected: layers.len(),
                supplied: buffers.len(),
            });
        }
        let buffers = layers
            .iter()
            .copied()
            .zip(buffers.into_iter().map(RenderBuffer::new))
            .collect();
        Ok(Self {
            buffers,
            camera: None,
        })
    }

    pub fn is_in_frame(&self) -> bool {
        self.camera.is_some()
    }

    pub fn camera(&self) -> Option<&Camera3D> {
        self.camera.as_ref()
    }

    pub fn buffer(&self, layer: L) -> Option<&RenderBuffer<D>> {
        self.buffers.get(&layer)
    }

    pub fn begin_render(&mut self, camera: Camera3D) -> Result<(), RenderError> {
        if self.camera.is_some() {
            return Err(RenderError::FrameInProgress);
        }
        self.camera = Some(camera);
        self.buffers
            .values_mut()
            .for_each(|buffer| buffer.begin_render());
        Ok(())
    }

    pub fn submit(&mut self, model: &Model, layer: L) -> Result<(), RenderError> {
        let Some(camera) = self.camera.as_ref() else {
            return Err(RenderError::NoFrameInProgress);
        };
        match self.buffers.get_mut(&layer) {
            Some(buffer) => model.render(buffer, camera),
            None => log::warn!("no render buffer for layer {:?}", layer),
        }
        Ok(())
    }

    pub fn end_render(&mut self) -> Result<(), RenderError> {
        if self.camera.take().is_none() {
            return Err(RenderError::NoFrameInProgress);
        }
        self.buffers
            .values_mut()
            .for_each(|buffer| buffer.end_render());
        Ok(())
    }
}
