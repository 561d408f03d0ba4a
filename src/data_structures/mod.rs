//! Core data structures for projection and track storage.
//!
//! - `model` is a per-frame model instance and the 3D-to-2D projector
//! - `render_buffer` holds the recyclable drawable slots the projector writes into
//! - `circular_buffer` is the fixed-capacity ring used by the level
//! - `transform`, `bounding` and `color` are small value types shared by the rest

pub mod bounding;
pub mod circular_buffer;
pub mod color;
pub mod model;
pub mod render_buffer;
pub mod transform;
