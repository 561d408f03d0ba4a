//! metro-surffaajat
//!
//! Core of an endless runner that fakes 3D on top of a 2D engine. Hand-authored
//! meshes are projected in software onto the host's 2D polygon objects every
//! frame, and the track ahead is generated row by row from small Markov chains
//! for obstacles and coin trails.
//!
//! The host engine stays outside this crate. It supplies drawable slots through
//! the [`data_structures::render_buffer::Drawable`] trait and calls
//! [`flow::run_frame`] once per tick.
//!
//! High-level modules
//! - `camera`: perspective camera and its view-perspective matrix
//! - `context`: configuration plus the camera and renderer of a session
//! - `data_structures`: projector, slot buffers, ring buffer and small value types
//! - `flow`: per-frame driver and the game flow
//! - `game`: obstacle and coin generators, track segments, the level
//! - `render`: frame protocol and per-layer routing
//! - `resources`: static mesh and model catalogs
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod game;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
