//! Procedural track generation.
//!
//! - `obstacles` and `coin_trails` hold the adjacency tables and one-step Markov transitions
//! - `track_segment` combines them into immutable three-lane rows
//! - `level` keeps a scrolling window of rows and renders it
//! - `random` is the draw interface the generators consume

pub mod coin_trails;
pub mod level;
pub mod obstacles;
pub mod random;
pub mod track_segment;
