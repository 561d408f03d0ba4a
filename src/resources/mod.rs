/**
 * Static geometry and model tables, built into the binary.
 */
pub mod mesh;
pub mod model;
