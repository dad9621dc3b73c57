//! Static geometry.
//!
//! The scene is a single hardcoded triangle uploaded once at setup.

mod vertex;

pub use vertex::{Vertex, TRIANGLE};
