//! Color model shared by geometry and clear operations.

pub mod color;

pub use color::Color;
