//! Spinner engine crate.
//!
//! Renders one or two rotating colored triangles with wgpu: device and
//! surface setup, a depth buffer, one effect-driven pipeline, and a
//! fixed-step frame renderer driven by a winit loop.

pub mod config;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;

pub use crate::config::{PresentPreference, RenderProfile, ViewerConfig, WindowSize};
pub use crate::core::{FrameStatus, RenderContext};
pub use crate::device::RenderError;
pub use crate::window::Runtime;
