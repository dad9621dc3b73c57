//! Screen-space geometry shared by the renderer.
//!
//! Viewports are expressed in physical pixels, origin top-left, with the
//! depth range the projection maps into (`[0, 1]`).

mod viewport;

pub use viewport::Viewport;
