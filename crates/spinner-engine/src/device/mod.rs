//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Device/Queue and configuring the Surface (swapchain)
//! - the depth buffer paired with the surface
//! - acquiring frames and providing encoders/views for rendering
//! - tracking which GPU resources are live

mod depth;
mod error;
mod gpu;
mod init;
mod resources;
mod surface;

pub use depth::DepthBuffer;
pub use error::{BoxError, RenderError, SurfaceErrorAction};
pub use gpu::{Frame, Gpu};
pub use init::GpuInit;
pub use resources::{ResourceKind, ResourceLedger, TeardownReport};
