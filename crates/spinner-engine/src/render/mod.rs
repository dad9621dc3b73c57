//! Triangle rendering.
//!
//! Split in two halves:
//! - `planner`: GPU-free per-frame math (time step, angles, transforms, viewport)
//! - `pipeline`: wgpu resources and command recording for a planned frame

mod ctx;
mod effect;
mod pipeline;
mod planner;
mod targets;

pub use ctx::{RenderCtx, RenderTarget};
pub use effect::{Effect, EffectConfig, EffectError, TRANSFORM_SYMBOL};
pub use pipeline::TrianglePipeline;
pub use planner::{FramePlan, FramePlanner, TargetDraw};
pub use targets::{RotationDirection, TargetSlot};
