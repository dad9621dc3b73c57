//! Time subsystem.
//!
//! Rendering advances a fixed-step accumulator rather than reading the wall
//! clock, so motion speed follows the number of rendered frames.
//! Intended usage:
//! - one `StepClock` per render context
//! - call `tick()` once per rendered frame to obtain `FrameTime`

mod step_clock;

pub use step_clock::{FrameTime, StepClock, DEFAULT_STEP};
