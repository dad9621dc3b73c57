//! Render context and loop state.
//!
//! `RenderContext` is the single owner passed explicitly to setup, render and
//! teardown; `LoopState` decides when the runtime stops rendering.

mod context;
mod state;

pub use context::{FrameStatus, RenderContext};
pub use state::{LoopEvent, LoopState};
