/// Render loop state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LoopState {
    /// Steady state: one frame per idle tick.
    #[default]
    Rendering,
    /// Terminal: teardown runs and the event loop exits.
    ShuttingDown,
}

/// Inputs to the loop state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopEvent {
    /// Idle tick; a frame was rendered or skipped.
    Frame,
    /// The window was asked to close.
    CloseRequested,
    /// A frame failed in a way rendering cannot recover from.
    FatalError,
}

impl LoopState {
    pub fn next(self, event: LoopEvent) -> Self {
        match (self, event) {
            (LoopState::Rendering, LoopEvent::Frame) => LoopState::Rendering,
            (LoopState::Rendering, LoopEvent::CloseRequested | LoopEvent::FatalError) => {
                LoopState::ShuttingDown
            }
            (LoopState::ShuttingDown, _) => LoopState::ShuttingDown,
        }
    }

    #[inline]
    pub fn is_rendering(self) -> bool {
        self == LoopState::Rendering
    }
}
