use thiserror::Error;

/// Boxed error source carried by [`RenderError::GraphicsInit`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the render context.
///
/// Setup problems of any kind collapse into `GraphicsInit`; the only
/// per-frame error that reaches callers is a fatal `Present`.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("graphics initialization failed: {context}")]
    GraphicsInit {
        context: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("failed to present frame: {0}")]
    Present(#[source] wgpu::SurfaceError),
}

impl RenderError {
    pub fn init(context: impl Into<String>) -> Self {
        Self::GraphicsInit { context: context.into(), source: None }
    }

    pub fn init_with(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::GraphicsInit { context: context.into(), source: Some(source.into()) }
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}
