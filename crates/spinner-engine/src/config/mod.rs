//! Host-facing configuration.
//!
//! Everything a binary can choose lives here; nothing is read from the
//! command line or the environment (apart from `RUST_LOG`).

use std::path::PathBuf;
use std::time::Duration;

use winit::dpi::{LogicalSize, PhysicalSize, Size};

use crate::device::GpuInit;
use crate::logging::LoggingConfig;
use crate::math::CameraConfig;
use crate::paint::Color;
use crate::render::{EffectConfig, TargetSlot};
use crate::time::DEFAULT_STEP;

/// Fallback window size when nothing better is known.
pub const DEFAULT_WINDOW_SIZE: LogicalSize<f64> = LogicalSize::new(800.0, 600.0);

/// How the window size is chosen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WindowSize {
    Fixed(LogicalSize<f64>),
    /// Primary monitor resolution, or `fallback` if no monitor is reported.
    Desktop { fallback: LogicalSize<f64> },
}

impl WindowSize {
    /// Resolves to a concrete size given the primary monitor's size, if any.
    pub fn resolve(&self, monitor: Option<PhysicalSize<u32>>) -> Size {
        match *self {
            WindowSize::Fixed(size) => Size::Logical(size),
            WindowSize::Desktop { fallback } => monitor
                .filter(|m| m.width > 0 && m.height > 0)
                .map(Size::Physical)
                .unwrap_or(Size::Logical(fallback)),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize::Fixed(DEFAULT_WINDOW_SIZE)
    }
}

/// Swap interval.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentPreference {
    /// No vsync; falls back to vsync when unsupported.
    Immediate,
    VSync,
}

impl PresentPreference {
    pub fn present_mode(self) -> wgpu::PresentMode {
        match self {
            PresentPreference::Immediate => wgpu::PresentMode::Immediate,
            PresentPreference::VSync => wgpu::PresentMode::Fifo,
        }
    }
}

/// What is drawn each frame and how it is presented.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProfile {
    pub targets: Vec<TargetSlot>,
    pub present: PresentPreference,
    pub camera: CameraConfig,
    pub step: Duration,
    pub clear: Color,
    pub frame_latency: u32,
}

impl RenderProfile {
    /// One forward-spinning triangle, no vsync, far plane 200, deep blue clear.
    pub fn single() -> Self {
        Self {
            targets: vec![TargetSlot::FORWARD],
            present: PresentPreference::Immediate,
            camera: CameraConfig::looking_at_origin(200.0),
            step: DEFAULT_STEP,
            clear: Color::DEEP_BLUE,
            frame_latency: 2,
        }
    }

    /// Two mirrored triangles, vsync, far plane 100, black clear.
    pub fn dual() -> Self {
        Self {
            targets: vec![TargetSlot::FORWARD, TargetSlot::REVERSE],
            present: PresentPreference::VSync,
            camera: CameraConfig::looking_at_origin(100.0),
            step: DEFAULT_STEP,
            clear: Color::BLACK,
            frame_latency: 2,
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit::new(self.present.present_mode()).with_frame_latency(self.frame_latency)
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::single()
    }
}

/// Full configuration for a viewer binary.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub window: WindowSize,
    pub profile: RenderProfile,
    pub effect: EffectConfig,
    pub logging: LoggingConfig,
}

impl ViewerConfig {
    pub fn new(profile: RenderProfile, effect_path: impl Into<PathBuf>) -> Self {
        Self {
            title: "spinner".to_string(),
            window: WindowSize::default(),
            profile,
            effect: EffectConfig::new(effect_path),
            logging: LoggingConfig::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn window(mut self, window: WindowSize) -> Self {
        self.window = window;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}
