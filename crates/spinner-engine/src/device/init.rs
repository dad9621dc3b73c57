/// Surface and device requests derived from a render profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GpuInit {
    /// Pick an sRGB surface format when one is offered. Off for the
    /// spinner profiles: vertex and clear colors are written as-is.
    pub prefer_srgb: bool,

    /// Falls back to `Fifo` when unsupported.
    pub present_mode: wgpu::PresentMode,

    /// Hint only.
    pub frame_latency: u32,
}

impl GpuInit {
    pub fn new(present_mode: wgpu::PresentMode) -> Self {
        Self {
            prefer_srgb: false,
            present_mode,
            frame_latency: 2,
        }
    }

    pub fn with_frame_latency(mut self, frame_latency: u32) -> Self {
        self.frame_latency = frame_latency.max(1);
        self
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self::new(wgpu::PresentMode::Fifo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_vsync_unorm() {
        let init = GpuInit::default();
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert!(!init.prefer_srgb);
        assert_eq!(init.frame_latency, 2);
    }

    #[test]
    fn zero_frame_latency_is_raised_to_one() {
        assert_eq!(GpuInit::default().with_frame_latency(0).frame_latency, 1);
        assert_eq!(GpuInit::default().with_frame_latency(3).frame_latency, 3);
    }
}
