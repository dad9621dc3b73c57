use winit::dpi::PhysicalSize;

/// Rasterizer viewport in physical pixels plus its depth range.
///
/// The renderer always uses a viewport covering the whole drawable area:
/// origin `(0, 0)`, extent `(width, height)`, depth `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport covering a `width` x `height` surface.
    #[inline]
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    #[inline]
    pub fn from_size(size: PhysicalSize<u32>) -> Self {
        Self::full(size.width, size.height)
    }

    /// Width / height. Returns `1.0` for a degenerate viewport.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Applies this viewport to a render pass.
    pub fn apply(self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_viewport(
            self.x,
            self.y,
            self.width,
            self.height,
            self.min_depth,
            self.max_depth,
        );
    }
}
