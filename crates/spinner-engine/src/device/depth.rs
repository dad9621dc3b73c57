use winit::dpi::PhysicalSize;

/// Depth surface matching the presentation surface size.
pub struct DepthBuffer {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: PhysicalSize<u32>,
}

impl DepthBuffer {
    /// One 32-bit float per pixel.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Value the depth buffer is cleared to at the start of a frame.
    pub const CLEAR_DEPTH: f32 = 1.0;

    /// Creates a depth buffer. Zero dimensions are clamped to 1.
    pub fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("spinner depth buffer"),
            size: extent(size),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view, size }
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Returns true if the buffer must be recreated to match `size`.
    #[inline]
    pub fn needs_resize(&self, size: PhysicalSize<u32>) -> bool {
        size.width > 0 && size.height > 0 && size != self.size
    }

    /// Pipeline depth state paired with this buffer.
    ///
    /// `LessEqual` lets a second target slot draw over coplanar geometry from
    /// the first.
    pub fn depth_stencil_state() -> wgpu::DepthStencilState {
        wgpu::DepthStencilState {
            format: Self::FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }

    /// Attachment for a pass; `clear` selects clear-to-1.0 versus load.
    pub fn attachment(&self, clear: bool) -> wgpu::RenderPassDepthStencilAttachment<'_> {
        let load = if clear {
            wgpu::LoadOp::Clear(Self::CLEAR_DEPTH)
        } else {
            wgpu::LoadOp::Load
        };

        wgpu::RenderPassDepthStencilAttachment {
            view: &self.view,
            depth_ops: Some(wgpu::Operations {
                load,
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }
    }
}

impl Drop for DepthBuffer {
    fn drop(&mut self) {
        self.texture.destroy();
    }
}

fn extent(size: PhysicalSize<u32>) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width.max(1),
        height: size.height.max(1),
        depth_or_array_layers: 1,
    }
}
