use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Per-vertex input: object-space position and RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    #[inline]
    pub const fn new(position: [f32; 3], color: Color) -> Self {
        Self { position, color: color.to_array() }
    }

    /// Input layout matching the effect's `@location(0)` / `@location(1)`.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The one triangle: red apex, green bottom-right, blue bottom-left.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new([0.0, 0.5, 0.0], Color::RED),
    Vertex::new([0.45, -0.5, 0.0], Color::GREEN),
    Vertex::new([-0.45, -0.5, 0.0], Color::BLUE),
];
