use wgpu::util::DeviceExt;

use crate::device::DepthBuffer;
use crate::math::Transform;
use crate::scene::{Vertex, TRIANGLE};

use super::{Effect, FramePlan, RenderCtx, RenderTarget};

const TRANSFORM_BINDING_SIZE: wgpu::BufferSize = match wgpu::BufferSize::new(Transform::SIZE) {
    Some(size) => size,
    None => panic!("Transform uniform has zero size"),
};

/// Uniform buffer + bind group feeding one target slot's transform.
struct SlotBinding {
    transform_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// The single render pass: effect module, pipeline, triangle vertex buffer
/// and one transform binding per target slot.
pub struct TrianglePipeline {
    // Held for the pipeline's lifetime so teardown releases it explicitly.
    _module: wgpu::ShaderModule,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    slots: Vec<SlotBinding>,
}

impl TrianglePipeline {
    pub fn new(ctx: &RenderCtx<'_>, effect: &Effect, module: wgpu::ShaderModule, slot_count: usize) -> Self {
        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("spinner transform bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(TRANSFORM_BINDING_SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("spinner pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("spinner triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(effect.vertex_entry()),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(effect.fragment_entry()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Cw,
                // Both faces stay visible while the triangle turns.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(DepthBuffer::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spinner triangle vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let slots = (0..slot_count)
            .map(|slot| {
                let transform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("spinner transform ubo"),
                    size: Transform::SIZE,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });

                let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("spinner transform bind group"),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: transform_ubo.as_entire_binding(),
                    }],
                });

                log::debug!("transform binding ready for slot {slot}");
                SlotBinding {
                    transform_ubo,
                    bind_group,
                }
            })
            .collect();

        Self {
            _module: module,
            pipeline,
            vertex_buffer,
            slots,
        }
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Uploads each slot's transform and records one pass + draw per slot.
    ///
    /// Draws for slots without a binding are skipped.
    pub fn render(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, plan: &FramePlan) {
        for draw in &plan.draws {
            let Some(binding) = self.slots.get(draw.slot) else {
                log::debug!("no transform binding for slot {}; draw skipped", draw.slot);
                continue;
            };

            let transform = Transform::from_mat4(draw.transform);
            ctx.queue
                .write_buffer(&binding.transform_ubo, 0, bytemuck::bytes_of(&transform));

            let load = if draw.clear {
                wgpu::LoadOp::Clear(plan.clear_color.to_wgpu())
            } else {
                wgpu::LoadOp::Load
            };

            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("spinner triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(target.depth.attachment(draw.clear)),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            plan.viewport.apply(&mut rpass);
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &binding.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.draw(0..TRIANGLE.len() as u32, 0..1);
        }
    }
}

impl Drop for TrianglePipeline {
    fn drop(&mut self) {
        for slot in &self.slots {
            slot.transform_ubo.destroy();
        }
        self.vertex_buffer.destroy();
    }
}
