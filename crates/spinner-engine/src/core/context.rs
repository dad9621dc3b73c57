use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::config::RenderProfile;
use crate::device::{
    DepthBuffer, Gpu, RenderError, ResourceKind, ResourceLedger, SurfaceErrorAction,
    TeardownReport,
};
use crate::render::{Effect, EffectConfig, FramePlanner, RenderCtx, RenderTarget, TrianglePipeline};
use crate::time::{FrameTime, StepClock};

/// Result of one `render_frame` call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameStatus {
    Presented(FrameTime),
    /// Nothing was presented (minimised window or transient surface error).
    /// Time still advanced.
    Skipped(FrameTime),
}

impl FrameStatus {
    pub fn time(&self) -> FrameTime {
        match *self {
            FrameStatus::Presented(t) | FrameStatus::Skipped(t) => t,
        }
    }
}

/// Owns every GPU resource the renderer uses.
///
/// Lifecycle is linear: [`setup`](Self::setup) once,
/// [`render_frame`](Self::render_frame) many times, [`teardown`](Self::teardown)
/// once (consuming the context).
///
/// `'w` is the window borrow carried by the surface.
pub struct RenderContext<'w> {
    window: &'w Window,
    gpu: Gpu<'w>,
    depth: DepthBuffer,
    pipeline: TrianglePipeline,
    planner: FramePlanner,
    ledger: ResourceLedger,
}

impl<'w> RenderContext<'w> {
    /// Builds the device, surface, depth buffer, pipeline and vertex buffer
    /// for `window`.
    ///
    /// The effect is read and checked before any GPU object is created.
    pub fn setup(
        window: &'w Window,
        profile: &RenderProfile,
        effect: &EffectConfig,
    ) -> Result<Self, RenderError> {
        if profile.targets.is_empty() {
            return Err(RenderError::init("render profile has no target slots"));
        }

        let effect = Effect::load(effect).map_err(|e| RenderError::init_with("loading effect", e))?;

        let mut ledger = ResourceLedger::new();

        let gpu = pollster::block_on(Gpu::new(window, profile.gpu_init()))
            .map_err(|e| RenderError::init_with("creating device and surface", e))?;
        ledger.acquire(ResourceKind::Device);
        ledger.acquire(ResourceKind::Surface);

        let depth = DepthBuffer::new(gpu.device(), gpu.size());
        ledger.acquire(ResourceKind::DepthBuffer);

        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());

        // Shader and pipeline validation errors land here, not in wgpu's
        // default (panicking) handler.
        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = effect.create_module(ctx.device);
        let pipeline = TrianglePipeline::new(&ctx, &effect, module, profile.targets.len());
        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(RenderError::init_with("compiling effect pipeline", err));
        }
        ledger.acquire(ResourceKind::EffectModule);
        ledger.acquire(ResourceKind::Pipeline);
        ledger.acquire(ResourceKind::VertexBuffer);
        for slot in 0..pipeline.slot_count() {
            ledger.acquire(ResourceKind::TransformBuffer(slot));
        }

        let planner = FramePlanner::new(
            StepClock::with_step(profile.step),
            profile.camera,
            profile.targets.clone(),
            profile.clear,
        );

        log::info!(
            "render context ready: {} target slot(s) on {} ({:?}), present {:?}, effect {}",
            pipeline.slot_count(),
            gpu.adapter_info().name,
            gpu.adapter_info().backend,
            gpu.present_mode(),
            effect.path().display()
        );

        Ok(Self {
            window,
            gpu,
            depth,
            pipeline,
            planner,
            ledger,
        })
    }

    /// Follows a window resize: surface, depth buffer, and (next frame)
    /// viewport and projection aspect.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);

        if self.depth.needs_resize(new_size) {
            self.ledger.release(ResourceKind::DepthBuffer);
            self.depth = DepthBuffer::new(self.gpu.device(), new_size);
            self.ledger.acquire(ResourceKind::DepthBuffer);
        }
    }

    /// Advances time by one step, draws every target slot and presents.
    ///
    /// Only an unrecoverable surface error is returned; transient ones skip
    /// the frame.
    pub fn render_frame(&mut self) -> Result<FrameStatus, RenderError> {
        let size = self.gpu.size();
        let plan = self.planner.plan(size);

        if !plan.viewport.is_valid() {
            return Ok(FrameStatus::Skipped(plan.time));
        }

        let mut frame = match self.gpu.acquire_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(&err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface error is fatal: {err}");
                        Err(RenderError::Present(err))
                    }
                    action => {
                        log::debug!("frame {} skipped: {err} ({action:?})", plan.time.frame_index);
                        Ok(FrameStatus::Skipped(plan.time))
                    }
                };
            }
        };

        let ctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view, &self.depth);
            self.pipeline.render(&ctx, &mut target, &plan);
        }

        self.window.pre_present_notify();
        self.gpu.present(frame);

        Ok(FrameStatus::Presented(plan.time))
    }

    /// Releases every resource acquired by setup, newest first.
    pub fn teardown(self) -> TeardownReport {
        let Self {
            window: _,
            gpu,
            depth,
            pipeline,
            planner,
            mut ledger,
        } = self;

        log::info!(
            "tearing down after {} frame(s)",
            planner.clock().ticks()
        );

        drop(pipeline);
        drop(depth);
        drop(gpu);

        let report = ledger.drain();
        debug_assert!(ledger.is_empty());
        report
    }
}
