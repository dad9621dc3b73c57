use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::ViewerConfig;
use crate::core::{FrameStatus, LoopEvent, LoopState, RenderContext};
use crate::device::TeardownReport;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, renders until it is closed, then tears down.
    ///
    /// Returns the setup or fatal frame error, if any.
    pub fn run(config: ViewerConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(report) = &state.teardown {
            log::info!("released {} resource(s)", report.released.len());
        }

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// The window and the render context borrowing it.
///
/// The context sits in an `Option` so teardown can take it by value.
#[self_referencing]
struct Session {
    window: Window,

    #[borrows(window)]
    #[covariant]
    ctx: Option<RenderContext<'this>>,
}

/// Window events that end the loop. Only an explicit close request does.
fn loop_event(event: &WindowEvent) -> Option<LoopEvent> {
    match event {
        WindowEvent::CloseRequested => Some(LoopEvent::CloseRequested),
        _ => None,
    }
}

struct RuntimeState {
    config: ViewerConfig,
    session: Option<Session>,
    state: LoopState,
    teardown: Option<TeardownReport>,
    failure: Option<anyhow::Error>,
}

impl RuntimeState {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            session: None,
            state: LoopState::Rendering,
            teardown: None,
            failure: None,
        }
    }

    fn create_session(&self, event_loop: &ActiveEventLoop) -> Result<Session> {
        let monitor = event_loop.primary_monitor().map(|m| m.size());
        let size = self.config.window.resolve(monitor);

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let profile = &self.config.profile;
        let effect = &self.config.effect;

        SessionTryBuilder {
            window,
            ctx_builder: |window| {
                RenderContext::setup(window, profile, effect)
                    .map(Some)
                    .map_err(anyhow::Error::from)
            },
        }
        .try_build()
    }

    /// Moves to `ShuttingDown` and releases the render context exactly once.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop, event: LoopEvent) {
        self.state = self.state.next(event);

        if let Some(mut session) = self.session.take() {
            let report = session.with_ctx_mut(|ctx| ctx.take().map(RenderContext::teardown));
            self.teardown = report;
            // Window drops here, after the surface that borrowed it.
            drop(session);
        }

        event_loop.exit();
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(session) = self.session.as_mut() else { return };
        session.with_ctx_mut(|ctx| {
            if let Some(ctx) = ctx {
                ctx.resize(new_size);
            }
        });
        session.with_window(|w| w.request_redraw());
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = self.session.as_mut() else { return };

        let outcome = session.with_ctx_mut(|ctx| ctx.as_mut().map(RenderContext::render_frame));

        match outcome {
            Some(Ok(status)) => {
                if let FrameStatus::Skipped(t) = status {
                    log::trace!("frame {} not presented", t.frame_index);
                }
                self.state = self.state.next(LoopEvent::Frame);
            }
            Some(Err(err)) => {
                log::error!("rendering stopped: {err}");
                self.failure = Some(err.into());
                self.shutdown(event_loop, LoopEvent::FatalError);
            }
            None => {}
        }
    }
}

impl ApplicationHandler for RuntimeState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || !self.state.is_rendering() {
            return;
        }

        match self.create_session(event_loop) {
            Ok(session) => {
                session.with_window(|w| w.request_redraw());
                self.session = Some(session);
            }
            Err(err) => {
                log::error!("setup failed: {err:#}");
                self.failure = Some(err);
                self.shutdown(event_loop, LoopEvent::FatalError);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.is_rendering() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: every idle tick renders one frame.
        if let Some(session) = &self.session {
            session.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.state.is_rendering() {
            event_loop.exit();
            return;
        }

        if let Some(transition) = loop_event(&event) {
            self.shutdown(event_loop, transition);
            return;
        }

        match event {
            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = self
                    .session
                    .as_ref()
                    .map(|s| s.with_window(|w| w.inner_size()));
                if let Some(new_size) = new_size {
                    self.resize(new_size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_shuts_down() {
        let event = loop_event(&WindowEvent::CloseRequested);
        assert_eq!(event, Some(LoopEvent::CloseRequested));
        assert_eq!(LoopState::Rendering.next(LoopEvent::CloseRequested), LoopState::ShuttingDown);
    }

    #[test]
    fn destroyed_is_not_a_close_signal() {
        assert_eq!(loop_event(&WindowEvent::Destroyed), None);
    }

    #[test]
    fn redraw_and_resize_do_not_move_the_state() {
        assert_eq!(loop_event(&WindowEvent::RedrawRequested), None);
        assert_eq!(loop_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))), None);
    }
}
