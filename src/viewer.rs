//! Standalone visualization window backed by winit.
//!
//! ```no_run
//! # use busview::Viewer;
//! Viewer::builder().build().run().unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use crate::{
    engine::{BusViewEngine, ViewerRequest},
    error::BusViewError,
    gpu::render_context::RenderContext,
    input::InputEvent,
    options::Options,
    renderer::SceneRenderer,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
}

impl ViewerBuilder {
    /// Create a builder with default options.
    fn new() -> Self {
        Self { options: None }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the bus.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`BusViewError::Viewer`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run(self) -> Result<(), BusViewError> {
        let event_loop =
            EventLoop::new().map_err(|e| BusViewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            gpu: None,
            engine: BusViewEngine::new(self.options),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| BusViewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU state that only exists once a window does.
struct GpuState {
    context: RenderContext,
    renderer: SceneRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    engine: BusViewEngine,
}

/// Surface size for a window size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
        if let Some(gpu) = &mut self.gpu {
            gpu.context.resize(width, height);
            gpu.renderer.resize(&gpu.context);
        }
    }

    fn toggle_fullscreen(&self) {
        let Some(window) = &self.window else {
            return;
        };
        if window.fullscreen().is_some() {
            window.set_fullscreen(None);
            log::info!("Windowed");
        } else {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            log::info!("Fullscreen");
        }
    }

    /// Run one frame: advance the engine, act on its requests, render.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        for request in self.engine.advance_frame() {
            match request {
                ViewerRequest::Exit => {
                    event_loop.exit();
                    return;
                }
                ViewerRequest::ToggleFullscreen => self.toggle_fullscreen(),
            }
        }

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let frame = match gpu.context.get_next_frame() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(w) = &self.window {
                    let (vp_w, vp_h) = viewport_size(w.inner_size());
                    self.resize(vp_w, vp_h);
                }
                return;
            }
            Err(e) => {
                log::error!("render error: {e:?}");
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        gpu.renderer
            .update_camera(&gpu.context.queue, &self.engine.camera_uniform());
        self.engine.draw(&mut gpu.renderer);
        gpu.renderer.render(
            &gpu.context,
            &view,
            self.engine.options().window.clear_color,
        );
        frame.present();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_opts = &self.engine.options().window;
        let attrs = Window::default_attributes()
            .with_title(&window_opts.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_opts.width,
                window_opts.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let vsync = window_opts.vsync;
        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (vp_w, vp_h),
            vsync,
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };
        let renderer = match SceneRenderer::new(&context, self.engine.scene()) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        self.engine.resize(vp_w, vp_h);
        self.engine.reset_frame_clock();
        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(GpuState { context, renderer });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                self.resize(vp_w, vp_h);
            }

            WindowEvent::Focused(false) => {
                self.engine.handle_input(&InputEvent::FocusLost);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.engine.handle_input(&InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.engine
                    .handle_input(&InputEvent::Scroll { delta: scroll_delta });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.engine.handle_input(&InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.engine.handle_input(&InputEvent::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                });
            }

            _ => (),
        }
    }
}
