//! Window-independent engine core: owns the camera, the bus and the
//! scene, and turns input into state changes once per frame.

/// The engine's interactive vocabulary.
pub mod command;
mod input;

use crate::bus::{BusState, DoorEvent};
use crate::camera::core::{CameraPose, CameraUniform};
use crate::camera::CameraController;
use crate::input::{InputDispatcher, InputEvent, KeyAction};
use crate::options::Options;
use crate::renderer::PrimitiveRenderer;
use crate::scene::BusScene;
use crate::util::frame_timing::FrameTiming;

/// Something the engine needs the window layer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerRequest {
    /// Close the window and end the event loop.
    Exit,
    /// Switch between windowed and borderless fullscreen.
    ToggleFullscreen,
}

/// Window-independent core of the bus viewer.
///
/// Owns the camera state machine, the bus state, the static scene and the
/// input dispatcher. The window layer feeds it [`InputEvent`]s, calls
/// [`update`](Self::update) once per frame, and then lets it
/// [`draw`](Self::draw) into a [`PrimitiveRenderer`].
///
/// Per-frame order: discrete key commands, held-key commands, orbit
/// cursor tracking, then one door animation step.
pub struct BusViewEngine {
    camera: CameraController,
    bus: BusState,
    scene: BusScene,
    options: Options,
    dispatcher: InputDispatcher,
    frame_timing: FrameTiming,
    viewport: (u32, u32),
    requests: Vec<ViewerRequest>,
}

impl BusViewEngine {
    /// Build the engine from options. The viewport starts at the configured
    /// window size.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let width = options.window.width.max(1);
        let height = options.window.height.max(1);
        let pose = CameraPose {
            fov: options.camera.fovy,
            ..CameraPose::default()
        };
        let projection = options.camera.projection(width as f32 / height as f32);

        let engine = Self {
            camera: CameraController::new(pose, projection),
            bus: BusState::new(options.controls.door_step),
            scene: BusScene::new(options.controls.door_slide),
            dispatcher: InputDispatcher::new(options.keybindings.clone()),
            frame_timing: FrameTiming::new(),
            viewport: (width, height),
            requests: Vec::new(),
            options,
        };
        engine.log_controls();
        engine
    }

    /// Feed one raw input event. Scrolling applies immediately; keys are
    /// acted on by the next [`update`](Self::update).
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(cmd) = self.dispatcher.handle_event(event) {
            self.execute(cmd);
        }
    }

    /// Advance one frame of `dt` seconds and return what the window layer
    /// should do.
    pub fn update(&mut self, dt: f32) -> Vec<ViewerRequest> {
        for cmd in self.dispatcher.frame_commands(dt, &self.options.controls) {
            self.execute(cmd);
        }

        if let Some((x, y)) = self.dispatcher.cursor() {
            let (w, h) = self.viewport;
            self.camera.process_orbit_rotation(x, y, w as f32, h as f32);
        }

        match self.bus.update() {
            Some(DoorEvent::FullyOpened) => log::info!("Doors fully open"),
            Some(DoorEvent::FullyClosed) => log::info!("Doors fully closed"),
            None => {}
        }

        std::mem::take(&mut self.requests)
    }

    /// Measure the time since the previous frame and [`update`](Self::update)
    /// with it.
    pub fn advance_frame(&mut self) -> Vec<ViewerRequest> {
        let dt = self.frame_timing.tick();
        self.update(dt)
    }

    /// Restart the frame clock, so time spent before the first frame (window
    /// and GPU setup) is not reported as frame time.
    pub fn reset_frame_clock(&mut self) {
        self.frame_timing.reset();
    }

    /// Submit the scene for the current bus state and view.
    pub fn draw<R: PrimitiveRenderer + ?Sized>(&self, renderer: &mut R) {
        self.scene
            .draw(renderer, &self.bus, self.camera.overlay().shows_interior());
    }

    /// Handle a viewport resize. Zero sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.camera.set_aspect(width, height);
    }

    fn log_controls(&self) {
        log::info!("Controls:");
        for action in KeyAction::ALL {
            if let Some(key) = self.options.keybindings.key_for(action) {
                log::info!("  {key:<10} {action:?}");
            }
        }
        log::info!("  {:<10} Zoom (field of view, orbit distance)", "Scroll");
    }

    fn log_debug_dump(&self) {
        log::info!(
            "{}FPS: {:.1}, bus x: {:.2}, wheels: {:.1}, lights {}, doors {:?}",
            self.camera.info(),
            self.frame_timing.fps(),
            self.bus.position,
            self.bus.wheel_rotation,
            if self.bus.lights_on { "on" } else { "off" },
            self.bus.doors.phase(),
        );
    }

    // -- Accessors --

    /// The camera state machine.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// The bus state.
    #[must_use]
    pub fn bus(&self) -> &BusState {
        &self.bus
    }

    /// The static bus geometry.
    #[must_use]
    pub fn scene(&self) -> &BusScene {
        &self.scene
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// GPU camera uniform for the current view.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera.uniform()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{NavigationMode, ViewOverlay};
    use crate::renderer::RecordingRenderer;

    fn press(engine: &mut BusViewEngine, key: &str) {
        engine.handle_input(&InputEvent::Key {
            key: key.to_owned(),
            pressed: true,
        });
    }

    fn release(engine: &mut BusViewEngine, key: &str) {
        engine.handle_input(&InputEvent::Key {
            key: key.to_owned(),
            pressed: false,
        });
    }

    fn tap(engine: &mut BusViewEngine, key: &str) -> Vec<ViewerRequest> {
        press(engine, key);
        let requests = engine.update(0.016);
        release(engine, key);
        requests
    }

    #[test]
    fn held_w_moves_forward() {
        let mut engine = BusViewEngine::new(Options::default());
        press(&mut engine, "KeyW");
        let _ = engine.update(2.0);
        let p = engine.camera().pose().position;
        assert!((p - Vec3::new(0.0, 5.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn interior_round_trip_restores_pose() {
        let mut engine = BusViewEngine::new(Options::default());
        let before = *engine.camera().pose();

        let _ = tap(&mut engine, "Digit3");
        assert_eq!(engine.camera().overlay(), ViewOverlay::Interior);

        let mut renderer = RecordingRenderer::default();
        engine.draw(&mut renderer);
        assert_eq!(renderer.calls.len(), engine.scene().interior_len());

        let _ = tap(&mut engine, "Digit4");
        assert_eq!(engine.camera().overlay(), ViewOverlay::None);
        assert_eq!(*engine.camera().pose(), before);
    }

    #[test]
    fn orbit_follows_cursor() {
        let mut engine = BusViewEngine::new(Options::default());
        let _ = tap(&mut engine, "KeyM");
        assert_eq!(engine.camera().navigation_mode(), NavigationMode::Orbit);

        engine.handle_input(&InputEvent::CursorMoved { x: 800.0, y: 300.0 });
        let _ = engine.update(0.016);
        assert_eq!(engine.camera().orbit().yaw, 180.0);
        assert_eq!(engine.camera().orbit().pitch, 0.0);
    }

    #[test]
    fn orbit_entry_keeps_pose_until_cursor_reported() {
        let mut engine = BusViewEngine::new(Options::default());
        let _ = tap(&mut engine, "KeyM");
        let orbit = engine.camera().orbit();
        assert!((orbit.yaw - 90.0).abs() < 1e-4);
        assert!((engine.camera().pose().position - Vec3::new(0.0, 5.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn doors_open_over_frames() {
        let mut engine = BusViewEngine::new(Options::default());
        let _ = tap(&mut engine, "Digit1");
        for _ in 0..60 {
            let _ = engine.update(0.016);
        }
        assert_eq!(engine.bus().doors.offset(), 1.0);
    }

    #[test]
    fn quit_and_fullscreen_become_requests() {
        let mut engine = BusViewEngine::new(Options::default());
        assert_eq!(tap(&mut engine, "F11"), vec![ViewerRequest::ToggleFullscreen]);
        assert_eq!(tap(&mut engine, "Escape"), vec![ViewerRequest::Exit]);
        assert!(engine.update(0.016).is_empty());
    }

    #[test]
    fn resize_ignores_zero() {
        let mut engine = BusViewEngine::new(Options::default());
        engine.resize(0, 300);
        assert_eq!(engine.viewport(), (800, 600));
        engine.resize(1024, 768);
        assert_eq!(engine.viewport(), (1024, 768));
    }
}
