use std::fmt::Write as _;

use glam::{Mat4, Vec3};

use super::core::{wrap_signed_degrees, Basis, CameraPose, CameraUniform, Projection, WORLD_UP};
use super::look_at::LookAtRotation;
use super::orbit::OrbitState;
use super::overlay::{NavigationMode, PoseSnapshot, ViewOverlay};

/// Free-flight pitch limit in degrees.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view reachable by scrolling.
pub const MIN_FOV: f32 = 1.0;
/// Widest field of view reachable by scrolling.
pub const MAX_FOV: f32 = 90.0;

/// Camera view-state machine.
///
/// Owns the pose and derived basis, the navigation mode with its orbit
/// parameters, the active view overlay with the pose saved on entering it,
/// and the look-at rotation. None of the operations fail; out-of-range
/// inputs are clamped.
#[derive(Debug, Clone)]
pub struct CameraController {
    pose: CameraPose,
    basis: Basis,
    mode: NavigationMode,
    orbit: OrbitState,
    overlay: ViewOverlay,
    saved: Option<PoseSnapshot>,
    look_at: LookAtRotation,
    projection: Projection,
    projection_matrix: Mat4,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraPose::default(), Projection::default())
    }
}

impl CameraController {
    /// Create a free-flight camera at `pose`.
    #[must_use]
    pub fn new(pose: CameraPose, projection: Projection) -> Self {
        let pose = CameraPose {
            pitch: pose.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            roll: wrap_signed_degrees(pose.roll),
            fov: pose.fov.clamp(MIN_FOV, MAX_FOV),
            ..pose
        };
        Self {
            basis: Basis::from_pose(&pose),
            pose,
            mode: NavigationMode::FreeFlight,
            orbit: OrbitState::default(),
            overlay: ViewOverlay::None,
            saved: None,
            look_at: LookAtRotation::default(),
            projection_matrix: projection.matrix(pose.fov),
            projection,
        }
    }

    // -- Free-flight movement --

    /// Move along the view direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.translate(self.basis.front * distance);
    }

    /// Move against the view direction.
    pub fn move_backward(&mut self, distance: f32) {
        self.translate(-self.basis.front * distance);
    }

    /// Strafe left.
    pub fn move_left(&mut self, distance: f32) {
        self.translate(-self.basis.right * distance);
    }

    /// Strafe right.
    pub fn move_right(&mut self, distance: f32) {
        self.translate(self.basis.right * distance);
    }

    /// Rise along world up.
    pub fn move_up(&mut self, distance: f32) {
        self.translate(WORLD_UP * distance);
    }

    /// Sink along world up.
    pub fn move_down(&mut self, distance: f32) {
        self.translate(-WORLD_UP * distance);
    }

    fn translate(&mut self, offset: Vec3) {
        if self.mode == NavigationMode::Orbit {
            return;
        }
        self.pose.position += offset;
    }

    // -- Free-flight rotation --

    /// Tilt up (positive) or down, clamped to ±89°.
    pub fn rotate_pitch(&mut self, delta: f32) {
        if self.mode == NavigationMode::Orbit {
            return;
        }
        self.pose.pitch = (self.pose.pitch + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    /// Turn around world up.
    pub fn rotate_yaw(&mut self, delta: f32) {
        if self.mode == NavigationMode::Orbit {
            return;
        }
        self.pose.yaw = wrap_signed_degrees(self.pose.yaw + delta);
        self.update_basis();
    }

    /// Bank around the view direction.
    pub fn rotate_roll(&mut self, delta: f32) {
        if self.mode == NavigationMode::Orbit {
            return;
        }
        self.pose.roll = wrap_signed_degrees(self.pose.roll + delta);
        self.update_basis();
    }

    fn update_basis(&mut self) {
        self.basis = Basis::from_pose(&self.pose);
    }

    // -- Orbit --

    /// Switch between free-flight and orbit navigation.
    ///
    /// Entering orbit keeps the camera where it is and derives the orbit
    /// parameters from its offset to the origin. Leaving orbit keeps the
    /// position and converts the view direction back to yaw and pitch.
    pub fn toggle_orbit_mode(&mut self) {
        match self.mode {
            NavigationMode::FreeFlight => {
                self.orbit = OrbitState::around_origin(self.pose.position);
                self.mode = NavigationMode::Orbit;
                self.update_orbit_camera();
                log::info!(
                    "Orbit mode enabled (distance {:.2})",
                    self.orbit.distance
                );
            }
            NavigationMode::Orbit => {
                let (yaw, pitch) = self.basis.yaw_pitch();
                self.pose.yaw = yaw;
                self.pose.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
                self.pose.roll = 0.0;
                self.mode = NavigationMode::FreeFlight;
                self.update_basis();
                log::info!("Free-flight mode enabled");
            }
        }
    }

    /// Aim the orbit from the cursor position within a viewport of
    /// `width` x `height`. Ignored outside orbit mode.
    pub fn process_orbit_rotation(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if self.mode != NavigationMode::Orbit {
            return;
        }
        self.orbit.aim_from_cursor(x, y, width, height);
        self.update_orbit_camera();
    }

    /// Scroll wheel: zoom the orbit distance, or narrow/widen the field of
    /// view in free-flight.
    pub fn process_mouse_scroll(&mut self, delta: f32) {
        match self.mode {
            NavigationMode::Orbit => {
                self.orbit.zoom(delta);
                self.update_orbit_camera();
            }
            NavigationMode::FreeFlight => {
                self.pose.fov = (self.pose.fov - delta).clamp(MIN_FOV, MAX_FOV);
                self.update_projection();
            }
        }
    }

    fn update_orbit_camera(&mut self) {
        self.pose.position = self.orbit.position();
        self.basis = Basis::looking(self.orbit.target - self.pose.position);
    }

    // -- View overlays --

    /// Enter or leave the bird's-eye view.
    pub fn toggle_birds_eye_view(&mut self) {
        self.toggle_overlay(ViewOverlay::BirdsEye);
    }

    /// Enter or leave the interior view.
    pub fn toggle_interior_view(&mut self) {
        self.toggle_overlay(ViewOverlay::Interior);
    }

    /// Enter or leave the driver view.
    pub fn toggle_driver_view(&mut self) {
        self.toggle_overlay(ViewOverlay::Driver);
    }

    /// Leave the interior view if it is the active overlay.
    pub fn exit_interior_view(&mut self) {
        if self.overlay == ViewOverlay::Interior {
            self.restore_saved_pose();
        }
    }

    /// Leave the driver view if it is the active overlay.
    pub fn exit_driver_view(&mut self) {
        if self.overlay == ViewOverlay::Driver {
            self.restore_saved_pose();
        }
    }

    fn toggle_overlay(&mut self, overlay: ViewOverlay) {
        if self.overlay == overlay {
            self.restore_saved_pose();
            return;
        }
        let Some((position, pitch, yaw)) = overlay.fixed_pose() else {
            return;
        };

        // Only the pose from before the first overlay is kept, so hopping
        // between overlays still returns to it.
        if self.overlay == ViewOverlay::None {
            self.saved = Some(PoseSnapshot {
                pose: self.pose,
                mode: self.mode,
                orbit: self.orbit,
            });
        }

        self.pose.position = position;
        self.pose.pitch = pitch;
        self.pose.yaw = yaw;
        self.pose.roll = 0.0;
        self.mode = NavigationMode::FreeFlight;
        self.overlay = overlay;
        self.update_basis();
        log::info!("{} activated", overlay.label());
    }

    fn restore_saved_pose(&mut self) {
        let left = self.overlay;
        self.overlay = ViewOverlay::None;
        let Some(snapshot) = self.saved.take() else {
            return;
        };

        self.pose = snapshot.pose;
        self.mode = snapshot.mode;
        self.orbit = snapshot.orbit;
        match self.mode {
            NavigationMode::Orbit => self.update_orbit_camera(),
            NavigationMode::FreeFlight => self.update_basis(),
        }
        self.update_projection();
        log::info!("{} deactivated", left.label());
    }

    // -- Look-at rotation --

    /// Circle the camera horizontally around the point it is looking at.
    ///
    /// The first call captures the pivot three units ahead of the camera;
    /// every call advances the angle by `delta` degrees and turns the camera
    /// to face the pivot.
    pub fn rotate_camera_around_look_at(&mut self, delta: f32) {
        if !self.look_at.active {
            self.look_at = LookAtRotation::begin(self.pose.position, self.basis.front);
            log::info!(
                "Look-at rotation started around ({:.2}, {:.2}, {:.2})",
                self.look_at.pivot.x,
                self.look_at.pivot.y,
                self.look_at.pivot.z
            );
        }

        self.pose.position = self.look_at.advance(delta);
        let to_pivot = self.look_at.pivot - self.pose.position;
        if to_pivot.length_squared() <= f32::EPSILON {
            return;
        }
        self.basis = Basis::looking(to_pivot);
        let (yaw, pitch) = self.basis.yaw_pitch();
        self.pose.yaw = yaw;
        self.pose.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.pose.roll = 0.0;
    }

    /// Stop circling; the camera stays where it is.
    pub fn stop_look_at_rotation(&mut self) {
        if self.look_at.active {
            self.look_at.active = false;
            log::info!("Look-at rotation stopped");
        }
    }

    // -- Projection --

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.projection.aspect = width as f32 / height as f32;
        self.update_projection();
    }

    fn update_projection(&mut self) {
        self.projection_matrix = self.projection.matrix(self.pose.fov);
    }

    // -- Queries --

    /// Current navigation mode.
    #[must_use]
    pub fn navigation_mode(&self) -> NavigationMode {
        self.mode
    }

    /// Active view overlay.
    #[must_use]
    pub fn overlay(&self) -> ViewOverlay {
        self.overlay
    }

    /// Whether look-at rotation is running.
    #[must_use]
    pub fn is_look_at_rotating(&self) -> bool {
        self.look_at.active
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Orbit parameters (meaningful in orbit mode).
    #[must_use]
    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    /// View direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    /// Camera-space right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Camera-space up.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.pose.position;
        Mat4::look_at_rh(eye, eye + self.basis.front, self.basis.up)
    }

    /// View-to-clip transform.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Uniform block for the GPU camera buffer.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix * self.view_matrix()).to_cols_array_2d(),
            position: self.pose.position.to_array(),
            fovy: self.pose.fov,
        }
    }

    /// Multi-line description of the camera state for the debug dump.
    #[must_use]
    pub fn info(&self) -> String {
        let p = &self.pose;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Position: ({:.2}, {:.2}, {:.2})",
            p.position.x, p.position.y, p.position.z
        );
        let _ = writeln!(
            out,
            "Yaw: {:.2}, Pitch: {:.2}, Roll: {:.2}, FOV: {:.1}",
            p.yaw, p.pitch, p.roll, p.fov
        );
        let f = self.basis.front;
        let _ = writeln!(out, "Front: ({:.3}, {:.3}, {:.3})", f.x, f.y, f.z);
        let _ = writeln!(out, "Mode: {:?}, View: {}", self.mode, self.overlay.label());
        if self.mode == NavigationMode::Orbit {
            let _ = writeln!(
                out,
                "Orbit: distance {:.2}, yaw {:.2}, pitch {:.2}",
                self.orbit.distance, self.orbit.yaw, self.orbit.pitch
            );
        }
        if self.look_at.active {
            let _ = write!(
                out,
                "Look-at: angle {:.2}, radius {:.2}",
                self.look_at.angle, self.look_at.radius
            );
        }
        out.trim_end().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn move_forward_from_default_pose() {
        let mut cam = CameraController::default();
        cam.move_forward(5.0);
        assert!(approx(cam.pose().position, Vec3::new(0.0, 5.0, 10.0)));
    }

    #[test]
    fn strafe_and_vertical_moves() {
        let mut cam = CameraController::default();
        cam.move_right(2.0);
        cam.move_up(1.0);
        assert!(approx(cam.pose().position, Vec3::new(2.0, 6.0, 15.0)));
        cam.move_left(2.0);
        cam.move_down(1.0);
        cam.move_backward(1.0);
        assert!(approx(cam.pose().position, Vec3::new(0.0, 5.0, 16.0)));
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut cam = CameraController::default();
        for _ in 0..100 {
            cam.rotate_pitch(7.5);
        }
        assert_eq!(cam.pose().pitch, PITCH_LIMIT);
        for _ in 0..100 {
            cam.rotate_pitch(-13.0);
        }
        assert_eq!(cam.pose().pitch, -PITCH_LIMIT);
    }

    #[test]
    fn roll_wraps_and_full_turn_is_identity() {
        let mut cam = CameraController::default();
        cam.rotate_roll(20.0);
        let before = (cam.front(), cam.up(), cam.right());
        cam.rotate_roll(360.0);
        assert!(cam.pose().roll > -360.0 && cam.pose().roll <= 360.0);
        assert!(approx(cam.front(), before.0));
        assert!(approx(cam.up(), before.1));
        assert!(approx(cam.right(), before.2));

        for _ in 0..50 {
            cam.rotate_roll(-47.0);
        }
        assert!(cam.pose().roll > -360.0 && cam.pose().roll <= 360.0);
    }

    #[test]
    fn movement_is_ignored_in_orbit() {
        let mut cam = CameraController::default();
        cam.toggle_orbit_mode();
        let position = cam.pose().position;
        cam.move_forward(3.0);
        cam.rotate_yaw(30.0);
        cam.rotate_pitch(10.0);
        assert_eq!(cam.pose().position, position);
    }

    #[test]
    fn orbit_entry_from_default_pose() {
        let mut cam = CameraController::default();
        cam.toggle_orbit_mode();
        assert_eq!(cam.navigation_mode(), NavigationMode::Orbit);
        assert!((cam.orbit().distance - 250.0_f32.sqrt()).abs() < 1e-4);
        assert!(approx(cam.pose().position, Vec3::new(0.0, 5.0, 15.0)));
        // Now faces the origin
        assert!(approx(cam.front(), -Vec3::new(0.0, 5.0, 15.0).normalize()));
    }

    #[test]
    fn orbit_round_trip_restores_angles() {
        let pose = CameraPose {
            position: Vec3::new(0.0, 0.0, 15.0),
            ..CameraPose::default()
        };
        let mut cam = CameraController::new(pose, Projection::default());
        cam.toggle_orbit_mode();
        cam.toggle_orbit_mode();
        assert_eq!(cam.navigation_mode(), NavigationMode::FreeFlight);
        assert!((cam.pose().yaw + 90.0).abs() < 1e-3);
        assert!(cam.pose().pitch.abs() < 1e-3);
        assert!(approx(cam.pose().position, Vec3::new(0.0, 0.0, 15.0)));
    }

    #[test]
    fn orbit_cursor_and_scroll() {
        let mut cam = CameraController::default();
        cam.toggle_orbit_mode();
        cam.process_orbit_rotation(400.0, 300.0, 800.0, 600.0);
        assert_eq!(cam.orbit().yaw, 0.0);
        assert_eq!(cam.orbit().pitch, 0.0);
        let distance = cam.orbit().distance;
        assert!(approx(cam.pose().position, Vec3::new(distance, 0.0, 0.0)));

        cam.process_mouse_scroll(4.0);
        cam.process_mouse_scroll(-4.0);
        assert!((cam.orbit().distance - distance).abs() < 1e-4);
    }

    #[test]
    fn scroll_changes_fov_in_free_flight() {
        let mut cam = CameraController::default();
        let before = cam.projection_matrix();
        cam.process_mouse_scroll(5.0);
        assert_eq!(cam.pose().fov, 40.0);
        assert_ne!(cam.projection_matrix(), before);
        cam.process_mouse_scroll(-500.0);
        assert_eq!(cam.pose().fov, MAX_FOV);
        cam.process_mouse_scroll(500.0);
        assert_eq!(cam.pose().fov, MIN_FOV);
    }

    #[test]
    fn cursor_ignored_in_free_flight() {
        let mut cam = CameraController::default();
        let before = *cam.pose();
        cam.process_orbit_rotation(0.0, 0.0, 800.0, 600.0);
        assert_eq!(*cam.pose(), before);
    }

    #[test]
    fn interior_toggle_round_trip() {
        let mut cam = CameraController::default();
        cam.move_left(1.5);
        cam.rotate_roll(12.0);
        cam.rotate_pitch(-10.0);
        let before = *cam.pose();

        cam.toggle_interior_view();
        assert_eq!(cam.overlay(), ViewOverlay::Interior);
        assert!(approx(cam.pose().position, Vec3::new(-3.7, 0.55, 0.0)));
        assert_eq!(cam.pose().roll, 0.0);

        cam.toggle_interior_view();
        assert_eq!(cam.overlay(), ViewOverlay::None);
        assert_eq!(*cam.pose(), before);
        assert_eq!(cam.navigation_mode(), NavigationMode::FreeFlight);
    }

    #[test]
    fn overlay_restores_orbit_mode() {
        let mut cam = CameraController::default();
        cam.toggle_orbit_mode();
        cam.process_orbit_rotation(600.0, 200.0, 800.0, 600.0);
        let orbit = *cam.orbit();
        let position = cam.pose().position;

        cam.toggle_birds_eye_view();
        assert_eq!(cam.navigation_mode(), NavigationMode::FreeFlight);
        assert!(approx(cam.pose().position, Vec3::new(0.0, 20.0, 0.0)));
        assert_eq!(cam.pose().pitch, -89.0);

        cam.toggle_birds_eye_view();
        assert_eq!(cam.navigation_mode(), NavigationMode::Orbit);
        assert_eq!(*cam.orbit(), orbit);
        assert!(approx(cam.pose().position, position));
    }

    #[test]
    fn switching_between_overlays_keeps_first_snapshot() {
        let mut cam = CameraController::default();
        let before = *cam.pose();

        cam.toggle_interior_view();
        cam.toggle_driver_view();
        assert_eq!(cam.overlay(), ViewOverlay::Driver);
        assert!(approx(cam.pose().position, Vec3::new(-1.2, 0.3, 0.0)));
        assert_eq!(cam.pose().yaw, -180.0);

        cam.exit_interior_view();
        assert_eq!(cam.overlay(), ViewOverlay::Driver);

        cam.exit_driver_view();
        assert_eq!(cam.overlay(), ViewOverlay::None);
        assert_eq!(*cam.pose(), before);
    }

    #[test]
    fn look_at_rotation_faces_pivot() {
        let mut cam = CameraController::default();
        cam.rotate_camera_around_look_at(90.0);
        assert!(cam.is_look_at_rotating());
        let pivot = Vec3::new(0.0, 5.0, 12.0);
        assert!(((cam.pose().position - pivot).length() - 3.0).abs() < 1e-4);
        assert!(approx(cam.front(), (pivot - cam.pose().position).normalize()));

        let position = cam.pose().position;
        cam.stop_look_at_rotation();
        assert!(!cam.is_look_at_rotating());
        assert_eq!(cam.pose().position, position);
    }

    #[test]
    fn uniform_matches_matrices() {
        let cam = CameraController::default();
        let uniform = cam.uniform();
        let expected = cam.projection_matrix() * cam.view_matrix();
        assert_eq!(uniform.view_proj, expected.to_cols_array_2d());
        assert_eq!(uniform.position, [0.0, 5.0, 15.0]);
    }

    #[test]
    fn info_mentions_view() {
        let mut cam = CameraController::default();
        cam.toggle_birds_eye_view();
        assert!(cam.info().contains("Bird's eye view"));
    }
}
