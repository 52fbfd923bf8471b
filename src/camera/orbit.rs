//! Spherical-coordinate orbit around a fixed target.

use glam::Vec3;

/// Closest the orbit camera may get to its target.
pub const MIN_DISTANCE: f32 = 2.0;
/// Farthest the orbit camera may get from its target.
pub const MAX_DISTANCE: f32 = 50.0;
/// Distance used when entering orbit from inside `MIN_DISTANCE`.
pub const FALLBACK_DISTANCE: f32 = 15.0;
/// Orbit pitch limit, keeps the view direction off the world-up pole.
pub const PITCH_LIMIT: f32 = 89.0;
/// Distance change per scroll unit.
pub const SCROLL_STEP: f32 = 0.5;

/// Orbit parameters. The camera sits on a sphere around `target` and
/// always looks at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Point being orbited (the bus center).
    pub target: Vec3,
    /// Radius of the orbit sphere.
    pub distance: f32,
    /// Elevation angle in degrees.
    pub pitch: f32,
    /// Azimuth angle in degrees.
    pub yaw: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: FALLBACK_DISTANCE,
            pitch: 20.0,
            yaw: -90.0,
        }
    }
}

impl OrbitState {
    /// Derive orbit parameters that place the camera at `position` around
    /// the world origin.
    #[must_use]
    pub fn around_origin(position: Vec3) -> Self {
        let target = Vec3::ZERO;
        let offset = position - target;

        let mut distance = offset.length();
        if distance < MIN_DISTANCE {
            distance = FALLBACK_DISTANCE;
        }

        let horizontal = offset.x.hypot(offset.z);
        let (yaw, pitch) = if horizontal > 0.001 {
            (
                offset.z.atan2(offset.x).to_degrees(),
                offset.y.atan2(horizontal).to_degrees(),
            )
        } else {
            let fallback = Self::default();
            (fallback.yaw, fallback.pitch)
        };

        Self {
            target,
            distance: distance.min(MAX_DISTANCE),
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            yaw,
        }
    }

    /// Camera position on the orbit sphere.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (pitch, yaw) = (self.pitch.to_radians(), self.yaw.to_radians());
        self.target
            + self.distance
                * Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin())
    }

    /// Aim the orbit from a cursor position: horizontal offset from the
    /// viewport center maps to ±180° yaw, vertical to ∓89° pitch.
    pub fn aim_from_cursor(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let nx = ((x - half_w) / half_w).clamp(-1.0, 1.0);
        let ny = ((y - half_h) / half_h).clamp(-1.0, 1.0);

        self.yaw = nx * 180.0;
        self.pitch = -ny * PITCH_LIMIT;
    }

    /// Move toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance - delta * SCROLL_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_from_default_pose() {
        let orbit = OrbitState::around_origin(Vec3::new(0.0, 5.0, 15.0));
        assert!((orbit.distance - 250.0_f32.sqrt()).abs() < 1e-4);
        assert!((orbit.yaw - 90.0).abs() < 1e-4);
        assert!((orbit.position() - Vec3::new(0.0, 5.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn entry_too_close_uses_fallback_distance() {
        let orbit = OrbitState::around_origin(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(orbit.distance, FALLBACK_DISTANCE);
        assert!(orbit.yaw.abs() < 1e-4);
    }

    #[test]
    fn entry_straight_above_uses_fallback_angles() {
        let orbit = OrbitState::around_origin(Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(orbit.yaw, -90.0);
        assert_eq!(orbit.pitch, 20.0);
        assert_eq!(orbit.distance, 10.0);
    }

    #[test]
    fn cursor_maps_to_angles() {
        let mut orbit = OrbitState::default();
        orbit.aim_from_cursor(400.0, 300.0, 800.0, 600.0);
        assert_eq!(orbit.yaw, 0.0);
        assert_eq!(orbit.pitch, 0.0);

        orbit.aim_from_cursor(800.0, 0.0, 800.0, 600.0);
        assert_eq!(orbit.yaw, 180.0);
        assert_eq!(orbit.pitch, 89.0);

        // Outside the window still clamps
        orbit.aim_from_cursor(-400.0, 1200.0, 800.0, 600.0);
        assert_eq!(orbit.yaw, -180.0);
        assert_eq!(orbit.pitch, -89.0);
    }

    #[test]
    fn zoom_round_trips_and_clamps() {
        let mut orbit = OrbitState::default();
        let start = orbit.distance;
        orbit.zoom(3.0);
        orbit.zoom(-3.0);
        assert!((orbit.distance - start).abs() < 1e-5);

        orbit.zoom(1000.0);
        assert_eq!(orbit.distance, MIN_DISTANCE);
        orbit.zoom(-1000.0);
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }
}
