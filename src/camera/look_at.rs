use glam::Vec3;

use super::core::wrap_positive_degrees;

/// Distance in front of the camera at which the look-at pivot is placed.
pub const PIVOT_DISTANCE: f32 = 3.0;

/// Horizontal circling of the camera around a point it was looking at.
///
/// The pivot, radius and height are captured once when the rotation starts
/// and stay fixed until it is stopped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LookAtRotation {
    /// Whether the camera is currently circling.
    pub active: bool,
    /// Point the camera circles and faces.
    pub pivot: Vec3,
    /// Horizontal distance from pivot to camera.
    pub radius: f32,
    /// Vertical offset of the camera above the pivot.
    pub height: f32,
    /// Current angle on the circle, in degrees within `[0, 360)`.
    pub angle: f32,
}

impl LookAtRotation {
    /// Start circling the point `PIVOT_DISTANCE` units along `front`.
    ///
    /// The starting angle is the camera's current azimuth around the pivot,
    /// so the first step does not jump.
    #[must_use]
    pub fn begin(position: Vec3, front: Vec3) -> Self {
        let pivot = position + front * PIVOT_DISTANCE;
        let offset = position - pivot;
        Self {
            active: true,
            pivot,
            radius: offset.x.hypot(offset.z),
            height: offset.y,
            angle: wrap_positive_degrees(offset.z.atan2(offset.x).to_degrees()),
        }
    }

    /// Advance the angle by `delta` degrees and return the new camera
    /// position.
    pub fn advance(&mut self, delta: f32) -> Vec3 {
        self.angle = wrap_positive_degrees(self.angle + delta);
        self.position()
    }

    /// Camera position for the current angle.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let angle = self.angle.to_radians();
        self.pivot + Vec3::new(self.radius * angle.cos(), self.height, self.radius * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_keeps_camera_in_place() {
        let position = Vec3::new(0.0, 5.0, 15.0);
        let rotation = LookAtRotation::begin(position, Vec3::NEG_Z);
        assert_eq!(rotation.pivot, Vec3::new(0.0, 5.0, 12.0));
        assert!((rotation.radius - 3.0).abs() < 1e-5);
        assert!(rotation.height.abs() < 1e-5);
        assert!((rotation.angle - 90.0).abs() < 1e-4);
        assert!((rotation.position() - position).length() < 1e-4);
    }

    #[test]
    fn advance_wraps_and_keeps_radius() {
        let mut rotation = LookAtRotation::begin(Vec3::new(0.0, 5.0, 15.0), Vec3::NEG_Z);
        let p = rotation.advance(300.0);
        assert!((rotation.angle - 30.0).abs() < 1e-3);
        let offset = p - rotation.pivot;
        assert!((offset.x.hypot(offset.z) - 3.0).abs() < 1e-4);
    }
}
