use glam::Vec3;

use super::core::CameraPose;
use super::orbit::OrbitState;

/// Which fixed view, if any, the camera is currently parked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewOverlay {
    /// Regular navigation.
    #[default]
    None,
    /// Straight down from above the bus.
    BirdsEye,
    /// Standing at the front of the passenger cabin.
    Interior,
    /// Seated in the driver's seat.
    Driver,
}

/// How the free-flight controls move the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Keyboard-driven translation and rotation.
    #[default]
    FreeFlight,
    /// Cursor-driven orbit around the bus.
    Orbit,
}

impl ViewOverlay {
    /// Position, pitch and yaw of the overlay's fixed pose.
    #[must_use]
    pub fn fixed_pose(self) -> Option<(Vec3, f32, f32)> {
        match self {
            Self::None => None,
            Self::BirdsEye => Some((Vec3::new(0.0, 20.0, 0.0), -89.0, -90.0)),
            Self::Interior => Some((Vec3::new(-3.7, 0.55, 0.0), 0.0, 0.0)),
            Self::Driver => Some((Vec3::new(-1.2, 0.3, 0.0), 0.0, -180.0)),
        }
    }

    /// Whether the bus interior replaces the exterior while this overlay
    /// is active.
    #[must_use]
    pub fn shows_interior(self) -> bool {
        matches!(self, Self::Interior | Self::Driver)
    }

    /// Human-readable name used in log output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Free view",
            Self::BirdsEye => "Bird's eye view",
            Self::Interior => "Interior view",
            Self::Driver => "Driver view",
        }
    }
}

/// Everything needed to put the camera back where it was before an
/// overlay was entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSnapshot {
    /// Pose at the moment of saving.
    pub pose: CameraPose,
    /// Navigation mode at the moment of saving.
    pub mode: NavigationMode,
    /// Orbit parameters at the moment of saving.
    pub orbit: OrbitState,
}
