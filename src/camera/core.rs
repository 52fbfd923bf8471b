use glam::{Mat4, Vec3};

/// World up direction. Vertical movement and orbit basis are built from it.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Position, orientation angles and field of view of the camera.
///
/// Angles are stored in degrees. `yaw = -90` with `pitch = 0` looks down
/// the negative Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Rotation around the world Y axis, in degrees.
    pub yaw: f32,
    /// Elevation above the horizon, in degrees.
    pub pitch: f32,
    /// Rotation around the view direction, in degrees.
    pub roll: f32,
    /// Vertical field of view, in degrees.
    pub fov: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 15.0),
            yaw: -90.0,
            pitch: 0.0,
            roll: 0.0,
            fov: 45.0,
        }
    }
}

impl CameraPose {
    /// Unit view direction for the stored yaw and pitch.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize()
    }
}

/// Orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// View direction.
    pub front: Vec3,
    /// Camera-space +X.
    pub right: Vec3,
    /// Camera-space +Y.
    pub up: Vec3,
}

impl Basis {
    /// Frame looking along `front` with world-up as the reference.
    #[must_use]
    pub fn looking(front: Vec3) -> Self {
        let front = front.normalize();
        let right = front.cross(WORLD_UP).normalize();
        let up = right.cross(front).normalize();
        Self { front, right, up }
    }

    /// Free-flight frame for a pose, with roll applied around `front`.
    #[must_use]
    pub fn from_pose(pose: &CameraPose) -> Self {
        let mut basis = Self::looking(pose.front());
        if pose.roll != 0.0 {
            let roll =
                Mat4::from_axis_angle(basis.front, pose.roll.to_radians());
            basis.up = roll.transform_vector3(basis.up);
            basis.right = basis.front.cross(basis.up).normalize();
        }
        basis
    }

    /// Yaw and pitch (degrees) that reproduce `front` in free-flight.
    #[must_use]
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let yaw = self.front.z.atan2(self.front.x).to_degrees();
        let pitch = self.front.y.clamp(-1.0, 1.0).asin().to_degrees();
        (yaw, pitch)
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 800.0 / 600.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Projection {
    /// Build the projection matrix for a vertical field of view in degrees.
    #[must_use]
    pub fn matrix(&self, fov: f32) -> Mat4 {
        // perspective_rh uses the [0,1] depth range wgpu expects
        Mat4::perspective_rh(fov.to_radians(), self.aspect, self.znear, self.zfar)
    }
}

/// Wrap an angle in degrees into `(-360, 360]`.
#[must_use]
pub fn wrap_signed_degrees(mut degrees: f32) -> f32 {
    while degrees > 360.0 {
        degrees -= 360.0;
    }
    while degrees <= -360.0 {
        degrees += 360.0;
    }
    degrees
}

/// Wrap an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_positive_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_looks_down_negative_z() {
        let front = CameraPose::default().front();
        assert!((front - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn basis_is_orthonormal_with_roll() {
        let pose = CameraPose {
            roll: 33.0,
            pitch: 20.0,
            ..CameraPose::default()
        };
        let b = Basis::from_pose(&pose);
        assert!((b.front.length() - 1.0).abs() < 1e-5);
        assert!((b.right.length() - 1.0).abs() < 1e-5);
        assert!((b.up.length() - 1.0).abs() < 1e-5);
        assert!(b.front.dot(b.right).abs() < 1e-5);
        assert!(b.front.dot(b.up).abs() < 1e-5);
    }

    #[test]
    fn yaw_pitch_recovers_pose_angles() {
        let pose = CameraPose {
            yaw: 30.0,
            pitch: -40.0,
            ..CameraPose::default()
        };
        let (yaw, pitch) = Basis::from_pose(&pose).yaw_pitch();
        assert!((yaw - 30.0).abs() < 1e-3);
        assert!((pitch + 40.0).abs() < 1e-3);
    }

    #[test]
    fn signed_wrap_keeps_half_open_range() {
        assert_eq!(wrap_signed_degrees(360.0), 360.0);
        assert_eq!(wrap_signed_degrees(361.0), 1.0);
        assert_eq!(wrap_signed_degrees(-360.0), 0.0);
        assert_eq!(wrap_signed_degrees(-725.0), -5.0);
    }

    #[test]
    fn positive_wrap() {
        assert_eq!(wrap_positive_degrees(360.0), 0.0);
        assert_eq!(wrap_positive_degrees(-10.0), 350.0);
        assert_eq!(wrap_positive_degrees(725.0), 5.0);
    }
}
