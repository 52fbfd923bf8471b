use glam::{Mat4, Vec3};

use super::mesh::MeshData;

/// A shape placed in bus-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Box of `size` centered at `center`.
    Cuboid {
        /// Center in bus space.
        center: Vec3,
        /// Edge lengths.
        size: Vec3,
        /// Flat color.
        color: Vec3,
    },
    /// Wheel-like cylinder whose axis runs across the bus (world Z).
    Cylinder {
        /// Center in bus space.
        center: Vec3,
        /// Radius.
        radius: f32,
        /// Length along the axis.
        height: f32,
        /// Flat color.
        color: Vec3,
    },
    /// Spokes and hub on both faces of a wheel.
    SpokeFan {
        /// Center in bus space.
        center: Vec3,
        /// Radius of the wheel the spokes sit in.
        radius: f32,
        /// Width of that wheel.
        height: f32,
        /// Number of spokes.
        spokes: u32,
    },
}

impl Primitive {
    /// Shorthand for a cuboid.
    #[must_use]
    pub const fn cuboid(center: Vec3, size: Vec3, color: Vec3) -> Self {
        Self::Cuboid {
            center,
            size,
            color,
        }
    }

    /// Shorthand for a cylinder.
    #[must_use]
    pub const fn cylinder(center: Vec3, radius: f32, height: f32, color: Vec3) -> Self {
        Self::Cylinder {
            center,
            radius,
            height,
            color,
        }
    }

    /// Build the mesh for this primitive. Cuboids use a unit cube and get
    /// their size from the model transform; round shapes bake their
    /// dimensions into the vertices.
    #[must_use]
    pub fn mesh(&self) -> MeshData {
        match *self {
            Self::Cuboid { color, .. } => MeshData::unit_cube(color),
            Self::Cylinder {
                radius,
                height,
                color,
                ..
            } => MeshData::cylinder(radius, height, color),
            Self::SpokeFan {
                radius,
                height,
                spokes,
                ..
            } => MeshData::spoke_fan(radius, height, spokes),
        }
    }

    /// Bus-local transform. `spin` (degrees) only affects round shapes.
    #[must_use]
    pub fn local_transform(&self, spin: f32) -> Mat4 {
        match *self {
            Self::Cuboid { center, size, .. } => {
                Mat4::from_translation(center) * Mat4::from_scale(size)
            }
            Self::Cylinder { center, .. } | Self::SpokeFan { center, .. } => {
                Mat4::from_translation(center)
                    * Mat4::from_rotation_z(90.0_f32.to_radians())
                    * Mat4::from_rotation_z(spin.to_radians())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_transform_scales_unit_cube() {
        let p = Primitive::cuboid(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0), Vec3::ONE);
        let m = p.local_transform(45.0);
        let corner = m.transform_point3(Vec3::splat(0.5));
        assert!((corner - Vec3::new(2.0, 4.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn cylinder_spin_keeps_axis() {
        let p = Primitive::cylinder(Vec3::new(-3.1, -1.0, 1.0), 0.4, 0.2, Vec3::ZERO);
        let axis = p.local_transform(73.0).transform_vector3(Vec3::Z);
        assert!((axis - Vec3::Z).length() < 1e-5);
        let center = p.local_transform(73.0).transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new(-3.1, -1.0, 1.0)).length() < 1e-5);
    }
}
