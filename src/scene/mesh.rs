//! CPU-side mesh generation for the scene primitives.
//!
//! Color is baked into every vertex, so a mesh is immutable once built and
//! only the model matrix changes per draw.

use std::f32::consts::TAU;

use glam::Vec3;

/// Segments around a cylinder.
pub const CYLINDER_SEGMENTS: u32 = 30;
/// Segments around a spoke-fan hub.
pub const HUB_SEGMENTS: u32 = 20;
/// Spoke color.
pub const SPOKE_COLOR: Vec3 = Vec3::ONE;
/// Hub color.
pub const HUB_COLOR: Vec3 = Vec3::splat(0.7);

/// Per-vertex data uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex array.
    pub vertices: Vec<Vertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unit cube centered at the origin.
    #[must_use]
    pub fn unit_cube(color: Vec3) -> Self {
        let corners = [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ];
        #[rustfmt::skip]
        let indices = vec![
            4, 5, 6, 4, 6, 7, // front
            1, 0, 3, 1, 3, 2, // back
            0, 4, 7, 0, 7, 3, // left
            5, 1, 2, 5, 2, 6, // right
            7, 6, 2, 7, 2, 3, // top
            0, 1, 5, 0, 5, 4, // bottom
        ];
        Self {
            vertices: corners.iter().map(|&p| Vertex::new(p, color)).collect(),
            indices,
        }
    }

    /// Capped cylinder along the local Z axis, centered at the origin.
    #[must_use]
    pub fn cylinder(radius: f32, height: f32, color: Vec3) -> Self {
        let n = CYLINDER_SEGMENTS;
        let half = height / 2.0;
        let mut vertices = Vec::with_capacity(2 + 2 * n as usize);
        vertices.push(Vertex::new(Vec3::new(0.0, 0.0, half), color));
        vertices.push(Vertex::new(Vec3::new(0.0, 0.0, -half), color));
        for z in [half, -half] {
            for i in 0..n {
                let theta = i as f32 / n as f32 * TAU;
                let p = Vec3::new(radius * theta.cos(), radius * theta.sin(), z);
                vertices.push(Vertex::new(p, color));
            }
        }

        let mut indices = Vec::with_capacity(12 * n as usize);
        for i in 0..n {
            let top = 2 + i;
            let top_next = 2 + (i + 1) % n;
            let bottom = 2 + n + i;
            let bottom_next = 2 + n + (i + 1) % n;
            indices.extend_from_slice(&[top, bottom, top_next]);
            indices.extend_from_slice(&[bottom, bottom_next, top_next]);
        }
        for i in 0..n {
            indices.extend_from_slice(&[0, 2 + i, 2 + (i + 1) % n]);
        }
        for i in 0..n {
            indices.extend_from_slice(&[1, 2 + n + (i + 1) % n, 2 + n + i]);
        }

        Self { vertices, indices }
    }

    /// Wedge-shaped spokes and a small hub, drawn just outside both faces
    /// of a wheel of the given radius and width.
    #[must_use]
    pub fn spoke_fan(radius: f32, height: f32, spokes: u32) -> Self {
        let mut mesh = Self::default();
        let face = height / 2.0 + 0.01;
        let reach = radius * 0.7;
        let spoke_width = TAU / spokes.max(1) as f32 * 0.3;
        let rim = |angle: f32, r: f32, z: f32| Vec3::new(r * angle.cos(), r * angle.sin(), z);

        for z in [face, -face] {
            for i in 0..spokes {
                let angle = i as f32 / spokes as f32 * TAU;
                let (a, b) = (rim(angle, reach, z), rim(angle + spoke_width, reach, z));
                // Wind the back face the other way round
                let (a, b) = if z > 0.0 { (a, b) } else { (b, a) };
                mesh.push_triangle([Vec3::new(0.0, 0.0, z), a, b], SPOKE_COLOR);
            }
        }

        let hub = radius * 0.15;
        for i in 0..HUB_SEGMENTS {
            let t1 = i as f32 / HUB_SEGMENTS as f32 * TAU;
            let t2 = (i + 1) as f32 / HUB_SEGMENTS as f32 * TAU;
            mesh.push_triangle(
                [Vec3::new(0.0, 0.0, face), rim(t1, hub, face), rim(t2, hub, face)],
                HUB_COLOR,
            );
            mesh.push_triangle(
                [Vec3::new(0.0, 0.0, -face), rim(t2, hub, -face), rim(t1, hub, -face)],
                HUB_COLOR,
            );
        }
        mesh
    }

    fn push_triangle(&mut self, corners: [Vec3; 3], color: Vec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(corners.iter().map(|&p| Vertex::new(p, color)));
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_in_range(mesh: &MeshData) -> bool {
        mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len())
    }

    #[test]
    fn cube_has_twelve_triangles() {
        let mesh = MeshData::unit_cube(Vec3::X);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(indices_in_range(&mesh));
        assert!(mesh.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn cylinder_sides_and_caps() {
        let mesh = MeshData::cylinder(0.4, 0.2, Vec3::splat(0.1));
        assert_eq!(mesh.vertices.len(), 62);
        assert_eq!(mesh.triangle_count(), 120);
        assert!(indices_in_range(&mesh));
        for v in &mesh.vertices[2..] {
            let r = v.position[0].hypot(v.position[1]);
            assert!((r - 0.4).abs() < 1e-5);
            assert!((v.position[2].abs() - 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn spoke_fan_counts() {
        let mesh = MeshData::spoke_fan(0.25, 0.22, 6);
        // 6 spokes per face plus 20 hub wedges per face
        assert_eq!(mesh.triangle_count(), 12 + 40);
        assert!(indices_in_range(&mesh));
        let max_r = mesh
            .vertices
            .iter()
            .map(|v| v.position[0].hypot(v.position[1]))
            .fold(0.0_f32, f32::max);
        assert!((max_r - 0.25 * 0.7).abs() < 1e-5);
    }
}
