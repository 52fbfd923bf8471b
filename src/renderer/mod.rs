//! Drawing primitives.
//!
//! [`PrimitiveRenderer`] is the only thing the scene needs from a renderer.
//! [`SceneRenderer`] implements it on wgpu; [`RecordingRenderer`] just keeps
//! the calls, for headless use and tests.

mod mesh;
pub(crate) mod pipeline_util;
/// wgpu implementation of [`PrimitiveRenderer`].
pub mod scene_renderer;

use glam::Mat4;
pub use scene_renderer::SceneRenderer;

use crate::scene::PrimitiveId;

/// Draws one registered primitive with a model transform.
pub trait PrimitiveRenderer {
    /// Queue `primitive` for drawing with the given model matrix.
    fn draw(&mut self, primitive: PrimitiveId, model: Mat4);
}

/// Renderer that records every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Draw calls since the last clear.
    pub calls: Vec<(PrimitiveId, Mat4)>,
}

impl PrimitiveRenderer for RecordingRenderer {
    fn draw(&mut self, primitive: PrimitiveId, model: Mat4) {
        self.calls.push((primitive, model));
    }
}
