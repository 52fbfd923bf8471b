//! Scene assembly: the fixed set of primitives that make up the bus and
//! how bus state turns into per-primitive model matrices.
//!
//! Every primitive is registered once in a [`BusScene`] and referred to by
//! [`PrimitiveId`]. Drawing walks the groups that are visible for the
//! current view and hands each id with its model matrix to a
//! [`PrimitiveRenderer`].

mod exterior;
mod interior;
/// Mesh generation for primitives.
pub mod mesh;
/// Primitive shapes and their local transforms.
pub mod primitive;

use glam::{Mat4, Vec3};
pub use mesh::{MeshData, Vertex};
pub use primitive::Primitive;

use crate::bus::BusState;
use crate::renderer::PrimitiveRenderer;

/// Default distance a door leaf slides when fully open.
pub const DEFAULT_DOOR_SLIDE: f32 = 0.45;

/// Index of a primitive within a [`BusScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u32);

/// Collects primitives and hands out their ids.
#[derive(Debug, Default)]
pub(crate) struct SceneBuilder {
    primitives: Vec<Primitive>,
}

impl SceneBuilder {
    pub(crate) fn add(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = PrimitiveId(self.primitives.len() as u32);
        self.primitives.push(primitive);
        id
    }
}

/// One sliding door leaf.
#[derive(Debug, Clone)]
struct DoorLeaf {
    /// -1 slides toward the front, +1 toward the rear.
    direction: f32,
    parts: Vec<PrimitiveId>,
}

/// The complete bus model, exterior and interior.
#[derive(Debug, Clone)]
pub struct BusScene {
    primitives: Vec<Primitive>,
    body: Vec<PrimitiveId>,
    lights_on: Vec<PrimitiveId>,
    lights_off: Vec<PrimitiveId>,
    wheels: Vec<PrimitiveId>,
    doors: Vec<DoorLeaf>,
    interior: Vec<PrimitiveId>,
    door_slide: f32,
}

impl Default for BusScene {
    fn default() -> Self {
        Self::new(DEFAULT_DOOR_SLIDE)
    }
}

impl BusScene {
    /// Assemble the bus. `door_slide` is how far a door leaf travels when
    /// fully open.
    #[must_use]
    pub fn new(door_slide: f32) -> Self {
        let mut builder = SceneBuilder::default();
        let ext = exterior::build(&mut builder);
        let interior = interior::build(&mut builder);

        let scene = Self {
            primitives: builder.primitives,
            body: ext.body,
            lights_on: ext.lights_on,
            lights_off: ext.lights_off,
            wheels: ext.wheels,
            doors: ext
                .doors
                .into_iter()
                .map(|(direction, parts)| DoorLeaf { direction, parts })
                .collect(),
            interior,
            door_slide,
        };
        log::debug!(
            "Assembled bus scene: {} primitives ({} body, {} wheel, {} interior)",
            scene.primitives.len(),
            scene.body.len(),
            scene.wheels.len(),
            scene.interior.len()
        );
        scene
    }

    /// All primitives, indexed by [`PrimitiveId`].
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Look up one primitive.
    #[must_use]
    pub fn primitive(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(id.0 as usize)
    }

    /// Number of primitives drawn for the interior.
    #[must_use]
    pub fn interior_len(&self) -> usize {
        self.interior.len()
    }

    /// Issue one draw per visible primitive.
    ///
    /// With `show_interior` only the cabin is drawn; otherwise the exterior
    /// with its lights in the current state, spinning wheels and doors slid
    /// by the current door offset.
    pub fn draw<R: PrimitiveRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        bus: &BusState,
        show_interior: bool,
    ) {
        let base = Mat4::from_translation(Vec3::new(bus.position, 0.0, 0.0));

        if show_interior {
            self.draw_group(renderer, &self.interior, base, 0.0);
            return;
        }

        self.draw_group(renderer, &self.body, base, 0.0);
        let lights = if bus.lights_on {
            &self.lights_on
        } else {
            &self.lights_off
        };
        self.draw_group(renderer, lights, base, 0.0);
        self.draw_group(renderer, &self.wheels, base, bus.wheel_rotation);

        let slide = bus.doors.offset() * self.door_slide;
        for leaf in &self.doors {
            let shifted = base * Mat4::from_translation(Vec3::X * leaf.direction * slide);
            self.draw_group(renderer, &leaf.parts, shifted, 0.0);
        }
    }

    fn draw_group<R: PrimitiveRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        ids: &[PrimitiveId],
        base: Mat4,
        spin: f32,
    ) {
        for &id in ids {
            if let Some(primitive) = self.primitive(id) {
                renderer.draw(id, base * primitive.local_transform(spin));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingRenderer;

    #[test]
    fn assembles_expected_counts() {
        let scene = BusScene::default();
        assert_eq!(scene.body.len(), 71);
        assert_eq!(scene.lights_on.len(), 4);
        assert_eq!(scene.lights_off.len(), 4);
        assert_eq!(scene.wheels.len(), 24);
        assert_eq!(scene.doors.len(), 4);
        assert_eq!(scene.interior_len(), 191);
        assert_eq!(scene.primitives().len(), 71 + 8 + 24 + 12 + 191);
    }

    #[test]
    fn exterior_draw_uses_light_state() {
        let scene = BusScene::default();
        let mut bus = BusState::default();
        let mut rec = RecordingRenderer::default();
        scene.draw(&mut rec, &bus, false);
        assert_eq!(rec.calls.len(), 71 + 4 + 24 + 12);
        assert!(rec.calls.iter().any(|(id, _)| *id == scene.lights_on[0]));

        bus.toggle_lights();
        rec.calls.clear();
        scene.draw(&mut rec, &bus, false);
        assert!(rec.calls.iter().any(|(id, _)| *id == scene.lights_off[0]));
        assert!(!rec.calls.iter().any(|(id, _)| *id == scene.lights_on[0]));
    }

    #[test]
    fn interior_replaces_exterior() {
        let scene = BusScene::default();
        let mut rec = RecordingRenderer::default();
        scene.draw(&mut rec, &BusState::default(), true);
        assert_eq!(rec.calls.len(), 191);
    }

    #[test]
    fn doors_slide_apart() {
        let scene = BusScene::default();
        let mut bus = BusState::new(1.0);
        bus.open_doors();
        let _ = bus.update();

        let mut rec = RecordingRenderer::default();
        scene.draw(&mut rec, &bus, false);
        let front_left = scene.doors[0].parts[0];
        let front_right = scene.doors[1].parts[0];
        let x_of = |id| {
            rec.calls
                .iter()
                .find(|(c, _)| *c == id)
                .map(|(_, m)| m.w_axis.x)
                .unwrap()
        };
        assert!((x_of(front_left) - (-2.225 - 0.45)).abs() < 1e-5);
        assert!((x_of(front_right) - (-1.775 + 0.45)).abs() < 1e-5);
    }

    #[test]
    fn bus_position_translates_everything() {
        let scene = BusScene::default();
        let mut bus = BusState::default();
        bus.drive(-2.0);
        let mut rec = RecordingRenderer::default();
        scene.draw(&mut rec, &bus, false);
        let (id, model) = rec.calls[0];
        assert_eq!(id, PrimitiveId(0));
        assert!((model.w_axis.x - (0.5 - 2.0)).abs() < 1e-5);
    }
}
