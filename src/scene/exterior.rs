//! Exterior of the bus: body shell, windows, lights, doors and wheels.

use glam::Vec3;

use super::primitive::Primitive;
use super::{PrimitiveId, SceneBuilder};

type CuboidRow = ([f32; 3], [f32; 3], [f32; 3]);

const MAROON: [f32; 3] = [0.45, 0.10, 0.18];
const BLACK: [f32; 3] = [0.1, 0.1, 0.1];
const GLASS: [f32; 3] = [0.5, 0.65, 0.75];
const SIDE_GLASS: [f32; 3] = [0.4, 0.5, 0.6];

#[rustfmt::skip]
const SHELL: &[CuboidRow] = &[
    ([0.5, 0.0, 0.0], [8.0, 2.0, 2.0], [0.96, 0.95, 0.92]),
    ([-0.3, 0.03, 1.01], [5.2, 0.1, 0.03], MAROON),
    ([0.5, 0.03, 1.01], [5.2, 0.1, 0.03], MAROON),
    ([1.9, 0.03, 1.01], [5.2, 0.1, 0.03], MAROON),
    ([0.5, -0.15, -1.02], [8.05, 0.12, 0.03], MAROON),
    ([0.5, 1.0, 0.0], [8.0, 0.1, 1.8], [1.0, 1.0, 1.0]),
    ([0.5, -0.65, 0.0], [8.2, 0.7, 2.0], MAROON),
    ([-3.7, -0.4, 0.0], [0.1, 0.8, 2.0], MAROON),
    ([-3.75, -0.45, 0.0], [0.05, 0.5, 1.8], BLACK),
    ([-3.8, -0.15, 0.0], [0.02, 0.1, 1.8], [1.0, 1.0, 1.0]),
];

#[rustfmt::skip]
const DRIVER_WINDOWS: &[CuboidRow] = &[
    ([-3.2, 0.3, 1.05], [0.4, 0.6, 0.02], GLASS),
    ([-3.2, 0.3, 1.06], [0.42, 0.62, 0.01], BLACK),
    ([-3.2, 0.3, 1.07], [0.02, 0.6, 0.015], BLACK),
    ([-3.2, 0.3, -1.05], [0.4, 0.6, 0.02], GLASS),
    ([-3.2, 0.3, -1.06], [0.42, 0.62, 0.01], BLACK),
    ([-3.2, 0.3, -1.07], [0.02, 0.6, 0.015], BLACK),
];

#[rustfmt::skip]
const MIRRORS: &[CuboidRow] = &[
    ([-3.5, 0.2, 1.15], [0.05, 0.05, 0.15], BLACK),
    ([-3.45, 0.2, 1.28], [0.15, 0.25, 0.05], [0.7, 0.8, 0.9]),
    ([-3.5, 0.2, 1.25], [0.18, 0.28, 0.08], BLACK),
    ([-3.5, 0.2, -1.15], [0.05, 0.05, 0.15], BLACK),
    ([-3.45, 0.2, -1.28], [0.15, 0.25, 0.05], [0.7, 0.8, 0.9]),
    ([-3.5, 0.2, -1.25], [0.18, 0.28, 0.08], BLACK),
];

#[rustfmt::skip]
const DOOR_FRAMES: &[CuboidRow] = &[
    ([-2.0, -0.3, 1.05], [0.9, 1.4, 0.03], [0.2, 0.2, 0.2]),
    ([2.9, -0.3, 1.05], [0.9, 1.4, 0.03], [0.2, 0.2, 0.2]),
];

#[rustfmt::skip]
const WINDSHIELD: &[CuboidRow] = &[
    ([-3.6, 0.3, 0.0], [0.15, 0.8, 1.9], GLASS),
    ([-3.59, 0.3, 0.0], [0.14, 0.82, 1.92], BLACK),
    ([-3.58, 0.3, 0.0], [0.13, 0.8, 0.03], BLACK),
];

#[rustfmt::skip]
const REAR_AND_BOTTOM: &[CuboidRow] = &[
    ([4.55, 0.4, -0.45], [0.02, 0.7, 0.7], SIDE_GLASS),
    ([4.55, 0.4, 0.45], [0.02, 0.7, 0.7], SIDE_GLASS),
    ([-3.8, -0.9, 0.0], [0.02, 0.2, 2.0], BLACK),
    ([4.6, -0.9, 0.0], [0.02, 0.2, 2.0], BLACK),
];

/// X positions of the passenger windows along each side.
const PASSENGER_WINDOW_X: [f32; 5] = [-1.1, -0.1, 0.9, 1.8, 3.8];

/// Axle X positions; every axle has a wheel on each side.
const AXLE_X: [f32; 4] = [-3.1, -0.5, 2.0, 3.8];
const AXLE_Y: f32 = -1.0;
const WHEEL_Z: [f32; 2] = [1.0, -1.0];

/// Light cuboids: (center, headlight?).
const LIGHTS: [([f32; 3], bool); 4] = [
    ([-3.82, -0.6, 0.7], true),
    ([-3.82, -0.6, -0.7], true),
    ([4.62, -0.6, 0.7], false),
    ([4.62, -0.6, -0.7], false),
];
const LIGHT_SIZE: [f32; 3] = [0.02, 0.2, 0.4];
const HEADLIGHT_ON: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const HEADLIGHT_OFF: Vec3 = Vec3::new(0.1, 0.1, 0.1);
const TAILLIGHT_ON: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const TAILLIGHT_OFF: Vec3 = Vec3::new(0.1, 0.0, 0.0);

/// Door panel centers and which way each panel slides (-1 toward the
/// front, +1 toward the rear).
pub(super) const DOOR_PANELS: [(f32, f32); 4] = [
    (-2.225, -1.0),
    (-1.775, 1.0),
    (2.675, -1.0),
    (3.125, 1.0),
];

/// Handles to the exterior primitive groups.
#[derive(Debug, Clone, Default)]
pub(super) struct Exterior {
    pub(super) body: Vec<PrimitiveId>,
    pub(super) lights_on: Vec<PrimitiveId>,
    pub(super) lights_off: Vec<PrimitiveId>,
    pub(super) wheels: Vec<PrimitiveId>,
    pub(super) doors: Vec<(f32, Vec<PrimitiveId>)>,
}

fn add_rows(builder: &mut SceneBuilder, rows: &[CuboidRow], into: &mut Vec<PrimitiveId>) {
    for &(center, size, color) in rows {
        into.push(builder.add(Primitive::cuboid(
            Vec3::from_array(center),
            Vec3::from_array(size),
            Vec3::from_array(color),
        )));
    }
}

fn cuboid(builder: &mut SceneBuilder, center: Vec3, size: Vec3, color: Vec3) -> PrimitiveId {
    builder.add(Primitive::cuboid(center, size, color))
}

pub(super) fn build(builder: &mut SceneBuilder) -> Exterior {
    let mut ext = Exterior::default();

    add_rows(builder, SHELL, &mut ext.body);
    add_rows(builder, DRIVER_WINDOWS, &mut ext.body);
    add_rows(builder, MIRRORS, &mut ext.body);
    add_rows(builder, DOOR_FRAMES, &mut ext.body);
    add_passenger_windows(builder, &mut ext.body);
    add_rows(builder, WINDSHIELD, &mut ext.body);
    add_rows(builder, REAR_AND_BOTTOM, &mut ext.body);

    for (center, headlight) in LIGHTS {
        let (on, off) = if headlight {
            (HEADLIGHT_ON, HEADLIGHT_OFF)
        } else {
            (TAILLIGHT_ON, TAILLIGHT_OFF)
        };
        let (center, size) = (Vec3::from_array(center), Vec3::from_array(LIGHT_SIZE));
        ext.lights_on.push(cuboid(builder, center, size, on));
        ext.lights_off.push(cuboid(builder, center, size, off));
    }

    for (x, direction) in DOOR_PANELS {
        ext.doors.push((direction, door_panel(builder, x, direction < 0.0)));
    }

    for x in AXLE_X {
        for z in WHEEL_Z {
            let center = Vec3::new(x, AXLE_Y, z);
            ext.wheels
                .push(builder.add(Primitive::cylinder(center, 0.4, 0.2, Vec3::splat(0.1))));
            ext.wheels
                .push(builder.add(Primitive::cylinder(center, 0.25, 0.22, Vec3::splat(0.5))));
            ext.wheels.push(builder.add(Primitive::SpokeFan {
                center,
                radius: 0.25,
                height: 0.22,
                spokes: 6,
            }));
        }
    }

    ext
}

fn add_passenger_windows(builder: &mut SceneBuilder, into: &mut Vec<PrimitiveId>) {
    let border = Vec3::from_array(BLACK);
    let glass = Vec3::from_array(SIDE_GLASS);
    for x in PASSENGER_WINDOW_X {
        for side in [1.0_f32, -1.0] {
            let z = |d: f32| side * d;
            into.push(cuboid(builder, Vec3::new(x, 0.5, z(1.05)), Vec3::new(0.5, 0.5, 0.02), glass));
            into.push(cuboid(builder, Vec3::new(x, 0.5, z(1.06)), Vec3::new(0.52, 0.52, 0.01), border));
            into.push(cuboid(builder, Vec3::new(x, 0.5, z(1.07)), Vec3::new(0.02, 0.5, 0.015), border));
            into.push(cuboid(builder, Vec3::new(x, 0.5, z(1.07)), Vec3::new(0.5, 0.02, 0.015), border));
        }
    }
}

/// Panel, window and handle of one sliding door leaf. The handle sits on
/// the edge away from the other leaf.
fn door_panel(builder: &mut SceneBuilder, x: f32, leading: bool) -> Vec<PrimitiveId> {
    let handle_x = if leading { x - 0.15 } else { x + 0.15 };
    vec![
        cuboid(builder, Vec3::new(x, -0.3, 1.06), Vec3::new(0.42, 1.2, 0.02), Vec3::splat(0.3)),
        cuboid(builder, Vec3::new(x, 0.0, 1.07), Vec3::new(0.32, 0.6, 0.01), Vec3::new(0.5, 0.7, 0.85)),
        cuboid(
            builder,
            Vec3::new(handle_x, -0.3, 1.075),
            Vec3::new(0.05, 0.15, 0.02),
            Vec3::new(0.8, 0.7, 0.2),
        ),
    ]
}
