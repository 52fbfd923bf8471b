//! Passenger cabin and driver cockpit, shown from the inside views.

use glam::Vec3;

use super::primitive::Primitive;
use super::{PrimitiveId, SceneBuilder};

const FLOOR_Y: f32 = -0.2;
const GOLD: Vec3 = Vec3::new(0.95, 0.75, 0.15);
const DARK_GRAY: Vec3 = Vec3::splat(0.25);
const LIGHT_GRAY: Vec3 = Vec3::splat(0.6);
const BLACK: Vec3 = Vec3::splat(0.1);
const CHROME: Vec3 = Vec3::new(0.8, 0.8, 0.85);
const SEAT_FABRIC: Vec3 = Vec3::new(0.35, 0.35, 0.4);
const SEAT_CUSHION: Vec3 = Vec3::new(0.4, 0.4, 0.45);

/// Passenger seat rows run from the front door to the rear door.
const SEAT_ROWS: u32 = 7;
const SEAT_START_X: f32 = -1.3;
const SEAT_END_X: f32 = 2.2;
const SEAT_COLUMNS_Z: [f32; 2] = [-0.55, 0.55];

const BUTTON_COLORS: [Vec3; 6] = [
    Vec3::new(1.0, 0.5, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.5, 1.0),
    Vec3::new(1.0, 0.8, 0.0),
];

struct Parts<'a> {
    builder: &'a mut SceneBuilder,
    ids: Vec<PrimitiveId>,
}

impl Parts<'_> {
    fn cube(&mut self, center: Vec3, size: Vec3, color: Vec3) {
        self.ids.push(self.builder.add(Primitive::cuboid(center, size, color)));
    }
}

pub(super) fn build(builder: &mut SceneBuilder) -> Vec<PrimitiveId> {
    let mut parts = Parts {
        builder,
        ids: Vec::new(),
    };
    shell(&mut parts);
    handrails(&mut parts);

    let spacing = (SEAT_END_X - SEAT_START_X) / (SEAT_ROWS - 1) as f32;
    for row in 0..SEAT_ROWS {
        let x = SEAT_START_X + row as f32 * spacing;
        for z in SEAT_COLUMNS_Z {
            passenger_seat(&mut parts, x, z);
        }
    }

    driver_seat(&mut parts);
    dashboard(&mut parts);
    cockpit_trim(&mut parts);
    parts.ids
}

fn shell(p: &mut Parts<'_>) {
    p.cube(Vec3::new(0.5, FLOOR_Y, 0.0), Vec3::new(7.8, 0.05, 1.8), Vec3::new(0.2, 0.3, 0.6));
    p.cube(Vec3::new(0.5, 0.95, 0.0), Vec3::new(7.8, 0.05, 1.8), Vec3::splat(0.85));
    for x in [-2.0, -0.5, 1.0, 2.5] {
        p.cube(Vec3::new(x, 0.92, 0.0), Vec3::new(0.6, 0.02, 0.4), Vec3::new(1.0, 1.0, 0.9));
    }
    for z in [-0.95, 0.95] {
        p.cube(Vec3::new(0.5, 0.0, z), Vec3::new(7.8, 1.8, 0.05), Vec3::splat(0.9));
    }
}

fn handrails(p: &mut Parts<'_>) {
    for x in [-2.5, -1.0, 0.5, 2.0, 3.5] {
        p.cube(Vec3::new(x, 0.35, 0.0), Vec3::new(0.04, 1.1, 0.04), GOLD);
    }
    for z in [-0.3, 0.3] {
        p.cube(Vec3::new(0.5, 0.85, z), Vec3::new(7.5, 0.03, 0.03), GOLD);
    }
}

/// Forward-facing seat with its back toward +X.
fn passenger_seat(p: &mut Parts<'_>, x: f32, z: f32) {
    let seat = Vec3::new(0.85, 0.4, 0.2);
    let cushion = Vec3::new(0.9, 0.45, 0.25);
    let frame = Vec3::splat(0.7);
    let (width, depth, height, back_height) = (0.4, 0.4, 0.3, 0.45);
    let base_y = FLOOR_Y + 0.05;
    let back_x = x + depth / 2.5;

    p.cube(Vec3::new(x, base_y + height / 2.0, z), Vec3::new(depth, 0.08, width), seat);
    p.cube(
        Vec3::new(x, base_y + height / 2.0 + 0.05, z),
        Vec3::new(depth - 0.04, 0.06, width - 0.04),
        cushion,
    );
    p.cube(
        Vec3::new(back_x, base_y + height + back_height / 2.0, z),
        Vec3::new(0.08, back_height, width),
        seat,
    );
    p.cube(
        Vec3::new(back_x - 0.02, base_y + height + back_height / 2.0, z),
        Vec3::new(0.06, back_height - 0.08, width - 0.04),
        cushion,
    );

    for dx in [-depth / 3.0, depth / 3.0] {
        for dz in [-width / 3.0, width / 3.0] {
            p.cube(
                Vec3::new(x + dx, base_y + height / 4.0, z + dz),
                Vec3::new(0.04, height / 2.0, 0.04),
                frame,
            );
        }
    }

    for side in [-1.0, 1.0] {
        p.cube(
            Vec3::new(x, base_y + height + 0.1, z + side * (width / 2.0 + 0.03)),
            Vec3::new(depth - 0.1, 0.04, 0.06),
            frame,
        );
    }
}

const DRIVER_SEAT: Vec3 = Vec3::new(-3.3, FLOOR_Y + 0.25, 0.5);

fn driver_seat(p: &mut Parts<'_>) {
    let s = DRIVER_SEAT;
    p.cube(s, Vec3::new(0.35, 0.08, 0.4), SEAT_FABRIC);
    p.cube(s + Vec3::new(0.0, 0.05, 0.0), Vec3::new(0.33, 0.06, 0.38), SEAT_CUSHION);
    p.cube(s + Vec3::new(0.15, 0.25, 0.0), Vec3::new(0.08, 0.5, 0.4), SEAT_FABRIC);
    p.cube(s + Vec3::new(0.13, 0.25, 0.0), Vec3::new(0.06, 0.48, 0.38), SEAT_CUSHION);
    // headrest
    p.cube(s + Vec3::new(0.15, 0.55, 0.0), Vec3::new(0.08, 0.15, 0.25), SEAT_FABRIC);
    p.cube(s + Vec3::new(0.0, 0.15, 0.22), Vec3::new(0.25, 0.06, 0.08), DARK_GRAY);
    p.cube(s + Vec3::new(0.0, -0.15, 0.0), Vec3::new(0.38, 0.2, 0.43), BLACK);
}

fn dashboard(p: &mut Parts<'_>) {
    let (dash_x, dash_y) = (-3.65, 0.1);
    p.cube(Vec3::new(dash_x, dash_y, 0.0), Vec3::new(0.12, 0.4, 1.5), DARK_GRAY);
    p.cube(Vec3::new(dash_x + 0.05, dash_y + 0.25, 0.0), Vec3::new(0.15, 0.08, 1.5), BLACK);

    // Instrument cluster with two gauges
    let cluster = Vec3::new(dash_x + 0.08, dash_y + 0.1, 0.3);
    let display = Vec3::new(0.9, 0.9, 0.95);
    p.cube(cluster, Vec3::new(0.05, 0.25, 0.4), BLACK);
    for dy in [0.05, -0.05] {
        p.cube(cluster + Vec3::new(0.02, dy, 0.0), Vec3::new(0.02, 0.12, 0.12), display);
    }

    // Steering wheel
    let wheel = Vec3::new(-3.55, DRIVER_SEAT.y + 0.1, 0.45);
    p.cube(wheel + Vec3::new(0.1, -0.1, 0.0), Vec3::new(0.15, 0.05, 0.05), DARK_GRAY);
    p.cube(wheel, Vec3::new(0.03, 0.3, 0.3), BLACK);
    p.cube(wheel, Vec3::new(0.04, 0.12, 0.12), DARK_GRAY);
    for i in 0..3 {
        let angle = (i as f32 * 120.0).to_radians();
        p.cube(
            wheel + Vec3::new(0.0, 0.09 * angle.cos(), 0.09 * angle.sin()),
            Vec3::new(0.03, 0.08, 0.02),
            DARK_GRAY,
        );
    }

    // Control panel with a 3x2 button grid
    let panel = Vec3::new(dash_x + 0.05, dash_y - 0.05, -0.45);
    p.cube(panel, Vec3::new(0.08, 0.25, 0.35), DARK_GRAY);
    for row in 0..3 {
        for col in 0..2 {
            let color = BUTTON_COLORS[row * 2 + col];
            p.cube(
                Vec3::new(
                    panel.x + 0.04,
                    panel.y + 0.08 - row as f32 * 0.06,
                    panel.z - 0.08 + col as f32 * 0.08,
                ),
                Vec3::new(0.015, 0.04, 0.04),
                color,
            );
        }
    }
}

fn cockpit_trim(p: &mut Parts<'_>) {
    let s = DRIVER_SEAT;

    // Gear shifter
    let shifter = Vec3::new(s.x - 0.15, s.y + 0.05, s.z - 0.15);
    p.cube(shifter - Vec3::new(0.0, 0.08, 0.0), Vec3::new(0.08, 0.05, 0.12), BLACK);
    p.cube(shifter + Vec3::new(0.0, 0.05, 0.0), Vec3::new(0.02, 0.18, 0.02), CHROME);
    p.cube(shifter + Vec3::new(0.0, 0.15, 0.0), Vec3::new(0.04, 0.06, 0.04), BLACK);

    // Center console
    p.cube(Vec3::new(s.x - 0.15, FLOOR_Y + 0.12, 0.0), Vec3::new(0.25, 0.2, 0.5), DARK_GRAY);

    // Windshield frame
    for z in [0.85, -0.85] {
        p.cube(Vec3::new(-3.62, 0.35, z), Vec3::new(0.08, 0.9, 0.08), BLACK);
    }
    p.cube(Vec3::new(-3.62, 0.8, 0.0), Vec3::new(0.08, 0.08, 1.7), BLACK);

    // Driver door with handle and window buttons
    let door = Vec3::new(-3.1, 0.2, 0.95);
    p.cube(door, Vec3::new(0.6, 0.8, 0.08), LIGHT_GRAY);
    p.cube(door + Vec3::new(-0.15, -0.1, -0.03), Vec3::new(0.12, 0.04, 0.03), CHROME);
    for i in 0..2 {
        p.cube(
            door + Vec3::new(-0.2, -0.2 - i as f32 * 0.06, -0.03),
            Vec3::new(0.08, 0.04, 0.02),
            BLACK,
        );
    }
}
