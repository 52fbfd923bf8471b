//! Bus control surface: position along the road, lights, doors and
//! wheel rotation.

/// Sliding door animation.
pub mod door;

use crate::camera::core::wrap_signed_degrees;
pub use door::{DoorAnimator, DoorEvent, DoorPhase};

/// Mutable state of the bus model.
///
/// Positive `position` moves the bus toward +X (its rear). Driving forward
/// therefore decreases it.
#[derive(Debug, Clone, PartialEq)]
pub struct BusState {
    /// Translation of the whole bus along the X axis.
    pub position: f32,
    /// Whether head and tail lights are lit.
    pub lights_on: bool,
    /// Door animation shared by all four door panels.
    pub doors: DoorAnimator,
    /// Spin of every wheel in degrees, within `(-360, 360]`.
    pub wheel_rotation: f32,
}

impl Default for BusState {
    fn default() -> Self {
        Self::new(door::DEFAULT_STEP)
    }
}

impl BusState {
    /// Parked bus with lights on and closed doors moving `door_step` per
    /// update.
    #[must_use]
    pub fn new(door_step: f32) -> Self {
        Self {
            position: 0.0,
            lights_on: true,
            doors: DoorAnimator::new(door_step),
            wheel_rotation: 0.0,
        }
    }

    /// Start opening the doors.
    pub fn open_doors(&mut self) {
        self.doors.open();
    }

    /// Start closing the doors.
    pub fn close_doors(&mut self) {
        self.doors.close();
    }

    /// Switch the lights on or off.
    pub fn toggle_lights(&mut self) {
        self.lights_on = !self.lights_on;
        log::info!("Lights {}", if self.lights_on { "on" } else { "off" });
    }

    /// Move the bus by `distance` along X.
    pub fn drive(&mut self, distance: f32) {
        self.position += distance;
    }

    /// Turn every wheel by `degrees`.
    pub fn spin_wheels(&mut self, degrees: f32) {
        self.wheel_rotation = wrap_signed_degrees(self.wheel_rotation + degrees);
    }

    /// Advance the door animation by one frame.
    pub fn update(&mut self) -> Option<DoorEvent> {
        self.doors.update()
    }
}
