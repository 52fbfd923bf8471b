use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Speeds of the keyboard controls and the door animation.
pub struct ControlOptions {
    /// Camera translation, units per second.
    pub move_speed: f32,
    /// Camera pitch/yaw/roll, degrees per second.
    pub rotate_speed: f32,
    /// Bus driving speed, units per second.
    pub bus_speed: f32,
    /// Wheel spin, degrees per second.
    pub wheel_speed: f32,
    /// Look-at circling, degrees per second.
    pub look_at_speed: f32,
    /// Door offset change per frame.
    pub door_step: f32,
    /// Distance a door leaf slides when fully open.
    pub door_slide: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            move_speed: 2.5,
            rotate_speed: 45.0,
            bus_speed: 5.0,
            wheel_speed: 200.0,
            look_at_speed: 45.0,
            door_step: 0.02,
            door_slide: 0.45,
        }
    }
}
