use super::command::{BusCommand, MoveDirection, RotationAxis};
use super::{BusViewEngine, ViewerRequest};

impl BusViewEngine {
    /// Apply one command to the camera or the bus.
    pub fn execute(&mut self, cmd: BusCommand) {
        match cmd {
            BusCommand::MoveCamera {
                direction,
                distance,
            } => self.move_camera(direction, distance),
            BusCommand::RotateCamera { axis, degrees } => match axis {
                RotationAxis::Pitch => self.camera.rotate_pitch(degrees),
                RotationAxis::Yaw => self.camera.rotate_yaw(degrees),
                RotationAxis::Roll => self.camera.rotate_roll(degrees),
            },
            BusCommand::RotateAroundLookAt { degrees } => {
                self.camera.rotate_camera_around_look_at(degrees);
            }
            BusCommand::StopLookAt => self.camera.stop_look_at_rotation(),
            BusCommand::Zoom { delta } => self.camera.process_mouse_scroll(delta),
            BusCommand::ToggleOrbit => self.camera.toggle_orbit_mode(),
            BusCommand::ToggleBirdsEye => self.camera.toggle_birds_eye_view(),
            BusCommand::ToggleInterior => self.camera.toggle_interior_view(),
            BusCommand::ExitInterior => self.camera.exit_interior_view(),
            BusCommand::ToggleDriver => self.camera.toggle_driver_view(),
            BusCommand::ExitDriver => self.camera.exit_driver_view(),
            BusCommand::DriveBus {
                distance,
                wheel_degrees,
            } => {
                self.bus.drive(distance);
                self.bus.spin_wheels(wheel_degrees);
            }
            BusCommand::SpinWheels { degrees } => self.bus.spin_wheels(degrees),
            BusCommand::ToggleLights => self.bus.toggle_lights(),
            BusCommand::OpenDoors => self.bus.open_doors(),
            BusCommand::CloseDoors => self.bus.close_doors(),
            BusCommand::DebugDump => self.log_debug_dump(),
            BusCommand::ToggleFullscreen => {
                self.requests.push(ViewerRequest::ToggleFullscreen);
            }
            BusCommand::Quit => self.requests.push(ViewerRequest::Exit),
        }
    }

    fn move_camera(&mut self, direction: MoveDirection, distance: f32) {
        match direction {
            MoveDirection::Forward => self.camera.move_forward(distance),
            MoveDirection::Backward => self.camera.move_backward(distance),
            MoveDirection::Left => self.camera.move_left(distance),
            MoveDirection::Right => self.camera.move_right(distance),
            MoveDirection::Up => self.camera.move_up(distance),
            MoveDirection::Down => self.camera.move_down(distance),
        }
    }
}
