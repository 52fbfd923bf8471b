//! Converts raw platform events into engine commands.
//!
//! The `InputDispatcher` owns all transient input state (held keys, this
//! frame's presses, the Shift modifier, the cursor position) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and the engine's [`execute`](crate::BusViewEngine::execute)
//! method.

use super::event::InputEvent;
use super::keyboard::{KeyAction, KeyboardState};
use crate::engine::command::{BusCommand, MoveDirection, RotationAxis};
use crate::options::{ControlOptions, KeybindingOptions};

/// Converts raw window events into [`BusCommand`]s.
///
/// Discrete actions fire once per key press. Continuous actions fire every
/// frame their key is held, scaled by the frame time.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = dispatcher.handle_event(&event) {
///     engine.execute(cmd);
/// }
///
/// // Once per frame:
/// for cmd in dispatcher.frame_commands(dt, &controls) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    /// Held keys and this frame's presses.
    keyboard: KeyboardState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Last cursor position in physical pixels, once one was reported.
    cursor: Option<(f32, f32)>,
    /// Action ↔ key mapping.
    bindings: KeybindingOptions,
}

impl InputDispatcher {
    /// Create a dispatcher with the given key bindings.
    #[must_use]
    pub fn new(bindings: KeybindingOptions) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Current cursor position in physical pixels, `None` until the window
    /// has reported one.
    #[must_use]
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Process a raw input event.
    ///
    /// Only scrolling produces a command immediately; key presses are
    /// collected and turned into commands by
    /// [`frame_commands`](Self::frame_commands).
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<BusCommand> {
        match event {
            InputEvent::Key { key, pressed } => {
                self.keyboard.set_key(key, *pressed);
                None
            }
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some((*x, *y));
                None
            }
            InputEvent::Scroll { delta } => Some(BusCommand::Zoom { delta: *delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = *shift;
                None
            }
            InputEvent::FocusLost => {
                self.keyboard.clear();
                self.shift_pressed = false;
                None
            }
        }
    }

    /// Commands for this frame: one per discrete action whose key went down
    /// since the last call, then one per continuous action whose key is
    /// held, scaled by `dt` seconds. Each key triggers only the action it
    /// resolves to in the bindings.
    pub fn frame_commands(&mut self, dt: f32, controls: &ControlOptions) -> Vec<BusCommand> {
        let mut pressed = self.resolve(self.keyboard.just_pressed());
        pressed.retain(|action| !action.is_continuous());
        let mut held = self.resolve(self.keyboard.held());
        held.retain(|action| action.is_continuous());

        let mut commands: Vec<BusCommand> =
            pressed.into_iter().filter_map(discrete_command).collect();
        commands.extend(
            held.into_iter()
                .filter_map(|action| self.continuous_command(action, dt, controls)),
        );

        self.keyboard.end_frame();
        commands
    }

    /// Bound actions for a set of keys, in declaration order.
    fn resolve<'a>(&self, keys: impl Iterator<Item = &'a str>) -> Vec<KeyAction> {
        let mut actions: Vec<KeyAction> =
            keys.filter_map(|key| self.bindings.lookup(key)).collect();
        actions.sort_unstable();
        actions.dedup();
        actions
    }

    /// Scaled command for a held continuous action. Shift reverses the
    /// rotation actions.
    fn continuous_command(
        &self,
        action: KeyAction,
        dt: f32,
        controls: &ControlOptions,
    ) -> Option<BusCommand> {
        let sign = if self.shift_pressed { -1.0 } else { 1.0 };
        let step = controls.move_speed * dt;
        let turn = controls.rotate_speed * dt * sign;
        let wheel = controls.wheel_speed * dt;

        let cmd = match action {
            KeyAction::MoveForward => move_by(MoveDirection::Forward, step),
            KeyAction::MoveBackward => move_by(MoveDirection::Backward, step),
            KeyAction::MoveLeft => move_by(MoveDirection::Left, step),
            KeyAction::MoveRight => move_by(MoveDirection::Right, step),
            KeyAction::MoveUp => move_by(MoveDirection::Up, step),
            KeyAction::MoveDown => move_by(MoveDirection::Down, step),
            KeyAction::Pitch => rotate_by(RotationAxis::Pitch, turn),
            KeyAction::Yaw => rotate_by(RotationAxis::Yaw, turn),
            KeyAction::Roll => rotate_by(RotationAxis::Roll, turn),
            // Forward is toward -X
            KeyAction::DriveForward => BusCommand::DriveBus {
                distance: -controls.bus_speed * dt,
                wheel_degrees: wheel,
            },
            KeyAction::DriveBackward => BusCommand::DriveBus {
                distance: controls.bus_speed * dt,
                wheel_degrees: -wheel,
            },
            KeyAction::SpinWheels => BusCommand::SpinWheels { degrees: wheel },
            KeyAction::RotateAroundLookAt => BusCommand::RotateAroundLookAt {
                degrees: controls.look_at_speed * dt * sign,
            },
            _ => return None,
        };
        Some(cmd)
    }
}

fn move_by(direction: MoveDirection, distance: f32) -> BusCommand {
    BusCommand::MoveCamera {
        direction,
        distance,
    }
}

fn rotate_by(axis: RotationAxis, degrees: f32) -> BusCommand {
    BusCommand::RotateCamera { axis, degrees }
}

/// Parameterless command for a press-triggered action.
fn discrete_command(action: KeyAction) -> Option<BusCommand> {
    let cmd = match action {
        KeyAction::ToggleLights => BusCommand::ToggleLights,
        KeyAction::OpenDoors => BusCommand::OpenDoors,
        KeyAction::CloseDoors => BusCommand::CloseDoors,
        KeyAction::ToggleInterior => BusCommand::ToggleInterior,
        KeyAction::ExitInterior => BusCommand::ExitInterior,
        KeyAction::ToggleDriver => BusCommand::ToggleDriver,
        KeyAction::ExitDriver => BusCommand::ExitDriver,
        KeyAction::ToggleBirdsEye => BusCommand::ToggleBirdsEye,
        KeyAction::ToggleOrbit => BusCommand::ToggleOrbit,
        KeyAction::StopLookAt => BusCommand::StopLookAt,
        KeyAction::DebugDump => BusCommand::DebugDump,
        KeyAction::ToggleFullscreen => BusCommand::ToggleFullscreen,
        KeyAction::Quit => BusCommand::Quit,
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: name.to_owned(),
            pressed,
        }
    }

    fn dispatcher() -> InputDispatcher {
        InputDispatcher::new(KeybindingOptions::default())
    }

    #[test]
    fn toggle_fires_once_per_press() {
        let mut d = dispatcher();
        let controls = ControlOptions::default();
        let _ = d.handle_event(&key("KeyM", true));
        assert_eq!(d.frame_commands(0.016, &controls), vec![BusCommand::ToggleOrbit]);
        // Still held next frame: nothing
        assert!(d.frame_commands(0.016, &controls).is_empty());
        // Auto-repeat: nothing
        let _ = d.handle_event(&key("KeyM", true));
        assert!(d.frame_commands(0.016, &controls).is_empty());
    }

    #[test]
    fn held_movement_scales_with_dt() {
        let mut d = dispatcher();
        let controls = ControlOptions::default();
        let _ = d.handle_event(&key("KeyW", true));
        let cmds = d.frame_commands(0.5, &controls);
        assert_eq!(
            cmds,
            vec![BusCommand::MoveCamera {
                direction: MoveDirection::Forward,
                distance: 1.25,
            }]
        );
        // Continues while held
        assert_eq!(d.frame_commands(0.5, &controls).len(), 1);
        let _ = d.handle_event(&key("KeyW", false));
        assert!(d.frame_commands(0.5, &controls).is_empty());
    }

    #[test]
    fn shift_reverses_rotation() {
        let mut d = dispatcher();
        let controls = ControlOptions::default();
        let _ = d.handle_event(&key("KeyY", true));
        assert_eq!(
            d.frame_commands(1.0, &controls),
            vec![BusCommand::RotateCamera {
                axis: RotationAxis::Yaw,
                degrees: 45.0,
            }]
        );
        let _ = d.handle_event(&InputEvent::ModifiersChanged { shift: true });
        assert_eq!(
            d.frame_commands(1.0, &controls),
            vec![BusCommand::RotateCamera {
                axis: RotationAxis::Yaw,
                degrees: -45.0,
            }]
        );
    }

    #[test]
    fn driving_moves_toward_negative_x() {
        let mut d = dispatcher();
        let controls = ControlOptions::default();
        let _ = d.handle_event(&key("KeyF", true));
        assert_eq!(
            d.frame_commands(0.1, &controls),
            vec![BusCommand::DriveBus {
                distance: -0.5,
                wheel_degrees: 20.0,
            }]
        );
        let _ = d.handle_event(&key("KeyF", false));
        let _ = d.handle_event(&key("KeyG", true));
        assert_eq!(
            d.frame_commands(0.1, &controls),
            vec![BusCommand::DriveBus {
                distance: 0.5,
                wheel_degrees: -20.0,
            }]
        );
    }

    #[test]
    fn scroll_is_immediate_and_cursor_is_tracked() {
        let mut d = dispatcher();
        assert_eq!(
            d.handle_event(&InputEvent::Scroll { delta: 2.0 }),
            Some(BusCommand::Zoom { delta: 2.0 })
        );
        assert_eq!(d.handle_event(&InputEvent::CursorMoved { x: 10.0, y: 20.0 }), None);
        assert_eq!(d.cursor(), Some((10.0, 20.0)));
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut d = dispatcher();
        let controls = ControlOptions::default();
        let _ = d.handle_event(&key("KeyW", true));
        let _ = d.handle_event(&InputEvent::FocusLost);
        assert!(d.frame_commands(0.1, &controls).is_empty());
    }

    #[test]
    fn shared_key_fires_only_the_winning_action() {
        let options = crate::options::Options::from_toml("[keybindings]\nquit = \"KeyQ\"").unwrap();
        assert_eq!(options.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        let mut d = InputDispatcher::new(options.keybindings);
        let _ = d.handle_event(&key("KeyQ", true));
        assert_eq!(d.frame_commands(0.1, &options.controls), vec![BusCommand::Quit]);
        // Held afterwards: the move_down default no longer fires
        assert!(d.frame_commands(0.1, &options.controls).is_empty());
    }

    #[test]
    fn cursor_is_unknown_until_reported() {
        assert_eq!(dispatcher().cursor(), None);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut d = dispatcher();
        let _ = d.handle_event(&key("KeyP", true));
        assert!(d.frame_commands(0.1, &ControlOptions::default()).is_empty());
    }
}
