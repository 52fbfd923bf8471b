use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings]
/// move_forward = "KeyW"
/// toggle_orbit = "KeyM"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction.
    MoveForward,
    /// Move against the view direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Rise.
    MoveUp,
    /// Sink.
    MoveDown,
    /// Pitch up (down with Shift).
    Pitch,
    /// Yaw (reversed with Shift).
    Yaw,
    /// Roll (reversed with Shift).
    Roll,
    /// Drive the bus forward, wheels turning.
    DriveForward,
    /// Drive the bus backward, wheels turning.
    DriveBackward,
    /// Spin the wheels in place.
    SpinWheels,
    /// Circle around the look-at point (reversed with Shift).
    RotateAroundLookAt,
    /// Toggle head and tail lights.
    ToggleLights,
    /// Open the doors.
    OpenDoors,
    /// Close the doors.
    CloseDoors,
    /// Toggle the interior view.
    ToggleInterior,
    /// Leave the interior view.
    ExitInterior,
    /// Toggle the driver view.
    ToggleDriver,
    /// Leave the driver view.
    ExitDriver,
    /// Toggle the bird's-eye view.
    ToggleBirdsEye,
    /// Toggle orbit navigation.
    ToggleOrbit,
    /// Stop circling the look-at point.
    StopLookAt,
    /// Log camera state and FPS.
    DebugDump,
    /// Toggle borderless fullscreen.
    ToggleFullscreen,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 26] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::Pitch,
        Self::Yaw,
        Self::Roll,
        Self::DriveForward,
        Self::DriveBackward,
        Self::SpinWheels,
        Self::RotateAroundLookAt,
        Self::ToggleLights,
        Self::OpenDoors,
        Self::CloseDoors,
        Self::ToggleInterior,
        Self::ExitInterior,
        Self::ToggleDriver,
        Self::ExitDriver,
        Self::ToggleBirdsEye,
        Self::ToggleOrbit,
        Self::StopLookAt,
        Self::DebugDump,
        Self::ToggleFullscreen,
        Self::Quit,
    ];

    /// Whether the action applies every frame the key is held, scaled by
    /// frame time, rather than once per press.
    #[must_use]
    pub fn is_continuous(self) -> bool {
        matches!(
            self,
            Self::MoveForward
                | Self::MoveBackward
                | Self::MoveLeft
                | Self::MoveRight
                | Self::MoveUp
                | Self::MoveDown
                | Self::Pitch
                | Self::Yaw
                | Self::Roll
                | Self::DriveForward
                | Self::DriveBackward
                | Self::SpinWheels
                | Self::RotateAroundLookAt
        )
    }

    /// Default key, as a `winit::keyboard::KeyCode` debug string.
    #[must_use]
    pub fn default_key(self) -> &'static str {
        match self {
            Self::MoveForward => "KeyW",
            Self::MoveBackward => "KeyS",
            Self::MoveLeft => "KeyA",
            Self::MoveRight => "KeyD",
            Self::MoveUp => "KeyE",
            Self::MoveDown => "KeyQ",
            Self::Pitch => "KeyX",
            Self::Yaw => "KeyY",
            Self::Roll => "KeyZ",
            Self::DriveForward => "KeyF",
            Self::DriveBackward => "KeyG",
            Self::SpinWheels => "KeyR",
            Self::RotateAroundLookAt => "KeyK",
            Self::ToggleLights => "KeyO",
            Self::OpenDoors => "Digit1",
            Self::CloseDoors => "Digit2",
            Self::ToggleInterior => "Digit3",
            Self::ExitInterior => "Digit4",
            Self::ToggleDriver => "Digit5",
            Self::ExitDriver => "Digit6",
            Self::ToggleBirdsEye => "KeyB",
            Self::ToggleOrbit => "KeyM",
            Self::StopLookAt => "KeyL",
            Self::DebugDump => "KeyI",
            Self::ToggleFullscreen => "F11",
            Self::Quit => "Escape",
        }
    }
}

/// Which keys are held and which went down since the last frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<String>,
    just_pressed: HashSet<String>,
}

impl KeyboardState {
    /// Record a key press or release. Auto-repeat presses of a key that is
    /// already held do not count as new presses.
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        if pressed {
            if self.held.insert(key.to_owned()) {
                let _ = self.just_pressed.insert(key.to_owned());
            }
        } else {
            let _ = self.held.remove(key);
        }
    }

    /// Whether `key` is currently down.
    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Whether `key` went down since the last `end_frame`.
    #[must_use]
    pub fn was_just_pressed(&self, key: &str) -> bool {
        self.just_pressed.contains(key)
    }

    /// Keys currently down.
    pub fn held(&self) -> impl Iterator<Item = &str> {
        self.held.iter().map(String::as_str)
    }

    /// Keys that went down since the last `end_frame`.
    pub fn just_pressed(&self) -> impl Iterator<Item = &str> {
        self.just_pressed.iter().map(String::as_str)
    }

    /// Forget this frame's presses.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_edge_triggered_once() {
        let mut kb = KeyboardState::default();
        kb.set_key("KeyM", true);
        assert!(kb.was_just_pressed("KeyM"));
        kb.end_frame();
        // Auto-repeat
        kb.set_key("KeyM", true);
        assert!(!kb.was_just_pressed("KeyM"));
        assert!(kb.is_held("KeyM"));

        kb.set_key("KeyM", false);
        assert!(!kb.is_held("KeyM"));
        kb.set_key("KeyM", true);
        assert!(kb.was_just_pressed("KeyM"));
    }

    #[test]
    fn press_and_release_within_a_frame_still_fires() {
        let mut kb = KeyboardState::default();
        kb.set_key("Digit3", true);
        kb.set_key("Digit3", false);
        assert!(kb.was_just_pressed("Digit3"));
        assert!(!kb.is_held("Digit3"));
    }

    #[test]
    fn default_keys_are_unique() {
        let keys: HashSet<_> = KeyAction::ALL.iter().map(|a| a.default_key()).collect();
        assert_eq!(keys.len(), KeyAction::ALL.len());
    }
}
