//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, the
//! scroll wheel, or a programmatic call, is represented as a `BusCommand`.
//! Consumers construct commands and pass them to
//! [`BusViewEngine::execute`](super::BusViewEngine::execute).

/// Direction of a free-flight camera translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the camera's right vector.
    Left,
    /// Along the camera's right vector.
    Right,
    /// Along world up.
    Up,
    /// Against world up.
    Down,
}

/// Axis of a free-flight camera rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// Elevation.
    Pitch,
    /// Heading.
    Yaw,
    /// Bank around the view direction.
    Roll,
}

/// A single interactive operation on the camera or the bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BusCommand {
    // ── Camera ──
    /// Translate the free-flight camera.
    MoveCamera {
        /// Which way to move.
        direction: MoveDirection,
        /// World units to move.
        distance: f32,
    },
    /// Rotate the free-flight camera.
    RotateCamera {
        /// Which angle to change.
        axis: RotationAxis,
        /// Degrees to add (negative reverses).
        degrees: f32,
    },
    /// Circle around the look-at pivot, starting the rotation if needed.
    RotateAroundLookAt {
        /// Degrees to advance along the circle.
        degrees: f32,
    },
    /// Stop circling the look-at pivot.
    StopLookAt,
    /// Scroll: orbit zoom, or field of view in free flight.
    Zoom {
        /// Scroll amount (positive = zoom in).
        delta: f32,
    },
    /// Toggle between free flight and orbit navigation.
    ToggleOrbit,
    /// Toggle the bird's-eye view.
    ToggleBirdsEye,
    /// Toggle the interior view.
    ToggleInterior,
    /// Leave the interior view if it is active.
    ExitInterior,
    /// Toggle the driver view.
    ToggleDriver,
    /// Leave the driver view if it is active.
    ExitDriver,

    // ── Bus ──
    /// Move the bus along X and turn its wheels.
    DriveBus {
        /// Change of the bus X position.
        distance: f32,
        /// Change of the wheel angle in degrees.
        wheel_degrees: f32,
    },
    /// Turn the wheels without moving the bus.
    SpinWheels {
        /// Change of the wheel angle in degrees.
        degrees: f32,
    },
    /// Switch head and tail lights.
    ToggleLights,
    /// Start opening the doors.
    OpenDoors,
    /// Start closing the doors.
    CloseDoors,

    // ── Session ──
    /// Log camera state and frame rate.
    DebugDump,
    /// Ask the window to switch fullscreen.
    ToggleFullscreen,
    /// Ask the window to close.
    Quit,
}
