//! Camera system for navigating around the bus.
//!
//! Provides free-flight and orbit navigation, fixed view overlays that
//! save and restore the previous pose, and a look-at rotation mode.

/// View-state machine tying the camera modes together.
pub mod controller;
/// Pose, basis, projection and GPU uniform types.
pub mod core;
/// Circling the camera around the point it looks at.
pub mod look_at;
/// Spherical orbit parameters.
pub mod orbit;
/// Fixed view overlays and navigation modes.
pub mod overlay;

pub use controller::CameraController;
pub use overlay::{NavigationMode, ViewOverlay};
