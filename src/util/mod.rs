//! Shared utilities.

/// Frame clock and smoothed FPS.
pub mod frame_timing;
