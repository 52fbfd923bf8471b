use web_time::Instant;

/// Weight of the newest frame in the smoothed FPS.
const SMOOTHING: f32 = 0.05;

/// Frame clock: measures the delta between frames and keeps a smoothed
/// FPS for the debug dump.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Start the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // reasonable starting point
        }
    }

    /// Mark the start of a frame and return the seconds since the previous
    /// one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);
        dt
    }

    /// Restart measuring from now. The smoothed FPS is kept.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Fold a frame duration into the smoothed FPS.
    pub fn record(&mut self, frame_time: f32) {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps =
                self.smoothed_fps * (1.0 - SMOOTHING) + instant_fps * SMOOTHING;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_moves_toward_frame_rate() {
        let mut timing = FrameTiming::new();
        timing.record(1.0 / 30.0);
        assert!((timing.fps() - (60.0 * 0.95 + 30.0 * 0.05)).abs() < 1e-3);
        for _ in 0..500 {
            timing.record(1.0 / 30.0);
        }
        assert!((timing.fps() - 30.0).abs() < 0.01);
    }

    #[test]
    fn reset_drops_setup_time() {
        let mut timing = FrameTiming::new();
        std::thread::sleep(std::time::Duration::from_millis(60));
        timing.reset();
        assert!(timing.tick() < 0.05);
    }

    #[test]
    fn zero_frame_time_is_ignored() {
        let mut timing = FrameTiming::new();
        timing.record(0.0);
        assert_eq!(timing.fps(), 60.0);
    }
}
