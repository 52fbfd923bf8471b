//! Sliding door animation.
//!
//! Doors move at a constant step per update between fully closed
//! (offset 0) and fully open (offset 1).

/// Default offset change per `update` call.
pub const DEFAULT_STEP: f32 = 0.02;

/// Where the doors are in their open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorPhase {
    /// At rest, fully closed.
    #[default]
    Closed,
    /// Sliding toward fully open.
    Opening,
    /// At rest, fully open.
    Open,
    /// Sliding toward fully closed.
    Closing,
}

/// One-shot notification emitted when the doors reach a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    /// Offset reached 1.
    FullyOpened,
    /// Offset reached 0.
    FullyClosed,
}

/// Constant-speed door animation driving an offset in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorAnimator {
    offset: f32,
    phase: DoorPhase,
    step: f32,
}

impl Default for DoorAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl DoorAnimator {
    /// Closed doors that move by `step` per update.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            offset: 0.0,
            phase: DoorPhase::Closed,
            step: step.max(f32::EPSILON),
        }
    }

    /// Current offset, 0 closed and 1 open.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DoorPhase {
        self.phase
    }

    /// Start opening. Reverses a closing door; ignored when already
    /// opening or open.
    pub fn open(&mut self) {
        if matches!(self.phase, DoorPhase::Opening | DoorPhase::Open) {
            return;
        }
        self.phase = DoorPhase::Opening;
        log::info!("Opening doors...");
    }

    /// Start closing. Reverses an opening door; ignored when already
    /// closing or closed.
    pub fn close(&mut self) {
        if matches!(self.phase, DoorPhase::Closing | DoorPhase::Closed) {
            return;
        }
        self.phase = DoorPhase::Closing;
        log::info!("Closing doors...");
    }

    /// Advance one step. Returns an event on the update that reaches a
    /// bound.
    pub fn update(&mut self) -> Option<DoorEvent> {
        match self.phase {
            DoorPhase::Opening => {
                self.offset += self.step;
                if self.offset >= 1.0 {
                    self.offset = 1.0;
                    self.phase = DoorPhase::Open;
                    return Some(DoorEvent::FullyOpened);
                }
                None
            }
            DoorPhase::Closing => {
                self.offset -= self.step;
                if self.offset <= 0.0 {
                    self.offset = 0.0;
                    self.phase = DoorPhase::Closed;
                    return Some(DoorEvent::FullyClosed);
                }
                None
            }
            DoorPhase::Closed | DoorPhase::Open => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_monotonically_and_halts() {
        let mut doors = DoorAnimator::default();
        doors.open();
        let mut last = doors.offset();
        let mut events = Vec::new();
        for _ in 0..80 {
            if let Some(e) = doors.update() {
                events.push(e);
            }
            assert!(doors.offset() >= last);
            last = doors.offset();
        }
        assert_eq!(doors.offset(), 1.0);
        assert_eq!(doors.phase(), DoorPhase::Open);
        assert_eq!(events, vec![DoorEvent::FullyOpened]);
    }

    #[test]
    fn closes_monotonically_and_halts() {
        let mut doors = DoorAnimator::default();
        doors.open();
        while doors.update().is_none() {}

        doors.close();
        let mut last = doors.offset();
        let mut closed = 0;
        for _ in 0..80 {
            if doors.update() == Some(DoorEvent::FullyClosed) {
                closed += 1;
            }
            assert!(doors.offset() <= last);
            last = doors.offset();
        }
        assert_eq!(doors.offset(), 0.0);
        assert_eq!(doors.phase(), DoorPhase::Closed);
        assert_eq!(closed, 1);
    }

    #[test]
    fn open_while_opening_is_noop() {
        let mut doors = DoorAnimator::default();
        doors.open();
        let _ = doors.update();
        let before = doors.clone();
        doors.open();
        assert_eq!(doors, before);

        let mut opened = 0;
        for _ in 0..100 {
            if doors.update() == Some(DoorEvent::FullyOpened) {
                opened += 1;
            }
        }
        assert_eq!(opened, 1);
    }

    #[test]
    fn close_reverses_opening() {
        let mut doors = DoorAnimator::new(0.25);
        doors.open();
        let _ = doors.update();
        let _ = doors.update();
        doors.close();
        assert_eq!(doors.phase(), DoorPhase::Closing);
        let _ = doors.update();
        assert!((doors.offset() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn close_when_closed_is_noop() {
        let mut doors = DoorAnimator::default();
        doors.close();
        assert_eq!(doors.phase(), DoorPhase::Closed);
        assert_eq!(doors.update(), None);
    }
}
