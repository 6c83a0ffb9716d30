use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Last known pointer position with a rate limit on updates.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    position: Option<Vec2>,
    last_accepted: Option<Instant>,
    throttle: Duration,
}

impl PointerTracker {
    pub fn new(throttle: Duration) -> Self {
        Self {
            position: None,
            last_accepted: None,
            throttle,
        }
    }

    /// Record a move unless the previous accepted move was less than one
    /// throttle interval ago. Returns whether the position changed hands.
    pub fn moved(&mut self, pos: Vec2, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now < last + self.throttle {
                return false;
            }
        }
        self.position = Some(pos);
        self.last_accepted = Some(now);
        true
    }

    /// Pointer left the page: forget it immediately.
    pub fn left(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn reset(&mut self) {
        self.position = None;
        self.last_accepted = None;
    }
}
