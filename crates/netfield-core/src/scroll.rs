use instant::Instant;
use std::time::Duration;

/// Debounced "page is scrolling" flag.
///
/// A scroll event raises the flag and arms a deadline one quiet period
/// ahead; every further event pushes the deadline out. The flag drops once a
/// timestamp at or past the deadline is observed. Being a plain deadline,
/// there is no timer to leak if the owner goes away.
#[derive(Clone, Debug)]
pub struct ScrollActivity {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl ScrollActivity {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn scrolled(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// Disarm an expired deadline. Returns whether scrolling is still active.
    pub fn settle(&mut self, now: Instant) -> bool {
        let active = self.is_active(now);
        if !active {
            self.deadline = None;
        }
        active
    }

    /// Whether a deadline is pending (expired or not).
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
