use std::time::{Duration, Instant};

/// Fixed-rate frame pacing.
///
/// The runtime parks the event loop until [`deadline`](Self::deadline), then
/// draws one frame and calls [`advance`](Self::advance). Deadlines advance by
/// whole intervals so the rate does not drift; after a stall the schedule
/// restarts from `now` instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    /// Creates a pacer whose first frame is due at `now`.
    ///
    /// `target_fps` of zero is treated as one frame per second.
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let fps = target_fps.max(1);
        Self {
            interval: Duration::from_secs(1) / fps,
            next: now,
        }
    }

    /// Time between frames.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame is due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedules the frame after the one just started at `now`.
    pub fn advance(&mut self, now: Instant) {
        let next = self.next + self.interval;
        self.next = if next <= now { now + self.interval } else { next };
    }
}
