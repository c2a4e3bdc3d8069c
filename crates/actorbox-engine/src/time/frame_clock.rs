use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at zero.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// produce a pathological value.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            frame_index: 0,
            dt_max: Duration::from_millis(250),
        }
    }

    /// Advances the clock to `now` and returns a new `FrameTime`.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    /// Snapshot for repainting the last ticked frame: zero `dt`, same index,
    /// and the clock does not advance.
    pub fn repeat(&self, now: Instant) -> FrameTime {
        FrameTime {
            dt: 0.0,
            now,
            frame_index: self.frame_index.saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_from_zero() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        assert_eq!(clock.tick(t0).frame_index, 0);
        assert_eq!(clock.tick(t0).frame_index, 1);
    }

    #[test]
    fn repeat_reuses_last_index_without_advancing() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        clock.tick(t0);
        clock.tick(t0 + Duration::from_millis(80));

        let again = clock.repeat(t0 + Duration::from_millis(90));
        assert_eq!(again.frame_index, 1);
        assert_eq!(again.dt, 0.0);

        let next = clock.tick(t0 + Duration::from_millis(160));
        assert_eq!(next.frame_index, 2);
        assert!((next.dt - 0.08).abs() < 1e-6);
    }

    #[test]
    fn dt_measures_elapsed_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        let ft = clock.tick(t0 + Duration::from_millis(100));
        assert!((ft.dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped_after_stall() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        let ft = clock.tick(t0 + Duration::from_secs(10));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }
}
