use std::time::Duration;

/// Fixed-interval gate for the update-then-render pair.
///
/// The platform loop pumps much faster than the animation ticks; it reports
/// elapsed wall-clock time here and runs a tick whenever the gate opens.
/// The gate is pure over [`Duration`]s so pacing can be tested without a
/// clock.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    accumulator: Duration,
}

impl FrameScheduler {
    /// A scheduler ticking `frames_per_second` times per second. A zero rate
    /// is treated as one frame per second rather than a stalled animation.
    pub fn with_fps(frames_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / frames_per_second.max(1),
            accumulator: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Accounts for `dt` of elapsed time and reports whether a tick is due.
    /// Any backlog beyond one interval is discarded: after a stall the
    /// animation skips ahead by a single frame instead of bursting to catch
    /// up.
    pub fn on_elapsed(&mut self, dt: Duration) -> bool {
        self.accumulator += dt;
        if self.accumulator < self.interval {
            return false;
        }
        self.accumulator = Duration::ZERO;
        true
    }
}
