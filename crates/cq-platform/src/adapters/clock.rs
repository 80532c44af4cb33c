use std::time::Instant;

use cq_core::ports::ClockPort;

/// Monotonic millisecond clock, counted from construction.
///
/// Debounce windows compare these readings, so wall-clock steps (NTP,
/// manual changes) cannot stall or skip them.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX)
    }
}
