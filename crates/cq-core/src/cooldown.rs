//! Non-blocking debounce window.
//!
//! Replaces "sleep after acting" with a timestamp comparison so the worker
//! never stalls: an event that lands inside the window is simply dropped.

use std::time::Duration;

/// Debounce window measured against a millisecond clock.
///
/// 基于毫秒时钟的防抖窗口。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    window_ms: i64,
    last_ms: Option<i64>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window_ms: i64::try_from(window.as_millis()).unwrap_or(i64::MAX),
            last_ms: None,
        }
    }

    /// Whether an event at `now_ms` falls inside the window.
    ///
    /// A clock that stepped backwards past the last event ends the window.
    pub fn is_cooling(&self, now_ms: i64) -> bool {
        match self.last_ms {
            Some(last) if now_ms >= last => now_ms - last < self.window_ms,
            _ => false,
        }
    }

    /// Start a new window at `now_ms`.
    pub fn arm(&mut self, now_ms: i64) {
        self.last_ms = Some(now_ms);
    }

    /// Arm and return `true` unless still cooling.
    pub fn try_fire(&mut self, now_ms: i64) -> bool {
        if self.is_cooling(now_ms) {
            return false;
        }
        self.arm(now_ms);
        true
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms.max(0) as u64)
    }
}
