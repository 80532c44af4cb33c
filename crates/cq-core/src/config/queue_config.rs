use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the queue and its handlers.
///
/// Key bindings are fixed and intentionally absent here.
///
/// 队列及其处理器的可调参数（快捷键固定，不在此配置）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Maximum number of snapshots kept; `None` keeps everything.
    pub capacity: Option<usize>,

    /// Wait before reading the clipboard on copy, letting the OS finish
    /// populating it after the triggering keystroke.
    pub copy_settle_ms: u64,

    /// Window after a clipboard write during which paste/next/prev are ignored.
    pub write_cooldown_ms: u64,

    /// Window after a pause toggle during which further toggles are ignored.
    pub pause_cooldown_ms: u64,

    /// Extra attempts when the clipboard is held by another process.
    pub clipboard_retries: u32,

    /// Wait between clipboard attempts.
    pub retry_backoff_ms: u64,

    /// How often the hotkey listener samples the keyboard.
    pub poll_interval_ms: u64,

    /// Do not enqueue whitespace-only snapshots.
    pub skip_blank: bool,

    /// Do not enqueue a snapshot equal to the current tail.
    pub skip_consecutive_duplicates: bool,

    /// Press the platform paste chord after a dequeue writes the clipboard.
    ///
    /// The chord waits until the paste hotkey's modifiers are released; if
    /// they are still held after a short grace period it is not sent and the
    /// snapshot simply stays on the clipboard.
    pub auto_paste: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            copy_settle_ms: 100,
            write_cooldown_ms: 100,
            pause_cooldown_ms: 1000,
            clipboard_retries: 2,
            retry_backoff_ms: 50,
            poll_interval_ms: 20,
            skip_blank: false,
            skip_consecutive_duplicates: false,
            auto_paste: false,
        }
    }
}

impl QueueConfig {
    /// Config with every delay and cooldown set to zero.
    pub fn immediate() -> Self {
        Self {
            copy_settle_ms: 0,
            write_cooldown_ms: 0,
            pause_cooldown_ms: 0,
            retry_backoff_ms: 0,
            ..Self::default()
        }
    }

    pub fn copy_settle(&self) -> Duration {
        Duration::from_millis(self.copy_settle_ms)
    }

    pub fn write_cooldown(&self) -> Duration {
        Duration::from_millis(self.write_cooldown_ms)
    }

    pub fn pause_cooldown(&self) -> Duration {
        Duration::from_millis(self.pause_cooldown_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
