//! Queue controller
//!
//! The action handlers bound to hotkeys. Each handler checks its
//! precondition, delegates to [`QueueState`] and then touches the clipboard
//! through [`ClipboardPort`].
//!
//! ```text
//! HotkeyAction
//!      ↓
//! QueueController::handle   (this module)
//!      ↓                ↘
//! QueueState         ClipboardPort / PasteSimulatorPort
//! ```
//!
//! The controller is not `Sync`-shared: it is owned by exactly one
//! [`QueueRuntime`](crate::runtime::QueueRuntime), which is what serializes
//! handler execution.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use cq_core::ports::{ClipboardError, ClipboardPort, ClockPort, PasteSimulatorPort};
use cq_core::{Cooldown, HotkeyAction, QueueConfig, QueueError, QueueState};

use crate::outcome::{ActionOutcome, SkipReason};

const PREVIEW_CHARS: usize = 30;

/// Dependencies of [`QueueController`].
pub struct QueueControllerDeps {
    pub clipboard: Arc<dyn ClipboardPort>,
    pub paste: Arc<dyn PasteSimulatorPort>,
    pub clock: Arc<dyn ClockPort>,
}

pub struct QueueController {
    state: QueueState,
    clipboard: Arc<dyn ClipboardPort>,
    paste: Arc<dyn PasteSimulatorPort>,
    clock: Arc<dyn ClockPort>,
    config: QueueConfig,
    write_cooldown: Cooldown,
    pause_cooldown: Cooldown,
}

impl QueueController {
    pub fn new(deps: QueueControllerDeps, config: QueueConfig) -> Self {
        let state = QueueState::with_capacity(config.capacity);
        Self::with_state(deps, config, state)
    }

    /// Build a controller around an existing state.
    pub fn with_state(deps: QueueControllerDeps, config: QueueConfig, state: QueueState) -> Self {
        let QueueControllerDeps {
            clipboard,
            paste,
            clock,
        } = deps;

        Self {
            state,
            clipboard,
            paste,
            clock,
            write_cooldown: Cooldown::new(config.write_cooldown()),
            pause_cooldown: Cooldown::new(config.pause_cooldown()),
            config,
        }
    }

    pub fn state(&self) -> &QueueState {
        &self.state
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Dispatch one action. Returns `None` for [`HotkeyAction::Exit`], which
    /// is handled by the runtime.
    pub async fn handle(&mut self, action: HotkeyAction) -> Option<ActionOutcome> {
        let outcome = match action {
            HotkeyAction::Copy => self.on_copy().await,
            HotkeyAction::Paste => self.on_paste().await,
            HotkeyAction::Pause => self.on_pause(),
            HotkeyAction::Next => self.on_next().await,
            HotkeyAction::Prev => self.on_prev().await,
            HotkeyAction::Exit => return None,
        };
        Some(outcome)
    }

    /// Capture the clipboard into the queue.
    pub async fn on_copy(&mut self) -> ActionOutcome {
        if !self.state.is_active() {
            debug!("Queue paused, copy ignored");
            return ActionOutcome::Skipped(SkipReason::Paused);
        }

        let settle = self.config.copy_settle();
        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }

        let clipboard = Arc::clone(&self.clipboard);
        let text = match self.with_retry(|| clipboard.read_text()).await {
            Ok(text) => text,
            Err(ClipboardError::Empty) => {
                debug!("Clipboard holds no text, nothing to enqueue");
                return ActionOutcome::Failed(ClipboardError::Empty);
            }
            Err(e) => {
                warn!(error = %e, "Failed to read clipboard, copy dropped");
                return ActionOutcome::Failed(e);
            }
        };

        if self.config.skip_blank && text.trim().is_empty() {
            debug!("Blank snapshot ignored");
            return ActionOutcome::Skipped(SkipReason::Blank);
        }

        if self.config.skip_consecutive_duplicates && self.state.last() == Some(text.as_str()) {
            debug!("Snapshot equals queue tail, ignored");
            return ActionOutcome::Skipped(SkipReason::Duplicate);
        }

        debug!(preview = %preview(&text), "Enqueue snapshot");
        let size = self.state.append(text);
        info!(size, "Snapshot enqueued");
        ActionOutcome::Enqueued { size }
    }

    /// Put the oldest snapshot on the clipboard and remove it.
    ///
    /// The head is only removed once the write succeeded, so a busy
    /// clipboard never loses a snapshot.
    pub async fn on_paste(&mut self) -> ActionOutcome {
        if !self.state.is_active() {
            debug!("Queue paused, paste ignored");
            return ActionOutcome::Skipped(SkipReason::Paused);
        }

        let Some(head) = self.state.get(0).map(str::to_owned) else {
            debug!("Queue empty, nothing to paste");
            return ActionOutcome::Skipped(SkipReason::EmptyQueue);
        };

        if self.write_cooldown.is_cooling(self.clock.now_ms()) {
            debug!("Paste inside write cooldown, ignored");
            return ActionOutcome::Skipped(SkipReason::CoolingDown);
        }

        if let Err(e) = self.write_clipboard(&head).await {
            warn!(error = %e, "Failed to write clipboard, paste dropped");
            return ActionOutcome::Failed(e);
        }

        if let Err(QueueError::EmptyQueue) = self.state.pop_front() {
            debug_assert!(false, "pop_front on empty queue after size check");
            error!("Queue drained between size check and pop");
            return ActionOutcome::Skipped(SkipReason::EmptyQueue);
        }

        let size = self.state.size();
        info!(size, "Snapshot dequeued to clipboard");

        if self.config.auto_paste {
            match self.paste.paste() {
                Ok(()) => debug!("Simulated paste keystroke"),
                Err(e) => warn!(error = %e, "Could not simulate paste, snapshot left on clipboard"),
            }
        }

        ActionOutcome::Dequeued { size }
    }

    /// Toggle between running and paused.
    pub fn on_pause(&mut self) -> ActionOutcome {
        if !self.pause_cooldown.try_fire(self.clock.now_ms()) {
            debug!("Pause toggle inside cooldown, ignored");
            return ActionOutcome::Skipped(SkipReason::CoolingDown);
        }

        let active = self.state.toggle();
        info!(
            active,
            "Queue mode is now {}",
            if active { "ACTIVE" } else { "PAUSED" }
        );
        ActionOutcome::Toggled { active }
    }

    /// Replay the next snapshot. Works while paused.
    pub async fn on_next(&mut self) -> ActionOutcome {
        self.navigate(Direction::Forward).await
    }

    /// Replay the previous snapshot. Works while paused.
    pub async fn on_prev(&mut self) -> ActionOutcome {
        self.navigate(Direction::Backward).await
    }

    async fn navigate(&mut self, direction: Direction) -> ActionOutcome {
        if self.state.is_empty() {
            debug!(?direction, "Queue empty, nothing to navigate");
            return ActionOutcome::Skipped(SkipReason::EmptyQueue);
        }

        if self.write_cooldown.is_cooling(self.clock.now_ms()) {
            debug!(?direction, "Navigation inside write cooldown, ignored");
            return ActionOutcome::Skipped(SkipReason::CoolingDown);
        }

        let previous = self.state.cursor();
        let moved = match direction {
            Direction::Forward => self.state.move_cursor_forward(),
            Direction::Backward => self.state.move_cursor_backward(),
        }
        .map(str::to_owned);
        let value = match moved {
            Ok(value) => value,
            Err(QueueError::NoMove) | Err(QueueError::EmptyQueue) => {
                debug!(?direction, cursor = self.state.cursor(), "Cursor at boundary");
                return ActionOutcome::Skipped(SkipReason::NoMove);
            }
        };

        let cursor = self.state.cursor();
        if let Err(e) = self.write_clipboard(&value).await {
            // Nothing reached the clipboard; the move must not stick.
            if self.state.set_cursor(previous).is_err() {
                error!(previous, "Cursor could not be restored");
            }
            warn!(error = %e, cursor = previous, "Failed to write clipboard, navigation dropped");
            return ActionOutcome::Failed(e);
        }

        info!(cursor, preview = %preview(&value), "Navigated");
        ActionOutcome::Moved { cursor }
    }

    async fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = Arc::clone(&self.clipboard);
        self.with_retry(|| clipboard.write_text(text)).await?;
        self.write_cooldown.arm(self.clock.now_ms());
        Ok(())
    }

    /// Run `op`, retrying while the clipboard reports itself unavailable.
    fn with_retry<'a, T, F>(
        &self,
        op: F,
    ) -> impl Future<Output = Result<T, ClipboardError>> + 'a
    where
        F: Fn() -> Result<T, ClipboardError> + 'a,
        T: 'a,
    {
        let retries = self.config.clipboard_retries;
        let backoff = self.config.retry_backoff();

        async move {
            let mut attempt = 0;
            loop {
                match op() {
                    Err(ClipboardError::Unavailable(reason)) if attempt < retries => {
                        attempt += 1;
                        debug!(attempt, %reason, "Clipboard busy, retrying");
                        if !backoff.is_zero() {
                            tokio::time::sleep(backoff).await;
                        }
                    }
                    other => return other,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
