//! Timing, retry and capture-policy rules of the action handlers.

mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use mockall::mock;

use cq_app::{ActionOutcome, QueueController, QueueControllerDeps, SkipReason};
use cq_core::ports::{ClipboardError, ClipboardPort, PasteError, PasteSimulatorPort};
use cq_core::{QueueConfig, QueueState};
use support::{FakeClipboard, FakeClock, Harness};

mock! {
    pub Clipboard {}

    impl ClipboardPort for Clipboard {
        fn read_text(&self) -> Result<String, ClipboardError>;
        fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
    }
}

mock! {
    pub Paste {}

    impl PasteSimulatorPort for Paste {
        fn paste(&self) -> Result<(), PasteError>;
    }
}

fn busy() -> ClipboardError {
    ClipboardError::Unavailable("held by another process".into())
}

#[tokio::test]
async fn pause_toggle_is_debounced() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller = harness.controller(QueueConfig {
        copy_settle_ms: 0,
        ..QueueConfig::default()
    });

    assert_eq!(controller.on_pause(), ActionOutcome::Toggled { active: false });

    harness.clock.advance(500);
    assert_eq!(
        controller.on_pause(),
        ActionOutcome::Skipped(SkipReason::CoolingDown)
    );
    assert!(!controller.state().is_active());

    harness.clock.advance(500);
    assert_eq!(controller.on_pause(), ActionOutcome::Toggled { active: true });
}

#[tokio::test]
async fn pause_survives_a_backwards_clock_step() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller = harness.controller(QueueConfig::default());

    assert_eq!(controller.on_pause(), ActionOutcome::Toggled { active: false });

    harness.clock.advance(-3_600_000);
    harness.clock.advance(5_000);
    assert_eq!(controller.on_pause(), ActionOutcome::Toggled { active: true });
}

#[tokio::test]
async fn clipboard_writes_start_a_cooldown() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller = harness.controller_with(
        QueueConfig::default(),
        QueueState::from_items(["a", "b", "c"], 0),
    );

    assert_eq!(controller.on_next().await, ActionOutcome::Moved { cursor: 1 });
    assert_eq!(
        controller.on_next().await,
        ActionOutcome::Skipped(SkipReason::CoolingDown)
    );
    assert_eq!(
        controller.on_paste().await,
        ActionOutcome::Skipped(SkipReason::CoolingDown)
    );
    assert_eq!(controller.state().cursor(), 1);

    harness.clock.advance(100);
    assert_eq!(controller.on_next().await, ActionOutcome::Moved { cursor: 2 });
}

#[tokio::test]
async fn no_move_does_not_start_a_cooldown() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller =
        harness.controller_with(QueueConfig::default(), QueueState::from_items(["a", "b"], 0));

    assert_eq!(
        controller.on_prev().await,
        ActionOutcome::Skipped(SkipReason::NoMove)
    );
    assert_eq!(controller.on_next().await, ActionOutcome::Moved { cursor: 1 });
}

#[tokio::test(start_paused = true)]
async fn copy_waits_for_clipboard_to_settle() {
    let harness = Harness::new(FakeClipboard::with_text("late"));
    let mut controller = harness.controller(QueueConfig::default());

    let started = tokio::time::Instant::now();
    assert_eq!(
        controller.on_copy().await,
        ActionOutcome::Enqueued { size: 1 }
    );
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn busy_clipboard_is_retried() {
    let harness = Harness::new(FakeClipboard::with_text("eventually"));
    harness.clipboard.fail_next([busy(), busy()]);
    let mut controller = harness.controller(QueueConfig::immediate());

    assert_eq!(
        controller.on_copy().await,
        ActionOutcome::Enqueued { size: 1 }
    );
    assert_eq!(harness.clipboard.reads(), 3);
}

#[tokio::test]
async fn persistent_busy_clipboard_drops_the_copy() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .times(3)
        .returning(|| Err(busy()));

    let mut controller = QueueController::new(
        QueueControllerDeps {
            clipboard: Arc::new(clipboard),
            paste: Arc::new(MockPaste::new()),
            clock: Arc::new(FakeClock::default()),
        },
        QueueConfig::immediate(),
    );

    assert_eq!(controller.on_copy().await, ActionOutcome::Failed(busy()));
    assert_eq!(controller.state().size(), 0);
}

#[tokio::test]
async fn empty_clipboard_is_not_retried() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller = harness.controller(QueueConfig::immediate());

    assert_eq!(
        controller.on_copy().await,
        ActionOutcome::Failed(ClipboardError::Empty)
    );
    assert_eq!(harness.clipboard.reads(), 1);
}

#[tokio::test]
async fn failed_paste_write_keeps_the_head() {
    let harness = Harness::new(FakeClipboard::with_text("before"));
    harness.clipboard.fail_next([busy(), busy(), busy()]);
    let mut controller =
        harness.controller_with(QueueConfig::immediate(), QueueState::from_items(["a", "b"], 0));

    assert_eq!(controller.on_paste().await, ActionOutcome::Failed(busy()));
    assert_eq!(controller.state().size(), 2);
    assert_eq!(controller.state().get(0), Some("a"));
    assert_eq!(harness.clipboard.text().as_deref(), Some("before"));

    assert_eq!(controller.on_paste().await, ActionOutcome::Dequeued { size: 1 });
    assert_eq!(harness.clipboard.text().as_deref(), Some("a"));
}

#[tokio::test]
async fn failed_navigation_write_keeps_the_cursor() {
    let harness = Harness::new(FakeClipboard::with_text("orig"));
    harness.clipboard.fail_next([busy(), busy(), busy()]);
    let mut controller = harness.controller_with(
        QueueConfig::immediate(),
        QueueState::from_items(["a", "b", "c"], 0),
    );

    assert_eq!(controller.on_next().await, ActionOutcome::Failed(busy()));
    assert_eq!(controller.state().cursor(), 0);
    assert_eq!(harness.clipboard.text().as_deref(), Some("orig"));

    // the skipped snapshot is replayed once the clipboard is free again
    assert_eq!(controller.on_next().await, ActionOutcome::Moved { cursor: 1 });
    assert_eq!(harness.clipboard.text().as_deref(), Some("b"));
}

#[tokio::test]
async fn failed_backward_write_keeps_the_cursor() {
    let harness = Harness::new(FakeClipboard::with_text("orig"));
    harness.clipboard.fail_next([busy(), busy(), busy()]);
    let mut controller = harness.controller_with(
        QueueConfig::immediate(),
        QueueState::from_items(["a", "b", "c"], 2),
    );

    assert_eq!(controller.on_prev().await, ActionOutcome::Failed(busy()));
    assert_eq!(controller.state().cursor(), 2);
}

#[tokio::test]
async fn blank_snapshots_can_be_skipped() {
    let harness = Harness::new(FakeClipboard::with_text("  \n\t"));
    let mut controller = harness.controller(QueueConfig {
        skip_blank: true,
        ..QueueConfig::immediate()
    });

    assert_eq!(
        controller.on_copy().await,
        ActionOutcome::Skipped(SkipReason::Blank)
    );
    assert_eq!(controller.state().size(), 0);
}

#[tokio::test]
async fn consecutive_duplicates_can_be_skipped() {
    let harness = Harness::new(FakeClipboard::with_text("same"));
    let mut controller = harness.controller(QueueConfig {
        skip_consecutive_duplicates: true,
        ..QueueConfig::immediate()
    });

    assert_eq!(
        controller.on_copy().await,
        ActionOutcome::Enqueued { size: 1 }
    );
    assert_eq!(
        controller.on_copy().await,
        ActionOutcome::Skipped(SkipReason::Duplicate)
    );

    harness.clipboard.set("different");
    controller.on_copy().await;
    harness.clipboard.set("same");
    assert_eq!(
        controller.on_copy().await,
        ActionOutcome::Enqueued { size: 3 }
    );
}

#[tokio::test]
async fn capacity_keeps_newest_snapshots() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller = harness.controller(QueueConfig {
        capacity: Some(2),
        ..QueueConfig::immediate()
    });

    for text in ["a", "b", "c"] {
        harness.clipboard.set(text);
        controller.on_copy().await;
    }
    assert_eq!(controller.state().items().collect::<Vec<_>>(), vec!["b", "c"]);
}

#[tokio::test]
async fn auto_paste_presses_paste_after_dequeue() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller = harness.controller_with(
        QueueConfig {
            auto_paste: true,
            ..QueueConfig::immediate()
        },
        QueueState::from_items(["a"], 0),
    );

    controller.on_paste().await;
    assert_eq!(harness.paste.presses.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn auto_paste_is_off_by_default() {
    let harness = Harness::new(FakeClipboard::default());
    let mut controller =
        harness.controller_with(QueueConfig::immediate(), QueueState::from_items(["a"], 0));

    controller.on_paste().await;
    assert_eq!(harness.paste.presses.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn auto_paste_failure_still_dequeues() {
    let mut paste = MockPaste::new();
    paste
        .expect_paste()
        .times(1)
        .returning(|| Err(PasteError::Failed("no display".into())));

    let clipboard = Arc::new(FakeClipboard::default());
    let mut controller = QueueController::with_state(
        QueueControllerDeps {
            clipboard: clipboard.clone(),
            paste: Arc::new(paste),
            clock: Arc::new(FakeClock::default()),
        },
        QueueConfig {
            auto_paste: true,
            ..QueueConfig::immediate()
        },
        QueueState::from_items(["x"], 0),
    );

    assert_eq!(controller.on_paste().await, ActionOutcome::Dequeued { size: 0 });
    assert_eq!(clipboard.text().as_deref(), Some("x"));
}
