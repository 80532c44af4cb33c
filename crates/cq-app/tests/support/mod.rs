//! Shared fakes for cq-app integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cq_app::{QueueController, QueueControllerDeps};
use cq_core::ports::{ClipboardError, ClipboardPort, ClockPort, PasteError, PasteSimulatorPort};
use cq_core::{QueueConfig, QueueState};

/// In-memory clipboard that records every access.
#[derive(Default)]
pub struct FakeClipboard {
    content: Mutex<Option<String>>,
    /// Errors returned, in order, before falling back to normal behavior.
    failures: Mutex<VecDeque<ClipboardError>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl FakeClipboard {
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(text);
        clipboard
    }

    pub fn set(&self, text: &str) {
        *self.content.lock().unwrap() = Some(text.to_string());
    }

    pub fn text(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn fail_next(&self, errors: impl IntoIterator<Item = ClipboardError>) {
        self.failures.lock().unwrap().extend(errors);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn next_failure(&self) -> Option<ClipboardError> {
        self.failures.lock().unwrap().pop_front()
    }
}

impl ClipboardPort for FakeClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.next_failure() {
            return Err(err);
        }
        self.content
            .lock()
            .unwrap()
            .clone()
            .ok_or(ClipboardError::Empty)
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.next_failure() {
            return Err(err);
        }
        self.set(text);
        Ok(())
    }
}

/// Manually advanced millisecond clock.
#[derive(Default)]
pub struct FakeClock {
    now: AtomicI64,
}

impl FakeClock {
    pub fn at(ms: i64) -> Self {
        Self {
            now: AtomicI64::new(ms),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockPort for FakeClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Paste simulator that only counts presses.
#[derive(Default)]
pub struct CountingPaste {
    pub presses: AtomicUsize,
}

impl PasteSimulatorPort for CountingPaste {
    fn paste(&self) -> Result<(), PasteError> {
        self.presses.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct Harness {
    pub clipboard: Arc<FakeClipboard>,
    pub clock: Arc<FakeClock>,
    pub paste: Arc<CountingPaste>,
}

impl Harness {
    pub fn new(clipboard: FakeClipboard) -> Self {
        Self {
            clipboard: Arc::new(clipboard),
            clock: Arc::new(FakeClock::at(10_000)),
            paste: Arc::new(CountingPaste::default()),
        }
    }

    pub fn deps(&self) -> QueueControllerDeps {
        QueueControllerDeps {
            clipboard: self.clipboard.clone(),
            paste: self.paste.clone(),
            clock: self.clock.clone(),
        }
    }

    pub fn controller(&self, config: QueueConfig) -> QueueController {
        QueueController::new(self.deps(), config)
    }

    pub fn controller_with(&self, config: QueueConfig, state: QueueState) -> QueueController {
        QueueController::with_state(self.deps(), config, state)
    }
}
