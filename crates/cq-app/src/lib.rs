//! clipqueue application orchestration layer
//!
//! This crate contains the hotkey action handlers and the runtime that
//! serializes them.
//!
//! ```text
//! [HotkeyPort adapter]
//!         ↓  HotkeyAction (mpsc)
//! QueueRuntime
//!         ↓
//! QueueController → QueueState / ClipboardPort
//! ```

pub mod bindings;
pub mod controller;
pub mod outcome;
pub mod runtime;

pub use bindings::HotkeyBindings;
pub use controller::{QueueController, QueueControllerDeps};
pub use outcome::{ActionOutcome, SkipReason};
pub use runtime::{QueueRuntime, QueueRuntimeHandle, ACTION_BUFFER};
