//! # cq-core
//!
//! Core domain models and business logic for clipqueue.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the snapshot queue with its navigation cursor, the hotkey vocabulary, the
//! debounce cooldown and the ports implemented by the platform layer.

// Public module exports
pub mod config;
pub mod cooldown;
pub mod hotkey;
pub mod ports;
pub mod queue;

// Re-export commonly used types at the crate root
pub use config::QueueConfig;
pub use cooldown::Cooldown;
pub use hotkey::{HotkeyAction, Key, KeyCombo, Modifier};
pub use queue::{QueueError, QueueState};
