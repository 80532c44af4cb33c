//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and platform implementations. The queue controller only talks to the OS
//! through these traits, so it can be driven by in-memory fakes in tests.

pub mod clipboard;
mod clock;
pub mod errors;
pub mod hotkey;
pub mod paste;

pub use clipboard::ClipboardPort;
pub use clock::*;
pub use errors::{ClipboardError, HotkeyError, PasteError};
pub use hotkey::HotkeyPort;
pub use paste::PasteSimulatorPort;
