//! Hotkey vocabulary.
//!
//! Key combinations and the actions they trigger. These are pure value
//! types; listening for key presses is done by a [`HotkeyPort`] adapter.
//!
//! [`HotkeyPort`]: crate::ports::HotkeyPort

mod action;
mod combo;

pub use action::HotkeyAction;
pub use combo::{ComboParseError, Key, KeyCombo, Modifier};
