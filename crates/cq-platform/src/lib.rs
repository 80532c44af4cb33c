//! Platform adapters for clipqueue.
//!
//! Implementations of the `cq-core` ports against the real OS: clipboard
//! access, global hotkeys, keystroke simulation and the wall clock.

pub mod adapters;
pub mod app_dirs;

pub use adapters::{
    DeviceQueryHotkeys, EnigoPasteSimulator, HotkeyMatcher, NoopPasteSimulator, SystemClipboard,
    SystemClock,
};
pub use app_dirs::AppPaths;
