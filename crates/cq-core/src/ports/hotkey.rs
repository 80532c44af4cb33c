//! Hotkey port - global keyboard shortcut registration
//!
//! An adapter owns the OS-level hook. Bound actions are not invoked as
//! callbacks on the adapter's thread; they are posted to a channel so a
//! single worker can apply them one at a time.

use tokio::sync::mpsc;

use super::HotkeyError;
use crate::hotkey::{HotkeyAction, KeyCombo};

/// Port for binding global hotkeys.
///
/// 全局快捷键端口。
///
/// # Behavior / 行为
/// - `bind()` must be called before `start()`.
/// - Each bound combination fires once per press, not while held.
/// - `stop()` should be idempotent.
pub trait HotkeyPort: Send {
    /// Bind `combo` to `action`. Binding the same combination twice fails.
    fn bind(&mut self, combo: KeyCombo, action: HotkeyAction) -> Result<(), HotkeyError>;

    /// Start listening; every matched press is sent on `tx`.
    fn start(&mut self, tx: mpsc::Sender<HotkeyAction>) -> Result<(), HotkeyError>;

    /// Stop listening.
    fn stop(&mut self);
}
