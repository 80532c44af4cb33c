pub mod clipboard;
pub mod clock;
pub mod hotkey;
pub mod paste;

pub use clipboard::SystemClipboard;
pub use clock::SystemClock;
pub use hotkey::{DeviceQueryHotkeys, HotkeyMatcher};
pub use paste::{EnigoPasteSimulator, NoopPasteSimulator};
