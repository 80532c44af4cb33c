//! Clipboard port - abstracts local clipboard access
//!
//! Text only. Writes are fire-and-trust: nothing verifies afterwards that
//! the clipboard still holds what was written, since other applications
//! may change it at any time.

use super::ClipboardError;

/// Clipboard port - abstracts local clipboard access
///
/// 剪贴板端口，屏蔽平台差异。
pub trait ClipboardPort: Send + Sync {
    /// Read the current clipboard text.
    fn read_text(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
