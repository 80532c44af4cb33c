use thiserror::Error;

use crate::hotkey::KeyCombo;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The OS clipboard could not be opened, read or written,
    /// typically because another process holds it.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard holds no text.
    #[error("clipboard holds no text")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    #[error("hotkey backend unavailable: {0}")]
    Unavailable(String),

    #[error("combination already bound: {0}")]
    AlreadyBound(KeyCombo),

    #[error("hotkey listener already started")]
    AlreadyListening,

    #[error("hotkey channel closed")]
    ChannelClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    #[error("input simulation unavailable: {0}")]
    Unavailable(String),

    #[error("failed to simulate paste: {0}")]
    Failed(String),
}
