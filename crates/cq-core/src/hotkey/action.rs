use std::fmt;

/// Action bound to a hotkey.
///
/// 热键绑定的动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    /// Capture the current clipboard into the queue.
    Copy,
    /// Put the oldest snapshot on the clipboard and drop it from the queue.
    Paste,
    /// Toggle between running and paused.
    Pause,
    /// Replay the next snapshot.
    Next,
    /// Replay the previous snapshot.
    Prev,
    /// Terminate the process.
    Exit,
}

impl HotkeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotkeyAction::Copy => "copy",
            HotkeyAction::Paste => "paste",
            HotkeyAction::Pause => "pause",
            HotkeyAction::Next => "next",
            HotkeyAction::Prev => "prev",
            HotkeyAction::Exit => "exit",
        }
    }
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
