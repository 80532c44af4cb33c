use cq_core::ports::ClipboardError;

/// Result of handling one hotkey action.
///
/// Handlers never fail outward; every path ends in one of these so the
/// runtime can log it and tests can assert on it.
///
/// 单次热键动作的处理结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A snapshot was appended; `size` is the new queue length.
    Enqueued { size: usize },
    /// The head was written to the clipboard and removed.
    Dequeued { size: usize },
    /// The active flag flipped.
    Toggled { active: bool },
    /// The cursor moved and its snapshot was written to the clipboard.
    Moved { cursor: usize },
    /// Nothing happened, by rule.
    Skipped(SkipReason),
    /// The clipboard could not be used; the action was dropped.
    Failed(ClipboardError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Paused,
    EmptyQueue,
    NoMove,
    CoolingDown,
    Blank,
    Duplicate,
}
