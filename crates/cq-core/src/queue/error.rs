use thiserror::Error;

/// Queue operation errors.
///
/// 队列操作错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `pop_front` on an empty queue. Callers check `size()` first, so
    /// seeing this means a precondition was skipped.
    #[error("queue is empty")]
    EmptyQueue,

    /// Navigation attempted past either end of the queue.
    #[error("cursor cannot move further")]
    NoMove,
}
