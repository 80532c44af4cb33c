//! Snapshot queue domain.
//!
//! 剪贴板快照队列领域模型。

mod error;
mod state;

pub use error::QueueError;
pub use state::QueueState;
