//! Queue runtime
//!
//! A single worker that owns the [`QueueController`] and applies hotkey
//! actions strictly one at a time. Hotkey adapters may fire from any
//! thread; they only ever post into the channel, so no two handlers can
//! touch the queue concurrently.
//!
//! 单一工作者：顺序处理所有热键动作。

use tokio::sync::mpsc;
use tracing::{debug, info};

use cq_core::ports::HotkeyError;
use cq_core::HotkeyAction;

use crate::controller::QueueController;

/// Default depth of the action channel.
pub const ACTION_BUFFER: usize = 64;

pub struct QueueRuntime {
    controller: QueueController,
    action_rx: mpsc::Receiver<HotkeyAction>,
}

/// Sending side of a [`QueueRuntime`].
#[derive(Clone)]
pub struct QueueRuntimeHandle {
    action_tx: mpsc::Sender<HotkeyAction>,
}

impl QueueRuntime {
    pub fn new(controller: QueueController, action_rx: mpsc::Receiver<HotkeyAction>) -> Self {
        Self {
            controller,
            action_rx,
        }
    }

    /// Create a runtime together with its handle.
    pub fn channel(controller: QueueController, buffer: usize) -> (Self, QueueRuntimeHandle) {
        let (action_tx, action_rx) = mpsc::channel(buffer.max(1));
        (
            Self::new(controller, action_rx),
            QueueRuntimeHandle { action_tx },
        )
    }

    /// Process actions until [`HotkeyAction::Exit`] arrives or every sender
    /// is dropped. Returns the controller so its final state can be inspected.
    pub async fn run(mut self) -> QueueController {
        info!("Queue runtime started");

        while let Some(action) = self.action_rx.recv().await {
            debug!(%action, "Hotkey action received");
            match self.controller.handle(action).await {
                Some(outcome) => {
                    debug!(%action, ?outcome, size = self.controller.state().size(), "Action handled");
                }
                None => {
                    info!("Exit requested");
                    break;
                }
            }
        }

        self.action_rx.close();
        info!("Queue runtime stopped");
        self.controller
    }
}

impl QueueRuntimeHandle {
    /// Sender to hand to a hotkey adapter.
    pub fn sender(&self) -> mpsc::Sender<HotkeyAction> {
        self.action_tx.clone()
    }

    pub async fn send(&self, action: HotkeyAction) -> Result<(), HotkeyError> {
        self.action_tx
            .send(action)
            .await
            .map_err(|_| HotkeyError::ChannelClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.action_tx.is_closed()
    }
}
