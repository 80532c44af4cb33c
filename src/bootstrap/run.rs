use anyhow::Context;
use tracing::{info, warn};

use cq_app::{HotkeyBindings, QueueRuntime, ACTION_BUFFER};
use cq_core::ports::HotkeyPort;
use cq_core::{HotkeyAction, QueueConfig};
use cq_platform::DeviceQueryHotkeys;

use super::wiring::build_controller;

/// Run the queue until the exit hotkey (or an interrupt) is received.
///
/// 运行剪贴板队列，直到收到退出快捷键。
pub async fn run_app(config: QueueConfig) -> anyhow::Result<()> {
    let poll_interval = config.poll_interval();
    let controller = build_controller(config)?;
    let (runtime, handle) = QueueRuntime::channel(controller, ACTION_BUFFER);

    let bindings = HotkeyBindings::fixed();
    let mut hotkeys = DeviceQueryHotkeys::new(poll_interval);
    bindings
        .register(&mut hotkeys)
        .context("failed to bind hotkeys")?;
    hotkeys
        .start(handle.sender())
        .context("failed to start the hotkey listener")?;

    let exit_combo = bindings
        .combo_for(HotkeyAction::Exit)
        .map(ToString::to_string)
        .unwrap_or_default();
    info!(exit = %exit_combo, "clipqueue is running");

    let interrupt = handle.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, shutting down");
                // Already closed means the runtime is gone anyway.
                let _ = interrupt.send(HotkeyAction::Exit).await;
            }
            Err(e) => warn!(error = %e, "Cannot listen for interrupt signal"),
        }
    });

    let controller = runtime.run().await;
    hotkeys.stop();

    info!(
        remaining = controller.state().size(),
        "clipqueue stopped"
    );
    Ok(())
}
