//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `cq-app` and `cq-platform` together.
//! It assembles adapters into a [`QueueController`] and makes no decisions
//! beyond picking adapters from the config.

use std::sync::Arc;

use anyhow::Context;
use cq_app::{QueueController, QueueControllerDeps};
use cq_core::ports::PasteSimulatorPort;
use cq_core::QueueConfig;
use cq_platform::{EnigoPasteSimulator, NoopPasteSimulator, SystemClipboard, SystemClock};

/// Build the OS-backed controller dependencies.
pub fn wire_dependencies(config: &QueueConfig) -> anyhow::Result<QueueControllerDeps> {
    let clipboard = SystemClipboard::new().context("failed to open the system clipboard")?;

    let paste: Arc<dyn PasteSimulatorPort> = if config.auto_paste {
        Arc::new(EnigoPasteSimulator::new())
    } else {
        Arc::new(NoopPasteSimulator)
    };

    Ok(QueueControllerDeps {
        clipboard: Arc::new(clipboard),
        paste,
        clock: Arc::new(SystemClock::new()),
    })
}

pub fn build_controller(config: QueueConfig) -> anyhow::Result<QueueController> {
    let deps = wire_dependencies(&config)?;
    Ok(QueueController::new(deps, config))
}
