use anyhow::Context;
use tracing::error;

use clipqueue_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use cq_platform::AppPaths;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    init_tracing_subscriber(Some(&paths.logs_dir)).context("failed to initialize tracing")?;

    let config = bootstrap::load_config_or_default(&paths.config_file)?;

    if let Err(e) = bootstrap::run_app(config).await {
        error!(error = ?e, "clipqueue exited with error");
        return Err(e);
    }
    Ok(())
}
