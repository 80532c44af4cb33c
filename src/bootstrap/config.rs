//! # Configuration Loader / 配置加载器
//!
//! Reads `QueueConfig` from TOML. Missing keys take their defaults through
//! `#[serde(default)]`; nothing is validated here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cq_core::QueueConfig;
use tracing::info;

/// Load configuration from a TOML file.
/// 从 TOML 文件加载配置。
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not a valid
/// `QueueConfig` document.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<QueueConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Like [`load_config`], but an absent file yields the defaults.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<QueueConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "No config file, using defaults");
        return Ok(QueueConfig::default());
    }

    let config = load_config(config_path.to_path_buf())?;
    info!(path = %config_path.display(), "Config loaded");
    Ok(config)
}
