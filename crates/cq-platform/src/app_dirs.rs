use std::path::{Path, PathBuf};

use anyhow::Context;

const APP_DIR_NAME: &str = "clipqueue";

/// Filesystem locations used by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    /// Resolve from the platform's standard directories.
    pub fn resolve() -> anyhow::Result<Self> {
        let config_base = dirs::config_dir().context("failed to get system config directory")?;
        let data_base =
            dirs::data_local_dir().context("failed to get system data local directory")?;
        Ok(Self::from_bases(&config_base, &data_base))
    }

    pub fn from_bases(config_base: &Path, data_base: &Path) -> Self {
        Self {
            config_file: config_base.join(APP_DIR_NAME).join("config.toml"),
            logs_dir: data_base.join(APP_DIR_NAME).join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_namespaced_under_app_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = AppPaths::from_bases(&tmp.path().join("cfg"), &tmp.path().join("data"));

        assert_eq!(
            paths.config_file,
            tmp.path().join("cfg").join("clipqueue").join("config.toml")
        );
        assert_eq!(
            paths.logs_dir,
            tmp.path().join("data").join("clipqueue").join("logs")
        );
    }
}
