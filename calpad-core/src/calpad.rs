//! Calpad root: configuration plus the event store it points at.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::config::CalpadConfig;
use crate::error::{CalpadError, CalpadResult};
use crate::intent::ProviderIntentParser;
use crate::store::FileStore;

#[derive(Clone)]
pub struct Calpad {
    config: CalpadConfig,
    config_path: PathBuf,
}

impl Calpad {
    /// Load ~/.config/calpad/config.toml, creating a commented default on
    /// first run.
    pub fn load() -> CalpadResult<Self> {
        Self::load_from(&CalpadConfig::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> CalpadResult<Self> {
        if !config_path.exists() {
            CalpadConfig::create_default_config(config_path)?;
        }

        Ok(Calpad {
            config: CalpadConfig::load_from(config_path)?,
            config_path: config_path.to_path_buf(),
        })
    }

    pub fn config(&self) -> &CalpadConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The data directory in display-friendly form, keeping `~`.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn store(&self) -> CalpadResult<FileStore> {
        FileStore::open(&self.data_path())
    }

    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    /// Fail with [`CalpadError::ReadOnly`] when mutations are disabled.
    pub fn ensure_writable(&self) -> CalpadResult<()> {
        if self.config.read_only {
            return Err(CalpadError::ReadOnly);
        }
        Ok(())
    }

    pub fn set_read_only(&mut self, read_only: bool) -> CalpadResult<()> {
        if self.config.read_only == read_only {
            return Ok(());
        }
        self.config.read_only = read_only;
        self.config.save_to(&self.config_path)?;
        info!(read_only, "access mode changed");
        Ok(())
    }

    pub fn intent_parser(&self) -> ProviderIntentParser {
        ProviderIntentParser::from_name(&self.config.intent_provider)
            .with_timeout(Duration::from_secs(self.config.intent_timeout_secs))
    }
}
