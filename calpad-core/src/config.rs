//! Global calpad configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CalpadError, CalpadResult};

static DEFAULT_DATA_DIR: &str = "~/calpad";
static DEFAULT_INTENT_PROVIDER: &str = "gemini";
const DEFAULT_INTENT_TIMEOUT_SECS: u64 = 30;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &Path) -> bool {
    p == Path::new(DEFAULT_DATA_DIR)
}

fn default_intent_provider() -> String {
    DEFAULT_INTENT_PROVIDER.to_string()
}

fn is_default_intent_provider(p: &str) -> bool {
    p == DEFAULT_INTENT_PROVIDER
}

fn default_intent_timeout_secs() -> u64 {
    DEFAULT_INTENT_TIMEOUT_SECS
}

fn is_default_intent_timeout_secs(secs: &u64) -> bool {
    *secs == DEFAULT_INTENT_TIMEOUT_SECS
}

fn is_false(b: &bool) -> bool {
    !b
}

/// Configuration at ~/.config/calpad/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalpadConfig {
    /// Where events.json lives
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Access control: when set, callers refuse to create, edit or delete
    #[serde(default, skip_serializing_if = "is_false")]
    pub read_only: bool,

    /// Suffix of the calpad-intent-<name> binary used by `calpad ask`
    #[serde(
        default = "default_intent_provider",
        skip_serializing_if = "is_default_intent_provider"
    )]
    pub intent_provider: String,

    #[serde(
        default = "default_intent_timeout_secs",
        skip_serializing_if = "is_default_intent_timeout_secs"
    )]
    pub intent_timeout_secs: u64,
}

impl Default for CalpadConfig {
    fn default() -> Self {
        CalpadConfig {
            data_dir: default_data_dir(),
            read_only: false,
            intent_provider: default_intent_provider(),
            intent_timeout_secs: DEFAULT_INTENT_TIMEOUT_SECS,
        }
    }
}

impl CalpadConfig {
    pub fn config_path() -> CalpadResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalpadError::Config("Could not determine config directory".into()))?
            .join("calpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path` with the `config` crate; missing keys take defaults.
    pub fn load_from(path: &Path) -> CalpadResult<Self> {
        config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .build()
            .map_err(|e| CalpadError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalpadError::Config(e.to_string()))
    }

    /// Write the config to `path`, keeping only non-default keys.
    pub fn save_to(&self, path: &Path) -> CalpadResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalpadError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalpadError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CalpadError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalpadResult<()> {
        let contents = format!(
            "\
# calpad configuration

# Where your events are stored:
# data_dir = \"{}\"

# Prevent creating, editing and deleting events:
# read_only = true

# Free-text parser used by `calpad ask` (runs calpad-intent-<name>):
# intent_provider = \"{}\"
# intent_timeout_secs = {}
",
            DEFAULT_DATA_DIR, DEFAULT_INTENT_PROVIDER, DEFAULT_INTENT_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalpadError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalpadError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalpadConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, CalpadConfig::default());
    }

    #[test]
    fn commented_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        CalpadConfig::create_default_config(&path).unwrap();

        let config = CalpadConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("~/calpad"));
        assert!(!config.read_only);
        assert_eq!(config.intent_provider, "gemini");
    }

    #[test]
    fn save_then_load_keeps_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = CalpadConfig {
            read_only: true,
            intent_timeout_secs: 5,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("read_only = true"));
        assert!(!written.contains("data_dir"));
        assert!(!written.contains("intent_provider"));

        assert_eq!(CalpadConfig::load_from(&path).unwrap(), config);
    }
}
