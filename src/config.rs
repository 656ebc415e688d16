use crate::filter::EventFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Free-form label for the loaded profile.
    pub profile_name: String,
    pub logging: LoggingRules,
    pub scaffold: ScaffoldRules,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            profile_name: "default".to_string(),
            logging: LoggingRules::default(),
            scaffold: ScaffoldRules::default(),
        }
    }
}

impl KitConfig {
    /// Filter built from `logging.events`
    pub fn event_filter(&self) -> EventFilter {
        EventFilter::new(&self.logging.events)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingRules {
    /// Patterns used by `match`, `filter` and `events` when none are given.
    pub events: Vec<String>,
}

impl Default for LoggingRules {
    fn default() -> Self {
        Self {
            events: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldRules {
    pub plugin_dir: PathBuf,
    pub default_template: String,
}

impl Default for ScaffoldRules {
    fn default() -> Self {
        Self {
            plugin_dir: PathBuf::from(".opencode/plugin"),
            default_template: "basic".to_string(),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<KitConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<KitConfig, ConfigError> {
    let path_display = path.display().to_string();
    debug!(path = %path_display, "loading config");
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<KitConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static KitConfig {
    static DEFAULT_CONFIG: LazyLock<KitConfig> = LazyLock::new(KitConfig::default);
    &DEFAULT_CONFIG
}
