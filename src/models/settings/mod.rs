// Settings module
// Application configuration stored as config.toml in the platform config dir

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::category::{is_valid_hex_color, EventCategory};
use crate::models::event::DEFAULT_EVENT_COLOR;
use crate::services::storage::is_valid_key;

/// Storage slot that holds the serialized event list.
pub const DEFAULT_STORAGE_KEY: &str = "calendarEvents";

/// How long a toast stays visible, in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub storage_key: String,
    /// Directory for the file-backed store; platform data dir when unset.
    pub data_dir: Option<PathBuf>,
    pub toast_duration_ms: u64,
    pub default_category: EventCategory,
    pub default_color: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            default_category: EventCategory::Personal,
            default_color: DEFAULT_EVENT_COLOR.to_string(),
        }
    }
}

impl CalendarConfig {
    /// Load config from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: CalendarConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Load from the platform config location, or defaults if there is none.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => {
                log::warn!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Directory for the file-backed store.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("Failed to get data directory")
    }

    /// Replace unusable values with defaults instead of failing the load.
    fn sanitized(mut self) -> Self {
        if !is_valid_key(&self.storage_key) {
            log::warn!(
                "Unusable storage_key '{}' in config, using {}",
                self.storage_key,
                DEFAULT_STORAGE_KEY
            );
            self.storage_key = DEFAULT_STORAGE_KEY.to_string();
        }
        if !is_valid_hex_color(&self.default_color) {
            log::warn!(
                "Invalid default_color '{}' in config, using {}",
                self.default_color,
                DEFAULT_EVENT_COLOR
            );
            self.default_color = DEFAULT_EVENT_COLOR.to_string();
        }
        self
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "MonthPlanner", "MonthPlanner")
}

/// Platform location of `config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
