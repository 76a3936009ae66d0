//! Dashboard configuration.
//!
//! Sources, later ones winning:
//! 1. built-in defaults (`outputs/`, `processed_data/`, first section)
//! 2. a TOML file: `$SENTIVIEW_CONFIG`, else `sentiview.toml` in the working
//!    directory if it exists
//! 3. `SENTIVIEW_IMAGE_ROOT`, `SENTIVIEW_DATA_ROOT`, `SENTIVIEW_SECTION`
//!
//! ```toml
//! image_root = "outputs"
//! data_root = "processed_data"
//! default_section = "market_sentiment"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::{info, warn};

use super::error::{ConfigError, Result};
use super::registry::Section;

pub const CONFIG_ENV: &str = "SENTIVIEW_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "sentiview.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Directory holding the PNG charts.
    pub image_root: PathBuf,
    /// Directory holding the exported CSV tables.
    pub data_root: PathBuf,
    /// Section shown when the dashboard opens.
    pub default_section: Section,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from("outputs"),
            data_root: PathBuf::from("processed_data"),
            default_section: Section::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(path: &str, raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| ConfigError::InvalidFile {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_toml_str(&path.display().to_string(), &raw)
    }

    /// Resolve config from the process environment and working directory.
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Like [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = match env(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.with_overrides(env)
    }

    pub fn with_overrides(mut self, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(root) = env("SENTIVIEW_IMAGE_ROOT") {
            self.image_root = PathBuf::from(root);
        }
        if let Some(root) = env("SENTIVIEW_DATA_ROOT") {
            self.data_root = PathBuf::from(root);
        }
        if let Some(section) = env("SENTIVIEW_SECTION") {
            self.default_section = section.parse()?;
        }
        Ok(self)
    }
}

static INSTALLED: OnceCell<DashboardConfig> = OnceCell::new();

/// Install the process-wide config. Only the first call takes effect.
pub fn install(config: DashboardConfig) {
    info!(
        image_root = %config.image_root.display(),
        data_root = %config.data_root.display(),
        section = config.default_section.id(),
        "dashboard config installed"
    );
    if INSTALLED.set(config).is_err() {
        warn!("dashboard config already installed; ignoring");
    }
}

/// Installed config, falling back to defaults when the shell installed none.
pub fn installed() -> &'static DashboardConfig {
    INSTALLED.get_or_init(DashboardConfig::default)
}
