use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

const APP_NAME: &str = "roblox-game-list";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
    /// URL or path of a JSON document used to seed the list on startup
    #[serde(default)]
    pub bootstrap_source: Option<String>,
    #[serde(default = "default_bootstrap_timeout_secs")]
    pub bootstrap_timeout_secs: u64,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    #[serde(default = "default_config_version")]
    pub config_version: u32,
}

fn default_bootstrap_timeout_secs() -> u64 {
    10
}

fn default_config_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".").join(APP_NAME));

        Self {
            data_dir,
            log_level: "info".to_string(),
            bootstrap_source: None,
            bootstrap_timeout_secs: default_bootstrap_timeout_secs(),
            export_dir: None,
            config_version: default_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path)?;

        match toml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                if config.config_version < default_config_version() {
                    config = Self::migrate_config(config)?;
                    config.save_to(config_path)?;
                }
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config: {}. Using defaults and merging.", e);
                let mut config = Self::default();

                // Salvage whatever known keys still parse
                if let Ok(value) = toml::from_str::<toml::Value>(&contents) {
                    if let Some(table) = value.as_table() {
                        if let Some(dir) = table.get("data_dir").and_then(|v| v.as_str()) {
                            config.data_dir = PathBuf::from(dir);
                        }
                        if let Some(level) = table.get("log_level").and_then(|v| v.as_str()) {
                            config.log_level = level.to_string();
                        }
                        if let Some(source) = table.get("bootstrap_source").and_then(|v| v.as_str()) {
                            config.bootstrap_source = Some(source.to_string());
                        }
                        if let Some(secs) = table
                            .get("bootstrap_timeout_secs")
                            .and_then(|v| v.as_integer())
                            .and_then(|n| u64::try_from(n).ok())
                        {
                            config.bootstrap_timeout_secs = secs;
                        }
                        if let Some(dir) = table.get("export_dir").and_then(|v| v.as_str()) {
                            config.export_dir = Some(PathBuf::from(dir));
                        }
                    }
                }

                config.validate()?;
                config.save_to(config_path)?;
                Ok(config)
            }
        }
    }

    fn migrate_config(mut config: Config) -> Result<Self> {
        let target_version = default_config_version();

        log::info!(
            "Migrating config from v{} to v{}",
            config.config_version,
            target_version
        );

        if config.config_version < 1 && config.bootstrap_timeout_secs == 0 {
            config.bootstrap_timeout_secs = default_bootstrap_timeout_secs();
        }

        config.config_version = target_version;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if self.bootstrap_timeout_secs == 0 || self.bootstrap_timeout_secs > 300 {
            return Err(Error::Config(format!(
                "Invalid bootstrap_timeout_secs: {}. Must be between 1 and 300",
                self.bootstrap_timeout_secs
            )));
        }

        if let Some(source) = &self.bootstrap_source {
            if source.trim().is_empty() {
                return Err(Error::Config(
                    "bootstrap_source must not be empty; remove the key to disable bootstrap"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(config_path, contents)?;

        Ok(())
    }

    /// Directory export files go to when no explicit path is given
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
