use crate::core::duration::DurationStyle;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub duration_style: DurationStyle,
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            duration_style: DurationStyle::default(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtasktracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtasktracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtasktracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtasktracker.sqlite")
    }

    /// Parse a YAML configuration; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("failed to parse configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply a `--db` override, expanding a leading `~/`.
    pub fn with_database(mut self, db: Option<&str>) -> Self {
        if let Some(custom) = db {
            self.database = expand_tilde(custom).to_string_lossy().to_string();
        }
        self
    }

    /// Create the config directory and, unless `is_test`, write the config file.
    ///
    /// A relative custom database name is placed inside the config directory
    /// (in test mode it is used as given).
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_name {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() || is_test { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
