use crate::core::store::Addressing;
use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_against;
use crate::utils::time::{DEFAULT_TIMESTAMP_FORMAT, is_valid_format};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default)]
    pub addressing: Addressing,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            timestamp_format: default_timestamp_format(),
            addressing: Addressing::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dwriter")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".dwriter")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dwriter.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("DWriteData.db")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, at render time.
    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("'database' must not be empty".into()));
        }
        if !is_valid_format(&self.timestamp_format) {
            return Err(AppError::Config(format!(
                "invalid timestamp_format '{}'",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    /// Resolved database path (`~` expanded, relative names under the config dir).
    pub fn database_path(&self) -> PathBuf {
        resolve_against(&Self::config_dir(), &self.database)
    }

    /// Initialize the configuration directory and file.
    /// Returns the database path the configuration points to.
    pub fn init_all(custom_db: Option<PathBuf>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let db_path = custom_db.unwrap_or_else(Self::database_file);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(db_path)
    }
}
