use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, home_dir};
use crate::utils::time::parse_duration_to_minutes;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = ".timed.conf";
const DATABASE_FILE_NAME: &str = ".timed.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Hours that make up one regular working day, e.g. "8h" or "7h30m".
    #[serde(default = "default_daily_target")]
    pub daily_target: String,
    /// How far `list` looks back when no start date is given.
    #[serde(default = "default_list_days_back")]
    pub list_days_back: i64,
}

fn default_daily_target() -> String {
    "8h".to_string()
}
fn default_list_days_back() -> i64 {
    30
}

impl Config {
    /// Defaults rooted in the given home directory.
    pub fn with_home(home: &std::path::Path) -> Self {
        Self {
            database: home.join(DATABASE_FILE_NAME).to_string_lossy().to_string(),
            daily_target: default_daily_target(),
            list_days_back: default_list_days_back(),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> AppResult<PathBuf> {
        Ok(home_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let home = home_dir()?;
        let path = home.join(CONFIG_FILE_NAME);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::with_home(&home));
        }

        let content =
            fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        let mut cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<PathBuf> {
        let path = Self::config_file()?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(&path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(path)
    }

    /// The overtime baseline in minutes.
    pub fn daily_target_minutes(&self) -> AppResult<i64> {
        parse_duration_to_minutes(&self.daily_target).ok_or_else(|| {
            AppError::Config(format!(
                "invalid daily_target '{}' (use e.g. 8h, 7h30m or 450m)",
                self.daily_target
            ))
        })
    }
}
