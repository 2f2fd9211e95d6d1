use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the two data files.
    pub data_dir: String,
    #[serde(default = "default_users_file")]
    pub users_file: String,
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
}

fn default_users_file() -> String {
    "users.csv".to_string()
}
fn default_ledger_file() -> String {
    "shifts.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            users_file: default_users_file(),
            ledger_file: default_ledger_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftlog.conf")
    }

    pub fn users_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.users_file)
    }

    pub fn ledger_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.ledger_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists()
            && let Ok(raw) = fs::read_to_string(&path)
            && let Ok(cfg) = serde_yaml::from_str(&raw)
        {
            return cfg;
        }
        Config::default()
    }

    /// Persist the configuration, creating the config directory if needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let raw = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), raw).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}
