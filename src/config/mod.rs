use crate::core::controller::{ControllerSettings, DEFAULT_MAP_ZOOM};
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::store::codec::DEFAULT_STORE_KEY;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Overrides the configuration directory (tests, portable installs).
pub const CONFIG_DIR_ENV: &str = "RMAPLOG_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_store_key")]
    pub store_key: String,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
    #[serde(default = "default_form_reenable_delay_ms")]
    pub form_reenable_delay_ms: u64,
    /// Position used to center the map; without it the map stays uninitialised.
    #[serde(default)]
    pub home: Option<Location>,
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}
fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}
fn default_form_reenable_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            store_key: default_store_key(),
            map_zoom: default_map_zoom(),
            form_reenable_delay_ms: default_form_reenable_delay_ms(),
            home: None,
        }
    }
}

impl Config {
    /// Return the configuration directory: `$RMAPLOG_CONFIG_DIR`, else `~/.rmaplog`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rmaplog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmaplog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rmaplog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {e}", path.display()))
        })?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Write this configuration to the config file, creating the directory if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            map_zoom: self.map_zoom,
            form_reenable_delay: Duration::from_millis(self.form_reenable_delay_ms),
        }
    }
}
