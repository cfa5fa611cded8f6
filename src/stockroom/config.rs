use crate::error::{Result, StockroomError};
use crate::logging::normalize_level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for stockroom, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// File name of the inventory log inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Level handed to the file logger (trace|debug|info|warn|error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockroomConfig =
            serde_json::from_str(&content).map_err(StockroomError::Deserialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockroomError::Serialization)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["data-file", "log-level"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => self.set_data_file(value),
            "log-level" => {
                self.log_level = normalize_level(value)?.to_string();
                Ok(())
            }
            other => Err(StockroomError::InvalidArgument(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }

    /// Set the log file name (appends `.json` when no extension is given)
    pub fn set_data_file(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StockroomError::InvalidArgument(
                "data-file cannot be empty".to_string(),
            ));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(StockroomError::InvalidArgument(format!(
                "data-file must be a plain file name, got `{}`",
                name
            )));
        }
        self.data_file = if Path::new(name).extension().is_some() {
            name.to_string()
        } else {
            format!("{}.json", name)
        };
        Ok(())
    }
}
