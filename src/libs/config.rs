//! Configuration management for shiftbook.
//!
//! Settings are kept as pretty-printed JSON in the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\daphos\shiftbook\config.json`
//! - **macOS**: `~/Library/Application Support/daphos/shiftbook/config.json`
//! - **Linux**: `~/.local/share/daphos/shiftbook/config.json`
//!
//! Every section is optional. A missing file means defaults throughout; a
//! file that exists but does not parse is an error.
//!
//! ```rust,no_run
//! use shiftbook::libs::config::Config;
//!
//! let config = Config::read()?;
//! let recent = config.dashboard.unwrap_or_default().recent_shifts;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Number of shifts shown on an employee dashboard unless configured otherwise.
pub const DEFAULT_RECENT_SHIFTS: usize = 5;

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where the record store lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// SQLite file name, resolved inside the data directory.
    pub db_file: String,
}

/// Employee dashboard settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// How many of the most recently added shifts the dashboard lists.
    pub recent_shifts: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardConfig>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file: DB_FILE_NAME.to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            recent_shifts: DEFAULT_RECENT_SHIFTS,
        }
    }
}

impl Config {
    /// Loads the configuration file, or defaults when there is none yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "dashboard".to_string(),
                name: "Dashboard".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        db_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDbFile.to_string())
                            .default(default.db_file)
                            .interact_text()?,
                    });
                }
                "dashboard" => {
                    let default = config.dashboard.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDashboard);
                    config.dashboard = Some(DashboardConfig {
                        recent_shifts: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRecentShifts.to_string())
                            .default(default.recent_shifts)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
