//! Configuration management for pomolog.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file means defaults. Environment variables,
//! optionally loaded from a `.env` file, take precedence over the file:
//!
//! - `POMOLOG_DB`: path of the SQLite database
//! - `POMOLOG_TIME_UNIT`: `minutes` or `seconds`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomolog::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("crediting in {}", config.time_unit);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::accounting::TimeUnit;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "pomolog.db";

pub const ENV_DB: &str = "POMOLOG_DB";
pub const ENV_TIME_UNIT: &str = "POMOLOG_TIME_UNIT";

fn default_busy_timeout_ms() -> u64 {
    5000
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Database path; the data directory's `pomolog.db` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(default)]
    pub time_unit: TimeUnit,

    /// How long a write waits for a competing writer before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            time_unit: TimeUnit::default(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Config {
    /// Loads the configuration file (or defaults) and applies environment overrides.
    pub fn read() -> Result<Config> {
        dotenv::dotenv().ok();

        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(config_file_path)?;
            serde_json::from_str(&config_str)?
        } else {
            Config::default()
        };

        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(path) = env::var(ENV_DB) {
            if !path.trim().is_empty() {
                self.database = Some(path);
            }
        }
        if let Ok(unit) = env::var(ENV_TIME_UNIT) {
            self.time_unit = unit.parse().map_err(|e: String| anyhow!(e))?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Resolved database location.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(PathBuf::from(path)),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader);

        let default_db = current.database_path()?.to_string_lossy().to_string();
        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(default_db)
            .interact_text()?;

        let units = [TimeUnit::Minutes, TimeUnit::Seconds];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeUnit.to_string())
            .items(&units.iter().map(|u| u.as_str()).collect::<Vec<_>>())
            .default(units.iter().position(|u| *u == current.time_unit).unwrap_or(0))
            .interact()?;

        let busy_timeout_ms: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBusyTimeout.to_string())
            .default(current.busy_timeout_ms)
            .interact_text()?;

        Ok(Config {
            database: Some(database),
            time_unit: units[selected],
            busy_timeout_ms,
        })
    }
}
