//! Configuration management for the roster application.
//!
//! Settings live in `config.json` inside the platform data directory
//! (see [`DataStorage`]). Every section is optional, so a missing file or a
//! partially filled one simply falls back to defaults.
//!
//! ```rust,no_run
//! use roster::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.database_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module shown by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Custom print command. The file path is appended after `args`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PrinterConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: Message::ReportTitle.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer: Option<PrinterConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Reads `config.json` from the platform data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Configured database file, or `roster.db` in the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    pub fn report_title(&self) -> String {
        self.report.clone().unwrap_or_default().title
    }

    /// Interactive setup wizard. Starts from the current configuration and
    /// only asks about the modules the user selects.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let modules = [
            ConfigModule {
                key: "database".to_string(),
                name: Message::ConfigModuleDatabase.to_string(),
            },
            ConfigModule {
                key: "printer".to_string(),
                name: Message::ConfigModulePrinter.to_string(),
            },
            ConfigModule {
                key: "report".to_string(),
                name: Message::ConfigModuleReport.to_string(),
            },
        ];
        let names: Vec<&str> = modules.iter().map(|module| module.name.as_str()).collect();

        let selections = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&names)
            .interact()?;

        for selection in selections {
            match modules[selection].key.as_str() {
                "database" => {
                    let current = config.database_path()?;
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(current.display().to_string())
                        .interact_text()?;
                    config.database = Some(PathBuf::from(path.trim()));
                }
                "printer" => {
                    let current = config.printer.clone().unwrap_or_default();
                    let command: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPrinterCommand.to_string())
                        .default(current.command)
                        .allow_empty(true)
                        .interact_text()?;
                    let args: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPrinterArgs.to_string())
                        .default(current.args.join(" "))
                        .allow_empty(true)
                        .interact_text()?;
                    config.printer = if command.trim().is_empty() {
                        None
                    } else {
                        Some(PrinterConfig {
                            command: command.trim().to_string(),
                            args: args.split_whitespace().map(str::to_string).collect(),
                        })
                    };
                }
                "report" => {
                    let title: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptReportTitle.to_string())
                        .default(config.report_title())
                        .interact_text()?;
                    config.report = Some(ReportConfig { title: title.trim().to_string() });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
