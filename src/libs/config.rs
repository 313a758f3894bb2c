//! Configuration management for furnace-report.
//!
//! The report engine runs fine without any configuration: the built-in norms
//! table and site header are used. A JSON configuration file lets a plant
//! override them.
//!
//! ## Configuration Structure
//!
//! Every section is optional and omitted from the file when unset:
//!
//! - **site**: workshop name and responsible person printed in the report header
//! - **norms**: furnace name to norm minutes, replacing the built-in table entirely
//! - **output**: default directory for written report files
//!
//! ```json
//! {
//!   "site": { "workshop": "Foundry shop", "responsible": "Fedotov A.A." },
//!   "norms": {
//!     "Furnace 1": { "cycle1": 510, "cycle2": 210, "break_time": 40, "total": 760 }
//!   },
//!   "output": { "directory": "/srv/reports" }
//! }
//! ```
//!
//! ## Storage
//!
//! The file is `config.json` in the platform data directory resolved by
//! [`DataStorage`]:
//! - **Windows**: `%LOCALAPPDATA%\foundry\furnace-report\config.json`
//! - **macOS**: `~/Library/Application Support/foundry/furnace-report/config.json`
//! - **Linux**: `~/.local/share/foundry/furnace-report/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use furnace_report::libs::config::Config;
//!
//! let config = Config::read()?;
//! let norms = config.norms_table();
//! println!("Configured furnaces: {:?}", norms.furnaces());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::norms::{NormSet, NormsTable};
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Site details printed in the report header.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Workshop or shop name, e.g. "Foundry shop".
    pub workshop: String,
    /// Person responsible for the heat-treatment line.
    pub responsible: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            workshop: "Foundry shop".to_string(),
            responsible: "Fedotov A.A.".to_string(),
        }
    }
}

/// Where report files are written when no `--output` is given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutputConfig {
    pub directory: String,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteConfig>,

    /// Replaces the built-in norms table when present and non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub norms: Option<BTreeMap<String, NormSet>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error: the default (empty) configuration is
    /// returned so the application works out of the box.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        msg_debug!(format!("Reading configuration from {}", config_file_path.display()));

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    ///
    /// Returns `true` when a file was deleted.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Builds the norms table used for report generation.
    ///
    /// Falls back to the built-in defaults when no norms are configured or
    /// the configured map is empty. Zero values are kept as-is; they surface
    /// as a `DivisionByZeroNorm` error when a report uses them.
    pub fn norms_table(&self) -> NormsTable {
        match &self.norms {
            Some(norms) if !norms.is_empty() => NormsTable::new(norms.clone()),
            Some(_) => {
                msg_warning!(Message::ConfigNormsEmpty);
                NormsTable::default()
            }
            None => NormsTable::default(),
        }
    }

    /// Site header, defaulted when not configured.
    pub fn site(&self) -> SiteConfig {
        self.site.clone().unwrap_or_default()
    }

    /// Configured output directory, if any.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|output| PathBuf::from(&output.directory))
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the current configuration so existing values appear as
    /// defaults, lets the user choose which sections to edit, then prompts for
    /// each value. The returned configuration still has to be saved.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "site".to_string(),
                name: "Site".to_string(),
            },
            ConfigModule {
                key: "norms".to_string(),
                name: "Furnace norms".to_string(),
            },
            ConfigModule {
                key: "output".to_string(),
                name: "Output".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "site" => {
                    let default = config.site();
                    msg_print!(Message::ConfigModuleSite);
                    config.site = Some(SiteConfig {
                        workshop: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptWorkshop.to_string())
                            .default(default.workshop)
                            .interact_text()?,
                        responsible: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptResponsible.to_string())
                            .default(default.responsible)
                            .interact_text()?,
                    });
                }
                "norms" => {
                    msg_print!(Message::ConfigModuleNorms);
                    config.norms = Some(Self::init_norms(&config.norms_table())?);
                }
                "output" => {
                    let default = config.output.clone().unwrap_or(OutputConfig {
                        directory: ".".to_string(),
                    });
                    msg_print!(Message::ConfigModuleOutput);
                    config.output = Some(OutputConfig {
                        directory: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptOutputDirectory.to_string())
                            .default(default.directory)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Prompts for the norms of every known furnace, then offers to add more.
    fn init_norms(current: &NormsTable) -> Result<BTreeMap<String, NormSet>> {
        let mut norms = BTreeMap::new();
        for (name, default) in current.iter() {
            msg_print!(Message::ConfigFurnaceHeader(name.to_string()));
            norms.insert(name.to_string(), Self::prompt_norm_set(default)?);
        }

        while Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAddFurnace.to_string())
            .default(false)
            .interact()?
        {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptFurnaceName.to_string())
                .interact_text()?;
            let name = name.trim().to_string();
            if name.is_empty() {
                continue;
            }
            let default = norms.get(&name).copied().unwrap_or(NormSet {
                cycle1: 1,
                cycle2: 1,
                break_time: 1,
                total: 3,
            });
            norms.insert(name, Self::prompt_norm_set(&default)?);
        }

        Ok(norms)
    }

    fn prompt_norm_set(default: &NormSet) -> Result<NormSet> {
        let prompt = |message: Message, value: u32| -> Result<u32> {
            Ok(Input::with_theme(&ColorfulTheme::default())
                .with_prompt(message.to_string())
                .default(value)
                .validate_with(|minutes: &u32| if *minutes > 0 { Ok(()) } else { Err(Message::NormMustBePositive.to_string()) })
                .interact_text()?)
        };

        Ok(NormSet {
            cycle1: prompt(Message::PromptNormCycle1, default.cycle1)?,
            cycle2: prompt(Message::PromptNormCycle2, default.cycle2)?,
            break_time: prompt(Message::PromptNormBreak, default.break_time)?,
            total: prompt(Message::PromptNormTotal, default.total)?,
        })
    }
}
