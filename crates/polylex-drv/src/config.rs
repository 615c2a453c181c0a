//! Configuration file handling.
//!
//! Settings come from an optional `polylex.toml`; command-line values
//! override whatever the file says.

use dirs::{config_dir, home_dir};
use polylex_lex::Language;
use polylex_sym::{HashStrategy, TableLayout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "polylex.toml";

/// Output format of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One bracketed token per line, then the symbol table report
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Language used when neither the command line nor the input extension
    /// names one.
    #[serde(default)]
    pub language: Option<Language>,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Symbol table settings.
    #[serde(default)]
    pub symbols: SymbolsConfig,
}

/// `[symbols]` section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SymbolsConfig {
    /// Table layout.
    #[serde(default)]
    pub layout: TableLayout,

    /// Bucket count; the layout's default when absent.
    #[serde(default)]
    pub buckets: Option<usize>,

    /// Hash strategy; the layout's default when absent.
    #[serde(default)]
    pub hash: Option<HashStrategy>,

    /// Whether to print the symbol table after the tokens.
    #[serde(default = "default_true")]
    pub show: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            layout: TableLayout::default(),
            buckets: None,
            hash: None,
            show: true,
        }
    }
}

impl FileConfig {
    /// Load configuration from the default locations.
    ///
    /// Searches in the following order:
    /// 1. `./polylex.toml`
    /// 2. `~/.config/polylex/polylex.toml`
    /// 3. `<system config dir>/polylex/polylex.toml`
    ///
    /// Returns the default configuration if no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("polylex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("polylex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
