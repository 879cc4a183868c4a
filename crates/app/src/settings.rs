//! Handles settings for the application.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. a TOML file (`abastecimento.toml`, or the path given with `--config`)
//! 3. environment variables prefixed with `ABASTECIMENTO__`, e.g.
//!    `ABASTECIMENTO__APP__LEVEL=debug`
//!
//! ```toml
//! [app]
//! level = "info"
//!
//! [database]
//! sqlite = "abastecimento.db"
//!
//! [export]
//! dir = "exports"
//! ```
use std::path::PathBuf;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "abastecimento.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct App {
    /// `tracing` level for the application crates.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite("abastecimento.db".to_string())
    }
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Export {
    /// Directory CSV exports are written to.
    pub dir: PathBuf,
}

impl Default for Export {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub database: Database,
    pub export: Export,
}

impl Settings {
    /// Load settings from `path` (or the default file, if present) and the
    /// environment.
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };
        let builder = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("ABASTECIMENTO").separator("__"));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
