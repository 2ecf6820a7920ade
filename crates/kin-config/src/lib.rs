//! # kin-config
//!
//! Layered configuration loading for Kinema using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KIN_*` prefix, `__` as separator)
//! 2. User-level `~/.config/kinema/config.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KIN_HISTORY__PATH` -> `history.path`, `KIN_UI__BANNER` ->
//! `ui.banner`, etc. The `__` (double underscore) separates nested config
//! sections.

mod error;
mod history;
mod ui;

pub use error::ConfigError;
pub use history::HistoryConfig;
pub use ui::UiConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KinConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl KinConfig {
    /// Load configuration from all sources (TOML file + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`KinConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source holds values that do
    /// not extract into the config shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads a `.env` from the working directory before building the
    /// figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`KinConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        figment.merge(Env::prefixed("KIN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kinema").join("config.toml"))
    }
}
