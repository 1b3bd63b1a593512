//! Optional user configuration for the `quarter` CLI.
//!
//! Read from `--config <path>` or, if absent, from
//! `<config dir>/quarter/config.toml`. A missing default file is not an
//! error; a missing explicit file is.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            output: OutputFormat::Table,
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Load `explicit` if given, else the per-user default if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::parse(&std::fs::read_to_string(path)?),
            None => match default_path() {
                Some(path) if path.is_file() => Self::parse(&std::fs::read_to_string(path)?),
                _ => Ok(Self::default()),
            },
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quarter").join("config.toml"))
}
