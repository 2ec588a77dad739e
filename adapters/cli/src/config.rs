use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default configuration file looked up next to the working directory.
const DEFAULT_CONFIG_PATH: &str = "zen-maze.toml";
/// Default location of the best-time record file.
const DEFAULT_RECORDS_PATH: &str = "zen-maze-records.toml";

/// Launch configuration for the command-line shell.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Level loaded when no identifier is passed on the command line.
    pub(crate) start_level: u32,
    /// Carve fresh topology per lookup instead of the stable per-id maze.
    pub(crate) fresh_topology: bool,
    /// File the best-time store persists to.
    pub(crate) records_path: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            start_level: 1,
            fresh_topology: false,
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
        }
    }
}

/// Loads the launch configuration.
///
/// An explicitly provided path must exist and parse; the implicit default
/// path is optional and falls back to the built-in configuration when the
/// file is absent.
pub(crate) fn load(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(path) => parse_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                parse_file(default_path)
            } else {
                Ok(CliConfig::default())
            }
        }
    }
}

fn parse_file(path: &Path) -> Result<CliConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration at {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse configuration at {}", path.display()))
}
