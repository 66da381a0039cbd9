//! Configuration file handling for the seam CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// API endpoint override
    pub endpoint: Option<String>,
    /// Workspace to scope requests to (client session tokens only)
    pub workspace_id: Option<String>,
    /// Default output format: `table` or `json`
    pub output: Option<OutputFormat>,
    /// Disable colored output
    pub no_color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("seam-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values.
    ///
    /// Anything still unset is left to the client, which falls back to the
    /// `SEAM_*` environment and then the public endpoint.
    pub fn merge_with_args(
        &self,
        endpoint: Option<&str>,
        workspace_id: Option<&str>,
        output: Option<OutputFormat>,
        no_color: bool,
    ) -> MergedConfig {
        MergedConfig {
            endpoint: endpoint.map(String::from).or_else(|| self.endpoint.clone()),
            workspace_id: workspace_id
                .map(String::from)
                .or_else(|| self.workspace_id.clone()),
            output: output.or(self.output).unwrap_or_default(),
            no_color: no_color || self.no_color.unwrap_or(false),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    pub endpoint: Option<String>,
    pub workspace_id: Option<String>,
    pub output: OutputFormat,
    pub no_color: bool,
}
