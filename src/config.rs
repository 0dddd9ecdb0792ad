//! Configuration file for testpilot.
//!
//! All fields are optional in YAML; missing values fall back to defaults.

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::DEFAULT_DOCSTRING_LIMIT;

/// Config file names looked up in the working directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["testpilot.yaml", ".testpilot.yaml"];

/// Default name of the markdown report.
pub const DEFAULT_REPORT_FILE: &str = "test-report.md";

/// Template written by `testpilot init`.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Directory generated files are written to (default: current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Report file name, always overwritten.
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// Character budget for docstring excerpts in the report.
    #[serde(default = "default_docstring_limit")]
    pub docstring_limit: usize,
}

fn default_report_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

fn default_docstring_limit() -> usize {
    DEFAULT_DOCSTRING_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            report_file: default_report_file(),
            docstring_limit: default_docstring_limit(),
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a config from YAML text. Empty text yields the defaults.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        validate(&config)?;
        Ok(config)
    }

    /// Load the explicit config if given, otherwise the first discovered one,
    /// otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::parse_file(path)
                .with_context(|| format!("parsing config {}", path.display()));
        }
        match discover() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using discovered config");
                Self::parse_file(&path)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Directory for generated files.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Find a config file in the working directory or the user config directory.
pub fn discover() -> Option<PathBuf> {
    for name in DEFAULT_CONFIG_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }
    user_config_path().filter(|p| p.exists())
}

/// Platform config location (e.g. `~/.config/testpilot/config.yaml`).
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "testpilot").map(|dirs| dirs.config_dir().join("config.yaml"))
}

/// Reject values that cannot produce a usable report.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.report_file.trim().is_empty() {
        anyhow::bail!("report_file must not be empty");
    }
    if Path::new(&config.report_file).file_name().is_none() {
        anyhow::bail!("report_file must name a file, got {:?}", config.report_file);
    }
    if config.docstring_limit == 0 {
        anyhow::bail!("docstring_limit must be greater than zero");
    }
    Ok(())
}
