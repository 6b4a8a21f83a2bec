//! Configuration management for mkhooks.
//!
//! Parses `mkhooks.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The file lists the hooks a build runs, in order, plus per-hook options:
//!
//! ```toml
//! hooks = ["depth_filter", "filename_title"]
//!
//! [depth_filter]
//! env_var = "MKDOCS_DEPTH"
//!
//! [filename_title]
//! overwrite = true
//! ```
//!
//! Every key is optional. A missing file yields [`Config::default`], which
//! runs both hooks with the options shown above.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mkhooks.toml";

/// Environment variable read by the depth filter unless configured otherwise.
pub const DEFAULT_DEPTH_ENV_VAR: &str = "MKDOCS_DEPTH";

/// Hook identifiers accepted in the `hooks` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookName {
    /// Drops files nested deeper than the configured limit.
    DepthFilter,
    /// Sets page titles from source filenames.
    FilenameTitle,
}

impl HookName {
    /// Name as written in the config file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFilter => "depth_filter",
            Self::FilenameTitle => "filename_title",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Hooks to run, in dispatch order.
    pub hooks: Vec<HookName>,
    /// Depth filter options.
    pub depth_filter: DepthFilterConfig,
    /// Filename title options.
    pub filename_title: FilenameTitleConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hooks: vec![HookName::DepthFilter, HookName::FilenameTitle],
            depth_filter: DepthFilterConfig::default(),
            filename_title: FilenameTitleConfig::default(),
            config_path: None,
        }
    }
}

/// Depth filter configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthFilterConfig {
    /// Name of the environment variable holding the maximum depth.
    pub env_var: String,
}

impl Default for DepthFilterConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_DEPTH_ENV_VAR.to_owned(),
        }
    }
}

/// Filename title configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilenameTitleConfig {
    /// Replace titles the host already assigned.
    ///
    /// When false, only untitled pages get a filename title.
    pub overwrite: bool,
}

impl Default for FilenameTitleConfig {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mkhooks.toml` in the current directory and
    /// its parents, falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a hook is listed twice or the
    /// depth variable name is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, hook) in self.hooks.iter().enumerate() {
            if self.hooks[..i].contains(hook) {
                return Err(ConfigError::Validation(format!(
                    "hook {hook} is listed more than once"
                )));
            }
        }

        if self.depth_filter.env_var.trim().is_empty() {
            return Err(ConfigError::Validation(
                "depth_filter.env_var cannot be empty".to_owned(),
            ));
        }

        Ok(())
    }
}
