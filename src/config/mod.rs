//! Project configuration (`jsrequire.toml`).
//!
//! A project may keep its resolution settings in a `jsrequire.toml` next to
//! its sources instead of repeating them on every command line:
//!
//! ```toml
//! load_paths = ["vendor/javascripts", "~/shared/js"]
//! extensions = ["js", "mjs"]
//! namespace_prefix = "app"
//!
//! [[web_roots]]
//! prefix = "public"
//!
//! [[web_roots]]
//! prefix = "vendor/javascripts"
//! replacement = "/vendor"
//! ```
//!
//! Every field is optional. Relative paths are resolved against the
//! directory containing the file, after `~` and environment variables are
//! expanded.
//!
//! # Discovery
//!
//! Without an explicit `--config`, the current directory and then each of
//! its parents is searched for `jsrequire.toml`. When none is found the
//! default (empty) configuration is used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::JsRequireError;
use crate::helpers::WebRoots;
use crate::utils::fs::absolutize;
use crate::utils::platform::resolve_path_from;

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "jsrequire.toml";

/// Contents of a `jsrequire.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extra directories searched after the entry directories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_paths: Vec<String>,

    /// Implicit extensions, replacing the default `js`, `mjs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Default prefix for the `namespaces` command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_prefix: Option<String>,

    /// Roots stripped when printing web paths.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_roots: Vec<WebRootEntry>,

    /// Directory the file was loaded from.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// One `[[web_roots]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebRootEntry {
    pub prefix: String,
    #[serde(default)]
    pub replacement: String,
}

impl Config {
    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// - [`JsRequireError::ConfigNotFound`] if `path` does not exist
    /// - [`JsRequireError::ConfigParseError`] if the TOML is invalid
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JsRequireError::ConfigNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Self =
            toml::from_str(&content).map_err(|e| JsRequireError::ConfigParseError {
                file: path.display().to_string(),
                reason: e.message().to_string(),
            })?;

        let path = absolutize(path);
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, otherwise discover a config file from the
    /// current directory upwards.
    ///
    /// # Errors
    ///
    /// Fails if the explicit file is missing, or if any file found cannot be
    /// read or parsed. A missing discovered file is not an error.
    pub fn load_with_optional(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        match find_config_from(cwd) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No {CONFIG_FILE_NAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Directory relative paths are resolved against: the config file's
    /// directory, or the current directory for a default config.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| absolutize(Path::new(".")))
    }

    /// Attach a base directory, for configs built in code.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(absolutize(&dir.into()));
        self
    }

    /// Configured load paths, expanded and made absolute.
    ///
    /// # Errors
    ///
    /// Fails if a path references an undefined environment variable.
    pub fn resolved_load_paths(&self) -> Result<Vec<PathBuf>> {
        let base = self.base_dir();
        self.load_paths
            .iter()
            .map(|path| {
                resolve_path_from(path, &base)
                    .with_context(|| format!("Invalid load path '{path}' in configuration"))
            })
            .collect()
    }

    /// Configured web roots, or `None` if there are none.
    ///
    /// # Errors
    ///
    /// Fails if a prefix references an undefined environment variable.
    pub fn web_roots(&self) -> Result<Option<WebRoots>> {
        if self.web_roots.is_empty() {
            return Ok(None);
        }

        let base = self.base_dir();
        let mapping = self
            .web_roots
            .iter()
            .map(|root| {
                let prefix = resolve_path_from(&root.prefix, &base).with_context(|| {
                    format!("Invalid web root '{}' in configuration", root.prefix)
                })?;
                Ok((prefix.to_string_lossy().into_owned(), root.replacement.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(WebRoots::Mapping(mapping)))
    }
}

/// Search `current` and its parents for [`CONFIG_FILE_NAME`].
#[must_use]
pub fn find_config_from(mut current: PathBuf) -> Option<PathBuf> {
    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}
