//! Arguments shared by every subcommand.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::helpers::{WebRoots, parse_web_root};
use crate::resolver::Resolver;

/// Entry files and extra load paths.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Entry scripts to resolve
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Additional directory to search, after the entry directories
    ///
    /// May be given several times; directories are searched in the order
    /// given, before any `load_paths` from the configuration file.
    #[arg(short = 'I', long = "load-path", value_name = "DIR")]
    pub load_paths: Vec<PathBuf>,
}

impl InputArgs {
    /// Build a resolver from the command-line load paths followed by the
    /// configured ones.
    pub fn resolver(&self, config: &Config) -> Result<Resolver> {
        Resolver::from_config_with_load_paths(config, &self.load_paths)
    }
}

/// Web roots from `--web-root` arguments, falling back to the configuration.
pub fn web_roots(args: &[String], config: &Config) -> Result<Option<WebRoots>> {
    if args.is_empty() {
        return config.web_roots();
    }

    let mapping = args.iter().map(|arg| parse_web_root(arg)).collect::<Result<Vec<_>>>()?;
    Ok(Some(WebRoots::Mapping(mapping)))
}

/// How to print a file: its web path if roots are known, otherwise relative
/// to the current directory when below it.
pub fn display_path(path: &Path, roots: Option<&WebRoots>) -> String {
    if let Some(roots) = roots {
        return crate::helpers::rewrite_to_web_paths(&[path], roots).remove(0);
    }

    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

/// Serialize `value` as pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}
