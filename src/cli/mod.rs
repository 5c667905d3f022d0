//! Command-line interface for jsrequire.
//!
//! The binary wraps the library: every subcommand resolves a set of entry
//! scripts and prints part of the result.
//!
//! # Commands
//!
//! - `resolve` - Print the ordered script list and declared stylesheets
//! - `tree` - Print the require tree below each entry script
//! - `namespaces` - Print the namespaces the resolved scripts live in
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging on stderr
//! - `--quiet` / `-q` - No logging at all
//! - `--config` / `-c` - Explicit `jsrequire.toml` (also `JSREQUIRE_CONFIG`)
//!
//! Without `--config`, a `jsrequire.toml` in the current directory or one of
//! its parents is used if present.
//!
//! # Examples
//!
//! ```bash
//! # Scripts to include, in order
//! jsrequire resolve public/javascripts/application.js
//!
//! # Extra load path, paths relative to the document root, as JSON
//! jsrequire resolve -I vendor/javascripts --web-root public --format json app.js
//!
//! # Why is this file included?
//! jsrequire tree public/javascripts/application.js
//!
//! # ExtJS namespaces under `app`
//! jsrequire namespaces --prefix app public/javascripts/application.js
//! ```

mod common;
mod namespaces;
mod resolve;
mod tree;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can build it without parsing
/// arguments.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set. `None` disables logging.
    pub log_level: Option<String>,

    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with logging disabled and config discovery on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over [`CliConfig::log_level`]. Calling this
    /// more than once is harmless.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("jsrequire={level}")));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load the explicit configuration file, or discover one.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_with_optional(self.config_path.as_deref())
    }
}

/// Resolve `/* js ... */` require directives in JavaScript files.
#[derive(Parser, Debug)]
#[command(
    name = "jsrequire",
    about = "Resolve require directives in JavaScript files",
    version,
    long_about = "jsrequire reads the directive header of JavaScript files, follows their \
                  `js` requires through a set of load paths and prints the scripts to include, \
                  in dependency order, along with the stylesheets they declare."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging; only results and errors are printed
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a jsrequire.toml configuration file
    #[arg(short, long, global = true, env = "JSREQUIRE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the scripts to include, in order, followed by the stylesheets
    Resolve(resolve::ResolveCommand),

    /// Print the require tree below each entry script
    Tree(tree::TreeCommand),

    /// Print the namespaces of the resolved scripts
    Namespaces(namespaces::NamespacesCommand),
}

impl Cli {
    /// Execute the parsed command line.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Build a [`CliConfig`] from the global flags.
    ///
    /// `--verbose` selects debug logging, `--quiet` none, and otherwise only
    /// warnings are logged.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit [`CliConfig`].
    pub fn execute_with_config(self, cli_config: CliConfig) -> Result<()> {
        cli_config.init_logging();
        let config = cli_config.load_config()?;

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(&config),
            Commands::Tree(cmd) => cmd.execute(&config),
            Commands::Namespaces(cmd) => cmd.execute(&config),
        }
    }
}
