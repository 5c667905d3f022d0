//! The `resolve` command.
//!
//! Prints every script the entry files need, in include order, followed by
//! the stylesheets they declare:
//!
//! ```text
//! $ jsrequire resolve --web-root public public/javascripts/application.js
//! /javascripts/lib/jquery.js
//! /javascripts/widgets/grid.js
//! /javascripts/application.js
//! grid.css
//! ```
//!
//! With `--format json` the same data is printed as
//! `{"javascripts": [...], "stylesheets": [...]}`.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use super::common::{InputArgs, to_json, web_roots};
use crate::config::Config;
use crate::helpers::rewrite_to_web_paths;

/// Output format of `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line, scripts first
    Text,
    /// A JSON object with `javascripts` and `stylesheets`
    Json,
}

#[derive(Args, Debug)]
pub struct ResolveCommand {
    #[command(flatten)]
    input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Strip PREFIX from script paths, optionally replacing it
    ///
    /// May be given several times; the first matching prefix is used.
    /// Overrides `web_roots` from the configuration file.
    #[arg(long = "web-root", value_name = "PREFIX[=REPLACEMENT]")]
    web_roots: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ResolveOutput {
    javascripts: Vec<String>,
    stylesheets: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let output = self.run(config)?;

        match self.format {
            OutputFormat::Text => {
                for line in output.javascripts.iter().chain(&output.stylesheets) {
                    println!("{line}");
                }
            }
            OutputFormat::Json => println!("{}", to_json(&output)?),
        }
        Ok(())
    }

    fn run(&self, config: &Config) -> Result<ResolveOutput> {
        let roots = web_roots(&self.web_roots, config)?;
        let resolver = self.input.resolver(config)?;
        let result = resolver.resolve(&self.input.files)?;

        let javascripts = match &roots {
            Some(roots) => rewrite_to_web_paths(&result.javascripts, roots),
            None => result.javascripts.iter().map(|p| p.display().to_string()).collect(),
        };

        Ok(ResolveOutput {
            javascripts,
            stylesheets: result.stylesheets,
        })
    }
}
