//! The `namespaces` command.
//!
//! Resolves the entry scripts and prints the namespace of every directory
//! below the prefix directory that contains a resolved script, one per line.

use anyhow::Result;
use clap::Args;

use super::common::InputArgs;
use crate::config::Config;
use crate::helpers::derive_namespaces;

#[derive(Args, Debug)]
pub struct NamespacesCommand {
    #[command(flatten)]
    input: InputArgs,

    /// Directory name the namespaces start at
    ///
    /// Defaults to `namespace_prefix` from the configuration file.
    #[arg(short, long, value_name = "NAME")]
    prefix: Option<String>,
}

impl NamespacesCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let Some(prefix) = self.prefix.as_deref().or(config.namespace_prefix.as_deref()) else {
            anyhow::bail!("No namespace prefix: pass --prefix or set namespace_prefix in jsrequire.toml");
        };

        let result = self.input.resolver(config)?.resolve(&self.input.files)?;
        for namespace in derive_namespaces(&result.javascripts, prefix) {
            println!("{namespace}");
        }
        Ok(())
    }
}
