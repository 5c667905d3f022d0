//! The `tree` command.
//!
//! Shows which file required which, one tree per entry script:
//!
//! ```text
//! public/javascripts/application.js
//! ├── public/javascripts/widgets/grid.js
//! │   └── vendor/jquery.js
//! └── vendor/jquery.js (already listed)
//! ```
//!
//! Circular requires are marked in the tree and reported as warnings.

use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

use super::common::{InputArgs, display_path};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct TreeCommand {
    #[command(flatten)]
    input: InputArgs,
}

impl TreeCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let roots = config.web_roots()?;
        let resolution = self.input.resolver(config)?.resolve_with_graph(&self.input.files)?;
        let label = |path: &std::path::Path| display_path(path, roots.as_ref());

        let mut printed = HashSet::new();
        let mut first = true;
        for entry in &resolution.entries {
            if !printed.insert(entry) {
                continue;
            }
            if !first {
                println!();
            }
            first = false;
            print!("{}", resolution.graph.to_tree_string(entry, label));
        }

        for cycle in resolution.graph.find_cycles() {
            let files: Vec<String> = cycle.iter().map(|file| label(file.as_path())).collect();
            tracing::warn!("Circular require between {}", files.join(", "));
        }
        Ok(())
    }
}
