//! jsrequire - dependency resolution for script assets
//!
//! JavaScript files declare what they need in a header of comment
//! directives:
//!
//! ```javascript
//! /* js lib/jquery */
//! /* js app.widgets.grid */
//! /* css grid */
//!
//! Ext.onReady(function () { ... });
//! ```
//!
//! [`Resolver`] reads those headers, finds every required file through a
//! list of load paths and returns all scripts in an order where each file
//! comes after the files it requires, together with the stylesheets they
//! declared.
//!
//! # Directives
//!
//! A directive is a line `/* <action> <parameter> */` (or
//! `// <action> <parameter>`). Only leading lines are read: the first line
//! that is not a directive ends the header. Two actions are understood:
//!
//! - `js <reference>` requires another script
//! - `css <name>` declares the stylesheet `<name>.css`
//!
//! Other actions are ignored unless a hook handles them.
//!
//! # Locating files
//!
//! A reference is tried, in order, as written, with each implicit extension
//! (`js`, `mjs`) appended, and as a dotted namespace (`app.widgets.grid` →
//! `app/widgets/grid.js`). Each candidate is looked up in the directories of
//! the entry files first, then in the configured load paths.
//!
//! # Hooks
//!
//! Hooks registered with [`Resolver::on`] see each directive before it is
//! interpreted and may leave it alone, replace it or drop it:
//!
//! ```rust,no_run
//! use jsrequire::{HookOutcome, Resolver};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut resolver = Resolver::with_load_paths(["vendor/javascripts"]);
//! resolver.on(Some("view"), |directive| {
//!     Ok(HookOutcome::replace("js", format!("views/{}", directive.parameter)))
//! });
//!
//! let result = resolver.resolve(["public/javascripts/application.js"])?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`directive`] - Directive header parsing
//! - [`hooks`] - Hook registry and outcomes
//! - [`locator`] - Turning references into files
//! - [`resolver`] - The dependency walk and require graph
//! - [`helpers`] - Web path rewriting and namespace derivation
//! - [`config`] - `jsrequire.toml` loading
//! - [`core`] - Error types and user-facing error reporting
//! - [`cli`] - The `jsrequire` command line

pub mod cli;
pub mod config;
pub mod core;
pub mod directive;
pub mod helpers;
pub mod hooks;
pub mod locator;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::JsRequireError;
pub use directive::Directive;
pub use helpers::{WebRoots, derive_namespaces, rewrite_to_web_paths};
pub use hooks::{HookContext, HookOutcome};
pub use resolver::{DependencyResult, Resolution, Resolver};
