//! Dependency resolution for script assets.
//!
//! The [`Resolver`] turns a list of entry scripts into the flat, ordered list
//! of every script they need, plus the stylesheets they declare.
//!
//! # Algorithm
//!
//! Resolution is a depth-first walk with post-order emission:
//!
//! 1. Entry paths are made absolute. Their directories, in entry order and
//!    without duplicates, form the head of the [`SearchPath`]; the resolver's
//!    configured load paths follow.
//! 2. Each entry is located and *visited*. Visiting a file reads its
//!    directive header, runs every directive through the hook registry, and
//!    visits each `js` require in header order.
//! 3. After all its requires are visited, the file itself is appended.
//!
//! A file is skipped if it was already emitted or is still being visited
//! higher up the stack. The first rule makes shared dependencies appear once;
//! the second stops circular requires from recursing forever. As a result
//! every file appears exactly once, after everything it requires (except
//! across a cycle), and otherwise in first-discovery order.
//!
//! # State
//!
//! The visited sets, stylesheet list and require graph belong to one call
//! and live in a private state value threaded through the walk. A resolver
//! holds only configuration and hooks, so it can be reused and shared.
//!
//! # Example
//!
//! ```rust,no_run
//! use jsrequire::Resolver;
//!
//! # fn example() -> anyhow::Result<()> {
//! let resolver = Resolver::with_load_paths(["vendor/javascripts"]);
//! let result = resolver.resolve(["public/javascripts/application.js"])?;
//!
//! for script in &result.javascripts {
//!     println!("<script src=\"{}\"></script>", script.display());
//! }
//! for sheet in &result.stylesheets {
//!     println!("<link rel=\"stylesheet\" href=\"{sheet}\">");
//! }
//! # Ok(())
//! # }
//! ```

pub mod dependency_graph;


use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::directive::{self, Directive};
use crate::hooks::{HookContext, HookOutcome, HookRegistry, collect_stylesheet};
use crate::locator::{FileLocator, SearchPath};
use crate::utils::fs::{absolutize, is_readable_file};

pub use dependency_graph::DependencyGraph;

/// The outcome of resolving a set of entry files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyResult {
    /// Absolute script paths in include order.
    pub javascripts: Vec<PathBuf>,
    /// Declared stylesheet names (`<name>.css`), sorted and deduplicated.
    /// These are not resolved to files.
    pub stylesheets: Vec<String>,
}

/// A [`DependencyResult`] together with the walk that produced it.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The flattened result.
    pub result: DependencyResult,
    /// Every require edge that was followed.
    pub graph: DependencyGraph,
    /// The located entry files, in input order.
    pub entries: Vec<PathBuf>,
    /// The search path used for this call.
    pub search_path: SearchPath,
}

/// Resolves script dependencies declared in directive headers.
#[derive(Debug)]
pub struct Resolver {
    load_paths: Vec<PathBuf>,
    locator: FileLocator,
    hooks: HookRegistry,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver with no extra load paths.
    ///
    /// The built-in `css` hook is registered before any user hook.
    #[must_use]
    pub fn new() -> Self {
        let mut hooks = HookRegistry::new();
        hooks.register(Some("css"), collect_stylesheet);

        Self {
            load_paths: Vec::new(),
            locator: FileLocator::new(),
            hooks,
        }
    }

    /// Create a resolver that searches `load_paths` after the entry
    /// directories. Relative paths are made absolute against the current
    /// working directory now, not at resolution time.
    pub fn with_load_paths<I, P>(load_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut resolver = Self::new();
        for path in load_paths {
            let path = absolutize(path.as_ref());
            if !resolver.load_paths.contains(&path) {
                resolver.load_paths.push(path);
            }
        }
        resolver
    }

    /// Create a resolver from a loaded configuration file.
    ///
    /// # Errors
    ///
    /// Fails if a configured load path cannot be expanded.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with_load_paths(config, Vec::<PathBuf>::new())
    }

    /// Like [`Resolver::from_config`], with `load_paths` searched before the
    /// configured ones.
    ///
    /// # Errors
    ///
    /// Fails if a configured load path cannot be expanded.
    pub fn from_config_with_load_paths<I, P>(config: &Config, load_paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut dirs: Vec<PathBuf> =
            load_paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        dirs.extend(config.resolved_load_paths()?);

        let resolver = Self::with_load_paths(dirs);
        Ok(match &config.extensions {
            Some(extensions) => resolver.with_extensions(extensions),
            None => resolver,
        })
    }

    /// Replace the implicit extension list (default `js`, `mjs`).
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locator = FileLocator::with_extensions(extensions);
        self
    }

    /// Configured load paths, searched after the entry directories.
    #[must_use]
    pub fn load_paths(&self) -> &[PathBuf] {
        &self.load_paths
    }

    /// The locator used for every lookup.
    #[must_use]
    pub fn locator(&self) -> &FileLocator {
        &self.locator
    }

    /// The hook registry.
    #[must_use]
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Register a hook for `action`, or for every directive if `action` is
    /// `None`.
    ///
    /// Hooks for the same action run in registration order, and always
    /// before wildcard hooks.
    pub fn on<F>(&mut self, action: Option<&str>, handler: F) -> &mut Self
    where
        F: Fn(&Directive) -> Result<HookOutcome> + Send + Sync + 'static,
    {
        self.hooks.register(action, move |directive, _| handler(directive));
        self
    }

    /// Like [`Resolver::on`], but the handler also receives the
    /// [`HookContext`] for the file being scanned.
    pub fn on_with_context<F>(&mut self, action: Option<&str>, handler: F) -> &mut Self
    where
        F: Fn(&Directive, &mut HookContext<'_>) -> Result<HookOutcome> + Send + Sync + 'static,
    {
        self.hooks.register(action, handler);
        self
    }

    /// The search path a call to [`Resolver::resolve`] with `files` would use.
    pub fn search_path_for<I, P>(&self, files: I) -> SearchPath
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let entries: Vec<PathBuf> = files.into_iter().map(|f| absolutize(f.as_ref())).collect();
        SearchPath::for_entries(&entries, &self.load_paths)
    }

    /// Resolve the dependencies of `files`.
    ///
    /// # Errors
    ///
    /// - [`JsRequireError::NotFound`](crate::core::JsRequireError::NotFound)
    ///   if an entry or any transitive require cannot be located
    /// - [`JsRequireError::FileReadError`](crate::core::JsRequireError::FileReadError)
    ///   if a located file cannot be read
    /// - any error returned by a hook
    ///
    /// There is no partial result: the first failure aborts resolution.
    pub fn resolve<I, P>(&self, files: I) -> Result<DependencyResult>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Ok(self.resolve_with_graph(files)?.result)
    }

    /// Resolve like [`Resolver::resolve`] and also return the require graph.
    pub fn resolve_with_graph<I, P>(&self, files: I) -> Result<Resolution>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let entries: Vec<PathBuf> = files.into_iter().map(|f| absolutize(f.as_ref())).collect();
        let search_path = SearchPath::for_entries(&entries, &self.load_paths);
        tracing::debug!(
            "Resolving {} entry file(s) with load paths {:?}",
            entries.len(),
            search_path.dirs()
        );

        let mut state = ResolutionState::new(self, search_path);
        let mut located = Vec::with_capacity(entries.len());
        for entry in &entries {
            located.push(state.visit_entry(entry)?);
        }

        Ok(state.finish(located))
    }
}

/// Mutable state of a single resolution call.
struct ResolutionState<'r> {
    resolver: &'r Resolver,
    search_path: SearchPath,
    emitted: HashSet<PathBuf>,
    in_progress: HashSet<PathBuf>,
    javascripts: Vec<PathBuf>,
    stylesheets: Vec<String>,
    graph: DependencyGraph,
}

impl<'r> ResolutionState<'r> {
    fn new(resolver: &'r Resolver, search_path: SearchPath) -> Self {
        Self {
            resolver,
            search_path,
            emitted: HashSet::new(),
            in_progress: HashSet::new(),
            javascripts: Vec::new(),
            stylesheets: Vec::new(),
            graph: DependencyGraph::new(),
        }
    }

    /// Visit an entry file. An existing entry is used as given, so file
    /// names that are not valid UTF-8 survive; anything else goes through
    /// the locator like a require.
    fn visit_entry(&mut self, entry: &Path) -> Result<PathBuf> {
        let file = if is_readable_file(entry) {
            entry.to_path_buf()
        } else {
            self.resolver
                .locator
                .locate(&entry.to_string_lossy(), &self.search_path, None)
                .context("Failed to locate entry file")?
        };

        self.graph.add_file(&file);
        self.include(file)
    }

    /// Locate a require of `parent` and visit it.
    fn visit_require(&mut self, reference: &str, parent: &Path) -> Result<PathBuf> {
        let file = self
            .resolver
            .locator
            .locate(reference, &self.search_path, parent.parent())
            .with_context(|| format!("Required by {}", parent.display()))?;

        self.graph.add_dependency(parent, &file);
        self.include(file)
    }

    /// Unless already seen, emit `file` after its requires.
    fn include(&mut self, file: PathBuf) -> Result<PathBuf> {
        if self.in_progress.contains(&file) {
            tracing::debug!("Circular require of {} ignored", file.display());
            return Ok(file);
        }
        if self.emitted.contains(&file) {
            return Ok(file);
        }

        self.in_progress.insert(file.clone());
        for require in self.scan(&file)? {
            self.visit_require(&require, &file)?;
        }
        self.in_progress.remove(&file);

        self.emitted.insert(file.clone());
        self.javascripts.push(file.clone());
        Ok(file)
    }

    /// Run the header of `file` through the hooks and return its requires in
    /// header order, without duplicates.
    fn scan(&mut self, file: &Path) -> Result<Vec<String>> {
        let directives = directive::parse_file(file)?;
        let mut ctx = HookContext::new(file, &mut self.stylesheets);
        let mut requires: Vec<String> = Vec::new();

        for directive in directives {
            let Some(directive) = self.resolver.hooks.dispatch(directive, &mut ctx)? else {
                continue;
            };

            if !directive.is_require() {
                tracing::trace!("Ignoring '{}' in {}", directive, file.display());
                continue;
            }
            if directive.parameter.is_empty() {
                tracing::warn!("Ignoring empty require in {}", file.display());
                continue;
            }
            if !requires.contains(&directive.parameter) {
                requires.push(directive.parameter);
            }
        }

        Ok(requires)
    }

    fn finish(self, entries: Vec<PathBuf>) -> Resolution {
        let stylesheets: BTreeSet<String> = self.stylesheets.into_iter().collect();
        tracing::debug!(
            "Resolved {} script(s) and {} stylesheet(s)",
            self.javascripts.len(),
            stylesheets.len()
        );

        Resolution {
            result: DependencyResult {
                javascripts: self.javascripts,
                stylesheets: stylesheets.into_iter().collect(),
            },
            graph: self.graph,
            entries,
            search_path: self.search_path,
        }
    }
}
