//! Directive hooks.
//!
//! Hooks let embedding code observe, rewrite or drop directives before the
//! resolver interprets them. A hook is registered either for one action
//! (`"css"`, `"view"`, ...) or as a wildcard that sees every directive.
//!
//! # Dispatch Order
//!
//! For each parsed directive the registry calls, in registration order:
//!
//! 1. every hook registered for the directive's action
//! 2. every wildcard hook
//!
//! The specific bucket is selected by the action as it was parsed. A hook that
//! rewrites the action does not move the directive into another bucket, but
//! every later hook (and the resolver) sees the rewritten directive.
//!
//! # Outcomes
//!
//! - [`HookOutcome::NoChange`] keeps the current directive.
//! - [`HookOutcome::Replace`] substitutes a new directive, e.g. turning
//!   `view grid` into `js views/grid`.
//! - [`HookOutcome::Drop`] discards the directive. Later hooks are skipped and
//!   the resolver never sees it.
//!
//! ```rust,no_run
//! use jsrequire::hooks::HookOutcome;
//! use jsrequire::{Directive, Resolver};
//!
//! let mut resolver = Resolver::new();
//! resolver.on(Some("view"), |directive| {
//!     Ok(HookOutcome::Replace(Directive::new("js", format!("views/{}", directive.parameter))))
//! });
//! resolver.on(None, |directive| {
//!     tracing::info!("saw {directive}");
//!     Ok(HookOutcome::NoChange)
//! });
//! ```

use anyhow::Result;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::directive::Directive;

/// The result of running a hook on a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Leave the directive as it is.
    NoChange,
    /// Replace the directive for later hooks and for interpretation.
    Replace(Directive),
    /// Discard the directive entirely.
    Drop,
}

impl HookOutcome {
    /// Shorthand for [`HookOutcome::Replace`].
    pub fn replace(action: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::Replace(Directive::new(action, parameter))
    }
}

/// Per-file state handed to every hook invocation.
///
/// The stylesheet list belongs to the resolution call in progress, not to
/// the resolver, so hooks can record stylesheets without the resolver
/// holding mutable state between calls.
pub struct HookContext<'a> {
    file: &'a Path,
    stylesheets: &'a mut Vec<String>,
}

impl<'a> HookContext<'a> {
    /// Create a context for directives read from `file`.
    pub fn new(file: &'a Path, stylesheets: &'a mut Vec<String>) -> Self {
        Self {
            file,
            stylesheets,
        }
    }

    /// The file whose header is being scanned.
    #[must_use]
    pub fn file(&self) -> &Path {
        self.file
    }

    /// Record a stylesheet reference for the current resolution.
    pub fn add_stylesheet(&mut self, name: impl Into<String>) {
        self.stylesheets.push(name.into());
    }
}

/// Boxed hook callback.
pub type Hook = dyn Fn(&Directive, &mut HookContext<'_>) -> Result<HookOutcome> + Send + Sync;

/// Ordered hook lists keyed by action, plus the wildcard list.
#[derive(Default)]
pub struct HookRegistry {
    specific: HashMap<String, Vec<Box<Hook>>>,
    wildcard: Vec<Box<Hook>>,
}

impl HookRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook for `action`, or a wildcard hook if `action` is `None`
    /// or empty.
    pub fn register<F>(&mut self, action: Option<&str>, hook: F)
    where
        F: Fn(&Directive, &mut HookContext<'_>) -> Result<HookOutcome> + Send + Sync + 'static,
    {
        match action.filter(|a| !a.is_empty()) {
            Some(action) => self.specific.entry(action.to_string()).or_default().push(Box::new(hook)),
            None => self.wildcard.push(Box::new(hook)),
        }
    }

    /// Run all matching hooks on `directive`.
    ///
    /// Returns the directive to interpret, or `None` if a hook dropped it.
    ///
    /// # Errors
    ///
    /// The first error returned by a hook is propagated unchanged; remaining
    /// hooks are not run.
    pub fn dispatch(
        &self,
        directive: Directive,
        ctx: &mut HookContext<'_>,
    ) -> Result<Option<Directive>> {
        let specific = self.specific.get(&directive.action).map(Vec::as_slice).unwrap_or_default();
        let mut current = directive;

        for hook in specific.iter().chain(self.wildcard.iter()) {
            match hook(&current, &mut *ctx)? {
                HookOutcome::NoChange => {}
                HookOutcome::Replace(next) => {
                    tracing::debug!("Hook rewrote '{}' to '{}' in {}", current, next, ctx.file().display());
                    current = next;
                }
                HookOutcome::Drop => {
                    tracing::debug!("Hook dropped '{}' in {}", current, ctx.file().display());
                    return Ok(None);
                }
            }
        }

        Ok(Some(current))
    }

    /// Number of hooks registered for `action` (wildcards excluded).
    #[must_use]
    pub fn count_for(&self, action: &str) -> usize {
        self.specific.get(action).map_or(0, Vec::len)
    }

    /// Number of wildcard hooks.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.wildcard.len()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<_> =
            self.specific.iter().map(|(action, hooks)| (action.as_str(), hooks.len())).collect();
        actions.sort_unstable();
        f.debug_struct("HookRegistry")
            .field("specific", &actions)
            .field("wildcard", &self.wildcard.len())
            .finish()
    }
}

/// Built-in `css` hook: records `<parameter>.css` as a stylesheet.
///
/// The directive itself is left unchanged; since only `js` directives are
/// interpreted as requires, it contributes nothing else.
pub fn collect_stylesheet(directive: &Directive, ctx: &mut HookContext<'_>) -> Result<HookOutcome> {
    ctx.add_stylesheet(format!("{}.css", directive.parameter));
    Ok(HookOutcome::NoChange)
}
