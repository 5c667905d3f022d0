//! Locating required files on the load path.
//!
//! A require names a file symbolically. The [`FileLocator`] turns that name
//! into an absolute path by trying candidates in a fixed order:
//!
//! 1. An absolute reference that names a readable file is used as-is.
//! 2. The literal reference, in every search directory. References starting
//!    with `./` or `../` are first tried next to the requiring file.
//! 3. If the reference has no known script extension, the reference with
//!    each extension appended (`grid` → `grid.js`, `grid.mjs`).
//! 4. If the reference contains dots, its namespaced form
//!    (`app.widgets.grid` → `app/widgets/grid.js`).
//!
//! Each candidate is tried in every directory before moving on to the next
//! candidate, so a literal match in the last directory beats an
//! extension-implied match in the first one.
//!
//! Only readable regular files count. Directories and unreadable files are
//! skipped without error; if nothing matches the result is
//! [`JsRequireError::NotFound`].

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::JsRequireError;
use crate::utils::fs::{is_readable_file, normalize_path};

/// Script extensions tried when a reference has none, in priority order.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "mjs"];

/// Ordered, duplicate-free list of absolute directories to search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Build a search path from `dirs`, dropping later duplicates.
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut path = Self::default();
        for dir in dirs {
            path.push(dir.into());
        }
        path
    }

    /// Build the search path for one resolution call: the directories of
    /// the entry files (in entry order) followed by the configured extras.
    ///
    /// `entries` must already be absolute.
    #[must_use]
    pub fn for_entries(entries: &[PathBuf], extra_dirs: &[PathBuf]) -> Self {
        let entry_dirs = entries.iter().filter_map(|entry| entry.parent()).map(Path::to_path_buf);
        Self::new(entry_dirs.chain(extra_dirs.iter().cloned()))
    }

    fn push(&mut self, dir: PathBuf) {
        let dir = normalize_path(&dir);
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    /// The directories in search order.
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Number of directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Returns `true` if there are no directories to search.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Resolves symbolic references to readable files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocator {
    extensions: Vec<String>,
}

impl Default for FileLocator {
    fn default() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl FileLocator {
    /// Create a locator using [`DEFAULT_EXTENSIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a locator with a custom extension priority list.
    ///
    /// Leading dots are stripped, so `".js"` and `"js"` are equivalent.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim_start_matches('.');
            if !ext.is_empty() && !unique.iter().any(|e| e == ext) {
                unique.push(ext.to_string());
            }
        }
        Self {
            extensions: unique,
        }
    }

    /// The extension priority list.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Locate `reference` on `search_path`.
    ///
    /// `current_dir` is the directory of the requiring file, used for `./`
    /// and `../` references; it is `None` for entry files.
    ///
    /// # Errors
    ///
    /// Returns [`JsRequireError::NotFound`] carrying the reference and every
    /// directory searched.
    pub fn locate(
        &self,
        reference: &str,
        search_path: &SearchPath,
        current_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        let direct = Path::new(reference);
        if direct.is_absolute() && is_readable_file(direct) {
            return Ok(normalize_path(direct));
        }

        let dirs = self.directories_for(reference, search_path, current_dir);

        for candidate in self.candidates(reference) {
            if let Some(found) = Self::find_in(&candidate, &dirs) {
                tracing::debug!("Located '{}' at {}", reference, found.display());
                return Ok(found);
            }
        }

        Err(JsRequireError::NotFound {
            reference: reference.to_string(),
            search_path: dirs,
        }
        .into())
    }

    fn directories_for(
        &self,
        reference: &str,
        search_path: &SearchPath,
        current_dir: Option<&Path>,
    ) -> Vec<PathBuf> {
        let mut dirs = Vec::with_capacity(search_path.len() + 1);
        if let Some(current) = current_dir.filter(|_| is_relative_reference(reference)) {
            dirs.push(normalize_path(current));
        }
        for dir in search_path.dirs() {
            if !dirs.contains(dir) {
                dirs.push(dir.clone());
            }
        }
        dirs
    }

    fn find_in(candidate: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
        let candidate_path = Path::new(candidate);
        if candidate_path.is_absolute() {
            let path = normalize_path(candidate_path);
            return is_readable_file(&path).then_some(path);
        }

        dirs.iter()
            .map(|dir| normalize_path(&dir.join(candidate_path)))
            .find(|path| is_readable_file(path))
    }

    /// All names to try for `reference`, in priority order.
    fn candidates(&self, reference: &str) -> Vec<String> {
        let mut candidates = vec![reference.to_string()];

        if self.known_extension(reference).is_none() {
            candidates.extend(self.extensions.iter().map(|ext| format!("{reference}.{ext}")));
        }

        candidates.extend(self.namespaced_candidates(reference));

        let mut unique = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !unique.contains(&candidate) {
                unique.push(candidate);
            }
        }
        unique
    }

    /// The trailing extension of `reference` if it is one of ours.
    fn known_extension<'r>(&self, reference: &'r str) -> Option<&'r str> {
        let file_name = reference.rsplit('/').next().unwrap_or(reference);
        let (_, ext) = file_name.rsplit_once('.')?;
        self.extensions.iter().any(|known| known == ext).then_some(ext)
    }

    /// `app.widgets.grid` → `app/widgets/grid.<ext>` for each extension;
    /// `app.widgets.grid.js` → `app/widgets/grid.js`.
    fn namespaced_candidates(&self, reference: &str) -> Vec<String> {
        let (stem, ext) = match self.known_extension(reference) {
            Some(ext) => (&reference[..reference.len() - ext.len() - 1], Some(ext)),
            None => (reference, None),
        };

        let mut has_namespace_dot = false;
        let rewritten = stem
            .split('/')
            .map(|component| {
                if component == "." || component == ".." || !component.contains('.') {
                    component.to_string()
                } else {
                    has_namespace_dot = true;
                    component.replace('.', "/")
                }
            })
            .collect::<Vec<_>>()
            .join("/");

        if !has_namespace_dot {
            return Vec::new();
        }

        match ext {
            Some(ext) => vec![format!("{rewritten}.{ext}")],
            None => self.extensions.iter().map(|ext| format!("{rewritten}.{ext}")).collect(),
        }
    }
}

fn is_relative_reference(reference: &str) -> bool {
    reference.starts_with("./") || reference.starts_with("../")
}
