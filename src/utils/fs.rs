//! File system helpers used by the locator and resolver.
//!
//! Resolved files are compared by their lexically normalized absolute path,
//! so every path that enters the resolver goes through [`absolutize`].
//! Symbolic links are not resolved: a script reached through
//! a symlinked directory keeps the path it was found under.

use std::fs::File;
use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components lexically.
///
/// The file system is not consulted. A `..` directly under the root (or at
/// the start of a relative path) is kept for relative paths and dropped for
/// absolute ones, matching how the OS treats `/..`.
///
/// # Examples
///
/// ```rust
/// use jsrequire::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/foo/./bar/../baz")), PathBuf::from("/foo/baz"));
/// assert_eq!(normalize_path(Path::new("../src/./lib.js")), PathBuf::from("../src/lib.js"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }

    components.iter().collect()
}

/// Makes `path` absolute against `base` and normalizes it.
#[must_use]
pub fn absolutize_from(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Makes `path` absolute against the current working directory.
///
/// If the working directory cannot be determined the path is only normalized;
/// the subsequent lookup then fails with a regular not-found error.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => absolutize_from(path, &cwd),
        Err(_) => normalize_path(path),
    }
}

/// Returns `true` if `path` is an absolute path to a regular file that can
/// be opened for reading.
///
/// Directories, missing files and files without read permission all yield
/// `false`; none of them is an error for the caller.
#[must_use]
pub fn is_readable_file(path: &Path) -> bool {
    if !path.is_absolute() {
        return false;
    }

    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => File::open(path).is_ok(),
        _ => false,
    }
}
