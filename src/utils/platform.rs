//! Platform helpers for user-supplied paths.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::fs::absolutize_from;

/// Expands `~` and environment variables in a user-supplied path.
///
/// Both `$VAR` and `${VAR}` forms are supported. Undefined variables are an
/// error rather than being silently replaced with an empty string.
///
/// # Examples
///
/// ```rust,no_run
/// use jsrequire::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let dir = resolve_path("~/shared/javascripts")?;
/// let vendor = resolve_path("${ASSET_ROOT}/vendor")?;
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand path '{path}'"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Expands `path` like [`resolve_path`] and makes the result absolute against
/// `base`.
pub fn resolve_path_from(path: &str, base: &Path) -> Result<PathBuf> {
    Ok(absolutize_from(&resolve_path(path)?, base))
}
