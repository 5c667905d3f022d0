//! Rewriting absolute script paths into web paths.
//!
//! Resolution returns absolute file system paths. To emit `<script>` tags the
//! part of each path up to the document root has to be cut off, or mapped to
//! the URL prefix it is served under:
//!
//! ```rust
//! use jsrequire::helpers::{WebRoots, rewrite_to_web_paths};
//!
//! let files = ["/srv/app/public/javascripts/app.js", "/srv/shared/js/lib.js"];
//!
//! let stripped = rewrite_to_web_paths(&files, &WebRoots::from("/srv/app/public"));
//! assert_eq!(stripped, vec!["/javascripts/app.js", "/srv/shared/js/lib.js"]);
//!
//! let mapped = rewrite_to_web_paths(
//!     &files,
//!     &WebRoots::Mapping(vec![
//!         ("/srv/app/public".to_string(), String::new()),
//!         ("/srv/shared/js".to_string(), "/shared".to_string()),
//!     ]),
//! );
//! assert_eq!(mapped, vec!["/javascripts/app.js", "/shared/lib.js"]);
//! ```

use anyhow::Result;
use std::path::Path;

use crate::core::JsRequireError;
use crate::utils::fs::absolutize;

/// The roots to strip from resolved paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebRoots {
    /// Prefixes removed without replacement.
    Prefixes(Vec<String>),
    /// `(prefix, replacement)` pairs.
    Mapping(Vec<(String, String)>),
}

impl WebRoots {
    /// `(normalized absolute prefix, replacement)` pairs in match order.
    fn normalized(&self) -> Vec<(String, &str)> {
        let normalize = |root: &str| absolutize(Path::new(root)).to_string_lossy().into_owned();
        match self {
            Self::Prefixes(prefixes) => prefixes.iter().map(|p| (normalize(p), "")).collect(),
            Self::Mapping(pairs) => {
                pairs.iter().map(|(p, replacement)| (normalize(p), replacement.as_str())).collect()
            }
        }
    }
}

impl From<&str> for WebRoots {
    fn from(prefix: &str) -> Self {
        Self::Prefixes(vec![prefix.to_string()])
    }
}

impl From<String> for WebRoots {
    fn from(prefix: String) -> Self {
        Self::Prefixes(vec![prefix])
    }
}

impl From<Vec<String>> for WebRoots {
    fn from(prefixes: Vec<String>) -> Self {
        Self::Prefixes(prefixes)
    }
}

impl FromIterator<(String, String)> for WebRoots {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self::Mapping(iter.into_iter().collect())
    }
}

/// Parse a `PREFIX` or `PREFIX=REPLACEMENT` argument.
///
/// # Errors
///
/// Returns [`JsRequireError::InvalidWebRoot`] if the prefix is empty.
pub fn parse_web_root(value: &str) -> Result<(String, String)> {
    let (prefix, replacement) = value.split_once('=').unwrap_or((value, ""));
    if prefix.trim().is_empty() {
        return Err(JsRequireError::InvalidWebRoot {
            value: value.to_string(),
        }
        .into());
    }
    Ok((prefix.to_string(), replacement.to_string()))
}

/// Rewrite each file by replacing the first matching root prefix.
///
/// Roots are made absolute and normalized, then tried in order. A root only
/// matches on a path component boundary: `/srv/app` matches
/// `/srv/app/x.js` but not `/srv/application/x.js`. Files matching no root
/// are returned unchanged.
pub fn rewrite_to_web_paths<P: AsRef<Path>>(files: &[P], roots: &WebRoots) -> Vec<String> {
    let roots = roots.normalized();

    files
        .iter()
        .map(|file| {
            let file = file.as_ref().to_string_lossy();
            roots
                .iter()
                .find_map(|(root, replacement)| {
                    strip_root(&file, root).map(|rest| format!("{replacement}{rest}"))
                })
                .unwrap_or_else(|| file.into_owned())
        })
        .collect()
}

fn strip_root<'f>(file: &'f str, root: &str) -> Option<&'f str> {
    let rest = file.strip_prefix(root)?;
    if rest.is_empty() || rest.starts_with('/') || root.ends_with('/') {
        Some(rest)
    } else {
        None
    }
}
