//! Deriving namespaces from script locations.
//!
//! Frameworks such as ExtJS need every namespace declared before classes
//! are defined in it. When scripts are laid out one directory per namespace,
//! the namespaces can be read off the resolved paths.

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Collect the namespaces of `files` rooted at the directory named `prefix`.
///
/// For each path containing a component equal to `prefix` (the first such
/// component wins) that is followed by at least a file name, the components
/// from `prefix` up to the containing directory are joined with dots.
/// Paths without such a component are ignored. The result is sorted and
/// free of duplicates.
///
/// ```rust
/// use jsrequire::helpers::derive_namespaces;
///
/// let files = [
///     "/platform/public/javascripts/si/module/Hastenichtgesehen.js",
///     "/platform/public/javascripts/si/desktop/Wurstwaren.js",
///     "/platform/public/javascripts/si/applet/GeradNeu.js",
/// ];
/// assert_eq!(derive_namespaces(&files, "si"), vec!["si.applet", "si.desktop", "si.module"]);
/// ```
pub fn derive_namespaces<P: AsRef<Path>>(files: &[P], prefix: &str) -> Vec<String> {
    let mut namespaces = BTreeSet::new();

    for file in files {
        let components: Vec<String> = file
            .as_ref()
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let Some(start) = components.iter().position(|c| c == prefix) else {
            continue;
        };
        if start + 1 < components.len() {
            namespaces.insert(components[start..components.len() - 1].join("."));
        }
    }

    namespaces.into_iter().collect()
}
