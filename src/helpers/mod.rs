//! Post-processing helpers for resolved script lists.
//!
//! Neither helper touches the file system; both operate on the paths
//! returned by [`Resolver::resolve`](crate::Resolver::resolve).
//!
//! - [`web_paths`] - Rewrite absolute paths into URLs under a web root
//! - [`namespaces`] - Derive dotted namespaces from script directories

pub mod namespaces;
pub mod web_paths;

pub use namespaces::derive_namespaces;
pub use web_paths::{WebRoots, parse_web_root, rewrite_to_web_paths};
