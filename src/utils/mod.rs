//! Path utilities
//!
//! - [`fs`] - Lexical path normalization and readable-file checks
//! - [`platform`] - Expansion of `~` and environment variables in user paths

pub mod fs;
pub mod platform;

pub use fs::{absolutize, absolutize_from, is_readable_file, normalize_path};
pub use platform::{resolve_path, resolve_path_from};
