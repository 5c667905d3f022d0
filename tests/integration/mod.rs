//! Integration test suite for jsrequire
//!
//! End-to-end tests against the public library API and the `jsrequire`
//! binary, using script trees written to temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **resolve**: Ordering, load paths and file lookup
//! - **hooks**: Directive hooks
//! - **helpers**: Web paths and namespaces on resolved output
//! - **config**: `jsrequire.toml` handling
//! - **cli**: The `jsrequire` binary

mod common;

mod cli;
mod config;
mod helpers;
mod hooks;
mod resolve;
