//! Core types for jsrequire
//!
//! This module holds the error types shared by every other module:
//! - [`JsRequireError`] - Enumerated error types covering all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! Library functions return [`anyhow::Result`] with a [`JsRequireError`] at
//! the root of the chain, so callers can downcast to match on a specific
//! failure:
//!
//! ```rust,no_run
//! use jsrequire::core::JsRequireError;
//! use jsrequire::Resolver;
//!
//! # fn example() -> anyhow::Result<()> {
//! let resolver = Resolver::new();
//! match resolver.resolve(["public/javascripts/app.js"]) {
//!     Ok(result) => println!("{} scripts", result.javascripts.len()),
//!     Err(e) => match e.downcast_ref::<JsRequireError>() {
//!         Some(JsRequireError::NotFound { reference, .. }) => {
//!             eprintln!("missing dependency: {reference}");
//!         }
//!         _ => return Err(e),
//!     },
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::{ErrorContext, JsRequireError, user_friendly_error};
