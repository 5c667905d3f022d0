//! Error handling for jsrequire
//!
//! This module provides the error types raised while resolving script
//! dependencies and the user-facing error reporting used by the CLI.
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`JsRequireError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! Resolution itself has a single failure mode, [`JsRequireError::NotFound`]:
//! a referenced file could not be located on the load path. The remaining
//! variants cover reading files and loading configuration.
//!
//! # Examples
//!
//! ```rust,no_run
//! use jsrequire::core::{JsRequireError, user_friendly_error};
//! use std::path::PathBuf;
//!
//! let error = JsRequireError::NotFound {
//!     reference: "widgets/grid".to_string(),
//!     search_path: vec![PathBuf::from("/srv/app/public/javascripts")],
//! };
//!
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for jsrequire operations
///
/// # Error Categories
///
/// ## Resolution
/// - [`NotFound`] - A reference could not be located in any load path
/// - [`ResolutionFailed`] - Resolution aborted for another reason (e.g. a hook error)
///
/// ## File System
/// - [`FileReadError`] - A located file could not be read
///
/// ## Configuration
/// - [`ConfigNotFound`] - An explicitly given config file is missing
/// - [`ConfigParseError`] - The config file is not valid TOML or has bad fields
/// - [`InvalidWebRoot`] - A `--web-root` argument could not be parsed
///
/// [`NotFound`]: JsRequireError::NotFound
/// [`ResolutionFailed`]: JsRequireError::ResolutionFailed
/// [`FileReadError`]: JsRequireError::FileReadError
/// [`ConfigNotFound`]: JsRequireError::ConfigNotFound
/// [`ConfigParseError`]: JsRequireError::ConfigParseError
/// [`InvalidWebRoot`]: JsRequireError::InvalidWebRoot
#[derive(Error, Debug, Clone)]
pub enum JsRequireError {
    /// A reference could not be resolved to a file.
    ///
    /// Raised after the literal name, every implicit extension and the
    /// namespaced form of the reference were tried in every directory.
    #[error("File '{reference}' not found in load paths '{}'", join_paths(.search_path))]
    NotFound {
        /// The reference exactly as it was required
        reference: String,
        /// Every directory that was searched, in search order
        search_path: Vec<PathBuf>,
    },

    /// Resolution aborted for a reason other than a missing file
    #[error("Cannot resolve dependencies: {reason}")]
    ResolutionFailed {
        /// Description of the failure
        reason: String,
    },

    /// A file was located but reading it failed
    #[error("Failed to read '{}': {reason}", .path.display())]
    FileReadError {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error message
        reason: String,
    },

    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// The configuration file could not be parsed
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// A web root argument was malformed
    #[error("Invalid web root '{value}': expected PREFIX or PREFIX=REPLACEMENT")]
    InvalidWebRoot {
        /// The offending argument
        value: String,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join("', '")
}

/// Error context wrapper that provides user-friendly error information
///
/// Wraps a [`JsRequireError`] with an optional suggestion and details. The
/// CLI displays it with colors: the error in red, details in yellow, the
/// suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: JsRequireError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details.
    #[must_use]
    pub const fn new(error: JsRequireError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into an [`ErrorContext`] with suggestions.
///
/// Known [`JsRequireError`] variants anywhere in the error chain get tailored
/// suggestions. Anything else (including hook errors) is reported as a
/// resolution failure carrying the full error chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(known) = error.chain().find_map(|cause| cause.downcast_ref::<JsRequireError>()) {
        return create_error_context(known.clone());
    }

    let chain = error.chain().map(ToString::to_string).collect::<Vec<_>>().join(": ");
    ErrorContext::new(JsRequireError::ResolutionFailed {
        reason: chain,
    })
}

fn create_error_context(error: JsRequireError) -> ErrorContext {
    match &error {
        JsRequireError::NotFound {
            reference,
            search_path,
        } => {
            let details = format!(
                "'{reference}' was tried as-is, with each script extension and as a dotted namespace in {} director{}",
                search_path.len(),
                if search_path.len() == 1 { "y" } else { "ies" }
            );
            ErrorContext::new(error)
                .with_suggestion("Add the directory containing the file with --load-path or `load_paths` in jsrequire.toml")
                .with_details(details)
        }
        JsRequireError::ResolutionFailed { .. } => ErrorContext::new(error),
        JsRequireError::FileReadError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the file is readable by the current user"),
        JsRequireError::ConfigNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Check the --config argument or the JSREQUIRE_CONFIG variable"),
        JsRequireError::ConfigParseError { reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Check the TOML syntax in jsrequire.toml")
        }
        JsRequireError::InvalidWebRoot { .. } => ErrorContext::new(error).with_suggestion(
            "Use --web-root /srv/app/public or --web-root /srv/app/public=/static",
        ),
    }
}
