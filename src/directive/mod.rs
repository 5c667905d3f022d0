//! Directive parsing for script headers.
//!
//! A script declares its dependencies in comment lines at the very top of the
//! file. Two comment forms are recognized:
//!
//! ```text
//! /* js widgets/grid */
//! // css layout
//! ```
//!
//! Each line yields a [`Directive`]: the first word is the *action*, the
//! remainder (trimmed) is the *parameter*. Scanning stops at the first line
//! that is not a directive, so directives must form an unbroken block at the
//! head of the file. A blank line ends the block too.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jsrequire::directive::{parse_file, parse_line};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let directive = parse_line("/* js application */").unwrap();
//! assert_eq!(directive.action, "js");
//! assert_eq!(directive.parameter, "application");
//!
//! for directive in parse_file(Path::new("public/javascripts/app.js"))? {
//!     println!("{directive}");
//! }
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use crate::core::JsRequireError;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*/\*\s*((?-u:\w)+)\s+(.*?)\s*\*/\s*$").expect("block comment pattern is valid")
});

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*//\s*((?-u:\w)+)\s+(.*?)\s*$").expect("line comment pattern is valid")
});

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A single `(action, parameter)` instruction from a script header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    /// The directive name, e.g. `js` or `css`.
    pub action: String,
    /// Everything after the action, with surrounding whitespace removed.
    pub parameter: String,
}

impl Directive {
    /// Create a directive from its parts.
    pub fn new(action: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            parameter: parameter.into(),
        }
    }

    /// Returns `true` if this directive requires another script.
    #[must_use]
    pub fn is_require(&self) -> bool {
        self.action == "js"
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.parameter)
    }
}

/// Parse a single line into a directive.
///
/// The block-comment form is tried first, then the line-comment form.
/// Returns `None` if the line matches neither.
#[must_use]
pub fn parse_line(line: &str) -> Option<Directive> {
    [&*BLOCK_COMMENT, &*LINE_COMMENT].into_iter().find_map(|pattern| {
        pattern
            .captures(line)
            .map(|caps| Directive::new(&caps[1], caps[2].trim()))
    })
}

/// Parse the leading directive block from a reader.
///
/// Lines are decoded lossily so a stray non-UTF-8 byte in a header does not
/// abort the scan. Reading stops at the first non-directive line; the rest of
/// the input is never consumed.
pub fn parse_reader<R: BufRead>(mut reader: R) -> std::io::Result<Vec<Directive>> {
    let mut directives = Vec::new();
    let mut buf = Vec::new();
    let mut first = true;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buf);
        let mut line = decoded.trim_end_matches(['\n', '\r']);
        if first {
            line = line.trim_start_matches(BYTE_ORDER_MARK);
            first = false;
        }

        match parse_line(line) {
            Some(directive) => directives.push(directive),
            None => break,
        }
    }

    Ok(directives)
}

/// Parse the leading directive block of the file at `path`.
///
/// # Errors
///
/// Returns [`JsRequireError::FileReadError`] if the file cannot be opened or
/// read.
pub fn parse_file(path: &Path) -> Result<Vec<Directive>> {
    let read_error = |e: std::io::Error| JsRequireError::FileReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::open(path).map_err(read_error)?;
    let directives = parse_reader(BufReader::new(file)).map_err(read_error)?;

    tracing::debug!("Parsed {} directive(s) from {}", directives.len(), path.display());
    Ok(directives)
}
