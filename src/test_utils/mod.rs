//! Test utilities for jsrequire
//!
//! Helpers shared by unit tests and the integration test target: a
//! once-only logging setup and temporary script trees.
//!
//! # Example
//!
//! ```rust,no_run
//! use jsrequire::Resolver;
//! use jsrequire::test_utils::{ScriptFixture, TestEnvironment};
//!
//! # fn example() -> anyhow::Result<()> {
//! let env = TestEnvironment::new()?;
//! let app = env.create_script("app.js", &ScriptFixture::new().require("lib"))?;
//! env.create_script("lib.js", &ScriptFixture::new())?;
//!
//! let result = Resolver::new().resolve([&app])?;
//! assert_eq!(result.javascripts, vec![env.path("lib.js"), app]);
//! # Ok(())
//! # }
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::ScriptFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set that level is used;
/// otherwise `RUST_LOG` is honoured, and without it nothing is logged.
///
/// ```bash
/// RUST_LOG=jsrequire=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
