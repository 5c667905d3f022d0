//! Temporary script trees.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::ScriptFixture;

/// A temporary directory that scripts are written into.
///
/// The directory is removed when the environment is dropped.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    /// Create a new, empty environment.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        Ok(Self { temp_dir })
    }

    /// Root of the environment.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the environment. The file need
    /// not exist.
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn create_file(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        Ok(full_path)
    }

    /// Write a script rendered from `fixture`.
    pub fn create_script(&self, relative: impl AsRef<Path>, fixture: &ScriptFixture) -> Result<PathBuf> {
        self.create_file(relative, &fixture.render())
    }
}
