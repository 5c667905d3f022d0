//! Shared fixture tree for the integration tests.

use anyhow::Result;
use jsrequire::test_utils::{ScriptFixture, TestEnvironment};
use std::path::PathBuf;

/// A project with a `javascripts` directory and a separate
/// `different-place` directory that is only reachable as a load path.
pub struct Fixtures {
    pub env: TestEnvironment,
}

impl Fixtures {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;

        env.create_script("javascripts/norequire.js", &ScriptFixture::new())?;
        env.create_script("javascripts/a.js", &ScriptFixture::new().require("b"))?;
        env.create_script("javascripts/c.js", &ScriptFixture::new().require("a"))?;
        env.create_script("different-place/b.js", &ScriptFixture::new().require("norequire"))?;
        env.create_script(
            "javascripts/requirecss.js",
            &ScriptFixture::new().stylesheet("style").stylesheet("base"),
        )?;
        env.create_script(
            "javascripts/hook.js",
            &ScriptFixture::new().directive("view", "hello world"),
        )?;
        env.create_script(
            "javascripts/require_non_existing_file.js",
            &ScriptFixture::new().require("not_existing"),
        )?;
        env.create_script(
            "javascripts/require_namespaced_file.js",
            &ScriptFixture::new().require("namespace.a"),
        )?;
        env.create_script("javascripts/namespace/a.js", &ScriptFixture::new())?;
        env.create_script(
            "javascripts/require_filename_with_dot.js",
            &ScriptFixture::new().require("file.with.dot"),
        )?;
        env.create_script("javascripts/file.with.dot.js", &ScriptFixture::new())?;
        env.create_script(
            "javascripts/require_filename_with_js.js",
            &ScriptFixture::new().require("namespace.json_reader"),
        )?;
        env.create_script("javascripts/namespace/json_reader.js", &ScriptFixture::new())?;

        Ok(Self { env })
    }

    /// Absolute path below the fixture root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.env.path(relative)
    }

    /// Absolute path below `javascripts`.
    pub fn js(&self, name: &str) -> PathBuf {
        self.env.path("javascripts").join(name)
    }

    pub fn root(&self) -> PathBuf {
        self.env.root().to_path_buf()
    }
}
