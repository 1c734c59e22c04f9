//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_sample_inputs();
//! fixture.command().arg("codeplug.json").arg("directory.yaml").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::inputs;
    pub use super::TestFixture;
}

/// Input documents used across tests.
#[allow(dead_code)]
pub mod inputs {
    /// A codeplug with one contact matching a directory group, one private
    /// contact, a hand-made simplex zone, and a stale repeater zone.
    pub const CODEPLUG: &str = include_str!("../testdata/codeplug.json");

    /// A directory with two groups and two repeaters, one without a groupset.
    pub const DIRECTORY: &str = include_str!("../testdata/directory.yaml");

    /// A hardware profile for a radio with a 12 character display.
    pub const PROFILE: &str = include_str!("../testdata/profile.yaml");

    /// An empty codeplug.
    pub const EMPTY_CODEPLUG: &str = r#"{"Contacts": [], "Zones": [], "Channels": []}"#;

    /// A directory whose repeater references a groupset that does not exist.
    pub const UNKNOWN_GROUPSET: &str = r#"
groups:
  Statewide: 31001
repeaters:
  Portland:
    frequency: "440.55000"
    offset: 5
    color: 1
    groupset: nowhere
"#;
}

/// A temporary directory holding the input documents for one test.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `codeplug.json`, `directory.yaml`, and `profile.yaml` from the
    /// sample inputs.
    pub fn with_sample_inputs(self) -> Self {
        self.with_file("codeplug.json", inputs::CODEPLUG)
            .with_file("directory.yaml", inputs::DIRECTORY)
            .with_file("profile.yaml", inputs::PROFILE)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the fixture.
    #[allow(dead_code)]
    pub fn file(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a JSON file written into the fixture.
    #[allow(dead_code)]
    pub fn read_json(&self, path: &str) -> serde_json::Value {
        let text = std::fs::read_to_string(self.file(path)).expect("Failed to read output");
        serde_json::from_str(&text).expect("Output should be valid JSON")
    }

    /// Create a command running in this fixture's directory.
    ///
    /// The platform configuration directory is pointed into the fixture and
    /// profile and log settings from the caller's environment are cleared,
    /// so a profile on the developer's machine never leaks into a test.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("codeplug-merge");
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.file(".config"))
            .env_remove("CODEPLUG_MERGE_PROFILE")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_sample_inputs() {
        let fixture = TestFixture::new().with_sample_inputs();
        assert!(fixture.file("codeplug.json").exists());
        assert!(fixture.file("directory.yaml").exists());
        assert!(fixture.file("profile.yaml").exists());
    }

    #[test]
    fn test_inputs_are_valid() {
        serde_json::from_str::<serde_json::Value>(inputs::CODEPLUG)
            .expect("CODEPLUG should be valid JSON");
        for yaml in [inputs::DIRECTORY, inputs::PROFILE, inputs::UNKNOWN_GROUPSET] {
            serde_yaml::from_str::<serde_yaml::Value>(yaml).expect("Input should be valid YAML");
        }
    }
}
