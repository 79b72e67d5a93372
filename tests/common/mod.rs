//! Common test utilities for Roster integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated home directory so a developer's own configuration never leaks in
#[allow(dead_code)]
pub struct TestHome {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the home directory
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestHome {
    /// Create a new empty home directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Directory the binary treats as the platform config dir
    pub fn config_dir(&self) -> PathBuf {
        self.path.join(".config")
    }

    /// Write a file relative to the home directory, returning its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Command for the roster binary running inside this home
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn roster_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("roster").unwrap();
        // Always ignore any developer ROSTER_* overrides during tests
        cmd.env_remove("ROSTER_CONFIG");
        cmd.env_remove("ROSTER_COURSE");
        cmd.env_remove("ROSTER_DUPLICATES");
        cmd.env_remove("RUST_LOG");
        cmd.env("HOME", &self.path);
        cmd.env("XDG_CONFIG_HOME", self.config_dir());
        cmd
    }
}

/// Join scripted answers into stdin content, one per line
#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
