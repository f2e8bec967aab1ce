//! Shared testing utilities for deepads CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `deepads` binary in the work
    /// directory. The API key env var is cleared so tests never inherit one.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("deepads").expect("Failed to locate deepads binary");
        cmd.current_dir(&self.work_dir).env_remove("DEEPADS_API_KEY");
        cmd
    }

    /// Write a `deepads.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("deepads.toml"), content)
            .expect("Failed to write deepads.toml");
    }

    /// Write a voice-of-customer text file and return its path.
    pub fn write_voc_file(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("voc.txt");
        fs::write(&path, content).expect("Failed to write VOC file");
        path
    }
}
