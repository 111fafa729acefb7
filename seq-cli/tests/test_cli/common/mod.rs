//! Shared fixture keeping filesystem interactions isolated.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Captured output of one binary run.
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

/// Test fixture owning a temporary working directory.
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Full path for a file inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root_dir.path().join(name)
    }

    /// Check if a file exists in the fixture.
    pub fn file_exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Write a fixture file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &[u8]) {
        fs::write(self.path(name), contents).unwrap();
    }

    /// Read a fixture file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read_file(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).unwrap()
    }

    /// Run the seqgen binary with the given arguments, using the fixture
    /// directory as the working directory.
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaited.
    pub fn run_seqgen(&self, args: &[&str]) -> Output {
        let raw = Command::new(env!("CARGO_BIN_EXE_seqgen"))
            .args(args)
            .current_dir(self.root_dir.path())
            .output()
            .unwrap();

        Output {
            status: raw.status,
            stdout_raw: raw.stdout.clone(),
            stdout: String::from_utf8_lossy(&raw.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw.stderr).into_owned(),
        }
    }
}
