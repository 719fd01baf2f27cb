//! Shared testing utilities for resumake CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BACKEND_FRAGMENTS: &[&str] = &[
    "design.tex",
    "header.tex",
    "education.tex",
    "skills_backend.tex",
    "experience_backend.tex",
    "certifications.tex",
];

/// Isolated fragment store and output root for one test.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("tex")).unwrap();
        fs::create_dir_all(root.path().join("out")).unwrap();
        Self { root }
    }

    pub fn fragment_dir(&self) -> PathBuf {
        self.root.path().join("tex")
    }

    pub fn output_root(&self) -> PathBuf {
        self.root.path().join("out")
    }

    pub fn identifier_dir(&self, identifier: &str) -> PathBuf {
        self.output_root().join(identifier)
    }

    /// Writes each fragment with a `% <name>` marker line as its content.
    pub fn write_fragments(&self, names: &[&str]) {
        for name in names {
            fs::write(self.fragment_dir().join(name), format!("% {name}")).unwrap();
        }
    }

    /// Command for the compiled binary, pointed at this context and with
    /// `true` standing in for the typesetter.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("resumake").expect("Failed to locate resumake binary");
        cmd.current_dir(self.root.path())
            .env("RESUMAKE_FRAGMENT_DIR", self.fragment_dir())
            .env("RESUMAKE_OUTPUT_ROOT", self.output_root())
            .env("RESUMAKE_RENDER_PROGRAM", "true")
            .env_remove("RESUMAKE_RESUME_TYPES")
            .env_remove("DEEPSEEK_API")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}
