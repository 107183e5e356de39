use anyhow::Result;
use cmap_core::cli::{OUTPUT_FILE, Summary, render_timeline};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A log file on disk in its own temp directory, with room for the rendered output.
pub struct LogFixture {
    dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    /// Write `lines` to a fresh log file.
    pub fn from_lines(lines: &[&str]) -> Self {
        let mut body = lines.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        Self::from_text(&body)
    }

    pub fn from_text(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("ns_server.debug.log");
        fs::write(&path, body).expect("failed to write log fixture");

        Self { dir, path }
    }

    /// Copy a checked-in log from `fixtures/logs/`.
    pub fn from_fixture(name: &str) -> Self {
        let fixture = fixtures_dir().join("logs").join(name);

        assert!(
            fixture.exists(),
            "fixture log does not exist: {:?}",
            fixture
        );

        let body = fs::read_to_string(&fixture).expect("failed to read fixture log");
        Self::from_text(&body)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join(OUTPUT_FILE)
    }

    pub fn render(&self) -> Result<Summary> {
        render_timeline(&self.path, &self.output_path())
    }

    /// The rendered SVG, or panic if it was not written.
    pub fn output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("timeline was not written")
    }
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}
