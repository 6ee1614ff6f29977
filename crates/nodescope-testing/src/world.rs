//! TestWorld pattern for CLI integration tests.
//!
//! Holds a temp directory with node files and an isolated config location,
//! and runs the `nodescope` binary against them.

use anyhow::Result;
use assert_cmd::Command;
use nodescope_types::NodeRecord;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```ignore
/// use assert_cmd::cargo::cargo_bin_cmd;
/// use nodescope_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_nodes("nodes.json", &fixtures::reference_nodes());
/// let output = world
///     .run(cargo_bin_cmd!("nodescope"), &["stats", "--format", "json"])
///     .unwrap();
/// assert!(output.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    source: Option<PathBuf>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".nodescope");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            source: None,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write `nodes` in the monitor envelope format and use it as the source.
    pub fn with_nodes(mut self, name: &str, nodes: &[NodeRecord]) -> Self {
        let path = fixtures::write_envelope(self.temp_dir.path(), name, nodes)
            .expect("Failed to write node fixture");
        self.source = Some(path);
        self
    }

    /// Write raw file contents and use it as the source.
    pub fn with_raw_source(mut self, name: &str, contents: &str) -> Self {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write raw fixture");
        self.source = Some(path);
        self
    }

    /// Point a `nodescope` command at this environment.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("nodescope")`).
    /// This sets the data directory, clears `RUST_LOG`, and adds `--source`
    /// when a node file was configured.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env("NODESCOPE_PATH", &self.data_dir);
        cmd.env_remove("RUST_LOG");
        if let Some(source) = &self.source {
            cmd.arg("--source").arg(source);
        }
        cmd
    }

    /// Run a configured command with `args` and capture its output.
    pub fn run(&self, mut cmd: Command, args: &[&str]) -> Result<CliResult> {
        let output = self.configure_command(&mut cmd).args(args).output()?;
        Ok(CliResult {
            status: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured result of a CLI run.
#[derive(Debug)]
pub struct CliResult {
    status: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
