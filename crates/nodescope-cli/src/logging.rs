//! tracing-subscriber setup.
//!
//! `RUST_LOG` wins over `--log-level`. Logs go to stderr so that stdout
//! stays parseable, or to `--log-file` when given. The dashboard owns the
//! terminal, so without a log file it runs with no subscriber at all.

use crate::types::LogLevel;
use anyhow::{Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init(level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if interactive => return Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
