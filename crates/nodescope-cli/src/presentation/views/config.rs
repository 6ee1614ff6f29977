use nodescope_runtime::Config;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;

use super::Palette;
use crate::presentation::CsvRecords;

#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub path: PathBuf,
    /// Whether the file exists on disk; `false` means defaults are in effect
    pub exists: bool,
    /// Set when this invocation wrote the file
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub created: bool,
    pub config: Config,
    #[serde(skip)]
    palette: Palette,
}

impl ConfigView {
    pub fn new(path: PathBuf, exists: bool, config: Config) -> Self {
        Self {
            path,
            exists,
            created: false,
            config,
            palette: Palette::for_stdout(),
        }
    }

    pub fn created(mut self) -> Self {
        self.created = true;
        self.exists = true;
        self
    }
}

impl fmt::Display for ConfigView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.palette;
        let note = if self.created {
            "created"
        } else if self.exists {
            "loaded"
        } else {
            "not found, using defaults"
        };
        writeln!(
            f,
            "{}",
            format!("# {} ({})", self.path.display(), note).style(p.muted)
        )?;

        let body = toml::to_string_pretty(&self.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

impl CsvRecords for ConfigView {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        let c = &self.config;
        writer.write_record(["key", "value"])?;
        writer.write_record(["source.endpoint", c.source.endpoint.as_str()])?;
        writer.write_record(["source.timeout_secs", &c.source.timeout_secs.to_string()])?;
        writer.write_record(["view.page_size", &c.view.page_size.to_string()])?;
        writer.write_record(["view.debounce_ms", &c.view.debounce_ms.to_string()])?;
        writer.write_record(["view.sort_key", c.view.sort_key.as_str()])?;
        writer.write_record(["view.sort_direction", c.view.sort_direction.as_str()])?;
        Ok(())
    }
}
