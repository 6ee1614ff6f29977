use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io;

use super::result::CommandResult;
use super::views::Palette;
use crate::types::OutputFormat;

/// Content that can be flattened into CSV rows.
pub trait CsvRecords {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()>;
}

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T>(&self, result: CommandResult<T>) -> Result<()>
    where
        T: Serialize + Display + CsvRecords,
    {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Plain => {
                print_warnings(&result.warnings);
                print!("{}", result.content);
            }
            OutputFormat::Csv => {
                print_warnings(&result.warnings);
                let mut writer = csv::Writer::from_writer(io::stdout());
                result.content.write_csv(&mut writer)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

fn print_warnings(warnings: &[String]) {
    let palette = Palette::for_stderr();
    for warning in warnings {
        eprintln!("{} {}", "Warning:".style(palette.warning), warning);
    }
}
