use crate::types::{LogLevel, OutputFormat, ViewMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nodescope")]
#[command(about = "Search, sort, page and summarize node operator listings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Node monitor URL, JSON file, or `-` for stdin (defaults to the configured endpoint)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Config file (defaults to config.toml in the nodescope data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of the filtered, sorted node list
    List(ListArgs),

    /// Summary statistics over the whole snapshot
    Stats,

    /// Node count per fee
    Histogram,

    /// Interactive dashboard
    Dashboard {
        #[arg(long, default_value = "list")]
        view: ViewMode,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive substring of the operator address
    #[arg(long)]
    pub search: Option<String>,

    /// operator, status, uptime or fee; a new key starts ascending
    #[arg(long)]
    pub sort: Option<String>,

    /// asc or desc; defaults to the current direction when the key is unchanged
    #[arg(long)]
    pub direction: Option<String>,

    /// 1-based page; out-of-range values are clamped
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// 50, 100 or 200
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
