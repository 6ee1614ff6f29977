use crate::args::{Cli, Commands, ListArgs};
use crate::handlers;
use crate::logging;
use crate::types::ViewMode;
use anyhow::Result;
use is_terminal::IsTerminal;
use nodescope_runtime::{AnySource, Config, Session};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_else(default_command);
    let interactive = matches!(command, Commands::Dashboard { .. });
    logging::init(cli.log_level, cli.log_file.as_deref(), interactive)?;

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), "config loaded");

    match command {
        Commands::Config { command } => {
            handlers::config::handle(command, config, config_path, cli.format)
        }
        Commands::List(args) => {
            let session = bootstrap(cli.source.as_deref(), &config)?;
            handlers::list::handle(session, args, cli.format)
        }
        Commands::Stats => {
            let session = bootstrap(cli.source.as_deref(), &config)?;
            handlers::stats::handle(&session, cli.format)
        }
        Commands::Histogram => {
            let session = bootstrap(cli.source.as_deref(), &config)?;
            handlers::histogram::handle(&session, cli.format)
        }
        Commands::Dashboard { view } => {
            let session = bootstrap(cli.source.as_deref(), &config)?;
            handlers::dashboard::handle(session, view)
        }
    }
}

/// Bare `nodescope`: the dashboard on a terminal, the first page otherwise.
fn default_command() -> Commands {
    if std::io::stdout().is_terminal() {
        Commands::Dashboard {
            view: ViewMode::default(),
        }
    } else {
        Commands::List(ListArgs {
            page: 1,
            ..ListArgs::default()
        })
    }
}

/// Fetch the snapshot once. A failed fetch still yields a session, with an
/// empty store and the failure kept for display.
fn bootstrap(source: Option<&str>, config: &Config) -> Result<Session> {
    let location = source.unwrap_or(&config.source.endpoint);
    let source = AnySource::from_location(location, config.source.timeout())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(Session::bootstrap(&source, config.view_options())))
}

