use crate::args::ConfigCommand;
use crate::presentation::views::ConfigView;
use crate::presentation::{CommandResult, ConsoleRenderer};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use nodescope_runtime::Config;
use std::path::PathBuf;
use tracing::info;

pub fn handle(
    command: ConfigCommand,
    config: Config,
    path: PathBuf,
    format: OutputFormat,
) -> Result<()> {
    let view = match command {
        ConfigCommand::Show => {
            let exists = path.exists();
            ConfigView::new(path, exists, config)
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            let config = Config::default();
            config.save_to(&path)?;
            info!(path = %path.display(), "wrote default config");
            ConfigView::new(path, true, config).created()
        }
    };

    ConsoleRenderer::new(format).render(CommandResult::new(view))
}
