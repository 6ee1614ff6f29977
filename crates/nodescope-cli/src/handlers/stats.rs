use crate::presentation::views::StatsView;
use crate::presentation::{CommandResult, ConsoleRenderer};
use crate::types::OutputFormat;
use anyhow::Result;
use nodescope_runtime::Session;

pub fn handle(session: &Session, format: OutputFormat) -> Result<()> {
    let view = session.controller().view();
    let result = CommandResult::new(StatsView::new(view.stats)).with_load_error(session.load_error());
    ConsoleRenderer::new(format).render(result)
}
