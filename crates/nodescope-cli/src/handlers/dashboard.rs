use crate::presentation::tui::{self, DashboardApp};
use crate::types::ViewMode;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use nodescope_runtime::Session;

pub fn handle(session: Session, view_mode: ViewMode) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the dashboard needs an interactive terminal; use `nodescope list` for piped output");
    }

    let app = DashboardApp::from_session(session).with_view_mode(view_mode);
    tui::run(app)
}
