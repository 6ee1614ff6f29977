mod config;
mod histogram;
mod nodes;
mod stats;

pub use config::ConfigView;
pub use histogram::HistogramView;
pub use nodes::{NodeListView, page_footer};
pub use stats::StatsView;

use is_terminal::IsTerminal;
use owo_colors::Style;

/// Text styles for plain output. All styles are empty when the stream is
/// not a terminal, so piped output carries no escape codes.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub header: Style,
    pub active: Style,
    pub inactive: Style,
    pub accent: Style,
    pub muted: Style,
    pub warning: Style,
}

impl Palette {
    pub fn colored() -> Self {
        Self {
            header: Style::new().bold(),
            active: Style::new().green(),
            inactive: Style::new().red(),
            accent: Style::new().cyan(),
            muted: Style::new().bright_black(),
            warning: Style::new().yellow().bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            active: Style::new(),
            inactive: Style::new(),
            accent: Style::new(),
            muted: Style::new(),
            warning: Style::new(),
        }
    }

    pub fn for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn for_stderr() -> Self {
        if std::io::stderr().is_terminal() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn status(&self, active: bool) -> Style {
        if active { self.active } else { self.inactive }
    }
}
