use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nodescope_runtime::{Clock, Session, SystemClock, ViewController};
use nodescope_types::SortKey;

use crate::types::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Dashboard state: the controller plus what only the terminal cares about
/// (input mode, the search box text, row cursor, layout).
pub struct DashboardApp<C: Clock = SystemClock> {
    pub(crate) controller: ViewController<C>,
    pub(crate) source: String,
    pub(crate) load_error: Option<String>,
    pub(crate) input_mode: InputMode,
    pub(crate) search_input: String,
    pub(crate) view_mode: ViewMode,
    pub(crate) selected: usize,
    pub(crate) should_quit: bool,
}

impl<C: Clock> DashboardApp<C> {
    pub fn from_session(session: Session<C>) -> Self {
        let source = session.source().to_string();
        let load_error = session.load_error().map(str::to_string);
        let controller = session.into_controller();
        let search_input = controller.state().search_term.clone();

        Self {
            controller,
            source,
            load_error,
            input_mode: InputMode::Normal,
            search_input,
            view_mode: ViewMode::default(),
            selected: 0,
            should_quit: false,
        }
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn controller(&self) -> &ViewController<C> {
        &self.controller
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fire a due search. Returns true when the view changed.
    pub fn tick(&mut self) -> bool {
        let fired = self.controller.tick().is_some();
        if fired {
            self.selected = 0;
        }
        fired
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Search => self.handle_search_key(key),
        }
        self.clamp_selection();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.controller.sort_by(SortKey::ALL[index]);
                self.selected = 0;
            }
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                self.controller.next_page();
                self.selected = 0;
            }
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                self.controller.prev_page();
                self.selected = 0;
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.controller.set_page(1);
                self.selected = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.controller.set_page(usize::MAX);
                self.selected = 0;
            }
            KeyCode::Char('s') => {
                let next = self.controller.state().page_size.cycled();
                self.controller.set_page_size(next);
                self.selected = 0;
            }
            KeyCode::Char('v') => self.view_mode = self.view_mode.toggled(),
            KeyCode::Down | KeyCode::Char('j') => self.selected = self.selected.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.controller.flush_search();
                self.input_mode = InputMode::Normal;
                self.selected = 0;
            }
            KeyCode::Esc => {
                // Drop the unapplied edit and show the applied term again
                self.controller.cancel_search();
                self.search_input = self.controller.state().search_term.clone();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                self.controller.request_search(self.search_input.clone());
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_input.clear();
                self.controller.request_search(String::new());
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.controller.request_search(self.search_input.clone());
            }
            _ => {}
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.controller.view().page.visible_range().map_or(0, |(a, b)| b - a + 1);
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}
