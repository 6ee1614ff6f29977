use crate::args::ListArgs;
use crate::presentation::views::NodeListView;
use crate::presentation::{CommandResult, ConsoleRenderer};
use crate::types::OutputFormat;
use anyhow::Result;
use nodescope_runtime::Session;
use nodescope_types::{SortConfig, SortDirection, SortKey};

/// Applies the flags in dashboard order: search, sort, page size, page.
/// Each of the first three resets the page when it changes, so the page goes last.
pub fn handle(mut session: Session, args: ListArgs, format: OutputFormat) -> Result<()> {
    let load_error = session.load_error().map(str::to_string);
    let controller = session.controller_mut();

    if let Some(term) = args.search {
        controller.request_search(term);
        controller.flush_search();
    }

    let current = controller.state().sort;
    let key = match &args.sort {
        Some(token) => token.parse::<SortKey>()?,
        None => current.key,
    };
    // Naming the active key alone keeps its direction; a new key starts ascending
    let direction = match &args.direction {
        Some(token) => token.parse::<SortDirection>()?,
        None if key == current.key => current.direction,
        None => SortDirection::Asc,
    };
    controller.set_sort(SortConfig::new(key, direction));

    if let Some(size) = args.page_size {
        controller.set_page_size_value(size)?;
    }

    let view = controller.set_page(args.page);
    let content = NodeListView::new(view.rows, view.page, view.state);

    let result = CommandResult::new(content).with_load_error(load_error.as_deref());
    ConsoleRenderer::new(format).render(result)
}
