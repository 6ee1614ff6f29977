pub mod renderer;
pub mod result;
pub mod tui;
pub mod views;

pub use renderer::{ConsoleRenderer, CsvRecords};
pub use result::CommandResult;
