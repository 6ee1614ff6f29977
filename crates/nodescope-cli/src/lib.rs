// nodescope CLI
//
// One fetch per invocation. One-shot commands (list, stats, histogram) run
// the same controller the dashboard uses, so a `list --search x --sort fee`
// prints exactly what the dashboard would show after the same actions.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, ListArgs};
pub use commands::run;
