pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod session;
pub mod source;
pub mod store;

pub use config::{Config, SourceConfig, ViewConfig, resolve_workspace_path};
pub use controller::{DerivedView, ViewController, ViewOptions};
pub use debounce::{Clock, DebounceHandle, Debouncer, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use session::Session;
pub use source::{AnySource, FileSource, HttpSource, NodeSource, StaticSource};
pub use store::{RecordStore, Snapshot};
