pub mod error;
pub mod record;
pub mod view;

pub use error::{Error, Result};
pub use record::{NodeEnvelope, NodeRecord};
pub use view::{PageSize, SortConfig, SortDirection, SortKey, ViewState};
