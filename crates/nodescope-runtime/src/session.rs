use crate::controller::{ViewController, ViewOptions};
use crate::debounce::{Clock, SystemClock};
use crate::source::NodeSource;
use tracing::{info, warn};

/// One exploration session: a controller fed by a single fetch.
///
/// A failed fetch (or a snapshot rejected by the store) does not fail the
/// session. The store just stays empty and the reason is kept for display.
pub struct Session<C: Clock = SystemClock> {
    controller: ViewController<C>,
    source: String,
    load_error: Option<String>,
}

impl Session<SystemClock> {
    pub async fn bootstrap<S: NodeSource>(source: &S, options: ViewOptions) -> Self {
        Self::bootstrap_with_clock(source, SystemClock, options).await
    }
}

impl<C: Clock> Session<C> {
    pub async fn bootstrap_with_clock<S: NodeSource>(
        source: &S,
        clock: C,
        options: ViewOptions,
    ) -> Self {
        let description = source.describe();
        let mut controller = ViewController::with_clock(clock, options);

        let load_error = match source.fetch().await {
            Ok(records) => match controller.load(records) {
                Ok(view) => {
                    info!(
                        source = %description,
                        nodes = view.stats.total_nodes,
                        "session ready"
                    );
                    None
                }
                Err(err) => {
                    warn!(source = %description, error = %err, "snapshot rejected");
                    Some(err.to_string())
                }
            },
            Err(err) => {
                warn!(source = %description, error = %err, "error fetching nodes");
                Some(err.to_string())
            }
        };

        Self {
            controller,
            source: description,
            load_error,
        }
    }

    pub fn controller(&self) -> &ViewController<C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ViewController<C> {
        &mut self.controller
    }

    pub fn into_controller(self) -> ViewController<C> {
        self.controller
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
