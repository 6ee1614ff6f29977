use serde::Serialize;

/// Envelope for every one-shot command.
///
/// JSON output is `{"content": ..., "warnings": [...]}`; plain and CSV
/// output print `content` on stdout and the warnings on stderr.
#[derive(Debug, Serialize)]
pub struct CommandResult<T>
where
    T: Serialize,
{
    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T> CommandResult<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Attach the session's load failure, if there was one.
    pub fn with_load_error(self, load_error: Option<&str>) -> Self {
        match load_error {
            Some(err) => self.with_warning(format!("could not load nodes: {}", err)),
            None => self,
        }
    }
}
