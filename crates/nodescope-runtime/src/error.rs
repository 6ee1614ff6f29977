use std::fmt;

/// Result type for nodescope-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Rejected view parameter (unknown sort key, unsupported page size)
    View(nodescope_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Node payload could not be decoded
    Json(serde_json::Error),

    /// Request to the node monitor failed
    Http(reqwest::Error),

    /// Configuration error
    Config(String),

    /// Snapshot contains the same operator twice
    DuplicateOperator(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::View(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "Invalid node payload: {}", err),
            Error::Http(err) => write!(f, "Request failed: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::DuplicateOperator(op) => {
                write!(f, "Duplicate operator in snapshot: {}", op)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::View(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Config(_) | Error::DuplicateOperator(_) => None,
        }
    }
}

impl From<nodescope_types::Error> for Error {
    fn from(err: nodescope_types::Error) -> Self {
        Error::View(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
