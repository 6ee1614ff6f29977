use std::fmt;

/// Result type for nodescope-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised when a view parameter arrives from outside the supported set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sort token is not one of operator, status, uptime, fee
    UnknownSortKey(String),

    /// Direction token is not asc or desc
    UnknownSortDirection(String),

    /// Page size is not one of 50, 100, 200
    InvalidPageSize(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSortKey(key) => write!(
                f,
                "Unknown sort key '{}' (expected one of: operator, status, uptime, fee)",
                key
            ),
            Error::UnknownSortDirection(dir) => {
                write!(f, "Unknown sort direction '{}' (expected asc or desc)", dir)
            }
            Error::InvalidPageSize(size) => {
                write!(f, "Invalid page size {} (expected 50, 100 or 200)", size)
            }
        }
    }
}

impl std::error::Error for Error {}
