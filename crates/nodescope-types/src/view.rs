//! View parameters and their transitions.
//!
//! `ViewState` is a plain value: every user action maps to a pure function
//! returning the next state. The reset rules live here so that every caller
//! (controller, CLI, tests) gets the same semantics:
//!
//! - search term, sort config or page size change => page goes back to 1
//! - setting any of those to the value it already has is not a change
//! - page change alone leaves everything else untouched

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Operator,
    Status,
    Uptime,
    Fee,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Operator,
        SortKey::Status,
        SortKey::Uptime,
        SortKey::Fee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Operator => "operator",
            SortKey::Status => "status",
            SortKey::Uptime => "uptime",
            SortKey::Fee => "fee",
        }
    }

    /// Human label used by sort menus and column headers
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Operator => "Operator",
            SortKey::Status => "Status",
            SortKey::Uptime => "Uptime",
            SortKey::Fee => "Fee",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "operator" => Ok(SortKey::Operator),
            "status" => Ok(SortKey::Status),
            "uptime" => Ok(SortKey::Uptime),
            "fee" => Ok(SortKey::Fee),
            _ => Err(Error::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(Error::UnknownSortDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Uptime,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Result of the user asking to sort by `key`.
    ///
    /// Same key flips the direction; a different key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Rows per page. Only the sizes offered by the page-size selector exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Fifty,
    Hundred,
    TwoHundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Fifty, PageSize::Hundred, PageSize::TwoHundred];

    pub fn get(self) -> usize {
        match self {
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
            PageSize::TwoHundred => 200,
        }
    }

    /// Next size in the selector, wrapping around
    pub fn cycled(self) -> Self {
        match self {
            PageSize::Fifty => PageSize::Hundred,
            PageSize::Hundred => PageSize::TwoHundred,
            PageSize::TwoHundred => PageSize::Fifty,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            200 => Ok(PageSize::TwoHundred),
            other => Err(Error::InvalidPageSize(other)),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub sort: SortConfig,
    pub page_size: PageSize,
    /// 1-based
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: SortConfig::default(),
            page_size: PageSize::default(),
            page: 1,
        }
    }
}

impl ViewState {
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        let term = term.into();
        if term == self.search_term {
            return self.clone();
        }
        Self {
            search_term: term,
            page: 1,
            ..self.clone()
        }
    }

    /// Sort-by-key request with direction toggling
    pub fn with_sort_toggled(&self, key: SortKey) -> Self {
        self.with_sort(self.sort.toggled(key))
    }

    pub fn with_sort(&self, sort: SortConfig) -> Self {
        if sort == self.sort {
            return self.clone();
        }
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        if page_size == self.page_size {
            return self.clone();
        }
        Self {
            page_size,
            page: 1,
            ..self.clone()
        }
    }

    /// Page numbers below 1 are treated as 1; the upper bound is applied by
    /// [`ViewState::clamped`] once the result size is known.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn clamped(&self, total_pages: usize) -> Self {
        Self {
            page: self.page.clamp(1, total_pages.max(1)),
            ..self.clone()
        }
    }
}
