use bon::Builder;
use chrono::{DateTime, Utc};
use std::fmt;
use std::fmt::Display;

/// Which kind of asset a search is limited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaTypeFilter {
    #[default]
    All,
    Image,
    Video,
}

impl MediaTypeFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

impl Display for MediaTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The filter selections a search is built from.
#[derive(Debug, Clone, Default, Builder)]
pub struct SearchFilters {
    /// Free text. Non-empty text makes the search a smart search.
    #[builder(default, into)]
    pub query: String,
    #[builder(default)]
    pub media_type: MediaTypeFilter,
    #[builder(default)]
    pub is_favorite: bool,
    #[builder(default)]
    pub is_not_in_album: bool,
    #[builder(default)]
    pub is_archived: bool,
    pub taken_after: Option<DateTime<Utc>>,
    pub taken_before: Option<DateTime<Utc>>,
    /// Only assets uploaded after this instant, oldest first.
    pub imported_after: Option<DateTime<Utc>>,
}
