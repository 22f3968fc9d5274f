use chrono::NaiveDate;
use common_types::{Album, AssetItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Direction requested by a search body's `order` field. Anything but `"asc"` is descending.
    #[must_use]
    pub fn from_order(order: Option<&str>) -> Self {
        Self::from_ascending(order == Some("asc"))
    }
}

/// Assets taken on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub items: Vec<AssetItem>,
}

/// Albums whose newest asset falls in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub albums: Vec<Album>,
}
