use crate::api::album::interfaces::AlbumScope;
use crate::api::timeline::interfaces::{DayGroup, SortDirection, YearGroup};
use common_types::{AssetItem, User};

/// Everything the service publishes to its subscribers.
#[derive(Debug, Clone, Default)]
pub struct ServiceState {
    pub scope: AlbumScope,
    pub albums_grouped: Vec<YearGroup>,
    pub asset_items: Vec<AssetItem>,
    /// Only filled while grouping by day is on.
    pub asset_items_grouped: Vec<DayGroup>,
    /// Direction `asset_items` is grouped in.
    pub asset_order: SortDirection,
    pub group_by_day: bool,
    pub user: User,
}

impl ServiceState {
    #[must_use]
    pub fn album_count(&self) -> usize {
        self.albums_grouped.iter().map(|g| g.albums.len()).sum()
    }

    /// Index of the asset with `id` in the current list.
    #[must_use]
    pub fn asset_index(&self, id: &str) -> Option<usize> {
        self.asset_items.iter().position(|item| item.id == id)
    }
}
