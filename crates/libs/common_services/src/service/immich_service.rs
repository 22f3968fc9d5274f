use crate::api::album::interfaces::AlbumScope;
use crate::api::search::query::Query;
use crate::api::timeline::interfaces::SortDirection;
use crate::api::timeline::service::{group_albums_by_year, group_assets_by_day};
use crate::backend::ImmichBackend;
use crate::immich_client::{ImmichError, ImmichResult, MediaKind};
use crate::service::state::ServiceState;
use common_types::{AssetItem, Storage, User};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, instrument, warn};
use url::Url;

/// Session facade over a backend. Owns the published album/asset/user state.
///
/// Calls are not serialised: overlapping fetches into the same state race
/// and the last one to finish wins.
pub struct ImmichService {
    backend: Arc<dyn ImmichBackend>,
    state: watch::Sender<ServiceState>,
}

impl ImmichService {
    #[must_use]
    pub fn new(backend: Arc<dyn ImmichBackend>, group_by_day: bool) -> Self {
        let (state, _) = watch::channel(ServiceState {
            group_by_day,
            ..ServiceState::default()
        });
        Self { backend, state }
    }

    /// Receives a new snapshot after every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ServiceState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> ServiceState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn scope(&self) -> AlbumScope {
        self.state.borrow().scope
    }

    pub fn set_scope(&self, scope: AlbumScope) {
        self.state.send_modify(|state| state.scope = scope);
    }

    /// Moves to the next album scope and refetches albums.
    pub async fn next_scope(&self) -> ImmichResult<AlbumScope> {
        let scope = self.scope().next();
        self.set_scope(scope);
        self.fetch_albums().await?;
        Ok(scope)
    }

    /// Fetches the albums for the current scope and publishes them grouped by year.
    ///
    /// On failure the album list and user are cleared.
    #[instrument(skip(self))]
    pub async fn fetch_albums(&self) -> ImmichResult<()> {
        let scope = self.scope();
        let result = async {
            let me = match scope {
                AlbumScope::Shared => None,
                AlbumScope::Owned | AlbumScope::All => Some(self.backend.my_user().await?),
            };
            let albums = self.backend.albums_in_scope(scope, me.as_ref()).await?;
            Ok::<_, ImmichError>((me, albums))
        }
        .await;

        match result {
            Ok((me, albums)) => {
                info!("Fetched {} albums for scope {scope}", albums.len());
                let grouped = group_albums_by_year(&albums);
                self.state.send_modify(|state| {
                    state.albums_grouped = grouped;
                    if let Some(me) = me {
                        state.user = me;
                    }
                });
                Ok(())
            }
            Err(e) => {
                warn!("Fetching albums failed: {e}");
                self.state.send_modify(|state| {
                    state.albums_grouped.clear();
                    state.user = User::default();
                });
                Err(e)
            }
        }
    }

    /// Loads the assets of an album, reversed when `ascending`.
    #[instrument(skip(self))]
    pub async fn fetch_assets(&self, album_id: &str, ascending: bool) -> ImmichResult<()> {
        let mut items = self.backend.album_assets(album_id).await?;
        if ascending {
            items.reverse();
        }
        info!("Fetched {} assets for album {album_id}", items.len());
        self.publish_assets(items, SortDirection::from_ascending(ascending));
        Ok(())
    }

    /// Runs a search and replaces the asset list with the returned page.
    ///
    /// Returns the next page number the server reported.
    #[instrument(skip(self, query), fields(query_id = query.id(), page = ?query.page()))]
    pub async fn search_assets(&self, query: &Query) -> ImmichResult<Option<u32>> {
        let response = self.backend.search(query).await?;
        let next_page = response.next_page_number();
        info!(
            "Search returned {} of {} assets, next page {next_page:?}",
            response.assets.count, response.assets.total
        );
        self.publish_assets(
            response.assets.items,
            SortDirection::from_order(query.order()),
        );
        Ok(next_page)
    }

    #[instrument(skip(self))]
    pub async fn get_asset(&self, id: &str) -> ImmichResult<AssetItem> {
        self.backend.asset(id).await
    }

    /// The asset itself when it already has EXIF data, else a freshly fetched copy.
    pub async fn ensure_exif(&self, asset: AssetItem) -> ImmichResult<AssetItem> {
        if asset.exif_info.is_some() {
            return Ok(asset);
        }
        self.get_asset(&asset.id).await
    }

    #[instrument(skip(self))]
    pub async fn get_my_user(&self) -> ImmichResult<User> {
        let user = self.backend.my_user().await?;
        self.state.send_modify(|state| state.user = user.clone());
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get_storage(&self) -> ImmichResult<Storage> {
        self.backend.storage().await
    }

    /// Sets the favourite flag and swaps the updated asset into the list at
    /// the position the old one had.
    #[instrument(skip(self))]
    pub async fn update_assets(&self, id: &str, favorite: bool) -> ImmichResult<AssetItem> {
        let updated = self.backend.set_favorite(id, favorite).await?;
        self.state.send_modify(|state| {
            if replace_asset(&mut state.asset_items, updated.clone()) && state.group_by_day {
                state.asset_items_grouped =
                    group_assets_by_day(&state.asset_items, state.asset_order);
            }
        });
        Ok(updated)
    }

    /// Turns the day grouping on or off, regrouping the current list.
    pub fn set_group_by_day(&self, group_by_day: bool) {
        self.state.send_modify(|state| {
            state.group_by_day = group_by_day;
            state.asset_items_grouped = if group_by_day {
                group_assets_by_day(&state.asset_items, state.asset_order)
            } else {
                Vec::new()
            };
        });
    }

    pub fn image_url(&self, id: &str, thumbnail: bool, video: bool) -> ImmichResult<Url> {
        self.backend
            .media_url(id, MediaKind::from_flags(thumbnail, video))
    }

    pub fn video_url(&self, id: &str) -> ImmichResult<Url> {
        self.image_url(id, false, true)
    }

    fn publish_assets(&self, items: Vec<AssetItem>, order: SortDirection) {
        self.state.send_modify(|state| {
            state.asset_items_grouped = if state.group_by_day {
                group_assets_by_day(&items, order)
            } else {
                Vec::new()
            };
            state.asset_items = items;
            state.asset_order = order;
        });
    }
}

/// Removes the asset with the same id and inserts `updated` at its index.
fn replace_asset(items: &mut Vec<AssetItem>, updated: AssetItem) -> bool {
    let Some(index) = items.iter().position(|item| item.id == updated.id) else {
        return false;
    };
    items.remove(index);
    items.insert(index, updated);
    true
}
