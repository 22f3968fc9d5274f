//! Where the service gets its data from: a real server or bundled demo fixtures.

mod demo;
mod http;

pub use demo::DemoBackend;

use crate::api::album::interfaces::AlbumScope;
use crate::api::album::service::albums_for_scope;
use crate::api::search::query::Query;
use crate::immich_client::{ImmichClient, ImmichResult, MediaKind};
use app_state::AppSettings;
use async_trait::async_trait;
use common_types::{Album, AssetItem, SearchResponse, Storage, User};
use std::sync::Arc;
use tracing::info;
use url::Url;

#[async_trait]
pub trait ImmichBackend: Send + Sync {
    /// Albums owned by the user (`shared == false`) or shared ones (`shared == true`).
    async fn albums(&self, shared: bool) -> ImmichResult<Vec<Album>>;

    /// Albums shown for `scope`. `me` decides membership for the owned and all scopes.
    async fn albums_in_scope(
        &self,
        scope: AlbumScope,
        me: Option<&User>,
    ) -> ImmichResult<Vec<Album>> {
        if scope == AlbumScope::Shared {
            let shared = self.albums(true).await?;
            return albums_for_scope(scope, &[], &shared, me);
        }
        let owned = self.albums(false).await?;
        let shared = self.albums(true).await?;
        albums_for_scope(scope, &owned, &shared, me)
    }

    async fn album_assets(&self, album_id: &str) -> ImmichResult<Vec<AssetItem>>;

    async fn my_user(&self) -> ImmichResult<User>;

    async fn storage(&self) -> ImmichResult<Storage>;

    async fn asset(&self, id: &str) -> ImmichResult<AssetItem>;

    /// Sets the favourite flag and returns the updated asset.
    async fn set_favorite(&self, id: &str, favorite: bool) -> ImmichResult<AssetItem>;

    async fn search(&self, query: &Query) -> ImmichResult<SearchResponse>;

    fn media_url(&self, id: &str, kind: MediaKind) -> ImmichResult<Url>;
}

/// Picks the demo backend when the settings hold the demo sentinels.
pub fn from_settings(settings: &AppSettings) -> ImmichResult<Arc<dyn ImmichBackend>> {
    if settings.is_demo() {
        info!("Demo server configured, serving bundled fixtures.");
        return Ok(Arc::new(DemoBackend::from_settings(settings)?));
    }
    info!("Using server {}", settings.server.base_url);
    Ok(Arc::new(ImmichClient::from_settings(settings)?))
}
