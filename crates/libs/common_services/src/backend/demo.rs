use super::ImmichBackend;
use crate::api::album::interfaces::AlbumScope;
use crate::api::search::query::Query;
use crate::api::timeline::interfaces::SortDirection;
use crate::api::timeline::service::parse_timestamp;
use crate::immich_client::{ImmichError, ImmichResult, MediaKind};
use app_state::AppSettings;
use async_trait::async_trait;
use common_types::{
    Album, AssetItem, SearchAlbumPage, SearchAssetPage, SearchResponse, Storage, User,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;
use url::Url;

const DEMO_FIXTURES: &str = include_str!("../../fixtures/demo.json");

#[derive(Debug, Deserialize, Clone)]
struct DemoAlbums {
    all: Vec<Album>,
    owned: Vec<Album>,
    shared: Vec<Album>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
struct DemoFixtures {
    user: User,
    storage: Storage,
    albums: DemoAlbums,
    primary_album_id: String,
    primary_assets: Vec<AssetItem>,
    secondary_assets: Vec<AssetItem>,
}

/// Serves bundled fixtures instead of talking to a server.
///
/// Favourite toggles are remembered for the lifetime of the backend.
pub struct DemoBackend {
    fixtures: DemoFixtures,
    media_url: Url,
    latency: Duration,
    favorites: Mutex<HashMap<String, bool>>,
}

impl DemoBackend {
    pub fn new(media_url: Url) -> ImmichResult<Self> {
        let fixtures = serde_json::from_str(DEMO_FIXTURES)?;
        Ok(Self {
            fixtures,
            media_url,
            latency: Duration::ZERO,
            favorites: Mutex::new(HashMap::new()),
        })
    }

    pub fn from_settings(settings: &AppSettings) -> ImmichResult<Self> {
        let demo = &settings.constants.demo;
        Ok(Self::new(Url::parse(&demo.media_url)?)?
            .with_latency(Duration::from_millis(demo.latency_ms)))
    }

    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Id of the album that gets the primary asset set.
    #[must_use]
    pub fn primary_album_id(&self) -> &str {
        &self.fixtures.primary_album_id
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn with_favorites(&self, mut items: Vec<AssetItem>) -> Vec<AssetItem> {
        let favorites = self
            .favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for item in &mut items {
            if let Some(&favorite) = favorites.get(&item.id) {
                item.is_favorite = favorite;
            }
        }
        items
    }

    fn all_assets(&self) -> Vec<AssetItem> {
        let items = self
            .fixtures
            .primary_assets
            .iter()
            .chain(&self.fixtures.secondary_assets)
            .cloned()
            .collect();
        self.with_favorites(items)
    }

    fn find_asset(&self, id: &str) -> ImmichResult<AssetItem> {
        self.all_assets()
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| ImmichError::Api {
                domain: "Not Found".to_string(),
                code: 404,
                message: format!("Asset {id} not found"),
            })
    }
}

#[async_trait]
impl ImmichBackend for DemoBackend {
    async fn albums(&self, shared: bool) -> ImmichResult<Vec<Album>> {
        self.simulate_latency().await;
        let albums = &self.fixtures.albums;
        Ok(if shared {
            albums.shared.clone()
        } else {
            albums.owned.clone()
        })
    }

    async fn albums_in_scope(
        &self,
        scope: AlbumScope,
        _me: Option<&User>,
    ) -> ImmichResult<Vec<Album>> {
        self.simulate_latency().await;
        let albums = &self.fixtures.albums;
        let fixture = match scope {
            AlbumScope::All => &albums.all,
            AlbumScope::Owned => &albums.owned,
            AlbumScope::Shared => &albums.shared,
        };
        debug!("Demo albums for scope {scope}: {}", fixture.len());
        Ok(fixture.clone())
    }

    async fn album_assets(&self, album_id: &str) -> ImmichResult<Vec<AssetItem>> {
        self.simulate_latency().await;
        let items = if album_id == self.fixtures.primary_album_id {
            self.fixtures.primary_assets.clone()
        } else {
            self.fixtures.secondary_assets.clone()
        };
        Ok(self.with_favorites(items))
    }

    async fn my_user(&self) -> ImmichResult<User> {
        self.simulate_latency().await;
        Ok(self.fixtures.user.clone())
    }

    async fn storage(&self) -> ImmichResult<Storage> {
        self.simulate_latency().await;
        Ok(self.fixtures.storage.clone())
    }

    async fn asset(&self, id: &str) -> ImmichResult<AssetItem> {
        self.simulate_latency().await;
        self.find_asset(id)
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> ImmichResult<AssetItem> {
        self.simulate_latency().await;
        let mut asset = self.find_asset(id)?;
        self.favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string(), favorite);
        asset.is_favorite = favorite;
        Ok(asset)
    }

    async fn search(&self, query: &Query) -> ImmichResult<SearchResponse> {
        self.simulate_latency().await;
        let mut items = self.all_assets();
        items.sort_by_key(|item| parse_timestamp(&item.local_date_time));
        if SortDirection::from_order(query.order()) == SortDirection::Descending {
            items.reverse();
        }
        let count = items.len() as u64;
        Ok(SearchResponse {
            albums: SearchAlbumPage::default(),
            assets: SearchAssetPage {
                total: count,
                count,
                items,
                next_page: None,
            },
        })
    }

    fn media_url(&self, id: &str, kind: MediaKind) -> ImmichResult<Url> {
        let folder = match kind {
            MediaKind::Thumbnail => "thumbnails",
            MediaKind::Original => "originals",
            MediaKind::Video => "videos",
        };
        let base = self.media_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{folder}/{id}"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> DemoBackend {
        DemoBackend::new(Url::parse("https://demo.example/media/").unwrap()).unwrap()
    }

    #[test]
    fn bundled_fixtures_parse() {
        let backend = backend();
        assert_eq!(backend.primary_album_id(), "demo-album-1");
        assert!(!backend.fixtures.albums.all.is_empty());
    }

    #[tokio::test]
    async fn album_ids_pick_fixture_sets() {
        let backend = backend();
        let primary = backend.album_assets("demo-album-1").await.unwrap();
        let other = backend.album_assets("anything-else").await.unwrap();
        assert_eq!(primary[2].id, "5.jpg");
        assert!(primary.iter().all(|p| !other.contains(p)));
    }

    #[tokio::test]
    async fn favorite_toggle_sticks() {
        let backend = backend();
        let updated = backend.set_favorite("5.jpg", true).await.unwrap();
        assert!(updated.is_favorite);
        assert!(backend.asset("5.jpg").await.unwrap().is_favorite);

        let err = backend.set_favorite("missing.jpg", true).await.unwrap_err();
        assert!(matches!(err, ImmichError::Api { code: 404, .. }));
    }

    #[test]
    fn demo_media_urls_live_under_media_base() {
        let backend = backend();
        let url = backend.media_url("1.jpg", MediaKind::Thumbnail).unwrap();
        assert_eq!(url.as_str(), "https://demo.example/media/thumbnails/1.jpg");
        let url = backend.media_url("4.mp4", MediaKind::Video).unwrap();
        assert_eq!(url.as_str(), "https://demo.example/media/videos/4.mp4");
    }
}
