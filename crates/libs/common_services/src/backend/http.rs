use super::ImmichBackend;
use crate::api::search::query::Query;
use crate::immich_client::{ImmichClient, ImmichResult, MediaKind};
use async_trait::async_trait;
use common_types::{Album, AssetItem, SearchResponse, Storage, UpdateAssetRequest, User};
use url::Url;

#[async_trait]
impl ImmichBackend for ImmichClient {
    async fn albums(&self, shared: bool) -> ImmichResult<Vec<Album>> {
        self.list_albums(shared).await
    }

    async fn album_assets(&self, album_id: &str) -> ImmichResult<Vec<AssetItem>> {
        Ok(self.album_details(album_id).await?.assets)
    }

    async fn my_user(&self) -> ImmichResult<User> {
        ImmichClient::my_user(self).await
    }

    async fn storage(&self) -> ImmichResult<Storage> {
        self.server_storage().await
    }

    async fn asset(&self, id: &str) -> ImmichResult<AssetItem> {
        self.asset_info(id).await
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> ImmichResult<AssetItem> {
        self.update_asset(
            id,
            UpdateAssetRequest {
                is_favorite: favorite,
            },
        )
        .await
    }

    async fn search(&self, query: &Query) -> ImmichResult<SearchResponse> {
        self.search_assets(query.is_smart_search(), query.body())
            .await
    }

    fn media_url(&self, id: &str, kind: MediaKind) -> ImmichResult<Url> {
        Ok(ImmichClient::media_url(self, id, kind))
    }
}
