use crate::{AssetItem, User};
use serde::{Deserialize, Serialize};

/// A member of an album, with the role the owner granted them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumUser {
    pub user: User,
    #[serde(default)]
    pub role: Option<String>,
}

/// Represents a single album as listed by `GET /api/albums`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub album_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "albumThumbnailAssetId", alias = "thumbnailAssetId", default)]
    pub thumbnail_asset_id: Option<String>,
    /// ISO-8601 timestamp of the oldest asset in the album.
    #[serde(default)]
    pub start_date: Option<String>,
    /// ISO-8601 timestamp of the newest asset in the album.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub album_users: Vec<AlbumUser>,
}

impl Album {
    /// Whether `user` appears in this album's member list.
    #[must_use]
    pub fn is_shared_with(&self, user: &User) -> bool {
        self.album_users
            .iter()
            .any(|member| member.user.is_same_account(user))
    }
}

/// Response of `GET /api/albums/{albumId}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDetails {
    pub id: String,
    pub album_name: String,
    pub assets: Vec<AssetItem>,
}
