use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    Image,
    Video,
}

/// Camera and location metadata. Every field may be missing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExifInfo {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub date_time_original: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// A single photo or video known to the server.
///
/// Equality and hashing only look at `id`: an updated copy of an asset is
/// still the same asset.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetItem {
    pub id: String,
    pub device_asset_id: String,
    pub owner_id: String,
    pub device_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub original_path: String,
    pub original_file_name: String,
    #[serde(default)]
    pub original_mime_type: Option<String>,
    pub is_favorite: bool,
    #[serde(default)]
    pub exif_info: Option<ExifInfo>,
    /// Wall-clock capture time, ISO-8601.
    pub local_date_time: String,
}

impl AssetItem {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.asset_type == AssetType::Video
    }
}

impl PartialEq for AssetItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssetItem {}

impl Hash for AssetItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Partial body for `PUT /api/assets/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    pub is_favorite: bool,
}
