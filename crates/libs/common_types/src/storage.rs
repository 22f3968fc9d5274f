use serde::{Deserialize, Serialize};

/// Disk usage snapshot from `GET /api/server/storage`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub disk_size: String,
    pub disk_use: String,
    pub disk_available: String,
    pub disk_size_raw: i64,
    pub disk_use_raw: i64,
    pub disk_available_raw: i64,
    pub disk_usage_percentage: f64,
}
