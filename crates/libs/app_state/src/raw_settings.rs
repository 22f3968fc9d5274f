use crate::AppConstants;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub server: ServerSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
    pub constants: AppConstants,
}

/// Where the photo server lives and how to authenticate against it.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// Root of the server, without the `/api` suffix.
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    /// Also keep a per-day grouping of the current asset list.
    pub group_by_day: bool,
    /// Oldest first when listing album contents.
    #[serde(default)]
    pub ascending: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}
