use crate::{AppConstants, DisplaySettings, LoggingSettings, RawSettings, ServerSettings};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub server: ServerSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
    pub constants: AppConstants,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let server = ServerSettings {
            base_url: raw.server.base_url.trim().trim_end_matches('/').to_string(),
            api_key: raw.server.api_key.trim().to_string(),
        };

        Self {
            server,
            display: raw.display,
            logging: raw.logging,
            constants: raw.constants,
        }
    }
}

impl AppSettings {
    /// Settings pointing at `base_url` with default display, logging and constants.
    #[must_use]
    pub fn for_server(base_url: &str, api_key: &str) -> Self {
        RawSettings {
            server: ServerSettings {
                base_url: base_url.to_string(),
                api_key: api_key.to_string(),
            },
            display: DisplaySettings {
                group_by_day: true,
                ascending: false,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
            constants: AppConstants::default(),
        }
        .into()
    }

    /// Demo mode is on iff both the server and the key are the demo sentinels.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        let demo = &self.constants.demo;
        self.server.base_url == demo.server_url.trim_end_matches('/')
            && self.server.api_key == demo.api_key
    }

    /// The server root as a parsed URL.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.server.base_url)
            .map_err(|e| eyre!("Invalid server base_url '{}': {e}", self.server.base_url))
    }
}
