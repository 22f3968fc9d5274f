use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConstants {
    pub demo: DemoConstants,
    /// Name given to API keys minted through the login flow.
    pub api_key_name: String,
}

/// The reserved server/key pair that switches the client into demo mode.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConstants {
    pub server_url: String,
    pub api_key: String,
    /// Simulated round trip for fixture responses.
    pub latency_ms: u64,
    /// Base that demo media URLs are built on.
    pub media_url: String,
}

impl Default for AppConstants {
    fn default() -> Self {
        Self {
            demo: DemoConstants {
                server_url: "https://demo.immich.local".to_string(),
                api_key: "demo".to_string(),
                latency_ms: 400,
                media_url: "https://demo.immich.local/media".to_string(),
            },
            api_key_name: "immich-browse".to_string(),
        }
    }
}
