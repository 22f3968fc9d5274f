use serde::{Deserialize, Serialize};

/// Body the server sends alongside a failed request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error: String,
    pub status_code: i64,
    pub message: String,
}
