use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateApiKeyRequest {
    pub name: String,
    pub permissions: Vec<String>,
}

impl CreateApiKeyRequest {
    /// A key that may do everything the logged in user may do.
    #[must_use]
    pub fn all_permissions(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: vec!["all".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyResponse {
    /// The key itself. Only returned once, at creation.
    pub secret: String,
    pub api_key: ApiKey,
}
