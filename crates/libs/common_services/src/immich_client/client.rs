use super::decode::{decode_list_response, decode_response};
use super::error::ImmichResult;
use app_state::AppSettings;
use bytes::Bytes;
use common_types::{
    Album, AlbumDetails, AssetItem, CreateApiKeyRequest, CreateApiKeyResponse, LoginRequest,
    LoginResponse, SearchResponse, Storage, UpdateAssetRequest, User,
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY_PARAM: &str = "apiKey";

/// Status and body of a finished request, whatever the status was.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Which rendition of an asset a media URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Thumbnail,
    Original,
    Video,
}

impl MediaKind {
    /// Video wins over thumbnail when both are asked for.
    #[must_use]
    pub const fn from_flags(thumbnail: bool, video: bool) -> Self {
        if video {
            Self::Video
        } else if thumbnail {
            Self::Thumbnail
        } else {
            Self::Original
        }
    }

    const fn path_suffix(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail/",
            Self::Original => "original/",
            Self::Video => "video/playback/",
        }
    }
}

/// Thin REST client for an Immich server.
///
/// GET requests carry the API key as an `apiKey` query parameter, requests
/// with a body carry it in the `x-api-key` header.
#[derive(Clone)]
pub struct ImmichClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for ImmichClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmichClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ImmichClient {
    pub fn new(http_client: Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> ImmichResult<Self> {
        let base_url = Url::parse(&settings.server.base_url)?;
        Ok(Self::new(
            Client::new(),
            base_url,
            settings.server.api_key.clone(),
        ))
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `path` below the server root, keeping any path prefix the root already has.
    pub fn endpoint(&self, path: &str) -> Url {
        endpoint_url(&self.base_url, path)
    }

    /// Endpoint URL carrying the API key and `params` in its query string.
    pub fn keyed_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint(path);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(API_KEY_PARAM, &self.api_key);
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Headers for requests that authenticate by header.
    pub fn key_headers(&self) -> ImmichResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(&self.api_key)?,
        );
        Ok(headers)
    }

    /// Plain GET. Any status is returned; only network failures are errors here.
    pub async fn get(&self, url: Url) -> ImmichResult<RawResponse> {
        debug!("GET {}", url.path());
        let response = self.http_client.get(url).send().await?;
        into_raw(response).await
    }

    /// Request with a JSON body.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: &B,
    ) -> ImmichResult<RawResponse> {
        request_json(&self.http_client, method, url, headers, body).await
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> ImmichResult<T> {
        let response = self.get(self.keyed_url(path, params)).await?;
        decode_response(&response)
    }

    pub async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ImmichResult<T> {
        let response = self
            .send(method, self.endpoint(path), self.key_headers()?, body)
            .await?;
        decode_response(&response)
    }

    pub async fn list_albums(&self, shared: bool) -> ImmichResult<Vec<Album>> {
        let shared = shared.to_string();
        let url = self.keyed_url("api/albums", &[("shared", &shared)]);
        let response = self.get(url).await?;
        decode_list_response(&response)
    }

    pub async fn album_details(&self, album_id: &str) -> ImmichResult<AlbumDetails> {
        self.get_json(&format!("api/albums/{album_id}"), &[]).await
    }

    pub async fn my_user(&self) -> ImmichResult<User> {
        self.get_json("api/users/me", &[]).await
    }

    pub async fn server_storage(&self) -> ImmichResult<Storage> {
        self.get_json("api/server/storage", &[]).await
    }

    pub async fn asset_info(&self, id: &str) -> ImmichResult<AssetItem> {
        self.get_json(&format!("api/assets/{id}"), &[]).await
    }

    pub async fn update_asset(
        &self,
        id: &str,
        update: UpdateAssetRequest,
    ) -> ImmichResult<AssetItem> {
        self.send_json(Method::PUT, &format!("api/assets/{id}"), &update)
            .await
    }

    /// Smart search when the query has free text, metadata search otherwise.
    pub async fn search_assets<B: Serialize + ?Sized>(
        &self,
        smart: bool,
        body: &B,
    ) -> ImmichResult<SearchResponse> {
        let path = if smart {
            "api/search/smart"
        } else {
            "api/search/metadata"
        };
        self.send_json(Method::POST, path, body).await
    }

    pub fn media_url(&self, id: &str, kind: MediaKind) -> Url {
        self.keyed_url(&format!("api/assets/{id}/{}", kind.path_suffix()), &[])
    }

    /// Exchanges credentials for a session token. Needs no API key.
    pub async fn login(
        http_client: &Client,
        base_url: &Url,
        email: &str,
        password: &str,
    ) -> ImmichResult<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let url = endpoint_url(base_url, "api/auth/login");
        let response =
            request_json(http_client, Method::POST, url, HeaderMap::new(), &body).await?;
        decode_response(&response)
    }

    /// Mints a new API key for the user the access token belongs to.
    pub async fn create_api_key(
        http_client: &Client,
        base_url: &Url,
        access_token: &str,
        name: &str,
    ) -> ImmichResult<CreateApiKeyResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {access_token}"))?,
        );
        let url = endpoint_url(base_url, "api/api-keys");
        let body = CreateApiKeyRequest::all_permissions(name);
        let response = request_json(http_client, Method::POST, url, headers, &body).await?;
        decode_response(&response)
    }
}

fn endpoint_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    let joined = format!(
        "{}/{}",
        base_url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url.set_query(None);
    url
}

async fn request_json<B: Serialize + ?Sized>(
    http_client: &Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: &B,
) -> ImmichResult<RawResponse> {
    debug!("{} {}", method, url.path());
    let response = http_client
        .request(method, url)
        .headers(headers)
        .json(body)
        .send()
        .await?;
    into_raw(response).await
}

async fn into_raw(response: reqwest::Response) -> ImmichResult<RawResponse> {
    let status = response.status();
    let body = response.bytes().await?;
    Ok(RawResponse { status, body })
}
