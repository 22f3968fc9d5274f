#![allow(dead_code)]

use common_services::immich_client::ImmichClient;
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

pub fn client_for(server: &MockServer) -> ImmichClient {
    let base_url = Url::parse(&server.uri()).expect("mock server uri");
    ImmichClient::new(Client::new(), base_url, API_KEY)
}

pub fn user_json(id: &str) -> Value {
    json!({ "id": id, "name": id, "email": format!("{id}@example.com") })
}

pub fn album_json(id: &str, end_date: &str, members: &[&str]) -> Value {
    let album_users: Vec<Value> = members
        .iter()
        .map(|m| json!({ "user": user_json(m), "role": "viewer" }))
        .collect();
    json!({
        "id": id,
        "albumName": format!("Album {id}"),
        "description": "",
        "albumThumbnailAssetId": null,
        "startDate": end_date,
        "endDate": end_date,
        "albumUsers": album_users,
    })
}

pub fn asset_json(id: &str, local_date_time: &str, favorite: bool) -> Value {
    json!({
        "id": id,
        "deviceAssetId": format!("IMG_{id}"),
        "ownerId": "me",
        "deviceId": "phone",
        "type": "IMAGE",
        "originalPath": format!("/upload/{id}"),
        "originalFileName": id,
        "originalMimeType": "image/jpeg",
        "isFavorite": favorite,
        "localDateTime": local_date_time,
    })
}

pub fn search_json(items: Vec<Value>, next_page: Option<&str>) -> Value {
    let count = items.len();
    json!({
        "albums": { "total": 0, "count": 0 },
        "assets": { "total": 40, "count": count, "items": items, "nextPage": next_page },
    })
}
