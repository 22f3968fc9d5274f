mod common;

use color_eyre::eyre::Result;
use common::{album_json, asset_json, client_for, search_json, user_json};
use common_services::api::album::interfaces::AlbumScope;
use common_services::api::search::interfaces::SearchFilters;
use common_services::api::search::query::Query;
use common_services::api::timeline::interfaces::SortDirection;
use common_services::backend::DemoBackend;
use common_services::immich_client::ImmichError;
use common_services::service::ImmichService;
use chrono::{TimeZone, Utc};
use common_types::AssetItem;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn demo_service(group_by_day: bool) -> Result<ImmichService> {
    let backend = DemoBackend::new(Url::parse("https://demo.example/media")?)?;
    Ok(ImmichService::new(Arc::new(backend), group_by_day))
}

async fn mount_albums(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("me")))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/albums"))
        .and(query_param("shared", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            album_json("o1", "2024-06-01T10:00:00.000Z", &[]),
            album_json("o2", "2023-06-01T10:00:00Z", &[]),
            album_json("o3", "2023-01-01T10:00:00.000Z", &[]),
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/albums"))
        .and(query_param("shared", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            album_json("s1", "2024-02-01T10:00:00.000Z", &["me", "bob"]),
            album_json("s2", "2022-02-01T10:00:00.000Z", &["bob"]),
        ])))
        .mount(server)
        .await;
}

fn album_ids(service: &ImmichService) -> Vec<String> {
    service
        .state()
        .albums_grouped
        .iter()
        .flat_map(|group| group.albums.iter().map(|album| album.id.clone()))
        .collect()
}

#[tokio::test]
async fn owned_scope_keeps_albums_not_shared_with_me() -> Result<()> {
    // ARRANGE
    let server = MockServer::start().await;
    mount_albums(&server).await;
    let service = ImmichService::new(Arc::new(client_for(&server)), false);
    service.set_scope(AlbumScope::Owned);

    // ACT
    service.fetch_albums().await?;

    // ASSERT
    let state = service.state();
    assert_eq!(state.album_count(), 4);
    assert_eq!(state.user.id.as_deref(), Some("me"));
    let years: Vec<i32> = state.albums_grouped.iter().map(|g| g.year).collect();
    assert_eq!(years, vec![2024, 2023, 2022]);
    let mut ids = album_ids(&service);
    ids.sort();
    assert_eq!(ids, vec!["o1", "o2", "o3", "s2"]);
    Ok(())
}

#[tokio::test]
async fn all_scope_adds_shared_with_me() -> Result<()> {
    let server = MockServer::start().await;
    mount_albums(&server).await;
    let service = ImmichService::new(Arc::new(client_for(&server)), false);

    service.fetch_albums().await?;

    assert_eq!(service.state().album_count(), 5);
    assert!(album_ids(&service).contains(&"s1".to_string()));
    Ok(())
}

#[tokio::test]
async fn shared_scope_skips_owned_fetch() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/albums"))
        .and(query_param("shared", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            album_json("s1", "2024-02-01T10:00:00.000Z", &["me"]),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/albums"))
        .and(query_param("shared", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;
    let service = ImmichService::new(Arc::new(client_for(&server)), false);
    service.set_scope(AlbumScope::Shared);

    service.fetch_albums().await?;

    assert_eq!(album_ids(&service), vec!["s1"]);
    Ok(())
}

#[tokio::test]
async fn failed_album_fetch_clears_albums_and_user() -> Result<()> {
    // ARRANGE
    let server = MockServer::start().await;
    mount_albums(&server).await;
    let service = ImmichService::new(Arc::new(client_for(&server)), false);
    service.fetch_albums().await?;
    assert_eq!(service.state().album_count(), 5);

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("me")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/albums"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    // ACT
    let err = service.fetch_albums().await.unwrap_err();

    // ASSERT
    assert!(matches!(err, ImmichError::NoAlbums));
    let state = service.state();
    assert!(state.albums_grouped.is_empty());
    assert!(state.user.email.is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_asset_fetch_keeps_previous_list() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/albums/good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "good",
            "albumName": "Good",
            "assets": [asset_json("x", "2024-05-01T10:00:00.000Z", false)],
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/albums/bad"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Bad Request",
            "statusCode": 400,
            "message": "Not found or no album.read access",
        })))
        .mount(&server)
        .await;
    let service = ImmichService::new(Arc::new(client_for(&server)), true);

    service.fetch_assets("good", false).await?;
    let err = service.fetch_assets("bad", false).await.unwrap_err();

    assert!(matches!(err, ImmichError::Api { code: 400, .. }));
    let state = service.state();
    assert_eq!(state.asset_items.len(), 1);
    assert_eq!(state.asset_items_grouped.len(), 1);
    Ok(())
}

#[tokio::test]
async fn search_replaces_assets_and_reports_next_page() -> Result<()> {
    // ARRANGE
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_json(
            vec![
                asset_json("p1", "2024-05-01T10:00:00.000Z", false),
                asset_json("p2", "2024-05-03T10:00:00.000Z", false),
            ],
            Some("2"),
        )))
        .mount(&server)
        .await;
    let service = ImmichService::new(Arc::new(client_for(&server)), true);
    let mut query = Query::from_filters(&SearchFilters::builder().is_favorite(true).build());

    // ACT
    let next = service.search_assets(&query).await?;
    query.update_pagination(next);

    // ASSERT
    assert_eq!(next, Some(2));
    assert!(query.no_previous_page());
    assert!(!query.no_next_page());
    let state = service.state();
    assert_eq!(state.asset_items.len(), 2);
    assert_eq!(state.asset_order, SortDirection::Descending);
    assert_eq!(state.asset_items_grouped[0].items[0].id, "p2");

    // Paging replaces rather than appends.
    query.to_next();
    service.search_assets(&query).await?;
    assert_eq!(service.state().asset_items.len(), 2);
    Ok(())
}

#[tokio::test]
async fn ensure_exif_fetches_only_when_missing() -> Result<()> {
    let server = MockServer::start().await;
    let mut with_exif = asset_json("e1", "2024-05-01T10:00:00.000Z", false);
    with_exif["exifInfo"] = json!({ "city": "Ghent", "country": "Belgium" });
    Mock::given(method("GET"))
        .and(path("/api/assets/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_exif))
        .expect(1)
        .mount(&server)
        .await;
    let bare: AssetItem =
        serde_json::from_value(asset_json("e1", "2024-05-01T10:00:00.000Z", false))?;
    let service = ImmichService::new(Arc::new(client_for(&server)), false);

    let enriched = service.ensure_exif(bare).await?;
    let again = service.ensure_exif(enriched.clone()).await?;

    assert_eq!(
        again.exif_info.and_then(|exif| exif.city).as_deref(),
        Some("Ghent")
    );
    assert_eq!(enriched.id, "e1");
    Ok(())
}

#[tokio::test]
async fn favorite_toggle_keeps_list_position() -> Result<()> {
    // ARRANGE
    let service = demo_service(true)?;
    service.fetch_assets("demo-album-1", false).await?;
    let before = service.state();
    assert_eq!(before.asset_index("5.jpg"), Some(2));
    assert!(!before.asset_items[2].is_favorite);

    // ACT
    let updated = service.update_assets("5.jpg", true).await?;

    // ASSERT
    let after = service.state();
    assert!(updated.is_favorite);
    assert_eq!(after.asset_items.len(), before.asset_items.len());
    assert_eq!(after.asset_index("5.jpg"), Some(2));
    assert!(after.asset_items[2].is_favorite);
    let grouped_copy = after
        .asset_items_grouped
        .iter()
        .flat_map(|g| &g.items)
        .find(|item| item.id == "5.jpg")
        .map(|item| item.is_favorite);
    assert_eq!(grouped_copy, Some(true));
    Ok(())
}

#[tokio::test]
async fn ascending_fetch_reverses_and_groups_oldest_first() -> Result<()> {
    let service = demo_service(true)?;

    service.fetch_assets("demo-album-1", true).await?;

    let state = service.state();
    assert_eq!(state.asset_items.first().map(|a| a.id.as_str()), Some("4.mp4"));
    assert_eq!(state.asset_order, SortDirection::Ascending);
    assert!(state
        .asset_items_grouped
        .windows(2)
        .all(|w| w[0].day < w[1].day));
    Ok(())
}

#[tokio::test]
async fn group_toggle_regroups_current_list() -> Result<()> {
    let service = demo_service(false)?;
    service.fetch_assets("demo-album-1", false).await?;
    assert!(service.state().asset_items_grouped.is_empty());

    service.set_group_by_day(true);
    let grouped: usize = service
        .state()
        .asset_items_grouped
        .iter()
        .map(|g| g.items.len())
        .sum();
    assert_eq!(grouped, service.state().asset_items.len());

    service.set_group_by_day(false);
    assert!(service.state().asset_items_grouped.is_empty());
    Ok(())
}

#[tokio::test]
async fn demo_albums_differ_per_scope() -> Result<()> {
    let service = demo_service(false)?;
    let mut counts = Vec::new();
    for _ in 0..3 {
        service.fetch_albums().await?;
        counts.push((service.scope(), service.state().album_count()));
        service.set_scope(service.scope().next());
    }

    assert_eq!(
        counts,
        vec![
            (AlbumScope::All, 4),
            (AlbumScope::Owned, 3),
            (AlbumScope::Shared, 2)
        ]
    );
    assert_eq!(service.scope(), AlbumScope::All);
    Ok(())
}

#[tokio::test]
async fn next_scope_refetches_and_publishes() -> Result<()> {
    let service = demo_service(false)?;
    let mut updates = service.subscribe();

    let scope = service.next_scope().await?;

    assert_eq!(scope, AlbumScope::Owned);
    assert!(updates.has_changed()?);
    let seen = updates.borrow_and_update().clone();
    assert_eq!(seen.scope, AlbumScope::Owned);
    assert_eq!(seen.album_count(), 3);
    Ok(())
}

#[tokio::test]
async fn demo_search_follows_query_order() -> Result<()> {
    let service = demo_service(false)?;
    let imported_after = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let ascending = Query::from_filters(
        &SearchFilters::builder()
            .imported_after(imported_after)
            .build(),
    );

    let next = service.search_assets(&ascending).await?;
    let oldest_first: Vec<String> = service
        .state()
        .asset_items
        .iter()
        .map(|a| a.id.clone())
        .collect();
    service.search_assets(&Query::new()).await?;
    let newest_first: Vec<String> = service
        .state()
        .asset_items
        .iter()
        .map(|a| a.id.clone())
        .collect();

    assert_eq!(next, None);
    assert_eq!(oldest_first.first().map(String::as_str), Some("8.mp4"));
    assert_eq!(newest_first.first().map(String::as_str), Some("1.jpg"));
    let mut reversed = newest_first.clone();
    reversed.reverse();
    assert_eq!(oldest_first, reversed);
    Ok(())
}

#[tokio::test]
async fn demo_urls_and_user() -> Result<()> {
    let service = demo_service(false)?;

    let thumb = service.image_url("1.jpg", true, false)?;
    let original = service.image_url("1.jpg", false, false)?;
    let video = service.video_url("4.mp4")?;
    let user = service.get_my_user().await?;
    let storage = service.get_storage().await?;

    assert_eq!(thumb.as_str(), "https://demo.example/media/thumbnails/1.jpg");
    assert_eq!(original.as_str(), "https://demo.example/media/originals/1.jpg");
    assert_eq!(video.as_str(), "https://demo.example/media/videos/4.mp4");
    assert_eq!(user.id.as_deref(), Some("demo-user"));
    assert_eq!(service.state().user, user);
    assert!(storage.disk_usage_percentage > 0.0);
    Ok(())
}
