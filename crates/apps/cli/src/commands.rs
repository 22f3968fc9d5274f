use crate::cli::{Cli, Command, SearchArgs};
use crate::render;
use app_state::AppSettings;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use color_eyre::eyre::{Report, Result};
use common_services::api::search::interfaces::SearchFilters;
use common_services::api::search::query::Query;
use common_services::backend;
use common_services::immich_client::{ImmichClient, ImmichError};
use common_services::service::ImmichService;
use tracing::info;

/// Applies the `--server` / `--api-key` flags on top of the loaded settings.
#[must_use]
pub fn apply_overrides(mut settings: AppSettings, cli: &Cli) -> AppSettings {
    if let Some(server) = &cli.server {
        settings.server.base_url = server.trim().trim_end_matches('/').to_string();
    }
    if let Some(api_key) = &cli.api_key {
        settings.server.api_key = api_key.trim().to_string();
    }
    settings
}

pub async fn run(cli: Cli, settings: AppSettings) -> Result<()> {
    match cli.command {
        Command::Login { email, password } => login(&settings, &email, &password).await,
        command => run_with_service(command, &settings).await,
    }
}

async fn run_with_service(command: Command, settings: &AppSettings) -> Result<()> {
    let backend = backend::from_settings(settings).map_err(user_facing)?;
    let service = ImmichService::new(backend, settings.display.group_by_day);

    match command {
        Command::Albums { scope } => {
            service.set_scope(scope.into());
            service.fetch_albums().await.map_err(user_facing)?;
            let state = service.state();
            info!("{} albums in scope {}", state.album_count(), state.scope);
            print!("{}", render::albums(&state.albums_grouped));
        }
        Command::Assets {
            album_id,
            ascending,
            flat,
        } => {
            if flat {
                service.set_group_by_day(false);
            }
            let ascending = ascending || settings.display.ascending;
            service
                .fetch_assets(&album_id, ascending)
                .await
                .map_err(user_facing)?;
            let state = service.state();
            print!(
                "{}",
                render::assets(&state.asset_items, &state.asset_items_grouped)
            );
        }
        Command::Search(args) => search(&service, &args).await?,
        Command::Me => {
            let user = service.get_my_user().await.map_err(user_facing)?;
            println!("{}", render::user(&user));
        }
        Command::Storage => {
            let storage = service.get_storage().await.map_err(user_facing)?;
            println!("{}", render::storage(&storage));
        }
        Command::Asset { id } => {
            let asset = service.get_asset(&id).await.map_err(user_facing)?;
            let asset = service.ensure_exif(asset).await.map_err(user_facing)?;
            println!("{}", render::asset_details(&asset));
        }
        Command::Favorite { id, off } => {
            let asset = service.update_assets(&id, !off).await.map_err(user_facing)?;
            println!("{}", render::asset_line(&asset));
        }
        Command::Url {
            id,
            thumbnail,
            video,
        } => {
            let url = service
                .image_url(&id, thumbnail, video)
                .map_err(user_facing)?;
            println!("{url}");
        }
        Command::Login { email, password } => login(settings, &email, &password).await?,
    }
    Ok(())
}

/// Walks up to `args.pages` result pages, printing each one.
async fn search(service: &ImmichService, args: &SearchArgs) -> Result<()> {
    let filters = search_filters(args);
    let mut query = Query::from_filters(&filters);
    for _ in 0..args.pages.max(1) {
        let next_page = service.search_assets(&query).await.map_err(user_facing)?;
        query.update_pagination(next_page);

        let state = service.state();
        println!("page {}", query.page().unwrap_or(1));
        print!(
            "{}",
            render::assets(&state.asset_items, &state.asset_items_grouped)
        );
        if query.no_next_page() {
            break;
        }
        query.to_next();
    }
    Ok(())
}

fn search_filters(args: &SearchArgs) -> SearchFilters {
    SearchFilters::builder()
        .query(args.text.clone().unwrap_or_default())
        .media_type(args.media_type.into())
        .is_favorite(args.favorite)
        .is_not_in_album(args.not_in_album)
        .is_archived(args.archived)
        .maybe_taken_after(args.taken_after.map(start_of_day))
        .maybe_taken_before(args.taken_before.map(start_of_day))
        .maybe_imported_after(args.imported_after.map(start_of_day))
        .build()
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

async fn login(settings: &AppSettings, email: &str, password: &str) -> Result<()> {
    let http_client = reqwest::Client::new();
    let base_url = settings.base_url()?;
    let session = ImmichClient::login(&http_client, &base_url, email, password)
        .await
        .map_err(user_facing)?;
    info!("Logged in as user {}", session.user_id);

    let key_name = &settings.constants.api_key_name;
    let created =
        ImmichClient::create_api_key(&http_client, &base_url, &session.access_token, key_name)
            .await
            .map_err(user_facing)?;
    println!("Created API key '{}' ({})", created.api_key.name, created.api_key.id);
    println!("APP__SERVER__API_KEY={}", created.secret);
    Ok(())
}

/// Keeps the error chain but leads with the message a user should see.
fn user_facing(error: ImmichError) -> Report {
    let message = error.user_message();
    Report::new(error).wrap_err(message)
}
