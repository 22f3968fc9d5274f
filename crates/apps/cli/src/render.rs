use common_services::api::timeline::interfaces::{DayGroup, YearGroup};
use common_types::{AssetItem, Storage, User};
use std::fmt::Write;

pub fn albums(groups: &[YearGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}", group.year);
        for album in &group.albums {
            let members = album.album_users.len();
            let _ = write!(out, "  {}  {}", album.id, album.album_name);
            if members > 0 {
                let _ = write!(out, "  (shared with {members})");
            }
            out.push('\n');
        }
    }
    out
}

pub fn asset_line(asset: &AssetItem) -> String {
    let kind = if asset.is_video() { "video" } else { "image" };
    let star = if asset.is_favorite { " *" } else { "" };
    let place = asset
        .exif_info
        .as_ref()
        .and_then(|exif| exif.city.as_deref())
        .map(|city| format!("  {city}"))
        .unwrap_or_default();
    format!(
        "{}  {kind}  {}{place}{star}",
        asset.id, asset.original_file_name
    )
}

pub fn assets(flat: &[AssetItem], grouped: &[DayGroup]) -> String {
    let mut out = String::new();
    if grouped.is_empty() {
        for asset in flat {
            let _ = writeln!(out, "{}", asset_line(asset));
        }
        return out;
    }
    for group in grouped {
        let _ = writeln!(out, "{}", group.day.format("%A %-d %B %Y"));
        for asset in &group.items {
            let _ = writeln!(out, "  {}", asset_line(asset));
        }
    }
    out
}

pub fn asset_details(asset: &AssetItem) -> String {
    let mut out = asset_line(asset);
    let _ = write!(out, "\n  taken {}", asset.local_date_time);
    if let Some(exif) = &asset.exif_info {
        let camera = [exif.make.as_deref(), exif.model.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if !camera.is_empty() {
            let _ = write!(out, "\n  camera {camera}");
        }
        if let (Some(lat), Some(lon)) = (exif.latitude, exif.longitude) {
            let _ = write!(out, "\n  at {lat:.4}, {lon:.4}");
        }
        if let Some(country) = &exif.country {
            let _ = write!(out, "\n  country {country}");
        }
    }
    out
}

pub fn user(user: &User) -> String {
    format!(
        "{} <{}>  id {}",
        user.name,
        user.email,
        user.id.as_deref().unwrap_or("-")
    )
}

pub fn storage(storage: &Storage) -> String {
    format!(
        "{} of {} used ({:.1}%), {} free",
        storage.disk_use, storage.disk_size, storage.disk_usage_percentage, storage.disk_available
    )
}
