use crate::alert;
use crate::api::timeline::interfaces::{DayGroup, SortDirection, YearGroup};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use common_types::{Album, AssetItem};
use std::collections::BTreeMap;

/// ISO-8601 with fractional seconds, e.g. `2024-05-01T12:30:00.123Z`.
fn parse_fractional(raw: &str) -> Option<DateTime<Utc>> {
    let (_, time) = raw.split_once('T')?;
    if !time.contains('.') {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// ISO-8601 to whole seconds, e.g. `2024-05-01T12:30:00Z`.
fn parse_whole_seconds(raw: &str) -> Option<DateTime<Utc>> {
    let (_, time) = raw.split_once('T')?;
    if time.contains('.') {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Parses a server timestamp, trying fractional-second precision first.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_fractional(raw).or_else(|| parse_whole_seconds(raw))
}

/// Groups assets per calendar day of their `local_date_time`.
///
/// Items keep their relative order inside a day. Timestamps that don't
/// parse land under today instead of failing the grouping.
#[must_use]
pub fn group_assets_by_day(items: &[AssetItem], direction: SortDirection) -> Vec<DayGroup> {
    group_assets_by_day_at(items, direction, Utc::now().date_naive())
}

pub(crate) fn group_assets_by_day_at(
    items: &[AssetItem],
    direction: SortDirection,
    today: NaiveDate,
) -> Vec<DayGroup> {
    let mut days: BTreeMap<NaiveDate, Vec<AssetItem>> = BTreeMap::new();
    for item in items {
        let day = parse_timestamp(&item.local_date_time).map_or_else(
            || {
                alert!(
                    "Asset {} has unparsable localDateTime '{}', grouping under today.",
                    item.id,
                    item.local_date_time
                );
                today
            },
            |taken| taken.date_naive(),
        );
        days.entry(day).or_default().push(item.clone());
    }

    let groups = days.into_iter().map(|(day, items)| DayGroup { day, items });
    match direction {
        SortDirection::Ascending => groups.collect(),
        SortDirection::Descending => groups.rev().collect(),
    }
}

/// Groups albums per year of their `end_date`, newest year first.
#[must_use]
pub fn group_albums_by_year(albums: &[Album]) -> Vec<YearGroup> {
    group_albums_by_year_at(albums, Utc::now().year())
}

pub(crate) fn group_albums_by_year_at(albums: &[Album], this_year: i32) -> Vec<YearGroup> {
    let mut years: BTreeMap<i32, Vec<Album>> = BTreeMap::new();
    for album in albums {
        let year = album
            .end_date
            .as_deref()
            .and_then(parse_timestamp)
            .map_or_else(
                || {
                    alert!(
                        "Album {} has no usable endDate ({:?}), grouping under this year.",
                        album.id,
                        album.end_date
                    );
                    this_year
                },
                |end| end.year(),
            );
        years.entry(year).or_default().push(album.clone());
    }

    years
        .into_iter()
        .rev()
        .map(|(year, albums)| YearGroup { year, albums })
        .collect()
}
