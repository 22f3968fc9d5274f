use crate::api::search::interfaces::{MediaTypeFilter, SearchFilters};
use crate::utils::opaque_token;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use std::hash::{Hash, Hasher};

const QUERY_ID_LENGTH: usize = 16;

/// A search request body plus the page cursors of the last response.
///
/// Every query gets a random id at construction. Two queries are only equal
/// when both the id and the body match, so separately built queries with the
/// same filters never compare equal.
#[derive(Debug, Clone)]
pub struct Query {
    id: String,
    body: Map<String, Value>,
    is_smart_search: bool,
    previous_page: Option<u32>,
    next_page: Option<u32>,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        let mut body = Map::new();
        body.insert("page".to_string(), json!(1));
        Self {
            id: opaque_token(QUERY_ID_LENGTH),
            body,
            is_smart_search: false,
            previous_page: None,
            next_page: None,
        }
    }

    #[must_use]
    pub fn from_filters(filters: &SearchFilters) -> Self {
        let mut query = Self::new();
        query.add_query(filters);
        query
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The JSON body sent to the search endpoint.
    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    #[must_use]
    pub const fn is_smart_search(&self) -> bool {
        self.is_smart_search
    }

    #[must_use]
    pub fn page(&self) -> Option<u32> {
        self.body
            .get("page")
            .and_then(Value::as_u64)
            .and_then(|page| u32::try_from(page).ok())
    }

    /// `"asc"` or `"desc"` when the body sets an order.
    #[must_use]
    pub fn order(&self) -> Option<&str> {
        self.body.get("order").and_then(Value::as_str)
    }

    #[must_use]
    pub const fn previous_page(&self) -> Option<u32> {
        self.previous_page
    }

    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    #[must_use]
    pub const fn is_paged(&self) -> bool {
        self.previous_page.is_some() || self.next_page.is_some()
    }

    #[must_use]
    pub const fn no_previous_page(&self) -> bool {
        self.previous_page.is_none()
    }

    #[must_use]
    pub const fn no_next_page(&self) -> bool {
        self.next_page.is_none()
    }

    /// Rebuilds the body from `filters`, starting over at page 1.
    pub fn add_query(&mut self, filters: &SearchFilters) {
        self.body = Map::new();
        self.insert("page", json!(1));

        self.is_smart_search = !filters.query.is_empty();
        if self.is_smart_search {
            self.insert("query", json!(filters.query));
        }
        if filters.media_type != MediaTypeFilter::All {
            self.insert("type", json!(filters.media_type.as_str()));
        }
        if filters.is_favorite {
            self.insert("isFavorite", json!(true));
        }
        if filters.is_not_in_album {
            self.insert("isNotInAlbum", json!(true));
        }
        if filters.is_archived {
            self.insert("isArchived", json!(true));
        }
        if let Some(taken_after) = filters.taken_after {
            self.insert("takenAfter", json!(iso_date(taken_after)));
        }
        if let Some(taken_before) = filters.taken_before {
            self.insert("takenBefore", json!(iso_date(taken_before)));
        }
        if let Some(imported_after) = filters.imported_after {
            self.insert("createdAfter", json!(iso_date(imported_after)));
            self.insert("order", json!("asc"));
        }
    }

    /// Records the next page number the server reported.
    ///
    /// The previous cursor sits two below it: the server reports the page
    /// after the one just shown, so the page before the one just shown is
    /// `next - 2`. Page 2 has nothing before it.
    pub fn update_pagination(&mut self, next_page: Option<u32>) {
        self.next_page = next_page;
        self.previous_page = next_page.filter(|&page| page > 2).map(|page| page - 2);
    }

    /// Points the body at the previous page. Check [`Self::no_previous_page`] first:
    /// without a previous cursor the page becomes `null`.
    pub fn to_previous(&mut self) {
        self.insert("page", json!(self.previous_page));
    }

    /// Points the body at the next page.
    pub fn to_next(&mut self) {
        self.insert("page", json!(self.next_page));
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.body.insert(key.to_string(), value);
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.body == other.body
    }
}

impl Eq for Query {}

impl Hash for Query {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        Value::Object(self.body.clone()).to_string().hash(state);
    }
}

fn iso_date(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
