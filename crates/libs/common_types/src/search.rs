use crate::AssetItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SearchAlbumPage {
    pub total: u64,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchAssetPage {
    pub total: u64,
    pub count: u64,
    pub items: Vec<AssetItem>,
    /// The server sends the next page number as a string, or null on the last page.
    #[serde(default)]
    pub next_page: Option<String>,
}

/// Response of `POST /api/search/smart` and `POST /api/search/metadata`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SearchResponse {
    pub albums: SearchAlbumPage,
    pub assets: SearchAssetPage,
}

impl SearchResponse {
    /// Next page as an integer. Anything unparsable counts as "no next page".
    #[must_use]
    pub fn next_page_number(&self) -> Option<u32> {
        self.assets
            .next_page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_next(next: Option<&str>) -> SearchResponse {
        SearchResponse {
            assets: SearchAssetPage {
                next_page: next.map(str::to_string),
                ..SearchAssetPage::default()
            },
            ..SearchResponse::default()
        }
    }

    #[test]
    fn next_page_parses_integer_strings() {
        assert_eq!(with_next(Some("3")).next_page_number(), Some(3));
        assert_eq!(with_next(Some("next")).next_page_number(), None);
        assert_eq!(with_next(None).next_page_number(), None);
    }
}
