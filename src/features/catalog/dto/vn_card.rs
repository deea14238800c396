use crate::features::catalog::model::vn::VnCardRow;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VnCard {
    pub id: String,
    pub title: String,
    pub title_ja: Option<String>,
    pub display_title: String,
    pub rating: Option<f64>,
    pub votecount: Option<i32>,
    pub cover_url: Option<String>,
}

impl From<VnCardRow> for VnCard {
    fn from(row: VnCardRow) -> Self {
        let display_title = row.title_ja.clone().unwrap_or_else(|| row.title.clone());
        Self {
            id: row.id,
            title: row.title,
            title_ja: row.title_ja,
            display_title,
            rating: row.rating,
            votecount: row.votecount,
            cover_url: row.cover_url,
        }
    }
}

/// Home page listing: the fixed top-rated slice plus the catalog size.
#[derive(Debug, Serialize)]
pub struct VnListing {
    pub items: Vec<VnCard>,
    pub shown: usize,
    pub total: i64,
}

impl VnListing {
    pub fn new(items: Vec<VnCard>, total: i64) -> Self {
        Self {
            shown: items.len(),
            items,
            total,
        }
    }
}
