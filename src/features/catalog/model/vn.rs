use sea_orm::FromQueryResult;

/// Row of `public.search_vns`, the denormalized listing table.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct VnCardRow {
    pub id: String,
    pub title: String,
    pub title_ja: Option<String>,
    pub rating: Option<f64>,
    pub votecount: Option<i32>,
    pub cover_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct CountRow {
    pub total: i64,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct VnRow {
    pub id: String,
    pub title: Option<String>,
    pub title_ja: Option<String>,
    pub rating: Option<f64>,
    pub votecount: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct TagRow {
    pub id: String,
    pub name: String,
    pub rating: f64,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct ScreenshotRow {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct CharacterRow {
    pub id: String,
    pub name: Option<String>,
    pub role: String,
    pub image: Option<String>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct StaffRow {
    pub aid: i32,
    pub staff_id: String,
    pub name: String,
    pub role: String,
    pub note: Option<String>,
}
