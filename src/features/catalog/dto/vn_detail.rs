use crate::features::catalog::utility::extlinks::ExternalLink;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VnDetail {
    pub id: String,
    pub title: String,
    pub title_ja: Option<String>,
    pub display_title: String,
    pub rating: Option<f64>,
    pub votecount: Option<i32>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Vec<Tag>,
    pub screenshots: Vec<Screenshot>,
    pub characters: Vec<Character>,
    pub staff: Vec<StaffMember>,
    pub links: Vec<ExternalLink>,
    pub release_links: Vec<LinkGroup>,
    pub publisher_links: Vec<LinkGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub name_ja: Option<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    pub id: i32,
    pub staff_id: String,
    pub name: String,
    pub role: String,
    pub note: Option<String>,
    pub links: Vec<ExternalLink>,
}

/// Links belonging to one release, publisher or staff entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkGroup {
    pub owner_id: String,
    pub owner_name: Option<String>,
    pub links: Vec<ExternalLink>,
}
