use crate::core::error::QueryError;
use crate::core::logger::targets;
use crate::core::repository::bounded::bounded;
use crate::features::catalog::dto::vn_detail::{Character, Screenshot, StaffMember, Tag, VnDetail};
use crate::features::catalog::model::extlink::ExtlinkRow;
use crate::features::catalog::model::vn::{CharacterRow, ScreenshotRow, StaffRow, TagRow, VnRow};
use crate::features::catalog::repository::extlink_repository::ExtlinkRepository;
use crate::features::catalog::repository::vn_repository::VnRepository;
use crate::features::catalog::utility::description::clean_description;
use crate::features::catalog::utility::extlinks::ExternalLink;
use crate::features::catalog::utility::link_groups::group_links;
use crate::features::catalog::utility::media::{MediaCategory, resolve_media_url};
use crate::features::catalog::utility::tag_translations::translate_tag;
use sea_orm::ConnectionTrait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Everything the detail page needs, as fetched.
struct DetailRows {
    vn: VnRow,
    tags: Vec<TagRow>,
    screenshots: Vec<ScreenshotRow>,
    characters: Vec<CharacterRow>,
    staff: Vec<StaffRow>,
    vn_links: Vec<ExtlinkRow>,
    release_links: Vec<ExtlinkRow>,
    publisher_links: Vec<ExtlinkRow>,
    staff_links: Vec<ExtlinkRow>,
}

pub struct VnDetailService;

impl VnDetailService {
    /// Loads one title. `Ok(None)` means the id is unknown.
    pub async fn load<C: ConnectionTrait>(
        db: &C,
        id: &str,
        limit: Duration,
    ) -> Result<Option<VnDetail>, QueryError> {
        let Some(vn) = bounded("vn", limit, VnRepository::find(db, id)).await? else {
            return Ok(None);
        };

        // Sub-resources are independent of each other; run them side by side.
        let (
            tags,
            screenshots,
            characters,
            staff,
            vn_links,
            release_links,
            publisher_links,
            staff_links,
        ) = tokio::try_join!(
            bounded("tags", limit, VnRepository::tags(db, id)),
            bounded("screenshots", limit, VnRepository::screenshots(db, id)),
            bounded("characters", limit, VnRepository::characters(db, id)),
            bounded("staff", limit, VnRepository::staff(db, id)),
            bounded("vn_links", limit, ExtlinkRepository::for_vn(db, id)),
            bounded("release_links", limit, ExtlinkRepository::for_releases(db, id)),
            bounded("publisher_links", limit, ExtlinkRepository::for_publishers(db, id)),
            bounded("staff_links", limit, ExtlinkRepository::for_staff(db, id)),
        )?;

        debug!(
            target: targets::CATALOG,
            vn_id = id,
            tags = tags.len(),
            screenshots = screenshots.len(),
            characters = characters.len(),
            staff = staff.len(),
            "Detail rows loaded"
        );

        Ok(Some(assemble(DetailRows {
            vn,
            tags,
            screenshots,
            characters,
            staff,
            vn_links,
            release_links,
            publisher_links,
            staff_links,
        })))
    }
}

fn assemble(rows: DetailRows) -> VnDetail {
    let DetailRows {
        vn,
        tags,
        screenshots,
        characters,
        staff,
        vn_links,
        release_links,
        publisher_links,
        staff_links,
    } = rows;

    let title = vn.title.unwrap_or_else(|| vn.id.clone());
    let display_title = vn.title_ja.clone().unwrap_or_else(|| title.clone());

    let links_by_staff: HashMap<String, Vec<ExternalLink>> = group_links(staff_links)
        .into_iter()
        .map(|group| (group.owner_id, group.links))
        .collect();

    VnDetail {
        cover_url: vn
            .image
            .as_deref()
            .map(|image| resolve_media_url(image, MediaCategory::Cover)),
        description: vn.description.as_deref().map(clean_description),
        tags: tags.into_iter().map(tag).collect(),
        screenshots: screenshots
            .into_iter()
            .map(|s| Screenshot {
                url: resolve_media_url(&s.id, MediaCategory::Screenshot),
            })
            .collect(),
        characters: characters.into_iter().map(character).collect(),
        staff: attach_staff_links(staff, &links_by_staff),
        links: vn_links
            .into_iter()
            .map(|row| ExternalLink::new(row.site, row.value))
            .collect(),
        release_links: group_links(release_links),
        publisher_links: group_links(publisher_links),
        id: vn.id,
        title,
        title_ja: vn.title_ja,
        display_title,
        rating: vn.rating,
        votecount: vn.votecount,
    }
}

fn tag(row: TagRow) -> Tag {
    Tag {
        name_ja: translate_tag(&row.name).map(str::to_string),
        id: row.id,
        name: row.name,
        rating: row.rating,
    }
}

fn character(row: CharacterRow) -> Character {
    Character {
        name: row.name.unwrap_or_else(|| row.id.clone()),
        image_url: row
            .image
            .as_deref()
            .map(|image| resolve_media_url(image, MediaCategory::Character)),
        id: row.id,
        role: row.role,
        gender: row.gender,
    }
}

// One person can hold several credits; each credit row gets the same links.
fn attach_staff_links(
    staff: Vec<StaffRow>,
    links_by_staff: &HashMap<String, Vec<ExternalLink>>,
) -> Vec<StaffMember> {
    staff
        .into_iter()
        .map(|row| StaffMember {
            links: links_by_staff
                .get(&row.staff_id)
                .cloned()
                .unwrap_or_default(),
            id: row.aid,
            staff_id: row.staff_id,
            name: row.name,
            role: row.role,
            note: row.note.filter(|note| !note.is_empty()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn link(owner_id: &str, owner_name: Option<&str>, site: &str, value: &str) -> ExtlinkRow {
        ExtlinkRow {
            owner_id: owner_id.to_string(),
            owner_name: owner_name.map(str::to_string),
            site: site.to_string(),
            value: value.to_string(),
        }
    }

    fn vn_row() -> VnRow {
        VnRow {
            id: "v17".to_string(),
            title: Some("Ever17".to_string()),
            title_ja: None,
            rating: Some(8.6),
            votecount: Some(9000),
            description: Some("Set in [url=/v17]LeMU[/url].".to_string()),
            image: Some("cv12345".to_string()),
        }
    }

    fn detail_rows() -> DetailRows {
        DetailRows {
            vn: vn_row(),
            tags: vec![TagRow {
                id: "g7".to_string(),
                name: "Mystery".to_string(),
                rating: 2.5,
            }],
            screenshots: vec![ScreenshotRow {
                id: "sf1203".to_string(),
            }],
            characters: vec![CharacterRow {
                id: "c1".to_string(),
                name: None,
                role: "main".to_string(),
                image: Some("ch99".to_string()),
                gender: Some("f".to_string()),
            }],
            staff: vec![
                StaffRow {
                    aid: 10,
                    staff_id: "s7".to_string(),
                    name: "Uchikoshi".to_string(),
                    role: "scenario".to_string(),
                    note: Some(String::new()),
                },
                StaffRow {
                    aid: 11,
                    staff_id: "s8".to_string(),
                    name: "Takumi".to_string(),
                    role: "music".to_string(),
                    note: Some("OP".to_string()),
                },
            ],
            vn_links: vec![link("v17", None, "wikidata", "1130432")],
            release_links: vec![
                link("r2", Some("Steam"), "steam", "abc"),
                link("r1", Some("Retail"), "getchu", "456"),
            ],
            publisher_links: vec![link("p3", Some("KID"), "website", "http://kid.example/")],
            staff_links: vec![link("s7", Some("Uchikoshi"), "twitter", "@uchikoshi")],
        }
    }

    #[test]
    fn assemble_resolves_media_and_links() {
        let detail = assemble(detail_rows());

        assert_eq!(detail.display_title, "Ever17");
        assert_eq!(
            detail.cover_url.as_deref(),
            Some("https://s2.vndb.org/cv/45/12345.jpg")
        );
        assert_eq!(detail.description.as_deref(), Some("Set in LeMU."));
        assert_eq!(detail.tags[0].name_ja.as_deref(), Some("ミステリー"));
        assert_eq!(detail.screenshots[0].url, "https://s2.vndb.org/sf/03/1203.jpg");
        assert_eq!(detail.characters[0].name, "c1");
        assert_eq!(
            detail.characters[0].image_url.as_deref(),
            Some("https://s2.vndb.org/ch/99/99.jpg")
        );
        assert_eq!(
            detail.links[0].url.as_deref(),
            Some("https://www.wikidata.org/wiki/Q1130432")
        );
    }

    #[test]
    fn assemble_groups_and_attaches_links() {
        let detail = assemble(detail_rows());

        let releases: Vec<&str> = detail
            .release_links
            .iter()
            .map(|g| g.owner_id.as_str())
            .collect();
        assert_eq!(releases, ["r2", "r1"]);
        assert_eq!(detail.release_links[0].links[0].url, None);
        assert_eq!(
            detail.publisher_links[0].links[0].url.as_deref(),
            Some("http://kid.example/")
        );

        assert_eq!(detail.staff[0].note, None);
        assert_eq!(
            detail.staff[0].links[0].url.as_deref(),
            Some("https://x.com/uchikoshi")
        );
        assert!(detail.staff[1].links.is_empty());
        assert_eq!(detail.staff[1].note.as_deref(), Some("OP"));
    }

    #[test]
    fn missing_title_falls_back_to_id() {
        let mut rows = detail_rows();
        rows.vn.title = None;
        rows.vn.image = None;

        let detail = assemble(rows);

        assert_eq!(detail.title, "v17");
        assert_eq!(detail.cover_url, None);
    }

    #[tokio::test]
    async fn unknown_id_stops_after_the_base_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();

        let detail = VnDetailService::load(&db, "v0", Duration::from_secs(1))
            .await
            .expect("query succeeds");

        assert_eq!(detail, None);
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn load_merges_every_sub_query() {
        let empty = Vec::<BTreeMap<&str, Value>>::new;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([
                ("id", Value::from("v17")),
                ("title", Value::from(Some("Ever17".to_string()))),
                ("title_ja", Value::from(Some("エバー17".to_string()))),
                ("rating", Value::from(Some(8.6f64))),
                ("votecount", Value::from(Some(9000i32))),
                ("description", Value::from(Option::<String>::None)),
                ("image", Value::from(Some("cv99".to_string()))),
            ])]])
            .append_query_results([empty()]) // tags
            .append_query_results([empty()]) // screenshots
            .append_query_results([empty()]) // characters
            .append_query_results([empty()]) // staff
            .append_query_results([[BTreeMap::from([
                ("owner_id", Value::from("v17")),
                ("owner_name", Value::from(Option::<String>::None)),
                ("site", Value::from("steam")),
                ("value", Value::from("12345")),
            ])]])
            .append_query_results([empty()]) // release links
            .append_query_results([empty()]) // publisher links
            .append_query_results([empty()]) // staff links
            .into_connection();

        let detail = VnDetailService::load(&db, "v17", Duration::from_secs(1))
            .await
            .expect("query succeeds")
            .expect("title exists");

        assert_eq!(detail.display_title, "エバー17");
        assert_eq!(
            detail.cover_url.as_deref(),
            Some("https://s2.vndb.org/cv/99/99.jpg")
        );
        assert_eq!(
            detail.links[0].url.as_deref(),
            Some("https://store.steampowered.com/app/12345/")
        );
        assert!(detail.release_links.is_empty());
        assert_eq!(db.into_transaction_log().len(), 9);
    }
}
