use crate::features::catalog::model::extlink::ExtlinkRow;
use crate::features::catalog::repository::vn_repository::by_vn;
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult};

const VN_LINKS_SQL: &str = r#"
    SELECT vl.id::text AS owner_id, NULL::text AS owner_name, e.site::text AS site, e.value
    FROM vndb.vn_extlinks vl
    JOIN vndb.extlinks e ON e.id = vl.link
    WHERE vl.id = $1::vndbid
    ORDER BY site, e.value
"#;

const RELEASE_LINKS_SQL: &str = r#"
    SELECT
        r.id::text AS owner_id,
        (SELECT rt.title FROM vndb.releases_titles rt WHERE rt.id = r.id AND rt.lang = r.olang LIMIT 1) AS owner_name,
        e.site::text AS site,
        e.value
    FROM vndb.releases_vn rv
    JOIN vndb.releases r ON r.id = rv.id
    JOIN vndb.releases_extlinks rl ON rl.id = r.id
    JOIN vndb.extlinks e ON e.id = rl.link
    WHERE rv.vid = $1::vndbid
    ORDER BY r.released, r.id, site, e.value
"#;

const PUBLISHER_LINKS_SQL: &str = r#"
    SELECT DISTINCT p.id::text AS owner_id, p.name AS owner_name, e.site::text AS site, e.value AS value
    FROM vndb.releases_vn rv
    JOIN vndb.releases_producers rp ON rp.id = rv.id AND rp.publisher
    JOIN vndb.producers p ON p.id = rp.pid
    JOIN vndb.producers_extlinks pl ON pl.id = p.id
    JOIN vndb.extlinks e ON e.id = pl.link
    WHERE rv.vid = $1::vndbid
    ORDER BY owner_name, owner_id, site, value
"#;

const STAFF_LINKS_SQL: &str = r#"
    SELECT DISTINCT sa.id::text AS owner_id, sa.name AS owner_name, e.site::text AS site, e.value AS value
    FROM vndb.vn_staff vs
    JOIN vndb.staff_alias sa ON sa.aid = vs.aid
    JOIN vndb.staff_extlinks sl ON sl.id = sa.id
    JOIN vndb.extlinks e ON e.id = sl.link
    WHERE vs.id = $1::vndbid
    ORDER BY owner_name, owner_id, site, value
"#;

/// Outbound links from the shared `extlinks` table, per owning entity kind.
pub struct ExtlinkRepository;

impl ExtlinkRepository {
    pub async fn for_vn<C: ConnectionTrait>(db: &C, vn_id: &str) -> Result<Vec<ExtlinkRow>, DbErr> {
        ExtlinkRow::find_by_statement(by_vn(VN_LINKS_SQL, vn_id))
            .all(db)
            .await
    }

    pub async fn for_releases<C: ConnectionTrait>(
        db: &C,
        vn_id: &str,
    ) -> Result<Vec<ExtlinkRow>, DbErr> {
        ExtlinkRow::find_by_statement(by_vn(RELEASE_LINKS_SQL, vn_id))
            .all(db)
            .await
    }

    pub async fn for_publishers<C: ConnectionTrait>(
        db: &C,
        vn_id: &str,
    ) -> Result<Vec<ExtlinkRow>, DbErr> {
        ExtlinkRow::find_by_statement(by_vn(PUBLISHER_LINKS_SQL, vn_id))
            .all(db)
            .await
    }

    pub async fn for_staff<C: ConnectionTrait>(
        db: &C,
        vn_id: &str,
    ) -> Result<Vec<ExtlinkRow>, DbErr> {
        ExtlinkRow::find_by_statement(by_vn(STAFF_LINKS_SQL, vn_id))
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn vn_links_have_no_owner_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([
                ("owner_id", Value::from("v17")),
                ("owner_name", Value::from(Option::<String>::None)),
                ("site", Value::from("wikidata")),
                ("value", Value::from("1130432")),
            ])]])
            .into_connection();

        let rows = ExtlinkRepository::for_vn(&db, "v17").await.expect("query succeeds");

        assert_eq!(
            rows,
            [ExtlinkRow {
                owner_id: "v17".to_string(),
                owner_name: None,
                site: "wikidata".to_string(),
                value: "1130432".to_string(),
            }]
        );
    }
}
