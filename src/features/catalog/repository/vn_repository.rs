use crate::features::catalog::model::vn::{
    CharacterRow, CountRow, ScreenshotRow, StaffRow, TagRow, VnCardRow, VnRow,
};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, Statement};

const TOP_RATED_SQL: &str = r#"
    SELECT id::text AS id, title, title_ja, rating::float8 AS rating,
           votecount::int4 AS votecount, cover_url
    FROM public.search_vns
    WHERE rating IS NOT NULL
    ORDER BY rating DESC NULLS LAST
    LIMIT 100
"#;

const COUNT_SQL: &str = "SELECT COUNT(*) AS total FROM public.search_vns";

const FIND_SQL: &str = r#"
    SELECT
        v.id::text AS id,
        v.c_rating::float8 / 10 AS rating,
        v.c_votecount AS votecount,
        v.description,
        v.c_image::text AS image,
        (SELECT t.title FROM vndb.vn_titles t WHERE t.id = v.id AND t.lang = v.olang LIMIT 1) AS title,
        (SELECT t.title FROM vndb.vn_titles t WHERE t.id = v.id AND t.lang = 'ja' LIMIT 1) AS title_ja
    FROM vndb.vn v
    WHERE v.id = $1::vndbid
"#;

const TAGS_SQL: &str = r#"
    SELECT t.id::text AS id, t.name, AVG(tv.vote)::float8 AS rating
    FROM vndb.tags t
    JOIN vndb.tags_vn tv ON t.id = tv.tag
    WHERE tv.vid = $1::vndbid AND tv.vote > 0 AND NOT tv.ignore
    GROUP BY t.id, t.name
    ORDER BY rating DESC, t.name
    LIMIT 20
"#;

const SCREENSHOTS_SQL: &str = r#"
    SELECT i.id::text AS id
    FROM vndb.images i
    JOIN vndb.vn_screenshots vs ON i.id = vs.scr
    WHERE vs.id = $1::vndbid
    ORDER BY i.id
    LIMIT 12
"#;

const CHARACTERS_SQL: &str = r#"
    SELECT
        c.id::text AS id,
        COALESCE(cn.name, (SELECT n.name FROM vndb.chars_names n WHERE n.id = c.id LIMIT 1)) AS name,
        cv.role::text AS role,
        c.image::text AS image,
        c.gender::text AS gender
    FROM vndb.chars_vns cv
    JOIN vndb.chars c ON cv.id = c.id
    LEFT JOIN vndb.chars_names cn ON c.id = cn.id AND cn.lang = 'ja'
    WHERE cv.vid = $1::vndbid
    ORDER BY
        CASE cv.role::text
            WHEN 'main' THEN 1
            WHEN 'primary' THEN 2
            WHEN 'side' THEN 3
            ELSE 4
        END,
        c.id
    LIMIT 24
"#;

const STAFF_SQL: &str = r#"
    SELECT vs.aid, sa.id::text AS staff_id, sa.name, vs.role::text AS role, vs.note
    FROM vndb.vn_staff vs
    JOIN vndb.staff_alias sa ON vs.aid = sa.aid
    WHERE vs.id = $1::vndbid
    ORDER BY
        CASE vs.role::text
            WHEN 'scenario' THEN 1
            WHEN 'chardesign' THEN 2
            WHEN 'art' THEN 3
            WHEN 'director' THEN 4
            WHEN 'music' THEN 5
            WHEN 'songs' THEN 6
            ELSE 7
        END,
        sa.name
    LIMIT 30
"#;

pub struct VnRepository;

impl VnRepository {
    pub async fn top_rated<C: ConnectionTrait>(db: &C) -> Result<Vec<VnCardRow>, DbErr> {
        VnCardRow::find_by_statement(Statement::from_string(DbBackend::Postgres, TOP_RATED_SQL))
            .all(db)
            .await
    }

    pub async fn count_all<C: ConnectionTrait>(db: &C) -> Result<i64, DbErr> {
        let row = CountRow::find_by_statement(Statement::from_string(DbBackend::Postgres, COUNT_SQL))
            .one(db)
            .await?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }

    pub async fn find<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<VnRow>, DbErr> {
        VnRow::find_by_statement(by_vn(FIND_SQL, id)).one(db).await
    }

    pub async fn tags<C: ConnectionTrait>(db: &C, id: &str) -> Result<Vec<TagRow>, DbErr> {
        TagRow::find_by_statement(by_vn(TAGS_SQL, id)).all(db).await
    }

    pub async fn screenshots<C: ConnectionTrait>(
        db: &C,
        id: &str,
    ) -> Result<Vec<ScreenshotRow>, DbErr> {
        ScreenshotRow::find_by_statement(by_vn(SCREENSHOTS_SQL, id))
            .all(db)
            .await
    }

    pub async fn characters<C: ConnectionTrait>(
        db: &C,
        id: &str,
    ) -> Result<Vec<CharacterRow>, DbErr> {
        CharacterRow::find_by_statement(by_vn(CHARACTERS_SQL, id))
            .all(db)
            .await
    }

    pub async fn staff<C: ConnectionTrait>(db: &C, id: &str) -> Result<Vec<StaffRow>, DbErr> {
        StaffRow::find_by_statement(by_vn(STAFF_SQL, id)).all(db).await
    }
}

pub(super) fn by_vn(sql: &str, id: &str) -> Statement {
    Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()])
}
