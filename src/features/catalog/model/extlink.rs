use sea_orm::FromQueryResult;

/// One `extlinks` row joined to the entity that owns it.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct ExtlinkRow {
    pub owner_id: String,
    pub owner_name: Option<String>,
    pub site: String,
    pub value: String,
}
