use crate::core::error::QueryError;
use crate::core::logger::targets;
use crate::core::repository::bounded::bounded;
use crate::features::catalog::dto::vn_card::{VnCard, VnListing};
use crate::features::catalog::repository::vn_repository::VnRepository;
use sea_orm::ConnectionTrait;
use std::time::Duration;
use tracing::debug;

pub struct HomeService;

impl HomeService {
    pub async fn load<C: ConnectionTrait>(db: &C, limit: Duration) -> Result<VnListing, QueryError> {
        let (rows, total) = tokio::try_join!(
            bounded("top_rated", limit, VnRepository::top_rated(db)),
            bounded("count_all", limit, VnRepository::count_all(db)),
        )?;

        debug!(target: targets::CATALOG, shown = rows.len(), total, "Home listing loaded");

        Ok(VnListing::new(rows.into_iter().map(VnCard::from).collect(), total))
    }
}
