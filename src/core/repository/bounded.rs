use crate::core::error::QueryError;
use sea_orm::DbErr;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Runs one query future under `limit`.
///
/// The pooled connection the query holds is returned to the pool when the
/// future is dropped, so a timed-out query releases it as well.
pub async fn bounded<T, F>(query: &'static str, limit: Duration, fut: F) -> Result<T, QueryError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match timeout(limit, fut).await {
        Ok(result) => result.map_err(QueryError::from),
        Err(_) => Err(QueryError::Timeout {
            query,
            after: limit,
        }),
    }
}
