use axum::http::StatusCode;
use sea_orm::DbErr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("query `{query}` timed out after {after:?}")]
    Timeout { query: &'static str, after: Duration },
}

impl QueryError {
    pub fn status(&self) -> StatusCode {
        match self {
            QueryError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            QueryError::Timeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_are_internal() {
        let e = QueryError::from(DbErr::Custom("connection reset".into()));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn timeouts_are_unavailable() {
        let e = QueryError::Timeout {
            query: "tags",
            after: Duration::from_secs(5),
        };
        assert_eq!(e.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(e.to_string(), "query `tags` timed out after 5s");
    }
}
