use crate::core::error::QueryError;
use crate::core::logger::targets;
use crate::core::response::{json_error, json_success};
use crate::core::state::AppState;
use crate::features::catalog::service::home_service::HomeService;
use crate::features::catalog::service::vn_detail_service::VnDetailService;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use tracing::error;

pub struct VnController;

impl VnController {
    // GET /vns
    pub async fn list(State(state): State<AppState>) -> Response {
        match HomeService::load(&state.db, state.config.query_timeout()).await {
            Ok(listing) => json_success(listing),
            Err(e) => Self::failure("list", e),
        }
    }

    // GET /vns/{vn_id}
    pub async fn show(State(state): State<AppState>, Path(vn_id): Path<String>) -> Response {
        match VnDetailService::load(&state.db, &vn_id, state.config.query_timeout()).await {
            Ok(Some(detail)) => json_success(detail),
            Ok(None) => json_error(
                StatusCode::NOT_FOUND,
                format!("Visual novel not found: {vn_id}"),
            ),
            Err(e) => Self::failure("show", e),
        }
    }

    fn failure(action: &'static str, e: QueryError) -> Response {
        error!(target: targets::CATALOG, action, error = %e, "Catalog query failed");
        json_error(e.status(), e.to_string())
    }
}
