use crate::core::state::AppState;
use crate::features::catalog::routes::vn_route;
use crate::middleware::request_log::request_log;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};

pub struct Routes;

impl Routes {
    pub fn generate(state: AppState) -> Router {
        let (prefix, catalog) = vn_route();

        Router::new()
            .route("/health", get(health))
            .nest(prefix, catalog)
            .layer(middleware::from_fn(request_log))
            .with_state(state)
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
