use crate::core::state::AppState;
use crate::features::catalog::controller::vn_controller::VnController;
use axum::Router;
use axum::routing::get;

pub fn vn_route() -> (&'static str, Router<AppState>) {
    (
        "/api/v1/vns",
        Router::new()
            .route("/", get(VnController::list))
            .route("/{vn_id}", get(VnController::show)),
    )
}
