use crate::core::logger::targets;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{info, warn};

pub async fn request_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(target: targets::REQUEST, %method, path = %path, status = status.as_u16(), elapsed_ms, "Request failed");
    } else {
        info!(target: targets::REQUEST, %method, path = %path, status = status.as_u16(), elapsed_ms, "Request served");
    }

    response
}
