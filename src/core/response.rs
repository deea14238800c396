use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

pub fn json_success<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": data,
        })),
    )
        .into_response()
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_kept() {
        assert_eq!(json_success(["a"]).status(), StatusCode::OK);
        assert_eq!(
            json_error(StatusCode::NOT_FOUND, "missing").status(),
            StatusCode::NOT_FOUND
        );
    }
}
