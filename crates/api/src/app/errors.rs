use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shelf_store::StoreError;

/// Generic operational-failure response: log the details server-side,
/// hand the client the uniform body.
pub fn internal_error(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

/// 404 body shared by update and delete when the target id does not exist.
pub fn product_not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "error": "Product not found" })),
    )
        .into_response()
}

/// Validation-failure response under the `error` key (no logging, no store
/// access has happened yet).
pub fn validation_error(message: &'static str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "error": message })),
    )
        .into_response()
}
