use axum::http::StatusCode;

/// `GET /healthz` — liveness only, empty body.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
