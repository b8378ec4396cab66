use crate::server::AppState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use pgme_collector::pipeline;
use pgme_observability::exposition::{self, CONTENT_TYPE};

/// `GET /metrics/` — run one scrape and return exposition text.
///
/// Always 200; collection failures show up as `gpu_count{} 0` and in the log.
pub async fn scrape(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = pipeline::scrape(state.collector.as_ref()).await;
    let body = exposition::render_outcome(&outcome, state.collector.fields());
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], body)
}
