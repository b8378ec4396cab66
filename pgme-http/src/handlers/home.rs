use crate::server::AppState;
use axum::extract::State;
use axum::response::Html;
use pgme_core::BuildInfo;
use pgme_core::metric::{self, MetricField};

pub const PAGE_TITLE: &str = "Prometheus nVidia GPU Metrics Exporter";

/// `GET /` — exposed metric names and build metadata.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.collector.fields(), &state.build))
}

pub fn render_page(fields: &[MetricField], build: &BuildInfo) -> String {
    let mut page = String::with_capacity(2048);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    page.push_str(PAGE_TITLE);
    page.push_str("</title>\n</head>\n<body>\n<h1>");
    page.push_str(PAGE_TITLE);
    page.push_str("</h1>\n<p><a href=\"/metrics/\">Metrics</a></p>\n<h2>Metrics</h2>\n<ul>\n");
    for name in metric::exposed_metric_names(fields) {
        page.push_str("<li>");
        page.push_str(name);
        page.push_str("</li>\n");
    }
    page.push_str("</ul>\n<h2>Version</h2>\n<ul>\n");
    for (label, value) in build.entries() {
        page.push_str("<li>");
        page.push_str(label);
        page.push_str(": ");
        push_escaped(&mut page, value);
        page.push_str("</li>\n");
    }
    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
