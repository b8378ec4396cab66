use pgme_collector::mapper::{self, Sample};
use pgme_collector::pipeline::ScrapeOutcome;
use pgme_core::metric::{DEVICE_COUNT_METRIC, MetricField};

/// Content type of the Prometheus text format, version 0.0.4.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render bare exposition lines: one per sample, then the device count.
///
/// No `# HELP` / `# TYPE` lines are written.
pub fn render(samples: &[Sample<'_>], device_count: usize) -> String {
    let mut out = String::with_capacity(samples.len() * 64 + 16);
    for sample in samples {
        out.push_str(sample.metric);
        out.push_str("{gpu=\"");
        push_label_value(&mut out, &sample.device);
        out.push_str("\"} ");
        out.push_str(sample.value);
        out.push('\n');
    }

    let mut buf = itoa::Buffer::new();
    out.push_str(DEVICE_COUNT_METRIC);
    out.push_str("{} ");
    out.push_str(buf.format(device_count));
    out.push('\n');
    out
}

/// Render a scrape outcome. `Failed` renders as zero devices.
pub fn render_outcome(outcome: &ScrapeOutcome, fields: &[MetricField]) -> String {
    let rows = outcome.rows();
    let samples = mapper::map_rows(rows, fields);
    render(&samples, rows.len())
}

/// Escape `\`, `"` and newlines inside a label value.
fn push_label_value(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
}
