/// One column of the `nvidia-smi --query-gpu` output and the series it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricField {
    /// Key passed to `--query-gpu`.
    pub query: &'static str,
    /// Exposition metric name.
    pub name: &'static str,
}

impl MetricField {
    pub const fn new(query: &'static str, name: &'static str) -> Self {
        Self { query, name }
    }
}

/// Identity columns that precede every metric column in a row.
pub const IDENTITY_FIELDS: [&str; 2] = ["name", "index"];

/// Format flags: comma separated, no header, no units.
pub const FORMAT_ARGUMENT: &str = "--format=csv,noheader,nounits";

/// Name of the per-scrape device count series.
pub const DEVICE_COUNT_METRIC: &str = "gpu_count";

/// Ordered column table. The query argument and the mapper both read it,
/// so position `i` in a row always carries `GPU_METRICS[i]`.
pub const GPU_METRICS: &[MetricField] = &[
    // power
    MetricField::new("power.draw", "gpu_power_draw"),
    MetricField::new("power.limit", "gpu_power_limit"),
    // clocks
    MetricField::new("clocks.gr", "gpu_clock_shader_current"),
    MetricField::new("clocks.max.gr", "gpu_clock_shader_maximum"),
    MetricField::new("clocks.sm", "gpu_clock_streaming_multiprocessor_current"),
    MetricField::new("clocks.max.sm", "gpu_clock_streaming_multiprocessor_maximum"),
    MetricField::new("clocks.mem", "gpu_clock_memory_current"),
    MetricField::new("clocks.max.mem", "gpu_clock_memory_maximum"),
    // temperature
    MetricField::new("temperature.gpu", "gpu_temperature_processor"),
    MetricField::new("temperature.memory", "gpu_temperature_memory"),
    // utilization
    MetricField::new("utilization.gpu", "gpu_utilization_processor"),
    MetricField::new("utilization.memory", "gpu_utilization_memory"),
    MetricField::new("fan.speed", "gpu_utilization_fan"),
    // memory
    MetricField::new("memory.free", "gpu_memory_free"),
    MetricField::new("memory.used", "gpu_memory_used"),
    MetricField::new("memory.total", "gpu_memory_total"),
];

/// Build the `--query-gpu=name,index,...` argument for a field table.
pub fn query_argument(fields: &[MetricField]) -> String {
    let mut arg = String::from("--query-gpu=");
    arg.push_str(&IDENTITY_FIELDS.join(","));
    for field in fields {
        arg.push(',');
        arg.push_str(field.query);
    }
    arg
}

/// Every series name a scrape can emit, in output order.
pub fn exposed_metric_names(fields: &[MetricField]) -> Vec<&'static str> {
    fields
        .iter()
        .map(|f| f.name)
        .chain(std::iter::once(DEVICE_COUNT_METRIC))
        .collect()
}
