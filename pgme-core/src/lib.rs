pub mod build_info;
pub mod config;
pub mod metric;

pub use build_info::BuildInfo;
pub use config::ExporterConfig;
pub use metric::{GPU_METRICS, MetricField};
