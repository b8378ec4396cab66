use crate::error::ScrapeError;
use async_trait::async_trait;
use pgme_core::config::CollectorConfig;
use pgme_core::metric::{self, FORMAT_ARGUMENT, GPU_METRICS, MetricField};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Source of raw `nvidia-smi`-shaped output.
///
/// `fields()` is the column table the output is laid out by; the mapper reads
/// the same table so names can never drift from positions.
#[async_trait]
pub trait GpuQuery: Send + Sync {
    /// Run the query once and return its stdout.
    async fn query(&self) -> Result<Vec<u8>, ScrapeError>;

    fn fields(&self) -> &'static [MetricField] {
        GPU_METRICS
    }
}

/// Runs the vendor tool as a fresh subprocess per scrape.
#[derive(Debug, Clone)]
pub struct NvidiaSmi {
    command: String,
    args: [String; 2],
    timeout: Duration,
}

impl NvidiaSmi {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args: [metric::query_argument(GPU_METRICS), FORMAT_ARGUMENT.to_string()],
            timeout,
        }
    }

    pub fn from_config(config: &CollectorConfig) -> Self {
        Self::new(config.command.clone(), config.timeout())
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl GpuQuery for NvidiaSmi {
    async fn query(&self) -> Result<Vec<u8>, ScrapeError> {
        debug!(command = %self.command, "Querying GPUs");

        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            // Dropping the output future on timeout must take the child with it.
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(ScrapeError::Spawn {
                    command: self.command.clone(),
                    source,
                });
            }
            Err(_) => {
                return Err(ScrapeError::Timeout {
                    command: self.command.clone(),
                    timeout_ms: self.timeout.as_millis(),
                });
            }
        };

        if !output.status.success() {
            return Err(ScrapeError::Exit {
                command: self.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
