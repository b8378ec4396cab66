use crate::command::GpuQuery;
use crate::error::ScrapeError;
use crate::parser::{self, RawRow};
use std::time::Instant;
use tracing::{debug, error};

/// Result of one collect + parse pass.
///
/// Rendering accepts both variants; a failure renders as zero devices.
#[derive(Debug)]
pub enum ScrapeOutcome {
    Devices(Vec<RawRow>),
    Failed(ScrapeError),
}

impl ScrapeOutcome {
    /// Parsed rows, empty on failure.
    pub fn rows(&self) -> &[RawRow] {
        match self {
            ScrapeOutcome::Devices(rows) => rows,
            ScrapeOutcome::Failed(_) => &[],
        }
    }

    pub fn device_count(&self) -> usize {
        self.rows().len()
    }

    pub fn error(&self) -> Option<&ScrapeError> {
        match self {
            ScrapeOutcome::Devices(_) => None,
            ScrapeOutcome::Failed(e) => Some(e),
        }
    }
}

impl From<Result<Vec<RawRow>, ScrapeError>> for ScrapeOutcome {
    fn from(result: Result<Vec<RawRow>, ScrapeError>) -> Self {
        match result {
            Ok(rows) => ScrapeOutcome::Devices(rows),
            Err(e) => ScrapeOutcome::Failed(e),
        }
    }
}

/// Run the query and parse its output. Never fails: errors are logged and
/// carried in [`ScrapeOutcome::Failed`].
pub async fn scrape(query: &dyn GpuQuery) -> ScrapeOutcome {
    let started = Instant::now();
    let outcome: ScrapeOutcome = match query.query().await {
        Ok(raw) => parser::parse(&raw).into(),
        Err(e) => ScrapeOutcome::Failed(e),
    };

    match outcome.error() {
        None => debug!(
            devices = outcome.device_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Scrape complete"
        ),
        Some(e) => error!(
            kind = e.kind(),
            error = %e,
            "GPU scrape failed, reporting zero devices"
        ),
    }
    outcome
}
