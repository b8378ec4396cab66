use thiserror::Error;

/// Why a scrape produced no device rows.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("{command} did not finish within {timeout_ms}ms")]
    Timeout { command: String, timeout_ms: u128 },

    #[error("malformed query output: {0}")]
    Parse(#[from] csv::Error),

    #[error("malformed query output at line {line}: {reason}")]
    Malformed { line: u64, reason: &'static str },
}

impl ScrapeError {
    /// Short machine-friendly tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Spawn { .. } => "spawn",
            ScrapeError::Exit { .. } => "exit",
            ScrapeError::Timeout { .. } => "timeout",
            ScrapeError::Parse(_) | ScrapeError::Malformed { .. } => "parse",
        }
    }
}
