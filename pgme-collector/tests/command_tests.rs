//! Subprocess tests for the nvidia-smi runner.
//!
//! Each test writes a tiny shell script standing in for the vendor tool and
//! points `NvidiaSmi` at it.
#![cfg(unix)]

use pgme_collector::pipeline::scrape;
use pgme_collector::{GpuQuery, NvidiaSmi, ScrapeError};
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

// ── Helper ────────────────────────────────────────────────────

fn fake_smi(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("nvidia-smi");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn runner(path: &PathBuf, timeout: Duration) -> NvidiaSmi {
    NvidiaSmi::new(path.to_string_lossy().into_owned(), timeout)
}

// ── Success ───────────────────────────────────────────────────

#[tokio::test]
async fn stdout_is_returned_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = fake_smi(&dir, "printf 'NVIDIA H100, 0, 350.2\\n'");
    let out = runner(&path, Duration::from_secs(5)).query().await.unwrap();
    assert_eq!(out, b"NVIDIA H100, 0, 350.2\n");
}

#[tokio::test]
async fn script_receives_query_and_format_arguments() {
    let dir = TempDir::new().unwrap();
    let path = fake_smi(&dir, "printf '%s\\n' \"$@\"");
    let out = runner(&path, Duration::from_secs(5)).query().await.unwrap();
    let text = String::from_utf8(out).unwrap();
    let args: Vec<&str> = text.lines().collect();
    assert_eq!(args.len(), 2);
    assert!(args[0].starts_with("--query-gpu=name,index,"));
    assert_eq!(args[1], "--format=csv,noheader,nounits");
}

#[tokio::test]
async fn scrape_through_real_process_parses_rows() {
    let dir = TempDir::new().unwrap();
    let path = fake_smi(
        &dir,
        "printf 'A, 0, 100.5, 250\\nB, 1, N/A, 300\\n'",
    );
    let outcome = scrape(&runner(&path, Duration::from_secs(5))).await;
    assert!(outcome.error().is_none());
    assert_eq!(outcome.device_count(), 2);
    assert_eq!(outcome.rows()[1].values(), ["N/A", "300"]);
}

// ── Failure ───────────────────────────────────────────────────

#[tokio::test]
async fn non_zero_exit_reports_status_and_stderr() {
    let dir = TempDir::new().unwrap();
    let path = fake_smi(
        &dir,
        "echo 'NVIDIA-SMI has failed because it could not communicate' >&2\nexit 9",
    );
    let err = runner(&path, Duration::from_secs(5)).query().await.unwrap_err();
    match err {
        ScrapeError::Exit { status, stderr, .. } => {
            assert_eq!(status.code(), Some(9));
            assert!(stderr.contains("could not communicate"));
        }
        other => panic!("expected Exit, got {other:?}"),
    }
}

#[tokio::test]
async fn hung_command_is_cut_off_by_timeout() {
    let dir = TempDir::new().unwrap();
    let path = fake_smi(&dir, "exec sleep 30");
    let started = std::time::Instant::now();
    let err = runner(&path, Duration::from_millis(200)).query().await.unwrap_err();
    assert!(matches!(err, ScrapeError::Timeout { timeout_ms: 200, .. }), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn failed_exit_scrapes_as_zero_devices() {
    let dir = TempDir::new().unwrap();
    let path = fake_smi(&dir, "echo 'GPU 0, 0, 1'\nexit 1");
    let outcome = scrape(&runner(&path, Duration::from_secs(5))).await;
    assert_eq!(outcome.device_count(), 0);
    assert_eq!(outcome.error().map(ScrapeError::kind), Some("exit"));
}
