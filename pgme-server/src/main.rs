// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  pgme — Prometheus GPU Metrics Exporter
//
//  Scrape:  nvidia-smi → csv rows → labelled samples → exposition text
//  HTTP:    axum on tokio, one subprocess per scrape, no shared state
//  Config:  defaults / YAML / PGME_* env / PORT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use clap::Parser;
use pgme_collector::{GpuQuery, NvidiaSmi, pipeline};
use pgme_core::{BuildInfo, ExporterConfig};
use pgme_http::server::{self, AppState};
use pgme_observability::exposition;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pgme", version, about = "Prometheus exporter for nvidia-smi GPU metrics")]
struct Cli {
    /// Path to configuration file (read only if present)
    #[arg(short, long, default_value = "/etc/pgme/pgme.yaml")]
    config: PathBuf,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Run a single scrape, print it to stdout and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ──
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    let build = BuildInfo::current();
    info!(
        release = build.release,
        commit = build.commit,
        build_time = build.build_time,
        "pgme starting"
    );

    // ── Config ──
    let config = if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
        ExporterConfig::load(Some(&cli.config))?
    } else {
        info!("No config file found, using defaults and environment");
        ExporterConfig::load(None)?
    };

    let smi = NvidiaSmi::from_config(&config.collector);
    info!(
        command = smi.command(),
        args = ?smi.args(),
        timeout_ms = config.collector.timeout_ms,
        "GPU collector ready"
    );
    let collector: Arc<dyn GpuQuery> = Arc::new(smi);

    if cli.once {
        let outcome = pipeline::scrape(collector.as_ref()).await;
        print!("{}", exposition::render_outcome(&outcome, collector.fields()));
        return Ok(());
    }

    info!(
        port = config.server.port,
        "Listening port (override with PORT, default 9101)"
    );

    let state = AppState::new(collector, build);
    server::serve(&config.listen_addr(), state, server::shutdown_signal()).await?;

    info!("Done");
    Ok(())
}
