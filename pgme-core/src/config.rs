use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level exporter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// GPU query command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    #[serde(default = "default_command")]
    pub command: String,
    /// Upper bound on one `nvidia-smi` run; the child is killed past it.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 9101 }
fn default_command() -> String { "nvidia-smi".into() }
fn default_timeout() -> u64 { 10_000 }

// ── Impls ─────────────────────────────────────────────────────

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            timeout_ms: default_timeout(),
        }
    }
}

impl CollectorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl ExporterConfig {
    /// Layered sources: defaults, optional YAML file, `PGME_*` env, then `PORT`.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ExporterConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("PGME_").split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
    }

    /// Load configuration from an optional YAML file + env overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config: ExporterConfig = Self::figment(path).extract()?;
        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
