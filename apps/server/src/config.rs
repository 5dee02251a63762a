use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8088";
const DEFAULT_DB_PATH: &str = "./db/app.db";
const DEFAULT_CLOUD_API_URL: &str = "https://api.collectify.app";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// SQLite file backing the offline cache
    pub db_path: String,
    /// Base URL of the cloud REST backend
    pub cloud_api_url: String,
    /// Per-call deadline for cloud and cache capabilities; unset waits indefinitely
    pub capability_timeout: Option<Duration>,
    /// Upper bound for a whole HTTP request
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty allows any
    pub cors_allow_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr = non_empty("CF_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("CF_LISTEN_ADDR must be a socket address such as 0.0.0.0:8088")?;

        let db_path = non_empty("CF_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let cloud_api_url = non_empty("CF_CLOUD_API_URL")
            .unwrap_or_else(|| DEFAULT_CLOUD_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let capability_timeout = non_empty("CF_CAPABILITY_TIMEOUT_SECS")
            .map(|v| parse_secs("CF_CAPABILITY_TIMEOUT_SECS", &v))
            .transpose()?;

        let request_timeout = non_empty("CF_REQUEST_TIMEOUT_SECS")
            .map(|v| parse_secs("CF_REQUEST_TIMEOUT_SECS", &v))
            .transpose()?
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

        let cors_allow_origins = non_empty("CF_CORS_ALLOW_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            db_path,
            cloud_api_url,
            capability_timeout,
            request_timeout,
            cors_allow_origins,
        })
    }
}

fn parse_secs(key: &str, value: &str) -> anyhow::Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} must be a whole number of seconds", key))?;
    anyhow::ensure!(secs > 0, "{} must be greater than zero", key);
    Ok(Duration::from_secs(secs))
}
