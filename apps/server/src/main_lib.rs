use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use collectify_cloud_sync::CloudSyncClient;
use collectify_core::ids::IdGenerator;
use collectify_storage_sqlite::{
    db::{self, write_actor},
    LocalCacheRepository, SyncMetadataRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub local_cache: Arc<LocalCacheRepository>,
    pub sync_metadata: Arc<SyncMetadataRepository>,
    pub cloud_client: CloudSyncClient,
    pub id_generator: Arc<IdGenerator>,
    pub capability_timeout: Option<Duration>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::prepare_database(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let local_cache = Arc::new(LocalCacheRepository::new(pool.clone(), writer.clone()));
    let sync_metadata = Arc::new(SyncMetadataRepository::new(pool.clone(), writer));

    let cloud_client = match config.capability_timeout {
        Some(timeout) => CloudSyncClient::with_timeout(&config.cloud_api_url, timeout)?,
        None => CloudSyncClient::new(&config.cloud_api_url)?,
    };
    tracing::info!("Cloud API: {}", cloud_client.base_url());

    Ok(Arc::new(AppState {
        local_cache,
        sync_metadata,
        cloud_client,
        id_generator: Arc::new(IdGenerator::new()),
        capability_timeout: config.capability_timeout,
    }))
}
