use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use collectify_core::notifications::{BufferedNotificationSink, Notification};
use collectify_core::sync::{
    describe_device_sync, format_sync_info, SyncConfig, SyncOrchestrator, SyncResult,
};
use serde::Serialize;

use super::{cloud_store, BearerToken};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncResponse {
    result: SyncResult,
    notifications: Vec<Notification>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncStatusResponse {
    last_synced: Option<DateTime<Utc>>,
    device_id: Option<String>,
    description: String,
}

async fn sync_user_data(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    token: BearerToken,
) -> ApiResult<Json<SyncResponse>> {
    let store = cloud_store(&state, token, &user_id);
    let notifications = BufferedNotificationSink::new();

    let orchestrator = SyncOrchestrator::new(
        state.local_cache.clone(),
        store.clone(),
        store,
        Arc::new(notifications.clone()),
    )
    .with_config(SyncConfig {
        capability_timeout: state.capability_timeout,
    });

    let outcome = orchestrator.sync_user_data(&user_id).await;
    tracing::info!("Sync for user {} finished: {:?}", user_id, outcome);

    if outcome.migrated() {
        record_sync(&state, &user_id).await;
    }

    Ok(Json(SyncResponse {
        result: SyncResult::from(&outcome),
        notifications: notifications.drain(),
    }))
}

// Bookkeeping only; a failure here must not turn a completed migration into an error.
async fn record_sync(state: &AppState, user_id: &str) {
    let device_id = match state
        .sync_metadata
        .get_or_create_device_id(user_id, state.id_generator.device_id())
        .await
    {
        Ok(device_id) => device_id,
        Err(e) => {
            tracing::warn!("Could not resolve device id for {}: {}", user_id, e);
            return;
        }
    };

    if let Err(e) = state
        .sync_metadata
        .record_sync(user_id, &device_id, Utc::now())
        .await
    {
        tracing::warn!("Could not record sync for {}: {}", user_id, e);
    }
}

async fn get_sync_status(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    _token: BearerToken,
) -> ApiResult<Json<SyncStatusResponse>> {
    let now = Utc::now();
    let response = match state.sync_metadata.get(&user_id)? {
        Some(meta) => SyncStatusResponse {
            description: describe_device_sync(&meta, now),
            last_synced: meta.last_synced,
            device_id: Some(meta.device_id),
        },
        None => SyncStatusResponse {
            last_synced: None,
            device_id: None,
            description: format_sync_info(None, now),
        },
    };
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{user_id}/sync", post(sync_user_data))
        .route("/users/{user_id}/sync/status", get(get_sync_status))
}
