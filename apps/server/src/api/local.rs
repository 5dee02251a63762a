use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::put,
    Json, Router,
};
use collectify_core::sync::{LocalDataBundle, LocalStoreTrait};

use super::BearerToken;
use crate::{error::ApiResult, main_lib::AppState};

/// Offline snapshot kept for `user_id` until the next successful migration.
async fn get_local_data(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    _token: BearerToken,
) -> ApiResult<Json<LocalDataBundle>> {
    let cache = &state.local_cache;
    let (customers, payments, areas) = tokio::try_join!(
        cache.load_customers(&user_id),
        cache.load_payments(&user_id),
        cache.load_areas(&user_id),
    )?;
    Ok(Json(LocalDataBundle::from_parts(customers, payments, areas)))
}

async fn save_local_data(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    _token: BearerToken,
    Json(bundle): Json<LocalDataBundle>,
) -> ApiResult<StatusCode> {
    state.local_cache.save_bundle(&user_id, &bundle).await?;
    tracing::debug!(
        "Cached {} customers, {} payments, {} areas for {}",
        bundle.customers.len(),
        bundle.payments.len(),
        bundle.areas.len(),
        user_id
    );
    Ok(StatusCode::NO_CONTENT)
}

async fn clear_local_data(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    _token: BearerToken,
) -> ApiResult<StatusCode> {
    state.local_cache.clear_user_data(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users/{user_id}/local",
        put(save_local_data)
            .get(get_local_data)
            .delete(clear_local_data),
    )
}
