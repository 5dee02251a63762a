use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use collectify_core::batch::{
    validate_payment_entries, BatchConfig, BatchPaymentProcessor, BatchResult, PaymentBatchEntry,
};
use collectify_core::customers::CollectionType;
use collectify_core::notifications::{BufferedNotificationSink, Notification};
use collectify_core::sync::RemoteStoreTrait;
use collectify_core::utils::time_utils::collection_date_from_utc;
use collectify_core::utils::with_deadline;
use serde::{Deserialize, Serialize};

use super::{cloud_store, BearerToken};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchCheckRequest {
    entries: Vec<PaymentBatchEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchSubmitRequest {
    entries: Vec<PaymentBatchEntry>,
    collection_type: CollectionType,
    /// Defaults to today (UTC)
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSubmitResponse {
    result: BatchResult,
    notifications: Vec<Notification>,
}

async fn check_batch(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Json(request): Json<BatchCheckRequest>,
) -> ApiResult<Json<Vec<PaymentBatchEntry>>> {
    let store = cloud_store(&state, token, &user_id);
    let roster = with_deadline(state.capability_timeout, "snapshot", store.snapshot())
        .await?
        .customers;

    Ok(Json(validate_payment_entries(&request.entries, &roster)))
}

async fn submit_batch(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Json(request): Json<BatchSubmitRequest>,
) -> ApiResult<Json<BatchSubmitResponse>> {
    let store = cloud_store(&state, token, &user_id);
    let roster = with_deadline(state.capability_timeout, "snapshot", store.snapshot())
        .await?
        .customers;
    let validated = validate_payment_entries(&request.entries, &roster);

    let notifications = BufferedNotificationSink::new();
    let processor =
        BatchPaymentProcessor::new(state.id_generator.clone(), Arc::new(notifications.clone()))
            .with_config(BatchConfig {
                capability_timeout: state.capability_timeout,
            });

    let date = request
        .date
        .unwrap_or_else(|| collection_date_from_utc(Utc::now()));
    let result = processor
        .process_batch_payments(&validated, request.collection_type, date, store.as_ref())
        .await;

    Ok(Json(BatchSubmitResponse {
        result,
        notifications: notifications.drain(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{user_id}/payments/batch/check", post(check_batch))
        .route("/users/{user_id}/payments/batch", post(submit_batch))
}
