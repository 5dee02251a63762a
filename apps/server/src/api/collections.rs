use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Duration, NaiveDate, Utc};
use collectify_core::collections::{area_totals, daily_totals, CollectionSummary, DailyTotal};
use collectify_core::sync::RemoteStoreTrait;
use collectify_core::utils::time_utils::collection_date_from_utc;
use collectify_core::utils::with_deadline;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{cloud_store, BearerToken};
use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Days covered by the daily chart when no range is given.
const DEFAULT_RANGE_DAYS: i64 = 7;
const MAX_RANGE_DAYS: i64 = 366;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryQuery {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    summary: CollectionSummary,
    daily: Vec<DailyTotal>,
    areas: BTreeMap<String, Decimal>,
}

async fn get_collection_summary(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<SummaryQuery>,
    token: BearerToken,
) -> ApiResult<Json<SummaryResponse>> {
    let to = query
        .to
        .unwrap_or_else(|| collection_date_from_utc(Utc::now()));
    let from = query
        .from
        .unwrap_or(to - Duration::days(DEFAULT_RANGE_DAYS - 1));
    if from > to {
        return Err(ApiError::BadRequest("from must not be after to".to_string()));
    }
    if (to - from).num_days() >= MAX_RANGE_DAYS {
        return Err(ApiError::BadRequest(format!(
            "Range must not exceed {} days",
            MAX_RANGE_DAYS
        )));
    }

    let store = cloud_store(&state, token, &user_id);
    let payments = with_deadline(state.capability_timeout, "snapshot", store.snapshot())
        .await?
        .payments;

    Ok(Json(SummaryResponse {
        summary: CollectionSummary::from_payments(&payments),
        daily: daily_totals(&payments, from, to),
        areas: area_totals(&payments),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users/{user_id}/collections/summary",
        get(get_collection_summary),
    )
}
