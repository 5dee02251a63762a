use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
    Router,
};
use collectify_cloud_sync::CloudDataStore;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, error::ApiError, main_lib::AppState};

mod collections;
mod health;
mod local;
mod payments;
mod sync;

/// Bearer token from the `Authorization` header, forwarded to the cloud backend.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Expected a Bearer token".to_string()))?;

        Ok(BearerToken(token.to_string()))
    }
}

/// Cloud capabilities for one request's user.
pub(crate) fn cloud_store(state: &AppState, token: BearerToken, user_id: &str) -> Arc<CloudDataStore> {
    Arc::new(CloudDataStore::new(
        state.cloud_client.clone(),
        token.0,
        user_id,
    ))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(sync::router())
        .merge(payments::router())
        .merge(local::router())
        .merge(collections::router());

    Router::new()
        .merge(health::router())
        .nest("/api/v1", api)
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
