//! API client for the Collectify cloud backend.
//!
//! All endpoints live under `/api/v1/users/{userId}` and take a bearer token.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use collectify_core::payments::Payment;

use crate::error::{CloudSyncError, Result};
use crate::types::*;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the Collectify cloud API.
#[derive(Debug, Clone)]
pub struct CloudSyncClient {
    client: reqwest::Client,
    base_url: String,
}

impl CloudSyncClient {
    /// Create a new cloud client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the cloud API (e.g., "https://api.collectify.app")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create headers for an API request.
    fn headers(&self, token: &str) -> Result<HeaderMap> {
        if token.trim().is_empty() {
            return Err(CloudSyncError::auth("Missing access token"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| CloudSyncError::auth("Invalid access token format"))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    fn user_url(&self, user_id: &str, suffix: &str) -> Result<String> {
        if user_id.trim().is_empty() {
            return Err(CloudSyncError::invalid_request("User id is required"));
        }
        Ok(format!(
            "{}/api/v1/users/{}/{}",
            self.base_url,
            urlencoding::encode(user_id),
            suffix
        ))
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(CloudSyncError::api(
                    status.as_u16(),
                    format!("{}: {}", error.code, error.message),
                ));
            }
            return Err(CloudSyncError::api(
                status.as_u16(),
                format!("Request failed: {}", body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            CloudSyncError::api(status.as_u16(), format!("Failed to parse response: {}", e))
        })
    }

    /// Fetch everything the cloud holds for a user.
    ///
    /// GET /api/v1/users/{userId}/snapshot
    pub async fn get_snapshot(&self, token: &str, user_id: &str) -> Result<RemoteSnapshot> {
        let url = self.user_url(user_id, "snapshot")?;

        let response = self
            .client
            .get(&url)
            .headers(self.headers(token)?)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Upload a local bundle in one request.
    ///
    /// POST /api/v1/users/{userId}/migrations
    pub async fn migrate(
        &self,
        token: &str,
        user_id: &str,
        bundle: &LocalDataBundle,
    ) -> Result<WriteAck> {
        let url = self.user_url(user_id, "migrations")?;
        debug!(
            "Uploading migration for {}: {} customers, {} payments, {} areas",
            user_id,
            bundle.customers.len(),
            bundle.payments.len(),
            bundle.areas.len()
        );

        let response = self
            .client
            .post(&url)
            .headers(self.headers(token)?)
            .json(bundle)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Record a single payment.
    ///
    /// POST /api/v1/users/{userId}/payments
    pub async fn add_payment(
        &self,
        token: &str,
        user_id: &str,
        payment: &Payment,
    ) -> Result<WriteAck> {
        let url = self.user_url(user_id, "payments")?;

        let response = self
            .client
            .post(&url)
            .headers(self.headers(token)?)
            .json(payment)
            .send()
            .await?;

        Self::parse_response(response).await
    }
}
