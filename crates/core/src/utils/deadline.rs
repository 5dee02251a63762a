use std::future::Future;
use std::time::Duration;

use crate::{Error, Result};

/// Awaits a capability call, failing with `Error::Timeout` once `limit` elapses.
///
/// With no limit the future is awaited as-is.
pub async fn with_deadline<F, T>(limit: Option<Duration>, operation: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut).await.map_err(|_| {
            Error::timeout(format!("{} did not complete within {:?}", operation, limit))
        })?,
        None => fut.await,
    }
}
