//! Wire types for the cloud REST API.

use serde::{Deserialize, Serialize};

pub use collectify_core::sync::{LocalDataBundle, RemoteSnapshot};

/// Error body returned by the cloud service on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
}

/// Acknowledgement for write operations (migrations, payments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
