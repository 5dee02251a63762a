//! Sync domain models.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::MIGRATION_FAILED_MESSAGE;
use crate::customers::{Area, Customer};
use crate::payments::Payment;

/// Snapshot of one user's locally cached records, submitted as a migration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDataBundle {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl LocalDataBundle {
    /// Builds a bundle, treating a missing collection as empty.
    pub fn from_parts(
        customers: Option<Vec<Customer>>,
        payments: Option<Vec<Payment>>,
        areas: Option<Vec<Area>>,
    ) -> Self {
        Self {
            customers: customers.unwrap_or_default(),
            payments: payments.unwrap_or_default(),
            areas: areas.unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.payments.is_empty() && self.areas.is_empty()
    }
}

/// The remote store's current records for the signed-in user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSnapshot {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl RemoteSnapshot {
    /// True when the remote store holds any record at all.
    pub fn has_data(&self) -> bool {
        !self.customers.is_empty() || !self.payments.is_empty() || !self.areas.is_empty()
    }
}

/// Outcome of one `sync_user_data` run.
///
/// Each variant fixes the combination of flags a caller can observe, so a
/// migration can never be reported without local data having been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The remote store already had data; local data was not inspected
    RemoteDataPresent,
    /// Nothing to migrate
    NoLocalData,
    /// Local data was uploaded and the local cache purged
    Migrated {
        customers: usize,
        payments: usize,
        areas: usize,
    },
    /// The migrator refused the bundle; local data was kept
    MigrationRejected,
    /// A capability failed; `error` is its message
    Failed { error: String },
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SyncOutcome::RemoteDataPresent | SyncOutcome::NoLocalData | SyncOutcome::Migrated { .. }
        )
    }

    pub fn migrated(&self) -> bool {
        matches!(self, SyncOutcome::Migrated { .. })
    }

    pub fn local_data_found(&self) -> bool {
        matches!(
            self,
            SyncOutcome::Migrated { .. } | SyncOutcome::MigrationRejected
        )
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SyncOutcome::MigrationRejected => Some(MIGRATION_FAILED_MESSAGE),
            SyncOutcome::Failed { error } => Some(error.as_str()),
            _ => None,
        }
    }
}

/// Flat wire view of a `SyncOutcome`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub success: bool,
    pub migrated: bool,
    pub local_data_found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SyncOutcome> for SyncResult {
    fn from(outcome: &SyncOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            migrated: outcome.migrated(),
            local_data_found: outcome.local_data_found(),
            error: outcome.error().map(str::to_string),
        }
    }
}

impl From<SyncOutcome> for SyncResult {
    fn from(outcome: SyncOutcome) -> Self {
        SyncResult::from(&outcome)
    }
}

/// Options for `SyncOrchestrator`.
#[derive(Debug, Clone, Default)]
pub struct SyncConfig {
    /// Upper bound for each capability call; `None` waits indefinitely
    pub capability_timeout: Option<Duration>,
}
