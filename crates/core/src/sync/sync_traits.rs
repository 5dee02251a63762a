use async_trait::async_trait;

use super::sync_model::{LocalDataBundle, RemoteSnapshot};
use crate::customers::{Area, Customer};
use crate::payments::Payment;
use crate::Result;

/// Read/purge access to the per-user local cache.
///
/// A `None` collection means the cache never stored it; callers treat it as
/// empty.
#[async_trait]
pub trait LocalStoreTrait: Send + Sync {
    async fn load_customers(&self, user_id: &str) -> Result<Option<Vec<Customer>>>;
    async fn load_payments(&self, user_id: &str) -> Result<Option<Vec<Payment>>>;
    async fn load_areas(&self, user_id: &str) -> Result<Option<Vec<Area>>>;
    /// Removes every cached collection for `user_id`.
    async fn clear_user_data(&self, user_id: &str) -> Result<()>;
}

/// Source of the remote store's current records.
#[async_trait]
pub trait RemoteStoreTrait: Send + Sync {
    async fn snapshot(&self) -> Result<RemoteSnapshot>;
}

/// Already-loaded remote data can stand in for a live store.
#[async_trait]
impl RemoteStoreTrait for RemoteSnapshot {
    async fn snapshot(&self) -> Result<RemoteSnapshot> {
        Ok(self.clone())
    }
}

/// Uploads a local bundle to the remote store in one operation.
#[async_trait]
pub trait DataMigratorTrait: Send + Sync {
    /// Returns `Ok(false)` when the remote store refused the bundle.
    async fn migrate_local_data(&self, bundle: &LocalDataBundle) -> Result<bool>;
}
