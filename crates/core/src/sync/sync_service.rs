use log::{debug, error, info, warn};
use std::sync::Arc;

use super::sync_model::{LocalDataBundle, SyncConfig, SyncOutcome};
use super::sync_traits::{DataMigratorTrait, LocalStoreTrait, RemoteStoreTrait};
use crate::errors::Result;
use crate::notifications::{Notification, NotificationSink};
use crate::utils::with_deadline;

/// Moves a user's locally cached records to the remote store once per session.
///
/// The remote store always wins: local data is only inspected when the
/// remote snapshot is empty, and it is purged only after the migrator
/// confirms the upload.
pub struct SyncOrchestrator {
    local_store: Arc<dyn LocalStoreTrait>,
    remote_store: Arc<dyn RemoteStoreTrait>,
    migrator: Arc<dyn DataMigratorTrait>,
    notification_sink: Arc<dyn NotificationSink>,
    config: SyncConfig,
}

impl SyncOrchestrator {
    pub fn new(
        local_store: Arc<dyn LocalStoreTrait>,
        remote_store: Arc<dyn RemoteStoreTrait>,
        migrator: Arc<dyn DataMigratorTrait>,
        notification_sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            local_store,
            remote_store,
            migrator,
            notification_sink,
            config: SyncConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs one sync for `user_id`.
    ///
    /// Never fails: capability errors (timeouts included) are reported as
    /// `SyncOutcome::Failed`.
    pub async fn sync_user_data(&self, user_id: &str) -> SyncOutcome {
        match self.try_sync(user_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Sync for user {} failed: {}", user_id, e);
                SyncOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn try_sync(&self, user_id: &str) -> Result<SyncOutcome> {
        let timeout = self.config.capability_timeout;

        let remote = with_deadline(timeout, "snapshot", self.remote_store.snapshot()).await?;
        if remote.has_data() {
            debug!(
                "Remote store already has data for user {}, skipping migration",
                user_id
            );
            return Ok(SyncOutcome::RemoteDataPresent);
        }

        let (customers, payments, areas) = futures::try_join!(
            with_deadline(
                timeout,
                "load_customers",
                self.local_store.load_customers(user_id)
            ),
            with_deadline(
                timeout,
                "load_payments",
                self.local_store.load_payments(user_id)
            ),
            with_deadline(timeout, "load_areas", self.local_store.load_areas(user_id)),
        )?;
        let bundle = LocalDataBundle::from_parts(customers, payments, areas);
        if bundle.is_empty() {
            debug!("No local data to migrate for user {}", user_id);
            return Ok(SyncOutcome::NoLocalData);
        }

        info!(
            "Migrating local data for user {}: {} customers, {} payments, {} areas",
            user_id,
            bundle.customers.len(),
            bundle.payments.len(),
            bundle.areas.len()
        );
        let accepted = with_deadline(
            timeout,
            "migrate_local_data",
            self.migrator.migrate_local_data(&bundle),
        )
        .await?;
        if !accepted {
            warn!("Remote store rejected migration for user {}", user_id);
            return Ok(SyncOutcome::MigrationRejected);
        }

        with_deadline(
            timeout,
            "clear_user_data",
            self.local_store.clear_user_data(user_id),
        )
        .await?;

        self.notification_sink.notify(Notification::success(
            "Data Migration Complete",
            "Your data is now synced across all devices in real-time",
        ));
        info!("Migration for user {} complete, local cache cleared", user_id);

        Ok(SyncOutcome::Migrated {
            customers: bundle.customers.len(),
            payments: bundle.payments.len(),
            areas: bundle.areas.len(),
        })
    }
}
