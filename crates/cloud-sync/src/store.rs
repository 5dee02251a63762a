//! Capability adapters over `CloudSyncClient` for one signed-in user.

use async_trait::async_trait;
use log::warn;

use collectify_core::payments::{Payment, PaymentSinkTrait};
use collectify_core::sync::{DataMigratorTrait, LocalDataBundle, RemoteSnapshot, RemoteStoreTrait};

use crate::client::CloudSyncClient;
use crate::types::WriteAck;

/// The cloud backend seen through the core capability traits.
///
/// A `{success: false}` acknowledgement becomes `Ok(false)`; transport and
/// API failures become `collectify_core::Error::Remote`.
#[derive(Debug, Clone)]
pub struct CloudDataStore {
    client: CloudSyncClient,
    token: String,
    user_id: String,
}

impl CloudDataStore {
    pub fn new(client: CloudSyncClient, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    fn accepted(&self, operation: &str, ack: WriteAck) -> bool {
        if !ack.success {
            warn!(
                "Cloud refused {} for user {}: {}",
                operation,
                self.user_id,
                ack.error.as_deref().unwrap_or("no reason given")
            );
        }
        ack.success
    }
}

#[async_trait]
impl RemoteStoreTrait for CloudDataStore {
    async fn snapshot(&self) -> collectify_core::Result<RemoteSnapshot> {
        Ok(self.client.get_snapshot(&self.token, &self.user_id).await?)
    }
}

#[async_trait]
impl DataMigratorTrait for CloudDataStore {
    async fn migrate_local_data(&self, bundle: &LocalDataBundle) -> collectify_core::Result<bool> {
        let ack = self.client.migrate(&self.token, &self.user_id, bundle).await?;
        Ok(self.accepted("migration", ack))
    }
}

#[async_trait]
impl PaymentSinkTrait for CloudDataStore {
    async fn add_payment(&self, payment: &Payment) -> collectify_core::Result<bool> {
        let ack = self
            .client
            .add_payment(&self.token, &self.user_id, payment)
            .await?;
        Ok(self.accepted("payment", ack))
    }
}
