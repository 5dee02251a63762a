use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::model::{CacheCollection, LocalCacheDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::local_cache;
use collectify_core::customers::{Area, Customer};
use collectify_core::errors::Result;
use collectify_core::payments::Payment;
use collectify_core::sync::{LocalDataBundle, LocalStoreTrait};

/// Offline cache of customers, payments and areas, one JSON row per collection.
pub struct LocalCacheRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LocalCacheRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LocalCacheRepository { pool, writer }
    }

    pub async fn save_customers(&self, user_id: &str, customers: &[Customer]) -> Result<()> {
        self.save(user_id, CacheCollection::Customers, customers).await
    }

    pub async fn save_payments(&self, user_id: &str, payments: &[Payment]) -> Result<()> {
        self.save(user_id, CacheCollection::Payments, payments).await
    }

    pub async fn save_areas(&self, user_id: &str, areas: &[Area]) -> Result<()> {
        self.save(user_id, CacheCollection::Areas, areas).await
    }

    /// Replaces all three collections for `user_id` in one transaction.
    pub async fn save_bundle(&self, user_id: &str, bundle: &LocalDataBundle) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let rows = vec![
            cache_row(user_id, CacheCollection::Customers, &bundle.customers, &now)?,
            cache_row(user_id, CacheCollection::Payments, &bundle.payments, &now)?,
            cache_row(user_id, CacheCollection::Areas, &bundle.areas, &now)?,
        ];

        self.writer
            .exec(move |conn| {
                for row in &rows {
                    diesel::replace_into(local_cache::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(())
            })
            .await
    }

    async fn save<T: Serialize>(
        &self,
        user_id: &str,
        collection: CacheCollection,
        records: &[T],
    ) -> Result<()> {
        let row = cache_row(user_id, collection, records, &Utc::now().to_rfc3339())?;
        debug!(
            "Caching {} {} for user {}",
            records.len(),
            collection,
            user_id
        );

        self.writer
            .exec(move |conn| {
                diesel::replace_into(local_cache::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn load<T: DeserializeOwned>(
        &self,
        user_id: &str,
        collection: CacheCollection,
    ) -> Result<Option<Vec<T>>> {
        let mut conn = get_connection(&self.pool)?;

        let payload = local_cache::table
            .find((user_id, collection.as_str()))
            .select(local_cache::payload_json)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match payload {
            Some(json) => {
                let records = serde_json::from_str(&json).map_err(StorageError::from)?;
                Ok(Some(records))
            }
            None => Ok(None),
        }
    }
}

fn cache_row<T: Serialize>(
    user_id: &str,
    collection: CacheCollection,
    records: &[T],
    updated_at: &str,
) -> Result<LocalCacheDB> {
    Ok(LocalCacheDB {
        user_id: user_id.to_string(),
        collection: collection.as_str().to_string(),
        payload_json: serde_json::to_string(records)?,
        updated_at: updated_at.to_string(),
    })
}

#[async_trait]
impl LocalStoreTrait for LocalCacheRepository {
    async fn load_customers(&self, user_id: &str) -> Result<Option<Vec<Customer>>> {
        self.load(user_id, CacheCollection::Customers)
    }

    async fn load_payments(&self, user_id: &str) -> Result<Option<Vec<Payment>>> {
        self.load(user_id, CacheCollection::Payments)
    }

    async fn load_areas(&self, user_id: &str) -> Result<Option<Vec<Area>>> {
        self.load(user_id, CacheCollection::Areas)
    }

    async fn clear_user_data(&self, user_id: &str) -> Result<()> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn| {
                let removed = diesel::delete(
                    local_cache::table.filter(local_cache::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                debug!("Cleared {} cached collections for user {}", removed, user_id);
                Ok(())
            })
            .await
    }
}
