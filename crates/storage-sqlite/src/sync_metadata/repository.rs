//! Repository for sync metadata persistence.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;

use collectify_core::errors::Result;
use collectify_core::sync::SyncMetadata;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::sync_metadata;

use super::model::SyncMetadataDB;

pub struct SyncMetadataRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SyncMetadataRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Get sync metadata for a user (read-only)
    pub fn get(&self, user_id: &str) -> Result<Option<SyncMetadata>> {
        let mut conn = get_connection(&self.pool)?;

        let result = sync_metadata::table
            .find(user_id)
            .first::<SyncMetadataDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(Into::into))
    }

    /// Returns the stored device id for `user_id`, registering `candidate` if none exists.
    pub async fn get_or_create_device_id(&self, user_id: &str, candidate: String) -> Result<String> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn| {
                let existing = sync_metadata::table
                    .find(&user_id)
                    .select(sync_metadata::device_id)
                    .first::<String>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                if let Some(device_id) = existing {
                    return Ok(device_id);
                }

                let now = Utc::now().to_rfc3339();
                diesel::insert_into(sync_metadata::table)
                    .values(&SyncMetadataDB {
                        user_id,
                        device_id: candidate.clone(),
                        last_synced: None,
                        created_at: now.clone(),
                        updated_at: now,
                    })
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(candidate)
            })
            .await
    }

    /// Record a successful sync (upsert)
    pub async fn record_sync(
        &self,
        user_id: &str,
        device_id: &str,
        at: DateTime<Utc>,
    ) -> Result<SyncMetadata> {
        let user_id = user_id.to_string();
        let device_id = device_id.to_string();
        self.writer
            .exec(move |conn| {
                let now = Utc::now().to_rfc3339();
                let synced = at.to_rfc3339();

                let existing = sync_metadata::table
                    .find(&user_id)
                    .first::<SyncMetadataDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                let row = match existing {
                    Some(mut row) => {
                        row.device_id = device_id;
                        row.last_synced = Some(synced);
                        row.updated_at = now;
                        diesel::update(sync_metadata::table.find(&row.user_id))
                            .set(&row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        row
                    }
                    None => {
                        let row = SyncMetadataDB {
                            user_id,
                            device_id,
                            last_synced: Some(synced),
                            created_at: now.clone(),
                            updated_at: now,
                        };
                        diesel::insert_into(sync_metadata::table)
                            .values(&row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        row
                    }
                };

                Ok(row.into())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, prepare_database, run_migrations, spawn_writer};
    use chrono::TimeZone;

    fn setup() -> (tempfile::TempDir, SyncMetadataRepository) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("app.db");
        let db_path = db_path.to_str().unwrap();
        prepare_database(db_path).unwrap();
        let pool = create_pool(db_path).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone());
        (dir, SyncMetadataRepository::new(pool, writer))
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_metadata() {
        let (_dir, repo) = setup();
        assert!(repo.get("user-1").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_device_id_is_registered_once() {
        let (_dir, repo) = setup();

        let first = repo
            .get_or_create_device_id("user-1", "device_first".to_string())
            .await
            .unwrap();
        let second = repo
            .get_or_create_device_id("user-1", "device_second".to_string())
            .await
            .unwrap();

        assert_eq!(first, "device_first");
        assert_eq!(second, "device_first");
        let meta = repo.get("user-1").unwrap().unwrap();
        assert!(meta.last_synced.is_none());
    }

    #[tokio::test]
    async fn test_record_sync_upserts() {
        let (_dir, repo) = setup();
        let first_sync = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();
        let second_sync = Utc.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).unwrap();

        repo.record_sync("user-1", "device_a", first_sync)
            .await
            .unwrap();
        let meta = repo
            .record_sync("user-1", "device_a", second_sync)
            .await
            .unwrap();

        assert_eq!(meta.last_synced, Some(second_sync));
        let stored = repo.get("user-1").unwrap().unwrap();
        assert_eq!(stored.device_id, "device_a");
        assert_eq!(stored.last_synced, Some(second_sync));
    }
}
