//! Database model for sync metadata.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use collectify_core::sync::SyncMetadata;

/// Database model for one user's sync bookkeeping on this device
#[derive(
    Queryable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug, Clone, Default,
)]
#[diesel(table_name = crate::schema::sync_metadata)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(primary_key(user_id))]
pub struct SyncMetadataDB {
    pub user_id: String,
    pub device_id: String,
    pub last_synced: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SyncMetadataDB> for SyncMetadata {
    fn from(db: SyncMetadataDB) -> Self {
        Self {
            user_id: db.user_id,
            device_id: db.device_id,
            // unparseable timestamps read as never synced
            last_synced: db
                .last_synced
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
