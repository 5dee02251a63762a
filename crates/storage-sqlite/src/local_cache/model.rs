//! Database model for cached collections.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collections the offline cache keeps per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheCollection {
    Customers,
    Payments,
    Areas,
}

impl CacheCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCollection::Customers => "customers",
            CacheCollection::Payments => "payments",
            CacheCollection::Areas => "areas",
        }
    }
}

impl fmt::Display for CacheCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cached collection: the whole JSON array for a (user, collection) pair.
#[derive(Queryable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::local_cache)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LocalCacheDB {
    pub user_id: String,
    pub collection: String,
    pub payload_json: String,
    pub updated_at: String,
}
