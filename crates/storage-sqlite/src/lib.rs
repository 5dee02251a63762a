//! SQLite storage implementation for Collectify.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the local cache capability defined in `collectify-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The per-user offline cache (customers, payments, areas)
//! - Sync metadata (device id, last successful sync)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` and `cloud-sync` are database-agnostic and work with traits.
//!
//! ```text
//! core (domain)        cloud-sync (remote)
//!       │                      │
//!       └──────────┬───────────┘
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod local_cache;
pub mod schema;
pub mod sync_metadata;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, prepare_database, run_migrations,
    DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use local_cache::LocalCacheRepository;
pub use sync_metadata::SyncMetadataRepository;

// Re-export from collectify-core for convenience
pub use collectify_core::errors::{DatabaseError, Error, Result};
