//! SQLite storage implementation for sync metadata.

mod model;
mod repository;

pub use model::SyncMetadataDB;
pub use repository::SyncMetadataRepository;
