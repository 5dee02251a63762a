//! Sync module - local-to-cloud migration and last-sync bookkeeping.

mod sync_metadata;
mod sync_model;
mod sync_service;
mod sync_traits;



pub use sync_metadata::{describe_device_sync, format_sync_info, SyncMetadata};
pub use sync_model::{LocalDataBundle, RemoteSnapshot, SyncConfig, SyncOutcome, SyncResult};
pub use sync_service::SyncOrchestrator;
pub use sync_traits::{DataMigratorTrait, LocalStoreTrait, RemoteStoreTrait};
