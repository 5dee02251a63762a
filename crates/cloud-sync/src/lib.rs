//! Collectify Cloud Sync - REST client for the Collectify cloud backend.
//!
//! This crate provides the API client and wire types used to read a user's
//! remote snapshot, upload a local migration bundle and record payments.
//! `CloudDataStore` adapts the client to the capability traits of
//! `collectify-core`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use collectify_cloud_sync::{CloudDataStore, CloudSyncClient};
//!
//! let client = CloudSyncClient::new("https://api.collectify.app")?;
//! let snapshot = client.get_snapshot("access_token", "user-1").await?;
//! let store = CloudDataStore::new(client, "access_token", "user-1");
//! ```

mod client;
mod error;
mod store;
mod types;

pub use client::CloudSyncClient;
pub use error::{CloudSyncError, Result};
pub use store::CloudDataStore;
pub use types::*;
