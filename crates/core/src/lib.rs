//! Collectify Core - Domain entities, services, and traits.
//!
//! This crate contains the sync and batch-payment logic for Collectify.
//! It is storage-agnostic and defines capability traits that are implemented
//! by the `storage-sqlite` and `cloud-sync` crates.

pub mod batch;
pub mod collections;
pub mod constants;
pub mod customers;
pub mod errors;
pub mod ids;
pub mod notifications;
pub mod payments;
pub mod sync;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
