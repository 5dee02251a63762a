//! SQLite storage implementation for the per-user offline cache.

mod model;
mod repository;

#[cfg(test)]
mod repository_tests;

pub use model::{CacheCollection, LocalCacheDB};
pub use repository::LocalCacheRepository;

// Re-export trait from core for convenience
pub use collectify_core::sync::LocalStoreTrait;
