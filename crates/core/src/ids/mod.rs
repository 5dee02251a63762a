//! Id generation for ledger records.

mod id_generator;

#[cfg(test)]
mod id_generator_tests;

pub use id_generator::{validate_id_uniqueness, IdGenerator};
