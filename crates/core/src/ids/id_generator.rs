//! Collision-resistant identifiers for payments, batches and devices.
//!
//! Ids combine the current millisecond, a per-millisecond counter and a short
//! random base36 suffix. The counter lives in the generator instance, so each
//! owner (a service, a test) gets its own sequence.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::constants::BATCH_RECEIPT_PREFIX;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Default)]
struct CounterState {
    last_millis: i64,
    counter: i64,
}

/// Thread-safe id generator owned by the caller.
#[derive(Debug, Default)]
pub struct IdGenerator {
    state: Mutex<CounterState>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a payment id for the current instant.
    pub fn payment_id(&self) -> String {
        self.payment_id_at(Utc::now())
    }

    /// Generates a payment id of the form `payment_<millis*10000+counter>_<random>`.
    ///
    /// The counter restarts at zero whenever the millisecond changes.
    pub fn payment_id_at(&self, at: DateTime<Utc>) -> String {
        let millis = at.timestamp_millis();
        let counter = self.next_counter(millis);
        let sequential = millis * 10_000 + counter;
        format!("payment_{}_{}", sequential, random_base36(7))
    }

    /// Generates `count` payment ids in one go.
    pub fn payment_ids(&self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.payment_id()).collect()
    }

    /// Generates an id for one batch submission.
    pub fn batch_id(&self) -> String {
        format!(
            "batch_{}_{}_{}",
            Utc::now().timestamp_millis(),
            random_base36(3),
            random_base36(7)
        )
    }

    /// Generates an identifier for the local installation.
    pub fn device_id(&self) -> String {
        format!("device_{}", random_base36(13))
    }

    /// Receipt number for a batch-entered payment: `BATCH-<millis>-<serial>`.
    pub fn receipt_number(&self, serial_number: &str, at: DateTime<Utc>) -> String {
        format!(
            "{}-{}-{}",
            BATCH_RECEIPT_PREFIX,
            at.timestamp_millis(),
            serial_number
        )
    }

    fn next_counter(&self, millis: i64) -> i64 {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.last_millis != millis {
            state.last_millis = millis;
            state.counter = 0;
        } else {
            state.counter += 1;
        }
        state.counter
    }
}

/// Returns true when no id appears twice.
pub fn validate_id_uniqueness(ids: &[String]) -> bool {
    let unique: HashSet<&String> = ids.iter().collect();
    unique.len() == ids.len()
}

fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
