//! Batch payment domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::customers::Customer;
use crate::payments::Payment;

/// One candidate payment line submitted for bulk processing.
///
/// `is_valid`, `error` and `customer` are filled in by
/// `validate_payment_entry`; entries built by callers start out invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBatchEntry {
    pub serial_number: String,
    /// Customer name as typed (or read) by the agent
    pub customer_name: String,
    pub amount: Decimal,
    pub agent_name: String,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl PaymentBatchEntry {
    pub fn new(
        serial_number: impl Into<String>,
        customer_name: impl Into<String>,
        amount: Decimal,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            customer_name: customer_name.into(),
            amount,
            agent_name: agent_name.into(),
            is_valid: false,
            error: None,
            customer: None,
        }
    }
}

/// Outcome of one batch submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub batch_id: String,
    /// True iff at least one payment was committed
    pub success: bool,
    pub processed_count: usize,
    pub failed_count: usize,
    /// Error lines in input order: invalid entries first, then write failures
    pub errors: Vec<String>,
    /// Committed payments in input order
    pub payments: Vec<Payment>,
}

/// Coarse classification of a `BatchResult`.
///
/// `success` alone cannot tell an empty submission from one where every
/// write failed; this can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Every entry was committed
    Committed,
    /// Some entries were committed, some failed
    PartiallyCommitted,
    /// No entry was committed and nothing failed (empty submission)
    NothingToApply,
    /// No entry was committed and at least one failed
    AllFailed,
}

impl BatchResult {
    pub fn new(batch_id: String) -> Self {
        Self {
            batch_id,
            success: false,
            processed_count: 0,
            failed_count: 0,
            errors: Vec::new(),
            payments: Vec::new(),
        }
    }

    pub fn status(&self) -> BatchStatus {
        match (self.processed_count, self.failed_count) {
            (0, 0) => BatchStatus::NothingToApply,
            (0, _) => BatchStatus::AllFailed,
            (_, 0) => BatchStatus::Committed,
            _ => BatchStatus::PartiallyCommitted,
        }
    }

    /// Share of attempted entries that were committed, as a percentage.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.processed_count + self.failed_count;
        if attempted == 0 {
            return 0.0;
        }
        self.processed_count as f64 / attempted as f64 * 100.0
    }
}

/// Options for `BatchPaymentProcessor`.
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Upper bound for a single `add_payment` call; `None` waits indefinitely
    pub capability_timeout: Option<Duration>,
}
