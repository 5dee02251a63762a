//! Payment domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::customers::CollectionType;

/// How a collection was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Online,
    Check,
}

/// A single collection event in the ledger.
///
/// Payments are append-only: once handed to a `PaymentSinkTrait` they are
/// never mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub serial_number: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    /// Area name copied from the customer (empty when unknown)
    #[serde(default)]
    pub area: String,
    pub collection_type: CollectionType,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub agent_name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub receipt_number: Option<String>,
    pub created_at: DateTime<Utc>,
}
