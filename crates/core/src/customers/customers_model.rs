//! Customer and area domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repayment schedule of a loan or a single collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl CollectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::Daily => "daily",
            CollectionType::Weekly => "weekly",
            CollectionType::Monthly => "monthly",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a customer's loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Completed,
    Defaulted,
}

/// A borrower tracked by a collection agent.
///
/// Owned by the hosting application's state store. The core only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    /// Human-facing identifier agents use to look the customer up
    pub serial_number: String,
    pub name: String,
    /// Area name the customer belongs to (may be empty)
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub collection_type: CollectionType,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default)]
    pub loan_amount: Decimal,
    #[serde(default)]
    pub total_amount_to_be_paid: Decimal,
    #[serde(default)]
    pub total_paid: Decimal,
    #[serde(default)]
    pub installment_amount: Decimal,
    #[serde(default)]
    pub penalty_amount: Decimal,
    #[serde(default)]
    pub interest_amount: Decimal,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Outstanding amount including penalties, never negative.
    pub fn balance_amount(&self) -> Decimal {
        let balance = self.total_amount_to_be_paid + self.penalty_amount - self.total_paid;
        balance.max(Decimal::ZERO)
    }

    pub fn is_fully_paid(&self) -> bool {
        self.status == CustomerStatus::Completed || self.balance_amount().is_zero()
    }

    /// Case-insensitive comparison against a name typed by an agent.
    pub fn name_matches(&self, claimed: &str) -> bool {
        self.name.trim().to_lowercase() == claimed.trim().to_lowercase()
    }
}

/// Collection area (route) grouping customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Returns every customer whose serial number equals `serial_number` exactly.
pub fn find_by_serial_number<'a>(customers: &'a [Customer], serial_number: &str) -> Vec<&'a Customer> {
    customers
        .iter()
        .filter(|c| c.serial_number == serial_number)
        .collect()
}
