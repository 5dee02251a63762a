use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::customers::CollectionType;
use crate::payments::Payment;
use crate::utils::time_utils::get_days_between;

/// Totals collected over a set of payments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total_amount: Decimal,
    pub payment_count: usize,
    pub daily_amount: Decimal,
    pub weekly_amount: Decimal,
    pub monthly_amount: Decimal,
}

impl CollectionSummary {
    pub fn from_payments(payments: &[Payment]) -> Self {
        payments.iter().fold(Self::default(), |mut summary, payment| {
            summary.total_amount += payment.amount;
            summary.payment_count += 1;
            match payment.collection_type {
                CollectionType::Daily => summary.daily_amount += payment.amount,
                CollectionType::Weekly => summary.weekly_amount += payment.amount,
                CollectionType::Monthly => summary.monthly_amount += payment.amount,
            }
            summary
        })
    }

    pub fn amount_for(&self, collection_type: CollectionType) -> Decimal {
        match collection_type {
            CollectionType::Daily => self.daily_amount,
            CollectionType::Weekly => self.weekly_amount,
            CollectionType::Monthly => self.monthly_amount,
        }
    }
}

/// Amount collected on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

/// One row per day in `[from, to]`, zero when nothing was collected.
///
/// Payments outside the range are ignored. A reversed range yields no rows.
pub fn daily_totals(payments: &[Payment], from: NaiveDate, to: NaiveDate) -> Vec<DailyTotal> {
    let mut by_day: HashMap<NaiveDate, Decimal> = HashMap::new();
    for payment in payments {
        if payment.date >= from && payment.date <= to {
            *by_day.entry(payment.date).or_insert(Decimal::ZERO) += payment.amount;
        }
    }

    get_days_between(from, to)
        .into_iter()
        .map(|date| DailyTotal {
            date,
            total: by_day.get(&date).copied().unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Totals keyed by area name; payments without an area are grouped under "".
pub fn area_totals(payments: &[Payment]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for payment in payments {
        *totals
            .entry(payment.area.clone())
            .or_insert(Decimal::ZERO) += payment.amount;
    }
    totals
}
