use rust_decimal::Decimal;

use super::batch_model::PaymentBatchEntry;
use crate::constants::VALIDATION_ERROR_SEPARATOR;
use crate::customers::{find_by_serial_number, Customer};

pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const AMBIGUOUS_SERIAL_NUMBER: &str = "Multiple customers share this serial number";
pub const CUSTOMER_NAME_REQUIRED: &str = "Customer name is required";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than zero";
pub const AGENT_NAME_REQUIRED: &str = "Agent name is required";
pub const NAME_MISMATCH: &str = "Name does not match customer record";

/// Validates one batch entry against the customer roster.
///
/// Checks run in a fixed order and every failing check contributes a message:
/// customer resolution, claimed name, amount, agent name, then name match
/// (only when exactly one customer was resolved and a name was given).
/// Never panics.
pub fn validate_payment_entry(entry: &PaymentBatchEntry, customers: &[Customer]) -> PaymentBatchEntry {
    let matches = find_by_serial_number(customers, &entry.serial_number);
    let customer = match matches.as_slice() {
        [only] => Some((*only).clone()),
        _ => None,
    };

    let mut errors: Vec<&str> = Vec::new();
    match matches.len() {
        0 => errors.push(CUSTOMER_NOT_FOUND),
        1 => {}
        _ => errors.push(AMBIGUOUS_SERIAL_NUMBER),
    }
    if entry.customer_name.trim().is_empty() {
        errors.push(CUSTOMER_NAME_REQUIRED);
    }
    if entry.amount <= Decimal::ZERO {
        errors.push(AMOUNT_NOT_POSITIVE);
    }
    if entry.agent_name.trim().is_empty() {
        errors.push(AGENT_NAME_REQUIRED);
    }
    if let Some(ref resolved) = customer {
        // an empty name is already reported above
        if !entry.customer_name.trim().is_empty() && !resolved.name_matches(&entry.customer_name) {
            errors.push(NAME_MISMATCH);
        }
    }

    PaymentBatchEntry {
        is_valid: errors.is_empty(),
        error: if errors.is_empty() {
            None
        } else {
            Some(errors.join(VALIDATION_ERROR_SEPARATOR))
        },
        customer,
        ..entry.clone()
    }
}

/// Validates every entry, preserving input order.
pub fn validate_payment_entries(
    entries: &[PaymentBatchEntry],
    customers: &[Customer],
) -> Vec<PaymentBatchEntry> {
    entries
        .iter()
        .map(|entry| validate_payment_entry(entry, customers))
        .collect()
}
