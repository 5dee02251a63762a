use super::*;
use crate::customers::Customer;
use rust_decimal_macros::dec;

fn roster() -> Vec<Customer> {
    vec![
        Customer {
            id: "cust-1".to_string(),
            serial_number: "S001".to_string(),
            name: "Ravi Kumar".to_string(),
            area: "North Market".to_string(),
            ..Default::default()
        },
        Customer {
            id: "cust-2".to_string(),
            serial_number: "S002".to_string(),
            name: "Lakshmi Devi".to_string(),
            ..Default::default()
        },
    ]
}

#[test]
fn test_valid_entry_resolves_customer() {
    let entry = PaymentBatchEntry::new("S001", "ravi kumar", dec!(500), "Suresh");
    let validated = validate_payment_entry(&entry, &roster());

    assert!(validated.is_valid);
    assert!(validated.error.is_none());
    let customer = validated.customer.expect("customer resolved");
    assert_eq!(customer.id, "cust-1");
    assert_eq!(validated.amount, dec!(500));
}

#[test]
fn test_unknown_serial_is_invalid() {
    let entry = PaymentBatchEntry::new("S999", "Ravi Kumar", dec!(500), "Suresh");
    let validated = validate_payment_entry(&entry, &roster());

    assert!(!validated.is_valid);
    assert_eq!(validated.error.as_deref(), Some(CUSTOMER_NOT_FOUND));
    assert!(validated.customer.is_none());
}

#[test]
fn test_each_malformed_entry_is_rejected_with_message() {
    let cases = vec![
        PaymentBatchEntry::new("S999", "Ravi Kumar", dec!(500), "Suresh"),
        PaymentBatchEntry::new("S001", "   ", dec!(500), "Suresh"),
        PaymentBatchEntry::new("S001", "Ravi Kumar", dec!(0), "Suresh"),
        PaymentBatchEntry::new("S001", "Ravi Kumar", dec!(-10), "Suresh"),
        PaymentBatchEntry::new("S001", "Ravi Kumar", dec!(500), ""),
        PaymentBatchEntry::new("S001", "Lakshmi Devi", dec!(500), "Suresh"),
    ];

    for entry in cases {
        let validated = validate_payment_entry(&entry, &roster());
        assert!(!validated.is_valid, "entry {:?} should be invalid", entry);
        assert!(
            validated.error.as_deref().is_some_and(|e| !e.is_empty()),
            "entry {:?} should carry an error",
            entry
        );
    }
}

#[test]
fn test_multiple_errors_are_joined_in_check_order() {
    let entry = PaymentBatchEntry::new("S999", "Ravi Kumar", dec!(0), "");
    let validated = validate_payment_entry(&entry, &roster());

    assert!(!validated.is_valid);
    assert_eq!(
        validated.error.as_deref(),
        Some("Customer not found, Amount must be greater than zero, Agent name is required")
    );
}

#[test]
fn test_name_mismatch_reported_last() {
    let entry = PaymentBatchEntry::new("S002", "Ravi Kumar", dec!(-1), "Suresh");
    let validated = validate_payment_entry(&entry, &roster());

    assert_eq!(
        validated.error.as_deref(),
        Some("Amount must be greater than zero, Name does not match customer record")
    );
    // customer is still resolved so the UI can show who the serial belongs to
    assert_eq!(validated.customer.map(|c| c.id), Some("cust-2".to_string()));
}

#[test]
fn test_empty_name_does_not_also_report_mismatch() {
    let entry = PaymentBatchEntry::new("S001", "", dec!(100), "Suresh");
    let validated = validate_payment_entry(&entry, &roster());
    assert_eq!(validated.error.as_deref(), Some(CUSTOMER_NAME_REQUIRED));
}

#[test]
fn test_duplicate_serial_in_roster_is_ambiguous() {
    let mut customers = roster();
    customers.push(Customer {
        id: "cust-3".to_string(),
        serial_number: "S001".to_string(),
        name: "Ravi Kumar".to_string(),
        ..Default::default()
    });

    let entry = PaymentBatchEntry::new("S001", "Ravi Kumar", dec!(100), "Suresh");
    let validated = validate_payment_entry(&entry, &customers);

    assert!(!validated.is_valid);
    assert_eq!(validated.error.as_deref(), Some(AMBIGUOUS_SERIAL_NUMBER));
    assert!(validated.customer.is_none());
}

#[test]
fn test_revalidation_clears_previous_outcome() {
    let mut entry = PaymentBatchEntry::new("S001", "Ravi Kumar", dec!(100), "Suresh");
    entry.is_valid = false;
    entry.error = Some("stale".to_string());

    let validated = validate_payment_entry(&entry, &roster());
    assert!(validated.is_valid);
    assert!(validated.error.is_none());
}

#[test]
fn test_validate_entries_preserves_order() {
    let entries = vec![
        PaymentBatchEntry::new("S002", "Lakshmi Devi", dec!(100), "Suresh"),
        PaymentBatchEntry::new("S404", "Nobody", dec!(100), "Suresh"),
        PaymentBatchEntry::new("S001", "Ravi Kumar", dec!(100), "Suresh"),
    ];
    let validated = validate_payment_entries(&entries, &roster());

    let serials: Vec<&str> = validated.iter().map(|e| e.serial_number.as_str()).collect();
    assert_eq!(serials, vec!["S002", "S404", "S001"]);
    let flags: Vec<bool> = validated.iter().map(|e| e.is_valid).collect();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn test_empty_roster_rejects_everything() {
    let entry = PaymentBatchEntry::new("S001", "Ravi Kumar", dec!(100), "Suresh");
    let validated = validate_payment_entry(&entry, &[]);
    assert!(!validated.is_valid);
}
