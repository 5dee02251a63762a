use super::*;
use chrono::{TimeZone, Utc};

fn sequential_part(id: &str) -> i64 {
    id.split('_').nth(1).unwrap().parse().unwrap()
}

#[test]
fn test_payment_id_format() {
    let generator = IdGenerator::new();
    let id = generator.payment_id();
    let parts: Vec<&str> = id.split('_').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "payment");
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), 7);
    assert!(parts[2]
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn test_counter_increments_within_same_millisecond() {
    let generator = IdGenerator::new();
    let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

    let first = sequential_part(&generator.payment_id_at(at));
    let second = sequential_part(&generator.payment_id_at(at));
    let third = sequential_part(&generator.payment_id_at(at));

    assert_eq!(first, 1_700_000_000_000 * 10_000);
    assert_eq!(second, first + 1);
    assert_eq!(third, first + 2);
}

#[test]
fn test_counter_resets_on_new_millisecond() {
    let generator = IdGenerator::new();
    let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    let later = Utc.timestamp_millis_opt(1_700_000_000_001).unwrap();

    generator.payment_id_at(at);
    generator.payment_id_at(at);
    let id = generator.payment_id_at(later);

    assert_eq!(sequential_part(&id), 1_700_000_000_001 * 10_000);
}

#[test]
fn test_generators_do_not_share_counters() {
    let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    let a = IdGenerator::new();
    let b = IdGenerator::new();
    a.payment_id_at(at);
    a.payment_id_at(at);
    assert_eq!(sequential_part(&b.payment_id_at(at)), 1_700_000_000_000 * 10_000);
}

#[test]
fn test_batch_of_payment_ids_is_unique() {
    let generator = IdGenerator::new();
    let ids = generator.payment_ids(500);
    assert_eq!(ids.len(), 500);
    assert!(validate_id_uniqueness(&ids));
}

#[test]
fn test_validate_id_uniqueness_detects_duplicates() {
    let ids = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    assert!(!validate_id_uniqueness(&ids));
    assert!(validate_id_uniqueness(&[]));
}

#[test]
fn test_batch_and_device_id_formats() {
    let generator = IdGenerator::new();

    let batch = generator.batch_id();
    let parts: Vec<&str> = batch.split('_').collect();
    assert_eq!(parts[0], "batch");
    assert_eq!(parts[2].len(), 3);
    assert_eq!(parts[3].len(), 7);

    let device = generator.device_id();
    assert!(device.starts_with("device_"));
    assert_eq!(device.len(), "device_".len() + 13);
}

#[test]
fn test_receipt_number() {
    let generator = IdGenerator::new();
    let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
    assert_eq!(
        generator.receipt_number("S042", at),
        "BATCH-1700000000123-S042"
    );
}
