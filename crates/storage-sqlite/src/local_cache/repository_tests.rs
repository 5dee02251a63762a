use super::*;
use crate::db::{create_pool, prepare_database, run_migrations, spawn_writer};
use chrono::{NaiveDate, TimeZone, Utc};
use collectify_core::customers::{Area, CollectionType, Customer};
use collectify_core::payments::Payment;
use collectify_core::sync::LocalDataBundle;
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn setup() -> (TempDir, LocalCacheRepository) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("app.db");
    let db_path = db_path.to_str().unwrap();
    prepare_database(db_path).unwrap();
    let pool = create_pool(db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());
    (dir, LocalCacheRepository::new(pool, writer))
}

fn customer(id: &str, serial: &str) -> Customer {
    Customer {
        id: id.to_string(),
        serial_number: serial.to_string(),
        name: format!("Customer {}", serial),
        area: "North".to_string(),
        loan_amount: dec!(10000),
        installment_amount: dec!(250.50),
        ..Default::default()
    }
}

fn payment(id: &str) -> Payment {
    Payment {
        id: id.to_string(),
        customer_id: "cust-1".to_string(),
        customer_name: "Customer S001".to_string(),
        serial_number: "S001".to_string(),
        amount: dec!(250.50),
        date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        area: "North".to_string(),
        collection_type: CollectionType::Weekly,
        payment_method: Default::default(),
        agent_name: "Suresh".to_string(),
        notes: Some("Batch payment collected by Suresh".to_string()),
        receipt_number: Some("BATCH-1717400000000-S001".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 6, 3, 8, 30, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_missing_collections_load_as_none() {
    let (_dir, repo) = setup();

    assert!(repo.load_customers("user-1").await.unwrap().is_none());
    assert!(repo.load_payments("user-1").await.unwrap().is_none());
    assert!(repo.load_areas("user-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_saved_collections_round_trip() {
    let (_dir, repo) = setup();

    repo.save_customers("user-1", &[customer("c1", "S001"), customer("c2", "S002")])
        .await
        .unwrap();
    repo.save_payments("user-1", &[payment("p1")]).await.unwrap();

    let customers = repo.load_customers("user-1").await.unwrap().unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[1].serial_number, "S002");
    assert_eq!(customers[0].installment_amount, dec!(250.50));

    let payments = repo.load_payments("user-1").await.unwrap().unwrap();
    assert_eq!(payments[0], payment("p1"));

    // never written
    assert!(repo.load_areas("user-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_replaces_previous_snapshot() {
    let (_dir, repo) = setup();

    repo.save_customers("user-1", &[customer("c1", "S001")])
        .await
        .unwrap();
    repo.save_customers("user-1", &[]).await.unwrap();

    let customers = repo.load_customers("user-1").await.unwrap().unwrap();
    assert!(customers.is_empty());
}

#[tokio::test]
async fn test_clear_only_affects_one_user() {
    let (_dir, repo) = setup();
    let areas = vec![Area {
        id: "area-1".to_string(),
        name: "North".to_string(),
        ..Default::default()
    }];
    repo.save_areas("user-1", &areas).await.unwrap();
    repo.save_areas("user-2", &areas).await.unwrap();

    repo.clear_user_data("user-1").await.unwrap();

    assert!(repo.load_areas("user-1").await.unwrap().is_none());
    assert_eq!(repo.load_areas("user-2").await.unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_bundle_writes_every_collection() {
    let (_dir, repo) = setup();
    let bundle = LocalDataBundle {
        customers: vec![customer("c1", "S001")],
        payments: vec![payment("p1"), payment("p2")],
        areas: vec![],
    };

    repo.save_bundle("user-1", &bundle).await.unwrap();

    assert_eq!(repo.load_customers("user-1").await.unwrap().unwrap().len(), 1);
    assert_eq!(repo.load_payments("user-1").await.unwrap().unwrap().len(), 2);
    assert_eq!(repo.load_areas("user-1").await.unwrap(), Some(vec![]));
}
