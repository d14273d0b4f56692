//! Storage layer tests for the eggledger server.

#![allow(clippy::unwrap_used)]

use super::db::Database;
use super::models::{FarmNumber, Role};

async fn test_db() -> Database {
    Database::open_in_memory().await.unwrap()
}

// === User tests ===

#[tokio::test]
async fn create_and_get_user() {
    let db = test_db().await;
    let user = db
        .create_user("alice", "hash123", "Alice", "Anderson", Role::Admin)
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.firstname, "Alice");
    assert_eq!(user.role, Role::Admin);

    assert!(db.get_user("bob").await.is_err());
}

#[tokio::test]
async fn duplicate_username_rejected() {
    let db = test_db().await;
    db.create_user("alice", "hash1", "Alice", "Anderson", Role::Admin)
        .await
        .unwrap();

    let second = db
        .create_user("alice", "hash2", "Other", "Person", Role::Watcher)
        .await;
    assert!(second.is_err());

    // The store retains exactly one record for the username.
    let users = db.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].firstname, "Alice");
}

#[tokio::test]
async fn list_users_by_role() {
    let db = test_db().await;
    db.create_user("alice", "h", "Alice", "A", Role::Admin)
        .await
        .unwrap();
    db.create_user("bob", "h", "Bob", "B", Role::Watcher)
        .await
        .unwrap();
    db.create_user("carol", "h", "Carol", "C", Role::Admin)
        .await
        .unwrap();

    let admins = db.list_users_by_role(Role::Admin).await.unwrap();
    assert_eq!(admins.len(), 2);
    assert!(admins.iter().all(|u| u.role == Role::Admin));

    let watchers = db.list_users_by_role(Role::Watcher).await.unwrap();
    assert_eq!(watchers.len(), 1);
    assert_eq!(watchers[0].username, "bob");
}

#[tokio::test]
async fn delete_user() {
    let db = test_db().await;
    db.create_user("alice", "h", "Alice", "A", Role::Admin)
        .await
        .unwrap();

    assert!(db.delete_user("alice").await.unwrap());
    assert!(!db.delete_user("alice").await.unwrap());
    assert!(db.get_user("alice").await.is_err());
}

// === Farm record tests ===

#[tokio::test]
async fn create_and_list_records_per_farm() {
    let db = test_db().await;
    let record = db
        .create_record("r1", FarmNumber::Two, 300, 10, 1, "2024-01-01")
        .await
        .unwrap();

    assert_eq!(record.farm_number, 2);
    assert_eq!(record.eggs, 300);
    assert!(record.updated_at.is_none());

    let farm2 = db.list_records(FarmNumber::Two).await.unwrap();
    assert_eq!(farm2.len(), 1);
    assert_eq!(farm2[0].id, "r1");

    // Records do not leak across farms.
    let farm1 = db.list_records(FarmNumber::One).await.unwrap();
    assert!(farm1.is_empty());
}

#[tokio::test]
async fn list_records_newest_first() {
    let db = test_db().await;
    db.create_record("r1", FarmNumber::One, 100, 3, 0, "2024-01-01")
        .await
        .unwrap();
    db.create_record("r2", FarmNumber::One, 200, 6, 0, "2024-01-02")
        .await
        .unwrap();
    db.create_record("r3", FarmNumber::One, 300, 10, 1, "2024-01-03")
        .await
        .unwrap();

    let records = db.list_records(FarmNumber::One).await.unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r3", "r2", "r1"]);
}

#[tokio::test]
async fn duplicate_date_entries_permitted() {
    let db = test_db().await;
    db.create_record("r1", FarmNumber::Three, 100, 3, 0, "2024-01-01")
        .await
        .unwrap();
    db.create_record("r2", FarmNumber::Three, 50, 2, 0, "2024-01-01")
        .await
        .unwrap();

    assert_eq!(db.count_records(FarmNumber::Three).await.unwrap(), 2);
}

#[tokio::test]
async fn update_record_stamps_updated_at() {
    let db = test_db().await;
    db.create_record("r1", FarmNumber::One, 100, 3, 0, "2024-01-01")
        .await
        .unwrap();

    let updated = db.update_record("r1", 150, 5, 1).await.unwrap();
    assert_eq!(updated.eggs, 150);
    assert_eq!(updated.flats, 5);
    assert_eq!(updated.packets, 1);
    assert!(updated.updated_at.is_some());
    // Date and farm are immutable through update.
    assert_eq!(updated.date, "2024-01-01");
    assert_eq!(updated.farm_number, 1);
}

#[tokio::test]
async fn update_missing_record_not_found() {
    let db = test_db().await;
    assert!(db.update_record("nope", 1, 1, 1).await.is_err());
}

#[tokio::test]
async fn delete_record() {
    let db = test_db().await;
    db.create_record("r1", FarmNumber::Four, 100, 3, 0, "2024-01-01")
        .await
        .unwrap();

    assert!(db.delete_record("r1").await.unwrap());
    assert!(!db.delete_record("r1").await.unwrap());
    assert_eq!(db.count_records(FarmNumber::Four).await.unwrap(), 0);
}

// === Settings tests ===

#[tokio::test]
async fn settings_roundtrip_and_replace() {
    let db = test_db().await;

    assert!(db.get_settings("alice").await.unwrap().is_none());

    db.put_settings("alice", r#"{"calculation":{"eggsPerFlat":30}}"#)
        .await
        .unwrap();
    let row = db.get_settings("alice").await.unwrap().unwrap();
    assert_eq!(row.payload, r#"{"calculation":{"eggsPerFlat":30}}"#);

    // A second save replaces the payload wholesale; nothing is merged.
    db.put_settings("alice", r#"{"farms":{"active":{"farm1":false}}}"#)
        .await
        .unwrap();
    let row = db.get_settings("alice").await.unwrap().unwrap();
    assert_eq!(row.payload, r#"{"farms":{"active":{"farm1":false}}}"#);
}

#[tokio::test]
async fn settings_are_per_user() {
    let db = test_db().await;
    db.put_settings("alice", r#"{"a":1}"#).await.unwrap();
    db.put_settings("bob", r#"{"b":2}"#).await.unwrap();

    assert_eq!(
        db.get_settings("alice").await.unwrap().unwrap().payload,
        r#"{"a":1}"#
    );
    assert_eq!(
        db.get_settings("bob").await.unwrap().unwrap().payload,
        r#"{"b":2}"#
    );
}
