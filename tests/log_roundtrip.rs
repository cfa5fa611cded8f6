use chrono::{TimeZone, Utc};
use std::fs;
use stockroom::error::StockroomError;
use stockroom::model::InventoryItem;
use stockroom::store::{LoadOutcome, PersistentLog};
use tempfile::TempDir;

fn item(id: i32, name: &str, quantity: i32) -> InventoryItem {
    let added = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
    InventoryItem::new(id, name, quantity, added).unwrap()
}

#[test]
fn three_items_round_trip_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut log = PersistentLog::new(&path).unwrap();
    log.add(item(1, "A", 10));
    log.add(item(2, "B", 25));
    log.add(item(3, "C", 10));
    log.save_to_file().unwrap();

    let mut fresh: PersistentLog<InventoryItem> = PersistentLog::new(&path).unwrap();
    assert_eq!(fresh.load_from_file().unwrap(), LoadOutcome::Loaded(3));
    assert_eq!(
        fresh.get_all(),
        vec![item(1, "A", 10), item(2, "B", 25), item(3, "C", 10)]
    );
}

#[test]
fn never_saved_location_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let mut log: PersistentLog<InventoryItem> =
        PersistentLog::new(dir.path().join("inventory.json")).unwrap();

    assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Missing);
    assert!(log.get_all().is_empty());
}

#[test]
fn corrupted_file_is_reported_and_state_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut log = PersistentLog::new(&path).unwrap();
    log.add(item(1, "A", 10));
    log.save_to_file().unwrap();
    assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Loaded(1));

    fs::write(&path, "{ this is not json").unwrap();
    log.add(item(2, "B", 25));
    let before = log.get_all();

    let err = log.load_from_file().unwrap_err();
    assert!(matches!(err, StockroomError::Deserialization(_)));
    assert_eq!(log.get_all(), before);

    // A failed load is safe to retry once the file is fixed.
    log.save_to_file().unwrap();
    assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Loaded(2));
}

#[test]
fn successful_load_replaces_rather_than_merges() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut writer = PersistentLog::new(&path).unwrap();
    writer.add(item(1, "A", 10));
    writer.save_to_file().unwrap();

    let mut reader = PersistentLog::new(&path).unwrap();
    reader.add(item(7, "Local only", 1));
    reader.add(item(8, "Local too", 2));
    reader.load_from_file().unwrap();

    assert_eq!(reader.get_all(), vec![item(1, "A", 10)]);
}
