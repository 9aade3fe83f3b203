use roster::model::{Record, RecordPatch};
use roster::store::backend::StorageBackend;
use roster::store::fs::FileStore;
use roster::store::fs_backend::FsBackend;
use roster::store::{DataStore, RECORDS_KEY};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_get_and_set() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get("missing").unwrap(), None);

    backend.set("greeting", "[1,2,3]").unwrap();
    assert_eq!(backend.get("greeting").unwrap(), Some("[1,2,3]".to_string()));

    backend.set("greeting", "[]").unwrap();
    assert_eq!(backend.get("greeting").unwrap(), Some("[]".to_string()));
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.set(RECORDS_KEY, "[]").unwrap();
    assert!(root.join("crud_items.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.set(RECORDS_KEY, "[]").unwrap();

    let on_disk = fs::read_to_string(backend.key_path(RECORDS_KEY)).unwrap();
    assert_eq!(on_disk, "[]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());

    let ann = Record::new("Ann".into(), "ann@x.com".into(), "Admin".into());
    let bob = Record::new("Bob".into(), "bob@x.com".into(), "Member".into());
    store.insert_record(ann.clone()).unwrap();
    store.insert_record(bob.clone()).unwrap();
    store
        .update_record(&bob.id, &RecordPatch::new().with_role("Owner"))
        .unwrap();
    store.remove_record(&ann.id).unwrap();

    let reopened = FileStore::new(dir.path().to_path_buf());
    assert_eq!(reopened.records().len(), 1);
    let saved = &reopened.records()[0];
    assert_eq!(saved.id, bob.id);
    assert_eq!(saved.role, "Owner");
    assert_eq!(saved.created_at, bob.created_at);
}

#[test]
fn test_file_store_on_disk_format() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());
    let ann = Record::new("Ann".into(), "ann@x.com".into(), "Admin".into());
    store.insert_record(ann.clone()).unwrap();

    let raw = fs::read_to_string(dir.path().join("crud_items.json")).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], Value::String(ann.id.to_string()));
    assert_eq!(items[0]["name"], "Ann");
    assert_eq!(items[0]["email"], "ann@x.com");
    assert_eq!(items[0]["role"], "Admin");
    assert!(items[0]["createdAt"].is_string());
}

#[test]
fn test_file_store_reads_browser_style_timestamps() {
    let (dir, backend) = setup();
    backend
        .set(
            RECORDS_KEY,
            r#"[{"id":"6f1c2a7e-0f6a-4d39-9d55-3f1f4f1d2a10","name":"Ann","email":"ann@x.com","role":"Admin","createdAt":"2024-03-01T12:30:00.000Z"}]"#,
        )
        .unwrap();

    let store = FileStore::new(dir.path().to_path_buf());
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].name, "Ann");
}

#[test]
fn test_file_store_malformed_data_starts_empty() {
    let (dir, backend) = setup();
    backend.set(RECORDS_KEY, "{not json").unwrap();

    let mut store = FileStore::new(dir.path().to_path_buf());
    assert!(store.records().is_empty());

    // The next write replaces the malformed content.
    store
        .insert_record(Record::new("Ann".into(), "ann@x.com".into(), "Admin".into()))
        .unwrap();
    let reopened = FileStore::new(dir.path().to_path_buf());
    assert_eq!(reopened.records().len(), 1);
}

#[test]
fn test_file_store_non_array_data_starts_empty() {
    let (dir, backend) = setup();
    backend.set(RECORDS_KEY, r#"{"items": []}"#).unwrap();

    let store = FileStore::new(dir.path().to_path_buf());
    assert!(store.records().is_empty());
}
