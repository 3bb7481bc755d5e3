use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use telcoview_cli::services::local_store::LocalStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Blob {
    label: String,
    count: u32,
}

fn temp_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocalStore::new(dir.path()).expect("store");
    (dir, store)
}

#[test]
fn set_then_get_round_trips() {
    let (_dir, store) = temp_store();
    let blob = Blob { label: "attention".to_string(), count: 12 };

    store.set("blob", &blob).expect("set");
    let loaded: Option<Blob> = store.get("blob").expect("get");

    assert_eq!(loaded, Some(blob));
}

#[test]
fn get_missing_key_is_none() {
    let (_dir, store) = temp_store();
    let loaded: Option<Blob> = store.get("nope").expect("get");
    assert!(loaded.is_none());
}

#[test]
fn get_or_falls_back_on_missing_key() {
    let (_dir, store) = temp_store();
    let default = Blob { label: "default".to_string(), count: 0 };

    let loaded: Blob = store.get_or("nope", default.clone());
    assert_eq!(loaded, default);
}

#[test]
fn get_or_falls_back_on_corrupt_blob() {
    let (dir, store) = temp_store();
    std::fs::write(dir.path().join("bad.json"), "{not json").expect("write");

    let result: Result<Option<Blob>, _> = store.get("bad");
    assert!(result.is_err());

    let default = Blob { label: "default".to_string(), count: 0 };
    let loaded: Blob = store.get_or("bad", default.clone());
    assert_eq!(loaded, default);
}

#[test]
fn set_overwrites_wholesale() {
    let (_dir, store) = temp_store();

    store.set("blob", &Blob { label: "first".to_string(), count: 1 }).expect("set");
    store.set("blob", &Blob { label: "second".to_string(), count: 2 }).expect("set");

    let loaded: Blob = store.get("blob").expect("get").expect("some");
    assert_eq!(loaded.label, "second");
}

#[test]
fn remove_and_contains() {
    let (_dir, store) = temp_store();

    store.set("blob", &Blob { label: "x".to_string(), count: 1 }).expect("set");
    assert!(store.contains("blob"));

    store.remove("blob").expect("remove");
    assert!(!store.contains("blob"));

    // Removing an absent key is not an error.
    store.remove("blob").expect("remove again");
}

#[test]
fn clear_drops_every_key() {
    let (_dir, store) = temp_store();

    store.set("a", &1u32).expect("set");
    store.set("b", &2u32).expect("set");
    store.clear().expect("clear");

    assert!(!store.contains("a"));
    assert!(!store.contains("b"));
}
