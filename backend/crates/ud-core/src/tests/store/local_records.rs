use crate::tests::local_user;
use crate::{KeyValueStore, LOCAL_USERS_KEY, LocalRecords, MemoryStore};

#[test]
fn test_decode_blank_is_empty() {
    assert!(LocalRecords::decode("").unwrap().is_empty());
    assert!(LocalRecords::decode("   \n").unwrap().is_empty());
    assert!(LocalRecords::decode("[]").unwrap().is_empty());
}

#[test]
fn test_decode_malformed_is_error() {
    assert!(LocalRecords::decode("{\"id\":").is_err());
    assert!(LocalRecords::decode("{\"id\": 1}").is_err());
}

#[test]
fn test_load_swallows_malformed_data() {
    let store = MemoryStore::with_entry(LOCAL_USERS_KEY, "not json at all");

    assert!(LocalRecords::load(&store).is_empty());
}

#[test]
fn test_prepend_writes_newest_first() {
    let mut store = MemoryStore::new();
    let first = local_user(1, "First", "first@x.io");
    let second = local_user(2, "Second", "second@x.io");

    LocalRecords::prepend(&mut store, &first).unwrap();
    LocalRecords::prepend(&mut store, &second).unwrap();

    assert_eq!(LocalRecords::load(&store), vec![second, first]);
}

#[test]
fn test_prepend_reads_fresh_from_store() {
    let mut store = MemoryStore::new();
    let written_elsewhere = local_user(5, "Elsewhere", "else@x.io");
    store
        .set(
            LOCAL_USERS_KEY,
            &serde_json::to_string(&vec![written_elsewhere.clone()]).unwrap(),
        )
        .unwrap();
    let mine = local_user(6, "Mine", "mine@x.io");

    LocalRecords::prepend(&mut store, &mine).unwrap();

    assert_eq!(LocalRecords::load(&store), vec![mine, written_elsewhere]);
}
