use llmo::security::token_store::{TokenStore, TokenStoreError};
use tempfile::TempDir;

fn store(dir: &TempDir) -> TokenStore {
    TokenStore::at(dir.path().join("llmo").join("notebook_tokens.yaml"))
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store.save("nb1", "secret-a").unwrap();
    assert_eq!(store.load("nb1").unwrap(), "secret-a");
}

#[test]
fn first_saved_value_wins_for_duplicate_identifiers() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store.save("nb1", "first").unwrap();
    store.save("nb1", "second").unwrap();
    assert_eq!(store.load("nb1").unwrap(), "first");
}

#[test]
fn missing_store_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let err = store.load("nb1").unwrap_err();
    match &err {
        TokenStoreError::StoreNotFound { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected StoreNotFound, got {other:?}"),
    }
    assert!(err.is_not_found());
}

#[test]
fn absent_identifier_is_key_not_found() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store.save("nbX", "v").unwrap();
    let err = store.load("nbY").unwrap_err();
    assert!(matches!(err, TokenStoreError::KeyNotFound(ref id) if id == "nbY"));
    assert!(err.to_string().starts_with("key not found"));
}

#[cfg(target_os = "linux")]
#[test]
fn read_failure_during_scan_is_io_error() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    // Opening a directory succeeds on Linux; reading it fails with EISDIR.
    std::fs::create_dir_all(store.path()).unwrap();

    let err = store.load("nb1").unwrap_err();
    assert!(matches!(err, TokenStoreError::Io { .. }), "got {err:?}");
    assert!(!err.is_not_found());
}

#[test]
fn stores_are_independent_per_path() {
    let dir = TempDir::new().unwrap();
    let a = TokenStore::at(dir.path().join("a").join("tokens"));
    let b = TokenStore::at(dir.path().join("b").join("tokens"));

    a.save("nb1", "from-a").unwrap();
    b.save("nb1", "from-b").unwrap();

    assert_eq!(a.load("nb1").unwrap(), "from-a");
    assert_eq!(b.load("nb1").unwrap(), "from-b");
}
