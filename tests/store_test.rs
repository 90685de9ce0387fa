use std::fs;
use tempfile::TempDir;
use wordbook::store::{ErrorLog, History, StoreError, WordStore};

#[test]
fn test_open_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dictionary.txt");

    let store = WordStore::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_open_keeps_existing_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "ephemeral\n").unwrap();

    let store = WordStore::open(&path).unwrap();
    assert_eq!(store.load().unwrap(), vec!["ephemeral"]);
}

#[test]
fn test_open_reports_failing_path() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let path = blocker.join("dictionary.txt");

    let err = WordStore::open(&path).unwrap_err();

    let StoreError::Io { action, path: failed, .. } = &err;
    assert_eq!(*action, "create directory for");
    assert_eq!(failed, &path);
    assert!(err.to_string().starts_with("failed to create directory for "));
    assert!(err.to_string().contains("dictionary.txt"));
}

#[test]
fn test_add_to_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    let store = WordStore::open(&path).unwrap();

    store.append("serendipity").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "serendipity\n");
    assert_eq!(store.load().unwrap(), vec!["serendipity"]);
}

#[test]
fn test_duplicates_and_order_preserved() {
    let dir = TempDir::new().unwrap();
    let store = WordStore::open(dir.path().join("dictionary.txt")).unwrap();

    for word in ["zephyr", "apple", "zephyr"] {
        store.append(word).unwrap();
    }

    assert_eq!(store.load().unwrap(), vec!["zephyr", "apple", "zephyr"]);
}

#[test]
fn test_load_trims_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, "  padded  \r\nplain\n\nlast").unwrap();

    let store = WordStore::open(&path).unwrap();
    assert_eq!(store.load().unwrap(), vec!["padded", "plain", "", "last"]);
}

#[test]
fn test_error_log_one_line_per_entry() {
    let dir = TempDir::new().unwrap();
    let log = ErrorLog::open(dir.path().join("error_log.txt")).unwrap();

    log.record("HTTP 503 Service Unavailable for https://example.com/browse/word")
        .unwrap();
    log.record("first line\nsecond line").unwrap();

    let content = fs::read_to_string(log.path()).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert_eq!(
        log.entries().unwrap(),
        vec![
            "HTTP 503 Service Unavailable for https://example.com/browse/word",
            "first line second line",
        ]
    );
}

#[test]
fn test_history_is_ordered_and_allows_duplicates() {
    let mut history = History::new();
    assert!(history.is_empty());

    history.push("alpha");
    history.push("beta");
    history.push("alpha");

    assert_eq!(history.len(), 3);
    assert_eq!(history.entries(), ["alpha", "beta", "alpha"]);
}
