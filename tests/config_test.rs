use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wordbook::config::{Config, DEFAULT_BASE_URL, DEFAULT_ERROR_LOG_FILE, DEFAULT_WORD_LIST_FILE};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wordbook").join("config.toml");

    let config = Config {
        timeout_secs: 7,
        data_dir: Some(PathBuf::from("/tmp/wordbook-data")),
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "base_url = \"https://example.org/define/\"\n\n[theme]\nmode_add = \"#00FF00\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.base_url, "https://example.org/define/");
    assert_eq!(config.theme.mode_add, "#00FF00");
    assert_eq!(config.word_list_file, DEFAULT_WORD_LIST_FILE);
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "timeout_secs = \"soon\"").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_data_paths_follow_data_dir() {
    let config = Config {
        data_dir: Some(PathBuf::from("/srv/words")),
        ..Config::default()
    };

    assert_eq!(
        config.word_list_path(),
        PathBuf::from("/srv/words").join(DEFAULT_WORD_LIST_FILE)
    );
    assert_eq!(
        config.error_log_path(),
        PathBuf::from("/srv/words").join(DEFAULT_ERROR_LOG_FILE)
    );
}
