use small_lookup::config::store_file::{DEFAULT_DSN, DSN_ENV_VAR};
use small_lookup::{resolve, try_resolve, FileStore, LookupError, StoreFile, SENTINEL};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_store(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_resolve_from_file_store() {
    let file = write_store(
        r#"
[store]
name = "users"

[values]
Tom = 100
"#,
    );

    let store = FileStore::open(file.path()).unwrap();

    assert_eq!(store.name(), "users");
    assert_eq!(resolve(&store, "Tom"), 100);
    assert_eq!(resolve(&store, "anything"), SENTINEL);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        FileStore::open(&missing),
        Err(LookupError::IoError(_))
    ));
}

#[test]
fn test_non_integer_value_is_rejected() {
    let file = write_store("[values]\nTom = \"a hundred\"\n");

    assert!(matches!(
        FileStore::open(file.path()),
        Err(LookupError::TomlError(_))
    ));
}

#[test]
fn test_dsn_fallbacks() {
    let explicit = StoreFile::from_toml_str("[store]\ndsn = \"mysql://db\"\n").unwrap();
    assert_eq!(explicit.dsn(), "mysql://db");

    let implicit = StoreFile::from_toml_str("").unwrap();

    std::env::set_var(DSN_ENV_VAR, "root:secret@tcp(db:3306)/");
    assert_eq!(implicit.dsn(), "root:secret@tcp(db:3306)/");

    std::env::remove_var(DSN_ENV_VAR);
    assert_eq!(implicit.dsn(), DEFAULT_DSN);
}

#[test]
fn test_try_resolve_reports_missing_key() {
    let file = write_store("[values]\nTom = 100\n");
    let store = FileStore::open(file.path()).unwrap();

    match try_resolve(&store, "Jerry") {
        Err(LookupError::NotFound { key }) => assert_eq!(key, "Jerry"),
        other => panic!("unexpected result: {:?}", other),
    }
}
