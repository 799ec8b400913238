#![cfg(feature = "cli")]

use clap::Parser;
use small_lookup::{CliConfig, LookupError};
use std::io::Write;
use tempfile::NamedTempFile;

fn store_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[store]\nname = \"cli\"\n\n[values]\nTom = 100\n")
        .unwrap();
    file
}

fn run(args: &[&str]) -> small_lookup::Result<i64> {
    let mut argv = vec!["small-lookup"];
    argv.extend_from_slice(args);
    CliConfig::try_parse_from(argv).unwrap().execute()
}

#[test]
fn test_mod_command() {
    assert_eq!(run(&["mod", "31", "9"]).unwrap(), 4);
    assert_eq!(run(&["mod", "10", "0"]).unwrap(), -1);
}

#[test]
fn test_get_command_with_store() {
    let file = store_file();
    let path = file.path().to_str().unwrap();

    assert_eq!(run(&["--store", path, "get", "Tom"]).unwrap(), 100);
    assert_eq!(run(&["--store", path, "get", "Jerry"]).unwrap(), -1);
}

#[test]
fn test_strict_get_surfaces_not_found() {
    let file = store_file();
    let path = file.path().to_str().unwrap();

    assert!(matches!(
        run(&["--strict", "--store", path, "get", "Jerry"]),
        Err(LookupError::NotFound { .. })
    ));
}

#[test]
fn test_unreadable_store_is_an_error_even_without_strict() {
    assert!(matches!(
        run(&["--store", "/definitely/not/here.toml", "get", "Tom"]),
        Err(LookupError::IoError(_))
    ));
}

#[test]
fn test_missing_operand_is_a_parse_error() {
    assert!(CliConfig::try_parse_from(["small-lookup", "mod", "1"]).is_err());
}
