//! Player registry loading tests.
//!
//! These tests build a portrait directory on disk and verify:
//! - Only files with the configured extension become players
//! - Players are sorted by name and numbered in that order
//! - Missing or empty directories are reported

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crew_tasks::core::{MissionConfig, PlayerId, RegistryError};
use crew_tasks::players::PlayerRegistry;

fn touch(dir: &Path, file: &str) {
    fs::write(dir.join(file), b"").expect("Should write portrait file");
}

/// Test loading portraits from a directory.
#[test]
fn test_from_dir() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let dir = temp_dir.path();
    touch(dir, "wren.png");
    touch(dir, "alba.png");
    touch(dir, "notes.txt");
    touch(dir, "moss.png.bak");
    fs::create_dir_all(dir.join("nested.png")).unwrap();

    let config = MissionConfig::new().with_players_dir(dir);
    let registry = PlayerRegistry::from_dir(&config).unwrap();

    let names: Vec<_> = registry.iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["alba", "wren"]);

    let wren = registry.get(PlayerId::new(1)).unwrap();
    assert_eq!(wren.asset, dir.join("wren.png"));
    assert_eq!(registry.unassigned_asset(), config.unassigned_asset.as_path());
}

/// Test a custom portrait extension.
#[test]
fn test_custom_extension() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    touch(temp_dir.path(), "alba.png");
    touch(temp_dir.path(), "rook.gif");

    let config = MissionConfig::new()
        .with_players_dir(temp_dir.path())
        .with_portrait_extension("gif");
    let registry = PlayerRegistry::from_dir(&config).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find_by_name("rook"), Some(PlayerId::new(0)));
}

/// Test that a directory without portraits is rejected.
#[test]
fn test_empty_dir() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    touch(temp_dir.path(), "readme.md");

    let config = MissionConfig::new().with_players_dir(temp_dir.path());
    let err = PlayerRegistry::from_dir(&config).unwrap_err();
    assert!(matches!(err, RegistryError::Empty { ref extension, .. } if extension == "png"));
}

/// Test that a missing directory surfaces the I/O error.
#[test]
fn test_missing_dir() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let dir = temp_dir.path().join("players");
    let config = MissionConfig::new().with_players_dir(&dir);

    match PlayerRegistry::from_dir(&config) {
        Err(RegistryError::Io { path, source }) => {
            assert_eq!(path, dir);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected I/O error, got {:?}", other.map(|r| r.len())),
    }
}

/// Test that an empty name list is rejected like an empty directory.
#[test]
fn test_from_names_empty() {
    let config = MissionConfig::new();
    let err = PlayerRegistry::from_names(&config, Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, RegistryError::NoPlayers));
}
