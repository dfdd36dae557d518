extern crate alloc;

use alloc::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rf_reflect::derive::Reflect;
use rf_reflect::diag::{FailureKind, Level, Recorder};
use rf_reflect::text::WideString;
use rf_store::{FileStore, MissingPathError};

#[derive(Reflect, Default, Debug, PartialEq)]
struct Config {
    enabled: bool,
    count: i32,
    name: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Scene {
    title: WideString,
    origin: Point,
    path: Vec<Point>,
    weights: BTreeMap<WideString, i64>,
}

fn recording_store() -> FileStore<Recorder> {
    FileStore::with_diagnostics(Recorder::new())
}

#[test]
fn create_on_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let store = recording_store();

    let config: Config = store.load_or_create(Some(&path)).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n    \"enabled\": false,\n    \"count\": 0,\n    \"name\": \"\"\n}"
    );
    assert!(store.diagnostics().contains(Level::Info, "Serialized"));
    assert_eq!(store.diagnostics().count(Level::Error), 0);
}

#[test]
fn missing_file_without_create() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let store = recording_store();

    let config: Config = store.load(Some(&path), false).unwrap();

    assert_eq!(config, Config::default());
    assert!(!path.exists());
    assert!(store.diagnostics().contains(Level::Error, "does not exist"));
}

#[test]
fn partial_apply_then_abort() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, r#"{ "enabled": true, "count": "five" }"#).unwrap();
    let store = recording_store();

    let config: Config = store.load_or_create(Some(&path)).unwrap();

    assert!(config.enabled);
    assert_eq!(config.count, 0);
    assert_eq!(config.name, "");

    let recorder = store.diagnostics();
    assert_eq!(recorder.count(Level::Error), 1);
    let entries = recorder.log_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, FailureKind::Decode);
    assert!(entries[0].detail.contains("$.count"));
    assert_eq!(entries[0].file, path.display().to_string());
}

#[test]
fn parse_failure_returns_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, r#"{ "enabled": tru"#).unwrap();
    let store = recording_store();

    let config: Config = store.load_or_create(Some(&path)).unwrap();

    assert_eq!(config, Config::default());
    let entries = store.diagnostics().log_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, FailureKind::Parse);
    assert!(store.diagnostics().contains(Level::Error, "could not be parsed"));
    // the broken file is left alone
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{ "enabled": tru"#);
}

#[test]
fn invalid_utf8_is_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, b"{ \"name\": \"\xff\" }").unwrap();
    let store = recording_store();

    let config: Config = store.load_or_create(Some(&path)).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(store.diagnostics().log_entries()[0].kind, FailureKind::Parse);
}

#[test]
fn missing_path_is_fatal() {
    let store = recording_store();

    let err = store.load_or_create::<Config>(None).unwrap_err();
    assert!(err.type_name.ends_with("Config"));

    let err = store.save(&Config::default(), Some(Path::new(""))).unwrap_err();
    assert!(matches!(err, MissingPathError { .. }));
    assert_eq!(store.diagnostics().count(Level::Error), 2);
}

#[test]
fn save_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("cfg.json");
    let store = recording_store();

    let config = Config {
        enabled: true,
        count: -7,
        name: "tester".to_owned(),
    };
    store.save(&config, Some(&path)).unwrap();

    assert!(path.is_file());
    let loaded: Config = store.load(Some(&path), false).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn unwritable_directory_is_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("sub").join("cfg.json");
    let store = recording_store();

    store.save(&Config::default(), Some(&path)).unwrap();

    assert!(!path.exists());
    assert!(store.diagnostics().contains(Level::Warn, "Unable to create directories"));
    assert_eq!(store.diagnostics().count(Level::Info), 0);
}

#[test]
fn directory_in_place_of_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = recording_store();

    store.save(&Config::default(), Some(dir.path())).unwrap();
    assert!(store.diagnostics().contains(Level::Warn, "for writing"));

    let config: Config = store.load_or_create(Some(dir.path())).unwrap();
    assert_eq!(config, Config::default());
    assert!(store.diagnostics().contains(Level::Warn, "for reading"));
}

#[test]
fn save_overwrites_and_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let store = recording_store();

    fs::write(&path, "a much longer previous content that must be truncated").unwrap();
    let config = Config {
        enabled: true,
        count: 2,
        name: "x".to_owned(),
    };
    store.save(&config, Some(&path)).unwrap();
    let first = fs::read(&path).unwrap();
    store.save(&config, Some(&path)).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.load::<Config>(Some(&path), false).unwrap(), config);
}

#[test]
fn nested_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let store = recording_store();

    let mut weights = BTreeMap::new();
    weights.insert(WideString::from("a"), 1);
    weights.insert(WideString::from("b"), 2);
    let scene = Scene {
        title: WideString::from("Ünïcödé"),
        origin: Point { x: 1.5, y: -2.25 },
        path: vec![Point { x: 0.0, y: 1.0 }, Point { x: 0.1, y: 3.0 }],
        weights,
    };

    store.save(&scene, Some(&path)).unwrap();
    let loaded: Scene = store.load(Some(&path), false).unwrap();

    assert_eq!(loaded, scene);
    assert_eq!(store.diagnostics().count(Level::Warn), 0);
    assert_eq!(store.diagnostics().count(Level::Error), 0);
}

#[test]
fn free_functions_use_the_log_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");

    let config = Config {
        enabled: true,
        count: 1,
        name: "free".to_owned(),
    };
    rf_store::save(&config, Some(&path)).unwrap();

    let loaded: Config = rf_store::load(Some(&path), false).unwrap();
    assert_eq!(loaded, config);
    let again: Config = rf_store::load_or_create(Some(&path)).unwrap();
    assert_eq!(again, config);
}
