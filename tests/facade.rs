use std::fs;

use rf_core::reflect::derive::Reflect;
use rf_core::reflect::diag::{Level, Recorder};
use rf_core::reflect::info::{Kind, ScalarKind};
use rf_core::reflect::{Classify, Reflectable};
use rf_core::store::FileStore;

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(file = "settings.json")]
struct Settings {
    fullscreen: bool,
    width: u32,
    height: u32,
    #[reflect(skip)]
    session: u64,
}

#[test]
fn derive_through_the_facade() {
    let info = Settings::struct_info();
    assert_eq!(info.field_names(), ["fullscreen", "width", "height", "session"]);
    assert_eq!(info.file(), Some("settings.json"));
    assert_eq!(Settings::KIND, Kind::Composite);
    assert_eq!(
        info.field("width").map(|field| field.kind()),
        Some(Kind::Scalar(ScalarKind::Int32))
    );
}

#[test]
fn store_through_the_facade() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let store = FileStore::with_diagnostics(Recorder::new());

    let settings = Settings {
        fullscreen: true,
        width: 1920,
        height: 1080,
        session: 99,
    };
    store.save(&settings, Some(&path)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "{\n    \"fullscreen\": true,\n    \"width\": 1920,\n    \"height\": 1080\n}"
    );

    let loaded: Settings = store.load(Some(&path), false).unwrap();
    assert_eq!(loaded.width, 1920);
    assert_eq!(loaded.session, 0);
    assert_eq!(store.diagnostics().count(Level::Warn), 0);
}
