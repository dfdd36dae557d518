use rf_reflect::derive::Reflect;
use rf_reflect::diag::Recorder;
use rf_reflect::info::{ElementKind, KeyKind, Kind, ScalarKind};
use rf_reflect::ops::{Composite, ReflectRef, Scalar, ScalarValue};
use rf_reflect::serde::{DecodeError, populate, to_document};
use rf_reflect::text::WideString;
use rf_reflect::{Classify, Reflect, Reflectable};

#[derive(Default, Debug, PartialEq)]
struct Handle(u8);

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(file = "profiles/player.json")]
struct Player {
    r#type: String,
    level: u32,
    title: WideString,
    scores: Vec<i64>,
    tags: std::collections::HashMap<String, bool>,
    #[reflect(skip)]
    handle: Handle,
    #[reflect(readonly)]
    cached: i32,
    #[reflect(opaque)]
    extra: Handle,
    ratio: f64,
}

#[derive(Reflect, Default)]
struct Empty {}

#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
enum Difficulty {
    Easy = 0,
    #[default]
    Normal = 1,
    Hard = 2,
}

#[derive(Reflect, Default, Debug, PartialEq)]
enum Channel {
    #[default]
    Stable,
    Beta = 7,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Settings {
    level: Difficulty,
    history: Vec<Difficulty>,
    channel: Channel,
}

#[test]
fn descriptor_follows_declaration_order() {
    let info = Player::struct_info();

    assert_eq!(info.type_ident(), "Player");
    assert!(info.type_path().ends_with("::Player"));
    assert_eq!(
        info.field_names(),
        ["type", "level", "title", "scores", "tags", "handle", "cached", "extra", "ratio"]
    );
    assert_eq!(info.file(), Some("profiles/player.json"));
    assert_eq!(Player::default_file(), Some("profiles/player.json"));
    assert_eq!(info.index_of("ratio"), Some(8));
    assert!(core::ptr::eq(info, Player::struct_info()));
}

#[test]
fn field_kinds() {
    let info = Player::struct_info();
    let kind = |name: &str| info.field(name).map(|field| field.kind());

    assert_eq!(kind("type"), Some(Kind::Scalar(ScalarKind::NarrowText)));
    assert_eq!(kind("level"), Some(Kind::Scalar(ScalarKind::Int32)));
    assert_eq!(kind("title"), Some(Kind::Scalar(ScalarKind::WideText)));
    assert_eq!(kind("scores"), Some(Kind::Sequence(ElementKind::Scalar(ScalarKind::Int64))));
    assert_eq!(
        kind("tags"),
        Some(Kind::Mapping(KeyKind::Narrow, ElementKind::Scalar(ScalarKind::Bool)))
    );
    assert_eq!(kind("extra"), Some(Kind::Unsupported));
    assert_eq!(kind("ratio"), Some(Kind::Unsupported));
    assert_eq!(Player::KIND, Kind::Composite);
}

#[test]
fn field_flags() {
    let info = Player::struct_info();

    let handle = info.field("handle").unwrap();
    assert!(handle.is_static());
    assert!(!handle.participates());

    let cached = info.field("cached").unwrap();
    assert!(!cached.is_writable());
    assert!(!cached.participates());

    let extra = info.field("extra").unwrap();
    assert!(extra.participates());
    assert!(extra.type_path().ends_with("Handle"));
}

#[test]
fn field_access() {
    let mut player = Player {
        level: 3,
        ..Player::default()
    };

    let level = player.field("level").unwrap();
    assert_eq!(level.downcast_ref::<u32>(), Some(&3));
    assert!(player.field("extra").is_none());
    assert!(player.field("missing").is_none());

    *player.field_mut("type").unwrap().downcast_mut::<String>().unwrap() = "mage".to_owned();
    assert_eq!(player.r#type, "mage");
}

#[test]
fn reflect_views() {
    let mut player = Player::default();
    player.level = 9;

    assert_eq!(player.reflect_kind(), Kind::Composite);
    assert_eq!(player.reflect_ref().variant(), "Composite");
    assert!(matches!(player.reflect_ref(), ReflectRef::Composite(_)));

    let fresh = player.fresh();
    assert_eq!(fresh.downcast_ref::<Player>(), Some(&Player::default()));

    player.assign(fresh).unwrap();
    assert_eq!(player.level, 0);

    let err = player.assign(Box::new(1_u32)).unwrap_err();
    assert!(err.to_string().contains("u32"));
}

#[test]
fn empty_struct() {
    let info = Empty::struct_info();
    assert_eq!(info.field_len(), 0);
    assert_eq!(info.file(), None);
}

#[test]
fn fieldless_enums_are_int32() {
    assert_eq!(Difficulty::KIND, Kind::Scalar(ScalarKind::Int32));
    assert_eq!(Difficulty::Hard.reflect_kind(), Kind::Scalar(ScalarKind::Int32));
    assert!(matches!(Difficulty::Hard.reflect_ref(), ReflectRef::Scalar(_)));

    let info = Settings::struct_info();
    let kind = |name: &str| info.field(name).map(|field| field.kind());
    assert_eq!(kind("level"), Some(Kind::Scalar(ScalarKind::Int32)));
    assert_eq!(kind("history"), Some(Kind::Sequence(ElementKind::Scalar(ScalarKind::Int32))));
    assert_eq!(kind("channel"), Some(Kind::Scalar(ScalarKind::Int32)));
}

#[test]
fn enum_discriminants() {
    assert_eq!(Difficulty::Hard.to_scalar(), ScalarValue::Int(2));
    assert_eq!(Channel::Beta.to_scalar(), ScalarValue::Int(7));

    let mut level = Difficulty::default();
    level.set_scalar(ScalarValue::UInt(0)).unwrap();
    assert_eq!(level, Difficulty::Easy);

    let err = level.set_scalar(ScalarValue::Int(5)).unwrap_err();
    assert!(err.to_string().starts_with("5 is out of range for `"));
    assert!(level.set_scalar(ScalarValue::Bool(true)).is_err());
    assert_eq!(level, Difficulty::Easy);
}

#[test]
fn enum_fields_read_and_write() {
    let recorder = Recorder::new();
    let document = serde_json::json!({ "level": 2, "history": [0, 1], "channel": 7 });

    let mut settings = Settings::default();
    populate(&document, &mut settings, &recorder).unwrap();
    assert_eq!(
        settings,
        Settings {
            level: Difficulty::Hard,
            history: vec![Difficulty::Easy, Difficulty::Normal],
            channel: Channel::Beta,
        }
    );

    assert_eq!(to_document(&settings, &recorder), document);
    assert!(recorder.messages().is_empty());
}

#[test]
fn unknown_discriminant_is_out_of_range() {
    let mut settings = Settings::default();
    let err = populate(&serde_json::json!({ "level": 7 }), &mut settings, &Recorder::new())
        .unwrap_err();

    assert_eq!(err.path().as_str(), "$.level");
    assert!(matches!(err, DecodeError::OutOfRange { ref value, .. } if value == "7"));
    assert_eq!(settings.level, Difficulty::Normal);
}
