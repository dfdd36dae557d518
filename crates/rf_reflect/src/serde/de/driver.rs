use serde_json::Value;

use crate::Reflect;
use crate::diag::{Diagnostics, Level};
use crate::info::{ElementKind, KeyKind, Kind, NamedField, Reflectable, ScalarKind, StructInfo};
use crate::ops::{Composite, ReflectMut, ScalarValue};
use crate::serde::path::{MAX_DEPTH, Tracker};
use crate::serde::scalar::{decode_scalar, shape_of};
use crate::serde::{DecodeError, Document, DocumentMap, unsupported_message};
use crate::text::narrow_to_wide;

// -----------------------------------------------------------------------------
// populate

/// Overwrites the fields of `target` with the values found in `document`.
///
/// For each participating field, in declaration order:
///
/// - a missing key leaves the field untouched;
/// - an unsupported field kind is reported to `diagnostics` as a warning and
///   left untouched;
/// - a value of the wrong shape aborts the whole call with a [`DecodeError`].
///
/// Population is **not** transactional: fields before the failing one keep
/// their new values. Composite and collection fields are built on a fresh
/// value and only assigned once complete, so the failing field itself is
/// never half-written.
///
/// # Examples
///
/// ```
/// use rf_reflect::{derive::Reflect, diag::LogSink, serde::{parse_document, populate}};
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// struct Config {
///     enabled: bool,
///     count: i32,
///     name: String,
/// }
///
/// let document = parse_document(br#"{"enabled": true, "count": "five"}"#).unwrap();
/// let mut config = Config::default();
///
/// let err = populate(&document, &mut config, &LogSink).unwrap_err();
/// assert_eq!(err.path().as_str(), "$.count");
/// assert!(config.enabled);
/// assert_eq!(config.count, 0);
/// ```
pub fn populate<T: Reflectable>(
    document: &Document,
    target: &mut T,
    diagnostics: &dyn Diagnostics,
) -> Result<(), DecodeError> {
    populate_dyn(document, target, diagnostics)
}

/// Type-erased version of [`populate`].
pub fn populate_dyn(
    document: &Document,
    target: &mut dyn Composite,
    diagnostics: &dyn Diagnostics,
) -> Result<(), DecodeError> {
    let mut reader = Reader {
        tracker: Tracker::new(),
        diagnostics,
    };

    let Value::Object(map) = document else {
        return Err(reader.shape("an object", document));
    };
    reader.composite(map, target)
}

// -----------------------------------------------------------------------------
// Reader

struct Reader<'a> {
    tracker: Tracker,
    diagnostics: &'a dyn Diagnostics,
}

impl Reader<'_> {
    fn shape(&self, expected: &'static str, found: &Value) -> DecodeError {
        DecodeError::Shape {
            path: self.tracker.path(),
            expected,
            found: shape_of(found),
        }
    }

    fn inconsistent(&self, detail: impl Into<String>) -> DecodeError {
        DecodeError::Inconsistent {
            path: self.tracker.path(),
            detail: detail.into(),
        }
    }

    fn composite(&mut self, map: &DocumentMap, target: &mut dyn Composite) -> Result<(), DecodeError> {
        let info = target.reflect_struct_info();
        if !self.tracker.enter(info.type_path()) {
            return Err(DecodeError::DepthExceeded {
                path: self.tracker.path(),
                limit: MAX_DEPTH,
            });
        }
        let result = self.fields(map, info, target);
        self.tracker.leave();
        result
    }

    fn fields(
        &mut self,
        map: &DocumentMap,
        info: &'static StructInfo,
        target: &mut dyn Composite,
    ) -> Result<(), DecodeError> {
        for field in info.iter() {
            if !field.participates() {
                continue;
            }
            let Some(value) = map.get(field.name()) else {
                continue;
            };

            self.tracker.push_field(field.name());
            self.field(field, info, value, target)?;
            self.tracker.pop();
        }
        Ok(())
    }

    fn field(
        &mut self,
        field: &NamedField,
        owner: &StructInfo,
        value: &Value,
        target: &mut dyn Composite,
    ) -> Result<(), DecodeError> {
        if let Some(message) = unsupported_message(field, owner) {
            self.diagnostics.message(Level::Warn, &message);
            return Ok(());
        }

        let Some(slot) = field.get_mut(target.as_any_mut()) else {
            return Err(self.inconsistent(format!("field `{}` cannot be reached", field.name())));
        };

        match field.kind() {
            Kind::Scalar(kind) => self.scalar(kind, value, slot),
            Kind::Composite => self.staged(slot, |reader, staged| reader.nested(value, staged)),
            Kind::Sequence(element) => {
                self.staged(slot, |reader, staged| reader.sequence(element, value, staged))
            }
            Kind::Mapping(key, element) => {
                self.staged(slot, |reader, staged| reader.mapping(key, element, value, staged))
            }
            Kind::Unsupported => Ok(()),
        }
    }

    /// Fills a fresh value of the slot's type, then moves it into the slot.
    fn staged(
        &mut self,
        slot: &mut dyn Reflect,
        fill: impl FnOnce(&mut Self, &mut dyn Reflect) -> Result<(), DecodeError>,
    ) -> Result<(), DecodeError> {
        let mut staged = slot.fresh();
        fill(self, &mut *staged)?;
        slot.assign(staged).map_err(|source| DecodeError::Assign {
            path: self.tracker.path(),
            source,
        })
    }

    fn element(
        &mut self,
        kind: ElementKind,
        value: &Value,
        slot: &mut dyn Reflect,
    ) -> Result<(), DecodeError> {
        match kind {
            ElementKind::Scalar(kind) => self.scalar(kind, value, slot),
            ElementKind::Composite => self.nested(value, slot),
            ElementKind::Unsupported => Err(self.inconsistent("unsupported element kind")),
        }
    }

    fn scalar(
        &mut self,
        kind: ScalarKind,
        value: &Value,
        slot: &mut dyn Reflect,
    ) -> Result<(), DecodeError> {
        // Non-finite floats are written as `null`; reading one back keeps the current value.
        if kind == ScalarKind::Float32 && value.is_null() {
            return Ok(());
        }

        let scalar = decode_scalar(kind, value, slot.reflect_type_name())
            .map_err(|error| DecodeError::from_scalar(self.tracker.path(), error))?;

        match slot.reflect_mut() {
            ReflectMut::Scalar(slot) => slot
                .set_scalar(scalar)
                .map_err(|error| DecodeError::from_scalar(self.tracker.path(), error)),
            other => Err(self.inconsistent(format!("expected Scalar, found {}", other.variant()))),
        }
    }

    fn nested(&mut self, value: &Value, slot: &mut dyn Reflect) -> Result<(), DecodeError> {
        let Value::Object(map) = value else {
            return Err(self.shape("an object", value));
        };

        match slot.reflect_mut() {
            ReflectMut::Composite(composite) => self.composite(map, composite),
            other => Err(self.inconsistent(format!("expected Composite, found {}", other.variant()))),
        }
    }

    fn sequence(
        &mut self,
        element: ElementKind,
        value: &Value,
        slot: &mut dyn Reflect,
    ) -> Result<(), DecodeError> {
        let Value::Array(items) = value else {
            return Err(self.shape("an array", value));
        };
        let ReflectMut::Sequence(sequence) = slot.reflect_mut() else {
            return Err(self.inconsistent("expected Sequence"));
        };

        for (index, item) in items.iter().enumerate() {
            self.tracker.push_index(index);
            self.element(element, item, sequence.push_default())?;
            self.tracker.pop();
        }
        Ok(())
    }

    fn mapping(
        &mut self,
        key: KeyKind,
        element: ElementKind,
        value: &Value,
        slot: &mut dyn Reflect,
    ) -> Result<(), DecodeError> {
        let Value::Object(entries) = value else {
            return Err(self.shape("an object", value));
        };
        let Some(wide) = key.is_wide() else {
            return Err(self.inconsistent("unsupported key kind"));
        };
        let ReflectMut::Mapping(mapping) = slot.reflect_mut() else {
            return Err(self.inconsistent("expected Mapping"));
        };

        for (name, item) in entries {
            self.tracker.push_key(name);
            let key = if wide {
                ScalarValue::Wide(narrow_to_wide(name))
            } else {
                ScalarValue::Narrow(name.clone())
            };
            let entry = mapping
                .insert_default(key)
                .map_err(|error| DecodeError::from_scalar(self.tracker.path(), error))?;
            self.element(element, item, entry)?;
            self.tracker.pop();
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use std::collections::HashMap;

    use serde_json::json;

    use super::populate;
    use crate::derive::Reflect;
    use crate::diag::{Level, Recorder};
    use crate::serde::{DecodeError, MAX_DEPTH};
    use crate::text::WideString;

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
        origin: Point,
        points: Vec<Point>,
        labels: Vec<WideString>,
        weights: BTreeMap<WideString, i64>,
        anchors: HashMap<String, Point>,
        title: WideString,
        seed: u64,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Odd {
        first: i32,
        precise: f64,
        grid: Vec<Vec<i32>>,
        by_id: BTreeMap<i32, bool>,
        #[reflect(readonly)]
        locked: i32,
        #[reflect(skip)]
        cache: u32,
        last: i32,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Mixed {
        a: i32,
        floats: Vec<f64>,
        vals: BTreeMap<String, f64>,
        b: i32,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Node {
        children: Vec<Node>,
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let recorder = Recorder::new();
        let mut config = Config::default();

        populate(&json!({}), &mut config, &recorder).unwrap();
        assert_eq!(config, Config::default());

        populate(&json!({ "count": 3, "unknown": [1, 2] }), &mut config, &recorder).unwrap();
        assert_eq!(
            config,
            Config {
                count: 3,
                ..Config::default()
            }
        );
        assert!(recorder.messages().is_empty());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut config = Config::default();
        populate(&json!({ "Enabled": true }), &mut config, &Recorder::new()).unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn partial_apply_then_abort() {
        let document = json!({ "enabled": true, "count": "five", "name": "never" });
        let mut config = Config::default();

        let err = populate(&document, &mut config, &Recorder::new()).unwrap_err();
        assert_eq!(err.path().as_str(), "$.count");
        assert!(matches!(
            err,
            DecodeError::Shape {
                expected: "an integer",
                found: "a string",
                ..
            }
        ));

        assert!(config.enabled);
        assert_eq!(config.count, 0);
        assert_eq!(config.name, "");
    }

    #[test]
    fn float_is_not_an_integer() {
        let mut config = Config::default();
        let err = populate(&json!({ "count": 1.0 }), &mut config, &Recorder::new()).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { found: "a number", .. }));
    }

    #[test]
    fn integer_out_of_range() {
        let mut config = Config::default();
        let err = populate(&json!({ "count": 3_000_000_000_u64 }), &mut config, &Recorder::new())
            .unwrap_err();
        assert!(matches!(err, DecodeError::OutOfRange { target: "i32", .. }));
        assert_eq!(err.path().as_str(), "$.count");
        assert_eq!(config.count, 0);

        let mut scene = Scene::default();
        populate(&json!({ "seed": u64::MAX }), &mut scene, &Recorder::new()).unwrap();
        assert_eq!(scene.seed, u64::MAX);
    }

    #[test]
    fn root_must_be_an_object() {
        let err = populate(&json!([1, 2]), &mut Config::default(), &Recorder::new()).unwrap_err();
        assert_eq!(err.path().as_str(), "$");
        assert!(matches!(
            err,
            DecodeError::Shape {
                expected: "an object",
                found: "an array",
                ..
            }
        ));
    }

    #[test]
    fn nested_composite() {
        let mut scene = Scene::default();
        populate(
            &json!({ "origin": { "x": 1.5, "y": -2.25 } }),
            &mut scene,
            &Recorder::new(),
        )
        .unwrap();
        assert_eq!(scene.origin, Point { x: 1.5, y: -2.25 });
    }

    #[test]
    fn nested_keys_start_from_default() {
        let mut scene = Scene {
            origin: Point { x: 3.0, y: 4.0 },
            ..Scene::default()
        };
        populate(&json!({ "origin": { "x": 1 } }), &mut scene, &Recorder::new()).unwrap();
        assert_eq!(scene.origin, Point { x: 1.0, y: 0.0 });
    }

    #[test]
    fn nested_failure_keeps_field() {
        let mut scene = Scene {
            origin: Point { x: 3.0, y: 4.0 },
            points: vec![Point { x: 9.0, y: 9.0 }],
            ..Scene::default()
        };

        let err = populate(
            &json!({ "origin": { "x": 1.0, "y": "up" } }),
            &mut scene,
            &Recorder::new(),
        )
        .unwrap_err();
        assert_eq!(err.path().as_str(), "$.origin.y");
        assert_eq!(scene.origin, Point { x: 3.0, y: 4.0 });

        let err = populate(
            &json!({ "points": [{ "x": 1.0 }, 5] }),
            &mut scene,
            &Recorder::new(),
        )
        .unwrap_err();
        assert_eq!(err.path().as_str(), "$.points[1]");
        assert!(matches!(
            err,
            DecodeError::Shape {
                expected: "an object",
                found: "an integer",
                ..
            }
        ));
        assert_eq!(scene.points, [Point { x: 9.0, y: 9.0 }]);
    }

    #[test]
    fn sequences() {
        let mut scene = Scene::default();
        let document = json!({
            "points": [{ "x": 1.0 }, { "y": 2.0 }],
            "labels": ["α", "β"],
        });
        populate(&document, &mut scene, &Recorder::new()).unwrap();

        assert_eq!(
            scene.points,
            [Point { x: 1.0, y: 0.0 }, Point { x: 0.0, y: 2.0 }]
        );
        assert_eq!(scene.labels, [WideString::from("α"), WideString::from("β")]);
    }

    #[test]
    fn wide_key_mapping() {
        let mut scene = Scene::default();
        populate(
            &json!({ "weights": { "a": 1, "b": 2 }, "title": "Ünïcödé" }),
            &mut scene,
            &Recorder::new(),
        )
        .unwrap();

        let expected = BTreeMap::from([(WideString::from("a"), 1), (WideString::from("b"), 2)]);
        assert_eq!(scene.weights, expected);
        assert_eq!(scene.title, "Ünïcödé");
    }

    #[test]
    fn mapping_of_composites() {
        let mut scene = Scene::default();
        populate(
            &json!({ "anchors": { "left": { "x": -1.0 }, "right": { "x": 1.0 } } }),
            &mut scene,
            &Recorder::new(),
        )
        .unwrap();
        assert_eq!(scene.anchors.len(), 2);
        assert_eq!(scene.anchors["left"], Point { x: -1.0, y: 0.0 });

        let err = populate(
            &json!({ "anchors": { "up": { "y": true } } }),
            &mut scene,
            &Recorder::new(),
        )
        .unwrap_err();
        assert_eq!(err.path().as_str(), "$.anchors[\"up\"].y");
        assert_eq!(scene.anchors.len(), 2);
    }

    #[test]
    fn unsupported_and_excluded_fields() {
        let document = json!({
            "first": 1,
            "precise": 2.5,
            "grid": [[1]],
            "by_id": { "1": true },
            "locked": 9,
            "cache": 9,
            "last": 2,
        });
        let recorder = Recorder::new();
        let mut odd = Odd::default();
        populate(&document, &mut odd, &recorder).unwrap();

        assert_eq!(
            odd,
            Odd {
                first: 1,
                last: 2,
                ..Odd::default()
            }
        );
        assert_eq!(recorder.count(Level::Warn), 3);
        assert!(recorder.contains(Level::Warn, "Non-reflectable property (precise) present on Odd."));
        assert!(recorder.contains(Level::Warn, "Non-reflectable property (grid) present on Odd."));
        assert!(recorder.contains(Level::Warn, "Key of map (by_id)"));
    }

    #[test]
    fn unsupported_field_without_key_is_silent() {
        let recorder = Recorder::new();
        populate(&json!({ "first": 1 }), &mut Odd::default(), &recorder).unwrap();
        assert!(recorder.messages().is_empty());
    }

    #[test]
    fn unsupported_elements_and_values() {
        let document = json!({
            "a": 1,
            "floats": [1.5, 2.5],
            "vals": { "k": 0.5 },
            "b": 2,
        });
        let recorder = Recorder::new();
        let mut mixed = Mixed::default();
        populate(&document, &mut mixed, &recorder).unwrap();

        assert_eq!(
            mixed,
            Mixed {
                a: 1,
                b: 2,
                ..Mixed::default()
            }
        );
        assert_eq!(recorder.count(Level::Warn), 2);
        assert!(recorder.contains(Level::Warn, "(floats) present within vector on Mixed."));
        assert!(recorder.contains(Level::Warn, "(vals) present within map on Mixed."));
    }

    #[test]
    fn null_float_keeps_value() {
        let recorder = Recorder::new();
        let mut point = Point { x: 4.0, y: 1.0 };
        populate(&json!({ "x": null, "y": 5 }), &mut point, &recorder).unwrap();
        assert_eq!(point, Point { x: 4.0, y: 5.0 });
        assert!(recorder.messages().is_empty());

        let err = populate(&json!({ "seed": null }), &mut Scene::default(), &recorder).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { found: "null", .. }));
    }

    #[test]
    fn depth_limit() {
        let mut shallow = json!({});
        for _ in 0..10 {
            shallow = json!({ "children": [shallow] });
        }
        let mut node = Node::default();
        populate(&shallow, &mut node, &Recorder::new()).unwrap();
        assert_eq!(node.children.len(), 1);

        let mut deep = json!({});
        for _ in 0..MAX_DEPTH + 5 {
            deep = json!({ "children": [deep] });
        }
        let mut node = Node::default();
        let err = populate(&deep, &mut node, &Recorder::new()).unwrap_err();
        assert!(matches!(err, DecodeError::DepthExceeded { limit: MAX_DEPTH, .. }));
        assert!(node.children.is_empty());
    }

    #[cfg(all(debug_assertions, feature = "debug"))]
    #[test]
    fn error_lists_type_stack() {
        let err = populate(
            &json!({ "origin": { "x": false } }),
            &mut Scene::default(),
            &Recorder::new(),
        )
        .unwrap_err();

        let types = err.path().types();
        assert_eq!(types.len(), 2);
        assert!(types[0].ends_with("::Scene"));
        assert!(types[1].ends_with("::Point"));
        assert!(err.to_string().contains("-> `"));
    }
}
