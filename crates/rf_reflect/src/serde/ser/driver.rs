use serde_json::Value;

use crate::Reflect;
use crate::diag::{Diagnostics, Level};
use crate::info::{ElementKind, KeyKind, Kind, NamedField, Reflectable};
use crate::ops::{Composite, ReflectRef, ScalarValue};
use crate::serde::path::{MAX_DEPTH, Tracker};
use crate::serde::scalar::encode_scalar;
use crate::serde::{Document, DocumentMap, unsupported_message};
use crate::text::wide_to_narrow;

// -----------------------------------------------------------------------------
// to_document

/// Builds a document out of `source`.
///
/// Keys follow the field declaration order. A field that cannot be written
/// is reported to `diagnostics` and left out; writing never stops early, so
/// the result is always a well-formed object.
///
/// Mapping entries are sorted by key so that writing the same value twice
/// gives the same document.
///
/// # Examples
///
/// ```
/// use rf_reflect::{derive::Reflect, diag::Recorder, serde::{to_document, to_pretty_string}};
///
/// #[derive(Reflect, Default)]
/// struct Config {
///     enabled: bool,
///     ratio: f32,
///     precise: f64,
/// }
///
/// let recorder = Recorder::new();
/// let config = Config { enabled: true, ratio: 0.25, precise: 1.0 };
/// let document = to_document(&config, &recorder);
///
/// assert_eq!(
///     to_pretty_string(&document),
///     "{\n    \"enabled\": true,\n    \"ratio\": 0.25\n}",
/// );
/// assert_eq!(recorder.messages().len(), 1);
/// ```
pub fn to_document<T: Reflectable>(source: &T, diagnostics: &dyn Diagnostics) -> Document {
    let mut map = DocumentMap::new();
    emit_into(source, &mut map, diagnostics);
    Value::Object(map)
}

/// Writes the fields of `source` into `map`.
///
/// Existing entries with the same keys are replaced, other entries are kept.
pub fn emit_into(source: &dyn Composite, map: &mut DocumentMap, diagnostics: &dyn Diagnostics) {
    let mut writer = Writer {
        tracker: Tracker::new(),
        diagnostics,
    };
    writer.composite(source, map);
}

// -----------------------------------------------------------------------------
// Writer

struct Writer<'a> {
    tracker: Tracker,
    diagnostics: &'a dyn Diagnostics,
}

impl Writer<'_> {
    fn skip(&self, detail: &str) {
        let message = format!("Unable to write {}: {detail}.", self.tracker.path());
        self.diagnostics.message(Level::Error, &message);
    }

    /// Returns `false` if nothing was written because of the depth limit.
    fn composite(&mut self, source: &dyn Composite, map: &mut DocumentMap) -> bool {
        let info = source.reflect_struct_info();
        if !self.tracker.enter(info.type_path()) {
            self.skip(&format!("composites nested deeper than {MAX_DEPTH}"));
            return false;
        }

        for field in info.iter() {
            if !field.participates() {
                continue;
            }
            if let Some(message) = unsupported_message(field, info) {
                self.diagnostics.message(Level::Warn, &message);
                continue;
            }

            self.tracker.push_field(field.name());
            if let Some(value) = self.field(field, source) {
                map.insert(field.name().to_owned(), value);
            }
            self.tracker.pop();
        }

        self.tracker.leave();
        true
    }

    fn field(&mut self, field: &NamedField, source: &dyn Composite) -> Option<Value> {
        let Some(value) = field.get(source.as_any()) else {
            self.skip("the field cannot be reached");
            return None;
        };

        match field.kind() {
            Kind::Scalar(_) => self.scalar(value),
            Kind::Composite => self.nested(value),
            Kind::Sequence(element) => self.sequence(element, value),
            Kind::Mapping(key, element) => self.mapping(key, element, value),
            Kind::Unsupported => None,
        }
    }

    fn element(&mut self, kind: ElementKind, value: &dyn Reflect) -> Option<Value> {
        match kind {
            ElementKind::Scalar(_) => self.scalar(value),
            ElementKind::Composite => self.nested(value),
            ElementKind::Unsupported => None,
        }
    }

    fn scalar(&mut self, value: &dyn Reflect) -> Option<Value> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => Some(encode_scalar(scalar.to_scalar())),
            other => {
                self.skip(&format!("expected Scalar, found {}", other.variant()));
                None
            }
        }
    }

    fn nested(&mut self, value: &dyn Reflect) -> Option<Value> {
        let ReflectRef::Composite(composite) = value.reflect_ref() else {
            self.skip("expected Composite");
            return None;
        };

        let mut map = DocumentMap::new();
        self.composite(composite, &mut map)
            .then_some(Value::Object(map))
    }

    fn sequence(&mut self, element: ElementKind, value: &dyn Reflect) -> Option<Value> {
        let ReflectRef::Sequence(sequence) = value.reflect_ref() else {
            self.skip("expected Sequence");
            return None;
        };

        let mut items = Vec::with_capacity(sequence.len());
        for (index, item) in sequence.iter().enumerate() {
            self.tracker.push_index(index);
            let item = self.element(element, item);
            self.tracker.pop();
            items.push(item?);
        }
        Some(Value::Array(items))
    }

    fn mapping(&mut self, key: KeyKind, element: ElementKind, value: &dyn Reflect) -> Option<Value> {
        let ReflectRef::Mapping(mapping) = value.reflect_ref() else {
            self.skip("expected Mapping");
            return None;
        };
        let wide = key.is_wide()?;

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, item) in mapping.iter() {
            let ReflectRef::Scalar(key) = key.reflect_ref() else {
                self.skip("mapping key is not a scalar");
                return None;
            };
            let name = match (wide, key.to_scalar()) {
                (false, ScalarValue::Narrow(name)) => name,
                (true, ScalarValue::Wide(name)) => wide_to_narrow(&name),
                (_, other) => {
                    self.skip(&format!("mapping key {other} is not text"));
                    return None;
                }
            };

            self.tracker.push_key(&name);
            let item = self.element(element, item);
            self.tracker.pop();
            entries.push((name, item?));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.dedup_by(|later, kept| {
            let collides = later.0 == kept.0;
            if collides {
                let message = format!(
                    "Mapping keys of {} collide as narrow text ({}); only the first entry is written.",
                    self.tracker.path(),
                    later.0,
                );
                self.diagnostics.message(Level::Warn, &message);
            }
            collides
        });
        Some(Value::Object(entries.into_iter().collect()))
    }
}

// -----------------------------------------------------------------------------
// Tests
