use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Name of the facade crate that re-exports every `rf_*` crate.
const FACADE_NAME: &str = "rf_core";
const CRATE_PREFIX: &str = "rf_";

/// The parsed `Cargo.toml` of the crate a macro is expanded in.
///
/// Used to find the path under which another crate is reachable from the
/// generated code.
///
/// # Example
///
/// ```rust
/// # use rf_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("rf_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. A crate listed in `dependencies` resolves to `::crate_name`.
/// 2. An `rf_` crate reached through a dependency on `rf_core` resolves to
///    `::rf_core::short_name` (e.g. `rf_reflect` -> `::rf_core::reflect`).
/// 3. Steps 1 and 2 are repeated for `dev-dependencies`.
/// 4. Otherwise, and whenever the manifest cannot be read, the result is
///    `::crate_name`.
///
/// A crate that names itself should carry `extern crate self as crate_name;`
/// so the absolute path also works inside it.
#[derive(Debug)]
pub struct Manifest {
    document: Option<Document<Box<str>>>,
    modified: Option<SystemTime>,
}

impl Manifest {
    /// Parses a manifest from its text. Unparsable text gives an empty manifest.
    pub fn from_text(text: &str) -> Self {
        Self {
            document: Document::parse(Box::from(text)).ok(),
            modified: None,
        }
    }

    fn locate() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        fs::metadata(path).and_then(|metadata| metadata.modified()).ok()
    }

    fn read(path: &Path, modified: Option<SystemTime>) -> Self {
        let document = fs::read_to_string(path)
            .ok()
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());
        Self { document, modified }
    }

    fn absolute(segments: &[&str]) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Default::default(),
        };
        for segment in segments {
            let ident = syn::Ident::new(&segment.replace('-', "_"), Span::call_site());
            path.segments.push(syn::PathSegment::from(ident));
        }
        path
    }

    fn search(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::absolute(&[FACADE_NAME, short]))
    }

    /// Returns the path of the crate `name` as seen from this manifest.
    ///
    /// See the type level documentation for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(document) = self.document.as_ref() else {
            return Self::absolute(&[name]);
        };

        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = document.get(section)
                && let Some(path) = Self::search(deps, name)
            {
                return path;
            }
        }

        Self::absolute(&[name])
    }

    /// Runs `func` with the manifest of the crate being compiled.
    ///
    /// Manifests are cached per path and re-read when the file changes.
    /// Reading is not cheap, so call this once per macro invocation.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::locate() else {
            return func(&Self { document: None, modified: None });
        };
        let modified = Self::modified_time(&path);

        let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = cache.get(&path)
            && manifest.modified.is_some()
            && manifest.modified == modified
        {
            return func(manifest);
        }
        drop(cache);

        let manifest = Self::read(&path, modified);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn render(path: &syn::Path) -> String {
        let names: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        match path.leading_colon {
            Some(_) => format!("::{}", names.join("::")),
            None => names.join("::"),
        }
    }

    #[test]
    fn direct_dependency() {
        let manifest = Manifest::from_text(
            r#"
            [dependencies]
            rf_reflect = { path = "../rf_reflect" }
            "#,
        );
        assert_eq!(render(&manifest.get_crate_path("rf_reflect")), "::rf_reflect");
    }

    #[test]
    fn through_facade() {
        let manifest = Manifest::from_text(
            r#"
            [dependencies]
            rf_core = "0.0.1"
            "#,
        );
        assert_eq!(render(&manifest.get_crate_path("rf_reflect")), "::rf_core::reflect");
        assert_eq!(render(&manifest.get_crate_path("serde_json")), "::serde_json");
    }

    #[test]
    fn dev_dependencies_and_fallback() {
        let manifest = Manifest::from_text(
            r#"
            [dev-dependencies]
            rf_core = "0.0.1"
            "#,
        );
        assert_eq!(render(&manifest.get_crate_path("rf_store")), "::rf_core::store");

        let broken = Manifest::from_text("[dependencies");
        assert_eq!(render(&broken.get_crate_path("rf_reflect")), "::rf_reflect");
    }
}
