//! Load, create and save reflected values as JSON files.
//!
//! A [`FileStore`] resolves the target path, creates missing directories and
//! runs the document reader or writer of [`rf_reflect::serde`]. Apart from
//! [`MissingPathError`], nothing is returned as an error: broken or missing
//! files are reported to the store's [`Diagnostics`] sink and the caller
//! always gets a usable value back.
//!
//! # Examples
//!
//! ```no_run
//! use rf_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default)]
//! #[reflect(file = "config/window.json")]
//! struct Window {
//!     width: u32,
//!     height: u32,
//! }
//!
//! // Reads `config/window.json`, writing the defaults first if it is missing.
//! let mut window: Window = rf_store::load_or_create(None).unwrap();
//! window.width = 1280;
//! rf_store::save(&window, None).unwrap();
//! ```
//!
//! [`Diagnostics`]: rf_reflect::diag::Diagnostics

// -----------------------------------------------------------------------------
// Modules

mod error;
mod resolve;
mod store;

// -----------------------------------------------------------------------------
// Exports

pub use error::MissingPathError;
pub use resolve::resolve_path;
pub use store::FileStore;

use std::path::Path;

use rf_reflect::Reflectable;

// -----------------------------------------------------------------------------
// Shortcuts

/// Saves `value` with a default [`FileStore`]. See [`FileStore::save`].
#[inline]
pub fn save<T: Reflectable>(value: &T, path: Option<&Path>) -> Result<(), MissingPathError> {
    FileStore::new().save(value, path)
}

/// Loads a `T` with a default [`FileStore`]. See [`FileStore::load`].
#[inline]
pub fn load<T: Reflectable>(
    path: Option<&Path>,
    create_if_missing: bool,
) -> Result<T, MissingPathError> {
    FileStore::new().load(path, create_if_missing)
}

/// Loads a `T`, creating the file if missing, with a default [`FileStore`].
#[inline]
pub fn load_or_create<T: Reflectable>(path: Option<&Path>) -> Result<T, MissingPathError> {
    FileStore::new().load_or_create(path)
}
