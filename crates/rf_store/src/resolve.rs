use std::path::{Path, PathBuf};

use rf_reflect::Reflectable;

use crate::MissingPathError;

/// Picks the file a `T` is stored in.
///
/// A non-empty `explicit` path wins, then `T`'s default file. An empty
/// `explicit` path counts as not supplied.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use rf_reflect::derive::Reflect;
/// use rf_store::resolve_path;
///
/// #[derive(Reflect, Default)]
/// #[reflect(file = "config/audio.json")]
/// struct Audio {
///     volume: f32,
/// }
///
/// assert_eq!(resolve_path::<Audio>(None), Ok(PathBuf::from("config/audio.json")));
/// assert_eq!(resolve_path::<Audio>(Some(Path::new(""))), Ok(PathBuf::from("config/audio.json")));
/// assert_eq!(resolve_path::<Audio>(Some(Path::new("a.json"))), Ok(PathBuf::from("a.json")));
/// ```
pub fn resolve_path<T: Reflectable>(explicit: Option<&Path>) -> Result<PathBuf, MissingPathError> {
    if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(path.to_path_buf());
    }

    T::default_file()
        .map(PathBuf::from)
        .ok_or(MissingPathError {
            type_name: T::struct_info().type_path(),
        })
}

// -----------------------------------------------------------------------------
// Tests
