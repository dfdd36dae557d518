use thiserror::Error;

/// No path was given and the type declares no default file.
///
/// The only error [`FileStore`](crate::FileStore) returns.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no path was given and `{type_name}` declares no default file")]
pub struct MissingPathError {
    pub type_name: &'static str,
}
