use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rf_reflect::Reflectable;
use rf_reflect::diag::{Diagnostics, FailureKind, Level, LogEntry, LogSink};
use rf_reflect::serde::{Document, parse_document, populate, to_document, write_pretty};

use crate::{MissingPathError, resolve_path};

/// Loads and saves [`Reflectable`] values as pretty-printed JSON files.
///
/// Every failure except [`MissingPathError`] is reported to the
/// [`Diagnostics`] sink `D` and swallowed. Writes are not atomic: a crash
/// while saving may leave a truncated file behind.
///
/// Calls on the same path must not overlap; the store holds no lock.
///
/// # Examples
///
/// ```
/// use rf_reflect::{derive::Reflect, diag::{Level, Recorder}};
/// use rf_store::FileStore;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// struct Config {
///     enabled: bool,
///     count: i32,
/// }
///
/// let dir = std::env::temp_dir().join("rf_store_doc_example");
/// let path = dir.join("config.json");
/// let store = FileStore::with_diagnostics(Recorder::new());
///
/// store.save(&Config { enabled: true, count: 3 }, Some(&path)).unwrap();
/// let config: Config = store.load_or_create(Some(&path)).unwrap();
///
/// assert_eq!(config, Config { enabled: true, count: 3 });
/// assert_eq!(store.diagnostics().count(Level::Error), 0);
/// # let _ = std::fs::remove_dir_all(dir);
/// ```
#[derive(Debug, Default, Clone)]
pub struct FileStore<D: Diagnostics = LogSink> {
    diagnostics: D,
}

impl FileStore {
    /// Creates a store reporting through the [`log`] facade.
    #[inline]
    pub const fn new() -> Self {
        Self {
            diagnostics: LogSink,
        }
    }
}

impl<D: Diagnostics> FileStore<D> {
    /// Creates a store reporting to `diagnostics`.
    #[inline]
    pub const fn with_diagnostics(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    #[inline]
    pub const fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    fn resolve<T: Reflectable>(&self, path: Option<&Path>) -> Result<PathBuf, MissingPathError> {
        resolve_path::<T>(path).inspect_err(|err| {
            self.diagnostics
                .message(Level::Error, &format!("Unable to resolve a file: {err}."));
        })
    }

    /// Writes `value` to `path`, or to `T`'s default file.
    ///
    /// Missing parent directories are created. If they cannot be created,
    /// or the file cannot be opened, a warning is reported and nothing is
    /// written.
    pub fn save<T: Reflectable>(
        &self,
        value: &T,
        path: Option<&Path>,
    ) -> Result<(), MissingPathError> {
        let path = self.resolve::<T>(path)?;
        self.write_file(value, &path);
        Ok(())
    }

    /// Reads a `T` from `path`, or from `T`'s default file.
    ///
    /// The value starts as `T::default()`. Then:
    ///
    /// - the file is missing: with `create_if_missing` the default is saved
    ///   and returned, otherwise an error is reported;
    /// - the file cannot be read or parsed: an error is reported, the
    ///   default is returned;
    /// - a value has the wrong shape: an error is reported and the fields
    ///   applied before it are kept, see [`populate`].
    pub fn load<T: Reflectable>(
        &self,
        path: Option<&Path>,
        create_if_missing: bool,
    ) -> Result<T, MissingPathError> {
        let path = self.resolve::<T>(path)?;
        let mut value = T::default();

        if !path.exists() {
            if create_if_missing {
                self.write_file(&value, &path);
            } else {
                self.diagnostics.message(
                    Level::Error,
                    &format!("Unable to load {}, the file does not exist.", path.display()),
                );
            }
            return Ok(value);
        }

        let Some(document) = self.read_file(&path) else {
            return Ok(value);
        };

        if let Err(err) = populate(&document, &mut value, &self.diagnostics) {
            self.report_failure(&path, FailureKind::Decode, err.to_string());
        }

        Ok(value)
    }

    /// Same as [`load`](Self::load) with `create_if_missing` set.
    #[inline]
    pub fn load_or_create<T: Reflectable>(
        &self,
        path: Option<&Path>,
    ) -> Result<T, MissingPathError> {
        self.load(path, true)
    }

    fn write_file<T: Reflectable>(&self, value: &T, path: &Path) {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty())
            && fs::create_dir_all(parent).is_err()
            && !parent.is_dir()
        {
            self.diagnostics.message(
                Level::Warn,
                &format!("Unable to create directories for {} when saving.", parent.display()),
            );
            return;
        }

        let file = match File::create(path) {
            Ok(file) => file,
            Err(_) => {
                self.diagnostics.message(
                    Level::Warn,
                    &format!("Unable to open {} for writing.", path.display()),
                );
                return;
            }
        };

        log::debug!(target: "rf_store", "Writing {}...", path.display());
        let document = to_document(value, &self.diagnostics);

        if let Err(err) = write_document(&document, file) {
            self.diagnostics.message(
                Level::Error,
                &format!("Unable to write {}: {err}.", path.display()),
            );
            return;
        }

        self.diagnostics
            .message(Level::Info, &format!("Serialized {}.", path.display()));
    }

    fn read_file(&self, path: &Path) -> Option<Document> {
        log::debug!(target: "rf_store", "Reading {}...", path.display());

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => {
                self.diagnostics.message(
                    Level::Warn,
                    &format!("Unable to open {} for reading.", path.display()),
                );
                return None;
            }
        };

        match parse_document(&bytes) {
            Ok(document) => Some(document),
            Err(err) => {
                self.report_failure(path, FailureKind::Parse, err.to_string());
                None
            }
        }
    }

    fn report_failure(&self, path: &Path, kind: FailureKind, detail: String) {
        self.diagnostics.message(
            Level::Error,
            &format!(
                "Unable to process {}. It could not be {}. See log for more detail.",
                path.display(),
                match kind {
                    FailureKind::Parse => "parsed",
                    FailureKind::Decode => "decoded",
                },
            ),
        );
        self.diagnostics.log_entry(LogEntry {
            file: path.display().to_string(),
            kind,
            detail,
        });
    }
}

fn write_document(document: &Document, file: File) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    write_pretty(document, &mut writer)?;
    writer.flush()
}
