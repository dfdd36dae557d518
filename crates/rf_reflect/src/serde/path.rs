use core::fmt;

/// Composite nesting deeper than this is rejected.
pub const MAX_DEPTH: usize = 64;

// -----------------------------------------------------------------------------
// DocPath

/// Location of a value inside a document, e.g. `$.servers[2].ports["http"]`.
///
/// With the `debug` feature (and debug assertions), it also remembers the
/// composite types being populated when the path was taken, which are shown
/// by [`Display`](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPath {
    path: String,
    types: Vec<&'static str>,
}

impl DocPath {
    /// The document root.
    pub fn root() -> Self {
        Self {
            path: String::from("$"),
            types: Vec::new(),
        }
    }

    /// Returns the path without the type stack.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Returns the type stack, outermost first. Empty unless `debug` is on.
    #[inline]
    pub fn types(&self) -> &[&'static str] {
        &self.types
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some((first, rest)) = self.types.split_first() {
            write!(f, " (in `{first}`")?;
            for ty in rest {
                write!(f, " -> `{ty}`")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tracker

enum Segment {
    Field(&'static str),
    Index(usize),
    Key(String),
}

/// Traversal state shared by the reader and the writer.
pub(crate) struct Tracker {
    segments: Vec<Segment>,
    depth: usize,
    #[cfg(all(debug_assertions, feature = "debug"))]
    types: Vec<&'static str>,
}

impl Tracker {
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
            depth: 0,
            #[cfg(all(debug_assertions, feature = "debug"))]
            types: Vec::new(),
        }
    }

    /// Enters a composite of type `type_path`.
    ///
    /// Returns `false`, without entering, if that would exceed [`MAX_DEPTH`].
    #[must_use]
    pub fn enter(&mut self, type_path: &'static str) -> bool {
        if self.depth >= MAX_DEPTH {
            return false;
        }
        self.depth += 1;
        #[cfg(all(debug_assertions, feature = "debug"))]
        self.types.push(type_path);
        #[cfg(not(all(debug_assertions, feature = "debug")))]
        let _ = type_path;
        true
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        #[cfg(all(debug_assertions, feature = "debug"))]
        self.types.pop();
    }

    #[inline]
    pub fn push_field(&mut self, name: &'static str) {
        self.segments.push(Segment::Field(name));
    }

    #[inline]
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    #[inline]
    pub fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_owned()));
    }

    #[inline]
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Snapshot of the current location.
    pub fn path(&self) -> DocPath {
        use fmt::Write;

        let mut path = String::from("$");
        for segment in &self.segments {
            // writing into a `String` cannot fail
            let _ = match segment {
                Segment::Field(name) => write!(path, ".{name}"),
                Segment::Index(index) => write!(path, "[{index}]"),
                Segment::Key(key) => write!(path, "[{key:?}]"),
            };
        }

        DocPath {
            path,
            #[cfg(all(debug_assertions, feature = "debug"))]
            types: self.types.clone(),
            #[cfg(not(all(debug_assertions, feature = "debug")))]
            types: Vec::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
