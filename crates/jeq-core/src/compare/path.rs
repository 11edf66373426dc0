use std::fmt;
use std::sync::Arc;

/// One step in a [`Path`]: a property access or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object property access by key.
    Key(String),
    /// Array element access by index.
    Index(usize),
}

impl PathSegment {
    /// Creates a property segment.
    #[must_use]
    pub fn key<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self::Key(value.into())
    }

    /// Creates an index segment.
    #[must_use]
    pub fn index(value: usize) -> Self {
        Self::Index(value)
    }
}

/// A root-relative location inside a tree, used in diagnostics.
///
/// Paths are append-only and persistent: extending a path yields a new
/// value whose prefix is shared with the receiver, so a parent frame's
/// path stays valid (and is never copied) while the comparison descends.
///
/// ```
/// # use jeq_core::Path;
/// let root = Path::root();
/// let nested = root.add_key("items").add_index(3);
/// assert_eq!(root.to_string(), "$");
/// assert_eq!(nested.to_string(), "$.items[3]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Option<Arc<Step>>);

#[derive(Debug, PartialEq, Eq, Hash)]
struct Step {
    parent: Path,
    segment: PathSegment,
}

impl Path {
    /// Returns the empty path `$`.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended with a property step.
    #[must_use]
    pub fn add_key(&self, name: &str) -> Self {
        self.append(PathSegment::key(name))
    }

    /// Returns a new path extended with an index step.
    #[must_use]
    pub fn add_index(&self, index: usize) -> Self {
        self.append(PathSegment::index(index))
    }

    fn append(&self, segment: PathSegment) -> Self {
        Self(Some(Arc::new(Step { parent: self.clone(), segment })))
    }

    /// Returns the steps from the root, in order.
    #[must_use]
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut segments = Vec::new();
        let mut cursor = &self.0;
        while let Some(step) = cursor {
            segments.push(step.segment.clone());
            cursor = &step.parent.0;
        }
        segments.reverse();
        segments
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = &self.0;
        while let Some(step) = cursor {
            count += 1;
            cursor = &step.parent.0;
        }
        count
    }

    /// Indicates whether this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments() {
            match segment {
                PathSegment::Key(key) if is_bare_identifier(&key) => write!(f, ".{key}")?,
                PathSegment::Key(key) => write!(f, "[\"{}\"]", escape_key(&key))?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(value: Vec<PathSegment>) -> Self {
        value.into_iter().fold(Self::root(), |path, segment| path.append(segment))
    }
}

// A key renders in dotted form only when it cannot be confused with one:
// non-empty, leading letter or underscore, ASCII word characters throughout.
fn is_bare_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn escape_key(key: &str) -> String {
    key.replace('\\', "\\\\").replace('"', "\\\"")
}
