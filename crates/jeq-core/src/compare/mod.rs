//! First-difference comparison between JSON-shaped trees.
//!
//! The comparator walks an actual and an expected tree in lock step and
//! stops at the first point of divergence, reporting it as a
//! [`Difference`] with a [`Path`] and the conflicting values. Traversal
//! order is deterministic: object properties follow the expected side's
//! declaration order, array elements follow index order.

mod array;
mod object;
mod path;
mod scalar;

pub use path::{Path, PathSegment};

use crate::{CompareMode, Node, ScalarOverrides};

/// Closed set of mismatch categories a comparison can report.
#[derive(Clone, Debug, PartialEq)]
pub enum DifferenceKind {
    /// The actual tree (or subtree) is absent where the expected one is
    /// present.
    ActualIsNull,
    /// The expected tree (or subtree) is absent where the actual one is
    /// present.
    ExpectedIsNull,
    /// Node kinds differ at this path, e.g. an object where a string was
    /// expected.
    OtherType,
    /// Scalar values of the same kind differ, or a registered override
    /// reported inequality.
    OtherValue,
    /// The expected object has a key the actual object lacks.
    ActualMissesProperty,
    /// The actual object has a key not present in the expected object
    /// (strict mode only).
    ExpectedMissesProperty,
    /// Arrays have different element counts (strict mode only).
    DifferentLength {
        /// Element count of the actual array.
        actual: usize,
        /// Element count of the expected array.
        expected: usize,
    },
    /// No unmatched actual element satisfies an expected array element
    /// (contains mode only).
    ActualMissesElement,
    /// A matching actual element exists but only before the match cursor,
    /// so the required relative order is violated (contains mode only).
    WrongOrder,
}

/// The first point of divergence found between two trees.
///
/// Carries the mismatch category, the location, and clones of the
/// conflicting values so the assertion layer can render a message without
/// revisiting the inputs. Constructed once per failed comparison and never
/// mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Difference {
    kind: DifferenceKind,
    path: Path,
    actual: Option<Node>,
    expected: Option<Node>,
}

impl Difference {
    pub(crate) fn new(
        kind: DifferenceKind,
        path: Path,
        actual: Option<Node>,
        expected: Option<Node>,
    ) -> Self {
        Self { kind, path, actual, expected }
    }

    /// Returns the mismatch category.
    #[must_use]
    pub fn kind(&self) -> &DifferenceKind {
        &self.kind
    }

    /// Returns the location of the mismatch.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the actual-side value at the mismatch, when one exists.
    #[must_use]
    pub fn actual(&self) -> Option<&Node> {
        self.actual.as_ref()
    }

    /// Returns the expected-side value at the mismatch, when one exists.
    #[must_use]
    pub fn expected(&self) -> Option<&Node> {
        self.expected.as_ref()
    }
}

/// Walks two trees in lock step and reports the first mismatch.
///
/// The comparator is pure and synchronous: no shared mutable state, no
/// I/O. Recursion depth equals tree depth; no explicit bound is enforced.
/// A single instance may serve concurrent comparisons as long as any
/// registered override predicates are themselves side-effect-free.
///
/// ```
/// # use jeq_core::{CompareMode, DifferenceKind, Differentiator, Node};
/// let actual = Node::from_json_str("{\"id\":1}")?;
/// let expected = Node::from_json_str("{\"id\":2}")?;
/// let differ = Differentiator::new(CompareMode::Strict);
/// let difference = differ
///     .find_first_difference(Some(&actual), Some(&expected))
///     .expect("the trees differ");
/// assert_eq!(*difference.kind(), DifferenceKind::OtherValue);
/// assert_eq!(difference.path().to_string(), "$.id");
/// # Ok::<(), jeq_core::ParseError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Differentiator {
    mode: CompareMode,
    overrides: ScalarOverrides,
}

impl Differentiator {
    /// Creates a comparator for the given mode with exact scalar equality.
    #[must_use]
    pub fn new(mode: CompareMode) -> Self {
        Self { mode, overrides: ScalarOverrides::new() }
    }

    /// Replaces the scalar override set.
    ///
    /// ```
    /// # use jeq_core::{CompareMode, Differentiator, Node, ScalarOverrides};
    /// let differ = Differentiator::new(CompareMode::Strict)
    ///     .with_overrides(ScalarOverrides::number_tolerance(1e-3)?);
    /// let lhs = Node::from_json_str("1.1232")?;
    /// let rhs = Node::from_json_str("1.1235")?;
    /// assert!(differ.find_first_difference(Some(&lhs), Some(&rhs)).is_none());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn with_overrides(mut self, overrides: ScalarOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Returns the configured comparison mode.
    #[must_use]
    pub fn mode(&self) -> CompareMode {
        self.mode
    }

    /// Compares two trees and returns the first difference, or `None` when
    /// they are equivalent under the configured mode.
    ///
    /// `None` inputs model absent trees: both absent compare equal, a
    /// one-sided absence reports [`DifferenceKind::ActualIsNull`] or
    /// [`DifferenceKind::ExpectedIsNull`].
    #[must_use]
    pub fn find_first_difference(
        &self,
        actual: Option<&Node>,
        expected: Option<&Node>,
    ) -> Option<Difference> {
        self.diff_nodes(actual, expected, &Path::root())
    }

    pub(crate) fn diff_nodes(
        &self,
        actual: Option<&Node>,
        expected: Option<&Node>,
        path: &Path,
    ) -> Option<Difference> {
        match (actual, expected) {
            (None, None) => None,
            (Some(a), Some(e)) if std::ptr::eq(a, e) => None,
            (None, Some(e)) => Some(Difference::new(
                DifferenceKind::ActualIsNull,
                path.clone(),
                None,
                Some(e.clone()),
            )),
            (Some(a), None) => Some(Difference::new(
                DifferenceKind::ExpectedIsNull,
                path.clone(),
                Some(a.clone()),
                None,
            )),
            (Some(a), Some(e)) => self.diff_present(a, e, path),
        }
    }

    fn diff_present(&self, actual: &Node, expected: &Node, path: &Path) -> Option<Difference> {
        match (actual, expected) {
            (Node::Object(a), Node::Object(e)) => self.diff_objects(a, e, path),
            (Node::Array(a), Node::Array(e)) => match self.mode {
                CompareMode::Contains => self.match_expected_elements(a, e, path),
                CompareMode::Strict => self.diff_arrays(a, e, path),
            },
            (Node::Value(a), Node::Value(e)) => self.diff_scalars(a, e, path),
            _ => Some(Difference::new(
                DifferenceKind::OtherType,
                path.clone(),
                Some(actual.clone()),
                Some(expected.clone()),
            )),
        }
    }
}
