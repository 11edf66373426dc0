use std::fmt;
use std::sync::Arc;

use crate::OptionsError;

/// Selects the notion of equivalence applied during comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompareMode {
    /// Exact structural and value match: same properties, same array length
    /// and order.
    #[default]
    Strict,
    /// Subtree containment: the actual tree must contain all expected
    /// structure but may carry extra properties and array elements.
    Contains,
}

impl CompareMode {
    /// Indicates whether extra actual-side structure is tolerated.
    #[must_use]
    pub fn ignores_extra(self) -> bool {
        matches!(self, Self::Contains)
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Contains => f.write_str("contains"),
        }
    }
}

type NumberPredicate = Arc<dyn Fn(f64, f64) -> bool + Send + Sync>;
type StringPredicate = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;
type BoolPredicate = Arc<dyn Fn(bool, bool) -> bool + Send + Sync>;

/// Per-kind equality overrides consulted for leaf comparisons.
///
/// Each slot replaces the exact kind-aware equality for scalars of that
/// kind with a caller-supplied predicate over the native representation.
/// Predicates must be side-effect-free; they may be invoked concurrently
/// from independent comparisons.
///
/// ```
/// # use jeq_core::ScalarOverrides;
/// let overrides = ScalarOverrides::number_tolerance(1e-3)?;
/// assert!(format!("{overrides:?}").contains("number: true"));
/// # Ok::<(), jeq_core::OptionsError>(())
/// ```
#[derive(Clone, Default)]
pub struct ScalarOverrides {
    number: Option<NumberPredicate>,
    string: Option<StringPredicate>,
    boolean: Option<BoolPredicate>,
}

impl ScalarOverrides {
    /// Creates an empty override set; all scalars compare exactly.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a predicate for numeric scalars, called as
    /// `(actual, expected)`.
    #[must_use]
    pub fn with_number<F>(mut self, predicate: F) -> Self
    where
        F: Fn(f64, f64) -> bool + Send + Sync + 'static,
    {
        self.number = Some(Arc::new(predicate));
        self
    }

    /// Registers a predicate for string scalars.
    #[must_use]
    pub fn with_string<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.string = Some(Arc::new(predicate));
        self
    }

    /// Registers a predicate for boolean scalars.
    #[must_use]
    pub fn with_boolean<F>(mut self, predicate: F) -> Self
    where
        F: Fn(bool, bool) -> bool + Send + Sync + 'static,
    {
        self.boolean = Some(Arc::new(predicate));
        self
    }

    /// Builds an override set that treats numbers within an absolute
    /// tolerance as equal.
    ///
    /// The comparison runs on the numeric values, so `1.50` and `1.5` fall
    /// within any non-negative tolerance regardless of their original
    /// textual formatting.
    ///
    /// ```
    /// # use jeq_core::ScalarOverrides;
    /// assert!(ScalarOverrides::number_tolerance(-1.0).is_err());
    /// ```
    pub fn number_tolerance(tolerance: f64) -> Result<Self, OptionsError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(OptionsError::InvalidTolerance { value: tolerance });
        }
        Ok(Self::new().with_number(move |actual, expected| (actual - expected).abs() <= tolerance))
    }

    pub(crate) fn numbers_equal(&self, actual: f64, expected: f64) -> bool {
        match &self.number {
            Some(predicate) => predicate(actual, expected),
            None => actual == expected,
        }
    }

    pub(crate) fn strings_equal(&self, actual: &str, expected: &str) -> bool {
        match &self.string {
            Some(predicate) => predicate(actual, expected),
            None => actual == expected,
        }
    }

    pub(crate) fn booleans_equal(&self, actual: bool, expected: bool) -> bool {
        match &self.boolean {
            Some(predicate) => predicate(actual, expected),
            None => actual == expected,
        }
    }
}

impl fmt::Debug for ScalarOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarOverrides")
            .field("number", &self.number.is_some())
            .field("string", &self.string.is_some())
            .field("boolean", &self.boolean.is_some())
            .finish()
    }
}
