use super::{Difference, DifferenceKind, Differentiator, Path};
use crate::{Node, Scalar};

impl Differentiator {
    /// Compares two scalar leaves.
    ///
    /// Mismatched value kinds report `OtherType`. Matching kinds consult
    /// the per-kind override when one is registered, passing the native
    /// representations, and otherwise compare exactly: numbers by numeric
    /// value, strings and booleans by value.
    pub(super) fn diff_scalars(
        &self,
        actual: &Scalar,
        expected: &Scalar,
        path: &Path,
    ) -> Option<Difference> {
        let equal = match (actual, expected) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(e)) => self.overrides.booleans_equal(*a, *e),
            (Scalar::Number(a), Scalar::Number(e)) => self.overrides.numbers_equal(*a, *e),
            (Scalar::String(a), Scalar::String(e)) => self.overrides.strings_equal(a, e),
            _ => {
                return Some(Difference::new(
                    DifferenceKind::OtherType,
                    path.clone(),
                    Some(Node::Value(actual.clone())),
                    Some(Node::Value(expected.clone())),
                ));
            }
        };

        if equal {
            None
        } else {
            Some(Difference::new(
                DifferenceKind::OtherValue,
                path.clone(),
                Some(Node::Value(actual.clone())),
                Some(Node::Value(expected.clone())),
            ))
        }
    }
}
