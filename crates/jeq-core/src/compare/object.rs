use indexmap::IndexMap;

use super::{Difference, DifferenceKind, Differentiator, Path};
use crate::{CompareMode, Node};

impl Differentiator {
    /// Compares two objects property by property.
    ///
    /// Missing-key detection runs over every expected key before any value
    /// is compared, so an absent property wins over a deeper mismatch.
    /// Which report surfaces first is determined by the expected side's
    /// declaration order.
    pub(super) fn diff_objects(
        &self,
        actual: &IndexMap<String, Node>,
        expected: &IndexMap<String, Node>,
        path: &Path,
    ) -> Option<Difference> {
        for (key, value) in expected {
            if !actual.contains_key(key) {
                return Some(Difference::new(
                    DifferenceKind::ActualMissesProperty,
                    path.add_key(key),
                    None,
                    Some(value.clone()),
                ));
            }
        }

        if self.mode == CompareMode::Strict {
            for (key, value) in actual {
                if !expected.contains_key(key) {
                    return Some(Difference::new(
                        DifferenceKind::ExpectedMissesProperty,
                        path.add_key(key),
                        Some(value.clone()),
                        None,
                    ));
                }
            }
        }

        for (key, expected_value) in expected {
            let child = path.add_key(key);
            let difference = self.diff_nodes(actual.get(key), Some(expected_value), &child);
            if difference.is_some() {
                return difference;
            }
        }

        None
    }
}
