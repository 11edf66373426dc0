use super::{Difference, DifferenceKind, Differentiator, Path};
use crate::Node;

impl Differentiator {
    /// Strict array comparison: equal length, then pairwise in index order.
    pub(super) fn diff_arrays(
        &self,
        actual: &[Node],
        expected: &[Node],
        path: &Path,
    ) -> Option<Difference> {
        if actual.len() != expected.len() {
            return Some(Difference::new(
                DifferenceKind::DifferentLength { actual: actual.len(), expected: expected.len() },
                path.clone(),
                Some(Node::Array(actual.to_vec())),
                Some(Node::Array(expected.to_vec())),
            ));
        }

        for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
            let difference = self.diff_nodes(Some(a), Some(e), &path.add_index(index));
            if difference.is_some() {
                return difference;
            }
        }

        None
    }

    /// Contains-mode array comparison: every expected element must appear
    /// among the actual elements in the same relative order, with extra
    /// actual elements tolerated.
    ///
    /// The cursor only moves forward. When a scan fails and unmatched
    /// candidates remain, the nested difference against the element at the
    /// cursor is returned, which surfaces deep mismatches such as
    /// `$.items[1].id` rather than a bare missing-element report.
    pub(super) fn match_expected_elements(
        &self,
        actual: &[Node],
        expected: &[Node],
        path: &Path,
    ) -> Option<Difference> {
        let mut matching_index = 0usize;

        for (index, expected_item) in expected.iter().enumerate() {
            let element_path = path.add_index(index);
            let matched = actual[matching_index..].iter().position(|candidate| {
                self.diff_nodes(Some(candidate), Some(expected_item), &element_path).is_none()
            });

            match matched {
                Some(offset) => matching_index += offset + 1,
                None if matching_index >= actual.len() => {
                    let exists_out_of_order = actual.iter().any(|candidate| {
                        self.diff_nodes(Some(candidate), Some(expected_item), &element_path)
                            .is_none()
                    });
                    let kind = if exists_out_of_order {
                        DifferenceKind::WrongOrder
                    } else {
                        DifferenceKind::ActualMissesElement
                    };
                    return Some(Difference::new(
                        kind,
                        element_path,
                        None,
                        Some(expected_item.clone()),
                    ));
                }
                None => {
                    return self.diff_nodes(
                        Some(&actual[matching_index]),
                        Some(expected_item),
                        &element_path,
                    );
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{CompareMode, DifferenceKind, Differentiator, Node};

    fn parse(text: &str) -> Node {
        Node::from_json_str(text).expect("test document parses")
    }

    fn strict() -> Differentiator {
        Differentiator::new(CompareMode::Strict)
    }

    fn contains() -> Differentiator {
        Differentiator::new(CompareMode::Contains)
    }

    #[test]
    fn strict_length_mismatch_carries_both_lengths() {
        let actual = parse("[\"fork\",\"knife\",\"spoon\"]");
        let expected = parse("[\"fork\",\"knife\"]");
        let difference = strict().find_first_difference(Some(&actual), Some(&expected)).unwrap();
        assert_eq!(*difference.kind(), DifferenceKind::DifferentLength { actual: 3, expected: 2 });
        assert_eq!(difference.path().to_string(), "$");
    }

    #[test]
    fn strict_comparison_is_order_sensitive() {
        let actual = parse("[\"fork\",\"knife\",\"spoon\"]");
        let expected = parse("[\"fork\",\"spoon\",\"knife\"]");
        let difference = strict().find_first_difference(Some(&actual), Some(&expected)).unwrap();
        assert_eq!(*difference.kind(), DifferenceKind::OtherValue);
        assert_eq!(difference.path().to_string(), "$[1]");
    }

    #[test]
    fn contains_mode_tolerates_extra_elements() {
        let actual = parse("[\"fork\",\"knife\",\"spoon\"]");
        let expected = parse("[\"fork\",\"spoon\"]");
        assert!(contains().find_first_difference(Some(&actual), Some(&expected)).is_none());
    }

    #[test]
    fn contains_mode_reports_missing_element() {
        let actual = parse("[\"fork\",\"knife\"]");
        let expected = parse("[\"fork\",\"knife\",\"spoon\"]");
        let difference = contains().find_first_difference(Some(&actual), Some(&expected)).unwrap();
        assert_eq!(*difference.kind(), DifferenceKind::ActualMissesElement);
        assert_eq!(difference.path().to_string(), "$[2]");
    }

    #[test]
    fn contains_mode_distinguishes_wrong_order_from_missing() {
        let actual = parse("[\"fork\",\"knife\",\"spoon\"]");
        let expected = parse("[\"fork\",\"spoon\",\"knife\"]");
        let difference = contains().find_first_difference(Some(&actual), Some(&expected)).unwrap();
        assert_eq!(*difference.kind(), DifferenceKind::WrongOrder);
        assert_eq!(difference.path().to_string(), "$[2]");
    }

    #[test]
    fn contains_mode_surfaces_nested_mismatch_at_cursor() {
        let actual = parse("[{\"id\":1},{\"id\":2}]");
        let expected = parse("[{\"id\":3}]");
        let difference = contains().find_first_difference(Some(&actual), Some(&expected)).unwrap();
        assert_eq!(*difference.kind(), DifferenceKind::OtherValue);
        assert_eq!(difference.path().to_string(), "$[0].id");
    }

    #[test]
    fn contains_mode_cursor_never_rewinds() {
        // The first expected element consumes the only candidate, so the
        // second expected element finds it again only behind the cursor.
        let actual = parse("[1]");
        let expected = parse("[1,1]");
        let difference = contains().find_first_difference(Some(&actual), Some(&expected)).unwrap();
        assert_eq!(*difference.kind(), DifferenceKind::WrongOrder);
        assert_eq!(difference.path().to_string(), "$[1]");
    }

    #[test]
    fn empty_expected_array_is_contained_in_anything() {
        let actual = parse("[1,2,3]");
        let expected = parse("[]");
        assert!(contains().find_first_difference(Some(&actual), Some(&expected)).is_none());
    }
}
