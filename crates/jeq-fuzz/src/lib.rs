//! Fuzzing harnesses for the jeq structural comparator.
//!
//! The helpers in this crate are intentionally lightweight so they can be
//! reused both from `cargo fuzz` targets and from property-based smoke
//! tests. Each public function accepts raw bytes and exercises a part of
//! the parsing and comparison pipeline while swallowing any recoverable
//! errors.
//!
//! # Examples
//!
//! Run the parse harness on a JSON snippet:
//!
//! ```
//! jeq_fuzz::fuzz_parse(b"{\"a\":1}");
//! ```
//!
//! Invoke the comparison harness on deterministic input:
//!
//! ```
//! jeq_fuzz::fuzz_compare(&[1, 2, 3, 4]);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use indexmap::IndexMap;
use jeq_core::{CompareMode, Differentiator, Node, Scalar};

const MAX_DEPTH: usize = 4;
const MAX_ARRAY_LEN: u8 = 6;
const MAX_OBJECT_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;

/// Feeds arbitrary bytes through the JSON parser.
///
/// Decoding failures are ignored so fuzzers can keep exploring.
///
/// ```
/// jeq_fuzz::fuzz_parse(b"{\"key\":\"value\"}");
/// ```
pub fn fuzz_parse(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Node::from_json_str(text);
    }
}

/// Drives both comparison modes with randomly generated trees.
///
/// The harness asserts the comparator's own invariants: every tree is
/// equivalent to itself, and repeating a comparison on unchanged inputs
/// yields an identical result.
///
/// ```
/// jeq_fuzz::fuzz_compare(b"seed");
/// ```
pub fn fuzz_compare(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Some(actual) = random_node(&mut unstructured, MAX_DEPTH) else {
        return;
    };
    let Some(expected) = random_node(&mut unstructured, MAX_DEPTH) else {
        return;
    };

    for mode in [CompareMode::Strict, CompareMode::Contains] {
        let differ = Differentiator::new(mode);
        assert!(
            differ.find_first_difference(Some(&actual), Some(&actual)).is_none(),
            "tree must be equivalent to itself in {mode} mode"
        );
        let first = differ.find_first_difference(Some(&actual), Some(&expected));
        let second = differ.find_first_difference(Some(&actual), Some(&expected));
        assert_eq!(first, second, "comparison must be idempotent in {mode} mode");
    }
}

fn random_node(u: &mut Unstructured<'_>, depth: usize) -> Option<Node> {
    let max: u8 = if depth == 0 { 3 } else { 5 };
    let choice: u8 = u.int_in_range(0..=max).ok()?;
    match choice {
        0 => Some(Node::Value(Scalar::Null)),
        1 => Some(Node::Value(Scalar::Bool(u.arbitrary().ok()?))),
        2 => {
            let value: f64 = u.arbitrary().ok()?;
            // NaN never equals itself, which would break the reflexivity
            // assertion below.
            let value = if value.is_finite() { value } else { 0.0 };
            Some(Node::Value(Scalar::Number(value)))
        }
        3 => Some(Node::Value(Scalar::String(random_string(u)?))),
        4 => {
            let len = usize::from(u.int_in_range(0..=MAX_ARRAY_LEN).ok()?);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(random_node(u, depth - 1)?);
            }
            Some(Node::Array(items))
        }
        _ => {
            let len = usize::from(u.int_in_range(0..=MAX_OBJECT_LEN).ok()?);
            let mut object = IndexMap::new();
            for _ in 0..len {
                let key = random_string(u)?;
                let value = random_node(u, depth - 1)?;
                object.insert(key, value);
            }
            Some(Node::Object(object))
        }
    }
}

fn random_string(u: &mut Unstructured<'_>) -> Option<String> {
    let len = usize::from(u.int_in_range(0..=MAX_STRING_LEN).ok()?);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let byte = u.int_in_range(b'a'..=b'z').ok()?;
        out.push(char::from(byte));
    }
    Some(out)
}
