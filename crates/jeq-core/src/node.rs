use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

use crate::ParseError;

/// The canonical tree model consumed by the comparator.
///
/// A node is one of exactly three shapes: an object, an array, or an atomic
/// scalar. Trees are immutable once constructed; comparison never mutates
/// either input.
///
/// ```
/// # use jeq_core::Node;
/// let node = Node::from_json_str("{\"hello\":\"world\"}")?;
/// assert!(matches!(node, Node::Object(_)));
/// # Ok::<(), jeq_core::ParseError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Mapping from string key to child node. Keys are unique and keep their
    /// declaration order for display; the order carries no comparison
    /// semantics.
    Object(IndexMap<String, Node>),
    /// Ordered sequence of child nodes.
    Array(Vec<Node>),
    /// Atomic scalar leaf.
    Value(Scalar),
}

/// An atomic scalar leaf with its value-kind tag.
///
/// Numbers are held as IEEE-754 doubles, so `1` and `1.0` canonicalize to
/// the same scalar. A number never equals a numeric-looking string; that is
/// a kind mismatch, which is itself a difference.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// JSON `null`.
    Null,
    /// JSON `true` or `false`.
    Bool(bool),
    /// JSON number as a double-precision float.
    Number(f64),
    /// JSON string.
    String(String),
}

/// Value-kind tag of a [`Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    /// The null kind.
    Null,
    /// The boolean kind (`true` and `false` share it).
    Boolean,
    /// The numeric kind.
    Number,
    /// The string kind.
    String,
}

impl Node {
    /// Parses a JSON string into the canonical node representation.
    ///
    /// ```
    /// # use jeq_core::Node;
    /// let node = Node::from_json_str("[1,2,3]")?;
    /// assert!(matches!(node, Node::Array(_)));
    /// # Ok::<(), jeq_core::ParseError>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, ParseError> {
        let value: JsonValue =
            serde_json::from_str(input).map_err(|source| ParseError::new(input, source))?;
        Ok(Self::from_json_value(value))
    }

    /// Converts an already-parsed serde JSON value into a [`Node`].
    #[must_use]
    pub fn from_json_value(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Value(Scalar::Null),
            JsonValue::Bool(v) => Self::Value(Scalar::Bool(v)),
            JsonValue::Number(num) => {
                // Without arbitrary precision every serde_json number maps
                // onto an f64, possibly losing precision beyond 2^53.
                Self::Value(Scalar::Number(num.as_f64().unwrap_or_default()))
            }
            JsonValue::String(s) => Self::Value(Scalar::String(s)),
            JsonValue::Array(values) => {
                Self::Array(values.into_iter().map(Self::from_json_value).collect())
            }
            JsonValue::Object(map) => {
                let mut object = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key, Self::from_json_value(value));
                }
                Self::Object(object)
            }
        }
    }

    /// Converts the node back into a serde JSON value.
    ///
    /// Whole-valued numbers are emitted with minimal integer representation
    /// so `1.0` renders as `1`. Non-finite numbers have no JSON form and
    /// become `null`, matching how serde serializes a non-finite `f64`.
    #[must_use]
    pub fn to_json_value(&self) -> JsonValue {
        match self {
            Self::Value(Scalar::Null) => JsonValue::Null,
            Self::Value(Scalar::Bool(v)) => JsonValue::Bool(*v),
            Self::Value(Scalar::Number(n)) => {
                json_number_from_f64(*n).map_or(JsonValue::Null, JsonValue::Number)
            }
            Self::Value(Scalar::String(s)) => JsonValue::String(s.clone()),
            Self::Array(values) => {
                JsonValue::Array(values.iter().map(Self::to_json_value).collect())
            }
            Self::Object(map) => {
                let mut object = JsonMap::new();
                for (key, value) in map {
                    object.insert(key.clone(), value.to_json_value());
                }
                JsonValue::Object(object)
            }
        }
    }

    /// Returns the human description of the node used in diagnostics.
    ///
    /// ```
    /// # use jeq_core::Node;
    /// assert_eq!(Node::from_json_str("{}")?.describe(), "an object");
    /// assert_eq!(Node::from_json_str("2")?.describe(), "an integer");
    /// # Ok::<(), jeq_core::ParseError>(())
    /// ```
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Object(_) => "an object",
            Self::Array(_) => "an array",
            Self::Value(scalar) => scalar.describe(),
        }
    }
}

impl Scalar {
    /// Returns the value-kind tag of this scalar.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Null => ScalarKind::Null,
            Self::Bool(_) => ScalarKind::Boolean,
            Self::Number(_) => ScalarKind::Number,
            Self::String(_) => ScalarKind::String,
        }
    }

    /// Returns the human description of the scalar used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Null => "type null",
            Self::Bool(_) => "a true/false value",
            Self::Number(n) if n.fract() == 0.0 => "an integer",
            Self::Number(_) => "a float",
            Self::String(_) => "a string",
        }
    }
}

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        Self::from_json_value(value)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(Self::from_json_value)
    }
}

// The exclusive upper bounds matter: `i64::MAX as f64` is 2^63 and
// `u64::MAX as f64` is 2^64, neither of which fits the respective integer
// type, so admitting them would saturate the cast.
fn json_number_from_f64(value: f64) -> Option<JsonNumber> {
    if value.fract() == 0.0 && !(value == 0.0 && value.is_sign_negative()) {
        if (i64::MIN as f64) <= value && value < (i64::MAX as f64) {
            return Some(JsonNumber::from(value as i64));
        }
        if value >= 0.0 && value < (u64::MAX as f64) {
            return Some(JsonNumber::from(value as u64));
        }
    }
    JsonNumber::from_f64(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keys_keep_declaration_order() {
        let node = Node::from_json_str("{\"zebra\":1,\"apple\":2,\"mango\":3}").unwrap();
        let Node::Object(map) = node else {
            panic!("expected an object");
        };
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn integer_and_float_forms_canonicalize_identically() {
        let lhs = Node::from_json_str("1").unwrap();
        let rhs = Node::from_json_str("1.0").unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn number_is_not_a_numeric_string() {
        let number = Node::from_json_str("1").unwrap();
        let string = Node::from_json_str("\"1\"").unwrap();
        assert_ne!(number, string);
    }

    #[test]
    fn describe_covers_every_kind() {
        let cases = [
            ("{\"a\":1}", "an object"),
            ("[]", "an array"),
            ("\"hi\"", "a string"),
            ("2", "an integer"),
            ("2.5", "a float"),
            ("true", "a true/false value"),
            ("null", "type null"),
        ];
        for (text, expected) in cases {
            assert_eq!(Node::from_json_str(text).unwrap().describe(), expected, "{text}");
        }
    }

    #[test]
    fn whole_numbers_render_minimally() {
        let node = Node::from_json_str("5.0").unwrap();
        assert_eq!(serde_json::to_string(&node).unwrap(), "5");
    }

    #[test]
    fn non_finite_numbers_serialize_as_null() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let node = Node::Value(Scalar::Number(value));
            assert_eq!(node.to_json_value(), serde_json::Value::Null, "{value}");
            assert_eq!(serde_json::to_string(&node).unwrap(), "null", "{value}");
        }
    }

    #[test]
    fn integer_boundaries_render_exactly() {
        let two_pow_63 = Node::Value(Scalar::Number(9_223_372_036_854_775_808.0));
        assert_eq!(serde_json::to_string(&two_pow_63).unwrap(), "9223372036854775808");

        let i64_min = Node::Value(Scalar::Number(i64::MIN as f64));
        assert_eq!(serde_json::to_string(&i64_min).unwrap(), "-9223372036854775808");
    }

    #[test]
    fn parse_error_carries_offending_text() {
        let err = Node::from_json_str("[1,").unwrap_err();
        assert_eq!(err.text(), "[1,");
    }

    #[test]
    fn node_deserializes_from_plain_json() {
        let node: Node = serde_json::from_str("{\"a\":[1,true,null]}").unwrap();
        let reparsed = Node::from_json_str("{\"a\":[1,true,null]}").unwrap();
        assert_eq!(node, reparsed);
    }

    #[test]
    fn scalar_kinds_distinguish_values_from_types() {
        let truthy = Scalar::Bool(true);
        let falsy = Scalar::Bool(false);
        assert_eq!(truthy.kind(), falsy.kind());
        assert_ne!(Scalar::Number(1.0).kind(), Scalar::String("1".into()).kind());
    }
}
