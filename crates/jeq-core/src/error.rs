use thiserror::Error;

/// Error produced when raw text cannot be parsed into a [`Node`](crate::Node).
///
/// The offending input is retained so assertion layers can quote it back to
/// the user.
#[derive(Debug, Error)]
#[error("invalid JSON document: {source}")]
pub struct ParseError {
    text: String,
    source: serde_json::Error,
}

impl ParseError {
    pub(crate) fn new(text: impl Into<String>, source: serde_json::Error) -> Self {
        Self { text: text.into(), source }
    }

    /// Returns the input text that failed to parse.
    ///
    /// ```
    /// # use jeq_core::Node;
    /// let err = Node::from_json_str("{not json").unwrap_err();
    /// assert_eq!(err.text(), "{not json");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Errors emitted when constructing comparison options.
///
/// Configuration mistakes are reported here, at the construction boundary,
/// so a comparison never fails partway through recursion.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    /// A numeric tolerance must be finite and non-negative.
    #[error("numeric tolerance must be finite and non-negative, got {value}")]
    InvalidTolerance {
        /// The rejected tolerance value.
        value: f64,
    },
}
