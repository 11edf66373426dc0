//! Textual rendering of trees for diagnostic messages.

use crate::Node;

/// Layout options for rendering a tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderConfig {
    line_breaks: bool,
}

impl RenderConfig {
    /// Constructs a configuration producing compact single-line output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables indented multi-line output.
    #[must_use]
    pub fn with_line_breaks(mut self, enabled: bool) -> Self {
        self.line_breaks = enabled;
        self
    }

    /// Indicates whether multi-line output is enabled.
    #[must_use]
    pub fn line_breaks_enabled(self) -> bool {
        self.line_breaks
    }
}

/// Renders a tree, or its absence, as JSON text.
///
/// An absent tree renders as the literal `<null>` so diagnostic messages
/// can always interpolate something readable.
///
/// ```
/// # use jeq_core::{render, Node, RenderConfig};
/// let node = Node::from_json_str("{\"a\":1}")?;
/// assert_eq!(render(Some(&node), &RenderConfig::new()), "{\"a\":1}");
/// assert_eq!(render(None, &RenderConfig::new()), "<null>");
/// # Ok::<(), jeq_core::ParseError>(())
/// ```
#[must_use]
pub fn render(node: Option<&Node>, config: &RenderConfig) -> String {
    let Some(node) = node else {
        return "<null>".to_string();
    };
    let value = node.to_json_value();
    if config.line_breaks_enabled() {
        serde_json::to_string_pretty(&value).expect("serializing node")
    } else {
        serde_json::to_string(&value).expect("serializing node")
    }
}
