//! Structural first-difference comparison for JSON-shaped trees.
//!
//! `jeq-core` walks an actual and an expected tree in lock step and
//! reports the single first point of divergence: a mismatch kind, a
//! root-relative path, and the conflicting values. Two modes are
//! supported: strict equivalence and contains-subtree containment, plus
//! per-kind scalar overrides for custom equivalence such as
//! tolerance-based float comparison.
//!
//! ```
//! use jeq_core::{CompareMode, DifferenceKind, Differentiator, Node};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let actual = Node::from_json_str("{\"leaves\":10}")?;
//!     let expected = Node::from_json_str("{\"branches\":5,\"leaves\":10}")?;
//!     let differ = Differentiator::new(CompareMode::Strict);
//!     let difference = differ
//!         .find_first_difference(Some(&actual), Some(&expected))
//!         .expect("the trees differ");
//!     assert_eq!(*difference.kind(), DifferenceKind::ActualMissesProperty);
//!     assert_eq!(difference.path().to_string(), "$.branches");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compare;
mod error;
mod node;
mod options;
pub mod render;

pub use compare::{Difference, DifferenceKind, Differentiator, Path, PathSegment};
pub use error::{OptionsError, ParseError};
pub use node::{Node, Scalar, ScalarKind};
pub use options::{CompareMode, ScalarOverrides};
pub use render::{render, RenderConfig};

/// Returns the semantic version of the `jeq-core` crate.
///
/// ```
/// assert!(!jeq_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
