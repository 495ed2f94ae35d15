//! domtree: A minimal element tree with CSS-like selector matching.
//!
//! This models just enough of a document for input dispatch to be tested
//! without a live browser:
//!
//! - [`Tree`]: an arena of elements with parent/child links and a focus slot.
//! - [`Element`]: tag, id, classes, and attributes, with a builder API.
//! - [`Selector`]: a compound simple selector (`a.entry[data-confirm]`),
//!   parsed once and matched as a pure function of a node.
//!
//! Ancestor resolution ([`Tree::closest`], [`Tree::ancestor_chain`]) is kept
//! independent of any event machinery so dispatchers can be exercised
//! against constructed trees.

mod error;
pub use error::SelectorError;

mod selector;
pub use selector::Selector;

mod tree;
pub use tree::{Element, NodeId, Tree};
