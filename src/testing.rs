//! Testing utilities for AST assertions
//!
//! # Parser Testing Guidelines
//!
//! Parser tests use two tools together:
//!
//! 1. **[MarkdownSources](crate::processor::sources::MarkdownSources)** for the curated sample
//!    documents under `samples/`
//! 2. **[assert_ast](fn@assert_ast)** for verifying the shape and content of the tree
//!
//! Short inline sources are fine for focused edge cases. Anything describing a realistic
//! document belongs in a sample file, so a change in parsing rules is reviewed in one place.
//!
//! ## Why assert_ast
//!
//! Every node in the tree has the same shape, so hand-written checks turn into long chains of
//! `doc.children[0].children[1].children[0]` indexing with no context when they fail. The fluent
//! API mirrors the tree instead:
//!
//! ```rust,ignore
//! use mdtree::parse_document;
//! use mdtree::testing::assert_ast;
//! use mdtree::NodeKind;
//!
//! let doc = parse_document("- a\n  - b\n- c");
//! assert_ast(&doc).item_count(1).item(0, |list| {
//!     list.assert_kind(NodeKind::List)
//!         .child_count(2)
//!         .child(0, |item| {
//!             item.text("a").sublist(|nested| {
//!                 nested.indent(2).child(0, |b| {
//!                     b.text("b");
//!                 });
//!             });
//!         });
//! });
//! ```
//!
//! Failures carry the path to the offending node:
//!
//! ```text
//! items[0]:children[0]: Expected text to be 'a', but got 'x'
//! ```
//!
//! Count mismatches summarize what was actually found:
//!
//! ```text
//! items[0]: Expected 3 children, found 2 children: [ListItem, ListItem]
//! ```

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{assert_ast, DocumentAssertion, NodeAssertion};
pub use testing_matchers::TextMatch;
