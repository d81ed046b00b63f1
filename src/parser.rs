//! Parser module for markdown documents
//!
//! The parser turns the lexer's block tokens into a [`Node`] tree rooted at a
//! [`NodeKind::Document`](crate::ast::NodeKind::Document) node. Block text of headers,
//! paragraphs and list items is scanned for inline markup with [`parse_inline`].
//!
//! ## Testing
//!
//! Structural assertions on parsed documents should go through the fluent API in the
//! [testing module](crate::testing).

pub mod inline;
mod lists;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod tables;

pub use crate::ast::{Node, NodeKind};
pub use inline::parse_inline;
pub use parser::Parser;

/// Main parser function that takes source text and returns the parsed document.
/// This is the primary entry point for parsing markdown documents.
pub fn parse_document(source: &str) -> Node {
    Parser::from_source(source).parse()
}
