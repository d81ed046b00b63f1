//! # mdtree
//!
//! A Markdown parser producing a uniform block and inline syntax tree.
//!
//! Parsing runs in three stages:
//!
//! - [`lexer`] turns source text into block tokens, one per header, paragraph, list item, code
//!   block, horizontal rule or table
//! - [`parser`] assembles the tokens into a [`Node`] tree, nesting lists by indentation and
//!   splitting tables into rows and cells
//! - the inline scanner ([`parse_inline`]) expands the text of headers, paragraphs and list
//!   items into text, emphasis, strong, link and image nodes
//!
//! [`processor`] wraps the stages behind `<stage>-<format>` spec strings for the `mdtree`
//! binary, and [`formats`] holds the tag and treeviz renderers.
//!
//! ## Testing
//!
//! See the [testing module](testing) for the fluent `assert_ast` API and the sample sources
//! used throughout the test suite.

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;

pub use ast::{AstNode, Node, NodeKind};
pub use lexer::{tokenize, BlockToken, Lexer, TokenKind};
pub use parser::{parse_document, parse_inline, Parser};
