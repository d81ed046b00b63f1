//! Lexer module for markdown documents
//!
//! The lexer segments raw text into block tokens: headers, paragraphs, list items, code blocks,
//! horizontal rules and tables, followed by a single end-of-input token.
//!
//! Indentation Handling
//!
//! The lexer does not build any nesting itself. Every token records the width of the
//! indentation its line started with (spaces count 1, tabs count 4), and the parser decides what
//! that width means. Today only list items use it, to nest lists under list items.
//!
//! Lookahead
//!
//! A paragraph swallows the lines after it until one looks like the start of another block.
//! Deciding that needs a peek at the next line; the cursor exposes that peek as a read-only
//! operation, so the lexer never has to save and restore a position.

pub mod cursor;
pub mod lexer_impl;
pub mod tokens;

pub use cursor::Cursor;
pub use lexer_impl::{tokenize, Lexer};
pub use tokens::{BlockToken, LineMarker, TokenKind};
