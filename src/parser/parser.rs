//! Recursive-descent block parser
//!
//! The parser holds two tokens, `current` and `next`, and walks the lexer's token stream once.
//! Each token is dispatched to a builder; list items are the only tokens that pull more tokens
//! from the stream themselves (see `lists.rs`). Builders always leave `current` on the last
//! token they used, and the main loop advances exactly once per block, so no token is skipped
//! or read twice.

use tracing::debug;

use super::inline::parse_inline;
use super::tables::build_table;
use crate::ast::{Node, NodeKind};
use crate::lexer::{BlockToken, Lexer, TokenKind};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(super) current: BlockToken,
    pub(super) next: BlockToken,
}

impl<'a> Parser<'a> {
    /// Create a parser over `lexer`, drawing the first two tokens
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();
        Self {
            lexer,
            current,
            next,
        }
    }

    pub fn from_source(source: &'a str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Move the lookahead window one token forward
    pub(super) fn advance(&mut self) {
        let following = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.next, following);
    }

    /// Consume the whole token stream and return the document root
    pub fn parse(&mut self) -> Node {
        let mut document = Node::new(NodeKind::Document);

        while !self.current.is_end() {
            if let Some(block) = self.parse_block() {
                document.children.push(block);
            }
            self.advance();
        }

        debug!(blocks = document.children.len(), "parsed document");
        document
    }

    /// Build the node for the current token. Returns `None` for blocks that are dropped.
    fn parse_block(&mut self) -> Option<Node> {
        match self.current.kind {
            TokenKind::Header => Some(self.parse_header()),
            TokenKind::Paragraph => Some(self.parse_paragraph()),
            TokenKind::ListItem => Some(self.parse_list()),
            TokenKind::CodeBlock => Some(self.parse_code_block()),
            TokenKind::HorizontalRule => Some(Node::new(NodeKind::HorizontalRule)),
            TokenKind::Table => build_table(&self.current.content),
            TokenKind::EndOfInput => None,
        }
    }

    fn parse_header(&self) -> Node {
        let content = &self.current.content;
        Node::new(NodeKind::Header)
            .with_level(self.current.level)
            .with_content(content.as_str())
            .with_children(parse_inline(content))
    }

    fn parse_paragraph(&self) -> Node {
        let content = &self.current.content;
        Node::new(NodeKind::Paragraph)
            .with_content(content.as_str())
            .with_children(parse_inline(content))
    }

    fn parse_code_block(&self) -> Node {
        Node::new(NodeKind::CodeBlock)
            .with_content(self.current.content.as_str())
            .with_info(self.current.info.clone())
    }
}
