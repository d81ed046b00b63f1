//! Token definitions for the markdown lexer
//!
//! Two layers live here:
//!
//! - [`LineMarker`] is a logos token set that recognizes the block markers a line can open with
//!   (fences, heading hashes, bullets, ordinals, table pipes). The lexer runs it over the first
//!   significant characters of a line to classify it.
//! - [`BlockToken`] is what the lexer hands to the parser: one classified block at a time.
use logos::Logos;
use serde::Serialize;

/// Block markers recognized at the start of a line (after indentation)
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineMarker {
    // Fenced code block opener/closer
    #[token("```")]
    Fence,

    // One to six hashes followed by a space
    #[regex(r"#{1,6} ")]
    Heading,

    // Unordered list bullets
    #[regex(r"[*+\-] ")]
    Bullet,

    // Ordered list markers: "1. ", "42. "
    #[regex(r"[0-9]+\. ")]
    Ordinal,

    // Table rows
    #[token("|")]
    Pipe,
}

impl LineMarker {
    /// Recognize the marker at the very start of `line`, if any
    pub fn at_start(line: &str) -> Option<(LineMarker, &str)> {
        let mut lexer = LineMarker::lexer(line);
        match lexer.next() {
            Some(Ok(marker)) if lexer.span().start == 0 => Some((marker, lexer.slice())),
            _ => None,
        }
    }
}

/// The kinds of block tokens the lexer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Header,
    Paragraph,
    ListItem,
    CodeBlock,
    HorizontalRule,
    Table,
    EndOfInput,
}

/// A classified block of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockToken {
    pub kind: TokenKind,
    pub content: String,
    /// Heading depth, 1 to 6. Zero for every other kind.
    pub level: usize,
    /// Leading whitespace width of the line the token starts on (tabs count as 4)
    pub indent: usize,
    /// Numeric value of an ordered list marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u64>,
    /// Info string following a code fence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl BlockToken {
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            level: 0,
            indent: 0,
            ordinal: None,
            info: None,
        }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_ordinal(mut self, ordinal: Option<u64>) -> Self {
        self.ordinal = ordinal;
        self
    }

    pub fn with_info(mut self, info: Option<String>) -> Self {
        self.info = info;
        self
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_list_item(&self) -> bool {
        self.kind == TokenKind::ListItem
    }
}
