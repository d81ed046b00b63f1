//! Implementation of the markdown block lexer
//!
//! The lexer walks the source with a [`Cursor`] and emits one [`BlockToken`] per call to
//! [`Lexer::next_token`]. Classification looks at the first significant characters of a line
//! (see [`LineMarker`]); everything that is not a recognized construct becomes a paragraph.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::cursor::{is_blank, Cursor};
use super::tokens::{BlockToken, LineMarker, TokenKind};

/// Three or more dashes, optionally separated by spaces, and nothing else
static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:- *){3,}$").unwrap());

const FENCE: &str = "```";

/// Block lexer over a single document
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Produce the next block token.
    ///
    /// Once the input is exhausted every call returns an `EndOfInput` token.
    pub fn next_token(&mut self) -> BlockToken {
        self.cursor.skip_blank_lines();

        let (indent, indent_bytes) = self.cursor.measure_indent();
        self.cursor.advance(indent_bytes);

        if self.cursor.is_eof() {
            return BlockToken::end_of_input();
        }

        let line = self.cursor.current_line();
        let token = match LineMarker::at_start(line) {
            Some((LineMarker::Fence, _)) => self.read_code_block(),
            Some((LineMarker::Heading, marker)) => {
                self.cursor.advance(marker.len());
                let content = self.cursor.read_line().trim();
                BlockToken::new(TokenKind::Header, content).with_level(marker.len() - 1)
            }
            Some((LineMarker::Bullet, marker)) => {
                self.cursor.advance(marker.len());
                BlockToken::new(TokenKind::ListItem, self.cursor.read_line().trim_end())
                    .with_indent(indent)
            }
            Some((LineMarker::Ordinal, marker)) => {
                let ordinal = marker.trim_end_matches([' ', '.']).parse::<u64>().ok();
                self.cursor.advance(marker.len());
                BlockToken::new(TokenKind::ListItem, self.cursor.read_line().trim_end())
                    .with_indent(indent)
                    .with_ordinal(ordinal)
            }
            Some((LineMarker::Pipe, _)) => {
                BlockToken::new(TokenKind::Table, self.read_table()).with_indent(indent)
            }
            None if HORIZONTAL_RULE.is_match(line.trim_end()) => {
                self.cursor.read_line();
                BlockToken::new(TokenKind::HorizontalRule, "")
            }
            None => BlockToken::new(TokenKind::Paragraph, self.read_paragraph()).with_indent(indent),
        };

        trace!(
            kind = ?token.kind,
            indent = token.indent,
            level = token.level,
            offset = self.cursor.position(),
            "lexed block token"
        );
        token
    }

    /// Read a fenced code block. The cursor sits on the opening fence.
    ///
    /// Lines are taken verbatim up to a line whose trimmed content starts with a fence. Neither
    /// fence line is part of the content. A missing closing fence runs to the end of input.
    fn read_code_block(&mut self) -> BlockToken {
        let opening = self.cursor.read_line();
        let info = opening[FENCE.len()..].trim();
        let info = (!info.is_empty()).then(|| info.to_string());

        let mut lines: Vec<&str> = Vec::new();
        while self.cursor.skip_newline() {
            let line = self.cursor.read_line();
            if line.trim_start().starts_with(FENCE) {
                break;
            }
            lines.push(line.strip_suffix('\r').unwrap_or(line));
        }

        BlockToken::new(TokenKind::CodeBlock, lines.join("\n")).with_info(info)
    }

    /// Read a paragraph: the current line plus every continuation line after it
    fn read_paragraph(&mut self) -> String {
        let mut content = self.cursor.read_line().trim_end().to_string();
        while let Some(next) = self.cursor.following_line() {
            if !continues_paragraph(next) {
                break;
            }
            self.cursor.skip_newline();
            content.push('\n');
            content.push_str(self.cursor.read_line().trim());
        }
        content
    }

    /// Read consecutive table rows, each trimmed, joined by newlines
    fn read_table(&mut self) -> String {
        let mut rows = vec![self.cursor.read_line().trim().to_string()];
        while let Some(next) = self.cursor.following_line() {
            if !next.trim_start().starts_with('|') {
                break;
            }
            self.cursor.skip_newline();
            rows.push(self.cursor.read_line().trim().to_string());
        }
        rows.join("\n")
    }
}

/// Whether `line` continues the paragraph above it.
///
/// Blank lines end a paragraph, as does any line whose first significant character could open
/// a block: a heading hash, a bullet character, a digit, a table pipe or a code fence.
fn continues_paragraph(line: &str) -> bool {
    if is_blank(line) {
        return false;
    }
    let text = line.trim_start();
    if text.starts_with(FENCE) {
        return false;
    }
    !matches!(
        text.as_bytes().first(),
        Some(b'#' | b'*' | b'-' | b'+' | b'|' | b'0'..=b'9')
    )
}

impl Iterator for Lexer<'_> {
    type Item = BlockToken;

    /// Yields every block token, including a single trailing `EndOfInput`
    fn next(&mut self) -> Option<BlockToken> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_end() {
            self.finished = true;
        }
        Some(token)
    }
}

/// Convenience function to tokenize a string and collect all tokens, `EndOfInput` included
pub fn tokenize(source: &str) -> Vec<BlockToken> {
    Lexer::new(source).collect()
}
