//! Table decomposition
//!
//! The lexer hands over a table as its rows joined by newlines. The second row must be an
//! alignment row made of `-`, `:`, `|` and spaces; without it, or without at least one data row,
//! the table is dropped from the tree. Alignment itself is not recorded.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::ast::{Node, NodeKind};

static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-:| ]+$").unwrap());

/// Build a table node from pre-joined table text, or `None` if the table is not valid
pub fn build_table(text: &str) -> Option<Node> {
    let rows: Vec<&str> = text.lines().map(str::trim).collect();

    if rows.len() < 3 {
        debug!(rows = rows.len(), "dropping table without data rows");
        return None;
    }
    if !is_separator_row(rows[1]) {
        debug!(separator = rows[1], "dropping table with invalid separator row");
        return None;
    }

    let mut table = Node::new(NodeKind::Table);
    table.children.push(build_row(rows[0]));
    table
        .children
        .extend(rows[2..].iter().map(|row| build_row(row)));
    Some(table)
}

fn is_separator_row(row: &str) -> bool {
    SEPARATOR_ROW.is_match(row) && row.contains('-')
}

/// Split a row on `|` into trimmed cells. Outer pipes are optional.
fn build_row(row: &str) -> Node {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);

    let cells = row
        .split('|')
        .map(|cell| Node::new(NodeKind::TableCell).with_content(cell.trim()))
        .collect();
    Node::new(NodeKind::TableRow).with_children(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_texts(row: &Node) -> Vec<&str> {
        row.children.iter().map(|c| c.content.as_str()).collect()
    }

    #[test]
    fn test_valid_table() {
        let table = build_table("| a | b |\n|---|---|\n|  1 | 2  |").unwrap();
        assert_eq!(table.kind, NodeKind::Table);
        assert_eq!(table.children.len(), 2);
        assert_eq!(cell_texts(&table.children[0]), vec!["a", "b"]);
        assert_eq!(cell_texts(&table.children[1]), vec!["1", "2"]);
    }

    #[test]
    fn test_alignment_row_with_colons() {
        let table = build_table("|a|b|c|\n|:--|:-:|--:|\n|1|2|3|\n|4|5|6|").unwrap();
        assert_eq!(table.children.len(), 3);
        assert_eq!(cell_texts(&table.children[2]), vec!["4", "5", "6"]);
    }

    #[test]
    fn test_invalid_separator_drops_table() {
        assert!(build_table("| a | b |\n| x | y |\n| 1 | 2 |").is_none());
        assert!(build_table("| a | b |\n|---|-=-|\n| 1 | 2 |").is_none());
    }

    #[test]
    fn test_separator_needs_a_dash() {
        assert!(build_table("| a |\n| : |\n| 1 |").is_none());
    }

    #[test]
    fn test_missing_data_rows_drops_table() {
        assert!(build_table("| a | b |\n|---|---|").is_none());
        assert!(build_table("| a | b |").is_none());
    }

    #[test]
    fn test_cells_are_leaves() {
        let table = build_table("| **a** |\n|---|\n| [x](y) |").unwrap();
        let header = &table.children[0];
        assert_eq!(cell_texts(header), vec!["**a**"]);
        assert!(header.children[0].children.is_empty());
    }

    #[test]
    fn test_empty_cells() {
        let table = build_table("| a | |\n|---|---|\n| | b |").unwrap();
        assert_eq!(cell_texts(&table.children[0]), vec!["a", ""]);
        assert_eq!(cell_texts(&table.children[1]), vec!["", "b"]);
    }
}
