//! Fluent assertion API for AST nodes

use super::testing_matchers::TextMatch;
use crate::ast::{Node, NodeKind};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Node) -> DocumentAssertion<'_> {
    assert_eq!(
        doc.kind,
        NodeKind::Document,
        "assert_ast expects a Document root, got {}",
        doc
    );
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Node,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level blocks
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize(&self.doc.children)
        );
        self
    }

    /// Assert the kinds of all top-level blocks, in order
    pub fn item_kinds(self, expected: &[NodeKind]) -> Self {
        let actual: Vec<NodeKind> = self.doc.children.iter().map(|c| c.kind).collect();
        assert_eq!(
            actual,
            expected,
            "Unexpected item kinds: [{}]",
            summarize(&self.doc.children)
        );
        self
    }

    /// Assert on a specific top-level block by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.children.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.children.len()
        );

        assertion(NodeAssertion {
            node: &self.doc.children[index],
            context: format!("items[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node kind
    pub fn assert_kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind, expected,
            "{}: Expected {}, found {}",
            self.context, expected, self.node
        );
        self
    }

    /// Check the node kind without panicking
    pub fn is(&self, kind: NodeKind) -> bool {
        self.node.is(kind)
    }

    /// Assert the plain text (inline markup removed) matches exactly
    pub fn text(self, expected: &str) -> Self {
        self.text_matches(TextMatch::Exact(expected.to_string()))
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        self.text_matches(TextMatch::StartsWith(prefix.to_string()))
    }

    pub fn text_contains(self, substring: &str) -> Self {
        self.text_matches(TextMatch::Contains(substring.to_string()))
    }

    pub fn text_matches(self, matcher: TextMatch) -> Self {
        matcher.assert(&self.node.plain_text(), &self.context);
        self
    }

    /// Assert the raw `content` field, markup included
    pub fn content(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.node.content, &self.context);
        self
    }

    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.node.level, expected,
            "{}: Expected level {}, found {}",
            self.context, expected, self.node.level
        );
        self
    }

    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(
            self.node.indent, expected,
            "{}: Expected indent {}, found {}",
            self.context, expected, self.node.indent
        );
        self
    }

    pub fn ordinal(self, expected: Option<u64>) -> Self {
        assert_eq!(
            self.node.ordinal, expected,
            "{}: Expected ordinal {:?}, found {:?}",
            self.context, expected, self.node.ordinal
        );
        self
    }

    pub fn info(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.node.info.as_deref(),
            expected,
            "{}: Expected info string {:?}, found {:?}",
            self.context,
            expected,
            self.node.info
        );
        self
    }

    /// Assert the link target (links) or source (images)
    pub fn link(self, expected: &str) -> Self {
        assert_eq!(
            self.node.link.as_deref(),
            Some(expected),
            "{}: Expected link '{}', found {:?}",
            self.context,
            expected,
            self.node.link
        );
        self
    }

    pub fn alt(self, expected: &str) -> Self {
        assert_eq!(
            self.node.alt.as_deref(),
            Some(expected),
            "{}: Expected alt text '{}', found {:?}",
            self.context,
            expected,
            self.node.alt
        );
        self
    }

    /// Assert the number of children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.node.children)
        );
        self
    }

    /// Assert the kinds of all children, in order
    pub fn child_kinds(self, expected: &[NodeKind]) -> Self {
        let actual: Vec<NodeKind> = self.node.children.iter().map(|c| c.kind).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected child kinds: [{}]",
            self.context,
            summarize(&self.node.children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = &self.node.children;
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} has {} children)",
            self.context,
            index,
            self.node.kind,
            children.len()
        );

        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    /// Assert on the nested list of a list item
    pub fn sublist<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node: &'a Node = self.node;
        let Some(list) = node.sublist() else {
            panic!("{}: Expected a nested list under {}", self.context, node);
        };
        assertion(NodeAssertion {
            node: list,
            context: format!("{}:sublist", self.context),
        });
        self
    }

    /// Assert a list item has no nested list
    pub fn no_sublist(self) -> Self {
        assert!(
            self.node.sublist().is_none(),
            "{}: Expected no nested list under {}",
            self.context,
            self.node
        );
        self
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_fluent_chain() {
        let doc = parse_document("# Title\n\n- a\n  - b\n- [c](u)");
        assert_ast(&doc)
            .item_count(2)
            .item(0, |header| {
                header.assert_kind(NodeKind::Header).level(1).text("Title");
            })
            .item(1, |list| {
                list.assert_kind(NodeKind::List)
                    .child_count(2)
                    .child(0, |a| {
                        a.text("a").sublist(|nested| {
                            nested.indent(2).child(0, |b| {
                                b.text("b").no_sublist();
                            });
                        });
                    })
                    .child(1, |c| {
                        c.child(0, |link| {
                            link.assert_kind(NodeKind::Link).link("u").text("c");
                        });
                    });
            });
    }

    #[test]
    #[should_panic(expected = "items[0]: Expected 2 children, found 1 children: [Text]")]
    fn test_count_mismatch_summarizes_children() {
        let doc = parse_document("plain");
        assert_ast(&doc).item(0, |p| {
            p.child_count(2);
        });
    }

    #[test]
    #[should_panic(expected = "items[0]:children[0]: Expected text to be 'x'")]
    fn test_text_mismatch_reports_path() {
        let doc = parse_document("- a");
        assert_ast(&doc).item(0, |list| {
            list.child(0, |item| {
                item.text("x");
            });
        });
    }
}
