//! Treeviz formatter for AST nodes

use crate::ast::{AstNode, Node};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Node) -> String {
    let mut result = String::new();
    append_children(&mut result, &doc.children, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 30);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children, &new_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_treeviz_nested_list() {
        let doc = parse_document("- a\n  - b\n- c");
        assert_eq!(
            to_treeviz_str(&doc),
            "└─ List: 2 items\n  ├─ ListItem: a\n  │ ├─ Text: a\n  │ └─ List: 1 items\n  │   └─ ListItem: b\n  │     └─ Text: b\n  └─ ListItem: c\n    └─ Text: c\n"
        );
    }

    #[test]
    fn test_truncates_long_labels() {
        let doc = parse_document("This paragraph is definitely longer than thirty characters");
        let output = to_treeviz_str(&doc);
        assert!(output.starts_with("└─ Paragraph: This paragraph is definitely l..."));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_treeviz_str(&Node::document(vec![])), "");
    }
}
