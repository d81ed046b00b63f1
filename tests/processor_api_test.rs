//! Integration tests for the processor API and its output formats

use mdtree::processor::sources::MarkdownSources;
use mdtree::processor::{
    available_formats, process_file, process_str, OutputFormat, ProcessingError, ProcessingSpec,
    ProcessingStage,
};

fn run(source: &str, spec: &str) -> String {
    let spec = ProcessingSpec::from_string(spec).unwrap();
    process_str(source, &spec).unwrap()
}

#[test]
fn test_available_specs() {
    let specs = ProcessingSpec::available_specs();
    assert_eq!(specs.len(), 6);
    assert!(specs
        .iter()
        .any(|s| s.stage == ProcessingStage::Ast && s.format == OutputFormat::Treeviz));
    assert_eq!(
        available_formats(),
        vec![
            "token-simple",
            "token-json",
            "ast-tag",
            "ast-treeviz",
            "ast-json",
            "ast-yaml"
        ]
    );
}

#[test]
fn test_token_simple() {
    let output = run("# Title\n\n- a\n  - b\n\n| x |\n|---|\n| 1 |", "token-simple");
    insta::assert_snapshot!(output.trim_end(), @r#"
    Header indent=0 level=1 "Title"
    ListItem indent=0 "a"
    ListItem indent=2 "b"
    Table indent=0 "| x |\n|---|\n| 1 |"
    EndOfInput indent=0
    "#);
}

#[test]
fn test_token_json() {
    let output = run("12. twelve", "token-json");
    let tokens: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(tokens[0]["kind"], "ListItem");
    assert_eq!(tokens[0]["content"], "twelve");
    assert_eq!(tokens[0]["ordinal"], 12);
    assert_eq!(tokens[1]["kind"], "EndOfInput");
    assert!(tokens[1].get("ordinal").is_none());
}

#[test]
fn test_ast_tag() {
    let output = run("# Hi *there*\n\n- a\n  - b\n\n```sh\nls\n```", "ast-tag");
    insta::assert_snapshot!(output.trim_end(), @r#"
    <document>
      <header level="1">
        <text>Hi </text>
        <emphasis>
          <text>there</text>
        </emphasis>
      </header>
      <list>
        <item>
          <text>a</text>
          <list indent="2">
            <item indent="2">
              <text>b</text>
            </item>
          </list>
        </item>
      </list>
      <code info="sh">ls</code>
    </document>
    "#);
}

#[test]
fn test_ast_treeviz() {
    let output = run("# Title\n\n[docs](http://d) rocks\n\n---", "ast-treeviz");
    insta::assert_snapshot!(output.trim_end(), @r"
    ├─ Header: h1 Title
    │ └─ Text: Title
    ├─ Paragraph: [docs](http://d) rocks
    │ ├─ Link: docs -> http://d
    │ │ └─ Text: docs
    │ └─ Text:  rocks
    └─ HorizontalRule: ---
    ");
}

#[test]
fn test_ast_json() {
    let output = run("- a", "ast-json");
    insta::assert_snapshot!(output.trim_end(), @r#"
    {
      "kind": "Document",
      "children": [
        {
          "kind": "List",
          "children": [
            {
              "kind": "ListItem",
              "content": "a",
              "children": [
                {
                  "kind": "Text",
                  "content": "a"
                }
              ]
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn test_ast_yaml() {
    let output = run("# Hi", "ast-yaml");
    insta::assert_snapshot!(output.trim_end(), @r"
    kind: Document
    children:
    - kind: Header
      content: Hi
      level: 1
      children:
      - kind: Text
        content: Hi
    ");
}

#[test]
fn test_process_file_sample() {
    let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/060-tables.md");
    let output = process_file(path, &spec).unwrap();
    assert!(output.starts_with("├─ Table: 3 rows\n"));
    assert!(output.contains("TableCell: Grace"));
    assert!(!output.contains("Not"));
}

#[test]
fn test_sources_and_process_file_agree() {
    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/100-kitchensink.md");
    assert_eq!(
        process_file(path, &spec).unwrap(),
        MarkdownSources::get_processed("100-kitchensink.md", "ast-tag").unwrap()
    );
}

#[test]
fn test_errors() {
    assert!(matches!(
        ProcessingSpec::from_string("ast"),
        Err(ProcessingError::InvalidFormat(_))
    ));
    assert!(matches!(
        ProcessingSpec::from_string("token-treeviz"),
        Err(ProcessingError::InvalidFormatType(_))
    ));

    let spec = ProcessingSpec::from_string("token-simple").unwrap();
    let err = process_file("no/such/file.md", &spec).unwrap_err();
    assert!(matches!(err, ProcessingError::Io { .. }));
    assert!(err.to_string().starts_with("IO error reading no/such/file.md"));
}
