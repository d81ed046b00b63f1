//! File processing API for markdown documents
//!
//! This module provides an extensible API for processing markdown files with different
//! stages (token, ast) and formats (simple, json, yaml, tag, treeviz).
//!
//! A processing spec is written `<stage>-<format>`, e.g. `token-simple` or `ast-tag`.
//!
//! # Sample Sources
//!
//! The `sources` module provides access to the sample documents under `samples/`, which the
//! integration tests use as their canonical inputs.

pub mod sources;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::formats::{serialize_ast_tag, to_treeviz_str};
use crate::lexer::{tokenize, BlockToken};
use crate::parser::parse_document;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error reading {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Sample not found: {0}")]
    SampleNotFound(String),
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Ast, OutputFormat::Simple) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with the token stage".to_string(),
                ))
            }
            (ProcessingStage::Ast, _) => {}
            (ProcessingStage::Token, other) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with the ast stage",
                    format_name(other)
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Tag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Yaml,
            },
        ]
    }
}

/// Every accepted spec string, in the order of [`ProcessingSpec::available_specs`]
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Simple => "simple",
        OutputFormat::Json => "json",
        OutputFormat::Yaml => "yaml",
        OutputFormat::Tag => "tag",
        OutputFormat::Treeviz => "treeviz",
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        write!(f, "{}-{}", stage, format_name(self.format))
    }
}

/// Process markdown source text according to the given specification
pub fn process_str(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    debug!(%spec, bytes = source.len(), "processing source");
    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokenize(source), spec.format),
        ProcessingStage::Ast => {
            let doc = parse_document(source);
            match spec.format {
                OutputFormat::Tag => Ok(serialize_ast_tag(&doc)),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&doc)),
                OutputFormat::Json => serde_json::to_string_pretty(&doc)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&doc)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(spec.to_string())),
            }
        }
    }
}

/// Process a markdown file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|source| ProcessingError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    process_str(&content, spec)
}

/// Format tokens according to the output format
fn format_tokens(tokens: &[BlockToken], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(format_token_simple).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "Format '{}' is not available for tokens",
            format_name(other)
        ))),
    }
}

/// One line per token: kind, position attributes, then the content as a quoted string
fn format_token_simple(token: &BlockToken) -> String {
    let mut line = format!("{:?} indent={}", token.kind, token.indent);
    if token.level > 0 {
        line.push_str(&format!(" level={}", token.level));
    }
    if let Some(ordinal) = token.ordinal {
        line.push_str(&format!(" ordinal={}", ordinal));
    }
    if let Some(info) = &token.info {
        line.push_str(&format!(" info={:?}", info));
    }
    if !token.content.is_empty() {
        line.push_str(&format!(" {:?}", token.content));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_specs() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Ast);
        assert_eq!(spec.format, OutputFormat::Treeviz);
    }

    #[test]
    fn test_spec_errors() {
        assert!(matches!(
            ProcessingSpec::from_string("tag"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("html-tag"),
            Err(ProcessingError::InvalidStage(s)) if s == "html"
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("token-tag"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-simple"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_available_specs_round_trip_through_display() {
        for spec in ProcessingSpec::available_specs() {
            let parsed = ProcessingSpec::from_string(&spec.to_string()).unwrap();
            assert_eq!(parsed, spec);
        }
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert!(formats.contains(&"token-simple".to_string()));
        assert!(formats.contains(&"ast-tag".to_string()));
        assert_eq!(formats.len(), 6);
    }

    #[test]
    fn test_token_simple_output() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process_str("# Hi\n\n3. item\n\n```rs\nx\n```", &spec).unwrap();
        assert_eq!(
            output,
            "Header indent=0 level=1 \"Hi\"\n\
             ListItem indent=0 ordinal=3 \"item\"\n\
             CodeBlock indent=0 info=\"rs\" \"x\"\n\
             EndOfInput indent=0\n"
        );
    }

    #[test]
    fn test_ast_json_output_is_valid_json() {
        let spec = ProcessingSpec::from_string("ast-json").unwrap();
        let output = process_str("# Title", &spec).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["kind"], "Document");
        assert_eq!(value["children"][0]["kind"], "Header");
        assert_eq!(value["children"][0]["level"], 1);
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("ast-tag").unwrap();
        let err = process_file("does/not/exist.md", &spec).unwrap_err();
        assert!(matches!(err, ProcessingError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.md"));
    }
}
