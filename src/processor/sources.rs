//! Sample sources for accessing the canonical markdown test documents
//!
//! ```ignore
//! use mdtree::processor::sources::MarkdownSources;
//!
//! let content = MarkdownSources::get_string("000-paragraphs.md").unwrap();
//! let tokens = MarkdownSources::get_tokens("030-lists-nested.md").unwrap();
//! let tree = MarkdownSources::get_processed("060-tables.md", "ast-treeviz").unwrap();
//! ```

use std::fs;
use std::path::PathBuf;

use super::{process_str, ProcessingError, ProcessingSpec};
use crate::lexer::tokenize;

/// Available sample files (canonical sources)
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "000-paragraphs.md",
    "010-headers.md",
    "020-lists-flat.md",
    "030-lists-nested.md",
    "040-inlines.md",
    "050-code-and-rules.md",
    "060-tables.md",
    "100-kitchensink.md",
];

/// Format options for sample content
#[derive(Debug, Clone, PartialEq)]
pub enum SampleFormat {
    /// Raw string content
    String,
    /// Block tokens as pretty JSON
    Tokens,
    /// Processed content using the specified spec string
    Processed(String),
}

/// Information about a sample file
#[derive(Debug, Clone, PartialEq)]
pub struct SampleInfo {
    pub filename: String,
    pub line_count: usize,
    pub char_count: usize,
    pub description: Option<String>,
}

/// Main interface for accessing markdown sample files
pub struct MarkdownSources;

impl MarkdownSources {
    fn samples_dir() -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/samples"))
    }

    fn sample_path(filename: &str) -> PathBuf {
        Self::samples_dir().join(filename)
    }

    fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
        if !AVAILABLE_SAMPLES.contains(&filename) {
            return Err(ProcessingError::SampleNotFound(format!(
                "'{}' (available: {:?})",
                filename, AVAILABLE_SAMPLES
            )));
        }
        Ok(())
    }

    fn read(filename: &str) -> Result<String, ProcessingError> {
        Self::validate_sample(filename)?;
        let path = Self::sample_path(filename);
        fs::read_to_string(&path).map_err(|source| ProcessingError::Io { path, source })
    }

    /// Get sample content in the specified format
    pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
        let content = Self::read(filename)?;
        match format {
            SampleFormat::String => Ok(content),
            SampleFormat::Tokens => serde_json::to_string_pretty(&tokenize(&content))
                .map_err(|e| ProcessingError::Serialization(e.to_string())),
            SampleFormat::Processed(spec) => {
                let spec = ProcessingSpec::from_string(&spec)?;
                process_str(&content, &spec)
            }
        }
    }

    pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::String)
    }

    pub fn get_tokens(filename: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::Tokens)
    }

    pub fn get_processed(filename: &str, spec: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::Processed(spec.to_string()))
    }

    pub fn list_samples() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }

    /// Get sample metadata. The description is the first non-blank line.
    pub fn get_sample_info(filename: &str) -> Result<SampleInfo, ProcessingError> {
        let content = Self::read(filename)?;
        Ok(SampleInfo {
            filename: filename.to_string(),
            line_count: content.lines().count(),
            char_count: content.chars().count(),
            description: content
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(|line| line.trim_start_matches('#').trim().to_string()),
        })
    }
}
