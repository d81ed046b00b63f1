//! Text matching utilities for AST assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Exact text match
    Exact(String),
    /// Text starts with prefix
    StartsWith(String),
    /// Text contains substring
    Contains(String),
}

impl TextMatch {
    /// Assert that `actual` matches this pattern, prefixing failures with `context`
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => {
                assert_eq!(
                    actual, expected,
                    "{}: Expected text to be '{}', but got '{}'",
                    context, expected, actual
                );
            }
            TextMatch::StartsWith(prefix) => {
                assert!(
                    actual.starts_with(prefix),
                    "{}: Expected text to start with '{}', but got '{}'",
                    context,
                    prefix,
                    actual
                );
            }
            TextMatch::Contains(substring) => {
                assert!(
                    actual.contains(substring),
                    "{}: Expected text to contain '{}', but got '{}'",
                    context,
                    substring,
                    actual
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        TextMatch::Exact("abc".into()).assert("abc", "ctx");
        TextMatch::StartsWith("ab".into()).assert("abc", "ctx");
        TextMatch::Contains("b".into()).assert("abc", "ctx");
    }

    #[test]
    #[should_panic(expected = "ctx: Expected text to start with 'x'")]
    fn test_mismatch_reports_context() {
        TextMatch::StartsWith("x".into()).assert("abc", "ctx");
    }
}
