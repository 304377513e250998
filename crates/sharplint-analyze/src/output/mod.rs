//! Output formatters for analysis results

mod github;
mod json;
mod raw;
mod table;

pub use github::GithubFormatter;
pub use json::JsonFormatter;
pub use raw::RawFormatter;
pub use table::TableFormatter;

use crate::finding::FindingCollection;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One finding per line: file:line:col: severity [rule] message
    Raw,
    /// JSON format
    Json,
    /// Table format (default)
    Table,
    /// GitHub Actions annotations
    Github,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "raw" => Some(OutputFormat::Raw),
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            "github" => Some(OutputFormat::Github),
            _ => None,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

/// Trait for output formatters
pub trait Formatter {
    /// Format the findings and return the output string
    fn format(&self, findings: &FindingCollection) -> String;
}

/// Format findings using the specified format
pub fn format_findings(findings: &FindingCollection, format: OutputFormat) -> String {
    match format {
        OutputFormat::Raw => RawFormatter.format(findings),
        OutputFormat::Json => JsonFormatter.format(findings),
        OutputFormat::Table => TableFormatter.format(findings),
        OutputFormat::Github => GithubFormatter.format(findings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("raw"), Some(OutputFormat::Raw));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("github"), Some(OutputFormat::Github));
        assert_eq!(OutputFormat::from_str("xml"), None);
    }
}
