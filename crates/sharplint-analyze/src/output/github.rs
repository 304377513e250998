//! GitHub Actions annotations output format

use super::Formatter;
use crate::finding::{FindingCollection, Severity};

pub struct GithubFormatter;

impl Formatter for GithubFormatter {
    fn format(&self, findings: &FindingCollection) -> String {
        let mut output = String::new();

        for finding in findings.findings() {
            let level = match finding.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            // GitHub Actions annotation format:
            // ::warning file={name},line={line},col={col},title={rule}::{message}
            output.push_str(&format!(
                "::{} file={},line={},col={},title={}::{}\n",
                level,
                finding.file.display(),
                finding.line,
                finding.column,
                finding.rule_id,
                escape_message(&finding.message)
            ));
        }

        output
    }
}

/// Escape special characters for GitHub Actions annotations
fn escape_message(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Finding;
    use std::path::PathBuf;

    #[test]
    fn test_github_format() {
        let mut findings = FindingCollection::new();
        findings.add(Finding::warning(
            "CL0001",
            "Use the async overload",
            PathBuf::from("src/File.cs"),
            10,
            5,
        ));

        let output = GithubFormatter.format(&findings);

        assert!(output.contains(
            "::warning file=src/File.cs,line=10,col=5,title=CL0001::Use the async overload"
        ));
    }

    #[test]
    fn test_escape_message() {
        assert_eq!(escape_message("line1\nline2"), "line1%0Aline2");
        assert_eq!(escape_message("100%"), "100%25");
    }
}
