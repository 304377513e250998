//! Table output format (default, human-readable)

use super::Formatter;
use crate::finding::{FindingCollection, Severity};
use std::collections::HashMap;

pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, findings: &FindingCollection) -> String {
        if findings.is_empty() {
            return " [OK] No findings\n".to_string();
        }

        let mut output = String::new();

        // Group by file
        let mut files: HashMap<String, Vec<_>> = HashMap::new();
        for finding in findings.findings() {
            let path = finding.file.display().to_string();
            files.entry(path).or_default().push(finding);
        }

        // Sort files
        let mut file_list: Vec<_> = files.keys().cloned().collect();
        file_list.sort();

        for file_path in file_list {
            let file_findings = &files[&file_path];

            output.push_str(&format!("\n -- {} --\n\n", file_path));

            for finding in file_findings.iter() {
                let severity_marker = match finding.severity {
                    Severity::Error => "ERROR",
                    Severity::Warning => "WARNING",
                };

                output.push_str(&format!(
                    " {} {} Line {}: {}\n",
                    severity_marker, finding.rule_id, finding.line, finding.message
                ));
            }
        }

        // Summary
        if findings.error_count() > 0 {
            output.push_str(&format!(
                "\n [ERROR] Found {} error{}\n",
                findings.error_count(),
                if findings.error_count() == 1 { "" } else { "s" }
            ));
        }

        if findings.warning_count() > 0 {
            output.push_str(&format!(
                "\n [WARNING] Found {} warning{}\n",
                findings.warning_count(),
                if findings.warning_count() == 1 { "" } else { "s" }
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Finding;
    use std::path::PathBuf;

    #[test]
    fn test_table_format_empty() {
        let findings = FindingCollection::new();
        let output = TableFormatter.format(&findings);
        assert!(output.contains("[OK]"));
    }

    #[test]
    fn test_table_format_with_warnings() {
        let mut findings = FindingCollection::new();
        findings.add(Finding::warning(
            "CL0001",
            "Use the async overload",
            PathBuf::from("/path/to/File.cs"),
            12,
            17,
        ));

        let output = TableFormatter.format(&findings);

        assert!(output.contains("/path/to/File.cs"));
        assert!(output.contains("WARNING CL0001 Line 12"));
        assert!(output.contains("Found 1 warning"));
        assert!(!output.contains("error"));
    }
}
