//! Raw output format
//!
//! One finding per line, compiler style:
//! file:line:col: severity [rule] message

use super::Formatter;
use crate::finding::FindingCollection;

pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn format(&self, findings: &FindingCollection) -> String {
        let mut output = String::new();

        let mut sorted: Vec<_> = findings.findings().iter().collect();
        sorted.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.line.cmp(&b.line))
                .then_with(|| a.column.cmp(&b.column))
        });

        for finding in sorted {
            output.push_str(&format!(
                "{}:{}:{}: {} [{}] {}\n",
                finding.file.display(),
                finding.line,
                finding.column,
                finding.severity,
                finding.rule_id,
                finding.message
            ));
        }

        output
    }
}
