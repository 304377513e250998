//! JSON output format

use super::Formatter;
use crate::finding::{Finding, FindingCollection};
use serde::Serialize;
use std::collections::BTreeMap;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    totals: Totals,
    files: BTreeMap<String, FileFindings>,
}

#[derive(Serialize)]
struct Totals {
    findings: usize,
    warnings: usize,
    errors: usize,
}

#[derive(Serialize)]
struct FileFindings {
    findings: usize,
    messages: Vec<FileMessage>,
}

#[derive(Serialize)]
struct FileMessage {
    rule: String,
    severity: crate::finding::Severity,
    message: String,
    line: usize,
    column: usize,
}

impl Formatter for JsonFormatter {
    fn format(&self, findings: &FindingCollection) -> String {
        // Group findings by file; BTreeMap keeps the output deterministic
        let mut files: BTreeMap<String, Vec<&Finding>> = BTreeMap::new();
        for finding in findings.findings() {
            let path = finding.file.display().to_string();
            files.entry(path).or_default().push(finding);
        }

        let file_findings = files
            .into_iter()
            .map(|(path, file_findings)| {
                let messages: Vec<FileMessage> = file_findings
                    .iter()
                    .map(|finding| FileMessage {
                        rule: finding.rule_id.clone(),
                        severity: finding.severity,
                        message: finding.message.clone(),
                        line: finding.line,
                        column: finding.column,
                    })
                    .collect();
                (
                    path,
                    FileFindings {
                        findings: messages.len(),
                        messages,
                    },
                )
            })
            .collect();

        let output = JsonOutput {
            totals: Totals {
                findings: findings.len(),
                warnings: findings.warning_count(),
                errors: findings.error_count(),
            },
            files: file_findings,
        };

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
