//! sharplint-analyze: async-overload static analysis for C# sources
//!
//! This crate provides:
//!
//! - The `CL0001` use-async-overload rule and its registry
//! - A per-file symbol table with .NET builtin stubs
//! - Receiver resolution (type name / local / field)
//! - Multiple output formats (raw, json, table, github)
//!
//! # Example
//!
//! ```no_run
//! use sharplint_analyze::{Analyzer, output::OutputFormat};
//! use std::path::Path;
//!
//! let analyzer = Analyzer::with_defaults();
//! let findings = analyzer.analyze_paths(&[Path::new("src/")]).unwrap();
//! let output = sharplint_analyze::output::format_findings(&findings, OutputFormat::Table);
//! println!("{}", output);
//! ```

pub mod config;
pub mod descriptors;
pub mod finding;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod rules;
pub mod scope;
pub mod symbols;

use config::AnalyzeConfig;
use finding::{Finding, FindingCollection};
use rayon::prelude::*;
use rules::{RuleContext, RuleRegistry};
use sharplint_core::SourceFile;
use std::fs;
use std::path::Path;
use symbols::SymbolCollector;
use walkdir::WalkDir;

/// Main analyzer that runs the diagnostic rules
pub struct Analyzer {
    config: AnalyzeConfig,
    registry: RuleRegistry,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: AnalyzeConfig) -> Self {
        let registry = RuleRegistry::with_builtin_rules();
        Self { config, registry }
    }

    /// Create analyzer with default configuration
    pub fn with_defaults() -> Self {
        Self::new(AnalyzeConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &AnalyzeConfig {
        &self.config
    }

    /// Analyze a single file
    pub fn analyze_file(&self, path: &Path) -> Result<FindingCollection, AnalyzeError> {
        let source = fs::read_to_string(path)?;
        self.analyze_source(path, &source)
    }

    /// Analyze source code with a given path
    pub fn analyze_source(
        &self,
        path: &Path,
        source: &str,
    ) -> Result<FindingCollection, AnalyzeError> {
        let file = SourceFile::parse(source)?;

        let mut findings = FindingCollection::new();

        // A tolerant parse is still analyzable; surface the error and
        // keep going.
        if file.has_parse_errors() {
            findings.add(Finding::error(
                "parse.error",
                "Source contains syntax errors; results may be incomplete",
                path.to_path_buf(),
                1,
                1,
            ));
        }

        let symbols = SymbolCollector::build_table(&file, path);
        let ctx = RuleContext {
            file_path: path,
            symbols: &symbols,
        };

        for rule in self.registry.enabled_rules(&self.config.disabled_rules) {
            findings.extend(rule.check(&file, &ctx));
        }

        logging::log_file_result(path, findings.len());

        Ok(findings)
    }

    /// Analyze multiple paths (files or directories)
    pub fn analyze_paths(&self, paths: &[&Path]) -> Result<FindingCollection, AnalyzeError> {
        // Collect all C# files
        let mut files: Vec<_> = Vec::new();

        for path in paths {
            if path.is_file() {
                files.push(path.to_path_buf());
            } else if path.is_dir() {
                for entry in WalkDir::new(path)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|e| e.ok())
                {
                    let entry_path = entry.path();
                    if entry_path.is_file()
                        && entry_path.extension().map(|e| e == "cs").unwrap_or(false)
                        && !self.config.is_excluded(entry_path)
                    {
                        files.push(entry_path.to_path_buf());
                    }
                }
            }
        }

        logging::log_analysis_start(files.len());

        // Analyze files in parallel
        let results: Vec<_> = files
            .par_iter()
            .map(|file| self.analyze_file(file))
            .collect();

        // Combine results
        let mut combined = FindingCollection::new();
        for result in results {
            match result {
                Ok(findings) => combined.extend(findings.into_findings()),
                Err(e) => {
                    // Log error but continue
                    eprintln!("Warning: {}", e);
                }
            }
        }

        combined.sort();
        logging::log_analysis_complete(combined.len());
        Ok(combined)
    }

    /// Analyze paths specified in the configuration
    pub fn analyze_configured_paths(&self) -> Result<FindingCollection, AnalyzeError> {
        let paths: Vec<_> = self.config.paths.iter().map(|p| p.as_path()).collect();
        if paths.is_empty() {
            return Err(AnalyzeError::NoPathsConfigured);
        }
        self.analyze_paths(&paths)
    }
}

/// Errors that can occur during analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse source: {0}")]
    Syntax(#[from] sharplint_core::SyntaxError),

    #[error("No paths configured for analysis")]
    NoPathsConfigured,
}
