//! Analysis configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for an analysis run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Paths to analyze
    pub paths: Vec<PathBuf>,
    /// Glob patterns excluded from analysis
    pub exclude: Vec<String>,
    /// Rule ids that should not run
    pub disabled_rules: Vec<String>,
}

impl AnalyzeConfig {
    /// Whether a path matches any exclude pattern.
    ///
    /// Invalid patterns are ignored rather than failing the run.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(&text))
                .unwrap_or(false)
        })
    }

    /// Whether a rule id is disabled
    pub fn is_rule_disabled(&self, id: &str) -> bool {
        self.disabled_rules.iter().any(|d| d == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_globs() {
        let config = AnalyzeConfig {
            exclude: vec!["**/obj/**".to_string(), "*.generated.cs".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded(Path::new("src/obj/Debug/A.cs")));
        assert!(config.is_excluded(Path::new("Model.generated.cs")));
        assert!(!config.is_excluded(Path::new("src/Program.cs")));
    }

    #[test]
    fn test_invalid_pattern_is_ignored() {
        let config = AnalyzeConfig {
            exclude: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(!config.is_excluded(Path::new("src/Program.cs")));
    }

    #[test]
    fn test_disabled_rules() {
        let config = AnalyzeConfig {
            disabled_rules: vec!["CL0001".to_string()],
            ..Default::default()
        };
        assert!(config.is_rule_disabled("CL0001"));
        assert!(!config.is_rule_disabled("CL0002"));
    }
}
