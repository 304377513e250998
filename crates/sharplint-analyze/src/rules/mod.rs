//! Diagnostic rules and their registry

pub mod use_async_overload;

pub use use_async_overload::UseAsyncOverloadRule;

use crate::descriptors::Descriptor;
use crate::finding::Finding;
use crate::symbols::SymbolTable;
use sharplint_core::SourceFile;
use std::path::Path;

/// Context provided to rules during analysis of one file
pub struct RuleContext<'a> {
    /// The file being analyzed
    pub file_path: &'a Path,
    /// Symbols declared in the file, plus builtins
    pub symbols: &'a SymbolTable,
}

/// Trait for diagnostic rules
pub trait Rule: Send + Sync {
    /// The rule's identity and metadata
    fn descriptor(&self) -> &'static Descriptor;

    /// Run the rule over a parsed file and return any findings
    fn check(&self, file: &SourceFile, ctx: &RuleContext<'_>) -> Vec<Finding>;
}

/// Registry of all available rules
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all built-in rules
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(UseAsyncOverloadRule));
        registry
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Rules that should run: enabled by default and not disabled by id
    pub fn enabled_rules(&self, disabled: &[String]) -> Vec<&dyn Rule> {
        self.rules
            .iter()
            .map(|r| r.as_ref())
            .filter(|r| {
                let descriptor = r.descriptor();
                descriptor.enabled_by_default
                    && !disabled.iter().any(|id| id == descriptor.id)
            })
            .collect()
    }

    /// All registered rules
    pub fn all_rules(&self) -> Vec<&dyn Rule> {
        self.rules.iter().map(|r| r.as_ref()).collect()
    }
}
