//! Rule descriptors: identity and metadata for every diagnostic
//!
//! One static descriptor per rule. The descriptor carries everything a
//! reporting host needs to render a finding: id, title, message, category,
//! default severity, and a help link derived from the id.

use crate::finding::Severity;

pub const CATEGORY_ASYNC: &str = "Async";

const HELP_BASE_URL: &str = "https://github.com/sharplint/sharplint/blob/main/docs/rules";

/// Metadata describing a diagnostic rule
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Unique rule code (e.g., "CL0001")
    pub id: &'static str,
    /// Short title describing the rule
    pub title: &'static str,
    /// Message reported at each finding
    pub message: &'static str,
    /// Longer description of the rule
    pub description: &'static str,
    /// Rule category (e.g., "Async")
    pub category: &'static str,
    /// Default severity
    pub severity: Severity,
    /// Whether the rule runs unless explicitly disabled
    pub enabled_by_default: bool,
}

impl Descriptor {
    /// Documentation URI for this rule
    pub fn help_link(&self) -> String {
        help_link_for(self.id)
    }
}

/// Documentation URI for a rule code
pub fn help_link_for(id: &str) -> String {
    format!("{HELP_BASE_URL}/{id}.md")
}

pub static CL0001_USE_ASYNC_OVERLOAD: Descriptor = Descriptor {
    id: "CL0001",
    title: "Use async overload inside this async method",
    message: "This method has an async overload. Since this method is invoked from within an async method, it's recommended to use the async overload.",
    description: "This method has an async overload. Since this method is invoked from within an async method, it's recommended to use the async overload.",
    category: CATEGORY_ASYNC,
    severity: Severity::Warning,
    enabled_by_default: true,
};

static ALL_DESCRIPTORS: &[&Descriptor] = &[&CL0001_USE_ASYNC_OVERLOAD];

/// All known rule descriptors
pub fn all_descriptors() -> &'static [&'static Descriptor] {
    ALL_DESCRIPTORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cl0001_descriptor() {
        let descriptor = &CL0001_USE_ASYNC_OVERLOAD;
        assert_eq!(descriptor.id, "CL0001");
        assert_eq!(descriptor.category, CATEGORY_ASYNC);
        assert_eq!(descriptor.severity, Severity::Warning);
        assert!(descriptor.enabled_by_default);
    }

    #[test]
    fn test_help_link_keyed_by_id() {
        assert_eq!(
            CL0001_USE_ASYNC_OVERLOAD.help_link(),
            format!("{HELP_BASE_URL}/CL0001.md")
        );
    }

    #[test]
    fn test_all_descriptors_have_unique_ids() {
        let descriptors = all_descriptors();
        for (i, a) in descriptors.iter().enumerate() {
            for b in &descriptors[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
