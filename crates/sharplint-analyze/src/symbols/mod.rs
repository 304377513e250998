//! Symbol table for per-file analysis
//!
//! Collects the types declared in the analyzed file, layered over stubs
//! for common .NET builtins. Analysis is per-file by design; there is no
//! cross-file table.

mod collector;
mod dotnet;
mod type_info;

pub use collector::SymbolCollector;
pub use type_info::{MemberInfo, MemberKind, TypeInfo};

use std::collections::{HashMap, HashSet};

/// Symbol table containing all known types
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Types by name (case-sensitive, C# names)
    types: HashMap<String, TypeInfo>,
}

impl SymbolTable {
    /// Create a new empty symbol table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a symbol table with .NET builtin type stubs
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        dotnet::register_builtins(&mut table);
        table
    }

    /// Register a type
    pub fn register_type(&mut self, info: TypeInfo) {
        self.types.insert(info.name.clone(), info);
    }

    /// Get a type by name
    pub fn get_type(&self, name: &str) -> Option<&TypeInfo> {
        self.types.get(name)
    }

    /// Check if a type exists
    pub fn type_exists(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Check if a type (or any declared base) has a member with the exact
    /// name. Unknown types have no members.
    pub fn has_member(&self, type_name: &str, member: &str) -> bool {
        let mut visited = HashSet::new();
        let mut pending = vec![type_name.to_string()];

        while let Some(name) = pending.pop() {
            if !visited.insert(name.clone()) {
                continue;
            }
            if let Some(info) = self.types.get(&name) {
                if info.has_member(member) {
                    return true;
                }
                pending.extend(info.bases.iter().cloned());
            }
        }
        false
    }

    /// Whether a type's declared base chain reaches the given base name
    pub fn derives_from(&self, type_name: &str, base: &str) -> bool {
        let mut visited = HashSet::new();
        let mut pending: Vec<String> = self
            .types
            .get(type_name)
            .map(|info| info.bases.clone())
            .unwrap_or_default();

        while let Some(name) = pending.pop() {
            if name == base {
                return true;
            }
            if !visited.insert(name.clone()) {
                continue;
            }
            if let Some(info) = self.types.get(&name) {
                pending.extend(info.bases.iter().cloned());
            }
        }
        false
    }

    /// All registered type names
    pub fn all_types(&self) -> impl Iterator<Item = &str> {
        self.types.values().map(|t| t.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup_type() {
        let mut table = SymbolTable::new();
        table.register_type(TypeInfo::new("Document"));

        assert!(table.type_exists("Document"));
        assert!(!table.type_exists("document"));
        assert!(!table.type_exists("Report"));
    }

    #[test]
    fn test_member_lookup_follows_base_chain() {
        let mut table = SymbolTable::new();
        table.register_type(TypeInfo::new("Base").with_member(MemberInfo::method("LoadAsync")));
        table.register_type(TypeInfo::new("Derived").with_base("Base"));

        assert!(table.has_member("Derived", "LoadAsync"));
        assert!(!table.has_member("Derived", "SaveAsync"));
    }

    #[test]
    fn test_member_lookup_survives_base_cycle() {
        let mut table = SymbolTable::new();
        table.register_type(TypeInfo::new("A").with_base("B"));
        table.register_type(TypeInfo::new("B").with_base("A"));

        assert!(!table.has_member("A", "Anything"));
    }

    #[test]
    fn test_derives_from() {
        let mut table = SymbolTable::new();
        table.register_type(TypeInfo::new("MyTask").with_base("Task"));
        table.register_type(TypeInfo::new("Unrelated"));

        assert!(table.derives_from("MyTask", "Task"));
        assert!(!table.derives_from("Unrelated", "Task"));
        assert!(!table.derives_from("Task", "Task"));
    }
}
