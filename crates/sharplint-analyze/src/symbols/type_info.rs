//! Type information for the symbol table
//!
//! Stores the member surface of a declared or builtin type. Member lookup
//! is by exact, case-sensitive name; signatures are not modeled.

use std::collections::HashMap;
use std::path::PathBuf;

/// Kind of type member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Property,
    Field,
}

/// Information about a type stored in the symbol table
#[derive(Debug, Clone)]
pub struct TypeInfo {
    /// Type name
    pub name: String,
    /// Declared base types (base class and interfaces, in declaration order)
    pub bases: Vec<String>,
    /// Members by name
    pub members: HashMap<String, MemberInfo>,
    /// File where this type is declared (None for builtins)
    pub file: Option<PathBuf>,
    /// Line number where declared
    pub line: Option<usize>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            members: HashMap::new(),
            file: None,
            line: None,
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.add_member(member);
        self
    }

    pub fn add_member(&mut self, member: MemberInfo) {
        self.members.insert(member.name.clone(), member);
    }

    /// Whether this type directly declares a member with the exact name
    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn get_member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.get(name)
    }
}

/// Information about a type member
#[derive(Debug, Clone)]
pub struct MemberInfo {
    pub name: String,
    pub kind: MemberKind,
    pub is_static: bool,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_static: false,
        }
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}
