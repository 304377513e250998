//! Receiver resolution
//!
//! Maps the identifier to the left of a member-access call onto a type.
//! The resolver is an injected capability (`TypeResolver`) so the rule
//! evaluator can be exercised with a stub, independent of any parsed
//! source. Every lookup that cannot complete yields `Unresolved`, never
//! an error.

use crate::scope::{ClassContext, MethodContext};
use crate::symbols::SymbolTable;

/// How a receiver identifier resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverResolution {
    /// The identifier names a type directly (static member access)
    TypeName(String),
    /// The identifier is a local variable of the given type
    LocalVariable { type_name: String },
    /// The identifier is a field of the enclosing class
    Field { type_name: String },
    /// The identifier could not be resolved; not an error
    Unresolved,
}

impl ReceiverResolution {
    /// The resolved type name, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            ReceiverResolution::TypeName(name) => Some(name),
            ReceiverResolution::LocalVariable { type_name }
            | ReceiverResolution::Field { type_name } => Some(type_name),
            ReceiverResolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, ReceiverResolution::Unresolved)
    }
}

/// Capability interface consulted by rule evaluators
pub trait TypeResolver {
    /// Resolve a receiver identifier to its type
    fn resolve_receiver(&self, name: &str) -> ReceiverResolution;

    /// Whether a type exposes a member with the exact name
    fn has_member(&self, type_name: &str, member: &str) -> bool;
}

/// Resolver backed by the symbol table and the contexts the walker tracks
pub struct ScopeResolver<'a> {
    symbols: &'a SymbolTable,
    method: Option<&'a MethodContext>,
    class: Option<&'a ClassContext>,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(
        symbols: &'a SymbolTable,
        method: Option<&'a MethodContext>,
        class: Option<&'a ClassContext>,
    ) -> Self {
        Self {
            symbols,
            method,
            class,
        }
    }
}

impl TypeResolver for ScopeResolver<'_> {
    fn resolve_receiver(&self, name: &str) -> ReceiverResolution {
        // A type name first (static access), then a local, then a field.
        if self.symbols.type_exists(name) {
            return ReceiverResolution::TypeName(name.to_string());
        }
        if let Some(type_name) = self.method.and_then(|m| m.local_type(name)) {
            return ReceiverResolution::LocalVariable {
                type_name: type_name.to_string(),
            };
        }
        if let Some(type_name) = self.class.and_then(|c| c.field_type(name)) {
            return ReceiverResolution::Field {
                type_name: type_name.to_string(),
            };
        }
        ReceiverResolution::Unresolved
    }

    fn has_member(&self, type_name: &str, member: &str) -> bool {
        self.symbols.has_member(type_name, member)
    }
}
