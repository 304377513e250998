//! Enclosing-scope contexts tracked during the tree walk
//!
//! Contexts are built once, top-down, as the walker enters declarations;
//! call sites never walk ancestors upward. A method's asynchrony is a
//! typed attribute (`is_async`) populated when the context is built.

use crate::symbols::SymbolTable;
use sharplint_core::syntax::{self, SourceFile};
use std::collections::HashMap;
use tree_sitter::Node;

/// Names of the task-like return types
pub const TASK_TYPES: &[&str] = &["Task", "ValueTask"];

/// Whether a return type name denotes an asynchronous unit of work.
///
/// Covers the task types themselves plus source-declared types whose base
/// chain reaches `Task`.
pub fn is_task_like(type_name: &str, symbols: &SymbolTable) -> bool {
    TASK_TYPES.contains(&type_name) || symbols.derives_from(type_name, "Task")
}

/// Context for code inside a class-like declaration
#[derive(Debug, Clone, Default)]
pub struct ClassContext {
    /// Class name
    pub name: String,
    /// Declared fields: name -> type name
    field_types: HashMap<String, String>,
}

impl ClassContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_types: HashMap::new(),
        }
    }

    /// Build the context from a class-like declaration node.
    ///
    /// Fields are visible anywhere in the class body regardless of
    /// declaration order, so they are all collected up front.
    pub fn from_declaration(file: &SourceFile, node: Node<'_>) -> Self {
        let name = syntax::declared_name(file, node).unwrap_or_default();
        let mut context = Self::new(name);

        let Some(body) = syntax::field(node, "body") else {
            return context;
        };
        for member in syntax::named_children(body) {
            if member.kind() != syntax::kind::FIELD_DECLARATION {
                continue;
            }
            let Some(declaration) =
                syntax::child_of_kind(member, syntax::kind::VARIABLE_DECLARATION)
            else {
                continue;
            };
            let Some(type_name) = syntax::field(declaration, "type")
                .and_then(|ty| syntax::simple_type_name(file, ty))
            else {
                continue;
            };
            for declarator in
                syntax::children_of_kind(declaration, syntax::kind::VARIABLE_DECLARATOR)
            {
                if let Some(field_name) = syntax::declared_name(file, declarator) {
                    context
                        .field_types
                        .insert(field_name.to_string(), type_name.to_string());
                }
            }
        }
        context
    }

    pub fn declare_field(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.field_types.insert(name.into(), type_name.into());
    }

    /// Declared type of a field, if known
    pub fn field_type(&self, name: &str) -> Option<&str> {
        self.field_types.get(name).map(String::as_str)
    }
}

/// Context for code inside a method or local function
#[derive(Debug, Clone)]
pub struct MethodContext {
    /// Method name
    pub name: String,
    /// Simple name of the declared return type, if resolvable
    pub return_type: Option<String>,
    /// Whether the return type is task-like
    pub returns_task: bool,
    /// Whether the declaration carries the `async` modifier
    pub is_async: bool,
    /// Locals declared so far: name -> type name
    locals: HashMap<String, String>,
}

impl MethodContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            returns_task: false,
            is_async: false,
            locals: HashMap::new(),
        }
    }

    /// Build the context from a method or local-function declaration node
    pub fn from_declaration(file: &SourceFile, node: Node<'_>, symbols: &SymbolTable) -> Self {
        let mut context = Self::new(syntax::declared_name(file, node).unwrap_or_default());
        context.return_type = syntax::return_type(node)
            .and_then(|ty| syntax::simple_type_name(file, ty))
            .map(str::to_string);
        context.returns_task = context
            .return_type
            .as_deref()
            .is_some_and(|name| is_task_like(name, symbols));
        context.is_async = syntax::has_modifier(file, node, "async");
        context
    }

    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    pub fn with_task_return(mut self, returns_task: bool) -> Self {
        self.returns_task = returns_task;
        self
    }

    pub fn with_local(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.declare_local(name, type_name);
        self
    }

    pub fn declare_local(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.locals.insert(name.into(), type_name.into());
    }

    /// Declared type of a local, if known
    pub fn local_type(&self, name: &str) -> Option<&str> {
        self.locals.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharplint_core::syntax::kind;

    fn find_kind<'t>(node: Node<'t>, target: &str) -> Option<Node<'t>> {
        if node.kind() == target {
            return Some(node);
        }
        syntax::named_children(node)
            .into_iter()
            .find_map(|child| find_kind(child, target))
    }

    fn first_of_kind<'t>(file: &'t SourceFile, target: &str) -> Node<'t> {
        find_kind(file.root(), target).expect("node of kind")
    }

    #[test]
    fn test_is_task_like() {
        let symbols = SymbolTable::with_builtins();
        assert!(is_task_like("Task", &symbols));
        assert!(is_task_like("ValueTask", &symbols));
        assert!(!is_task_like("string", &symbols));
        assert!(!is_task_like("void", &symbols));
    }

    #[test]
    fn test_method_context_async_task() {
        let file =
            SourceFile::parse("class C { public async Task RunAsync() { } }").unwrap();
        let symbols = SymbolTable::with_builtins();
        let node = first_of_kind(&file, kind::METHOD_DECLARATION);
        let context = MethodContext::from_declaration(&file, node, &symbols);

        assert_eq!(context.name, "RunAsync");
        assert_eq!(context.return_type.as_deref(), Some("Task"));
        assert!(context.returns_task);
        assert!(context.is_async);
    }

    #[test]
    fn test_method_context_sync_task_return() {
        let file =
            SourceFile::parse("class C { public Task Run() { return null; } }").unwrap();
        let symbols = SymbolTable::with_builtins();
        let node = first_of_kind(&file, kind::METHOD_DECLARATION);
        let context = MethodContext::from_declaration(&file, node, &symbols);

        assert!(context.returns_task);
        assert!(!context.is_async);
    }

    #[test]
    fn test_class_context_collects_fields() {
        let file = SourceFile::parse(
            "class C { private StreamReader _reader; private int _count; void M() { } }",
        )
        .unwrap();
        let node = first_of_kind(&file, kind::CLASS_DECLARATION);
        let context = ClassContext::from_declaration(&file, node);

        assert_eq!(context.name, "C");
        assert_eq!(context.field_type("_reader"), Some("StreamReader"));
        assert_eq!(context.field_type("_count"), Some("int"));
        assert_eq!(context.field_type("missing"), None);
    }
}
