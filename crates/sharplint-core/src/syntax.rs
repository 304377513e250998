//! Parsed C# source files and grammar helpers
//!
//! Wraps the `tree-sitter-c-sharp` grammar. The helpers here only read the
//! tree; field lookups fall back to scanning children by kind, so minor
//! grammar differences degrade to "not found" instead of panics.

use tree_sitter::{Node, Parser, Tree};

/// Node-kind names from the tree-sitter-c-sharp grammar
pub mod kind {
    pub const CLASS_DECLARATION: &str = "class_declaration";
    pub const STRUCT_DECLARATION: &str = "struct_declaration";
    pub const RECORD_DECLARATION: &str = "record_declaration";
    pub const INTERFACE_DECLARATION: &str = "interface_declaration";
    pub const METHOD_DECLARATION: &str = "method_declaration";
    pub const LOCAL_FUNCTION_STATEMENT: &str = "local_function_statement";
    pub const LAMBDA_EXPRESSION: &str = "lambda_expression";
    pub const ANONYMOUS_METHOD_EXPRESSION: &str = "anonymous_method_expression";
    pub const INVOCATION_EXPRESSION: &str = "invocation_expression";
    pub const MEMBER_ACCESS_EXPRESSION: &str = "member_access_expression";
    pub const IDENTIFIER: &str = "identifier";
    pub const GENERIC_NAME: &str = "generic_name";
    pub const QUALIFIED_NAME: &str = "qualified_name";
    pub const PREDEFINED_TYPE: &str = "predefined_type";
    pub const NULLABLE_TYPE: &str = "nullable_type";
    pub const ARRAY_TYPE: &str = "array_type";
    pub const IMPLICIT_TYPE: &str = "implicit_type";
    pub const VARIABLE_DECLARATION: &str = "variable_declaration";
    pub const VARIABLE_DECLARATOR: &str = "variable_declarator";
    pub const FIELD_DECLARATION: &str = "field_declaration";
    pub const PROPERTY_DECLARATION: &str = "property_declaration";
    pub const OBJECT_CREATION_EXPRESSION: &str = "object_creation_expression";
    pub const BRACKETED_ARGUMENT_LIST: &str = "bracketed_argument_list";
    pub const MODIFIER: &str = "modifier";
    pub const BASE_LIST: &str = "base_list";
}

/// Errors from setting up or running the parser
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("incompatible C# grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no syntax tree")]
    NoTree,
}

/// A parsed C# source file: the text and its syntax tree
pub struct SourceFile {
    source: String,
    tree: Tree,
}

impl SourceFile {
    /// Parse C# source text
    pub fn parse(source: impl Into<String>) -> Result<Self, SyntaxError> {
        let source = source.into();
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_c_sharp::LANGUAGE.into())?;
        let tree = parser.parse(&source, None).ok_or(SyntaxError::NoTree)?;
        Ok(Self { source, tree })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by a node
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// 1-based line and column of a node's start
    pub fn line_col(&self, node: Node<'_>) -> (usize, usize) {
        let point = node.start_position();
        (point.row + 1, point.column + 1)
    }

    /// Whether the tree contains error nodes (tolerant parse still usable)
    pub fn has_parse_errors(&self) -> bool {
        self.root().has_error()
    }
}

/// Look up a child by field name
pub fn field<'t>(node: Node<'t>, name: &str) -> Option<Node<'t>> {
    node.child_by_field_name(name)
}

/// Named children of a node, in order
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// First named child with the given kind
pub fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let result = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    result
}

/// All named children with the given kind
pub fn children_of_kind<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() == kind)
        .collect()
}

/// Whether a declaration carries the given modifier keyword.
///
/// Grammar versions differ on whether modifiers are wrapped in a `modifier`
/// node or appear as bare keyword tokens; both are accepted.
pub fn has_modifier(file: &SourceFile, node: Node<'_>, keyword: &str) -> bool {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).any(|child| {
        child.kind() == keyword
            || (child.kind() == kind::MODIFIER && file.text(child) == keyword)
    });
    result
}

/// Declared name of a declaration node (`name:` field, or first identifier)
pub fn declared_name<'s>(file: &'s SourceFile, node: Node<'_>) -> Option<&'s str> {
    field(node, "name")
        .or_else(|| child_of_kind(node, kind::IDENTIFIER))
        .map(|n| file.text(n))
}

/// Declared return type of a method-like declaration
pub fn return_type<'t>(node: Node<'t>) -> Option<Node<'t>> {
    field(node, "type").or_else(|| field(node, "returns"))
}

/// The member name of a member access `name:` node.
///
/// Handles plain identifiers and generic names (`x.Foo<T>()` calls `Foo`).
pub fn member_name<'s>(file: &'s SourceFile, name: Node<'_>) -> Option<&'s str> {
    match name.kind() {
        kind::IDENTIFIER => Some(file.text(name)),
        kind::GENERIC_NAME => child_of_kind(name, kind::IDENTIFIER).map(|n| file.text(n)),
        _ => None,
    }
}

/// The simple (unqualified, non-generic) name of a type node.
///
/// `Task<string>` and `System.Threading.Tasks.Task` both yield `Task`;
/// `var` (implicit type) yields `None`.
pub fn simple_type_name<'s>(file: &'s SourceFile, ty: Node<'_>) -> Option<&'s str> {
    match ty.kind() {
        kind::IDENTIFIER | kind::PREDEFINED_TYPE => Some(file.text(ty)),
        kind::GENERIC_NAME => child_of_kind(ty, kind::IDENTIFIER).map(|n| file.text(n)),
        kind::QUALIFIED_NAME => {
            let name = field(ty, "name").or_else(|| named_children(ty).into_iter().last())?;
            simple_type_name(file, name)
        }
        kind::NULLABLE_TYPE | kind::ARRAY_TYPE => {
            let inner = field(ty, "type").or_else(|| named_children(ty).into_iter().next())?;
            simple_type_name(file, inner)
        }
        // `var` carries no name; the declaration's initializer decides
        kind::IMPLICIT_TYPE => None,
        _ => None,
    }
}

/// The initializer expression of a variable declarator, if any
pub fn declarator_initializer(declarator: Node<'_>) -> Option<Node<'_>> {
    let name = field(declarator, "name");
    named_children(declarator)
        .into_iter()
        .filter(|c| Some(c.id()) != name.map(|n| n.id()))
        .find(|c| c.kind() != kind::BRACKETED_ARGUMENT_LIST)
}
