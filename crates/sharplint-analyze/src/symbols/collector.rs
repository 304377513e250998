//! Symbol collector for building the symbol table from a syntax tree
//!
//! Extracts type declarations and their member names from a parsed file.
//! Nested types are collected as their own entries; a type's member list
//! covers only its direct members.

use super::type_info::{MemberInfo, MemberKind, TypeInfo};
use super::SymbolTable;
use sharplint_core::syntax::{self, kind, SourceFile};
use sharplint_core::walk::{walk, Visitor};
use std::path::{Path, PathBuf};
use tree_sitter::Node;

/// Collects type symbols from a C# syntax tree
pub struct SymbolCollector<'s> {
    file: &'s SourceFile,
    path: PathBuf,
    types: Vec<TypeInfo>,
}

impl<'s> SymbolCollector<'s> {
    pub fn new(file: &'s SourceFile, path: &Path) -> Self {
        Self {
            file,
            path: path.to_path_buf(),
            types: Vec::new(),
        }
    }

    /// Collect all type declarations in the file
    pub fn collect(mut self) -> Vec<TypeInfo> {
        walk(self.file.root(), &mut self);
        self.types
    }

    /// Build a symbol table for one file: builtins plus declared types
    pub fn build_table(file: &SourceFile, path: &Path) -> SymbolTable {
        let mut table = SymbolTable::with_builtins();
        for info in SymbolCollector::new(file, path).collect() {
            table.register_type(info);
        }
        table
    }

    fn collect_type(&mut self, node: Node<'_>) {
        let Some(name) = syntax::declared_name(self.file, node) else {
            return;
        };

        let mut info = TypeInfo::new(name);
        info.file = Some(self.path.clone());
        info.line = Some(self.file.line_col(node).0);

        if let Some(base_list) = syntax::child_of_kind(node, kind::BASE_LIST) {
            for base in syntax::named_children(base_list) {
                if let Some(base_name) = syntax::simple_type_name(self.file, base) {
                    info.bases.push(base_name.to_string());
                }
            }
        }

        if let Some(body) = syntax::field(node, "body") {
            for member in syntax::named_children(body) {
                self.collect_member(member, &mut info);
            }
        }

        self.types.push(info);
    }

    fn collect_member(&self, member: Node<'_>, info: &mut TypeInfo) {
        match member.kind() {
            kind::METHOD_DECLARATION => {
                if let Some(name) = syntax::declared_name(self.file, member) {
                    let is_static = syntax::has_modifier(self.file, member, "static");
                    info.add_member(MemberInfo::method(name).with_static(is_static));
                }
            }
            kind::PROPERTY_DECLARATION => {
                if let Some(name) = syntax::declared_name(self.file, member) {
                    info.add_member(MemberInfo::new(name, MemberKind::Property));
                }
            }
            kind::FIELD_DECLARATION => {
                let Some(declaration) = syntax::child_of_kind(member, kind::VARIABLE_DECLARATION)
                else {
                    return;
                };
                for declarator in
                    syntax::children_of_kind(declaration, kind::VARIABLE_DECLARATOR)
                {
                    if let Some(name) = syntax::declared_name(self.file, declarator) {
                        info.add_member(MemberInfo::new(name, MemberKind::Field));
                    }
                }
            }
            _ => {}
        }
    }
}

impl Visitor for SymbolCollector<'_> {
    fn enter(&mut self, node: Node<'_>) -> bool {
        match node.kind() {
            kind::CLASS_DECLARATION
            | kind::STRUCT_DECLARATION
            | kind::RECORD_DECLARATION
            | kind::INTERFACE_DECLARATION => self.collect_type(node),
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &str) -> SymbolTable {
        let file = SourceFile::parse(source).unwrap();
        SymbolCollector::build_table(&file, Path::new("test.cs"))
    }

    #[test]
    fn test_collects_class_methods() {
        let table = collect(
            r#"
            public class Document
            {
                public void Save() { }
                public Task SaveAsync() { return Task.CompletedTask; }
            }
            "#,
        );

        assert!(table.type_exists("Document"));
        assert!(table.has_member("Document", "Save"));
        assert!(table.has_member("Document", "SaveAsync"));
        assert!(!table.has_member("Document", "Load"));
    }

    #[test]
    fn test_collects_fields_and_properties() {
        let table = collect(
            r#"
            public class Holder
            {
                private StreamReader _reader;
                public int Count { get; set; }
            }
            "#,
        );

        let info = table.get_type("Holder").unwrap();
        assert_eq!(info.get_member("_reader").unwrap().kind, MemberKind::Field);
        assert_eq!(info.get_member("Count").unwrap().kind, MemberKind::Property);
    }

    #[test]
    fn test_collects_base_types() {
        let table = collect(
            r#"
            public class Base { public Task LoadAsync() { return Task.CompletedTask; } }
            public class Derived : Base { }
            "#,
        );

        assert!(table.has_member("Derived", "LoadAsync"));
    }

    #[test]
    fn test_nested_type_members_stay_separate() {
        let table = collect(
            r#"
            public class Outer
            {
                public void Act() { }
                public class Inner
                {
                    public void Run() { }
                }
            }
            "#,
        );

        assert!(table.has_member("Outer", "Act"));
        assert!(table.has_member("Inner", "Run"));
        assert!(!table.has_member("Outer", "Run"));
    }

    #[test]
    fn test_static_method_flag() {
        let table = collect("public class Util { public static void Log() { } }");
        let member = table.get_type("Util").unwrap().get_member("Log").unwrap();
        assert!(member.is_static);
    }
}
