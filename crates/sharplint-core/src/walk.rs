//! Top-down traversal of C# syntax trees
//!
//! Rules implement `Visitor` and get one `enter`/`leave` pair per named
//! node. Scope-tracking visitors push state in `enter` and pop it in
//! `leave`; `leave` runs for every entered node, including ones whose
//! children were skipped.

use tree_sitter::Node;

/// Trait for visiting nodes during a preorder walk
pub trait Visitor {
    /// Called when a node is entered. Return `false` to skip its children.
    fn enter(&mut self, _node: Node<'_>) -> bool {
        true
    }

    /// Called when a node is left, after its children (if any) were walked.
    fn leave(&mut self, _node: Node<'_>) {}
}

/// Walk a subtree, visiting every named node
pub fn walk<V: Visitor + ?Sized>(node: Node<'_>, visitor: &mut V) {
    if visitor.enter(node) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            walk(child, visitor);
        }
    }
    visitor.leave(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{kind, SourceFile};

    struct KindCounter {
        target: &'static str,
        count: usize,
        entered: usize,
        left: usize,
    }

    impl Visitor for KindCounter {
        fn enter(&mut self, node: Node<'_>) -> bool {
            self.entered += 1;
            if node.kind() == self.target {
                self.count += 1;
            }
            true
        }

        fn leave(&mut self, _node: Node<'_>) {
            self.left += 1;
        }
    }

    #[test]
    fn test_walk_counts_invocations() {
        let file = SourceFile::parse("class C { void M() { a.B(); c.D(); } }").unwrap();
        let mut counter = KindCounter {
            target: kind::INVOCATION_EXPRESSION,
            count: 0,
            entered: 0,
            left: 0,
        };
        walk(file.root(), &mut counter);
        assert_eq!(counter.count, 2);
        assert_eq!(counter.entered, counter.left);
    }

    struct SkipMethods {
        invocations: usize,
    }

    impl Visitor for SkipMethods {
        fn enter(&mut self, node: Node<'_>) -> bool {
            if node.kind() == kind::INVOCATION_EXPRESSION {
                self.invocations += 1;
            }
            node.kind() != kind::METHOD_DECLARATION
        }
    }

    #[test]
    fn test_enter_false_skips_children() {
        let file = SourceFile::parse("class C { void M() { a.B(); } }").unwrap();
        let mut visitor = SkipMethods { invocations: 0 };
        walk(file.root(), &mut visitor);
        assert_eq!(visitor.invocations, 0);
    }
}
