//! CL0001: use the async overload inside async methods
//!
//! Flags calls of the form `receiver.Member(...)` made inside an `async`,
//! task-returning method when the receiver's type also exposes
//! `MemberAsync`. Sync methods that merely return a task are exempt: they
//! hand back a future without awaiting anything themselves.

use crate::descriptors::{Descriptor, CL0001_USE_ASYNC_OVERLOAD};
use crate::finding::Finding;
use crate::resolver::{ScopeResolver, TypeResolver};
use crate::rules::{Rule, RuleContext};
use crate::scope::{ClassContext, MethodContext};
use crate::symbols::SymbolTable;
use sharplint_core::syntax::{self, kind, SourceFile};
use sharplint_core::walk::{walk, Visitor};
use sharplint_core::Span;
use std::path::PathBuf;
use tree_sitter::Node;

/// Suffix that names an asynchronous counterpart
pub const ASYNC_SUFFIX: &str = "Async";

pub struct UseAsyncOverloadRule;

impl Rule for UseAsyncOverloadRule {
    fn descriptor(&self) -> &'static Descriptor {
        &CL0001_USE_ASYNC_OVERLOAD
    }

    fn check(&self, file: &SourceFile, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let mut visitor = AsyncCallVisitor {
            file,
            symbols: ctx.symbols,
            file_path: ctx.file_path.to_path_buf(),
            classes: Vec::new(),
            frames: Vec::new(),
            findings: Vec::new(),
        };
        walk(file.root(), &mut visitor);
        visitor.findings
    }
}

/// Decide whether one invocation violates the rule.
///
/// Checks run in a fixed order and short-circuit; every failure is a
/// silent skip. Returns the span of the full invocation to report, or
/// `None`. Stateless: the same node, context, and resolver always yield
/// the same result.
pub fn evaluate(
    file: &SourceFile,
    invocation: Node<'_>,
    context: Option<&MethodContext>,
    resolver: &dyn TypeResolver,
) -> Option<Span> {
    // The call must be shaped `<receiver>.<member>(...)`.
    let function = syntax::field(invocation, "function")?;
    if function.kind() != kind::MEMBER_ACCESS_EXPRESSION {
        return None;
    }
    let receiver = syntax::field(function, "expression")?;
    let member = syntax::field(function, "name")?;
    let member_name = syntax::member_name(file, member)?;

    // An enclosing method (or local function) must exist.
    let context = context?;

    // It must return a task-like value.
    if !context.returns_task {
        return None;
    }

    // It must carry the `async` modifier; a sync method that constructs
    // and returns a task is exempt.
    if !context.is_async {
        return None;
    }

    // The receiver must be a plain identifier.
    if receiver.kind() != kind::IDENTIFIER {
        return None;
    }
    let receiver_name = file.text(receiver);

    // The receiver's type must resolve.
    let resolution = resolver.resolve_receiver(receiver_name);
    let type_name = resolution.type_name()?;

    // The type must expose `<member>Async`.
    let candidate = format!("{member_name}{ASYNC_SUFFIX}");
    if !resolver.has_member(type_name, &candidate) {
        return None;
    }

    Some(Span::of(invocation))
}

/// One frame per function-like declaration on the walk path. Lambdas and
/// anonymous methods are opaque: calls inside them are not attributed to
/// the enclosing method. Local functions form their own context.
enum Frame {
    Method(MethodContext),
    Opaque,
}

struct AsyncCallVisitor<'a> {
    file: &'a SourceFile,
    symbols: &'a SymbolTable,
    file_path: PathBuf,
    classes: Vec<ClassContext>,
    frames: Vec<Frame>,
    findings: Vec<Finding>,
}

impl AsyncCallVisitor<'_> {
    fn current_method(&self) -> Option<&MethodContext> {
        match self.frames.last() {
            Some(Frame::Method(context)) => Some(context),
            _ => None,
        }
    }

    fn record_locals(&mut self, declaration: Node<'_>) {
        // `variable_declaration` also appears under field declarations;
        // fields belong to the class context.
        if declaration
            .parent()
            .is_some_and(|p| p.kind() == kind::FIELD_DECLARATION)
        {
            return;
        }
        let file = self.file;
        let declared = syntax::field(declaration, "type")
            .and_then(|ty| syntax::simple_type_name(file, ty))
            .map(str::to_string);

        let Some(Frame::Method(context)) = self.frames.last_mut() else {
            return;
        };
        for declarator in syntax::children_of_kind(declaration, kind::VARIABLE_DECLARATOR) {
            let Some(name) = syntax::declared_name(file, declarator) else {
                continue;
            };
            let type_name = declared
                .clone()
                .or_else(|| initializer_type(file, declarator));
            if let Some(type_name) = type_name {
                context.declare_local(name.to_string(), type_name);
            }
        }
    }

    fn evaluate_invocation(&mut self, invocation: Node<'_>) {
        let span = {
            let resolver =
                ScopeResolver::new(self.symbols, self.current_method(), self.classes.last());
            evaluate(self.file, invocation, self.current_method(), &resolver)
        };
        if let Some(span) = span {
            let descriptor = &CL0001_USE_ASYNC_OVERLOAD;
            let (line, column) = self.file.line_col(invocation);
            self.findings.push(
                Finding::warning(
                    descriptor.id,
                    descriptor.message,
                    self.file_path.clone(),
                    line,
                    column,
                )
                .with_span(span),
            );
        }
    }
}

impl Visitor for AsyncCallVisitor<'_> {
    fn enter(&mut self, node: Node<'_>) -> bool {
        match node.kind() {
            kind::CLASS_DECLARATION | kind::STRUCT_DECLARATION | kind::RECORD_DECLARATION => {
                self.classes
                    .push(ClassContext::from_declaration(self.file, node));
            }
            kind::METHOD_DECLARATION | kind::LOCAL_FUNCTION_STATEMENT => {
                self.frames.push(Frame::Method(MethodContext::from_declaration(
                    self.file,
                    node,
                    self.symbols,
                )));
            }
            kind::LAMBDA_EXPRESSION | kind::ANONYMOUS_METHOD_EXPRESSION => {
                self.frames.push(Frame::Opaque);
            }
            kind::VARIABLE_DECLARATION => self.record_locals(node),
            kind::INVOCATION_EXPRESSION => self.evaluate_invocation(node),
            _ => {}
        }
        true
    }

    fn leave(&mut self, node: Node<'_>) {
        match node.kind() {
            kind::CLASS_DECLARATION | kind::STRUCT_DECLARATION | kind::RECORD_DECLARATION => {
                self.classes.pop();
            }
            kind::METHOD_DECLARATION
            | kind::LOCAL_FUNCTION_STATEMENT
            | kind::LAMBDA_EXPRESSION
            | kind::ANONYMOUS_METHOD_EXPRESSION => {
                self.frames.pop();
            }
            _ => {}
        }
    }
}

/// For `var x = new T(...)`, the declarator's initializer names the type
fn initializer_type(file: &SourceFile, declarator: Node<'_>) -> Option<String> {
    let init = syntax::declarator_initializer(declarator)?;
    if init.kind() != kind::OBJECT_CREATION_EXPRESSION {
        return None;
    }
    let ty = syntax::field(init, "type")?;
    syntax::simple_type_name(file, ty).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ReceiverResolution;
    use crate::symbols::SymbolCollector;
    use std::path::Path;

    fn check(source: &str) -> Vec<Finding> {
        let file = SourceFile::parse(source).unwrap();
        let symbols = SymbolCollector::build_table(&file, Path::new("test.cs"));
        let ctx = RuleContext {
            file_path: Path::new("test.cs"),
            symbols: &symbols,
        };
        UseAsyncOverloadRule.check(&file, &ctx)
    }

    fn find_kind<'t>(node: Node<'t>, target: &str) -> Option<Node<'t>> {
        if node.kind() == target {
            return Some(node);
        }
        syntax::named_children(node)
            .into_iter()
            .find_map(|child| find_kind(child, target))
    }

    #[test]
    fn test_empty_source_has_no_findings() {
        assert!(check("").is_empty());
    }

    #[test]
    fn test_async_overload_already_used() {
        let findings = check(
            r#"
    using System;
    using System.IO;
    using System.Threading.Tasks;

    public class C
    {
        public async Task MyMethodAsync()
        {
            using (var fileStream = File.OpenRead("filename"))
            {
                var reader = new StreamReader(fileStream);
                var text = await reader.ReadToEndAsync();
            }
        }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_sync_method_returning_task_is_exempt() {
        let findings = check(
            r#"
    using System;
    using System.IO;
    using System.Threading.Tasks;

    public class C
    {
        public Task MyMethodAsync()
        {
            using (var fileStream = File.OpenRead("filename"))
            {
                var reader = new StreamReader(fileStream);
                return reader.ReadToEndAsync();
            }
        }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_sync_call_in_async_method_is_flagged() {
        let source = r#"
    using System;
    using System.IO;
    using System.Threading.Tasks;

    public class C
    {
        public async Task MyMethodAsync()
        {
            using (var fileStream = File.OpenRead("filename"))
            {
                var reader = new StreamReader(fileStream);
                var text = reader.ReadToEnd();
            }
        }
    }"#;
        let findings = check(source);
        assert_eq!(findings.len(), 1);

        let finding = &findings[0];
        assert_eq!(finding.rule_id, "CL0001");
        assert_eq!(finding.severity, crate::finding::Severity::Warning);
        let span = finding.span.unwrap();
        assert_eq!(&source[span.start..span.end], "reader.ReadToEnd()");
        assert_eq!(finding.line, 13);
    }

    #[test]
    fn test_static_type_receiver_is_flagged() {
        let source = r#"
    public class C
    {
        public async Task MyMethodAsync()
        {
            var text = File.ReadAllText("filename");
        }
    }"#;
        let findings = check(source);
        assert_eq!(findings.len(), 1);
        let span = findings[0].span.unwrap();
        assert_eq!(&source[span.start..span.end], "File.ReadAllText(\"filename\")");
    }

    #[test]
    fn test_field_receiver_is_flagged() {
        let findings = check(
            r#"
    public class C
    {
        private StreamReader _reader;

        public async Task MyMethodAsync()
        {
            var text = _reader.ReadToEnd();
        }
    }"#,
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_declared_type_with_async_counterpart() {
        let findings = check(
            r#"
    public class Document
    {
        public void Save() { }
        public Task SaveAsync() { return Task.CompletedTask; }
    }

    public class C
    {
        public async Task RunAsync()
        {
            var document = new Document();
            document.Save();
        }
    }"#,
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_declared_type_without_async_counterpart() {
        let findings = check(
            r#"
    public class Document
    {
        public void Save() { }
    }

    public class C
    {
        public async Task RunAsync()
        {
            var document = new Document();
            document.Save();
        }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_non_async_method_is_not_flagged() {
        let findings = check(
            r#"
    public class C
    {
        public void MyMethod()
        {
            var reader = new StreamReader(stream);
            var text = reader.ReadToEnd();
        }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_plain_function_call_shape_is_skipped() {
        let findings = check(
            r#"
    public class C
    {
        public async Task RunAsync()
        {
            DoWork();
        }

        private void DoWork() { }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_nested_receiver_is_skipped() {
        let findings = check(
            r#"
    public class C
    {
        public async Task RunAsync()
        {
            var text = this.reader.ReadToEnd();
            var more = GetReader().ReadToEnd();
        }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_unresolved_receiver_is_skipped() {
        let findings = check(
            r#"
    public class C
    {
        public async Task RunAsync()
        {
            var text = mystery.ReadToEnd();
        }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_call_inside_lambda_is_not_attributed() {
        let findings = check(
            r#"
    public class C
    {
        public async Task RunAsync()
        {
            var reader = new StreamReader(stream);
            Action action = () => { var text = reader.ReadToEnd(); };
            await Task.Delay(1);
        }
    }"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_local_function_forms_its_own_context() {
        let findings = check(
            r#"
    public class C
    {
        public void Outer()
        {
            async Task InnerAsync()
            {
                var reader = new StreamReader(stream);
                var text = reader.ReadToEnd();
            }
        }
    }"#,
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_top_level_call_has_no_enclosing_method() {
        let findings = check(
            r#"
    var reader = new StreamReader(stream);
    var text = reader.ReadToEnd();
    "#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_check_is_idempotent() {
        let source = r#"
    public class C
    {
        public async Task RunAsync()
        {
            var reader = new StreamReader(stream);
            var text = reader.ReadToEnd();
        }
    }"#;
        let first = check(source);
        let second = check(source);
        assert_eq!(first.len(), 1);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].span, second[0].span);
        assert_eq!(first[0].line, second[0].line);
        assert_eq!(first[0].column, second[0].column);
    }

    // Evaluator-level tests against a stub resolver.

    struct StubResolver {
        resolution: ReceiverResolution,
        members: Vec<(&'static str, &'static str)>,
    }

    impl TypeResolver for StubResolver {
        fn resolve_receiver(&self, _name: &str) -> ReceiverResolution {
            self.resolution.clone()
        }

        fn has_member(&self, type_name: &str, member: &str) -> bool {
            self.members
                .iter()
                .any(|(t, m)| *t == type_name && *m == member)
        }
    }

    fn parse_invocation(source: &str) -> SourceFile {
        let file = SourceFile::parse(source).unwrap();
        assert!(find_kind(file.root(), kind::INVOCATION_EXPRESSION).is_some());
        file
    }

    #[test]
    fn test_evaluate_without_context_skips() {
        let file = parse_invocation("class C { void M() { reader.ReadToEnd(); } }");
        let invocation = find_kind(file.root(), kind::INVOCATION_EXPRESSION).unwrap();
        let resolver = StubResolver {
            resolution: ReceiverResolution::LocalVariable {
                type_name: "StreamReader".to_string(),
            },
            members: vec![("StreamReader", "ReadToEndAsync")],
        };

        assert!(evaluate(&file, invocation, None, &resolver).is_none());
    }

    #[test]
    fn test_evaluate_requires_task_return_then_async() {
        let file = parse_invocation("class C { void M() { reader.ReadToEnd(); } }");
        let invocation = find_kind(file.root(), kind::INVOCATION_EXPRESSION).unwrap();
        let resolver = StubResolver {
            resolution: ReceiverResolution::LocalVariable {
                type_name: "StreamReader".to_string(),
            },
            members: vec![("StreamReader", "ReadToEndAsync")],
        };

        let not_task = MethodContext::new("M").with_async(true);
        assert!(evaluate(&file, invocation, Some(&not_task), &resolver).is_none());

        let not_async = MethodContext::new("M").with_task_return(true);
        assert!(evaluate(&file, invocation, Some(&not_async), &resolver).is_none());

        let both = MethodContext::new("M").with_task_return(true).with_async(true);
        let span = evaluate(&file, invocation, Some(&both), &resolver).unwrap();
        assert_eq!(&file.source()[span.start..span.end], "reader.ReadToEnd()");
    }

    #[test]
    fn test_evaluate_unresolved_receiver_skips() {
        let file = parse_invocation("class C { void M() { reader.ReadToEnd(); } }");
        let invocation = find_kind(file.root(), kind::INVOCATION_EXPRESSION).unwrap();
        let resolver = StubResolver {
            resolution: ReceiverResolution::Unresolved,
            members: vec![("StreamReader", "ReadToEndAsync")],
        };
        let context = MethodContext::new("M").with_task_return(true).with_async(true);

        assert!(evaluate(&file, invocation, Some(&context), &resolver).is_none());
    }

    #[test]
    fn test_evaluate_missing_async_member_skips() {
        let file = parse_invocation("class C { void M() { reader.ReadToEnd(); } }");
        let invocation = find_kind(file.root(), kind::INVOCATION_EXPRESSION).unwrap();
        let resolver = StubResolver {
            resolution: ReceiverResolution::LocalVariable {
                type_name: "StreamReader".to_string(),
            },
            members: vec![],
        };
        let context = MethodContext::new("M").with_task_return(true).with_async(true);

        assert!(evaluate(&file, invocation, Some(&context), &resolver).is_none());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let file = parse_invocation("class C { void M() { reader.ReadToEnd(); } }");
        let invocation = find_kind(file.root(), kind::INVOCATION_EXPRESSION).unwrap();
        let resolver = StubResolver {
            resolution: ReceiverResolution::Field {
                type_name: "StreamReader".to_string(),
            },
            members: vec![("StreamReader", "ReadToEndAsync")],
        };
        let context = MethodContext::new("M").with_task_return(true).with_async(true);

        let first = evaluate(&file, invocation, Some(&context), &resolver);
        let second = evaluate(&file, invocation, Some(&context), &resolver);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
