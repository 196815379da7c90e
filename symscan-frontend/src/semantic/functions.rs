//! Per-function extraction
//!
//! Builds one `Function` record from a definition: signature first, then a
//! single visit over the body's top-level statements, then the recursion
//! decision. Statements nested inside control bodies are not visited.

use super::control::classify;
use super::inventory::{Function, Variable};
use super::options::{AnalysisOptions, RecursionStrategy};
use crate::ast::*;
use log::trace;

/// Extracts `Function` records under a fixed set of options
pub struct FunctionAnalyzer<'a> {
    options: &'a AnalysisOptions,
}

impl<'a> FunctionAnalyzer<'a> {
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self { options }
    }

    /// Analyze one function definition
    pub fn analyze(&self, func: &FunctionDefinition) -> Function {
        let mut function = match &func.kind {
            FunctionKind::Entry { return_type } => {
                Function::new("main", true, return_type.map(|t| t.to_string()))
            }
            FunctionKind::Named { name, return_type, parameters } => {
                let mut function = Function::new(name.as_str(), false, Some(return_type.to_string()));
                function.parameters = parameters
                    .iter()
                    .map(|p| format!("{} {}", p.data_type, p.name))
                    .collect();
                function
            }
        };

        visit_statements(&func.body, &mut function);

        if let FunctionKind::Named { name, .. } = &func.kind {
            function.is_recursive = self.is_recursive(name, func);
        }

        trace!(
            "function '{}': {} locals, {} control blocks, recursive={}",
            function.name,
            function.local_variables.len(),
            function.control_blocks.len(),
            function.is_recursive
        );

        function
    }

    fn is_recursive(&self, name: &str, func: &FunctionDefinition) -> bool {
        match self.options.recursion {
            RecursionStrategy::Lexical => mentions_name_twice(name, &func.text),
            RecursionStrategy::CallSite => calls_itself(name, &func.body),
        }
    }
}

/// Record locals and control blocks from the top-level statements of a body
fn visit_statements(body: &[Statement], function: &mut Function) {
    for stmt in body {
        match &stmt.kind {
            StatementKind::VariableDeclaration(decl) => {
                let value = decl.initializer.as_ref().map(|init| init.text.as_str());
                for name in &decl.names {
                    function.local_variables.push(Variable::new(
                        decl.data_type.to_string(),
                        name.clone(),
                        value,
                    ));
                }
            }
            StatementKind::Control(block) => function.control_blocks.push(classify(block)),
            StatementKind::Expression(_)
            | StatementKind::Return(_)
            | StatementKind::Break
            | StatementKind::Continue
            | StatementKind::Empty => {}
        }
    }
}

/// Non-overlapping occurrences of `name` in `text`, the signature's own included
fn mentions_name_twice(name: &str, text: &str) -> bool {
    !name.is_empty() && text.matches(name).nth(1).is_some()
}

/// Any call through the identifier `name`, at any nesting depth
fn calls_itself(name: &str, body: &[Statement]) -> bool {
    let mut found = false;
    for stmt in body {
        stmt.walk_expressions(&mut |expr| {
            if expr.callee_name() == Some(name) {
                found = true;
            }
        });
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn analyze_with(source: &str, options: AnalysisOptions) -> Vec<Function> {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let unit = Parser::new(tokens, source).parse_translation_unit().unwrap();
        let analyzer = FunctionAnalyzer::new(&options);
        unit.functions().map(|f| analyzer.analyze(f)).collect()
    }

    fn analyze(source: &str) -> Vec<Function> {
        analyze_with(source, AnalysisOptions::default())
    }

    #[test]
    fn test_ordinary_function_signature() {
        let functions = analyze("float mix(int a, char b, string c) { return 1.0; }");
        let f = &functions[0];

        assert_eq!(f.name, "mix");
        assert!(!f.is_main);
        assert_eq!(f.return_type.as_deref(), Some("float"));
        assert_eq!(f.parameters, vec!["int a", "char b", "string c"]);
    }

    #[test]
    fn test_entry_function() {
        let functions = analyze("void main() { }\nmain() { }");

        assert_eq!(functions[0].name, "main");
        assert!(functions[0].is_main);
        assert!(!functions[0].is_recursive);
        assert!(functions[0].parameters.is_empty());
        assert_eq!(functions[0].return_type.as_deref(), Some("void"));
        assert_eq!(functions[1].return_type, None);
    }

    #[test]
    fn test_entry_function_is_never_recursive() {
        let functions = analyze("int main() { main(); return 0; }");
        assert!(!functions[0].is_recursive);

        let functions = analyze_with(
            "int main() { main(); return 0; }",
            AnalysisOptions::with_recursion(RecursionStrategy::CallSite),
        );
        assert!(!functions[0].is_recursive);
    }

    #[test]
    fn test_locals_share_type_and_initializer() {
        let functions = analyze("void f() { int a, b = 3 * (k + 1); string s; }");
        let rendered: Vec<(String, String, String)> = functions[0]
            .local_variables
            .iter()
            .map(|v| (v.data_type.clone(), v.name.clone(), v.value.clone()))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("int".to_string(), "a".to_string(), "3 * (k + 1)".to_string()),
                ("int".to_string(), "b".to_string(), "3 * (k + 1)".to_string()),
                ("string".to_string(), "s".to_string(), "null".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_statements_are_not_visited() {
        let source = indoc! {"
            void f() {
                while (x) {
                    int hidden = 1;
                    if (x) { }
                }
                for (int i = 0; i < 3; i++) { }
            }
        "};
        let functions = analyze(source);
        let tags: Vec<String> = functions[0].control_blocks.iter().map(|t| t.to_string()).collect();

        assert!(functions[0].local_variables.is_empty());
        assert_eq!(tags, vec!["<while, 2>", "<for, 6>"]);
    }

    #[test]
    fn test_lexical_recursion() {
        let source = indoc! {"
            int fact(int n) {
                if (n <= 1) return 1;
                return n * fact(n - 1);
            }
            int id(int n) { return n; }
        "};
        let functions = analyze(source);

        assert!(functions[0].is_recursive);
        assert!(!functions[1].is_recursive);
    }

    #[test]
    fn test_lexical_recursion_counts_comments() {
        let functions = analyze("void tick() {\n  // tick once\n}");
        assert!(functions[0].is_recursive);

        let functions = analyze_with(
            "void tick() {\n  // tick once\n}",
            AnalysisOptions::with_recursion(RecursionStrategy::CallSite),
        );
        assert!(!functions[0].is_recursive);
    }

    #[test]
    fn test_lexical_recursion_matches_substrings() {
        let functions = analyze("int count(int n) { int counter = n; return counter; }");
        assert!(functions[0].is_recursive);

        let functions = analyze_with(
            "int count(int n) { int counter = n; return counter; }",
            AnalysisOptions::with_recursion(RecursionStrategy::CallSite),
        );
        assert!(!functions[0].is_recursive);
    }

    #[test]
    fn test_calling_the_entry_function_is_not_self_recursion() {
        let source = "void again() { main(); }\nvoid main() { again(); }";

        for strategy in RecursionStrategy::ALL {
            let functions = analyze_with(source, AnalysisOptions::with_recursion(strategy));
            assert_eq!(functions[0].name, "again");
            assert!(!functions[0].is_recursive, "strategy {strategy}");
            assert!(!functions[1].is_recursive, "strategy {strategy}");
        }
    }

    #[test]
    fn test_lexical_recursion_respects_whitespace() {
        // "a; b" does not spell "ab" once whitespace is kept
        let functions = analyze("void ab() { int a; b = 1; }");
        assert!(!functions[0].is_recursive);
    }

    #[test]
    fn test_call_site_recursion_at_any_depth() {
        let source = indoc! {"
            void walk(int n) {
                while (n > 0) {
                    if (n == 3) { walk(n - 1); }
                    n--;
                }
            }
        "};
        let functions =
            analyze_with(source, AnalysisOptions::with_recursion(RecursionStrategy::CallSite));
        assert!(functions[0].is_recursive);
    }
}
