//! End-to-end tests: source text to reports

use indoc::indoc;
use pretty_assertions::assert_eq;
use symscan_frontend::report::inventory_json;
use symscan_frontend::{
    AnalysisOptions, Frontend, FunctionsReport, GlobalsReport, LexemesReport, RecursionStrategy,
};

const PROGRAM: &str = indoc! {r#"
    int counter = 0;
    string greeting = "hello";
    double ratio = -0.5;

    /* factorial, the classic */
    int fact(int n) {
        if (n <= 1) {
            return 1;
        }
        return n * fact(n - 1);
    }

    void report(string label, int value) {
        int shown, total = value * 2;
        while (shown < total) {
            shown++;
        }
        for (int i = 0; i < 3; i++) print(label);
    }

    int main() {
        int result = fact(5);
        if (result > 100) {
            report("big", result);
        } else {
            report("small", result);
        }
        return 0;
    }
"#};

#[test]
fn test_globals_report_for_program() {
    let inventory = Frontend::analyze_source(PROGRAM, AnalysisOptions::default()).unwrap();

    let expected = indoc! {r#"
        Variable: counter Value: 0 Type: int
        Variable: greeting Value: "hello" Type: string
        Variable: ratio Value: -0.5 Type: double
    "#};

    assert_eq!(GlobalsReport(&inventory.globals).to_string(), expected);
}

#[test]
fn test_functions_report_for_program() {
    let inventory = Frontend::analyze_source(PROGRAM, AnalysisOptions::default()).unwrap();

    let expected = indoc! {"
        Name: fact
        Type: Regular, Recursive
        Return Type: int
        Parameters: int n
        Local Variables:
        \tNone
        Control Structures:
        \t<if, 7>

        Name: report
        Type: Regular, Non-recursive
        Return Type: void
        Parameters: string label, int value
        Local Variables:
        \tint shown = value * 2
        \tint total = value * 2
        Control Structures:
        \t<while, 15>
        \t<for, 18>

        Name: main
        Type: Main, Non-recursive
        Return Type: int
        Parameters: None
        Local Variables:
        \tint result = fact(5)
        Control Structures:
        \t<if...else, 23>

    "};

    assert_eq!(FunctionsReport(&inventory.functions).to_string(), expected);
}

#[test]
fn test_recursion_strategies_agree_on_plain_self_call() {
    for strategy in RecursionStrategy::ALL {
        let inventory =
            Frontend::analyze_source(PROGRAM, AnalysisOptions::with_recursion(strategy)).unwrap();
        let flags: Vec<(&str, bool)> = inventory
            .functions
            .iter()
            .map(|f| (f.name.as_str(), f.is_recursive))
            .collect();

        assert_eq!(
            flags,
            vec![("fact", true), ("report", false), ("main", false)],
            "strategy {strategy}"
        );
    }
}

#[test]
fn test_recursion_strategies_differ_on_mentions() {
    let source = indoc! {r#"
        // loop is not recursive, it only mentions its name
        void loop() {
            string s = "loop";
        }
    "#};

    let lexical = Frontend::analyze_source(source, AnalysisOptions::default()).unwrap();
    assert!(lexical.functions[0].is_recursive);

    let call_site =
        Frontend::analyze_source(source, AnalysisOptions::with_recursion(RecursionStrategy::CallSite))
            .unwrap();
    assert!(!call_site.functions[0].is_recursive);
}

#[test]
fn test_lexeme_report_keeps_comments_and_errors() {
    let source = "int a = 1; /* one */\n@\nvoid main() { }";
    let tokens = Frontend::tokenize_source(source).unwrap();
    let report = LexemesReport(&tokens).to_string();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[5], "<BLOCK_COMMENT, '/* one */', 1>");
    assert_eq!(lines[6], "<ERROR, '@', 2>");
    assert_eq!(lines[7], "<VOID, 'void', 3>");
    assert_eq!(lines.last(), Some(&"<RBRACE, '}', 3>"));
}

#[test]
fn test_json_inventory() {
    let inventory = Frontend::analyze_source(PROGRAM, AnalysisOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&inventory_json(&inventory).unwrap()).unwrap();

    assert_eq!(value["globals"][1]["value"], "\"hello\"");
    assert_eq!(value["functions"][1]["parameters"][1], "int value");
    assert_eq!(value["functions"][2]["control_blocks"][0], "<if...else, 23>");
    assert_eq!(value["functions"][2]["is_main"], true);
}
