//! Plain-text and JSON reports
//!
//! Each text report is a `Display` adapter over borrowed data, so callers
//! choose where it goes: `to_string()`, `write!` into a file, or stdout.

use crate::lexer::{Token, TokenType};
use crate::semantic::{Function, GlobalVariable, Inventory};
use symscan_common::CompilerError;
use std::fmt;

/// Default file name of the globals report
pub const GLOBALS_FILE: &str = "OutputGlobalVariables.txt";
/// Default file name of the functions report
pub const FUNCTIONS_FILE: &str = "Functions.txt";
/// Default file name of the lexeme report
pub const LEXEMES_FILE: &str = "Lexemes.txt";

/// One `Variable: <name> Value: <value> Type: <type>` line per global
pub struct GlobalsReport<'a>(pub &'a [GlobalVariable]);

impl fmt::Display for GlobalsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for global in self.0 {
            writeln!(
                f,
                "Variable: {} Value: {} Type: {}",
                global.name, global.value, global.data_type
            )?;
        }
        Ok(())
    }
}

/// One block per function, each followed by a blank line
pub struct FunctionsReport<'a>(pub &'a [Function]);

impl fmt::Display for FunctionsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for function in self.0 {
            write_function(f, function)?;
        }
        Ok(())
    }
}

fn write_function(f: &mut fmt::Formatter<'_>, function: &Function) -> fmt::Result {
    writeln!(f, "Name: {}", function.name)?;
    writeln!(
        f,
        "Type: {}, {}",
        if function.is_main { "Main" } else { "Regular" },
        if function.is_recursive { "Recursive" } else { "Non-recursive" }
    )?;
    writeln!(f, "Return Type: {}", function.return_type.as_deref().unwrap_or("None"))?;

    if function.parameters.is_empty() {
        writeln!(f, "Parameters: None")?;
    } else {
        writeln!(f, "Parameters: {}", function.parameters.join(", "))?;
    }

    writeln!(f, "Local Variables:")?;
    if function.local_variables.is_empty() {
        writeln!(f, "\tNone")?;
    }
    for var in &function.local_variables {
        writeln!(f, "\t{} {} = {}", var.data_type, var.name, var.value)?;
    }

    writeln!(f, "Control Structures:")?;
    if function.control_blocks.is_empty() {
        writeln!(f, "\tNone")?;
    }
    for tag in &function.control_blocks {
        writeln!(f, "\t{}", tag)?;
    }

    writeln!(f)
}

/// One `<SYMBOLIC_NAME, 'lexeme', line>` line per token, end of file excluded
pub struct LexemesReport<'a>(pub &'a [Token]);

impl fmt::Display for LexemesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.0 {
            if token.token_type == TokenType::EndOfFile {
                continue;
            }
            writeln!(
                f,
                "<{}, '{}', {}>",
                token.token_type.symbolic_name(),
                token.lexeme,
                token.line()
            )?;
        }
        Ok(())
    }
}

/// Pretty-printed JSON of the whole inventory
pub fn inventory_json(inventory: &Inventory) -> Result<String, CompilerError> {
    Ok(serde_json::to_string_pretty(inventory)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::semantic::{ControlKind, ControlTag, Variable};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_globals_report() {
        let globals = vec![
            GlobalVariable {
                data_type: "int".to_string(),
                name: "x".to_string(),
                value: "5".to_string(),
            },
            GlobalVariable {
                data_type: "string".to_string(),
                name: "s".to_string(),
                value: "\"hi\"".to_string(),
            },
        ];

        assert_eq!(
            GlobalsReport(&globals).to_string(),
            "Variable: x Value: 5 Type: int\nVariable: s Value: \"hi\" Type: string\n"
        );
    }

    #[test]
    fn test_functions_report() {
        let mut fact = Function::new("fact", false, Some("int".to_string()));
        fact.is_recursive = true;
        fact.parameters.push("int n".to_string());
        fact.local_variables.push(Variable::new("int".to_string(), "r".to_string(), Some("1")));
        fact.local_variables.push(Variable::new("int".to_string(), "t".to_string(), None));
        fact.control_blocks.push(ControlTag { kind: ControlKind::IfElse, line: 3 });

        let main = Function::new("main", true, None);

        let expected = indoc! {"
            Name: fact
            Type: Regular, Recursive
            Return Type: int
            Parameters: int n
            Local Variables:
            \tint r = 1
            \tint t = null
            Control Structures:
            \t<if...else, 3>

            Name: main
            Type: Main, Non-recursive
            Return Type: None
            Parameters: None
            Local Variables:
            \tNone
            Control Structures:
            \tNone

        "};

        assert_eq!(FunctionsReport(&[fact, main]).to_string(), expected);
    }

    #[test]
    fn test_lexemes_report() {
        let tokens = Lexer::new("int x = 5; // five\n@").tokenize().unwrap();

        let expected = indoc! {"
            <INT, 'int', 1>
            <ID, 'x', 1>
            <ASSIGN, '=', 1>
            <INT_LITERAL, '5', 1>
            <SEMICOLON, ';', 1>
            <LINE_COMMENT, '// five', 1>
            <ERROR, '@', 2>
        "};

        assert_eq!(LexemesReport(&tokens).to_string(), expected);
    }

    #[test]
    fn test_inventory_json() {
        let inventory = Inventory {
            globals: Vec::new(),
            functions: vec![Function::new("main", true, Some("void".to_string()))],
        };

        let json = inventory_json(&inventory).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["functions"][0]["name"], "main");
        assert_eq!(value["functions"][0]["return_type"], "void");
        assert_eq!(value["globals"], serde_json::json!([]));
    }
}
