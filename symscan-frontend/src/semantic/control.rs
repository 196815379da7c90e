//! Control construct classification

use super::inventory::{ControlKind, ControlTag};
use crate::ast::ControlBlock;

/// Kind and opening line of a control construct
pub fn classify(block: &ControlBlock) -> ControlTag {
    let kind = match block {
        ControlBlock::If(_) => ControlKind::If,
        ControlBlock::IfElse(_) => ControlKind::IfElse,
        ControlBlock::For(_) => ControlKind::For,
        ControlBlock::While(_) => ControlKind::While,
    };

    ControlTag {
        kind,
        line: block.span().line(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{StatementKind, TopLevelItem};
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;

    fn tags(body: &str) -> Vec<String> {
        let source = format!("void main() {{{}}}", body);
        let tokens = Lexer::new(&source).tokenize().unwrap();
        let unit = Parser::new(tokens, &source).parse_translation_unit().unwrap();

        let TopLevelItem::Function(func) = &unit.items[0] else {
            panic!("Expected function definition");
        };

        func.body
            .iter()
            .filter_map(|stmt| match &stmt.kind {
                StatementKind::Control(block) => Some(classify(block).to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_each_kind() {
        assert_eq!(
            tags("\nif (a) {}\nif (a) {} else {}\nfor (;;) {}\nwhile (a) {}\n"),
            vec!["<if, 2>", "<if...else, 3>", "<for, 4>", "<while, 5>"]
        );
    }

    #[test]
    fn test_line_is_opening_keyword() {
        // Condition and body on later lines do not move the tag
        assert_eq!(
            tags("\n\n  while\n  (a)\n  {\n  }\n"),
            vec!["<while, 3>"]
        );
    }

    #[test]
    fn test_else_if_is_one_if_else() {
        assert_eq!(tags("\nif (a) {} else if (b) {}"), vec!["<if...else, 2>"]);
    }
}
