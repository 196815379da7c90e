//! Recursive Descent Parser
//!
//! Parses tokens into an Abstract Syntax Tree (AST).
//! Comments and error tokens are dropped before parsing; the full source
//! text is kept so nodes can record the exact text they were written as.

pub mod errors;
pub mod declarations;
pub mod statements;
pub mod expressions;

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use symscan_common::{CompilerError, SourceLocation, SourceSpan};
use log::debug;
use std::collections::VecDeque;

pub use errors::ParseError;

/// Parser over one token stream
pub struct Parser {
    pub(crate) tokens: VecDeque<Token>,
    source: Vec<char>,
    /// End of the most recently consumed token
    previous_end: SourceLocation,
}

impl Parser {
    /// Create a new parser. `source` must be the text `tokens` were lexed from.
    pub fn new(tokens: Vec<Token>, source: &str) -> Self {
        let mut filtered_tokens: VecDeque<Token> = tokens
            .into_iter()
            .filter(|t| !t.token_type.is_trivia())
            .collect();

        if !matches!(filtered_tokens.back(), Some(t) if t.token_type == TokenType::EndOfFile) {
            let location = filtered_tokens
                .back()
                .map(|t| t.span.end.clone())
                .unwrap_or_else(|| SourceLocation::new_simple(1, 1));
            filtered_tokens.push_back(Token::eof(location));
        }

        let previous_end = filtered_tokens
            .front()
            .map(|t| t.span.start.clone())
            .unwrap_or_else(|| SourceLocation::new_simple(1, 1));

        Self {
            tokens: filtered_tokens,
            source: source.chars().collect(),
            previous_end,
        }
    }

    /// Peek at current token without consuming
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Peek `n` tokens past the current one
    pub(crate) fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(n)
    }

    /// Get current token and advance
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.previous_end = token.span.end.clone();
        Some(token)
    }

    /// Check if current token matches expected type
    pub(crate) fn check(&self, token_type: &TokenType) -> bool {
        if let Some(token) = self.peek() {
            same_kind(&token.token_type, token_type)
        } else {
            matches!(token_type, TokenType::EndOfFile)
        }
    }

    /// Consume token if it matches expected type
    pub(crate) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect and consume a specific token type
    pub(crate) fn expect(&mut self, token_type: TokenType, context: &str) -> Result<Token, ParseError> {
        let expected = format!("{} in {}", describe(&token_type), context);

        match self.peek() {
            Some(token) if same_kind(&token.token_type, &token_type) => {}
            Some(token) if token.token_type != TokenType::EndOfFile => {
                return Err(ParseError::UnexpectedToken {
                    expected,
                    found: token.clone(),
                });
            }
            _ => {
                return Err(ParseError::UnexpectedEndOfFile {
                    expected,
                    location: self.current_location(),
                });
            }
        }

        let location = self.current_location();
        self.advance()
            .ok_or(ParseError::UnexpectedEndOfFile { expected, location })
    }

    /// Expect an identifier and return its name
    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<String, ParseError> {
        let token = self.expect(TokenType::Identifier(String::new()), context)?;
        match token.token_type {
            TokenType::Identifier(name) => Ok(name),
            _ => Err(ParseError::UnexpectedToken {
                expected: format!("identifier in {}", context),
                found: token,
            }),
        }
    }

    /// Get current location for error reporting
    pub(crate) fn current_location(&self) -> SourceLocation {
        match self.peek() {
            Some(token) => token.span.start.clone(),
            None => self.previous_end.clone(),
        }
    }

    /// Span from `start` to the end of the last consumed token
    pub(crate) fn span_from(&self, start: SourceLocation) -> SourceSpan {
        SourceSpan::new(start, self.previous_end.clone())
    }

    /// Source text covered by `span`
    pub(crate) fn text_of(&self, span: &SourceSpan) -> String {
        span.slice(&self.source)
    }

    /// Parse a complete translation unit
    pub fn parse_translation_unit(&mut self) -> Result<TranslationUnit, CompilerError> {
        let start_location = self.current_location();
        let mut items = Vec::new();

        while !self.check(&TokenType::EndOfFile) {
            items.push(self.parse_top_level_item()?);
        }

        debug!("parsed {} top-level items", items.len());

        Ok(TranslationUnit {
            items,
            span: self.span_from(start_location),
        })
    }
}

fn same_kind(a: &TokenType, b: &TokenType) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

/// Human-readable name of a token kind for error messages
pub(crate) fn describe(token_type: &TokenType) -> String {
    match token_type {
        TokenType::Identifier(_) => "identifier".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    pub(crate) fn parser_for(input: &str) -> Parser {
        let tokens = Lexer::new(input).tokenize().unwrap();
        Parser::new(tokens, input)
    }

    fn parse_unit(input: &str) -> Result<TranslationUnit, CompilerError> {
        parser_for(input).parse_translation_unit()
    }

    #[test]
    fn test_parse_empty_program() {
        let unit = parse_unit("  // nothing here\n").unwrap();
        assert!(unit.items.is_empty());
    }

    #[test]
    fn test_parse_entry_function() {
        let unit = parse_unit("int main() { return 0; }").unwrap();
        assert_eq!(unit.items.len(), 1);

        match &unit.items[0] {
            TopLevelItem::Function(func) => {
                assert_eq!(
                    func.kind,
                    FunctionKind::Entry { return_type: Some(EntryReturnType::Int) }
                );
                assert_eq!(func.body.len(), 1);
                assert_eq!(func.text, "int main() { return 0; }");
            }
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_parse_entry_function_without_return_type() {
        let unit = parse_unit("main() { }").unwrap();
        match &unit.items[0] {
            TopLevelItem::Function(func) => {
                assert_eq!(func.kind, FunctionKind::Entry { return_type: None });
            }
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_parse_globals_and_functions_in_order() {
        let source = "int a = 1;\nvoid f() { }\nfloat b = -2.5;\nvoid main() { }";
        let unit = parse_unit(source).unwrap();

        assert_eq!(unit.items.len(), 4);
        assert!(matches!(unit.items[0], TopLevelItem::GlobalVariable(_)));
        assert!(matches!(unit.items[1], TopLevelItem::Function(_)));
        assert!(matches!(unit.items[2], TopLevelItem::GlobalVariable(_)));
        assert!(matches!(unit.items[3], TopLevelItem::Function(_)));
        assert_eq!(unit.global_variables().count(), 2);
        assert_eq!(unit.functions().count(), 2);
    }

    #[test]
    fn test_error_tokens_are_skipped() {
        let unit = parse_unit("int a = 1; @\nvoid main() { }").unwrap();
        assert_eq!(unit.items.len(), 2);
    }

    #[test]
    fn test_missing_semicolon_is_parse_error() {
        let err = parse_unit("int a = 1\nvoid main() { }").unwrap_err();
        match err {
            CompilerError::ParseError { location, message } => {
                assert_eq!(location.line, 2);
                assert_eq!(message, "Expected ; in global variable, found void");
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_end_of_file() {
        let err = parse_unit("void f() { int x;").unwrap_err();
        assert!(matches!(err, CompilerError::ParseError { .. }));
        assert!(err.to_string().contains("Unexpected end of file"));
    }
}
