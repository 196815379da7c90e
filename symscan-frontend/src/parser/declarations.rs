//! Declaration and function parsing
//!
//! This module handles global variables, function definitions (both the
//! entry function and ordinary functions), parameters, local variable
//! declarations and literal constants.

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::errors::ParseError;
use crate::parser::Parser;
use symscan_common::{CompilerError, SourceLocation};
use log::trace;

impl Parser {
    /// Parse a top-level item (global variable or function definition)
    pub fn parse_top_level_item(&mut self) -> Result<TopLevelItem, CompilerError> {
        if self.is_entry_function_start() {
            return Ok(TopLevelItem::Function(self.parse_entry_function()?));
        }

        let start_location = self.current_location();
        let return_type = self.parse_return_type("declaration")?;
        let name = self.expect_identifier("declaration")?;

        if self.check(&TokenType::LeftParen) {
            return Ok(TopLevelItem::Function(
                self.parse_named_function(start_location, name, return_type)?,
            ));
        }

        match return_type {
            ReturnType::Data(data_type) => Ok(TopLevelItem::GlobalVariable(
                self.parse_global_variable(start_location, data_type, name)?,
            )),
            ReturnType::Void => Err(ParseError::InvalidDeclaration {
                message: format!("Variable '{}' cannot have type void", name),
                location: start_location,
            }
            .into()),
        }
    }

    /// `main` optionally preceded by one of the entry return-type keywords
    fn is_entry_function_start(&self) -> bool {
        match self.peek().map(|t| &t.token_type) {
            Some(TokenType::Main) => true,
            Some(token_type) if EntryReturnType::from_token(token_type).is_some() => {
                matches!(self.peek_nth(1).map(|t| &t.token_type), Some(TokenType::Main))
            }
            _ => false,
        }
    }

    /// Parse `('int' | 'void')? 'main' '(' ')' block`
    pub fn parse_entry_function(&mut self) -> Result<FunctionDefinition, CompilerError> {
        let start_location = self.current_location();

        let return_type = self
            .peek()
            .and_then(|t| EntryReturnType::from_token(&t.token_type));
        if return_type.is_some() {
            self.advance();
        }

        self.expect(TokenType::Main, "entry function")?;
        self.expect(TokenType::LeftParen, "entry function")?;
        self.expect(TokenType::RightParen, "entry function")?;

        let body = self.parse_block("entry function")?;
        let span = self.span_from(start_location);
        let text = self.text_of(&span);

        trace!("parsed entry function at {}", span);

        Ok(FunctionDefinition {
            kind: FunctionKind::Entry { return_type },
            body,
            span,
            text,
        })
    }

    /// Parse the rest of `returnType ID '(' parameterList? ')' block`
    fn parse_named_function(
        &mut self,
        start_location: SourceLocation,
        name: String,
        return_type: ReturnType,
    ) -> Result<FunctionDefinition, CompilerError> {
        self.expect(TokenType::LeftParen, "function definition")?;
        let parameters = self.parse_parameter_list()?;
        self.expect(TokenType::RightParen, "function definition")?;

        let body = self.parse_block("function body")?;
        let span = self.span_from(start_location);
        let text = self.text_of(&span);

        trace!("parsed function '{}' at {}", name, span);

        Ok(FunctionDefinition {
            kind: FunctionKind::Named {
                name,
                return_type,
                parameters,
            },
            body,
            span,
            text,
        })
    }

    /// Parse `dataType ID (',' dataType ID)*`, or nothing before `)`
    fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, CompilerError> {
        let mut parameters = Vec::new();

        if self.check(&TokenType::RightParen) {
            return Ok(parameters);
        }

        loop {
            let start_location = self.current_location();
            let data_type = self.parse_data_type("parameter list")?;
            let name = self.expect_identifier("parameter list")?;

            parameters.push(Parameter {
                data_type,
                name,
                span: self.span_from(start_location),
            });

            if !self.match_token(&TokenType::Comma) {
                break;
            }
        }

        Ok(parameters)
    }

    /// Parse the rest of `dataType ID '=' constant ';'`
    fn parse_global_variable(
        &mut self,
        start_location: SourceLocation,
        data_type: DataType,
        name: String,
    ) -> Result<GlobalVariable, CompilerError> {
        self.expect(TokenType::Equal, "global variable")?;
        let value = self.parse_constant()?;
        self.expect(TokenType::Semicolon, "global variable")?;

        Ok(GlobalVariable {
            data_type,
            name,
            value,
            span: self.span_from(start_location),
        })
    }

    /// Parse `dataType ID (',' ID)* ('=' expression)? ';'`
    pub fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration, CompilerError> {
        let start_location = self.current_location();
        let data_type = self.parse_data_type("variable declaration")?;

        let mut names = vec![self.expect_identifier("variable declaration")?];
        while self.match_token(&TokenType::Comma) {
            names.push(self.expect_identifier("variable declaration")?);
        }

        let initializer = if self.match_token(&TokenType::Equal) {
            let expression = self.parse_expression()?;
            let text = self.text_of(&expression.span);
            Some(Initializer { expression, text })
        } else {
            None
        };

        self.expect(TokenType::Semicolon, "variable declaration")?;

        Ok(VariableDeclaration {
            data_type,
            names,
            initializer,
            span: self.span_from(start_location),
        })
    }

    /// Parse a literal constant, keeping the text it was written as
    pub fn parse_constant(&mut self) -> Result<Constant, CompilerError> {
        let start_location = self.current_location();
        let negative = self.match_token(&TokenType::Minus);

        let token = self.advance().ok_or_else(|| ParseError::UnexpectedEndOfFile {
            expected: "constant".to_string(),
            location: start_location.clone(),
        })?;

        // The sign sticks to the literal, dropping anything in between
        let text = if negative { format!("-{}", token.lexeme) } else { token.lexeme.clone() };

        let value = match (token.token_type, negative) {
            (TokenType::IntLiteral(n), _) => Literal::Int(if negative { -n } else { n }),
            (TokenType::FloatLiteral(n), _) => Literal::Float(if negative { -n } else { n }),
            (TokenType::CharLiteral(c), false) => Literal::Char(c),
            (TokenType::StringLiteral(s), false) => Literal::String(s),
            (TokenType::BoolLiteral(b), false) => Literal::Bool(b),
            (token_type, _) => {
                return Err(ParseError::UnexpectedToken {
                    expected: "constant".to_string(),
                    found: Token::new(token_type, token.lexeme, token.span),
                }
                .into());
            }
        };

        let span = self.span_from(start_location);

        Ok(Constant { value, text, span })
    }

    /// Whether the current token begins a variable declaration
    pub(crate) fn is_declaration_start(&self) -> bool {
        self.peek().is_some_and(|t| t.token_type.is_data_type())
    }

    pub(crate) fn parse_data_type(&mut self, context: &str) -> Result<DataType, ParseError> {
        let data_type = self.peek().and_then(|t| DataType::from_token(&t.token_type));
        match data_type {
            Some(data_type) => {
                self.advance();
                Ok(data_type)
            }
            None => Err(self.unexpected(&format!("type name in {}", context))),
        }
    }

    fn parse_return_type(&mut self, context: &str) -> Result<ReturnType, ParseError> {
        if self.match_token(&TokenType::Void) {
            return Ok(ReturnType::Void);
        }
        self.parse_data_type(context).map(ReturnType::Data)
    }

    /// Error describing the current token as unexpected
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) if token.token_type != TokenType::EndOfFile => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.clone(),
            },
            _ => ParseError::UnexpectedEndOfFile {
                expected: expected.to_string(),
                location: self.current_location(),
            },
        }
    }
}
