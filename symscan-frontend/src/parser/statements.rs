//! Statement parsing
//!
//! This module handles blocks, simple statements and the four control
//! constructs.

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use symscan_common::{CompilerError, SourceLocation};

impl Parser {
    /// Parse `'{' statement* '}'`
    pub fn parse_block(&mut self, context: &str) -> Result<Vec<Statement>, CompilerError> {
        self.expect(TokenType::LeftBrace, context)?;

        let mut statements = Vec::new();
        while !self.check(&TokenType::RightBrace) && !self.check(&TokenType::EndOfFile) {
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenType::RightBrace, context)?;
        Ok(statements)
    }

    /// Body of a control construct: a braced block or a single statement
    fn parse_body(&mut self, context: &str) -> Result<Vec<Statement>, CompilerError> {
        if self.check(&TokenType::LeftBrace) {
            self.parse_block(context)
        } else {
            Ok(vec![self.parse_statement()?])
        }
    }

    /// Parse statement
    pub fn parse_statement(&mut self) -> Result<Statement, CompilerError> {
        let start_location = self.current_location();

        let kind = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::If) | Some(TokenType::For) | Some(TokenType::While) => {
                StatementKind::Control(self.parse_control_block()?)
            }
            Some(TokenType::Return) => {
                self.advance();
                self.parse_return_statement()?
            }
            Some(TokenType::Break) => {
                self.advance();
                self.expect(TokenType::Semicolon, "break statement")?;
                StatementKind::Break
            }
            Some(TokenType::Continue) => {
                self.advance();
                self.expect(TokenType::Semicolon, "continue statement")?;
                StatementKind::Continue
            }
            Some(TokenType::Semicolon) => {
                self.advance();
                StatementKind::Empty
            }
            _ => {
                if self.is_declaration_start() {
                    StatementKind::VariableDeclaration(self.parse_variable_declaration()?)
                } else {
                    self.parse_expression_statement()?
                }
            }
        };

        Ok(Statement {
            kind,
            span: self.span_from(start_location),
        })
    }

    /// Parse one of `if`, `if ... else`, `for`, `while`
    pub fn parse_control_block(&mut self) -> Result<ControlBlock, CompilerError> {
        let start_location = self.current_location();

        match self.peek().map(|t| &t.token_type) {
            Some(TokenType::If) => self.parse_if_statement(start_location),
            Some(TokenType::For) => self.parse_for_statement(start_location),
            Some(TokenType::While) => self.parse_while_statement(start_location),
            _ => Err(self.unexpected("if, for or while").into()),
        }
    }

    /// Parse expression statement
    fn parse_expression_statement(&mut self) -> Result<StatementKind, CompilerError> {
        let expr = self.parse_expression()?;
        self.expect(TokenType::Semicolon, "expression statement")?;
        Ok(StatementKind::Expression(expr))
    }

    /// Parse if statement; an `else` makes it the distinct if-else construct
    fn parse_if_statement(&mut self, start: SourceLocation) -> Result<ControlBlock, CompilerError> {
        self.expect(TokenType::If, "if statement")?;
        self.expect(TokenType::LeftParen, "if statement")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::RightParen, "if statement")?;

        let then_body = self.parse_body("if statement")?;

        if self.match_token(&TokenType::Else) {
            let else_body = self.parse_body("else branch")?;
            return Ok(ControlBlock::IfElse(IfElseBlock {
                condition,
                then_body,
                else_body,
                span: self.span_from(start),
            }));
        }

        Ok(ControlBlock::If(IfBlock {
            condition,
            body: then_body,
            span: self.span_from(start),
        }))
    }

    /// Parse while statement
    fn parse_while_statement(&mut self, start: SourceLocation) -> Result<ControlBlock, CompilerError> {
        self.expect(TokenType::While, "while statement")?;
        self.expect(TokenType::LeftParen, "while statement")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::RightParen, "while statement")?;

        let body = self.parse_body("while statement")?;

        Ok(ControlBlock::While(WhileBlock {
            condition,
            body,
            span: self.span_from(start),
        }))
    }

    /// Parse for statement
    fn parse_for_statement(&mut self, start: SourceLocation) -> Result<ControlBlock, CompilerError> {
        self.expect(TokenType::For, "for statement")?;
        self.expect(TokenType::LeftParen, "for statement")?;

        // Parse init (can be declaration or expression)
        let init_start = self.current_location();
        let init = if self.match_token(&TokenType::Semicolon) {
            None
        } else if self.is_declaration_start() {
            let decl = self.parse_variable_declaration()?;
            Some(Box::new(Statement {
                kind: StatementKind::VariableDeclaration(decl),
                span: self.span_from(init_start),
            }))
        } else {
            let expr = self.parse_expression()?;
            self.expect(TokenType::Semicolon, "for statement init")?;
            Some(Box::new(Statement {
                kind: StatementKind::Expression(expr),
                span: self.span_from(init_start),
            }))
        };

        let condition = if self.check(&TokenType::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenType::Semicolon, "for statement condition")?;

        let update = if self.check(&TokenType::RightParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenType::RightParen, "for statement")?;

        let body = self.parse_body("for statement")?;

        Ok(ControlBlock::For(ForBlock {
            init,
            condition,
            update,
            body,
            span: self.span_from(start),
        }))
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<StatementKind, CompilerError> {
        let value = if self.check(&TokenType::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect(TokenType::Semicolon, "return statement")?;
        Ok(StatementKind::Return(value))
    }
}
