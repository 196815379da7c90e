//! Expression parsing
//!
//! One method per precedence level, lowest first. Binary levels are
//! left-associative; assignment is right-associative.

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::errors::ParseError;
use crate::parser::Parser;
use symscan_common::{CompilerError, SourceSpan};

impl Parser {
    /// Parse expression (top level)
    pub fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_assignment_expression()
    }

    /// Parse assignment expression
    fn parse_assignment_expression(&mut self) -> Result<Expression, CompilerError> {
        let left = self.parse_logical_or_expression()?;

        let Some(op) = self.parse_assignment_operator() else {
            return Ok(left);
        };

        if !matches!(left.kind, ExpressionKind::Identifier(_)) {
            return Err(ParseError::InvalidExpression {
                message: format!("Invalid assignment target before '{}'", op),
                location: left.span.start,
            }
            .into());
        }

        let right = self.parse_assignment_expression()?;
        let span = SourceSpan::new(left.span.start.clone(), right.span.end.clone());

        Ok(Expression {
            kind: ExpressionKind::Assignment {
                op,
                target: Box::new(left),
                value: Box::new(right),
            },
            span,
        })
    }

    /// Parse assignment operator
    fn parse_assignment_operator(&mut self) -> Option<AssignOp> {
        let op = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::Equal) => AssignOp::Assign,
            Some(TokenType::PlusEqual) => AssignOp::AddAssign,
            Some(TokenType::MinusEqual) => AssignOp::SubAssign,
            Some(TokenType::StarEqual) => AssignOp::MulAssign,
            Some(TokenType::SlashEqual) => AssignOp::DivAssign,
            Some(TokenType::PercentEqual) => AssignOp::ModAssign,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    /// Parse logical OR expression
    fn parse_logical_or_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_logical_and_expression()?;

        while self.match_token(&TokenType::PipePipe) {
            let right = self.parse_logical_and_expression()?;
            left = binary(BinaryOp::LogicalOr, left, right);
        }

        Ok(left)
    }

    /// Parse logical AND expression
    fn parse_logical_and_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_equality_expression()?;

        while self.match_token(&TokenType::AmpersandAmpersand) {
            let right = self.parse_equality_expression()?;
            left = binary(BinaryOp::LogicalAnd, left, right);
        }

        Ok(left)
    }

    /// Parse equality expression
    fn parse_equality_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_relational_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::EqualEqual) => BinaryOp::Equal,
                Some(TokenType::BangEqual) => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();

            let right = self.parse_relational_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse relational expression
    fn parse_relational_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_additive_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::Less) => BinaryOp::Less,
                Some(TokenType::Greater) => BinaryOp::Greater,
                Some(TokenType::LessEqual) => BinaryOp::LessEqual,
                Some(TokenType::GreaterEqual) => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();

            let right = self.parse_additive_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse additive expression
    fn parse_additive_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_multiplicative_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::Plus) => BinaryOp::Add,
                Some(TokenType::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();

            let right = self.parse_multiplicative_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse multiplicative expression
    fn parse_multiplicative_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::Star) => BinaryOp::Mul,
                Some(TokenType::Slash) => BinaryOp::Div,
                Some(TokenType::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.advance();

            let right = self.parse_unary_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse unary expression
    fn parse_unary_expression(&mut self) -> Result<Expression, CompilerError> {
        let start_location = self.current_location();

        let op = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::Bang) => UnaryOp::LogicalNot,
            Some(TokenType::Minus) => UnaryOp::Minus,
            Some(TokenType::PlusPlus) => UnaryOp::PreIncrement,
            Some(TokenType::MinusMinus) => UnaryOp::PreDecrement,
            _ => return self.parse_postfix_expression(),
        };
        self.advance();

        let operand = self.parse_unary_expression()?;
        Ok(Expression {
            kind: ExpressionKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span: self.span_from(start_location),
        })
    }

    /// Parse postfix expression
    fn parse_postfix_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut expr = self.parse_primary_expression()?;

        loop {
            match self.peek().map(|t| &t.token_type) {
                Some(TokenType::LeftParen) => {
                    self.advance();
                    let arguments = self.parse_argument_list()?;
                    self.expect(TokenType::RightParen, "function call")?;

                    let span = self.span_from(expr.span.start.clone());
                    expr = Expression {
                        kind: ExpressionKind::Call {
                            function: Box::new(expr),
                            arguments,
                        },
                        span,
                    };
                }
                Some(TokenType::PlusPlus) | Some(TokenType::MinusMinus) => {
                    let op = if self.check(&TokenType::PlusPlus) {
                        UnaryOp::PostIncrement
                    } else {
                        UnaryOp::PostDecrement
                    };
                    self.advance();

                    let span = self.span_from(expr.span.start.clone());
                    expr = Expression {
                        kind: ExpressionKind::Unary {
                            op,
                            operand: Box::new(expr),
                        },
                        span,
                    };
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Parse call arguments up to (not including) the closing parenthesis
    fn parse_argument_list(&mut self) -> Result<Vec<Expression>, CompilerError> {
        let mut arguments = Vec::new();

        if self.check(&TokenType::RightParen) {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression()?);
            if !self.match_token(&TokenType::Comma) {
                break;
            }
        }

        Ok(arguments)
    }

    /// Parse primary expression
    fn parse_primary_expression(&mut self) -> Result<Expression, CompilerError> {
        let start_location = self.current_location();

        let kind = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::IntLiteral(value)) => ExpressionKind::Literal(Literal::Int(*value)),
            Some(TokenType::FloatLiteral(value)) => ExpressionKind::Literal(Literal::Float(*value)),
            Some(TokenType::CharLiteral(value)) => ExpressionKind::Literal(Literal::Char(*value)),
            Some(TokenType::StringLiteral(value)) => {
                ExpressionKind::Literal(Literal::String(value.clone()))
            }
            Some(TokenType::BoolLiteral(value)) => ExpressionKind::Literal(Literal::Bool(*value)),
            Some(TokenType::Identifier(name)) => ExpressionKind::Identifier(name.clone()),
            // `main` is a keyword, but the entry function can still be called by name
            Some(TokenType::Main) => ExpressionKind::Identifier("main".to_string()),
            Some(TokenType::LeftParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenType::RightParen, "parenthesized expression")?;
                // Widen the span so the initializer text keeps its parentheses
                return Ok(Expression {
                    kind: inner.kind,
                    span: self.span_from(start_location),
                });
            }
            _ => return Err(self.unexpected("expression").into()),
        };
        self.advance();

        Ok(Expression {
            kind,
            span: self.span_from(start_location),
        })
    }
}

fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
    let span = SourceSpan::new(left.span.start.clone(), right.span.end.clone());
    Expression {
        kind: ExpressionKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    }
}
