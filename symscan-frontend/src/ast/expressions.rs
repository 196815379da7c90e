//! Expression AST nodes
//!
//! This module defines expression nodes and literal constants.

use super::ops::{AssignOp, BinaryOp, UnaryOp};
use symscan_common::SourceSpan;
use serde::{Deserialize, Serialize};

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
    Bool(bool),
}

/// A literal constant together with its source text (`-5`, `'a'`, `"hi"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub value: Literal,
    pub text: String,
    pub span: SourceSpan,
}

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    Literal(Literal),

    Identifier(String),

    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    Assignment {
        op: AssignOp,
        target: Box<Expression>,
        value: Box<Expression>,
    },

    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// Name of the called function when this is a call through a plain identifier
    pub fn callee_name(&self) -> Option<&str> {
        match &self.kind {
            ExpressionKind::Call { function, .. } => match &function.kind {
                ExpressionKind::Identifier(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// Visit this expression and every sub-expression, pre-order
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Expression)) {
        visit(self);
        match &self.kind {
            ExpressionKind::Literal(_) | ExpressionKind::Identifier(_) => {}
            ExpressionKind::Binary { left, right, .. } => {
                left.walk(visit);
                right.walk(visit);
            }
            ExpressionKind::Unary { operand, .. } => operand.walk(visit),
            ExpressionKind::Assignment { target, value, .. } => {
                target.walk(visit);
                value.walk(visit);
            }
            ExpressionKind::Call { function, arguments } => {
                function.walk(visit);
                for argument in arguments {
                    argument.walk(visit);
                }
            }
        }
    }
}
