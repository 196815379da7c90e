//! Statement AST nodes
//!
//! This module defines statements, control blocks, declarations and
//! function definitions.

use super::expressions::{Constant, Expression};
use super::types::{DataType, EntryReturnType, ReturnType};
use symscan_common::SourceSpan;
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Local variable declaration, possibly declaring several names
    VariableDeclaration(VariableDeclaration),

    /// Branching or looping construct
    Control(ControlBlock),

    /// Expression statement (assignments, calls, ...)
    Expression(Expression),

    Return(Option<Expression>),

    Break,

    Continue,

    /// Empty statement (just semicolon)
    Empty,
}

/// `type a, b, c = init;` - every name shares the type and the initializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub data_type: DataType,
    pub names: Vec<String>,
    pub initializer: Option<Initializer>,
    pub span: SourceSpan,
}

/// Initializer expression plus the exact text it was written as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initializer {
    pub expression: Expression,
    pub text: String,
}

/// The four control constructs. `IfElse` is its own alternative, not an
/// `If` with an optional branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlBlock {
    If(IfBlock),
    IfElse(IfElseBlock),
    For(ForBlock),
    While(WhileBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfBlock {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfElseBlock {
    pub condition: Expression,
    pub then_body: Vec<Statement>,
    /// For `else if`, a single statement holding the nested control block
    pub else_body: Vec<Statement>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForBlock {
    pub init: Option<Box<Statement>>, // Can be declaration or expression
    pub condition: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Vec<Statement>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileBlock {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub span: SourceSpan,
}

impl ControlBlock {
    pub fn span(&self) -> &SourceSpan {
        match self {
            ControlBlock::If(block) => &block.span,
            ControlBlock::IfElse(block) => &block.span,
            ControlBlock::For(block) => &block.span,
            ControlBlock::While(block) => &block.span,
        }
    }
}

impl Statement {
    /// Visit every expression inside this statement, at any nesting depth
    pub fn walk_expressions<'a>(&'a self, visit: &mut dyn FnMut(&'a Expression)) {
        match &self.kind {
            StatementKind::VariableDeclaration(decl) => {
                if let Some(init) = &decl.initializer {
                    init.expression.walk(visit);
                }
            }
            StatementKind::Expression(expr) | StatementKind::Return(Some(expr)) => expr.walk(visit),
            StatementKind::Control(control) => control.walk_expressions(visit),
            StatementKind::Return(None)
            | StatementKind::Break
            | StatementKind::Continue
            | StatementKind::Empty => {}
        }
    }
}

impl ControlBlock {
    /// Visit every expression in the header and body of this block
    pub fn walk_expressions<'a>(&'a self, visit: &mut dyn FnMut(&'a Expression)) {
        match self {
            ControlBlock::If(block) => {
                block.condition.walk(visit);
                walk_body(&block.body, visit);
            }
            ControlBlock::IfElse(block) => {
                block.condition.walk(visit);
                walk_body(&block.then_body, visit);
                walk_body(&block.else_body, visit);
            }
            ControlBlock::For(block) => {
                if let Some(init) = &block.init {
                    init.walk_expressions(visit);
                }
                if let Some(condition) = &block.condition {
                    condition.walk(visit);
                }
                if let Some(update) = &block.update {
                    update.walk(visit);
                }
                walk_body(&block.body, visit);
            }
            ControlBlock::While(block) => {
                block.condition.walk(visit);
                walk_body(&block.body, visit);
            }
        }
    }
}

fn walk_body<'a>(body: &'a [Statement], visit: &mut dyn FnMut(&'a Expression)) {
    for stmt in body {
        stmt.walk_expressions(visit);
    }
}

/// Module-level variable: `type name = constant;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalVariable {
    pub data_type: DataType,
    pub name: String,
    pub value: Constant,
    pub span: SourceSpan,
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub kind: FunctionKind,
    pub body: Vec<Statement>,
    pub span: SourceSpan,
    /// Full source text of the definition, comments included
    pub text: String,
}

/// The two grammar alternatives for a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FunctionKind {
    /// `int main() { ... }` - no parameter list, restricted return types.
    /// `return_type` is `None` when the keyword was omitted.
    Entry {
        return_type: Option<EntryReturnType>,
    },

    /// `type name(params) { ... }`
    Named {
        name: String,
        return_type: ReturnType,
        parameters: Vec<Parameter>,
    },
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub data_type: DataType,
    pub name: String,
    pub span: SourceSpan,
}

/// Top-level compilation unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub items: Vec<TopLevelItem>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TopLevelItem {
    GlobalVariable(GlobalVariable),
    Function(FunctionDefinition),
}

impl TranslationUnit {
    pub fn global_variables(&self) -> impl Iterator<Item = &GlobalVariable> {
        self.items.iter().filter_map(|item| match item {
            TopLevelItem::GlobalVariable(global) => Some(global),
            TopLevelItem::Function(_) => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.items.iter().filter_map(|item| match item {
            TopLevelItem::Function(func) => Some(func),
            TopLevelItem::GlobalVariable(_) => None,
        })
    }
}
