//! Abstract Syntax Tree definitions
//!
//! This module defines the AST nodes built by the parser and walked by the
//! semantic extraction pass. Every node carries a `SourceSpan`.

pub mod ops;
pub mod types;
pub mod expressions;
pub mod statements;

// Re-export commonly used types at module level
pub use ops::{AssignOp, BinaryOp, UnaryOp};
pub use types::{DataType, EntryReturnType, ReturnType};
pub use expressions::{Constant, Expression, ExpressionKind, Literal};
pub use statements::{
    ControlBlock, ForBlock, FunctionDefinition, FunctionKind, GlobalVariable, IfBlock,
    IfElseBlock, Initializer, Parameter, Statement, StatementKind, TopLevelItem,
    TranslationUnit, VariableDeclaration, WhileBlock,
};
