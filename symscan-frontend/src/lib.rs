//! symscan - Frontend
//!
//! This crate provides the frontend components of the symbol scanner:
//! - Lexer: tokenizes source code, keeping comments and bad characters as tokens
//! - Parser: builds an AST from tokens
//! - AST: abstract syntax tree definitions
//! - Semantic analysis: extracts the global/function inventory
//! - Reports: text and JSON renderings of tokens and inventories

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod semantic;
pub mod report;

pub use lexer::{lexical_errors, Lexer, Token, TokenType};
pub use parser::{Parser, ParseError};
pub use ast::{FunctionDefinition, Statement, StatementKind, TopLevelItem, TranslationUnit};
pub use semantic::{
    AnalysisOptions, ControlKind, ControlTag, Function, GlobalVariable, Inventory,
    RecursionStrategy, SemanticAnalyzer, Variable,
};
pub use report::{FunctionsReport, GlobalsReport, LexemesReport};

use symscan_common::CompilerError;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Tokenize source code, comments and error tokens included
    pub fn tokenize_source(source: &str) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::new(source);
        lexer.tokenize()
    }

    /// Parse source code into an AST
    pub fn parse_source(source: &str) -> Result<TranslationUnit, CompilerError> {
        let tokens = Self::tokenize_source(source)?;
        Self::parse_tokens(tokens, source)
    }

    /// Parse tokens previously produced from `source`
    pub fn parse_tokens(tokens: Vec<Token>, source: &str) -> Result<TranslationUnit, CompilerError> {
        let mut parser = Parser::new(tokens, source);
        parser.parse_translation_unit()
    }

    /// Parse and analyze source code into an inventory
    pub fn analyze_source(source: &str, options: AnalysisOptions) -> Result<Inventory, CompilerError> {
        let ast = Self::parse_source(source)?;
        Ok(semantic::analyze(&ast, options))
    }
}
