//! Token definitions for the lexer
//!
//! This module defines token types and the Token struct.

use symscan_common::{SourceLocation, SourceSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenType {
    // Literals
    IntLiteral(i64),
    FloatLiteral(f64),
    CharLiteral(char),
    StringLiteral(String),
    BoolLiteral(bool),

    Identifier(String),

    // Type keywords
    Int, Float, Double, Char, Str, Bool, Void,

    // Keywords
    Main, If, Else, For, While, Return, Break, Continue,

    // Operators
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    Percent,        // %
    Bang,           // !
    Equal,          // =
    Less,           // <
    Greater,        // >

    // Compound operators
    PlusPlus,       // ++
    MinusMinus,     // --
    LessEqual,      // <=
    GreaterEqual,   // >=
    EqualEqual,     // ==
    BangEqual,      // !=
    AmpersandAmpersand, // &&
    PipePipe,       // ||

    // Assignment operators
    PlusEqual,      // +=
    MinusEqual,     // -=
    StarEqual,      // *=
    SlashEqual,     // /=
    PercentEqual,   // %=

    // Delimiters
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    Semicolon,      // ;
    Comma,          // ,

    EndOfFile,

    // Comments are kept in the token stream for the lexeme report and
    // dropped by the parser
    LineComment(String),
    BlockComment(String),

    /// A character no rule matches. Reported, then skipped by the parser.
    Error(String),
}

impl TokenType {
    /// Upper-case token class name, as printed in the lexeme report
    pub fn symbolic_name(&self) -> &'static str {
        match self {
            TokenType::IntLiteral(_) => "INT_LITERAL",
            TokenType::FloatLiteral(_) => "FLOAT_LITERAL",
            TokenType::CharLiteral(_) => "CHAR_LITERAL",
            TokenType::StringLiteral(_) => "STRING_LITERAL",
            TokenType::BoolLiteral(_) => "BOOL_LITERAL",
            TokenType::Identifier(_) => "ID",

            TokenType::Int => "INT",
            TokenType::Float => "FLOAT",
            TokenType::Double => "DOUBLE",
            TokenType::Char => "CHAR",
            TokenType::Str => "STRING",
            TokenType::Bool => "BOOL",
            TokenType::Void => "VOID",

            TokenType::Main => "MAIN",
            TokenType::If => "IF",
            TokenType::Else => "ELSE",
            TokenType::For => "FOR",
            TokenType::While => "WHILE",
            TokenType::Return => "RETURN",
            TokenType::Break => "BREAK",
            TokenType::Continue => "CONTINUE",

            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Star => "MUL",
            TokenType::Slash => "DIV",
            TokenType::Percent => "MOD",
            TokenType::Bang => "NOT",
            TokenType::Equal => "ASSIGN",
            TokenType::Less => "LT",
            TokenType::Greater => "GT",

            TokenType::PlusPlus => "INCREMENT",
            TokenType::MinusMinus => "DECREMENT",
            TokenType::LessEqual => "LE",
            TokenType::GreaterEqual => "GE",
            TokenType::EqualEqual => "EQ",
            TokenType::BangEqual => "NE",
            TokenType::AmpersandAmpersand => "AND",
            TokenType::PipePipe => "OR",

            TokenType::PlusEqual => "PLUS_ASSIGN",
            TokenType::MinusEqual => "MINUS_ASSIGN",
            TokenType::StarEqual => "MUL_ASSIGN",
            TokenType::SlashEqual => "DIV_ASSIGN",
            TokenType::PercentEqual => "MOD_ASSIGN",

            TokenType::LeftParen => "LPAREN",
            TokenType::RightParen => "RPAREN",
            TokenType::LeftBrace => "LBRACE",
            TokenType::RightBrace => "RBRACE",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Comma => "COMMA",

            TokenType::EndOfFile => "EOF",
            TokenType::LineComment(_) => "LINE_COMMENT",
            TokenType::BlockComment(_) => "BLOCK_COMMENT",
            TokenType::Error(_) => "ERROR",
        }
    }

    /// Whether this token starts a data type (`int`, `float`, ...)
    pub fn is_data_type(&self) -> bool {
        matches!(
            self,
            TokenType::Int
                | TokenType::Float
                | TokenType::Double
                | TokenType::Char
                | TokenType::Str
                | TokenType::Bool
        )
    }

    /// Tokens the parser never sees
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenType::LineComment(_) | TokenType::BlockComment(_) | TokenType::Error(_)
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::IntLiteral(n) => write!(f, "{n}"),
            TokenType::FloatLiteral(n) => write!(f, "{n}"),
            TokenType::CharLiteral(c) => write!(f, "'{c}'"),
            TokenType::StringLiteral(s) => write!(f, "\"{s}\""),
            TokenType::BoolLiteral(b) => write!(f, "{b}"),
            TokenType::Identifier(s) => write!(f, "{s}"),

            TokenType::Int => write!(f, "int"),
            TokenType::Float => write!(f, "float"),
            TokenType::Double => write!(f, "double"),
            TokenType::Char => write!(f, "char"),
            TokenType::Str => write!(f, "string"),
            TokenType::Bool => write!(f, "bool"),
            TokenType::Void => write!(f, "void"),

            TokenType::Main => write!(f, "main"),
            TokenType::If => write!(f, "if"),
            TokenType::Else => write!(f, "else"),
            TokenType::For => write!(f, "for"),
            TokenType::While => write!(f, "while"),
            TokenType::Return => write!(f, "return"),
            TokenType::Break => write!(f, "break"),
            TokenType::Continue => write!(f, "continue"),

            TokenType::Plus => write!(f, "+"),
            TokenType::Minus => write!(f, "-"),
            TokenType::Star => write!(f, "*"),
            TokenType::Slash => write!(f, "/"),
            TokenType::Percent => write!(f, "%"),
            TokenType::Bang => write!(f, "!"),
            TokenType::Equal => write!(f, "="),
            TokenType::Less => write!(f, "<"),
            TokenType::Greater => write!(f, ">"),

            TokenType::PlusPlus => write!(f, "++"),
            TokenType::MinusMinus => write!(f, "--"),
            TokenType::LessEqual => write!(f, "<="),
            TokenType::GreaterEqual => write!(f, ">="),
            TokenType::EqualEqual => write!(f, "=="),
            TokenType::BangEqual => write!(f, "!="),
            TokenType::AmpersandAmpersand => write!(f, "&&"),
            TokenType::PipePipe => write!(f, "||"),

            TokenType::PlusEqual => write!(f, "+="),
            TokenType::MinusEqual => write!(f, "-="),
            TokenType::StarEqual => write!(f, "*="),
            TokenType::SlashEqual => write!(f, "/="),
            TokenType::PercentEqual => write!(f, "%="),

            TokenType::LeftParen => write!(f, "("),
            TokenType::RightParen => write!(f, ")"),
            TokenType::LeftBrace => write!(f, "{{"),
            TokenType::RightBrace => write!(f, "}}"),
            TokenType::Semicolon => write!(f, ";"),
            TokenType::Comma => write!(f, ","),

            TokenType::EndOfFile => write!(f, "EOF"),
            TokenType::LineComment(s) => write!(f, "//{s}"),
            TokenType::BlockComment(s) => write!(f, "/*{s}*/"),
            TokenType::Error(s) => write!(f, "{s}"),
        }
    }
}

/// A token with its raw source text and location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub span: SourceSpan,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, span: SourceSpan) -> Self {
        Self { token_type, lexeme, span }
    }

    pub fn eof(location: SourceLocation) -> Self {
        Self {
            token_type: TokenType::EndOfFile,
            lexeme: String::new(),
            span: SourceSpan::from_location(location),
        }
    }

    /// 1-based line the token starts on
    pub fn line(&self) -> u32 {
        self.span.start.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.token_type, self.span.start)
    }
}
