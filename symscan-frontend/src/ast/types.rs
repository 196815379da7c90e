//! Type names as they appear in declarations

use crate::lexer::TokenType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types a variable or parameter can be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Float,
    Double,
    Char,
    String,
    Bool,
}

impl DataType {
    pub fn from_token(token_type: &TokenType) -> Option<Self> {
        match token_type {
            TokenType::Int => Some(DataType::Int),
            TokenType::Float => Some(DataType::Float),
            TokenType::Double => Some(DataType::Double),
            TokenType::Char => Some(DataType::Char),
            TokenType::Str => Some(DataType::String),
            TokenType::Bool => Some(DataType::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Char => "char",
            DataType::String => "string",
            DataType::Bool => "bool",
        };
        write!(f, "{}", name)
    }
}

/// Declared return type of an ordinary function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnType {
    Data(DataType),
    Void,
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Data(data_type) => write!(f, "{}", data_type),
            ReturnType::Void => write!(f, "void"),
        }
    }
}

/// The restricted return-type vocabulary of the entry function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryReturnType {
    Int,
    Void,
}

impl EntryReturnType {
    /// Accepted keywords, in lookup order
    pub const ALL: [EntryReturnType; 2] = [EntryReturnType::Int, EntryReturnType::Void];

    pub fn from_token(token_type: &TokenType) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.keyword() == *token_type)
    }

    pub fn keyword(self) -> TokenType {
        match self {
            EntryReturnType::Int => TokenType::Int,
            EntryReturnType::Void => TokenType::Void,
        }
    }
}

impl fmt::Display for EntryReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
