//! Lexer
//!
//! Tokenizes source text into a stream of tokens.
//! Handles keywords, operators, literals, identifiers, and comments.
//! Characters that match no rule become `TokenType::Error` tokens instead of
//! aborting, so that lexical errors can be reported and analysis continues.

pub mod token;
pub mod literals;
pub mod comments;

pub use token::{Token, TokenType};

use symscan_common::{CompilerError, Diagnostic, SourceLocation, SourceSpan, SourceTracker};
use log::trace;
use std::collections::HashMap;

/// Lexer over a single source text
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) tracker: SourceTracker,
    keywords: HashMap<String, TokenType>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(input: &str) -> Self {
        Self::with_filename(input, "<input>")
    }

    /// Create a lexer whose locations carry `filename`
    pub fn with_filename(input: &str, filename: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            tracker: SourceTracker::new(filename),
            keywords: HashMap::new(),
        };

        lexer.initialize_keywords();
        lexer
    }

    /// Initialize keyword map
    fn initialize_keywords(&mut self) {
        let keywords = [
            ("int", TokenType::Int),
            ("float", TokenType::Float),
            ("double", TokenType::Double),
            ("char", TokenType::Char),
            ("string", TokenType::Str),
            ("bool", TokenType::Bool),
            ("void", TokenType::Void),
            ("main", TokenType::Main),
            ("if", TokenType::If),
            ("else", TokenType::Else),
            ("for", TokenType::For),
            ("while", TokenType::While),
            ("return", TokenType::Return),
            ("break", TokenType::Break),
            ("continue", TokenType::Continue),
            ("true", TokenType::BoolLiteral(true)),
            ("false", TokenType::BoolLiteral(false)),
        ];

        for (keyword, token_type) in keywords {
            self.keywords.insert(keyword.to_string(), token_type);
        }
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.tracker.offset()).copied()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.tracker.offset() + offset).copied()
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.tracker.advance(ch);
        Some(ch)
    }

    /// Get current location
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.tracker.location()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Tokenize an identifier or keyword
    fn tokenize_identifier(&mut self) -> TokenType {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match self.keywords.get(&identifier) {
            Some(keyword_token) => keyword_token.clone(),
            None => TokenType::Identifier(identifier),
        }
    }

    /// Consume `second` if it is the next character, choosing between a
    /// two-character and a one-character token
    fn one_or_two(&mut self, second: char, double: TokenType, single: TokenType) -> TokenType {
        self.advance();
        if self.current_char() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    /// Get next token
    pub fn next_token(&mut self) -> Result<Token, CompilerError> {
        self.skip_whitespace();

        let start_location = self.current_location();

        let token_type = match self.current_char() {
            None => TokenType::EndOfFile,

            Some(ch) if ch.is_alphabetic() || ch == '_' => self.tokenize_identifier(),

            Some(ch) if ch.is_ascii_digit() => self.tokenize_number()?,

            Some('\'') => self.tokenize_char_literal()?,

            Some('"') => self.tokenize_string_literal()?,

            Some('+') => {
                self.advance();
                if self.current_char() == Some('+') {
                    self.advance();
                    TokenType::PlusPlus
                } else if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::PlusEqual
                } else {
                    TokenType::Plus
                }
            }

            Some('-') => {
                self.advance();
                if self.current_char() == Some('-') {
                    self.advance();
                    TokenType::MinusMinus
                } else if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::MinusEqual
                } else {
                    TokenType::Minus
                }
            }

            Some('*') => self.one_or_two('=', TokenType::StarEqual, TokenType::Star),

            Some('/') => {
                if self.peek_char(1) == Some('/') {
                    self.tokenize_line_comment()
                } else if self.peek_char(1) == Some('*') {
                    self.tokenize_block_comment()?
                } else {
                    self.one_or_two('=', TokenType::SlashEqual, TokenType::Slash)
                }
            }

            Some('%') => self.one_or_two('=', TokenType::PercentEqual, TokenType::Percent),
            Some('!') => self.one_or_two('=', TokenType::BangEqual, TokenType::Bang),
            Some('=') => self.one_or_two('=', TokenType::EqualEqual, TokenType::Equal),
            Some('<') => self.one_or_two('=', TokenType::LessEqual, TokenType::Less),
            Some('>') => self.one_or_two('=', TokenType::GreaterEqual, TokenType::Greater),

            // A lone '&' or '|' is not an operator in this language
            Some('&') if self.peek_char(1) == Some('&') => {
                self.advance();
                self.advance();
                TokenType::AmpersandAmpersand
            }
            Some('|') if self.peek_char(1) == Some('|') => {
                self.advance();
                self.advance();
                TokenType::PipePipe
            }

            Some('(') => { self.advance(); TokenType::LeftParen }
            Some(')') => { self.advance(); TokenType::RightParen }
            Some('{') => { self.advance(); TokenType::LeftBrace }
            Some('}') => { self.advance(); TokenType::RightBrace }
            Some(';') => { self.advance(); TokenType::Semicolon }
            Some(',') => { self.advance(); TokenType::Comma }

            Some(ch) => {
                self.advance();
                TokenType::Error(ch.to_string())
            }
        };

        let end_location = self.current_location();
        let lexeme: String = self.input[start_location.offset..end_location.offset]
            .iter()
            .collect();
        let span = SourceSpan::new(start_location, end_location);

        trace!("token {} {:?} at {}", token_type.symbolic_name(), lexeme, span.start);

        Ok(Token::new(token_type, lexeme, span))
    }

    /// Tokenize entire input into a vector of tokens (EOF token last)
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token_type, TokenType::EndOfFile);
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }
}

/// Collect a diagnostic for every `Error` token in `tokens`
pub fn lexical_errors(tokens: &[Token]) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|token| matches!(token.token_type, TokenType::Error(_)))
        .map(|token| {
            Diagnostic::error(
                format!("Lexical error detected: {} at line {}", token.lexeme, token.line()),
                token.span.clone(),
            )
        })
        .collect()
}
