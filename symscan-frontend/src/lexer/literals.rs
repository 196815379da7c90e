//! Literal scanning for the lexer
//!
//! This module handles numeric, character, and string literals.

use crate::lexer::{Lexer, TokenType};
use symscan_common::CompilerError;

impl Lexer {
    /// Tokenize an integer or floating point literal
    pub fn tokenize_number(&mut self) -> Result<TokenType, CompilerError> {
        let mut number = String::new();

        // Handle hex prefix
        if self.current_char() == Some('0') && matches!(self.peek_char(1), Some('x' | 'X')) {
            self.advance(); // '0'
            self.advance(); // 'x'

            while let Some(ch) = self.current_char() {
                if ch.is_ascii_hexdigit() {
                    number.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }

            if number.is_empty() {
                return Err(CompilerError::lexer_error(
                    "Invalid hex literal".to_string(),
                    self.current_location(),
                ));
            }

            let value = i64::from_str_radix(&number, 16).map_err(|_| {
                CompilerError::lexer_error(
                    format!("Invalid hex literal: 0x{}", number),
                    self.current_location(),
                )
            })?;

            return Ok(TokenType::IntLiteral(value));
        }

        self.take_digits(&mut number);

        // A '.' only belongs to the number when a digit follows it
        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
            number.push('.');
            self.advance();
            self.take_digits(&mut number);

            let value = number.parse::<f64>().map_err(|_| {
                CompilerError::lexer_error(
                    format!("Invalid float literal: {}", number),
                    self.current_location(),
                )
            })?;

            return Ok(TokenType::FloatLiteral(value));
        }

        let value = number.parse::<i64>().map_err(|_| {
            CompilerError::lexer_error(
                format!("Invalid integer literal: {}", number),
                self.current_location(),
            )
        })?;

        Ok(TokenType::IntLiteral(value))
    }

    fn take_digits(&mut self, number: &mut String) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Decode the character after a backslash
    fn escape_sequence(&mut self, literal: &str, quote: char) -> Result<char, CompilerError> {
        let decoded = match self.current_char() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('\\') => '\\',
            Some('0') => '\0',
            Some(c) if c == quote => quote,
            Some(c) => {
                return Err(CompilerError::lexer_error(
                    format!("Invalid escape sequence: \\{}", c),
                    self.current_location(),
                ));
            }
            None => {
                return Err(CompilerError::lexer_error(
                    format!("Unterminated {} literal", literal),
                    self.current_location(),
                ));
            }
        };
        self.advance();
        Ok(decoded)
    }

    /// Tokenize a character literal
    pub fn tokenize_char_literal(&mut self) -> Result<TokenType, CompilerError> {
        self.advance(); // Skip opening quote

        let ch = match self.current_char() {
            Some('\\') => {
                self.advance();
                self.escape_sequence("character", '\'')?
            }
            Some(ch) if ch != '\'' && ch != '\n' => {
                self.advance();
                ch
            }
            _ => {
                return Err(CompilerError::lexer_error(
                    "Empty character literal".to_string(),
                    self.current_location(),
                ));
            }
        };

        if self.current_char() != Some('\'') {
            return Err(CompilerError::lexer_error(
                "Unterminated character literal".to_string(),
                self.current_location(),
            ));
        }

        self.advance(); // Skip closing quote
        Ok(TokenType::CharLiteral(ch))
    }

    /// Tokenize a string literal
    pub fn tokenize_string_literal(&mut self) -> Result<TokenType, CompilerError> {
        self.advance(); // Skip opening quote
        let mut string = String::new();

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(TokenType::StringLiteral(string));
                }
                '\n' => break,
                '\\' => {
                    self.advance();
                    string.push(self.escape_sequence("string", '"')?);
                }
                _ => {
                    string.push(ch);
                    self.advance();
                }
            }
        }

        Err(CompilerError::lexer_error(
            "Unterminated string literal".to_string(),
            self.current_location(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenType};

    fn first(input: &str) -> TokenType {
        Lexer::new(input).next_token().unwrap().token_type
    }

    #[test]
    fn test_numbers() {
        assert_eq!(first("0"), TokenType::IntLiteral(0));
        assert_eq!(first("1234"), TokenType::IntLiteral(1234));
        assert_eq!(first("0X10"), TokenType::IntLiteral(16));
        assert_eq!(first("2.25"), TokenType::FloatLiteral(2.25));
    }

    #[test]
    fn test_dot_without_fraction_is_not_float() {
        let tokens = Lexer::new("1.").tokenize().unwrap();
        assert_eq!(tokens[0].token_type, TokenType::IntLiteral(1));
        assert_eq!(tokens[1].token_type, TokenType::Error(".".to_string()));
    }

    #[test]
    fn test_char_escapes() {
        let tokens = Lexer::new(r"'\n' '\t' '\0' '\'' '\\'").tokenize().unwrap();

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].token_type, TokenType::CharLiteral('\n'));
        assert_eq!(tokens[1].token_type, TokenType::CharLiteral('\t'));
        assert_eq!(tokens[2].token_type, TokenType::CharLiteral('\0'));
        assert_eq!(tokens[3].token_type, TokenType::CharLiteral('\''));
        assert_eq!(tokens[4].token_type, TokenType::CharLiteral('\\'));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            first(r#""hello\nworld\t\"""#),
            TokenType::StringLiteral("hello\nworld\t\"".to_string())
        );
    }

    #[test]
    fn test_unterminated_literals() {
        assert!(Lexer::new("\"open").next_token().is_err());
        assert!(Lexer::new("\"split\nline\"").next_token().is_err());
        assert!(Lexer::new("'a").next_token().is_err());
        assert!(Lexer::new("''").next_token().is_err());
        assert!(Lexer::new(r#""\q""#).next_token().is_err());
    }
}
