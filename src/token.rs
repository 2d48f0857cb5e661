//! Token types for the mathlang lexer.

use std::fmt;

/// A token produced by the scanner.
///
/// The language needs exactly four kinds of token; the parser
/// disambiguates keywords from ordinary names, so `let`, `print`, and
/// `note` arrive as `Name` like any other identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An identifier or keyword (`let`, `print`, `note`, `x`, ...).
    Name(String),
    /// A numeric literal, possibly negative.
    Number(f64),
    /// Quoted text with the quotes stripped, or a bare multi-character
    /// lexeme that classifies as neither keyword nor number.
    String(String),
    /// One of `+ - = ;`.
    Symbol(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Name(name) => write!(f, "{}", name),
            Token::Number(value) => write!(f, "{}", value),
            Token::String(text) => write!(f, "\"{}\"", text),
            Token::Symbol(ch) => write!(f, "{}", ch),
        }
    }
}

/// Check whether a lexeme is one of the language's reserved words.
pub fn is_keyword(lexeme: &str) -> bool {
    matches!(lexeme, "let" | "print" | "note")
}
