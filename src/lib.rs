//! Lexer for the mathlang statement language.
//!
//! This crate converts mathlang source code into a stream of tokens
//! for parsing. The caller hands over the whole source as one string
//! and pulls tokens until the scanner reports end of input.
//!
//! # Example
//!
//! ```
//! use mathlang_lexer::{Scanner, Token};
//!
//! let mut scanner = Scanner::new("let x = 5 ;");
//! let token = scanner.next_token().unwrap();
//! assert_eq!(token, Some(Token::Name("let".to_string())));
//! ```

pub mod scanner;
pub mod token;

pub use scanner::{tokenize, ScanError, Scanner};
pub use token::{is_keyword, Token};
