//! Scanner for the mathlang statement language.

use crate::token::{is_keyword, Token};
use thiserror::Error;

/// Errors that can occur during scanning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unrecognized character: {0:?}")]
    UnrecognizedCharacter(char),

    #[error("Malformed input: {0}")]
    MalformedInput(&'static str),
}

/// Scanner tokenizes mathlang source code.
///
/// The scanner owns the whole source and a cursor into it. Callers
/// pull tokens one at a time with [`Scanner::next_token`] until it
/// returns `Ok(None)`. Any error aborts the pass; the scanner does
/// not resynchronize.
pub struct Scanner {
    chars: Vec<char>,
    cursor: usize,
}

impl Scanner {
    /// Create a new scanner for the given source (0 or more lines).
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            cursor: 0,
        }
    }

    /// The current read position, in characters from the start of
    /// input. Never decreases.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Peek at the character at the cursor without consuming it.
    fn peek(&self) -> char {
        if self.at_end() {
            '\0'
        } else {
            self.chars[self.cursor]
        }
    }

    /// Consume and return the character at the cursor.
    fn read(&mut self) -> char {
        let ch = self.peek();
        if !self.at_end() {
            self.cursor += 1;
        }
        ch
    }

    /// Get the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        while !self.at_end() && self.peek().is_whitespace() {
            self.read();
        }

        if self.at_end() {
            return Ok(None);
        }

        if self.peek() == '"' {
            self.read_quoted().map(Some)
        } else {
            let lexeme = self.read_bare();
            classify(lexeme).map(Some)
        }
    }

    /// Read a double-quoted string literal. Both quotes are consumed
    /// but excluded from the token text. Quoted text is always a
    /// string token, even when it looks numeric.
    fn read_quoted(&mut self) -> Result<Token, ScanError> {
        if self.read() != '"' {
            return Err(ScanError::MalformedInput(
                "string literal must open with a quote",
            ));
        }
        let mut text = String::new();
        loop {
            if self.at_end() {
                return Err(ScanError::UnterminatedString);
            }
            let ch = self.read();
            if ch == '"' {
                return Ok(Token::String(text));
            }
            text.push(ch);
        }
    }

    /// Read an unquoted lexeme, deciding where it ends even when no
    /// whitespace separates it from the next one (`x=5`, `a+b`).
    ///
    /// A non-empty lexeme ends before the cursor advances when the
    /// character just appended was `+` or `=` (those always stand
    /// alone), or when the upcoming character is `;`, `+`, or `=` (it
    /// belongs to the next lexeme). `-` is not a boundary trigger: it
    /// may prefix a negative number literal.
    fn read_bare(&mut self) -> String {
        let mut lexeme = String::new();
        let mut last = '\0';
        while !self.at_end() && !self.peek().is_whitespace() {
            if !lexeme.is_empty() {
                if last == '+' || last == '=' {
                    break;
                }
                if matches!(self.peek(), ';' | '+' | '=') {
                    break;
                }
            }
            last = self.read();
            lexeme.push(last);
        }
        lexeme
    }
}

/// Classify a raw unquoted lexeme into a typed token.
fn classify(lexeme: String) -> Result<Token, ScanError> {
    let mut chars = lexeme.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return match ch {
            '+' | '-' | '=' | ';' => Ok(Token::Symbol(ch)),
            _ if ch.is_alphabetic() => Ok(Token::Name(lexeme)),
            _ if ch.is_ascii_digit() => Ok(Token::Number(f64::from(ch as u8 - b'0'))),
            _ => Err(ScanError::UnrecognizedCharacter(ch)),
        };
    }

    if is_keyword(&lexeme) {
        return Ok(Token::Name(lexeme));
    }

    // A multi-character lexeme is a number if it parses as one
    // (covering negative literals like `-3.5`); anything else is
    // carried as string-like text rather than rejected.
    match lexeme.parse::<f64>() {
        Ok(value) => Ok(Token::Number(value)),
        Err(_) => Ok(Token::String(lexeme)),
    }
}

/// Tokenize an input string into a vector of tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
