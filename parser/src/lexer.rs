//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the evaluation pipeline. It handles
//! whitespace skipping, number parsing, function names, and the named
//! constants pi (or the π symbol) and e.
//!
//! SUPPORTED LEXEMES:
//! - Operators: + - * / ^
//! - Parentheses: ( )
//! - Numbers: digits with an optional fractional part (1, 3.14)
//! - Functions: sin cos tan log ln sqrt
//! - Constants: pi, π, e
//!
//! Constants are resolved to their f64 value while scanning. Doing this at
//! the token level (instead of substituting into the source text first) means
//! constant names can never corrupt adjacent function-name text.

use crate::token::{Function, Operator, Token};
use std::iter::Peekable;
use std::str::Chars;

/// Errors raised while scanning an expression string.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenizeError {
    /// A character or word matching no lexeme. Nothing is dropped silently.
    UnrecognizedSymbol(String),
    /// A numeric literal with a dangling or repeated decimal point.
    MalformedNumber(String),
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenizeError::UnrecognizedSymbol(text) => {
                write!(f, "Tokenize error: unrecognized symbol '{}'", text)
            }
            TokenizeError::MalformedNumber(text) => {
                write!(f, "Tokenize error: malformed number literal '{}'", text)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

pub type TokenizeResult<T> = Result<T, TokenizeError>;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token, or `None` at the end
    /// of input.
    pub fn next_token(&mut self) -> TokenizeResult<Option<Token>> {
        self.skip_whitespace();

        let first = match self.input.next() {
            Some(ch) => ch,
            None => return Ok(None),
        };

        let token = match first {
            '+' => Token::Operator(Operator::Add),
            '-' => Token::Operator(Operator::Subtract),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '^' => Token::Operator(Operator::Power),
            '(' => Token::LParen,
            ')' => Token::RParen,

            // The π glyph is a constant on its own; "pi" goes through the
            // name path below.
            'π' => Token::Number(std::f64::consts::PI),

            ch if ch.is_ascii_digit() => self.read_number(ch)?,

            ch if ch.is_ascii_alphabetic() => self.read_name(ch)?,

            ch => return Err(TokenizeError::UnrecognizedSymbol(ch.to_string())),
        };

        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Reads a numeric literal: digits with an optional fractional part.
    /// A dot must sit between digits; "1." and "1.2.3" are malformed rather
    /// than being split into adjacent tokens.
    fn read_number(&mut self, first_char: char) -> TokenizeResult<Token> {
        let mut number_str = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        if self.input.peek() == Some(&'.') {
            number_str.push('.');
            self.input.next();

            let mut fraction_digits = 0;
            while let Some(&ch) = self.input.peek() {
                if ch.is_ascii_digit() {
                    number_str.push(ch);
                    self.input.next();
                    fraction_digits += 1;
                } else {
                    break;
                }
            }

            if fraction_digits == 0 {
                return Err(TokenizeError::MalformedNumber(number_str));
            }

            // A second dot glued to the literal ("1.2.3") is part of the
            // same malformed literal, not the start of a new token.
            if self.input.peek() == Some(&'.') {
                number_str.push('.');
                return Err(TokenizeError::MalformedNumber(number_str));
            }
        }

        number_str
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| TokenizeError::MalformedNumber(number_str))
    }

    /// Reads a function or constant name.
    fn read_name(&mut self, first_char: char) -> TokenizeResult<Token> {
        let mut name = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_alphabetic() {
                name.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        if let Some(function) = Function::from_name(&name) {
            return Ok(Token::Function(function));
        }

        match name.as_str() {
            "pi" => Ok(Token::Number(std::f64::consts::PI)),
            "e" => Ok(Token::Number(std::f64::consts::E)),
            _ => Err(TokenizeError::UnrecognizedSymbol(name)),
        }
    }
}

/// Convenience function to scan a whole expression string into tokens.
pub fn tokenize(input: &str) -> TokenizeResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
