//! Tokenizer for the schema definition language.
//!
//! Definition text is scanned eagerly into parens, quoted strings and bare
//! words. Whitespace only separates tokens. Inside a quoted string `\'`
//! yields a quote and `\\` a backslash; any other backslash is kept as is.

use crate::error::{ParseError, ParseResult};
use std::fmt;

/// A single atomic token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    /// Single-quoted string with the quotes removed and escapes resolved.
    Quoted(String),
    /// Maximal run of non-whitespace, non-paren characters.
    Bare(String),
}

impl Token {
    /// Text of a value token; `None` for parens.
    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Quoted(s) | Token::Bare(s) => Some(s),
            Token::Open | Token::Close => None,
        }
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Token::Quoted(s) | Token::Bare(s) => Some(s),
            Token::Open | Token::Close => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Quoted(s) => write!(f, "'{}'", s),
            Token::Bare(s) => f.write_str(s),
        }
    }
}

/// Token stream with one token of lookahead.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    position: usize,
}

impl Tokenizer {
    /// Scan `input` into tokens.
    pub fn new(input: &str) -> ParseResult<Self> {
        Ok(Self {
            tokens: scan(input)?,
            position: 0,
        })
    }

    /// Advance and return the current token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Advance and return the token that must follow a keyword.
    pub fn advance_expecting(&mut self) -> ParseResult<Token> {
        self.advance().ok_or(ParseError::UnexpectedEnd)
    }

    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Whether every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.advance()
    }
}

fn scan(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::Open);
            }
            ')' => {
                chars.next();
                tokens.push(Token::Close);
            }
            '\'' => {
                chars.next();
                let mut value = String::new();
                let mut terminated = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => match chars.peek() {
                            Some(&next) if next == '\'' || next == '\\' => {
                                value.push(next);
                                chars.next();
                            }
                            _ => value.push('\\'),
                        },
                        '\'' => {
                            terminated = true;
                            break;
                        }
                        other => value.push(other),
                    }
                }
                if !terminated {
                    return Err(ParseError::UnterminatedQuote);
                }
                tokens.push(Token::Quoted(value));
            }
            _ => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == '(' || c == ')' {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(Token::Bare(word));
            }
        }
    }

    Ok(tokens)
}
