//! Keyword-driven clause reader shared by the per-kind parsers.
//!
//! Each definition kind implements `FromStr` on top of [`DefinitionReader`]:
//! open the definition, then loop over [`DefinitionReader::next_keyword`]
//! and read the value shape the keyword calls for. The reader knows the
//! grammar's three value shapes (single value, list, flag) and how vendor
//! `X-` extensions are stored; the kinds only know their own keywords.

use super::tokenizer::{Token, Tokenizer};
use super::types::{DefinitionKind, Extensions};
use crate::error::{ParseError, ParseResult};
use log::trace;

/// Cursor over the body of one definition.
#[derive(Debug)]
pub(crate) struct DefinitionReader {
    tokens: Tokenizer,
    kind: DefinitionKind,
}

impl DefinitionReader {
    /// Strip an optional kind label, tokenize, and consume `(` plus the
    /// identifier, which is returned alongside the reader.
    pub(crate) fn open(input: &str, kind: DefinitionKind) -> ParseResult<(Self, String)> {
        let body = strip_label(input, kind)?;
        let mut tokens = Tokenizer::new(body)?;
        trace!("{} definition scanned into {} tokens", kind, tokens.len());

        match tokens.advance() {
            Some(Token::Open) => {}
            Some(other) => {
                return Err(ParseError::ExpectedOpenParen {
                    found: other.to_string(),
                });
            }
            None => return Err(ParseError::UnexpectedEnd),
        }

        let id = match tokens.advance() {
            Some(Token::Bare(id)) | Some(Token::Quoted(id)) => id,
            Some(Token::Open) | Some(Token::Close) => return Err(ParseError::MissingIdentifier),
            None => return Err(ParseError::UnexpectedEnd),
        };

        Ok((Self { tokens, kind }, id))
    }

    /// Next clause keyword, or `None` once the closing paren of the
    /// definition has been consumed and nothing follows it.
    pub(crate) fn next_keyword(&mut self) -> ParseResult<Option<String>> {
        match self.tokens.advance() {
            None => Err(ParseError::UnbalancedParens),
            Some(Token::Close) if self.tokens.is_exhausted() => Ok(None),
            Some(Token::Close) | Some(Token::Open) => Err(ParseError::UnbalancedParens),
            Some(Token::Bare(keyword)) => Ok(Some(keyword)),
            Some(Token::Quoted(text)) => Err(ParseError::UnknownKeyword {
                kind: self.kind,
                keyword: format!("'{}'", text),
            }),
        }
    }

    /// Single value following a keyword, quoted or bare.
    pub(crate) fn value(&mut self) -> ParseResult<String> {
        self.tokens
            .advance_expecting()?
            .into_value()
            .ok_or(ParseError::UnbalancedParens)
    }

    /// One value, or a parenthesised list with `$` separators skipped.
    pub(crate) fn list(&mut self) -> ParseResult<Vec<String>> {
        let values = match self.tokens.advance_expecting()? {
            Token::Open => {
                let mut values = Vec::new();
                loop {
                    match self.tokens.advance() {
                        Some(Token::Close) => break,
                        Some(Token::Quoted(value)) => values.push(value),
                        Some(Token::Bare(word)) => values.extend(split_dollar(&word)),
                        Some(Token::Open) | None => return Err(ParseError::UnbalancedParens),
                    }
                }
                values
            }
            Token::Close => return Err(ParseError::UnbalancedParens),
            Token::Quoted(value) => vec![value],
            Token::Bare(word) => split_dollar(&word),
        };
        if values.is_empty() {
            return Err(ParseError::EmptyList { kind: self.kind });
        }
        Ok(values)
    }

    /// Store an `X-` clause, or reject the keyword as unknown.
    pub(crate) fn extension(&mut self, keyword: &str, extensions: &mut Extensions) -> ParseResult<()> {
        if is_extension_keyword(keyword) {
            let values = self.list()?;
            extensions.insert(keyword, values);
            Ok(())
        } else {
            Err(self.unknown(keyword))
        }
    }

    pub(crate) fn unknown(&self, keyword: &str) -> ParseError {
        ParseError::UnknownKeyword {
            kind: self.kind,
            keyword: keyword.to_string(),
        }
    }
}

fn is_extension_keyword(keyword: &str) -> bool {
    keyword.len() > 2
        && keyword
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-"))
}

fn split_dollar(word: &str) -> Vec<String> {
    word.split('$')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_label(input: &str, kind: DefinitionKind) -> ParseResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::UnexpectedEnd);
    }
    if trimmed.starts_with('(') {
        return Ok(trimmed);
    }

    let Some(open) = trimmed.find('(') else {
        return Err(ParseError::ExpectedOpenParen {
            found: trimmed.split_whitespace().next().unwrap_or_default().to_string(),
        });
    };
    let label = trimmed[..open].trim();
    match DefinitionKind::from_label(label) {
        Some(found) if found == kind => Ok(&trimmed[open..]),
        _ => Err(ParseError::UnknownLabel {
            label: label.to_string(),
        }),
    }
}
