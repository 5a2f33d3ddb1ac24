//! LDAP syntax definitions (RFC 4512 §4.1.5).

use crate::error::{ParseError, ValidationError, ValidationResult};
use crate::schema::oid;
use crate::schema::parser::DefinitionReader;
use crate::schema::types::{
    Definition, DefinitionKind, Extensions, fold, write_extensions, write_qdstring,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension holding a regular expression values of the syntax must match.
pub const X_PATTERN: &str = "X-PATTERN";
/// Extension flagging values that are not human readable.
pub const X_NOT_HUMAN_READABLE: &str = "X-NOT-HUMAN-READABLE";

/// An LDAP syntax, identified solely by its OID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapSyntax {
    pub oid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl LdapSyntax {
    pub fn new(oid: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            description: Some(description.into()),
            extensions: Extensions::new(),
        }
    }

    /// The `X-PATTERN` regular expression, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.extensions.first(X_PATTERN)
    }

    /// False when `X-NOT-HUMAN-READABLE 'TRUE'` is present.
    pub fn is_human_readable(&self) -> bool {
        !self
            .extensions
            .first(X_NOT_HUMAN_READABLE)
            .is_some_and(|flag| flag.eq_ignore_ascii_case("TRUE"))
    }

    /// Check `value` against the `X-PATTERN`, anchored at both ends.
    ///
    /// A syntax without a pattern accepts every value; verification of such
    /// syntaxes belongs to the caller's syntax verifiers.
    pub fn verify(&self, value: &str) -> ValidationResult<bool> {
        match self.pattern() {
            Some(pattern) => Ok(compile(pattern)?.is_match(value)),
            None => Ok(true),
        }
    }
}

fn compile(pattern: &str) -> ValidationResult<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| ValidationError::InvalidPattern {
        pattern: pattern.to_string(),
        details: e.to_string(),
    })
}

impl Definition for LdapSyntax {
    const KIND: DefinitionKind = DefinitionKind::LdapSyntax;

    fn id(&self) -> &str {
        &self.oid
    }

    fn names(&self) -> &[String] {
        &[]
    }

    fn validate(&self) -> ValidationResult<()> {
        oid::check_numeric_oid("OID", &self.oid)?;
        self.extensions.validate()?;
        if let Some(pattern) = self.pattern() {
            compile(pattern)?;
        }
        Ok(())
    }

    /// Syntaxes are found by OID or by description, ignoring case and
    /// whitespace.
    fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        self.oid == term
            || self
                .description
                .as_deref()
                .is_some_and(|desc| fold(desc) == fold(term))
    }
}

impl FromStr for LdapSyntax {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, oid) = DefinitionReader::open(s, DefinitionKind::LdapSyntax)?;
        let mut syntax = LdapSyntax {
            oid,
            ..Default::default()
        };

        while let Some(keyword) = reader.next_keyword()? {
            match keyword.to_ascii_uppercase().as_str() {
                "DESC" => syntax.description = Some(reader.value()?),
                _ => reader.extension(&keyword, &mut syntax.extensions)?,
            }
        }

        Ok(syntax)
    }
}

impl fmt::Display for LdapSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
