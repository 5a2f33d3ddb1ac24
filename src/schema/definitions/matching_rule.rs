//! Matching rule definitions (RFC 4512 §4.1.3).

use crate::error::{ParseError, ValidationError, ValidationResult};
use crate::schema::oid;
use crate::schema::parser::DefinitionReader;
use crate::schema::types::{
    Definition, DefinitionKind, Extensions, write_extensions, write_flag, write_oid,
    write_qdescrs, write_qdstring,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A matching rule, bound to exactly one syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingRule {
    pub oid: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub syntax: Option<String>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl MatchingRule {
    pub fn new(oid: impl Into<String>, name: impl Into<String>, syntax: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            names: vec![name.into()],
            syntax: Some(syntax.into()),
            ..Default::default()
        }
    }
}

impl Definition for MatchingRule {
    const KIND: DefinitionKind = DefinitionKind::MatchingRule;

    fn id(&self) -> &str {
        &self.oid
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn validate(&self) -> ValidationResult<()> {
        oid::check_numeric_oid("OID", &self.oid)?;
        self.extensions.validate()?;
        oid::check_names(&self.names)?;
        let syntax = self
            .syntax
            .as_deref()
            .ok_or_else(|| ValidationError::missing_clause("SYNTAX"))?;
        oid::check_numeric_oid("SYNTAX", syntax)
    }
}

impl FromStr for MatchingRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, oid) = DefinitionReader::open(s, DefinitionKind::MatchingRule)?;
        let mut rule = MatchingRule {
            oid,
            ..Default::default()
        };

        while let Some(keyword) = reader.next_keyword()? {
            match keyword.to_ascii_uppercase().as_str() {
                "NAME" => rule.names = reader.list()?,
                "DESC" => rule.description = Some(reader.value()?),
                "OBSOLETE" => rule.obsolete = true,
                "SYNTAX" => rule.syntax = Some(reader.value()?),
                _ => reader.extension(&keyword, &mut rule.extensions)?,
            }
        }

        Ok(rule)
    }
}

impl fmt::Display for MatchingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        write_qdescrs(f, "NAME", &self.names)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_flag(f, "OBSOLETE", self.obsolete)?;
        write_oid(f, "SYNTAX", self.syntax.as_deref())?;
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
