//! Attribute type definitions (RFC 4512 §4.1.2).

use crate::error::{ParseError, ParseResult, ValidationError, ValidationResult};
use crate::schema::oid;
use crate::schema::parser::DefinitionReader;
use crate::schema::types::{
    Definition, DefinitionKind, Extensions, Usage, write_extensions, write_flag, write_oid,
    write_qdescrs, write_qdstring,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An attribute type.
///
/// `super_type` forms a single-inheritance chain; the matching rules and
/// syntax, when absent, are inherited along it (see
/// [`Subschema::effective_syntax`](crate::schema::Subschema::effective_syntax)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    pub oid: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    /// Minimum upper bound from a `SYNTAX oid{N}` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_upper_bound: Option<u64>,
    #[serde(default)]
    pub single_value: bool,
    #[serde(default)]
    pub collective: bool,
    #[serde(default)]
    pub no_user_modification: bool,
    #[serde(default)]
    pub usage: Usage,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl AttributeType {
    pub fn new(oid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            names: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    pub fn with_super_type(mut self, super_type: impl Into<String>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }

    pub fn with_equality(mut self, rule: impl Into<String>) -> Self {
        self.equality = Some(rule.into());
        self
    }

    /// Matching rule references present on this definition, by clause.
    pub fn matching_rules(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("EQUALITY", self.equality.as_deref()),
            ("ORDERING", self.ordering.as_deref()),
            ("SUBSTR", self.substring.as_deref()),
        ]
        .into_iter()
        .filter_map(|(clause, rule)| rule.map(|rule| (clause, rule)))
    }
}

impl Definition for AttributeType {
    const KIND: DefinitionKind = DefinitionKind::AttributeType;

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

        if let Some(super_type) = &self.super_type {
            oid::check_oid("SUP", super_type)?;
        }
        for (clause, rule) in self.matching_rules() {
            oid::check_oid(clause, rule)?;
        }
        if let Some(syntax) = &self.syntax {
            oid::check_numeric_oid("SYNTAX", syntax)?;
        }
        if self.super_type.is_none() && self.syntax.is_none() {
            return Err(ValidationError::missing_clause("SUP or SYNTAX"));
        }

        if self.single_value && self.collective {
            return Err(ValidationError::ConflictingFlags {
                first: "SINGLE-VALUE".to_string(),
                second: "COLLECTIVE".to_string(),
            });
        }
        if self.collective && self.usage.is_operational() {
            return Err(ValidationError::InvalidUsage {
                field: "COLLECTIVE".to_string(),
                expected: Usage::UserApplications.to_string(),
                actual: self.usage.to_string(),
            });
        }
        if self.no_user_modification && !self.usage.is_operational() {
            return Err(ValidationError::InvalidUsage {
                field: "NO-USER-MODIFICATION".to_string(),
                expected: "an operational".to_string(),
                actual: self.usage.to_string(),
            });
        }

        Ok(())
    }
}

/// Split `oid{N}` into the OID and its minimum upper bound.
fn split_syntax(value: &str) -> ParseResult<(String, Option<u64>)> {
    let Some((syntax, rest)) = value.split_once('{') else {
        return Ok((value.to_string(), None));
    };
    let bound = rest
        .strip_suffix('}')
        .and_then(|digits| digits.parse::<u64>().ok())
        .ok_or_else(|| ParseError::InvalidBound {
            value: value.to_string(),
        })?;
    Ok((syntax.to_string(), Some(bound)))
}

fn conflicting(first: &str, second: &str) -> ParseError {
    ParseError::ConflictingFlags {
        first: first.to_string(),
        second: second.to_string(),
    }
}

impl FromStr for AttributeType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, oid) = DefinitionReader::open(s, DefinitionKind::AttributeType)?;
        let mut attr = AttributeType {
            oid,
            ..Default::default()
        };

        while let Some(keyword) = reader.next_keyword()? {
            match keyword.to_ascii_uppercase().as_str() {
                "NAME" => attr.names = reader.list()?,
                "DESC" => attr.description = Some(reader.value()?),
                "OBSOLETE" => attr.obsolete = true,
                "SUP" => attr.super_type = Some(reader.value()?),
                "EQUALITY" => attr.equality = Some(reader.value()?),
                "ORDERING" => attr.ordering = Some(reader.value()?),
                "SUBSTR" => attr.substring = Some(reader.value()?),
                "SYNTAX" => {
                    let (syntax, bound) = split_syntax(&reader.value()?)?;
                    attr.syntax = Some(syntax);
                    attr.min_upper_bound = bound;
                }
                "SINGLE-VALUE" => {
                    if attr.collective {
                        return Err(conflicting("COLLECTIVE", "SINGLE-VALUE"));
                    }
                    attr.single_value = true;
                }
                "COLLECTIVE" => {
                    if attr.single_value {
                        return Err(conflicting("SINGLE-VALUE", "COLLECTIVE"));
                    }
                    attr.collective = true;
                }
                "NO-USER-MODIFICATION" => attr.no_user_modification = true,
                "USAGE" => attr.usage = reader.value()?.parse()?,
                _ => reader.extension(&keyword, &mut attr.extensions)?,
            }
        }

        Ok(attr)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        write_qdescrs(f, "NAME", &self.names)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_flag(f, "OBSOLETE", self.obsolete)?;
        write_oid(f, "SUP", self.super_type.as_deref())?;
        write_oid(f, "EQUALITY", self.equality.as_deref())?;
        write_oid(f, "ORDERING", self.ordering.as_deref())?;
        write_oid(f, "SUBSTR", self.substring.as_deref())?;
        if let Some(syntax) = &self.syntax {
            write!(f, " SYNTAX {}", syntax)?;
            if let Some(bound) = self.min_upper_bound {
                write!(f, "{{{}}}", bound)?;
            }
        }
        write_flag(f, "SINGLE-VALUE", self.single_value)?;
        write_flag(f, "COLLECTIVE", self.collective)?;
        write_flag(f, "NO-USER-MODIFICATION", self.no_user_modification)?;
        if self.usage != Usage::UserApplications {
            write!(f, " USAGE {}", self.usage)?;
        }
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
