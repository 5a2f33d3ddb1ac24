//! Matching rule use definitions (RFC 4512 §4.1.4).
//!
//! The registry derives these from attribute type registrations; they are
//! parseable so that a published subschema can be read back.

use crate::error::{ParseError, ValidationError, ValidationResult};
use crate::schema::oid;
use crate::schema::parser::DefinitionReader;
use crate::schema::types::{
    Definition, DefinitionKind, Extensions, contains_ignore_case, write_extensions, write_flag,
    write_oids, write_qdescrs, write_qdstring,
};
use super::MatchingRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute types a matching rule applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingRuleUse {
    pub oid: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub applies: Vec<String>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl MatchingRuleUse {
    /// Empty use entry mirroring the identity of `rule`.
    pub fn for_rule(rule: &MatchingRule) -> Self {
        Self {
            oid: rule.oid.clone(),
            names: rule.names.clone(),
            description: rule.description.clone(),
            obsolete: rule.obsolete,
            applies: Vec::new(),
            extensions: Extensions::new(),
        }
    }

    /// Append `attribute` unless already listed. Returns whether it was added.
    pub fn add_applies(&mut self, attribute: &str) -> bool {
        if contains_ignore_case(&self.applies, attribute) {
            false
        } else {
            self.applies.push(attribute.to_string());
            true
        }
    }
}

impl Definition for MatchingRuleUse {
    const KIND: DefinitionKind = DefinitionKind::MatchingRuleUse;

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
        if self.applies.is_empty() {
            return Err(ValidationError::missing_clause("APPLIES"));
        }
        oid::check_oids("APPLIES", &self.applies)
    }
}

impl FromStr for MatchingRuleUse {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, oid) = DefinitionReader::open(s, DefinitionKind::MatchingRuleUse)?;
        let mut rule_use = MatchingRuleUse {
            oid,
            ..Default::default()
        };

        while let Some(keyword) = reader.next_keyword()? {
            match keyword.to_ascii_uppercase().as_str() {
                "NAME" => rule_use.names = reader.list()?,
                "DESC" => rule_use.description = Some(reader.value()?),
                "OBSOLETE" => rule_use.obsolete = true,
                "APPLIES" => rule_use.applies = reader.list()?,
                _ => reader.extension(&keyword, &mut rule_use.extensions)?,
            }
        }

        Ok(rule_use)
    }
}

impl fmt::Display for MatchingRuleUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        write_qdescrs(f, "NAME", &self.names)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_flag(f, "OBSOLETE", self.obsolete)?;
        write_oids(f, "APPLIES", &self.applies)?;
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
