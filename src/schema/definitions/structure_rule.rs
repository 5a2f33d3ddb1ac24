//! DIT structure rule definitions (RFC 4512 §4.1.7.1).

use crate::error::{ParseError, ValidationError, ValidationResult};
use crate::schema::oid;
use crate::schema::parser::DefinitionReader;
use crate::schema::types::{
    Definition, DefinitionKind, Extensions, write_extensions, write_flag, write_oid, write_oids,
    write_qdescrs, write_qdstring,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structure rule, identified by an integer rule ID rather than an OID.
///
/// A rule may name itself among its superior rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DitStructureRule {
    pub rule_id: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub super_rules: Vec<String>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl DitStructureRule {
    /// Whether the rule lists itself as a superior.
    pub fn is_self_superior(&self) -> bool {
        self.super_rules.iter().any(|id| *id == self.rule_id)
    }
}

impl Definition for DitStructureRule {
    const KIND: DefinitionKind = DefinitionKind::DitStructureRule;

    fn id(&self) -> &str {
        &self.rule_id
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn validate(&self) -> ValidationResult<()> {
        oid::check_rule_id(&self.rule_id)?;
        self.extensions.validate()?;
        oid::check_names(&self.names)?;
        let form = self
            .form
            .as_deref()
            .ok_or_else(|| ValidationError::missing_clause("FORM"))?;
        oid::check_oid("FORM", form)?;
        self.super_rules
            .iter()
            .try_for_each(|id| oid::check_rule_id(id))
    }
}

impl FromStr for DitStructureRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, rule_id) = DefinitionReader::open(s, DefinitionKind::DitStructureRule)?;
        let mut rule = DitStructureRule {
            rule_id,
            ..Default::default()
        };

        while let Some(keyword) = reader.next_keyword()? {
            match keyword.to_ascii_uppercase().as_str() {
                "NAME" => rule.names = reader.list()?,
                "DESC" => rule.description = Some(reader.value()?),
                "OBSOLETE" => rule.obsolete = true,
                "FORM" => rule.form = Some(reader.value()?),
                "SUP" => rule.super_rules = reader.list()?,
                _ => reader.extension(&keyword, &mut rule.extensions)?,
            }
        }

        Ok(rule)
    }
}

impl fmt::Display for DitStructureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.rule_id)?;
        write_qdescrs(f, "NAME", &self.names)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_flag(f, "OBSOLETE", self.obsolete)?;
        write_oid(f, "FORM", self.form.as_deref())?;
        write_oids(f, "SUP", &self.super_rules)?;
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
