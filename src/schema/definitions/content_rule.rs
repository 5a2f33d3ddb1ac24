//! DIT content rule definitions (RFC 4512 §4.1.6).

use super::check_disjoint;
use crate::error::{ParseError, ValidationResult};
use crate::schema::oid;
use crate::schema::parser::DefinitionReader;
use crate::schema::types::{
    Definition, DefinitionKind, Extensions, write_extensions, write_flag, write_oids,
    write_qdescrs, write_qdstring,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content permitted in entries of one structural object class.
///
/// The identifier is the OID of the governed structural class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DitContentRule {
    pub oid: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub aux: Vec<String>,
    #[serde(default)]
    pub must: Vec<String>,
    #[serde(default)]
    pub may: Vec<String>,
    #[serde(default)]
    pub not: Vec<String>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl Definition for DitContentRule {
    const KIND: DefinitionKind = DefinitionKind::DitContentRule;

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
        oid::check_oids("AUX", &self.aux)?;
        oid::check_oids("MUST", &self.must)?;
        oid::check_oids("MAY", &self.may)?;
        oid::check_oids("NOT", &self.not)?;
        check_disjoint("NOT", &self.not, "MUST", &self.must)?;
        check_disjoint("NOT", &self.not, "MAY", &self.may)
    }
}

impl FromStr for DitContentRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, oid) = DefinitionReader::open(s, DefinitionKind::DitContentRule)?;
        let mut rule = DitContentRule {
            oid,
            ..Default::default()
        };

        while let Some(keyword) = reader.next_keyword()? {
            match keyword.to_ascii_uppercase().as_str() {
                "NAME" => rule.names = reader.list()?,
                "DESC" => rule.description = Some(reader.value()?),
                "OBSOLETE" => rule.obsolete = true,
                "AUX" => rule.aux = reader.list()?,
                "MUST" => rule.must = reader.list()?,
                "MAY" => rule.may = reader.list()?,
                "NOT" => rule.not = reader.list()?,
                _ => reader.extension(&keyword, &mut rule.extensions)?,
            }
        }

        Ok(rule)
    }
}

impl fmt::Display for DitContentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        write_qdescrs(f, "NAME", &self.names)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_flag(f, "OBSOLETE", self.obsolete)?;
        write_oids(f, "AUX", &self.aux)?;
        write_oids(f, "MUST", &self.must)?;
        write_oids(f, "MAY", &self.may)?;
        write_oids(f, "NOT", &self.not)?;
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
