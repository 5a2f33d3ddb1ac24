//! Name form definitions (RFC 4512 §4.1.7.2).

use super::check_disjoint;
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

/// Attributes that may form the RDN of entries of a structural class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameForm {
    pub oid: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub object_class: Option<String>,
    #[serde(default)]
    pub must: Vec<String>,
    #[serde(default)]
    pub may: Vec<String>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl Definition for NameForm {
    const KIND: DefinitionKind = DefinitionKind::NameForm;

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
        let class = self
            .object_class
            .as_deref()
            .ok_or_else(|| ValidationError::missing_clause("OC"))?;
        oid::check_oid("OC", class)?;
        if self.must.is_empty() {
            return Err(ValidationError::missing_clause("MUST"));
        }
        oid::check_oids("MUST", &self.must)?;
        oid::check_oids("MAY", &self.may)?;
        check_disjoint("MUST", &self.must, "MAY", &self.may)
    }
}

impl FromStr for NameForm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, oid) = DefinitionReader::open(s, DefinitionKind::NameForm)?;
        let mut form = NameForm {
            oid,
            ..Default::default()
        };

        while let Some(keyword) = reader.next_keyword()? {
            match keyword.to_ascii_uppercase().as_str() {
                "NAME" => form.names = reader.list()?,
                "DESC" => form.description = Some(reader.value()?),
                "OBSOLETE" => form.obsolete = true,
                "OC" => form.object_class = Some(reader.value()?),
                "MUST" => form.must = reader.list()?,
                "MAY" => form.may = reader.list()?,
                _ => reader.extension(&keyword, &mut form.extensions)?,
            }
        }

        Ok(form)
    }
}

impl fmt::Display for NameForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        write_qdescrs(f, "NAME", &self.names)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_flag(f, "OBSOLETE", self.obsolete)?;
        write_oid(f, "OC", self.object_class.as_deref())?;
        write_oids(f, "MUST", &self.must)?;
        write_oids(f, "MAY", &self.may)?;
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
