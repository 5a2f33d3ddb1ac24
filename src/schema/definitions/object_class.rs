//! Object class definitions (RFC 4512 §4.1.1).

use crate::error::{ParseError, ValidationResult};
use crate::schema::oid;
use crate::schema::parser::DefinitionReader;
use crate::schema::types::{
    Definition, DefinitionKind, Extensions, ObjectClassKind, write_extensions, write_flag,
    write_oids, write_qdescrs, write_qdstring,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An object class with multiple inheritance through `super_classes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectClass {
    pub oid: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub super_classes: Vec<String>,
    #[serde(default)]
    pub kind: ObjectClassKind,
    #[serde(default)]
    pub must: Vec<String>,
    #[serde(default)]
    pub may: Vec<String>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl ObjectClass {
    pub fn new(oid: impl Into<String>, name: impl Into<String>, kind: ObjectClassKind) -> Self {
        Self {
            oid: oid.into(),
            names: vec![name.into()],
            kind,
            ..Default::default()
        }
    }

    pub fn with_super(mut self, class: impl Into<String>) -> Self {
        self.super_classes.push(class.into());
        self
    }

    pub fn with_must(mut self, attribute: impl Into<String>) -> Self {
        self.must.push(attribute.into());
        self
    }

    pub fn with_may(mut self, attribute: impl Into<String>) -> Self {
        self.may.push(attribute.into());
        self
    }

    pub fn is_structural(&self) -> bool {
        self.kind == ObjectClassKind::Structural
    }

    pub fn is_auxiliary(&self) -> bool {
        self.kind == ObjectClassKind::Auxiliary
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == ObjectClassKind::Abstract
    }
}

impl Definition for ObjectClass {
    const KIND: DefinitionKind = DefinitionKind::ObjectClass;

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
        oid::check_oids("SUP", &self.super_classes)?;
        oid::check_oids("MUST", &self.must)?;
        oid::check_oids("MAY", &self.may)
    }
}

impl FromStr for ObjectClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mut reader, oid) = DefinitionReader::open(s, DefinitionKind::ObjectClass)?;
        let mut class = ObjectClass {
            oid,
            ..Default::default()
        };
        let mut declared_kind: Option<ObjectClassKind> = None;

        while let Some(keyword) = reader.next_keyword()? {
            let upper = keyword.to_ascii_uppercase();
            let kind = match upper.as_str() {
                "STRUCTURAL" => Some(ObjectClassKind::Structural),
                "AUXILIARY" => Some(ObjectClassKind::Auxiliary),
                "ABSTRACT" => Some(ObjectClassKind::Abstract),
                _ => None,
            };
            if let Some(kind) = kind {
                if let Some(previous) = declared_kind.filter(|previous| *previous != kind) {
                    return Err(ParseError::ConflictingFlags {
                        first: previous.to_string(),
                        second: kind.to_string(),
                    });
                }
                declared_kind = Some(kind);
                continue;
            }

            match upper.as_str() {
                "NAME" => class.names = reader.list()?,
                "DESC" => class.description = Some(reader.value()?),
                "OBSOLETE" => class.obsolete = true,
                "SUP" => class.super_classes = reader.list()?,
                "MUST" => class.must = reader.list()?,
                "MAY" => class.may = reader.list()?,
                _ => reader.extension(&keyword, &mut class.extensions)?,
            }
        }

        class.kind = declared_kind.unwrap_or_default();
        Ok(class)
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        write_qdescrs(f, "NAME", &self.names)?;
        write_qdstring(f, "DESC", self.description.as_deref())?;
        write_flag(f, "OBSOLETE", self.obsolete)?;
        write_oids(f, "SUP", &self.super_classes)?;
        write!(f, " {}", self.kind)?;
        write_oids(f, "MUST", &self.must)?;
        write_oids(f, "MAY", &self.may)?;
        write_extensions(f, &self.extensions)?;
        f.write_str(" )")
    }
}
