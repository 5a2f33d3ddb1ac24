//! Core schema type definitions shared by every definition kind.
//!
//! This module contains the pieces common to all eight kinds of schema
//! definition: the kind discriminator, vendor extensions, the object class
//! kind and attribute usage enumerations, the [`Definition`] trait the
//! registry is generic over, and the helpers used to write the canonical
//! textual form.

use crate::error::{ParseError, ValidationError, ValidationResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight kinds of definition a subschema holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefinitionKind {
    LdapSyntax,
    MatchingRule,
    AttributeType,
    MatchingRuleUse,
    ObjectClass,
    DitContentRule,
    NameForm,
    DitStructureRule,
}

impl DefinitionKind {
    /// Kinds a caller may register directly, in dependency order.
    pub const REGISTRABLE: [DefinitionKind; 7] = [
        DefinitionKind::LdapSyntax,
        DefinitionKind::MatchingRule,
        DefinitionKind::AttributeType,
        DefinitionKind::ObjectClass,
        DefinitionKind::DitContentRule,
        DefinitionKind::NameForm,
        DefinitionKind::DitStructureRule,
    ];

    /// Singular and plural label accepted in front of definition text.
    pub fn labels(&self) -> [&'static str; 2] {
        match self {
            Self::LdapSyntax => ["ldapsyntax", "ldapsyntaxes"],
            Self::MatchingRule => ["matchingrule", "matchingrules"],
            Self::AttributeType => ["attributetype", "attributetypes"],
            Self::MatchingRuleUse => ["matchingruleuse", "matchingruleuses"],
            Self::ObjectClass => ["objectclass", "objectclasses"],
            Self::DitContentRule => ["ditcontentrule", "ditcontentrules"],
            Self::NameForm => ["nameform", "nameforms"],
            Self::DitStructureRule => ["ditstructurerule", "ditstructurerules"],
        }
    }

    /// Resolve a definition label (case-insensitive, optional trailing ':').
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().trim_end_matches(':').to_ascii_lowercase();
        [
            Self::LdapSyntax,
            Self::MatchingRule,
            Self::AttributeType,
            Self::MatchingRuleUse,
            Self::ObjectClass,
            Self::DitContentRule,
            Self::NameForm,
            Self::DitStructureRule,
        ]
        .into_iter()
        .find(|kind| kind.labels().contains(&label.as_str()))
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LdapSyntax => "LDAPSyntax",
            Self::MatchingRule => "MatchingRule",
            Self::AttributeType => "AttributeType",
            Self::MatchingRuleUse => "MatchingRuleUse",
            Self::ObjectClass => "ObjectClass",
            Self::DitContentRule => "DITContentRule",
            Self::NameForm => "NameForm",
            Self::DitStructureRule => "DITStructureRule",
        };
        f.write_str(name)
    }
}

/// Behaviour shared by every schema definition.
///
/// The registry is generic over this trait: each collection holds one
/// implementor, lookups go through [`Definition::matches`], and
/// registration starts with [`Definition::validate`].
pub trait Definition:
    Clone + fmt::Debug + fmt::Display + FromStr<Err = ParseError> + Send + Sync
{
    /// Kind discriminator for error reporting.
    const KIND: DefinitionKind;

    /// Primary identifier: numeric OID, or rule ID for structure rules.
    fn id(&self) -> &str;

    /// Name aliases in declaration order.
    fn names(&self) -> &[String];

    /// Local syntactic validity, independent of registry state.
    fn validate(&self) -> ValidationResult<()>;

    /// First name, or the identifier when the definition is nameless.
    fn principal_name(&self) -> &str {
        self.names().first().map(String::as_str).unwrap_or(self.id())
    }

    /// Whether `term` identifies this definition.
    ///
    /// Matches the identifier exactly or any name case-insensitively.
    fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        self.id() == term || self.names().iter().any(|n| n.eq_ignore_ascii_case(term))
    }
}

/// Role of an object class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectClassKind {
    #[default]
    Structural = 0,
    Auxiliary = 1,
    Abstract = 2,
}

impl fmt::Display for ObjectClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Structural => "STRUCTURAL",
            Self::Auxiliary => "AUXILIARY",
            Self::Abstract => "ABSTRACT",
        })
    }
}

/// Application of an attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Usage {
    #[default]
    UserApplications,
    DirectoryOperation,
    DistributedOperation,
    #[serde(rename = "dSAOperation")]
    DsaOperation,
}

impl Usage {
    /// Whether this usage denotes an operational attribute.
    pub fn is_operational(&self) -> bool {
        !matches!(self, Self::UserApplications)
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UserApplications => "userApplications",
            Self::DirectoryOperation => "directoryOperation",
            Self::DistributedOperation => "distributedOperation",
            Self::DsaOperation => "dSAOperation",
        })
    }
}

impl FromStr for Usage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "userapplications" => Ok(Self::UserApplications),
            "directoryoperation" => Ok(Self::DirectoryOperation),
            "distributedoperation" => Ok(Self::DistributedOperation),
            "dsaoperation" => Ok(Self::DsaOperation),
            _ => Err(ParseError::InvalidValue {
                clause: "USAGE".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Vendor `X-` extensions, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(IndexMap<String, Vec<String>>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an extension; the keyword is stored upper-cased.
    pub fn insert(&mut self, keyword: &str, values: Vec<String>) {
        self.0.insert(keyword.to_ascii_uppercase(), values);
    }

    /// Values of an extension, looked up case-insensitively.
    pub fn get(&self, keyword: &str) -> Option<&[String]> {
        self.0
            .get(keyword.to_ascii_uppercase().as_str())
            .map(Vec::as_slice)
    }

    /// First value of an extension.
    pub fn first(&self, keyword: &str) -> Option<&str> {
        self.get(keyword)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every extension carries at least one value.
    pub fn validate(&self) -> ValidationResult<()> {
        match self.iter().find(|(_, values)| values.is_empty()) {
            Some((keyword, _)) => Err(ValidationError::EmptyExtension {
                keyword: keyword.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Case- and whitespace-insensitive form used for fuzzy comparisons.
pub(crate) fn fold(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `list` contains `value`, ignoring ASCII case.
pub(crate) fn contains_ignore_case(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(value))
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// ` KEYWORD 'a'` or ` KEYWORD ( 'a' 'b' )`; nothing when `values` is empty.
pub(crate) fn write_qdescrs(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    values: &[String],
) -> fmt::Result {
    match values {
        [] => Ok(()),
        [single] => write!(f, " {} '{}'", keyword, escape(single)),
        many => {
            write!(f, " {} (", keyword)?;
            for value in many {
                write!(f, " '{}'", escape(value))?;
            }
            f.write_str(" )")
        }
    }
}

/// ` KEYWORD 'text'`; nothing when `value` is `None`.
pub(crate) fn write_qdstring(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    value: Option<&str>,
) -> fmt::Result {
    match value {
        Some(value) => write!(f, " {} '{}'", keyword, escape(value)),
        None => Ok(()),
    }
}

/// ` KEYWORD oid`; nothing when `value` is `None`.
pub(crate) fn write_oid(f: &mut fmt::Formatter<'_>, keyword: &str, value: Option<&str>) -> fmt::Result {
    match value {
        Some(value) => write!(f, " {} {}", keyword, value),
        None => Ok(()),
    }
}

/// ` KEYWORD a` or ` KEYWORD ( a $ b )`; nothing when `values` is empty.
pub(crate) fn write_oids(f: &mut fmt::Formatter<'_>, keyword: &str, values: &[String]) -> fmt::Result {
    match values {
        [] => Ok(()),
        [single] => write!(f, " {} {}", keyword, single),
        many => write!(f, " {} ( {} )", keyword, many.join(" $ ")),
    }
}

pub(crate) fn write_flag(f: &mut fmt::Formatter<'_>, keyword: &str, set: bool) -> fmt::Result {
    if set {
        write!(f, " {}", keyword)
    } else {
        Ok(())
    }
}

pub(crate) fn write_extensions(f: &mut fmt::Formatter<'_>, extensions: &Extensions) -> fmt::Result {
    for (keyword, values) in extensions.iter() {
        write_qdescrs(f, keyword, values)?;
    }
    Ok(())
}
