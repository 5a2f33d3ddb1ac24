//! Validation of directory entries against the accumulated schema.
//!
//! An entry is checked for a known set of object classes with a single
//! structural chain, auxiliary classes allowed by the DIT content rule,
//! present required attributes, permitted attributes, single-valued
//! attributes and values that satisfy their syntax pattern.

use super::definitions::{AttributeType, ObjectClass};
use super::registry::SchemaRegistry;
use super::subschema::Subschema;
use super::types::Definition;
use crate::error::{ValidationError, ValidationResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const OBJECT_CLASS: &str = "objectClass";
const EXTENSIBLE_OBJECT: &str = "1.3.6.1.4.1.1466.101.120.111";

/// A directory entry: a DN and its attribute values.
///
/// Attribute descriptions are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub dn: String,
    pub attributes: IndexMap<String, Vec<String>>,
}

impl Entry {
    pub fn new(dn: impl Into<String>) -> Self {
        Self {
            dn: dn.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add values to an attribute, merging with an existing description
    /// that differs only in case.
    pub fn with_attribute<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = self
            .attributes
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_string());
        self.attributes
            .entry(key)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    pub fn object_classes(&self) -> &[String] {
        self.get(OBJECT_CLASS).unwrap_or_default()
    }
}

impl SchemaRegistry {
    /// Validate `entry` against the current schema.
    pub fn validate_entry(&self, entry: &Entry) -> ValidationResult<()> {
        self.read().validate_entry(entry)
    }
}

impl Subschema {
    /// Validate `entry` against this schema.
    pub fn validate_entry(&self, entry: &Entry) -> ValidationResult<()> {
        let classes = self.entry_classes(entry)?;
        let structural = self.structural_class(entry, &classes)?;
        let content_rule = self.dit_content_rules().iter().find(|rule| rule.oid == structural.oid);

        if let Some(rule) = content_rule {
            for class in classes.iter().filter(|class| class.is_auxiliary()) {
                if !rule.aux.iter().any(|term| class.matches(term)) {
                    return Err(ValidationError::AuxiliaryNotPermitted {
                        dn: entry.dn.clone(),
                        class: class.principal_name().to_string(),
                    });
                }
            }
        }

        let mut required: Vec<&AttributeType> = Vec::new();
        let mut allowed: Vec<&AttributeType> = Vec::new();
        for class in &classes {
            required.extend(self.all_must(class));
            allowed.extend(self.all_may(class));
        }
        let mut precluded: Vec<&AttributeType> = Vec::new();
        if let Some(rule) = content_rule {
            required.extend(rule.must.iter().filter_map(|t| self.attribute_types().get(t)));
            allowed.extend(rule.may.iter().filter_map(|t| self.attribute_types().get(t)));
            precluded.extend(rule.not.iter().filter_map(|t| self.attribute_types().get(t)));
        }
        let required = dedup(required);
        let extensible = classes.iter().any(|class| class.oid == EXTENSIBLE_OBJECT);

        let mut present = HashSet::new();
        for (name, values) in &entry.attributes {
            let attr = self
                .attribute_types()
                .get(name)
                .ok_or_else(|| ValidationError::unknown("attribute", name))?;
            present.insert(attr.oid.as_str());

            if precluded.iter().any(|p| p.oid == attr.oid) {
                return Err(ValidationError::AttributePrecluded {
                    attribute: name.clone(),
                });
            }
            let permitted = name.eq_ignore_ascii_case(OBJECT_CLASS)
                || attr.usage.is_operational()
                || extensible
                || required.iter().chain(&allowed).any(|a| a.oid == attr.oid);
            if !permitted {
                return Err(ValidationError::AttributeNotAllowed {
                    attribute: name.clone(),
                });
            }

            if attr.single_value && values.len() > 1 {
                return Err(ValidationError::ExpectedSingleValue {
                    attribute: name.clone(),
                });
            }
            self.check_values(name, attr, values)?;
        }

        match required.iter().find(|attr| !present.contains(attr.oid.as_str())) {
            Some(missing) => Err(ValidationError::MissingRequiredAttribute {
                attribute: missing.principal_name().to_string(),
            }),
            None => Ok(()),
        }
    }

    fn entry_classes(&self, entry: &Entry) -> ValidationResult<Vec<&ObjectClass>> {
        let values = entry.object_classes();
        if values.is_empty() {
            return Err(ValidationError::MissingObjectClass {
                dn: entry.dn.clone(),
            });
        }

        let mut seen = HashSet::new();
        let mut classes = Vec::new();
        for value in values {
            let class = self
                .object_classes()
                .get(value)
                .ok_or_else(|| ValidationError::unknown(OBJECT_CLASS, value))?;
            if seen.insert(class.oid.as_str()) {
                classes.push(class);
            }
        }
        Ok(classes)
    }

    /// The most specific structural class; every other structural class of
    /// the entry must be one of its superclasses.
    fn structural_class<'a>(
        &'a self,
        entry: &Entry,
        classes: &[&'a ObjectClass],
    ) -> ValidationResult<&'a ObjectClass> {
        let structural: Vec<&ObjectClass> = classes
            .iter()
            .copied()
            .filter(|class| class.is_structural())
            .collect();

        let leaves: Vec<&ObjectClass> = structural
            .iter()
            .copied()
            .filter(|candidate| {
                !structural
                    .iter()
                    .any(|other| other.oid != candidate.oid && self.is_super_class_of(candidate, other))
            })
            .collect();

        match leaves.as_slice() {
            [] => Err(ValidationError::MissingStructuralClass {
                dn: entry.dn.clone(),
            }),
            [single] => Ok(*single),
            many => Err(ValidationError::MultipleStructuralClasses {
                dn: entry.dn.clone(),
                classes: many
                    .iter()
                    .map(|class| class.principal_name().to_string())
                    .collect(),
            }),
        }
    }

    fn check_values(&self, name: &str, attr: &AttributeType, values: &[String]) -> ValidationResult<()> {
        let Some(syntax) = self.effective_syntax(attr) else {
            return Ok(());
        };
        for value in values {
            if !syntax.verify(value)? {
                return Err(ValidationError::InvalidValue {
                    attribute: name.to_string(),
                    value: value.clone(),
                    syntax: syntax
                        .description
                        .clone()
                        .unwrap_or_else(|| syntax.oid.clone()),
                });
            }
        }
        Ok(())
    }
}

fn dedup(attributes: Vec<&AttributeType>) -> Vec<&AttributeType> {
    let mut seen = HashSet::new();
    attributes
        .into_iter()
        .filter(|attr| seen.insert(attr.oid.as_str()))
        .collect()
}
