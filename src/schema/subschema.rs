//! The eight definition collections and the read-side of the schema.
//!
//! A [`Subschema`] is what the registry guards with its lock. Every query
//! is a first-match linear scan in insertion order; traversal helpers
//! resolve references by identifier or name and carry a visited set so
//! that a self-referencing structure rule cannot loop.

use super::definitions::{
    AttributeType, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule, MatchingRuleUse,
    NameForm, ObjectClass,
};
use super::types::{Definition, DefinitionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Insertion-ordered collection of one definition kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Definition> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Position of the first definition identified by `term`.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches(term))
    }

    /// First definition identified by `term` (identifier or name).
    pub fn get(&self, term: &str) -> Option<&T> {
        self.items.iter().find(|item| item.matches(term))
    }

    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Whether a definition with exactly this primary identifier exists.
    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub(crate) fn get_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Maps a definition type to its collection inside a [`Subschema`].
pub trait Collected: Definition {
    fn collection(subschema: &Subschema) -> &Collection<Self>;
    fn collection_mut(subschema: &mut Subschema) -> &mut Collection<Self>;
}

macro_rules! collected {
    ($ty:ty, $field:ident) => {
        impl Collected for $ty {
            fn collection(subschema: &Subschema) -> &Collection<Self> {
                &subschema.$field
            }

            fn collection_mut(subschema: &mut Subschema) -> &mut Collection<Self> {
                &mut subschema.$field
            }
        }
    };
}

collected!(LdapSyntax, ldap_syntaxes);
collected!(MatchingRule, matching_rules);
collected!(AttributeType, attribute_types);
collected!(MatchingRuleUse, matching_rule_uses);
collected!(ObjectClass, object_classes);
collected!(DitContentRule, dit_content_rules);
collected!(NameForm, name_forms);
collected!(DitStructureRule, dit_structure_rules);

/// Element counts of the eight collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    pub ldap_syntaxes: usize,
    pub matching_rules: usize,
    pub attribute_types: usize,
    pub matching_rule_uses: usize,
    pub object_classes: usize,
    pub dit_content_rules: usize,
    pub name_forms: usize,
    pub dit_structure_rules: usize,
    pub total: usize,
}

impl Counters {
    /// The eight counts in collection order followed by their sum.
    pub fn as_array(&self) -> [usize; 9] {
        [
            self.ldap_syntaxes,
            self.matching_rules,
            self.attribute_types,
            self.matching_rule_uses,
            self.object_classes,
            self.dit_content_rules,
            self.name_forms,
            self.dit_structure_rules,
            self.total,
        ]
    }

    pub(crate) fn increment(&mut self, kind: DefinitionKind) {
        let slot = match kind {
            DefinitionKind::LdapSyntax => &mut self.ldap_syntaxes,
            DefinitionKind::MatchingRule => &mut self.matching_rules,
            DefinitionKind::AttributeType => &mut self.attribute_types,
            DefinitionKind::MatchingRuleUse => &mut self.matching_rule_uses,
            DefinitionKind::ObjectClass => &mut self.object_classes,
            DefinitionKind::DitContentRule => &mut self.dit_content_rules,
            DefinitionKind::NameForm => &mut self.name_forms,
            DefinitionKind::DitStructureRule => &mut self.dit_structure_rules,
        };
        *slot += 1;
        self.total += 1;
    }

    pub fn get(&self, kind: DefinitionKind) -> usize {
        match kind {
            DefinitionKind::LdapSyntax => self.ldap_syntaxes,
            DefinitionKind::MatchingRule => self.matching_rules,
            DefinitionKind::AttributeType => self.attribute_types,
            DefinitionKind::MatchingRuleUse => self.matching_rule_uses,
            DefinitionKind::ObjectClass => self.object_classes,
            DefinitionKind::DitContentRule => self.dit_content_rules,
            DefinitionKind::NameForm => self.name_forms,
            DefinitionKind::DitStructureRule => self.dit_structure_rules,
        }
    }
}

/// The full set of schema definitions held by a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subschema {
    pub(crate) ldap_syntaxes: Collection<LdapSyntax>,
    pub(crate) matching_rules: Collection<MatchingRule>,
    pub(crate) attribute_types: Collection<AttributeType>,
    pub(crate) matching_rule_uses: Collection<MatchingRuleUse>,
    pub(crate) object_classes: Collection<ObjectClass>,
    pub(crate) dit_content_rules: Collection<DitContentRule>,
    pub(crate) name_forms: Collection<NameForm>,
    pub(crate) dit_structure_rules: Collection<DitStructureRule>,
}

impl Subschema {
    /// Collection for definition type `T`.
    pub fn collection<T: Collected>(&self) -> &Collection<T> {
        T::collection(self)
    }

    pub fn ldap_syntaxes(&self) -> &Collection<LdapSyntax> {
        &self.ldap_syntaxes
    }

    pub fn matching_rules(&self) -> &Collection<MatchingRule> {
        &self.matching_rules
    }

    pub fn attribute_types(&self) -> &Collection<AttributeType> {
        &self.attribute_types
    }

    pub fn matching_rule_uses(&self) -> &Collection<MatchingRuleUse> {
        &self.matching_rule_uses
    }

    pub fn object_classes(&self) -> &Collection<ObjectClass> {
        &self.object_classes
    }

    pub fn dit_content_rules(&self) -> &Collection<DitContentRule> {
        &self.dit_content_rules
    }

    pub fn name_forms(&self) -> &Collection<NameForm> {
        &self.name_forms
    }

    pub fn dit_structure_rules(&self) -> &Collection<DitStructureRule> {
        &self.dit_structure_rules
    }

    pub fn counters(&self) -> Counters {
        let mut counters = Counters {
            ldap_syntaxes: self.ldap_syntaxes.len(),
            matching_rules: self.matching_rules.len(),
            attribute_types: self.attribute_types.len(),
            matching_rule_uses: self.matching_rule_uses.len(),
            object_classes: self.object_classes.len(),
            dit_content_rules: self.dit_content_rules.len(),
            name_forms: self.name_forms.len(),
            dit_structure_rules: self.dit_structure_rules.len(),
            total: 0,
        };
        counters.total = counters.as_array()[..8].iter().sum();
        counters
    }

    /// Ancestors of `attr`, nearest first, following SUP.
    pub fn attribute_type_super_chain(&self, attr: &AttributeType) -> Vec<&AttributeType> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([attr.oid.clone()]);
        let mut next = attr.super_type.clone();

        while let Some(term) = next {
            let Some(parent) = self.attribute_types.get(&term) else {
                break;
            };
            if !seen.insert(parent.oid.clone()) {
                break;
            }
            chain.push(parent);
            next = parent.super_type.clone();
        }

        chain
    }

    /// Direct superiors of `class` (one level only).
    pub fn object_class_super_chain(&self, class: &ObjectClass) -> Vec<&ObjectClass> {
        class
            .super_classes
            .iter()
            .filter_map(|term| self.object_classes.get(term))
            .collect()
    }

    /// Whether `superior` is an ancestor of `subordinate` at any depth.
    pub fn is_super_class_of(&self, superior: &ObjectClass, subordinate: &ObjectClass) -> bool {
        let mut seen = HashSet::new();
        let mut pending = self.object_class_super_chain(subordinate);

        while let Some(class) = pending.pop() {
            if class.oid == superior.oid {
                return true;
            }
            if seen.insert(class.oid.as_str()) {
                pending.extend(self.object_class_super_chain(class));
            }
        }

        false
    }

    /// MUST attributes of `class` and all of its superclasses.
    ///
    /// Attributes reachable through several inheritance paths are listed
    /// once per path.
    pub fn all_must(&self, class: &ObjectClass) -> Vec<&AttributeType> {
        let mut out = Vec::new();
        self.collect_inherited(class, |c| &c.must, &mut Vec::new(), &mut out);
        out
    }

    /// MAY attributes of `class` and all of its superclasses.
    ///
    /// Attributes reachable through several inheritance paths are listed
    /// once per path.
    pub fn all_may(&self, class: &ObjectClass) -> Vec<&AttributeType> {
        let mut out = Vec::new();
        self.collect_inherited(class, |c| &c.may, &mut Vec::new(), &mut out);
        out
    }

    fn collect_inherited<'a>(
        &'a self,
        class: &ObjectClass,
        pick: fn(&ObjectClass) -> &Vec<String>,
        path: &mut Vec<String>,
        out: &mut Vec<&'a AttributeType>,
    ) {
        if path.contains(&class.oid) {
            return;
        }
        path.push(class.oid.clone());

        out.extend(pick(class).iter().filter_map(|term| self.attribute_types.get(term)));
        for parent in self.object_class_super_chain(class) {
            self.collect_inherited(parent, pick, path, out);
        }

        path.pop();
    }

    /// Rules naming `rule` among their superiors, `rule` itself included
    /// when it is self-superior.
    pub fn subordinate_structure_rules(&self, rule: &DitStructureRule) -> Vec<&DitStructureRule> {
        self.dit_structure_rules
            .iter()
            .filter(|candidate| candidate.super_rules.contains(&rule.rule_id))
            .collect()
    }

    /// Superior rules of `rule`, `rule` itself included when self-superior.
    pub fn superior_structure_rules(&self, rule: &DitStructureRule) -> Vec<&DitStructureRule> {
        let mut seen = HashSet::new();
        rule.super_rules
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| self.dit_structure_rules.iter().find(|r| r.rule_id == *id))
            .collect()
    }

    /// Syntax of `attr`, inherited through SUP when not set locally.
    pub fn effective_syntax(&self, attr: &AttributeType) -> Option<&LdapSyntax> {
        self.inherited(attr, |a| a.syntax.as_deref())
            .and_then(|oid| self.ldap_syntaxes.get(&oid))
    }

    /// EQUALITY rule of `attr`, inherited through SUP when not set locally.
    pub fn effective_equality(&self, attr: &AttributeType) -> Option<&MatchingRule> {
        self.inherited(attr, |a| a.equality.as_deref())
            .and_then(|term| self.matching_rules.get(&term))
    }

    /// ORDERING rule of `attr`, inherited through SUP when not set locally.
    pub fn effective_ordering(&self, attr: &AttributeType) -> Option<&MatchingRule> {
        self.inherited(attr, |a| a.ordering.as_deref())
            .and_then(|term| self.matching_rules.get(&term))
    }

    /// SUBSTR rule of `attr`, inherited through SUP when not set locally.
    pub fn effective_substring(&self, attr: &AttributeType) -> Option<&MatchingRule> {
        self.inherited(attr, |a| a.substring.as_deref())
            .and_then(|term| self.matching_rules.get(&term))
    }

    fn inherited(&self, attr: &AttributeType, pick: fn(&AttributeType) -> Option<&str>) -> Option<String> {
        if let Some(value) = pick(attr) {
            return Some(value.to_string());
        }
        self.attribute_type_super_chain(attr)
            .into_iter()
            .find_map(|ancestor| pick(ancestor).map(str::to_string))
    }

    /// Publish every definition in the textual language, one per line,
    /// labelled with the plural kind keyword and ordered so that it can be
    /// loaded back into an empty registry.
    pub fn to_definitions(&self) -> String {
        let mut out = String::new();
        write_section(&mut out, "ldapSyntaxes", &self.ldap_syntaxes);
        write_section(&mut out, "matchingRules", &self.matching_rules);
        write_section(&mut out, "attributeTypes", &self.attribute_types);
        write_section(&mut out, "matchingRuleUse", &self.matching_rule_uses);
        write_section(&mut out, "objectClasses", &self.object_classes);
        write_section(&mut out, "dITContentRules", &self.dit_content_rules);
        write_section(&mut out, "nameForms", &self.name_forms);
        write_section(&mut out, "dITStructureRules", &self.dit_structure_rules);
        out
    }
}

fn write_section<T: Definition>(out: &mut String, label: &str, collection: &Collection<T>) {
    for item in collection {
        out.push_str(&format!("{}: {}\n", label, item));
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  LDAP syntaxes:        {}", self.ldap_syntaxes)?;
        writeln!(f, "  Matching rules:       {}", self.matching_rules)?;
        writeln!(f, "  Attribute types:      {}", self.attribute_types)?;
        writeln!(f, "  Matching rule uses:   {}", self.matching_rule_uses)?;
        writeln!(f, "  Object classes:       {}", self.object_classes)?;
        writeln!(f, "  DIT content rules:    {}", self.dit_content_rules)?;
        writeln!(f, "  Name forms:           {}", self.name_forms)?;
        writeln!(f, "  DIT structure rules:  {}", self.dit_structure_rules)?;
        write!(f, "  Total:                {}", self.total)
    }
}
