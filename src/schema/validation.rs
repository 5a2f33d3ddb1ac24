//! Registration of schema definitions.
//!
//! Every `register_*` operation coerces its input, checks local validity,
//! then takes the write lock and, while holding it, resolves references,
//! rejects duplicates, applies the kind-specific structural checks and
//! appends. A failure at any step leaves the subschema untouched.

use super::definitions::{
    AttributeType, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule, MatchingRuleUse,
    NameForm, ObjectClass,
};
use super::matching::MatchingRuleKind;
use super::registry::{DefinitionInput, SchemaRegistry};
use super::subschema::{Collected, Subschema};
use super::types::{Definition, ObjectClassKind};
use crate::error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
use log::{debug, trace};

impl SchemaRegistry {
    /// Register an LDAP syntax.
    pub fn register_ldap_syntax(
        &self,
        input: impl Into<DefinitionInput<LdapSyntax>>,
    ) -> SchemaResult<()> {
        let syntax = input.into().into_definition()?;
        syntax.validate()?;

        let mut schema = self.write();
        check_unique(&schema, &syntax)?;
        commit(&mut schema, syntax);
        Ok(())
    }

    /// Register a matching rule. Its SYNTAX must already be registered.
    pub fn register_matching_rule(
        &self,
        input: impl Into<DefinitionInput<MatchingRule>>,
    ) -> SchemaResult<()> {
        let rule = input.into().into_definition()?;
        rule.validate()?;

        let mut schema = self.write();
        if let Some(syntax) = rule.syntax.as_deref() {
            resolve::<LdapSyntax>(&schema, "SYNTAX", syntax)?;
        }
        check_unique(&schema, &rule)?;
        commit(&mut schema, rule);
        Ok(())
    }

    /// Register an attribute type and record it in the matching rule use
    /// of each of its matching rules.
    pub fn register_attribute_type(
        &self,
        input: impl Into<DefinitionInput<AttributeType>>,
    ) -> SchemaResult<()> {
        let attr = input.into().into_definition()?;
        attr.validate()?;

        let mut schema = self.write();

        let super_type = attr
            .super_type
            .as_deref()
            .map(|term| resolve::<AttributeType>(&schema, "SUP", term))
            .transpose()?;
        let mut rules = Vec::new();
        for (clause, term) in attr.matching_rules() {
            rules.push((clause, resolve::<MatchingRule>(&schema, clause, term)?));
        }
        if let Some(syntax) = attr.syntax.as_deref() {
            resolve::<LdapSyntax>(&schema, "SYNTAX", syntax)?;
        }

        check_unique(&schema, &attr)?;

        if let Some(parent) = super_type {
            if parent.usage != attr.usage {
                return Err(ValidationError::InvalidUsage {
                    field: "SUP".to_string(),
                    expected: parent.usage.to_string(),
                    actual: attr.usage.to_string(),
                }
                .into());
            }
        }
        for (clause, rule) in &rules {
            check_rule_kind(clause, rule)?;
        }

        let used: Vec<MatchingRule> = rules.into_iter().map(|(_, rule)| rule.clone()).collect();
        let principal = attr.principal_name().to_string();
        commit(&mut schema, attr);
        update_matching_rule_uses(&mut schema, &used, &principal);
        Ok(())
    }

    /// Register an object class. Superclasses must be registered first and
    /// their kinds must be compatible with the new class.
    pub fn register_object_class(
        &self,
        input: impl Into<DefinitionInput<ObjectClass>>,
    ) -> SchemaResult<()> {
        let class = input.into().into_definition()?;
        class.validate()?;

        let mut schema = self.write();
        let supers = resolve_all::<ObjectClass>(&schema, "SUP", &class.super_classes)?;
        resolve_all::<AttributeType>(&schema, "MUST", &class.must)?;
        resolve_all::<AttributeType>(&schema, "MAY", &class.may)?;

        check_unique(&schema, &class)?;

        for (term, parent) in class.super_classes.iter().zip(&supers) {
            check_inheritance(&class, term, parent)?;
        }

        commit(&mut schema, class);
        Ok(())
    }

    /// Register a DIT content rule for an existing structural object class.
    pub fn register_dit_content_rule(
        &self,
        input: impl Into<DefinitionInput<DitContentRule>>,
    ) -> SchemaResult<()> {
        let rule = input.into().into_definition()?;
        rule.validate()?;

        let mut schema = self.write();
        let governed = resolve::<ObjectClass>(&schema, "OID", &rule.oid)?;
        let aux = resolve_all::<ObjectClass>(&schema, "AUX", &rule.aux)?;
        resolve_all::<AttributeType>(&schema, "MUST", &rule.must)?;
        resolve_all::<AttributeType>(&schema, "MAY", &rule.may)?;
        resolve_all::<AttributeType>(&schema, "NOT", &rule.not)?;

        check_unique(&schema, &rule)?;

        check_class_kind("OID", &rule.oid, governed, ObjectClassKind::Structural)?;
        for (term, class) in rule.aux.iter().zip(&aux) {
            check_class_kind("AUX", term, class, ObjectClassKind::Auxiliary)?;
        }

        commit(&mut schema, rule);
        Ok(())
    }

    /// Register a name form for an existing structural object class.
    pub fn register_name_form(
        &self,
        input: impl Into<DefinitionInput<NameForm>>,
    ) -> SchemaResult<()> {
        let form = input.into().into_definition()?;
        form.validate()?;

        let mut schema = self.write();
        let class = form
            .object_class
            .as_deref()
            .map(|term| resolve::<ObjectClass>(&schema, "OC", term).map(|class| (term, class)))
            .transpose()?;
        resolve_all::<AttributeType>(&schema, "MUST", &form.must)?;
        resolve_all::<AttributeType>(&schema, "MAY", &form.may)?;

        check_unique(&schema, &form)?;

        if let Some((term, class)) = class {
            check_class_kind("OC", term, class, ObjectClassKind::Structural)?;
        }

        commit(&mut schema, form);
        Ok(())
    }

    /// Register a DIT structure rule. The rule may list itself among its
    /// superiors; every other superior must already be registered.
    pub fn register_dit_structure_rule(
        &self,
        input: impl Into<DefinitionInput<DitStructureRule>>,
    ) -> SchemaResult<()> {
        let rule = input.into().into_definition()?;
        rule.validate()?;

        let mut schema = self.write();
        if let Some(form) = rule.form.as_deref() {
            resolve::<NameForm>(&schema, "FORM", form)?;
        }
        for id in rule.super_rules.iter().filter(|id| **id != rule.rule_id) {
            if !schema.dit_structure_rules.contains_id(id) {
                return Err(ValidationError::unknown("SUP", id).into());
            }
        }

        check_unique(&schema, &rule)?;
        commit(&mut schema, rule);
        Ok(())
    }
}

fn resolve<'a, T: Collected>(
    schema: &'a Subschema,
    clause: &str,
    term: &str,
) -> ValidationResult<&'a T> {
    schema
        .collection::<T>()
        .get(term)
        .ok_or_else(|| ValidationError::unknown(clause, term))
}

fn resolve_all<'a, T: Collected>(
    schema: &'a Subschema,
    clause: &str,
    terms: &[String],
) -> ValidationResult<Vec<&'a T>> {
    terms
        .iter()
        .map(|term| resolve::<T>(schema, clause, term))
        .collect()
}

fn check_unique<T: Collected>(schema: &Subschema, definition: &T) -> SchemaResult<()> {
    if schema.collection::<T>().contains_id(definition.id()) {
        Err(SchemaError::duplicate(T::KIND, definition.id()))
    } else {
        Ok(())
    }
}

fn commit<T: Collected>(schema: &mut Subschema, definition: T) {
    debug!("Registered {} '{}'", T::KIND, definition.id());
    T::collection_mut(schema).push(definition);
}

fn check_class_kind(
    clause: &str,
    term: &str,
    class: &ObjectClass,
    expected: ObjectClassKind,
) -> ValidationResult<()> {
    if class.kind == expected {
        Ok(())
    } else {
        Err(ValidationError::wrong_kind(
            clause,
            term,
            expected.to_string(),
            class.kind.to_string(),
        ))
    }
}

fn check_inheritance(class: &ObjectClass, term: &str, parent: &ObjectClass) -> ValidationResult<()> {
    use ObjectClassKind::*;

    let allowed = match (class.kind, parent.kind) {
        (_, Abstract) => true,
        (Abstract, _) => false,
        (Auxiliary, Structural) | (Structural, Auxiliary) => false,
        _ => true,
    };
    if allowed {
        Ok(())
    } else {
        let expected = match class.kind {
            Abstract => "ABSTRACT".to_string(),
            kind => format!("ABSTRACT or {}", kind),
        };
        Err(ValidationError::wrong_kind(
            "SUP",
            term,
            expected,
            parent.kind.to_string(),
        ))
    }
}

/// Only named rules are checked; a nameless rule has no name to classify.
fn check_rule_kind(clause: &str, rule: &MatchingRule) -> ValidationResult<()> {
    if rule.names.is_empty() {
        return Ok(());
    }
    let expected = match clause {
        "ORDERING" => MatchingRuleKind::Ordering,
        "SUBSTR" => MatchingRuleKind::Substring,
        _ => MatchingRuleKind::Equality,
    };
    let actual = MatchingRuleKind::of(rule);
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::wrong_kind(
            clause,
            rule.principal_name(),
            expected.to_string(),
            actual.to_string(),
        ))
    }
}

/// Record `attribute` in the use entry of each rule, creating the entry on
/// first use.
fn update_matching_rule_uses(schema: &mut Subschema, rules: &[MatchingRule], attribute: &str) {
    for rule in rules {
        let uses = MatchingRuleUse::collection_mut(schema);
        if !uses.contains_id(&rule.oid) {
            trace!("Creating matching rule use for '{}'", rule.principal_name());
            uses.push(MatchingRuleUse::for_rule(rule));
        }
        if let Some(entry) = uses.get_by_id_mut(&rule.oid) {
            if entry.add_applies(attribute) {
                trace!("'{}' applies to '{}'", rule.principal_name(), attribute);
            }
        }
    }
}
