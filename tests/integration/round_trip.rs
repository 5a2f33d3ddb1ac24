//! Canonical serialization parses back to an equal definition.
//!
//! Generated attribute types and object classes exercise every clause,
//! including quoted text with escapes and vendor extensions; the fixed
//! canonical strings cover the remaining kinds.

use crate::common::fixtures::CANONICAL;
use ldap_schema::schema::Extensions;
use ldap_schema::{
    AttributeType, Definition, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule,
    MatchingRuleUse, NameForm, ObjectClass, ObjectClassKind, ParseError, SchemaError, Usage,
    ValidationError,
};
use proptest::prelude::*;

fn numeric_oid() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..2000, 2..7).prop_map(|arcs| {
        arcs.iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    })
}

fn descriptor() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,15}"
}

fn oid_or_descriptor() -> impl Strategy<Value = String> {
    prop_oneof![numeric_oid(), descriptor()]
}

/// Printable text, quotes and backslashes included.
fn free_text() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

fn extensions() -> impl Strategy<Value = Extensions> {
    prop::collection::vec(
        ("X-[A-Z]{1,10}", prop::collection::vec(free_text(), 1..4)),
        0..3,
    )
    .prop_map(|pairs| {
        let mut extensions = Extensions::new();
        for (keyword, values) in pairs {
            extensions.insert(&keyword, values);
        }
        extensions
    })
}

fn usage() -> impl Strategy<Value = Usage> {
    prop::sample::select(vec![
        Usage::UserApplications,
        Usage::DirectoryOperation,
        Usage::DistributedOperation,
        Usage::DsaOperation,
    ])
}

prop_compose! {
    fn attribute_type()
        (oid in numeric_oid(),
         names in prop::collection::vec(descriptor(), 0..4),
         description in prop::option::of(free_text()),
         obsolete in any::<bool>(),
         super_type in prop::option::of(oid_or_descriptor()),
         equality in prop::option::of(oid_or_descriptor()),
         ordering in prop::option::of(oid_or_descriptor()),
         substring in prop::option::of(oid_or_descriptor()),
         syntax in prop::option::of((numeric_oid(), prop::option::of(any::<u64>()))),
         value_flag in 0u8..3,
         no_user_modification in any::<bool>(),
         usage in usage(),
         extensions in extensions())
        -> AttributeType {
        let (syntax, min_upper_bound) = match syntax {
            Some((syntax, bound)) => (Some(syntax), bound),
            None => (None, None),
        };
        AttributeType {
            oid,
            names,
            description,
            obsolete,
            super_type,
            equality,
            ordering,
            substring,
            syntax,
            min_upper_bound,
            single_value: value_flag == 1,
            collective: value_flag == 2,
            no_user_modification,
            usage,
            extensions,
        }
    }
}

prop_compose! {
    fn object_class()
        (oid in numeric_oid(),
         names in prop::collection::vec(descriptor(), 0..3),
         description in prop::option::of(free_text()),
         obsolete in any::<bool>(),
         super_classes in prop::collection::vec(oid_or_descriptor(), 0..4),
         kind in prop::sample::select(vec![
             ObjectClassKind::Structural,
             ObjectClassKind::Auxiliary,
             ObjectClassKind::Abstract,
         ]),
         must in prop::collection::vec(oid_or_descriptor(), 0..5),
         may in prop::collection::vec(oid_or_descriptor(), 0..5),
         extensions in extensions())
        -> ObjectClass {
        ObjectClass {
            oid,
            names,
            description,
            obsolete,
            super_classes,
            kind,
            must,
            may,
            extensions,
        }
    }
}

fn reparse<T: Definition>(definition: &T) -> T {
    let text = definition.to_string();
    text.parse()
        .unwrap_or_else(|e| panic!("'{}' failed to parse: {}", text, e))
}

proptest! {
    #[test]
    fn test_attribute_type_round_trip(attr in attribute_type()) {
        prop_assert_eq!(reparse(&attr), attr);
    }

    #[test]
    fn test_object_class_round_trip(class in object_class()) {
        prop_assert_eq!(reparse(&class), class);
    }

    #[test]
    fn test_serialization_is_a_fixed_point(attr in attribute_type()) {
        let once = attr.to_string();
        let twice = reparse(&attr).to_string();
        prop_assert_eq!(once, twice);
    }
}

fn assert_canonical<T>(text: &str)
where
    T: Definition + PartialEq,
{
    let parsed: T = text
        .parse()
        .unwrap_or_else(|e| panic!("'{}' failed to parse: {}", text, e));
    assert_eq!(parsed.to_string(), text);
    assert_eq!(reparse(&parsed), parsed);
}

#[test]
fn test_canonical_form_of_every_kind() {
    assert_canonical::<LdapSyntax>(CANONICAL[0]);
    assert_canonical::<MatchingRule>(CANONICAL[1]);
    assert_canonical::<AttributeType>(CANONICAL[2]);
    assert_canonical::<MatchingRuleUse>(CANONICAL[3]);
    assert_canonical::<ObjectClass>(CANONICAL[4]);
    assert_canonical::<DitContentRule>(CANONICAL[5]);
    assert_canonical::<NameForm>(CANONICAL[6]);
    assert_canonical::<DitStructureRule>(CANONICAL[7]);
}

#[test]
fn test_loose_input_is_normalized() {
    let loose = "objectclass:(2.5.6.6 name 'person'  sup top   must(sn$cn) may userPassword)";
    let class: ObjectClass = loose.parse().expect("loose input parses");
    assert_eq!(
        class.to_string(),
        "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) MAY userPassword )"
    );
}

#[test]
fn test_escaped_quotes_survive() {
    let syntax: LdapSyntax = r"( 1.2.3.4 DESC 'O\'Reilly \\ Sons' )"
        .parse()
        .expect("escaped quote parses");
    assert_eq!(syntax.description.as_deref(), Some(r"O'Reilly \ Sons"));
    assert_eq!(reparse(&syntax), syntax);
}

#[test]
fn test_empty_lists_are_rejected() {
    for text in [
        "( 2.5.6.6 NAME ( ) STRUCTURAL )",
        "( 2.5.6.6 NAME 'person' MUST ( ) )",
        "( 2.5.6.6 NAME 'person' X-ORIGIN ( ) )",
    ] {
        assert!(
            matches!(text.parse::<ObjectClass>(), Err(ParseError::EmptyList { .. })),
            "{}",
            text
        );
    }

    // Values built in code are held to the same rule at registration
    let registry = ldap_schema::SchemaRegistry::empty();
    let mut syntax = LdapSyntax::new("1.3.6.1.4.1.99999.4.1", "Colour");
    syntax.extensions.insert("X-ORIGIN", Vec::new());
    assert!(matches!(
        registry.register_ldap_syntax(syntax),
        Err(SchemaError::Validation(ValidationError::EmptyExtension { .. }))
    ));
    assert_eq!(registry.counters().ldap_syntaxes, 0);
}
