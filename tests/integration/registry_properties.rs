//! Registry-wide properties.
//!
//! Every registration is all-or-nothing, identifiers are unique per kind,
//! lookups accept any alias of a definition, and matching rule uses track
//! the attribute types that actually use each rule.

use crate::common::{self, CASE_IGNORE_MATCH, DIRECTORY_STRING, fixtures};
use ldap_schema::schema::embedded;
use ldap_schema::{
    AttributeType, DefinitionKind, LdapSyntax, MatchingRule, MatchingRuleUse, ParseError,
    SchemaError, SchemaRegistry,
};

#[test]
fn test_unknown_super_type_leaves_collection_unchanged() {
    let registry = common::core_registry();
    let before = registry.counters();

    let result =
        registry.register_attribute_type("attributeType: ( 1.2.3.4 NAME 'orphan' SUP undefinedName )");

    assert!(result.as_ref().unwrap_err().is_referential());
    common::assert_unknown(result, "SUP", "undefinedName");
    assert_eq!(registry.counters(), before);
    assert!(registry.get::<AttributeType>("orphan").is_none());
}

#[test]
fn test_every_reference_clause_is_resolved() {
    let registry = common::core_registry();
    let before = registry.counters();

    common::assert_unknown(
        registry.register_attribute_type(format!(
            "( 1.2.3.1 NAME 'x' EQUALITY noSuchMatch SYNTAX {} )",
            DIRECTORY_STRING
        )),
        "EQUALITY",
        "noSuchMatch",
    );
    common::assert_unknown(
        registry.register_attribute_type("( 1.2.3.1 NAME 'x' SYNTAX 1.2.3.999 )"),
        "SYNTAX",
        "1.2.3.999",
    );
    common::assert_unknown(
        registry.register_object_class("( 1.2.3.2 NAME 'y' SUP top MUST noSuchAttribute )"),
        "MUST",
        "noSuchAttribute",
    );
    common::assert_unknown(
        registry.register_object_class("( 1.2.3.2 NAME 'y' SUP top MAY ( cn $ missing ) )"),
        "MAY",
        "missing",
    );
    common::assert_unknown(
        registry.register_dit_content_rule("( 2.5.6.6 AUX noSuchClass )"),
        "AUX",
        "noSuchClass",
    );
    common::assert_unknown(
        registry.register_name_form("( 1.2.3.3 NAME 'f' OC noSuchClass MUST cn )"),
        "OC",
        "noSuchClass",
    );
    common::assert_unknown(
        registry.register_dit_structure_rule("( 7 FORM noSuchForm )"),
        "FORM",
        "noSuchForm",
    );

    assert_eq!(registry.counters(), before);
}

#[test]
fn test_duplicate_syntax_keeps_single_entry() {
    let registry = SchemaRegistry::empty();
    registry
        .register_ldap_syntax(LdapSyntax::new("1.3.6.1.4.1.99999.9.1", "Postal Code"))
        .expect("first registration");

    let result = registry.register_ldap_syntax("ldapSyntax: ( 1.3.6.1.4.1.99999.9.1 DESC 'Zip' )");

    match result {
        Err(SchemaError::Duplicate { kind, id }) => {
            assert_eq!(kind, DefinitionKind::LdapSyntax);
            assert_eq!(id, "1.3.6.1.4.1.99999.9.1");
        }
        other => panic!("Expected duplicate registration, got {:?}", other),
    }
    assert_eq!(registry.counters().ldap_syntaxes, 1);
    assert_eq!(
        registry
            .get::<LdapSyntax>("1.3.6.1.4.1.99999.9.1")
            .and_then(|s| s.description),
        Some("Postal Code".to_string())
    );
}

#[test]
fn test_same_oid_in_different_kinds_is_allowed() {
    let registry = common::core_registry();
    // A content rule shares the OID of the class it governs
    registry
        .register_dit_content_rule("( 2.5.6.6 NAME 'personRule' )")
        .expect("content rule for person");
    assert_eq!(registry.counters().dit_content_rules, 1);
}

#[test]
fn test_case_insensitive_identity() {
    let registry = common::primed_registry();
    registry
        .register_attribute_type(format!(
            "( 2.5.4.3 NAME 'cn' EQUALITY caseIgnoreMatch SYNTAX {} )",
            DIRECTORY_STRING
        ))
        .expect("Failed to register cn");

    let by_upper = registry.get::<AttributeType>("CN").expect("CN");
    let by_lower = registry.get::<AttributeType>("cn").expect("cn");
    let by_oid = registry.get::<AttributeType>("2.5.4.3").expect("2.5.4.3");
    assert_eq!(by_upper, by_lower);
    assert_eq!(by_lower, by_oid);

    let index = registry.index_of::<AttributeType>("cn");
    assert_eq!(index, Some(0));
    assert_eq!(registry.index_of::<AttributeType>("CN"), index);
    assert_eq!(registry.index_of::<AttributeType>("2.5.4.3"), index);
    assert_eq!(registry.index_of::<AttributeType>("commonName"), None);
}

#[test]
fn test_numeric_oid_lookup_is_exact() {
    let registry = common::core_registry();
    assert!(registry.get::<AttributeType>("2.5.4.3").is_some());
    assert!(registry.get::<AttributeType>("2.5.4.03").is_none());
    assert!(registry.get::<AttributeType>("2.5.4").is_none());
}

#[test]
fn test_attribute_super_chain_nearest_first() {
    let registry = common::primed_registry();
    registry
        .load_str(fixtures::ATTRIBUTE_CHAIN)
        .expect("Failed to load chain");

    let schema = registry.read();
    let c = schema.attribute_types().get("c").expect("c registered");
    let chain: Vec<&str> = schema
        .attribute_type_super_chain(c)
        .iter()
        .map(|attr| attr.oid.as_str())
        .collect();
    assert_eq!(chain, vec!["1.3.6.1.4.1.99999.1.2", "1.3.6.1.4.1.99999.1.1"]);

    let a = schema.attribute_types().get("a").expect("a registered");
    assert!(schema.attribute_type_super_chain(a).is_empty());
}

#[test]
fn test_matching_rule_use_synthesis() {
    let registry = SchemaRegistry::empty();
    registry
        .register_ldap_syntax(LdapSyntax::new(DIRECTORY_STRING, "Directory String"))
        .expect("syntax");
    registry
        .register_matching_rule(MatchingRule::new(
            CASE_IGNORE_MATCH,
            "caseIgnoreMatch",
            DIRECTORY_STRING,
        ))
        .expect("matching rule");

    let cn = format!(
        "( 2.5.4.3 NAME 'cn' EQUALITY caseIgnoreMatch SYNTAX {} )",
        DIRECTORY_STRING
    );
    registry.register_attribute_type(cn.as_str()).expect("cn");

    // Failed registrations of cn must not touch the use entry
    assert!(matches!(
        registry.register_attribute_type(cn.as_str()),
        Err(SchemaError::Duplicate { .. })
    ));
    assert!(
        registry
            .register_attribute_type("( 2.5.4.3 NAME 'cn' EQUALITY caseIgnoreMatch SUP missing )")
            .is_err()
    );

    registry
        .register_attribute_type(format!(
            "( 2.5.4.4 NAME 'sn' EQUALITY caseIgnoreMatch SYNTAX {} )",
            DIRECTORY_STRING
        ))
        .expect("sn");

    let uses = registry
        .get::<MatchingRuleUse>(CASE_IGNORE_MATCH)
        .expect("use entry");
    assert_eq!(uses.applies, vec!["cn", "sn"]);
    assert_eq!(registry.counters().matching_rule_uses, 1);
}

#[test]
fn test_matching_rule_use_covers_every_clause() {
    let registry = common::primed_registry();
    registry
        .register_attribute_type(format!(
            "( 1.2.3.1 NAME 'code' EQUALITY caseIgnoreMatch ORDERING caseIgnoreOrderingMatch \
             SUBSTR caseIgnoreSubstringsMatch SYNTAX {} )",
            DIRECTORY_STRING
        ))
        .expect("code");

    for rule in [
        "caseIgnoreMatch",
        "caseIgnoreOrderingMatch",
        "caseIgnoreSubstringsMatch",
    ] {
        let uses = registry.get::<MatchingRuleUse>(rule).expect(rule);
        assert_eq!(uses.applies, vec!["code"], "{}", rule);
    }
}

#[test]
fn test_bulk_load_baseline() {
    let registry = common::primed_registry();
    let counters = registry.counters();

    assert!(embedded::LDAP_SYNTAXES.len() >= 56);
    assert!(embedded::MATCHING_RULES.len() >= 40);
    assert_eq!(counters.ldap_syntaxes, embedded::LDAP_SYNTAXES.len());
    assert_eq!(counters.matching_rules, embedded::MATCHING_RULES.len());
    assert_eq!(
        counters.as_array()[8],
        embedded::LDAP_SYNTAXES.len() + embedded::MATCHING_RULES.len()
    );
}

#[test]
fn test_builtins_load_through_bulk_ingestion() {
    let registry = SchemaRegistry::empty();
    let text: String = embedded::LDAP_SYNTAXES
        .iter()
        .map(|s| format!("ldapSyntaxes: {}\n", s))
        .chain(
            embedded::MATCHING_RULES
                .iter()
                .map(|r| format!("matchingRules: {}\n", r)),
        )
        .collect();

    let report = registry.load_str(&text).expect("built-ins load cleanly");
    assert!(report.is_success());
    assert_eq!(report.registered.total, registry.counters().total);
    assert_eq!(registry.counters(), common::primed_registry().counters());
}

#[test]
fn test_malformed_input_rejected() {
    let registry = common::primed_registry();
    let result =
        registry.register_attribute_type("attributeType: ( 2.5.4.3 NAME 'cn' BOGUS-KEYWORD )");

    match result {
        Err(SchemaError::Parse(ParseError::UnknownKeyword { kind, keyword })) => {
            assert_eq!(kind, DefinitionKind::AttributeType);
            assert_eq!(keyword, "BOGUS-KEYWORD");
        }
        other => panic!("Expected unknown keyword, got {:?}", other),
    }
    assert_eq!(registry.counters().attribute_types, 0);
}

#[test]
fn test_local_validation_precedes_resolution() {
    let registry = common::primed_registry();
    // Not a plausible OID: rejected before SUP is looked up
    let result = registry.register_attribute_type("( 2.5.4.x NAME 'bad' SUP undefinedName )");
    assert!(matches!(result, Err(SchemaError::Validation(_))));
    assert!(!result.unwrap_err().is_referential());
}
