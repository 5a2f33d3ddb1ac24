//! Bulk loading of schema text.

use crate::common::{self, fixtures};
use ldap_schema::schema::{IngestOptions, split_units};
use ldap_schema::{
    AttributeType, DefinitionKind, MatchingRuleUse, ObjectClass, SchemaError, SchemaRegistry,
};

#[test]
fn test_openldap_file_format() {
    let registry = common::core_registry();
    let report = registry
        .load_bytes(fixtures::INET_ORG_PERSON.as_bytes())
        .expect("inetOrgPerson loads");

    assert!(report.is_success());
    assert_eq!(report.registered.attribute_types, 6);
    assert_eq!(report.registered.object_classes, 1);
    assert_eq!(report.registered.total, 7);

    let inet = registry.get::<ObjectClass>("inetorgperson").expect("loaded");
    assert_eq!(inet.super_classes, vec!["organizationalPerson"]);
    assert_eq!(inet.may.len(), 9);
    assert_eq!(inet.may[8], "uid");

    let display = registry.get::<AttributeType>("displayName").expect("loaded");
    assert!(display.single_value);
    assert_eq!(
        display.description.as_deref(),
        Some("RFC2798: preferred name to be used when displaying entries")
    );
}

#[test]
fn test_ldif_subschema_entry() {
    let ldif = "\
dn: cn=schema
objectClass: top
objectClass: subschema
cn: schema
attributeTypes: ( 1.3.6.1.4.1.99999.1.1 NAME 'badgeNumber'
  EQUALITY integerMatch ORDERING integerOrderingMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 SINGLE-VALUE )
objectClasses: ( 1.3.6.1.4.1.99999.2.1 NAME 'badgeHolder' SUP top AUXILIARY
  MUST badgeNumber )
matchingRuleUse: ( 2.5.13.14 NAME 'integerMatch' APPLIES badgeNumber )
";
    let registry = common::core_registry();
    let report = registry.load_str(ldif).expect("LDIF loads");

    assert_eq!(report.registered.attribute_types, 1);
    assert_eq!(report.registered.object_classes, 1);
    assert_eq!(report.skipped, 1);
    // Rebuilt from the attribute type, not taken from the text
    let uses = registry.get::<MatchingRuleUse>("integerMatch").expect("derived");
    assert_eq!(uses.applies, vec!["badgeNumber"]);
}

#[test]
fn test_units_are_registered_in_order() {
    let text = "\
objectClasses: ( 1.3.6.1.4.1.99999.2.1 NAME 'early' SUP top MUST lateAttribute )
attributeTypes: ( 1.3.6.1.4.1.99999.1.1 NAME 'lateAttribute' SUP name )
";
    let registry = common::core_registry();
    let result = registry.load_str(text);

    match result {
        Err(SchemaError::Ingest { index, kind, source }) => {
            assert_eq!(index, 1);
            assert_eq!(kind, DefinitionKind::ObjectClass);
            assert!(source.is_referential());
        }
        other => panic!("Expected ingest failure, got {:?}", other),
    }
    // Nothing after the failing unit was attempted
    assert!(registry.get::<AttributeType>("lateAttribute").is_none());
}

#[test]
fn test_failure_keeps_earlier_units() {
    let text = "\
attributeTypes: ( 1.3.6.1.4.1.99999.1.1 NAME 'first' SUP name )
attributeTypes: ( 1.3.6.1.4.1.99999.1.2 NAME 'second' SUP missing )
attributeTypes: ( 1.3.6.1.4.1.99999.1.3 NAME 'third' SUP name )
";
    let registry = common::core_registry();
    let error = registry.load_str(text).unwrap_err();
    assert!(matches!(error, SchemaError::Ingest { index: 2, .. }));
    assert!(registry.get::<AttributeType>("first").is_some());
    assert!(registry.get::<AttributeType>("third").is_none());
}

#[test]
fn test_continue_on_error_collects_failures() {
    let text = "\
attributeTypes: ( 1.3.6.1.4.1.99999.1.1 NAME 'first' SUP name )
attributeTypes: ( 1.3.6.1.4.1.99999.1.2 NAME 'second' SUP missing )
attributeTypes: ( 1.3.6.1.4.1.99999.1.3 NAME 'third' SUP name BOGUS )
attributeTypes: ( 1.3.6.1.4.1.99999.1.4 NAME 'fourth' SUP name )
";
    let registry = SchemaRegistry::builder()
        .with_ingest_options(IngestOptions {
            continue_on_error: true,
        })
        .build()
        .expect("Failed to build registry");
    registry
        .load_str(ldap_schema::schema::embedded::core_schema())
        .expect("core schema");

    let report = registry.load_str(text).expect("lenient load");
    assert!(!report.is_success());
    assert_eq!(report.registered.attribute_types, 2);

    let failed: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(failed, vec![2, 3]);
    assert!(report.failures[0].error.is_referential());
    assert!(matches!(report.failures[1].error, SchemaError::Parse(_)));
    assert!(registry.get::<AttributeType>("fourth").is_some());
}

#[test]
fn test_non_utf8_blob_rejected() {
    let registry = common::core_registry();
    let before = registry.counters();
    let result = registry.load_bytes(b"attributeTypes: ( 1.2.3 NAME '\xff' SUP name )");
    assert!(matches!(result, Err(SchemaError::BadType { .. })));
    assert_eq!(registry.counters(), before);
}

#[test]
fn test_every_label_spelling_is_recognised() {
    let labels = [
        ("ldapSyntax", DefinitionKind::LdapSyntax),
        ("LDAPSYNTAXES:", DefinitionKind::LdapSyntax),
        ("matchingRule", DefinitionKind::MatchingRule),
        ("matchingRules:", DefinitionKind::MatchingRule),
        ("attributeType", DefinitionKind::AttributeType),
        ("attributetypes:", DefinitionKind::AttributeType),
        ("matchingRuleUse", DefinitionKind::MatchingRuleUse),
        ("matchingRuleUses:", DefinitionKind::MatchingRuleUse),
        ("objectClass", DefinitionKind::ObjectClass),
        ("objectClasses:", DefinitionKind::ObjectClass),
        ("dITContentRule", DefinitionKind::DitContentRule),
        ("dITContentRules:", DefinitionKind::DitContentRule),
        ("nameForm", DefinitionKind::NameForm),
        ("nameForms:", DefinitionKind::NameForm),
        ("dITStructureRule", DefinitionKind::DitStructureRule),
        ("dITStructureRules:", DefinitionKind::DitStructureRule),
    ];

    let text: String = labels
        .iter()
        .map(|(label, _)| format!("{} ( 1.2.3 )\n", label))
        .collect();
    let units = split_units(&text);

    let kinds: Vec<DefinitionKind> = units.iter().map(|unit| unit.kind).collect();
    let expected: Vec<DefinitionKind> = labels.iter().map(|(_, kind)| *kind).collect();
    assert_eq!(kinds, expected);
    assert!(units.iter().all(|unit| unit.text == "( 1.2.3 )"));
}

#[test]
fn test_comments_inside_definitions_are_dropped() {
    let text = "\
attributeTypes: ( 1.3.6.1.4.1.99999.1.1 NAME 'commented'
# the syntax is inherited
  SUP name )
";
    let registry = common::core_registry();
    registry.load_str(text).expect("comment lines skipped");
    assert!(registry.get::<AttributeType>("commented").is_some());
}
