//! Structural checks applied per definition kind.

use crate::common::{self, DIRECTORY_STRING, fixtures};
use ldap_schema::{
    DitStructureRule, NameForm, ObjectClass, ObjectClassKind, SchemaError, ValidationError,
};

#[test]
fn test_content_rule_requires_structural_class() {
    let registry = common::core_registry();

    // top is ABSTRACT, dcObject is AUXILIARY
    common::assert_wrong_kind(registry.register_dit_content_rule("( 2.5.6.0 )"), "OID");
    common::assert_wrong_kind(
        registry.register_dit_content_rule("( 1.3.6.1.4.1.1466.344 )"),
        "OID",
    );
    common::assert_unknown(
        registry.register_dit_content_rule("( 1.2.3.4.5 NAME 'nothing' )"),
        "OID",
        "1.2.3.4.5",
    );
    assert_eq!(registry.counters().dit_content_rules, 0);
}

#[test]
fn test_content_rule_aux_must_be_auxiliary() {
    let registry = common::core_registry();
    common::assert_wrong_kind(
        registry.register_dit_content_rule("( 2.5.6.6 AUX ( dcObject $ organizationalPerson ) )"),
        "AUX",
    );
    registry
        .register_dit_content_rule("( 2.5.6.6 AUX ( dcObject $ extensibleObject ) )")
        .expect("auxiliary classes are accepted");
}

#[test]
fn test_content_rule_clauses_are_disjoint() {
    let registry = common::core_registry();
    let result = registry.register_dit_content_rule("( 2.5.6.6 MAY description NOT description )");
    assert!(matches!(
        result,
        Err(SchemaError::Validation(ValidationError::Overlap { .. }))
    ));
}

#[test]
fn test_name_form_requires_structural_class() {
    let registry = common::core_registry();
    common::assert_wrong_kind(
        registry.register_name_form("( 1.2.3.1 NAME 'dcForm' OC dcObject MUST dc )"),
        "OC",
    );
    registry
        .register_name_form("( 1.2.3.1 NAME 'orgForm' OC organization MUST o )")
        .expect("structural class accepted");
}

#[test]
fn test_name_form_needs_oc_and_must() {
    let registry = common::core_registry();
    let without_oc = NameForm {
        oid: "1.2.3.1".to_string(),
        must: vec!["cn".to_string()],
        ..Default::default()
    };
    assert!(matches!(
        registry.register_name_form(without_oc),
        Err(SchemaError::Validation(ValidationError::MissingClause { .. }))
    ));
    assert!(matches!(
        registry.register_name_form("( 1.2.3.1 NAME 'empty' OC person )"),
        Err(SchemaError::Validation(ValidationError::MissingClause { .. }))
    ));
}

#[test]
fn test_structure_rule_self_reference_permitted() {
    let registry = common::directory_registry();
    let rule = registry
        .get::<DitStructureRule>("ouRule")
        .expect("ouRule loaded");
    assert!(rule.is_self_superior());
    assert_eq!(rule.super_rules, vec!["1"]);
}

#[test]
fn test_structure_rule_other_superiors_must_exist() {
    let registry = common::directory_registry();
    common::assert_unknown(
        registry.register_dit_structure_rule("( 3 FORM personNameForm SUP ( 3 $ 9 ) )"),
        "SUP",
        "9",
    );
    registry
        .register_dit_structure_rule("( 3 FORM personNameForm SUP ( 3 $ 2 ) )")
        .expect("self and existing superior");
}

#[test]
fn test_structure_rule_ids_are_unique() {
    let registry = common::directory_registry();
    assert!(matches!(
        registry.register_dit_structure_rule("( 1 NAME 'again' FORM ouNameForm )"),
        Err(SchemaError::Duplicate { .. })
    ));
    assert!(matches!(
        registry.register_dit_structure_rule("( 01 FORM ouNameForm )"),
        Err(SchemaError::Validation(ValidationError::InvalidRuleId { .. }))
    ));
}

#[test]
fn test_object_class_inheritance_by_kind() {
    let registry = common::core_registry();

    // Anything may inherit from an abstract class
    registry
        .register_object_class(
            ObjectClass::new("1.2.3.1", "marker", ObjectClassKind::Auxiliary).with_super("top"),
        )
        .expect("auxiliary under abstract");
    registry
        .register_object_class("( 1.2.3.2 NAME 'shape' SUP top ABSTRACT )")
        .expect("abstract under abstract");

    common::assert_wrong_kind(
        registry.register_object_class("( 1.2.3.3 NAME 'mixed' SUP ( person $ marker ) STRUCTURAL )"),
        "SUP",
    );
    common::assert_wrong_kind(
        registry.register_object_class("( 1.2.3.4 NAME 'addOn' SUP person AUXILIARY )"),
        "SUP",
    );
    common::assert_wrong_kind(
        registry.register_object_class("( 1.2.3.5 NAME 'idea' SUP marker ABSTRACT )"),
        "SUP",
    );

    registry
        .register_object_class("( 1.2.3.6 NAME 'moreMarker' SUP marker AUXILIARY )")
        .expect("auxiliary under auxiliary");
}

#[test]
fn test_diamond_inheritance_registers() {
    let registry = common::core_registry();
    let report = registry
        .load_str(fixtures::DIAMOND)
        .expect("diamond loads");
    assert_eq!(report.registered.object_classes, 4);
}

#[test]
fn test_attribute_type_local_rules() {
    let registry = common::primed_registry();

    let collective_operational = format!(
        "( 1.2.3.1 NAME 'x' SYNTAX {} COLLECTIVE USAGE dSAOperation )",
        DIRECTORY_STRING
    );
    let unmodifiable_user = format!(
        "( 1.2.3.2 NAME 'y' SYNTAX {} NO-USER-MODIFICATION )",
        DIRECTORY_STRING
    );
    for text in [collective_operational, unmodifiable_user] {
        assert!(
            matches!(
                registry.register_attribute_type(text.as_str()),
                Err(SchemaError::Validation(ValidationError::InvalidUsage { .. }))
            ),
            "{}",
            text
        );
    }

    assert!(matches!(
        registry.register_attribute_type("( 1.2.3.3 NAME 'z' )"),
        Err(SchemaError::Validation(ValidationError::MissingClause { .. }))
    ));
    assert_eq!(registry.counters().attribute_types, 0);
}

#[test]
fn test_attribute_rule_clauses_follow_rule_names() {
    let registry = common::primed_registry();

    common::assert_wrong_kind(
        registry.register_attribute_type(format!(
            "( 1.2.3.1 NAME 'misordered' ORDERING caseIgnoreMatch SYNTAX {} )",
            DIRECTORY_STRING
        )),
        "ORDERING",
    );

    // A nameless rule cannot be classified, so any clause may use it
    registry
        .register_matching_rule(format!("( 1.3.6.1.4.1.99999.5.1 SYNTAX {} )", DIRECTORY_STRING))
        .expect("nameless rule");
    registry
        .register_attribute_type(format!(
            "( 1.2.3.2 NAME 'ranked' ORDERING 1.3.6.1.4.1.99999.5.1 \
             SUBSTR 1.3.6.1.4.1.99999.5.1 SYNTAX {} )",
            DIRECTORY_STRING
        ))
        .expect("nameless rule in ORDERING and SUBSTR");
}
