//! Matching rule assertions dispatched through the registry.

use crate::common;
use ldap_schema::schema::{AssertionFn, FirstComponent};
use ldap_schema::{
    AssertionTable, MatchResult, MatchingRule, OrderingOperator, SchemaError, SchemaRegistry,
};

#[test]
fn test_equality_by_name_or_oid() {
    let registry = common::primed_registry();
    assert_eq!(
        registry.equality_match("caseIgnoreMatch", "  Barbara   JENSEN ", "barbara jensen").unwrap(),
        MatchResult::True
    );
    assert_eq!(
        registry.equality_match("2.5.13.5", "Jensen", "jensen").unwrap(),
        MatchResult::False
    );
    assert_eq!(
        registry.equality_match("integerMatch", "0042", "42").unwrap(),
        MatchResult::True
    );
    assert_eq!(
        registry.equality_match("booleanMatch", "TRUE", "perhaps").unwrap(),
        MatchResult::Undefined
    );
}

#[test]
fn test_ordering_operators() {
    let registry = common::primed_registry();
    let ordering = |op, actual, assertion| {
        registry
            .ordering_match("integerOrderingMatch", op, actual, assertion)
            .unwrap()
    };

    assert!(ordering(OrderingOperator::GreaterOrEqual, "10", "10"));
    assert!(ordering(OrderingOperator::GreaterThan, "10", "9"));
    assert!(!ordering(OrderingOperator::LessThan, "10", "9"));
    assert!(ordering(OrderingOperator::LessOrEqual, "-3", "2"));
    // Not an integer: no relation holds
    assert!(!ordering(OrderingOperator::GreaterOrEqual, "ten", "9"));

    assert!(
        registry
            .ordering_match(
                "generalizedTimeOrderingMatch",
                OrderingOperator::LessThan,
                "20240131225859Z",
                "202401312359+0100",
            )
            .unwrap()
    );
}

#[test]
fn test_substrings() {
    let registry = common::primed_registry();
    assert_eq!(
        registry.substrings_match("caseIgnoreSubstringsMatch", "Barbara Jensen", "bar*JEN*").unwrap(),
        MatchResult::True
    );
    assert_eq!(
        registry
            .substrings_match("caseExactSubstringsMatch", "Barbara Jensen", "bar*")
            .unwrap(),
        MatchResult::False
    );
    assert_eq!(
        registry
            .substrings_match("telephoneNumberSubstringsMatch", "+1 408 555-1862", "*5551862")
            .unwrap(),
        MatchResult::True
    );
    assert!(matches!(
        registry.substrings_match("caseIgnoreSubstringsMatch", "x", "no wildcard"),
        Err(SchemaError::Parse(_))
    ));
    assert!(matches!(
        registry.substrings_match("caseIgnoreSubstringsMatch", "anything", "*"),
        Err(SchemaError::Parse(_))
    ));
}

#[test]
fn test_malformed_time_zones_are_undefined() {
    let registry = common::primed_registry();
    assert_eq!(
        registry
            .equality_match("generalizedTimeMatch", "2024010100+aé1", "20240101000000Z")
            .unwrap(),
        MatchResult::Undefined
    );
    assert!(
        !registry
            .ordering_match(
                "uTCTimeOrderingMatch",
                OrderingOperator::LessThan,
                "2401010000-1é2",
                "2401010000Z",
            )
            .unwrap()
    );
}

#[test]
fn test_operation_must_match_rule_kind() {
    let registry = common::primed_registry();

    let as_ordering = registry.ordering_match(
        "caseIgnoreMatch",
        OrderingOperator::GreaterThan,
        "b",
        "a",
    );
    assert!(matches!(
        as_ordering,
        Err(SchemaError::InvalidMatchingRule { ref rule, .. }) if rule == "caseIgnoreMatch"
    ));

    let as_equality = registry.equality_match("caseIgnoreOrderingMatch", "a", "a");
    assert!(matches!(as_equality, Err(SchemaError::InvalidMatchingRule { .. })));

    let as_substrings = registry.substrings_match("caseIgnoreMatch", "abc", "a*");
    assert!(matches!(as_substrings, Err(SchemaError::InvalidMatchingRule { .. })));
}

#[test]
fn test_unregistered_rule_or_function() {
    let registry = common::primed_registry();
    assert!(matches!(
        registry.equality_match("noSuchMatch", "a", "a"),
        Err(SchemaError::InvalidMatchingRule { ref reason, .. }) if reason == "not registered"
    ));

    registry
        .register_matching_rule(MatchingRule::new(
            "1.3.6.1.4.1.99999.5.1",
            "colourMatch",
            common::DIRECTORY_STRING,
        ))
        .expect("rule registers");
    assert!(matches!(
        registry.equality_match("colourMatch", "red", "red"),
        Err(SchemaError::InvalidMatchingRule { ref reason, .. }) if reason == "no assertion function registered"
    ));
}

fn colour_match(actual: &str, assertion: &str) -> MatchResult {
    let canonical = |value: &str| match value.to_ascii_lowercase().as_str() {
        "grey" => "gray".to_string(),
        "colour" => "color".to_string(),
        other => other.to_string(),
    };
    (canonical(actual) == canonical(assertion)).into()
}

#[test]
fn test_caller_supplied_assertion_function() {
    let mut assertions = AssertionTable::standard();
    assertions.insert("1.3.6.1.4.1.99999.5.1", AssertionFn::Equality(colour_match));

    let registry = SchemaRegistry::builder()
        .with_assertions(assertions)
        .build()
        .expect("Failed to build registry");
    registry
        .register_matching_rule(format!(
            "( 1.3.6.1.4.1.99999.5.1 NAME 'colourMatch' SYNTAX {} )",
            common::DIRECTORY_STRING
        ))
        .expect("rule registers");

    assert_eq!(
        registry.equality_match("colourMatch", "Grey", "gray").unwrap(),
        MatchResult::True
    );
    assert_eq!(
        registry.equality_match("colourMatch", "red", "gray").unwrap(),
        MatchResult::False
    );
}

/// A SEQUENCE-shaped value whose first component is its identifier.
struct ControlValue {
    oid: String,
}

impl FirstComponent for ControlValue {
    fn first_component(&self) -> &str {
        &self.oid
    }
}

#[test]
fn test_first_component_match() {
    let registry = common::primed_registry();

    let rule = registry.get::<MatchingRule>("caseIgnoreMatch").unwrap();
    assert_eq!(
        registry.first_component_match("objectIdentifierFirstComponentMatch", &rule, "2.5.13.2").unwrap(),
        MatchResult::True
    );

    let value = ControlValue {
        oid: "2.5.6.6".to_string(),
    };
    assert_eq!(
        registry.first_component_match("objectIdentifierFirstComponentMatch", &value, "2.5.6.7").unwrap(),
        MatchResult::False
    );

    assert_eq!(
        registry.first_component_match(
            "directoryStringFirstComponentMatch",
            "( 'Jensen' 'ignored' )",
            "JENSEN",
        ).unwrap(),
        MatchResult::True
    );
    assert_eq!(
        registry.first_component_match("integerFirstComponentMatch", "( 42 $ 7 )", "42").unwrap(),
        MatchResult::True
    );
}
