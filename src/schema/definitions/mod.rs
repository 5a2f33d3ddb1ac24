//! Structured schema definitions, one module per kind.
//!
//! Every type parses from the textual definition language through
//! `FromStr`, writes its canonical form through `Display`, and checks its
//! own local validity through [`Definition::validate`](super::types::Definition::validate).

pub mod attribute_type;
pub mod content_rule;
pub mod ldap_syntax;
pub mod matching_rule;
pub mod matching_rule_use;
pub mod name_form;
pub mod object_class;
pub mod structure_rule;

pub use attribute_type::AttributeType;
pub use content_rule::DitContentRule;
pub use ldap_syntax::LdapSyntax;
pub use matching_rule::MatchingRule;
pub use matching_rule_use::MatchingRuleUse;
pub use name_form::NameForm;
pub use object_class::ObjectClass;
pub use structure_rule::DitStructureRule;

use crate::error::{ValidationError, ValidationResult};

/// Reject the first value present in both lists, ignoring ASCII case.
pub(crate) fn check_disjoint(
    first_clause: &str,
    first: &[String],
    second_clause: &str,
    second: &[String],
) -> ValidationResult<()> {
    match first
        .iter()
        .find(|value| second.iter().any(|other| other.eq_ignore_ascii_case(value)))
    {
        Some(value) => Err(ValidationError::overlap(value, first_clause, second_clause)),
        None => Ok(()),
    }
}
