//! LDAP/X.500 subschema registry for Rust.
//!
//! Parses the RFC 4512 schema definition language, keeps the eight kinds of
//! schema definition in one registry that rejects any registration breaking
//! referential integrity, and dispatches matching rule assertions by OID.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - Validating, append-only registry of definitions
//! - [`Definition`] - Trait shared by every definition kind
//! - [`AssertionTable`] - Equality, ordering and substring functions by OID
//!
//! # Quick Start
//!
//! ```rust
//! use ldap_schema::{AttributeType, MatchingRuleUse, SchemaRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! registry.register_attribute_type(
//!     "attributeType: ( 2.5.4.3 NAME 'cn' EQUALITY caseIgnoreMatch \
//!      SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
//! )?;
//!
//! assert_eq!(registry.index_of::<AttributeType>("CN"), Some(0));
//! let uses = registry.get::<MatchingRuleUse>("caseIgnoreMatch").unwrap();
//! assert_eq!(uses.applies, vec!["cn"]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{
    ParseError, ParseResult, SchemaError, SchemaResult, ValidationError, ValidationResult,
};
pub use schema::{
    AssertionTable, AttributeType, Counters, Definition, DefinitionInput, DefinitionKind,
    DitContentRule, DitStructureRule, Entry, LdapSyntax, LoadReport, MatchResult, MatchingRule,
    MatchingRuleUse, NameForm, ObjectClass, ObjectClassKind, OrderingOperator, SchemaRegistry,
    SchemaRegistryBuilder, Subschema, Usage,
};
