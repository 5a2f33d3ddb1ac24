//! LDAP subschema definitions, parsing and the schema registry.
//!
//! This module provides the tokenizer and parsers for the RFC 4512 schema
//! definition language, one structured type per definition kind, and the
//! [`SchemaRegistry`] that enforces referential integrity across them.
//!
//! # Key Types
//!
//! - [`SchemaRegistry`] - Append-only registry guarding a [`Subschema`]
//! - [`AttributeType`], [`ObjectClass`] and the other definition kinds
//! - [`AssertionTable`] - Matching rule assertion functions keyed by OID
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::schema::{ObjectClass, SchemaRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! registry.load_str(ldap_schema::schema::embedded::core_schema())?;
//!
//! let person = registry.get::<ObjectClass>("person").unwrap();
//! let schema = registry.read();
//! let must: Vec<&str> = schema.all_must(&person).iter().map(|a| a.oid.as_str()).collect();
//! assert!(must.contains(&"2.5.4.3"));
//! # Ok(())
//! # }
//! ```

pub mod definitions;
pub mod embedded;
pub mod entry;
pub mod ingest;
pub mod matching;
pub mod oid;
pub(crate) mod parser;
pub mod registry;
pub mod subschema;
pub mod tokenizer;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use definitions::{
    AttributeType, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule, MatchingRuleUse,
    NameForm, ObjectClass,
};
pub use entry::Entry;
pub use ingest::{DefinitionUnit, IngestOptions, LoadFailure, LoadReport, split_units};
pub use matching::{
    AssertionFn, AssertionTable, FirstComponent, MatchResult, MatchingRuleKind, OrderingOperator,
    SubstringAssertion,
};
pub use registry::{DefinitionInput, RegistryConfig, SchemaRegistry, SchemaRegistryBuilder};
pub use subschema::{Collected, Collection, Counters, Subschema};
pub use types::{Definition, DefinitionKind, Extensions, ObjectClassKind, Usage};
