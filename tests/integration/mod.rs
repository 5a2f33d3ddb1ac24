//! Integration tests for the schema registry.
//!
//! ## Test Organization
//!
//! - `registry_properties` - Referential integrity, duplicate rejection,
//!   identity lookup, inheritance and matching rule use synthesis
//! - `kind_rules` - Structural checks specific to content rules, name
//!   forms, structure rules and object class kinds
//! - `traversal` - Superclass chains, inherited MUST/MAY, structure rule
//!   navigation and effective matching rules
//! - `round_trip` - Canonical serialization parses back to the same value
//! - `ingestion` - Bulk loading of schema files and LDIF subschema text
//! - `entry_validation` - Entries checked against a loaded schema
//! - `matching` - Assertion dispatch through the registry

pub mod ingestion;
pub mod kind_rules;
pub mod matching;
pub mod registry_properties;
pub mod round_trip;
