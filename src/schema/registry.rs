//! Schema registry construction, configuration and read access.
//!
//! This module provides the [`SchemaRegistry`], which owns one [`Subschema`]
//! behind a reader-writer lock. Registration lives in
//! [`validation`](super::validation), assertion dispatch in
//! [`matching`](super::matching) and bulk loading in [`ingest`](super::ingest);
//! all of them are methods on the registry defined here.

use super::definitions::LdapSyntax;
use super::embedded;
use super::ingest::IngestOptions;
use super::matching::AssertionTable;
use super::subschema::{Collected, Counters, Subschema};
use super::types::{Definition, DefinitionKind};
use crate::error::{SchemaError, SchemaResult, ValidationError};
use log::info;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Input accepted by every `register_*` operation.
///
/// A definition is either already structured or still in its textual
/// form; bytes must be UTF-8 text.
#[derive(Debug, Clone)]
pub enum DefinitionInput<T> {
    Structured(T),
    Text(String),
    Bytes(Vec<u8>),
}

impl<T: Definition> DefinitionInput<T> {
    /// Coerce the input into a structured definition, parsing text.
    pub fn into_definition(self) -> SchemaResult<T> {
        match self {
            Self::Structured(definition) => Ok(definition),
            Self::Text(text) => Ok(text.parse()?),
            Self::Bytes(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|e| SchemaError::bad_type(T::KIND.to_string(), e.to_string()))?;
                Ok(text.parse()?)
            }
        }
    }
}

impl<T: Definition> From<T> for DefinitionInput<T> {
    fn from(definition: T) -> Self {
        Self::Structured(definition)
    }
}

impl<T: Definition> From<&str> for DefinitionInput<T> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<T: Definition> From<String> for DefinitionInput<T> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Definition> From<&[u8]> for DefinitionInput<T> {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<T: Definition> From<Vec<u8>> for DefinitionInput<T> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Configuration applied when a registry is built.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Prime the registry with the standard syntaxes and matching rules.
    pub load_builtins: bool,

    /// Assertion functions, keyed by matching rule OID.
    pub assertions: AssertionTable,

    /// Behaviour of bulk loads.
    pub ingest: IngestOptions,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            load_builtins: true,
            assertions: AssertionTable::standard(),
            ingest: IngestOptions::default(),
        }
    }
}

/// Builder for configuring and creating schema registries.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::{AssertionTable, SchemaRegistry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Primed with the standard syntaxes and matching rules
/// let registry = SchemaRegistry::builder().build()?;
///
/// // Empty, lenient bulk loads, no assertion functions
/// let registry = SchemaRegistry::builder()
///     .with_builtins(false)
///     .with_assertions(AssertionTable::new())
///     .continue_on_error(true)
///     .build()?;
/// assert_eq!(registry.counters().total, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    config: RegistryConfig,
}

impl SchemaRegistryBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to prime the built-in syntaxes and matching rules.
    pub fn with_builtins(mut self, load_builtins: bool) -> Self {
        self.config.load_builtins = load_builtins;
        self
    }

    /// Replace the assertion table used by the matching operations.
    pub fn with_assertions(mut self, assertions: AssertionTable) -> Self {
        self.config.assertions = assertions;
        self
    }

    /// Set the bulk-load options.
    pub fn with_ingest_options(mut self, ingest: IngestOptions) -> Self {
        self.config.ingest = ingest;
        self
    }

    /// Keep loading after a unit of a bulk load fails.
    pub fn continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.config.ingest.continue_on_error = continue_on_error;
        self
    }

    /// Build the configured registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Builtin`] if a built-in definition fails to
    /// load, which means the crate itself is broken.
    pub fn build(self) -> SchemaResult<SchemaRegistry> {
        SchemaRegistry::with_config(self.config)
    }
}

/// Registry of LDAP schema definitions.
///
/// The registry is append-only. Every registration validates the
/// definition and its references and appends it under one exclusive lock;
/// every query takes the shared lock. Share it between threads with `Arc`.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::{AttributeType, SchemaRegistry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = SchemaRegistry::new()?;
/// registry.register_attribute_type(
///     "( 2.5.4.41 NAME 'name' EQUALITY caseIgnoreMatch \
///        SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
/// )?;
/// registry.register_attribute_type("( 2.5.4.3 NAME ( 'cn' 'commonName' ) SUP name )")?;
///
/// let cn = registry.get::<AttributeType>("commonName").unwrap();
/// assert_eq!(cn.oid, "2.5.4.3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaRegistry {
    subschema: RwLock<Subschema>,
    pub(crate) assertions: AssertionTable,
    pub(crate) ingest: IngestOptions,
}

impl SchemaRegistry {
    /// Create a registry primed with the built-in syntaxes and matching rules.
    pub fn new() -> SchemaResult<Self> {
        Self::builder().build()
    }

    /// Create a registry with no definitions at all.
    pub fn empty() -> Self {
        let config = RegistryConfig::default();
        Self {
            subschema: RwLock::new(Subschema::default()),
            assertions: config.assertions,
            ingest: config.ingest,
        }
    }

    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::new()
    }

    /// Create a registry from an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> SchemaResult<Self> {
        let registry = Self {
            subschema: RwLock::new(Subschema::default()),
            assertions: config.assertions,
            ingest: config.ingest,
        };
        if config.load_builtins {
            registry.load_builtins()?;
        }
        Ok(registry)
    }

    fn load_builtins(&self) -> SchemaResult<()> {
        for text in embedded::LDAP_SYNTAXES {
            self.register_ldap_syntax(*text)
                .map_err(|e| builtin_failure(DefinitionKind::LdapSyntax, text, e))?;
        }
        for text in embedded::MATCHING_RULES {
            self.register_matching_rule(*text)
                .map_err(|e| builtin_failure(DefinitionKind::MatchingRule, text, e))?;
        }

        let counters = self.counters();
        info!(
            "Primed schema registry with {} syntaxes and {} matching rules",
            counters.ldap_syntaxes, counters.matching_rules
        );
        Ok(())
    }

    /// Shared access to the current subschema.
    ///
    /// Registrations block while the guard is held.
    pub fn read(&self) -> RwLockReadGuard<'_, Subschema> {
        // Mutations are validated before they touch the subschema, so a
        // poisoned lock still guards consistent data.
        self.subschema
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Subschema> {
        self.subschema
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Element counts of each collection and their sum.
    pub fn counters(&self) -> Counters {
        self.read().counters()
    }

    /// First definition of kind `T` identified by `term`.
    ///
    /// `term` is a primary identifier or any name (case-insensitive); for
    /// syntaxes it may also be the description.
    pub fn get<T: Collected>(&self, term: &str) -> Option<T> {
        self.read().collection::<T>().get(term).cloned()
    }

    /// Insertion index of the first definition of kind `T` identified by `term`.
    pub fn index_of<T: Collected>(&self, term: &str) -> Option<usize> {
        self.read().collection::<T>().index_of(term)
    }

    /// Check `value` against the `X-PATTERN` of the syntax identified by `syntax`.
    ///
    /// Syntaxes without a pattern accept every value.
    pub fn verify_syntax(&self, syntax: &str, value: &str) -> SchemaResult<bool> {
        let schema = self.read();
        let syntax = schema
            .collection::<LdapSyntax>()
            .get(syntax)
            .ok_or_else(|| ValidationError::unknown("SYNTAX", syntax))?;
        Ok(syntax.verify(value)?)
    }

    /// Snapshot of every definition as pretty-printed JSON.
    pub fn export_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(&*self.read())?)
    }

    /// Snapshot of every definition in the textual definition language.
    pub fn export_definitions(&self) -> String {
        self.read().to_definitions()
    }
}

fn builtin_failure(kind: DefinitionKind, text: &str, source: SchemaError) -> SchemaError {
    let id = text
        .split_whitespace()
        .find(|token| *token != "(")
        .unwrap_or_default()
        .to_string();
    SchemaError::Builtin {
        kind,
        id,
        source: Box::new(source),
    }
}
