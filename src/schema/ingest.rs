//! Bulk loading of schema definition text.
//!
//! A blob holds any number of definitions, each introduced by a kind label
//! (`attributeTypes:`, `objectClass`, ...) at the start of a line and
//! optionally continued on following lines. `#` comment lines are dropped,
//! a blank line ends the current definition, and LDIF lines that are not
//! definitions are skipped. Units are registered in the order given.

use super::registry::SchemaRegistry;
use super::subschema::Counters;
use super::types::DefinitionKind;
use crate::error::{SchemaError, SchemaResult};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Behaviour of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestOptions {
    /// Record a failing unit and keep going instead of stopping.
    pub continue_on_error: bool,
}

/// One labelled definition cut out of a blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionUnit {
    /// Position of the unit in the blob, starting at 1.
    pub index: usize,
    pub kind: DefinitionKind,
    /// Definition text with line breaks collapsed, label removed.
    pub text: String,
}

/// A unit that failed to register.
#[derive(Debug)]
pub struct LoadFailure {
    pub index: usize,
    pub kind: DefinitionKind,
    pub error: SchemaError,
}

/// Outcome of a bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Units registered, per kind.
    pub registered: Counters,
    /// Matching rule use units, which are derived rather than registered.
    pub skipped: usize,
    /// Units that failed; only populated when continuing on error.
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Split `text` into labelled definition units.
pub fn split_units(text: &str) -> Vec<DefinitionUnit> {
    let mut units = Vec::new();
    let mut current: Option<(DefinitionKind, String)> = None;

    let mut close = |current: &mut Option<(DefinitionKind, String)>| {
        if let Some((kind, text)) = current.take() {
            if !text.trim().is_empty() {
                trace!("Split {} unit #{}", kind, units.len() + 1);
                units.push(DefinitionUnit {
                    index: units.len() + 1,
                    kind,
                    text: text.trim().to_string(),
                });
            }
        }
    };

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if trimmed.is_empty() || trimmed == "-" {
            close(&mut current);
            continue;
        }

        let continued = line.starts_with(char::is_whitespace);
        if !continued {
            let word_end = trimmed
                .find(|c: char| c.is_whitespace() || c == ':' || c == '(')
                .unwrap_or(trimmed.len());
            let (word, rest) = trimmed.split_at(word_end);

            if let Some(kind) = DefinitionKind::from_label(word) {
                close(&mut current);
                let rest = rest.trim_start();
                let rest = rest.strip_prefix(':').unwrap_or(rest).trim_start();
                if rest.is_empty() || rest.starts_with('(') {
                    current = Some((kind, rest.to_string()));
                }
                continue;
            }

            if rest.starts_with(':') {
                // LDIF attribute line that is not a definition
                close(&mut current);
                continue;
            }
        }

        if let Some((_, text)) = current.as_mut() {
            text.push(' ');
            text.push_str(trimmed);
        }
    }
    close(&mut current);

    units
}

impl SchemaRegistry {
    /// Load every definition in a UTF-8 byte blob.
    pub fn load_bytes(&self, bytes: &[u8]) -> SchemaResult<LoadReport> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| SchemaError::bad_type("UTF-8 definition text", e.to_string()))?;
        self.load_str(text)
    }

    /// Load every definition in `text`, in order.
    ///
    /// # Errors
    ///
    /// Unless the registry continues on error, the first failing unit aborts
    /// the load with [`SchemaError::Ingest`]; units before it stay registered.
    pub fn load_str(&self, text: &str) -> SchemaResult<LoadReport> {
        let mut report = LoadReport::default();

        for unit in split_units(text) {
            if unit.kind == DefinitionKind::MatchingRuleUse {
                debug!("Skipping derived matching rule use #{}", unit.index);
                report.skipped += 1;
                continue;
            }

            match self.register_unit(unit.kind, &unit.text) {
                Ok(()) => report.registered.increment(unit.kind),
                Err(error) if self.ingest.continue_on_error => {
                    warn!("Skipping {} #{}: {}", unit.kind, unit.index, error);
                    report.failures.push(LoadFailure {
                        index: unit.index,
                        kind: unit.kind,
                        error,
                    });
                }
                Err(error) => {
                    return Err(SchemaError::Ingest {
                        index: unit.index,
                        kind: unit.kind,
                        source: Box::new(error),
                    });
                }
            }
        }

        Ok(report)
    }

    fn register_unit(&self, kind: DefinitionKind, text: &str) -> SchemaResult<()> {
        match kind {
            DefinitionKind::LdapSyntax => self.register_ldap_syntax(text),
            DefinitionKind::MatchingRule => self.register_matching_rule(text),
            DefinitionKind::AttributeType => self.register_attribute_type(text),
            DefinitionKind::ObjectClass => self.register_object_class(text),
            DefinitionKind::DitContentRule => self.register_dit_content_rule(text),
            DefinitionKind::NameForm => self.register_name_form(text),
            DefinitionKind::DitStructureRule => self.register_dit_structure_rule(text),
            DefinitionKind::MatchingRuleUse => Err(SchemaError::bad_type(
                "registrable definition",
                "matching rule uses are derived from attribute types",
            )),
        }
    }
}
