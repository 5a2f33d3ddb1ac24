//! Error types for schema registry operations.
//!
//! This module provides the error hierarchy for parsing, validating and
//! registering LDAP schema definitions, and for dispatching matching-rule
//! assertions. Every `register_*` call is all-or-nothing: when one of these
//! errors is returned, no collection has been touched.

use crate::schema::types::DefinitionKind;

/// Main error type for schema registry operations.
///
/// This enum covers every failure a caller of the registry can observe,
/// wrapping the more specific [`ParseError`] and [`ValidationError`] types.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Input could not be coerced into the expected definition or text
    #[error("Bad input type, expected {expected}: {message}")]
    BadType { expected: String, message: String },

    /// Malformed definition text
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Local or referential validation failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Primary identifier already registered for this kind
    #[error("Duplicate registration: {kind} '{id}' already exists")]
    Duplicate { kind: DefinitionKind, id: String },

    /// Assertion requested from a rule that cannot serve it
    #[error("Invalid matching rule '{rule}': {reason}")]
    InvalidMatchingRule { rule: String, reason: String },

    /// A built-in definition failed to load while priming the registry
    #[error("Failed to load built-in {kind} '{id}': {source}")]
    Builtin {
        kind: DefinitionKind,
        id: String,
        #[source]
        source: Box<SchemaError>,
    },

    /// A unit of a bulk load failed
    #[error("Definition #{index} ({kind}) failed: {source}")]
    Ingest {
        index: usize,
        kind: DefinitionKind,
        #[source]
        source: Box<SchemaError>,
    },

    /// JSON export errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while tokenizing and parsing definition text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input ended before the definition was complete
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// Definition does not start with '('
    #[error("Expected '(' at start of definition, found '{found}'")]
    ExpectedOpenParen { found: String },

    /// No identifier followed the opening paren
    #[error("Missing identifier after '('")]
    MissingIdentifier,

    /// Keyword not valid for this kind of definition
    #[error("Unknown keyword '{keyword}' in {kind} definition")]
    UnknownKeyword {
        kind: DefinitionKind,
        keyword: String,
    },

    /// Parenthesised list or definition was never closed
    #[error("Unbalanced parentheses")]
    UnbalancedParens,

    /// Quoted string without its closing quote
    #[error("Unterminated quoted string")]
    UnterminatedQuote,

    /// Keyword value outside its allowed set
    #[error("Invalid value '{value}' for {clause}")]
    InvalidValue { clause: String, value: String },

    /// Trailing `{N}` on SYNTAX is not a non-negative integer
    #[error("Invalid minimum upper bound '{value}'")]
    InvalidBound { value: String },

    /// Two mutually exclusive flags were both given
    #[error("'{first}' and '{second}' are mutually exclusive")]
    ConflictingFlags { first: String, second: String },

    /// Definition label not recognised
    #[error("Unknown definition label '{label}'")]
    UnknownLabel { label: String },

    /// Keyword followed by a list with no values
    #[error("Empty value list in {kind} definition")]
    EmptyList { kind: DefinitionKind },
}

/// Validation errors for schema definitions and directory entries.
///
/// Local variants describe a definition that is malformed on its own;
/// referential variants describe a definition that names something the
/// registry does not hold (or holds with the wrong kind). The remaining
/// variants are produced when validating an entry against the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Malformed numeric OID
    #[error("Invalid numeric OID '{value}' in {field}")]
    InvalidOid { field: String, value: String },

    /// Malformed OID-or-descriptor reference
    #[error("Invalid OID or descriptor '{value}' in {field}")]
    InvalidDescriptor { field: String, value: String },

    /// Malformed structure rule identifier
    #[error("Invalid rule ID '{value}'")]
    InvalidRuleId { value: String },

    /// Mutually exclusive fields both set
    #[error("'{first}' and '{second}' are mutually exclusive")]
    ConflictingFlags { first: String, second: String },

    /// Attribute listed in two clauses that must be disjoint
    #[error("'{attribute}' appears in both {first} and {second}")]
    Overlap {
        attribute: String,
        first: String,
        second: String,
    },

    /// Mandatory clause absent
    #[error("Missing required clause {clause}")]
    MissingClause { clause: String },

    /// Vendor extension without values
    #[error("Extension {keyword} has no values")]
    EmptyExtension { keyword: String },

    /// Usage not allowed in combination with another field
    #[error("{field} requires {expected} usage, found {actual}")]
    InvalidUsage {
        field: String,
        expected: String,
        actual: String,
    },

    /// X-PATTERN that does not compile
    #[error("Invalid X-PATTERN '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    /// Reference to a definition the registry does not hold
    #[error("Unknown {clause} '{value}'")]
    Unknown { clause: String, value: String },

    /// Reference resolves to a definition of the wrong kind
    #[error("{clause} '{value}' is {actual}, expected {expected}")]
    WrongKind {
        clause: String,
        value: String,
        expected: String,
        actual: String,
    },

    /// Entry has no objectClass values
    #[error("Entry '{dn}' has no objectClass")]
    MissingObjectClass { dn: String },

    /// Entry has no structural object class
    #[error("Entry '{dn}' has no structural object class")]
    MissingStructuralClass { dn: String },

    /// Entry has more than one unrelated structural class
    #[error("Entry '{dn}' has multiple structural object classes: {classes:?}")]
    MultipleStructuralClasses { dn: String, classes: Vec<String> },

    /// Auxiliary class not permitted by the DIT content rule
    #[error("Auxiliary class '{class}' is not permitted for entry '{dn}'")]
    AuxiliaryNotPermitted { dn: String, class: String },

    /// Required attribute is missing
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Attribute neither required nor allowed by the entry's classes
    #[error("Attribute '{attribute}' is not allowed by the entry's object classes")]
    AttributeNotAllowed { attribute: String },

    /// Attribute excluded by a DIT content rule NOT clause
    #[error("Attribute '{attribute}' is precluded by the DIT content rule")]
    AttributePrecluded { attribute: String },

    /// SINGLE-VALUE attribute with several values
    #[error("Attribute '{attribute}' must be single-valued")]
    ExpectedSingleValue { attribute: String },

    /// Value rejected by the attribute's syntax
    #[error("Attribute '{attribute}' has invalid value '{value}' for syntax {syntax}")]
    InvalidValue {
        attribute: String,
        value: String,
        syntax: String,
    },
}

// Convenience methods for creating common errors
impl SchemaError {
    /// Create a duplicate registration error
    pub fn duplicate(kind: DefinitionKind, id: impl Into<String>) -> Self {
        Self::Duplicate { kind, id: id.into() }
    }

    /// Create an invalid matching rule error
    pub fn invalid_matching_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMatchingRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Create a bad type error
    pub fn bad_type(expected: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadType {
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports a reference the registry could not resolve.
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            Self::Validation(ValidationError::Unknown { .. } | ValidationError::WrongKind { .. })
        )
    }
}

impl ValidationError {
    /// Create an unknown reference error
    pub fn unknown(clause: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Unknown {
            clause: clause.into(),
            value: value.into(),
        }
    }

    /// Create a wrong kind error
    pub fn wrong_kind(
        clause: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::WrongKind {
            clause: clause.into(),
            value: value.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a missing clause error
    pub fn missing_clause(clause: impl Into<String>) -> Self {
        Self::MissingClause {
            clause: clause.into(),
        }
    }

    /// Create an overlap error
    pub fn overlap(
        attribute: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::Overlap {
            attribute: attribute.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ParseResult<T> = Result<T, ParseError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
