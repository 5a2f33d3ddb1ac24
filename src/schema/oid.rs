//! Well-formedness checks for schema identifiers.
//!
//! These answer "is this a plausible identifier", never "does it exist":
//! existence is checked by the registry against its collections.

use crate::error::{ValidationError, ValidationResult};

/// Whether `value` is a dotted-decimal numeric OID (`number 1*( "." number )`).
pub fn is_numeric_oid(value: &str) -> bool {
    let mut arcs = 0;
    for arc in value.split('.') {
        if !is_number(arc) {
            return false;
        }
        arcs += 1;
    }
    arcs >= 2
}

/// Whether `value` is a descriptor: a letter followed by letters, digits,
/// hyphens or underscores.
pub fn is_descriptor(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

/// Whether `value` is either a numeric OID or a descriptor.
pub fn is_oid(value: &str) -> bool {
    is_numeric_oid(value) || is_descriptor(value)
}

/// Whether `value` is a structure rule identifier.
pub fn is_rule_id(value: &str) -> bool {
    is_number(value)
}

fn is_number(value: &str) -> bool {
    match value.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        digits => digits.iter().all(u8::is_ascii_digit),
    }
}

pub(crate) fn check_numeric_oid(field: &str, value: &str) -> ValidationResult<()> {
    if is_numeric_oid(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOid {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

pub(crate) fn check_oid(field: &str, value: &str) -> ValidationResult<()> {
    if is_oid(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDescriptor {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

pub(crate) fn check_oids(field: &str, values: &[String]) -> ValidationResult<()> {
    values.iter().try_for_each(|value| check_oid(field, value))
}

pub(crate) fn check_names(values: &[String]) -> ValidationResult<()> {
    for value in values {
        if !is_descriptor(value) {
            return Err(ValidationError::InvalidDescriptor {
                field: "NAME".to_string(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_rule_id(value: &str) -> ValidationResult<()> {
    if is_rule_id(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidRuleId {
            value: value.to_string(),
        })
    }
}
