//! Matching rule assertions.
//!
//! A matching rule is classified as equality, ordering or substring by its
//! principal name, and assertion requests are routed by OID to an
//! [`AssertionTable`]. [`AssertionTable::standard`] provides functions for
//! the built-in rules; callers may add their own.

use super::definitions::MatchingRule;
use super::registry::SchemaRegistry;
use super::types::Definition;
use crate::error::{ParseError, SchemaError, SchemaResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Role of a matching rule, derived from its principal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingRuleKind {
    Equality,
    Ordering,
    Substring,
}

impl MatchingRuleKind {
    /// Ordering if the principal name contains "ordering", substring if it
    /// contains "substring", equality otherwise.
    pub fn of(rule: &MatchingRule) -> Self {
        let name = rule.principal_name().to_ascii_lowercase();
        if name.contains("ordering") {
            Self::Ordering
        } else if name.contains("substring") {
            Self::Substring
        } else {
            Self::Equality
        }
    }
}

impl fmt::Display for MatchingRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equality => "equality",
            Self::Ordering => "ordering",
            Self::Substring => "substring",
        })
    }
}

/// Three-valued result of an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    True,
    False,
    /// One of the values is not valid for the rule's syntax.
    Undefined,
}

impl MatchResult {
    pub fn is_true(self) -> bool {
        self == Self::True
    }
}

impl From<bool> for MatchResult {
    fn from(matched: bool) -> Self {
        if matched { Self::True } else { Self::False }
    }
}

/// Relation requested from an ordering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingOperator {
    GreaterOrEqual,
    LessOrEqual,
    GreaterThan,
    LessThan,
}

impl OrderingOperator {
    /// Whether `ordering` (actual compared to assertion) satisfies the operator.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::LessOrEqual => ordering != Ordering::Greater,
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::LessThan => ordering == Ordering::Less,
        }
    }
}

/// Substring filter value: `initial*any*...*final`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringAssertion {
    pub initial: Option<String>,
    pub any: Vec<String>,
    #[serde(rename = "final")]
    pub final_: Option<String>,
}

impl SubstringAssertion {
    /// Whether `value` matches once both it and every component are
    /// transformed by `normalize`.
    pub fn matches_with(&self, value: &str, normalize: fn(&str) -> String) -> bool {
        let value = normalize(value);
        let mut rest = value.as_str();

        if let Some(initial) = &self.initial {
            let initial = normalize(initial);
            match rest.strip_prefix(initial.as_str()) {
                Some(tail) => rest = tail,
                None => return false,
            }
        }

        for any in &self.any {
            let any = normalize(any);
            match rest.find(any.as_str()) {
                Some(at) => rest = &rest[at + any.len()..],
                None => return false,
            }
        }

        match &self.final_ {
            Some(final_) => rest.ends_with(normalize(final_).as_str()),
            None => true,
        }
    }
}

impl FromStr for SubstringAssertion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('*').collect();
        if parts.len() < 2 {
            return Err(ParseError::InvalidValue {
                clause: "SUBSTR".to_string(),
                value: s.to_string(),
            });
        }

        let non_empty = |part: &str| (!part.is_empty()).then(|| part.to_string());
        let last = parts.len() - 1;
        let assertion = Self {
            initial: non_empty(parts[0]),
            any: parts[1..last].iter().filter_map(|part| non_empty(part)).collect(),
            final_: non_empty(parts[last]),
        };
        if assertion.initial.is_none() && assertion.any.is_empty() && assertion.final_.is_none() {
            return Err(ParseError::InvalidValue {
                clause: "SUBSTR".to_string(),
                value: s.to_string(),
            });
        }
        Ok(assertion)
    }
}

/// Equality assertion: actual value, assertion value.
pub type EqualityFn = fn(&str, &str) -> MatchResult;
/// Ordering assertion: how the actual value compares to the assertion
/// value, `None` when either is invalid.
pub type OrderingFn = fn(&str, &str) -> Option<Ordering>;
/// Substring assertion: actual value, parsed assertion.
pub type SubstringsFn = fn(&str, &SubstringAssertion) -> MatchResult;

/// An assertion function of one of the three kinds.
#[derive(Clone, Copy)]
pub enum AssertionFn {
    Equality(EqualityFn),
    Ordering(OrderingFn),
    Substrings(SubstringsFn),
}

impl AssertionFn {
    pub fn kind(&self) -> MatchingRuleKind {
        match self {
            Self::Equality(_) => MatchingRuleKind::Equality,
            Self::Ordering(_) => MatchingRuleKind::Ordering,
            Self::Substrings(_) => MatchingRuleKind::Substring,
        }
    }
}

impl fmt::Debug for AssertionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssertionFn::{}", self.kind())
    }
}

/// Assertion functions keyed by matching rule OID.
#[derive(Clone, Default)]
pub struct AssertionTable {
    functions: HashMap<String, AssertionFn>,
}

impl fmt::Debug for AssertionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionTable")
            .field("rules", &self.functions.len())
            .finish()
    }
}

impl AssertionTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, oid: impl Into<String>, function: AssertionFn) -> Option<AssertionFn> {
        self.functions.insert(oid.into(), function)
    }

    pub fn get(&self, oid: &str) -> Option<AssertionFn> {
        self.functions.get(oid).copied()
    }

    pub fn contains(&self, oid: &str) -> bool {
        self.functions.contains_key(oid)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Functions for the built-in matching rules.
    pub fn standard() -> Self {
        use AssertionFn::{Equality, Ordering, Substrings};

        let entries: [(&str, AssertionFn); 41] = [
            ("2.5.13.0", Equality(object_identifier_match)),
            ("2.5.13.1", Equality(distinguished_name_match)),
            ("2.5.13.2", Equality(case_ignore_match)),
            ("2.5.13.3", Ordering(case_ignore_ordering)),
            ("2.5.13.4", Substrings(case_ignore_substrings)),
            ("2.5.13.5", Equality(case_exact_match)),
            ("2.5.13.6", Ordering(case_exact_ordering)),
            ("2.5.13.7", Substrings(case_exact_substrings)),
            ("2.5.13.8", Equality(numeric_string_match)),
            ("2.5.13.9", Ordering(numeric_string_ordering)),
            ("2.5.13.10", Substrings(numeric_string_substrings)),
            ("2.5.13.11", Equality(case_ignore_list_match)),
            ("2.5.13.12", Substrings(case_ignore_list_substrings)),
            ("2.5.13.13", Equality(boolean_match)),
            ("2.5.13.14", Equality(integer_match)),
            ("2.5.13.15", Ordering(integer_ordering)),
            ("2.5.13.16", Equality(bit_string_match)),
            ("2.5.13.17", Equality(octet_string_match)),
            ("2.5.13.18", Ordering(octet_string_ordering)),
            ("2.5.13.20", Equality(telephone_number_match)),
            ("2.5.13.21", Substrings(telephone_number_substrings)),
            ("2.5.13.22", Equality(case_ignore_match)),
            ("2.5.13.23", Equality(unique_member_match)),
            ("2.5.13.24", Equality(case_ignore_match)),
            ("2.5.13.25", Equality(utc_time_match)),
            ("2.5.13.26", Ordering(utc_time_ordering)),
            ("2.5.13.27", Equality(generalized_time_match)),
            ("2.5.13.28", Ordering(generalized_time_ordering)),
            ("2.5.13.29", Equality(integer_match)),
            ("2.5.13.30", Equality(object_identifier_match)),
            ("2.5.13.31", Equality(case_ignore_match)),
            ("2.5.13.32", Equality(word_match)),
            ("2.5.13.33", Equality(word_match)),
            ("1.3.6.1.4.1.1466.109.114.1", Equality(case_exact_match)),
            ("1.3.6.1.4.1.1466.109.114.2", Equality(case_ignore_match)),
            ("1.3.6.1.4.1.1466.109.114.3", Substrings(case_ignore_substrings)),
            ("1.3.6.1.1.16.2", Equality(uuid_match)),
            ("1.3.6.1.1.16.3", Ordering(uuid_ordering)),
            ("1.3.6.1.4.1.4203.1.2.1", Substrings(case_exact_substrings)),
            ("1.2.840.113556.1.4.803", Equality(integer_bit_and_match)),
            ("1.2.840.113556.1.4.804", Equality(integer_bit_or_match)),
        ];

        Self {
            functions: entries
                .into_iter()
                .map(|(oid, function)| (oid.to_string(), function))
                .collect(),
        }
    }
}

/// Access to the leading component of a SEQUENCE-shaped value, as used by
/// the first-component matching rules.
pub trait FirstComponent {
    fn first_component(&self) -> &str;
}

impl FirstComponent for str {
    /// The first token of a parenthesised description, quotes removed, or
    /// the whole value when it is not parenthesised.
    fn first_component(&self) -> &str {
        let trimmed = self.trim();
        match trimmed.strip_prefix('(') {
            Some(inner) => inner
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .trim_matches('\''),
            None => trimmed,
        }
    }
}

impl FirstComponent for String {
    fn first_component(&self) -> &str {
        self.as_str().first_component()
    }
}

impl FirstComponent for [String] {
    fn first_component(&self) -> &str {
        self.first().map(String::as_str).unwrap_or_default()
    }
}

impl<T: Definition> FirstComponent for T {
    fn first_component(&self) -> &str {
        self.id()
    }
}

impl SchemaRegistry {
    /// Evaluate an equality assertion with the rule identified by `rule`.
    pub fn equality_match(&self, rule: &str, actual: &str, assertion: &str) -> SchemaResult<MatchResult> {
        match self.assertion_for(rule, MatchingRuleKind::Equality)? {
            AssertionFn::Equality(function) => Ok(function(actual, assertion)),
            _ => Err(mismatched_function(rule)),
        }
    }

    /// Whether `actual` stands in relation `operator` to `assertion` under
    /// the ordering rule identified by `rule`.
    ///
    /// Values the rule cannot order never satisfy the relation.
    pub fn ordering_match(
        &self,
        rule: &str,
        operator: OrderingOperator,
        actual: &str,
        assertion: &str,
    ) -> SchemaResult<bool> {
        match self.assertion_for(rule, MatchingRuleKind::Ordering)? {
            AssertionFn::Ordering(function) => {
                Ok(function(actual, assertion).is_some_and(|ordering| operator.holds(ordering)))
            }
            _ => Err(mismatched_function(rule)),
        }
    }

    /// Evaluate a substring assertion such as `"jo*n*"`.
    pub fn substrings_match(&self, rule: &str, actual: &str, assertion: &str) -> SchemaResult<MatchResult> {
        let function = match self.assertion_for(rule, MatchingRuleKind::Substring)? {
            AssertionFn::Substrings(function) => function,
            _ => return Err(mismatched_function(rule)),
        };
        let assertion: SubstringAssertion = assertion.parse()?;
        Ok(function(actual, &assertion))
    }

    /// Compare the first component of `value` against `assertion` with the
    /// equality rule identified by `rule`.
    pub fn first_component_match<V: FirstComponent + ?Sized>(
        &self,
        rule: &str,
        value: &V,
        assertion: &str,
    ) -> SchemaResult<MatchResult> {
        self.equality_match(rule, value.first_component(), assertion)
    }

    fn assertion_for(&self, term: &str, requested: MatchingRuleKind) -> SchemaResult<AssertionFn> {
        let schema = self.read();
        let rule = schema
            .matching_rules()
            .get(term)
            .ok_or_else(|| SchemaError::invalid_matching_rule(term, "not registered"))?;

        let kind = MatchingRuleKind::of(rule);
        if kind != requested {
            return Err(SchemaError::invalid_matching_rule(
                term,
                format!("{} rule cannot perform {} matching", kind, requested),
            ));
        }

        self.assertions
            .get(&rule.oid)
            .ok_or_else(|| SchemaError::invalid_matching_rule(term, "no assertion function registered"))
    }
}

fn mismatched_function(rule: &str) -> SchemaError {
    SchemaError::invalid_matching_rule(rule, "assertion function is of the wrong kind")
}

/// Trim and collapse inner whitespace runs to one space.
fn collapse(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn case_ignore(value: &str) -> String {
    collapse(value).to_lowercase()
}

fn without_spaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn telephone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

fn case_ignore_list(value: &str) -> String {
    value.split('$').map(case_ignore).collect::<Vec<_>>().join("$")
}

fn case_ignore_match(actual: &str, assertion: &str) -> MatchResult {
    (case_ignore(actual) == case_ignore(assertion)).into()
}

fn case_exact_match(actual: &str, assertion: &str) -> MatchResult {
    (collapse(actual) == collapse(assertion)).into()
}

fn case_ignore_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(case_ignore(actual).cmp(&case_ignore(assertion)))
}

fn case_exact_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(collapse(actual).cmp(&collapse(assertion)))
}

fn case_ignore_substrings(actual: &str, assertion: &SubstringAssertion) -> MatchResult {
    assertion.matches_with(actual, case_ignore).into()
}

fn case_exact_substrings(actual: &str, assertion: &SubstringAssertion) -> MatchResult {
    assertion.matches_with(actual, collapse).into()
}

fn numeric_string_match(actual: &str, assertion: &str) -> MatchResult {
    (without_spaces(actual) == without_spaces(assertion)).into()
}

fn numeric_string_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(without_spaces(actual).cmp(&without_spaces(assertion)))
}

fn numeric_string_substrings(actual: &str, assertion: &SubstringAssertion) -> MatchResult {
    assertion.matches_with(actual, without_spaces).into()
}

fn case_ignore_list_match(actual: &str, assertion: &str) -> MatchResult {
    (case_ignore_list(actual) == case_ignore_list(assertion)).into()
}

fn case_ignore_list_substrings(actual: &str, assertion: &SubstringAssertion) -> MatchResult {
    assertion.matches_with(actual, case_ignore_list).into()
}

fn telephone_number_match(actual: &str, assertion: &str) -> MatchResult {
    (telephone(actual) == telephone(assertion)).into()
}

fn telephone_number_substrings(actual: &str, assertion: &SubstringAssertion) -> MatchResult {
    assertion.matches_with(actual, telephone).into()
}

fn word_match(actual: &str, assertion: &str) -> MatchResult {
    let word = case_ignore(assertion);
    actual
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .any(|candidate| !candidate.is_empty() && candidate.to_lowercase() == word)
        .into()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "TRUE" => Some(true),
        "FALSE" => Some(false),
        _ => None,
    }
}

fn boolean_match(actual: &str, assertion: &str) -> MatchResult {
    match (parse_bool(actual), parse_bool(assertion)) {
        (Some(a), Some(b)) => (a == b).into(),
        _ => MatchResult::Undefined,
    }
}

fn parse_integer(value: &str) -> Option<i128> {
    value.trim().parse().ok()
}

fn integer_match(actual: &str, assertion: &str) -> MatchResult {
    match (parse_integer(actual), parse_integer(assertion)) {
        (Some(a), Some(b)) => (a == b).into(),
        _ => MatchResult::Undefined,
    }
}

fn integer_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(parse_integer(actual)?.cmp(&parse_integer(assertion)?))
}

fn integer_bit_and_match(actual: &str, assertion: &str) -> MatchResult {
    match (parse_integer(actual), parse_integer(assertion)) {
        (Some(a), Some(b)) => (a & b == b).into(),
        _ => MatchResult::Undefined,
    }
}

fn integer_bit_or_match(actual: &str, assertion: &str) -> MatchResult {
    match (parse_integer(actual), parse_integer(assertion)) {
        (Some(a), Some(b)) => (a & b != 0).into(),
        _ => MatchResult::Undefined,
    }
}

/// Bits of a `'0101'B` value with trailing zero bits removed.
fn bit_string(value: &str) -> Option<String> {
    let bits = value.trim().strip_prefix('\'')?.strip_suffix("'B")?;
    if bits.chars().all(|c| c == '0' || c == '1') {
        Some(bits.trim_end_matches('0').to_string())
    } else {
        None
    }
}

fn bit_string_match(actual: &str, assertion: &str) -> MatchResult {
    match (bit_string(actual), bit_string(assertion)) {
        (Some(a), Some(b)) => (a == b).into(),
        _ => MatchResult::Undefined,
    }
}

fn octet_string_match(actual: &str, assertion: &str) -> MatchResult {
    (actual.as_bytes() == assertion.as_bytes()).into()
}

fn octet_string_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(actual.as_bytes().cmp(assertion.as_bytes()))
}

fn object_identifier_match(actual: &str, assertion: &str) -> MatchResult {
    actual.trim().eq_ignore_ascii_case(assertion.trim()).into()
}

/// RDNs lower-cased with whitespace around separators removed.
fn distinguished_name(value: &str) -> String {
    value
        .split(',')
        .map(|rdn| {
            rdn.split('+')
                .map(|ava| {
                    ava.split('=')
                        .map(case_ignore)
                        .collect::<Vec<_>>()
                        .join("=")
                })
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn distinguished_name_match(actual: &str, assertion: &str) -> MatchResult {
    (distinguished_name(actual) == distinguished_name(assertion)).into()
}

/// `dn#'0101'B` compares the DN and, when both carry one, the UID.
fn unique_member_match(actual: &str, assertion: &str) -> MatchResult {
    let split = |value: &str| match value.rsplit_once('#') {
        Some((dn, uid)) if uid.ends_with("'B") => (distinguished_name(dn), Some(uid.to_string())),
        _ => (distinguished_name(value), None),
    };
    let (actual_dn, actual_uid) = split(actual);
    let (assertion_dn, assertion_uid) = split(assertion);
    let uid_matches = match (actual_uid, assertion_uid) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    };
    (actual_dn == assertion_dn && uid_matches).into()
}

fn uuid_match(actual: &str, assertion: &str) -> MatchResult {
    actual.trim().eq_ignore_ascii_case(assertion.trim()).into()
}

fn uuid_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(actual.trim().to_ascii_lowercase().cmp(&assertion.trim().to_ascii_lowercase()))
}

/// Split a trailing `Z` or `±hh[mm]` zone from a time value.
fn split_zone(value: &str) -> Option<(&str, FixedOffset)> {
    if let Some(local) = value.strip_suffix('Z') {
        return Some((local, FixedOffset::east_opt(0)?));
    }
    let at = value.rfind(['+', '-'])?;
    let (local, zone) = value.split_at(at);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits = &zone[1..];
    if !all_digits(digits) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some((local, FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?))
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a GeneralizedTime value (`YYYYMMDDHH[MM[SS]][(.|,)fraction](Z|±hh[mm])`).
pub fn parse_generalized_time(value: &str) -> Option<DateTime<FixedOffset>> {
    let (local, offset) = split_zone(value.trim())?;
    let (whole, fraction) = match local.find(['.', ',']) {
        Some(at) => (&local[..at], Some(&local[at + 1..])),
        None => (local, None),
    };
    if !all_digits(whole) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| whole.get(range)?.parse::<u32>().ok();
    let (minutes, seconds, unit_seconds) = match whole.len() {
        10 => (0, 0, 3600.0),
        12 => (field(10..12)?, 0, 60.0),
        14 => (field(10..12)?, field(12..14)?, 1.0),
        _ => return None,
    };
    let date = NaiveDate::from_ymd_opt(field(0..4)? as i32, field(4..6)?, field(6..8)?)?;
    let time = NaiveTime::from_hms_opt(field(8..10)?, minutes, seconds)?;
    let naive = NaiveDateTime::new(date, time);

    let naive = match fraction {
        Some(digits) if all_digits(digits) => {
            let fraction: f64 = format!("0.{}", digits).parse().ok()?;
            let nanos = (fraction * unit_seconds * 1_000_000_000.0).round() as i64;
            naive.checked_add_signed(TimeDelta::nanoseconds(nanos))?
        }
        Some(_) => return None,
        None => naive,
    };

    naive.and_local_timezone(offset).single()
}

/// Parse a UTCTime value (`YYMMDDhhmm[ss](Z|±hhmm)`); years below 50 are
/// in the 2000s.
pub fn parse_utc_time(value: &str) -> Option<DateTime<FixedOffset>> {
    let (local, offset) = split_zone(value.trim())?;
    if !all_digits(local) || (local.len() != 10 && local.len() != 12) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| local.get(range)?.parse::<u32>().ok();
    let year = field(0..2)?;
    let year = if year < 50 { 2000 + year } else { 1900 + year };
    let date = NaiveDate::from_ymd_opt(year as i32, field(2..4)?, field(4..6)?)?;
    let seconds = if local.len() == 12 { field(10..12)? } else { 0 };
    let time = NaiveTime::from_hms_opt(field(6..8)?, field(8..10)?, seconds)?;

    NaiveDateTime::new(date, time).and_local_timezone(offset).single()
}

fn generalized_time_match(actual: &str, assertion: &str) -> MatchResult {
    match (parse_generalized_time(actual), parse_generalized_time(assertion)) {
        (Some(a), Some(b)) => (a == b).into(),
        _ => MatchResult::Undefined,
    }
}

fn generalized_time_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(parse_generalized_time(actual)?.cmp(&parse_generalized_time(assertion)?))
}

fn utc_time_match(actual: &str, assertion: &str) -> MatchResult {
    match (parse_utc_time(actual), parse_utc_time(assertion)) {
        (Some(a), Some(b)) => (a == b).into(),
        _ => MatchResult::Undefined,
    }
}

fn utc_time_ordering(actual: &str, assertion: &str) -> Option<Ordering> {
    Some(parse_utc_time(actual)?.cmp(&parse_utc_time(assertion)?))
}
