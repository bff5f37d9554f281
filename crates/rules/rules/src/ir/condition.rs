use regex::Regex;
use serde::{Deserialize, Serialize};

use mailsieve_core::FieldName;

use crate::error::RuleError;

/// How a rule combines its conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Every condition must hold (conjunction).
    All,
    /// At least one condition must hold (disjunction).
    Any,
}

/// The comparison operator within a condition.
///
/// String fields support the first four; the date field supports `LessThan`
/// and `GreaterThan`, interpreted as age in days relative to now. Wire names
/// use spaces (`"does not contain"`); hyphenated and underscored spellings
/// are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Case-insensitive substring containment.
    #[serde(rename = "contains")]
    Contains,
    /// Negation of [`Predicate::Contains`].
    #[serde(
        rename = "does not contain",
        alias = "does-not-contain",
        alias = "does_not_contain"
    )]
    DoesNotContain,
    /// Case-insensitive exact equality.
    #[serde(rename = "equals")]
    Equals,
    /// Negation of [`Predicate::Equals`].
    #[serde(
        rename = "does not equal",
        alias = "does-not-equal",
        alias = "does_not_equal"
    )]
    DoesNotEqual,
    /// Newer than N days (received after `now - N days`).
    #[serde(rename = "less than", alias = "less-than", alias = "less_than")]
    LessThan,
    /// Older than N days (received before `now - N days`).
    #[serde(rename = "greater than", alias = "greater-than", alias = "greater_than")]
    GreaterThan,
}

/// A single field/predicate/value check within a rule.
///
/// `value` always holds the literal authored string; typed interpretation
/// (day counts for the date field) happens at evaluation time. The one
/// load-time artifact is the precompiled case-insensitive substring matcher
/// for string `contains` / `does not contain` conditions, built by
/// [`Condition::compile`] and reused across every record evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// The record field this condition reads.
    pub field: FieldName,
    /// The comparison to apply.
    pub predicate: Predicate,
    /// The authored comparison value.
    pub value: String,
    /// Precompiled substring matcher. Never serialized; rebuilt by
    /// [`Condition::compile`] after deserialization.
    #[serde(skip)]
    matcher: Option<Regex>,
}

impl Condition {
    /// Create an uncompiled condition.
    #[must_use]
    pub fn new(field: FieldName, predicate: Predicate, value: impl Into<String>) -> Self {
        Self {
            field,
            predicate,
            value: value.into(),
            matcher: None,
        }
    }

    /// Precompile the substring matcher for string containment conditions.
    ///
    /// A no-op for every other field/predicate pairing. Idempotent.
    pub fn compile(&mut self) -> Result<(), RuleError> {
        let wants_matcher = self.field != FieldName::ReceivedDate
            && matches!(
                self.predicate,
                Predicate::Contains | Predicate::DoesNotContain
            );
        if wants_matcher && self.matcher.is_none() {
            let pattern = format!("(?i){}", regex::escape(&self.value));
            self.matcher =
                Some(Regex::new(&pattern).map_err(|e| RuleError::InvalidPattern(e.to_string()))?);
        }
        Ok(())
    }

    /// The precompiled matcher, if [`Condition::compile`] produced one.
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }
}
