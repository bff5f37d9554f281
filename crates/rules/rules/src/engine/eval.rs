use chrono::{TimeDelta, Utc};

use mailsieve_core::{EmailRecord, FieldName};

use crate::error::RuleError;
use crate::ir::condition::{Condition, Predicate};

/// Evaluate a single condition against a record.
///
/// String comparisons are case-insensitive; a missing string field value is
/// treated as the empty string and never raises. Date comparisons interpret
/// the authored value as an age in days relative to now, where "now" is
/// captured fresh on every call. Applying a predicate to a field of the
/// wrong type is a recoverable [`RuleError::ConditionEvaluation`].
pub fn eval_condition(condition: &Condition, record: &EmailRecord) -> Result<bool, RuleError> {
    if condition.field == FieldName::ReceivedDate {
        eval_date(condition, record)
    } else {
        let field_value = record.string_field(condition.field).unwrap_or("");
        eval_string(condition, field_value)
    }
}

/// String-field semantics: containment via the precompiled matcher, equality
/// via lower-cased comparison.
fn eval_string(condition: &Condition, field_value: &str) -> Result<bool, RuleError> {
    match condition.predicate {
        Predicate::Contains | Predicate::DoesNotContain => {
            let hit = match condition.matcher() {
                Some(matcher) => matcher.is_match(field_value),
                // Uncompiled conditions fall back to ad-hoc folding.
                None => field_value
                    .to_lowercase()
                    .contains(&condition.value.to_lowercase()),
            };
            Ok((condition.predicate == Predicate::Contains) == hit)
        }
        Predicate::Equals => Ok(field_value.to_lowercase() == condition.value.to_lowercase()),
        Predicate::DoesNotEqual => Ok(field_value.to_lowercase() != condition.value.to_lowercase()),
        Predicate::LessThan | Predicate::GreaterThan => Err(RuleError::ConditionEvaluation(
            format!("date predicate applied to string field {}", condition.field),
        )),
    }
}

/// Date-field semantics: `less than` means newer than N days, `greater than`
/// means older than N days.
fn eval_date(condition: &Condition, record: &EmailRecord) -> Result<bool, RuleError> {
    if !matches!(
        condition.predicate,
        Predicate::LessThan | Predicate::GreaterThan
    ) {
        return Err(RuleError::ConditionEvaluation(format!(
            "string predicate applied to {}",
            FieldName::ReceivedDate
        )));
    }

    let received = record
        .received_date
        .ok_or(RuleError::MissingField(FieldName::ReceivedDate))?;

    let days = parse_day_span(&condition.value)?;
    let span = TimeDelta::try_days(days)
        .ok_or_else(|| RuleError::ConditionEvaluation(format!("day count out of range: {days}")))?;
    // Captured per call, never cached: repeated evaluations may see slightly
    // different thresholds, which is acceptable drift.
    let threshold = Utc::now() - span;

    if condition.predicate == Predicate::LessThan {
        Ok(received > threshold)
    } else {
        Ok(received < threshold)
    }
}

/// Parse an authored date value of the form `"<N>"` or `"<N> days"`.
///
/// Units other than `day`/`days` are rejected rather than silently read as
/// days.
fn parse_day_span(value: &str) -> Result<i64, RuleError> {
    let mut parts = value.split_whitespace();
    let count = parts
        .next()
        .ok_or_else(|| RuleError::ConditionEvaluation("empty date value".to_owned()))?;
    let count: i64 = count.parse().map_err(|_| {
        RuleError::ConditionEvaluation(format!("invalid day count in date value \"{value}\""))
    })?;

    match parts.next() {
        None => Ok(count),
        Some(unit) if unit.eq_ignore_ascii_case("day") || unit.eq_ignore_ascii_case("days") => {
            Ok(count)
        }
        Some(unit) => Err(RuleError::ConditionEvaluation(format!(
            "unsupported date unit \"{unit}\" in \"{value}\""
        ))),
    }
}
