use thiserror::Error;

use mailsieve_core::FieldName;

/// Errors that can occur while loading or evaluating rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule source failed to parse or a rule lacks required fields.
    ///
    /// Fatal to loading: no partial rule set is ever returned.
    #[error("malformed rule set: {0}")]
    MalformedRuleSet(String),

    /// A condition could not be evaluated against a record, e.g. a malformed
    /// date value or a predicate applied to a field of the wrong type.
    ///
    /// Recovered per rule: the rule counts as non-matching for that record.
    #[error("condition evaluation failed: {0}")]
    ConditionEvaluation(String),

    /// A condition references a field that is absent on the record.
    ///
    /// Only the date field can surface this; absent string fields evaluate
    /// as empty strings instead. Recovered per rule like
    /// [`RuleError::ConditionEvaluation`].
    #[error("record has no value for field {0}")]
    MissingField(FieldName),

    /// A substring matcher failed to compile at load time.
    #[error("invalid match pattern: {0}")]
    InvalidPattern(String),
}
