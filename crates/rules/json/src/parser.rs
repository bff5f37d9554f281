use serde::Deserialize;

use mailsieve_core::{FieldName, MailAction};
use mailsieve_rules::{Combinator, Predicate};

/// Top-level JSON rule file containing a list of rules.
#[derive(Debug, Deserialize)]
pub struct JsonRuleFile {
    /// The list of rules defined in this file.
    pub rules: Vec<JsonRule>,
}

/// A single rule as represented in JSON.
///
/// `conditions`, the combinator, and `actions` are required; a rule missing
/// any of them fails the whole load. The combinator's wire key is
/// `predicate` (the legacy name); `combinator` is accepted as an alias.
#[derive(Debug, Deserialize)]
pub struct JsonRule {
    /// Optional human-readable name for the rule.
    #[serde(default)]
    pub name: Option<String>,
    /// The conditions, in authored order.
    pub conditions: Vec<JsonCondition>,
    /// How the conditions combine.
    #[serde(alias = "combinator")]
    pub predicate: Combinator,
    /// The actions to apply on a match, in authored order.
    pub actions: Vec<MailAction>,
}

/// A single condition as represented in JSON.
#[derive(Debug, Deserialize)]
pub struct JsonCondition {
    /// The record field to read.
    pub field: FieldName,
    /// The comparison to apply.
    pub predicate: Predicate,
    /// The literal comparison value.
    pub value: String,
}
