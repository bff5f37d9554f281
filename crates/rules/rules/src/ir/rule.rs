use serde::{Deserialize, Serialize};

use mailsieve_core::MailAction;

use super::condition::{Combinator, Condition};
use super::rank;

/// A single rule: an ordered list of conditions, how they combine, and the
/// actions to apply when the rule matches.
///
/// Sharp edge, preserved from the source rule language: a rule with an empty
/// condition list matches every record under [`Combinator::All`] (vacuous
/// truth) and no record under [`Combinator::Any`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Optional human-readable name, used in scan reports.
    #[serde(default)]
    pub name: Option<String>,
    /// The conditions, evaluated in authored order.
    pub conditions: Vec<Condition>,
    /// How the conditions combine.
    #[serde(alias = "predicate")]
    pub combinator: Combinator,
    /// The actions to apply when the rule matches, in authored order.
    pub actions: Vec<MailAction>,
    /// Derived ranking score, never authored:
    /// `conditions.len() * (1.5 for all | 1.0 for any)`. Stamped by
    /// [`Rule::new`] and re-stamped when a rule set is compiled.
    #[serde(skip)]
    pub complexity: f64,
}

impl Rule {
    /// Create a rule and stamp its complexity score.
    #[must_use]
    pub fn new(conditions: Vec<Condition>, combinator: Combinator, actions: Vec<MailAction>) -> Self {
        let complexity = rank::complexity(conditions.len(), combinator);
        Self {
            name: None,
            conditions,
            combinator,
            actions,
            complexity,
        }
    }

    /// Set the name of this rule.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
