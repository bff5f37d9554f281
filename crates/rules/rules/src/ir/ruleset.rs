use super::rank;
use super::rule::Rule;
use crate::error::RuleError;

/// An immutable, compiled collection of rules.
///
/// Built once at load time: substring matchers are precompiled, complexity
/// scores stamped, and the rules stable-sorted ascending by score. The set
/// is only read thereafter, so it can be shared freely across concurrent
/// evaluations without locking.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile a list of parsed rules into an evaluation-ready set.
    ///
    /// Fails with [`RuleError::InvalidPattern`] if a substring matcher does
    /// not compile; in that case no rule set is returned at all.
    pub fn compile(mut rules: Vec<Rule>) -> Result<Self, RuleError> {
        for rule in &mut rules {
            for condition in &mut rule.conditions {
                condition.compile()?;
            }
        }
        rank::rank(&mut rules);
        Ok(Self { rules })
    }

    /// The rules in evaluation (post-sort) order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// A display label for the rule at `index`: its name, or its
    /// one-based position when unnamed.
    pub fn rule_label(&self, index: usize) -> String {
        match self.rules.get(index).and_then(|r| r.name.as_deref()) {
            Some(name) => format!("Rule {} \"{name}\"", index + 1),
            None => format!("Rule {}", index + 1),
        }
    }
}
