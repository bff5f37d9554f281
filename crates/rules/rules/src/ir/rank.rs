use super::condition::Combinator;
use super::rule::Rule;

/// Weight applied to conjunctive rules: every condition must be checked in
/// the worst case, so `all` rules rank as more expensive than `any` rules
/// with the same condition count.
const ALL_WEIGHT: f64 = 1.5;

/// Compute the complexity score for a rule shape.
///
/// `condition_count * 1.5` for [`Combinator::All`], `condition_count * 1.0`
/// for [`Combinator::Any`]. Non-negative by construction.
pub fn complexity(condition_count: usize, combinator: Combinator) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let base = condition_count as f64;
    match combinator {
        Combinator::All => base * ALL_WEIGHT,
        Combinator::Any => base,
    }
}

/// Stamp every rule's complexity and sort ascending.
///
/// The sort is stable: ties keep their authored order. Ranking only affects
/// report ordering and caller-side strategies; the engine still evaluates
/// every rule against every record.
pub fn rank(rules: &mut [Rule]) {
    for rule in rules.iter_mut() {
        rule.complexity = complexity(rule.conditions.len(), rule.combinator);
    }
    rules.sort_by(|a, b| a.complexity.total_cmp(&b.complexity));
}
