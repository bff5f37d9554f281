pub mod condition;
pub mod rank;
pub mod rule;
pub mod ruleset;

pub use condition::{Combinator, Condition, Predicate};
pub use rule::Rule;
pub use ruleset::RuleSet;
