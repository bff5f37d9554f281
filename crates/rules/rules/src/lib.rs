pub mod engine;
pub mod error;
pub mod frontend;
pub mod ir;

pub use engine::{RecordOutcome, RuleEngine, RuleSummary, ScanReport};
pub use error::RuleError;
pub use frontend::RuleFrontend;
pub use ir::condition::{Combinator, Condition, Predicate};
pub use ir::rule::Rule;
pub use ir::ruleset::RuleSet;
