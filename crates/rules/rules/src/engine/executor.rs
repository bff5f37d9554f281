use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use mailsieve_core::{EmailRecord, MailAction};

use crate::engine::eval::eval_condition;
use crate::engine::report::ScanReport;
use crate::error::RuleError;
use crate::ir::condition::Combinator;
use crate::ir::rule::Rule;
use crate::ir::ruleset::RuleSet;

/// Default number of rule-evaluation workers per engine.
const DEFAULT_WORKERS: usize = 4;

/// Evaluate a full rule against a record.
///
/// Conditions are checked in authored order with short-circuiting:
/// [`Combinator::Any`] returns `true` on the first true condition,
/// [`Combinator::All`] returns `false` on the first false one. An empty
/// condition list is vacuously `true` under `all` and `false` under `any`,
/// behavior inherited from the source rule language and preserved as is.
///
/// A condition error propagates out; callers recover it as "rule does not
/// match".
pub fn evaluate_rule(rule: &Rule, record: &EmailRecord) -> Result<bool, RuleError> {
    match rule.combinator {
        Combinator::All => {
            for condition in &rule.conditions {
                if !eval_condition(condition, record)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Combinator::Any => {
            for condition in &rule.conditions {
                if eval_condition(condition, record)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

/// The result of evaluating every rule against one record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    /// The record's message id.
    pub message_id: String,
    /// Indexes (into the rule set's post-sort order) of the rules that
    /// matched.
    pub matched_rules: Vec<usize>,
    /// Actions from every matched rule: each rule's actions in authored
    /// order, matched rules in rule-set order.
    pub actions: Vec<MailAction>,
}

impl RecordOutcome {
    /// Whether any rule matched this record.
    pub fn is_match(&self) -> bool {
        !self.matched_rules.is_empty()
    }
}

/// Evaluates a compiled rule set against email records.
///
/// Each record's rules are evaluated concurrently on a bounded worker pool:
/// the engine owns one semaphore whose permits cap in-flight rule
/// evaluations, shared across records rather than allocated per call. The
/// rule set and the record are read-only for the duration of a call, so
/// workers need no locks; results are aggregated at a single join point.
pub struct RuleEngine {
    rule_set: Arc<RuleSet>,
    permits: Arc<Semaphore>,
}

impl RuleEngine {
    /// Create an engine with the default worker count.
    #[must_use]
    pub fn new(rule_set: RuleSet) -> Self {
        Self::with_workers(rule_set, DEFAULT_WORKERS)
    }

    /// Create an engine with an explicit worker count.
    ///
    /// The count is independent of rule-set size; it bounds how many rule
    /// evaluations run at once, not how many rules a set may hold.
    #[must_use]
    pub fn with_workers(rule_set: RuleSet, workers: usize) -> Self {
        Self {
            rule_set: Arc::new(rule_set),
            permits: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// The compiled rule set this engine evaluates.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Evaluate every rule against one record and collect matched actions.
    ///
    /// Rules are evaluated independently (no rule's outcome feeds another's)
    /// and every rule is always evaluated, regardless of earlier matches.
    /// A rule that fails to evaluate is logged and counts as non-matching;
    /// it never aborts the rest of the record's rules.
    #[instrument(skip_all, fields(message_id = %record.message_id, rules = self.rule_set.len()))]
    pub async fn process_record(&self, record: Arc<EmailRecord>) -> RecordOutcome {
        let mut workers = JoinSet::new();
        for index in 0..self.rule_set.len() {
            let rules = Arc::clone(&self.rule_set);
            let record = Arc::clone(&record);
            let permits = Arc::clone(&self.permits);
            workers.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .expect("semaphore should never be closed");
                let verdict = evaluate_rule(&rules.rules()[index], &record);
                (index, verdict)
            });
        }

        let mut matched = vec![false; self.rule_set.len()];
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok((index, Ok(is_match))) => matched[index] = is_match,
                Ok((index, Err(err))) => {
                    warn!(
                        rule = %self.rule_set.rule_label(index),
                        error = %err,
                        "rule failed to evaluate, treating as non-match"
                    );
                }
                Err(err) => {
                    warn!(error = %err, "rule evaluation worker failed");
                }
            }
        }

        // Aggregate in rule-set order so the outcome is deterministic.
        let mut matched_rules = Vec::new();
        let mut actions = Vec::new();
        for (index, rule) in self.rule_set.rules().iter().enumerate() {
            if matched[index] {
                matched_rules.push(index);
                actions.extend(rule.actions.iter().cloned());
            }
        }
        debug!(matched = matched_rules.len(), "record processed");

        RecordOutcome {
            message_id: record.message_id.clone(),
            matched_rules,
            actions,
        }
    }

    /// Scan a batch of records sequentially and accumulate a report.
    ///
    /// The scan always completes: per-rule failures degrade to non-matches,
    /// so every record contributes an outcome.
    pub async fn process_records(&self, records: &[Arc<EmailRecord>]) -> ScanReport {
        let mut report = ScanReport::new(&self.rule_set);
        for record in records {
            let outcome = self.process_record(Arc::clone(record)).await;
            report.record(&outcome);
            for &index in &outcome.matched_rules {
                let descriptions = self.rule_set.rules()[index]
                    .actions
                    .iter()
                    .map(MailAction::describe);
                report.record_actions(index, descriptions);
            }
        }
        report
    }
}
