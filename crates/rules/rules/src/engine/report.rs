use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::engine::executor::RecordOutcome;
use crate::ir::ruleset::RuleSet;

/// Per-rule tally accumulated over a scan.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    /// Display label for the rule (name, or one-based position).
    pub label: String,
    /// How many records the rule matched.
    pub matches: u64,
    /// Distinct descriptions of the actions this rule triggered. Ordered for
    /// deterministic output.
    pub actions: BTreeSet<String>,
}

/// Accumulated results of scanning a batch of records against a rule set.
///
/// Summaries follow the rule set's post-sort order. `Display` renders one
/// pass/fail line per rule, suitable for an end-of-run summary.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    summaries: Vec<RuleSummary>,
    records_scanned: u64,
}

impl ScanReport {
    /// Create an empty report with one summary slot per rule.
    #[must_use]
    pub fn new(rule_set: &RuleSet) -> Self {
        let summaries = (0..rule_set.len())
            .map(|index| RuleSummary {
                label: rule_set.rule_label(index),
                matches: 0,
                actions: BTreeSet::new(),
            })
            .collect();
        Self {
            summaries,
            records_scanned: 0,
        }
    }

    /// Fold one record's outcome into the report.
    pub fn record(&mut self, outcome: &RecordOutcome) {
        self.records_scanned += 1;
        for &index in &outcome.matched_rules {
            if let Some(summary) = self.summaries.get_mut(index) {
                summary.matches += 1;
            }
        }
    }

    /// Register the action descriptions a rule triggered.
    ///
    /// Kept separate from [`ScanReport::record`] so callers can report only
    /// the actions the sink actually applied.
    pub fn record_actions<I>(&mut self, rule_index: usize, descriptions: I)
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(summary) = self.summaries.get_mut(rule_index) {
            summary.actions.extend(descriptions);
        }
    }

    /// Per-rule summaries in rule-set order.
    pub fn summaries(&self) -> &[RuleSummary] {
        &self.summaries
    }

    /// Number of records folded in so far.
    pub fn records_scanned(&self) -> u64 {
        self.records_scanned
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for summary in &self.summaries {
            let status = if summary.matches > 0 {
                "[PASS]"
            } else {
                "[FAIL]"
            };
            let action_text = if summary.actions.is_empty() {
                "No action taken".to_owned()
            } else {
                summary
                    .actions
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(
                f,
                "{status} {} matched {} emails — {action_text}",
                summary.label, summary.matches
            )?;
        }
        Ok(())
    }
}
