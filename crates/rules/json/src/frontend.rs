use mailsieve_rules::{Condition, Rule, RuleError, RuleFrontend, RuleSet};

use crate::parser::{JsonCondition, JsonRule, JsonRuleFile};

/// A [`RuleFrontend`] implementation that parses JSON rule files into the
/// mailsieve rule IR.
///
/// The expected shape is `{"rules": [...]}` with each rule carrying
/// `conditions`, a combinator (wire key `predicate`), and `actions`. Any
/// structural problem (unparseable JSON, a missing required field, an
/// unknown field name or predicate) fails with
/// [`RuleError::MalformedRuleSet`] and no rules at all.
pub struct JsonFrontend;

impl RuleFrontend for JsonFrontend {
    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, content: &str) -> Result<Vec<Rule>, RuleError> {
        let file: JsonRuleFile = serde_json::from_str(content)
            .map_err(|e| RuleError::MalformedRuleSet(format!("JSON parse error: {e}")))?;

        Ok(file.rules.into_iter().map(compile_rule).collect())
    }
}

/// Parse and compile a JSON rule source into an evaluation-ready
/// [`RuleSet`]: substring matchers precompiled, complexity stamped, rules
/// sorted ascending by score.
pub fn load(content: &str) -> Result<RuleSet, RuleError> {
    RuleSet::compile(JsonFrontend.parse(content)?)
}

/// Map a wire-format rule onto the IR.
fn compile_rule(json: JsonRule) -> Rule {
    let conditions = json.conditions.into_iter().map(compile_condition).collect();
    let rule = Rule::new(conditions, json.predicate, json.actions);
    match json.name {
        Some(name) => rule.with_name(name),
        None => rule,
    }
}

/// Map a wire-format condition onto the IR.
fn compile_condition(json: JsonCondition) -> Condition {
    Condition::new(json.field, json.predicate, json.value)
}

#[cfg(test)]
mod tests {
    use mailsieve_core::{FieldName, MailAction};
    use mailsieve_rules::{Combinator, Predicate};

    use super::*;

    const SAMPLE: &str = r#"{
        "rules": [
            {
                "conditions": [
                    {"field": "received_date", "predicate": "less than", "value": "7 days"},
                    {"field": "subject", "predicate": "does not contain", "value": "spam"}
                ],
                "predicate": "any",
                "actions": [{"type": "move_message", "label": "Important"}]
            },
            {
                "conditions": [
                    {"field": "subject", "predicate": "contains", "value": "urgent"},
                    {"field": "from_address", "predicate": "equals", "value": "boss@company.com"}
                ],
                "predicate": "all",
                "actions": [{"type": "mark_as_read"}]
            }
        ]
    }"#;

    #[test]
    fn parses_sample_rules() {
        let rules = JsonFrontend.parse(SAMPLE).unwrap();
        assert_eq!(rules.len(), 2);

        assert_eq!(rules[0].combinator, Combinator::Any);
        assert_eq!(rules[0].conditions[0].field, FieldName::ReceivedDate);
        assert_eq!(rules[0].conditions[0].predicate, Predicate::LessThan);
        assert_eq!(rules[0].conditions[0].value, "7 days");
        assert_eq!(
            rules[0].actions,
            vec![MailAction::MoveToLabel {
                label: "Important".into()
            }]
        );

        assert_eq!(rules[1].combinator, Combinator::All);
        assert_eq!(rules[1].actions, vec![MailAction::MarkAsRead]);
    }

    #[test]
    fn load_compiles_and_sorts() {
        let set = load(SAMPLE).unwrap();

        // The 2-condition `any` rule (score 2.0) sorts before the
        // 2-condition `all` rule (score 3.0).
        assert_eq!(set.rules()[0].combinator, Combinator::Any);
        assert_eq!(set.rules()[1].combinator, Combinator::All);
        assert!(set.rules()[0].complexity < set.rules()[1].complexity);

        // Containment conditions got their matcher.
        assert!(set.rules()[0].conditions[1].matcher().is_some());
    }

    #[test]
    fn combinator_alias_accepted() {
        let source = r#"{
            "rules": [
                {
                    "conditions": [
                        {"field": "subject", "predicate": "contains", "value": "x"}
                    ],
                    "combinator": "all",
                    "actions": []
                }
            ]
        }"#;
        let rules = JsonFrontend.parse(source).unwrap();
        assert_eq!(rules[0].combinator, Combinator::All);
    }

    #[test]
    fn rule_names_carry_through() {
        let source = r#"{
            "rules": [
                {
                    "name": "catch-all",
                    "conditions": [],
                    "predicate": "all",
                    "actions": [{"type": "mark_as_read"}]
                }
            ]
        }"#;
        let rules = JsonFrontend.parse(source).unwrap();
        assert_eq!(rules[0].name.as_deref(), Some("catch-all"));
    }

    #[test]
    fn missing_actions_is_malformed() {
        let source = r#"{
            "rules": [
                {
                    "conditions": [
                        {"field": "subject", "predicate": "contains", "value": "x"}
                    ],
                    "predicate": "any"
                }
            ]
        }"#;
        let err = JsonFrontend.parse(source).unwrap_err();
        assert!(matches!(err, RuleError::MalformedRuleSet(_)));
        assert!(err.to_string().contains("actions"));
    }

    #[test]
    fn missing_conditions_is_malformed() {
        let source = r#"{"rules": [{"predicate": "any", "actions": []}]}"#;
        assert!(matches!(
            JsonFrontend.parse(source),
            Err(RuleError::MalformedRuleSet(_))
        ));
    }

    #[test]
    fn missing_combinator_is_malformed() {
        let source = r#"{"rules": [{"conditions": [], "actions": []}]}"#;
        assert!(matches!(
            JsonFrontend.parse(source),
            Err(RuleError::MalformedRuleSet(_))
        ));
    }

    #[test]
    fn unknown_field_name_is_malformed() {
        let source = r#"{
            "rules": [
                {
                    "conditions": [
                        {"field": "attachment", "predicate": "contains", "value": "pdf"}
                    ],
                    "predicate": "any",
                    "actions": []
                }
            ]
        }"#;
        assert!(matches!(
            JsonFrontend.parse(source),
            Err(RuleError::MalformedRuleSet(_))
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            JsonFrontend.parse("not json at all"),
            Err(RuleError::MalformedRuleSet(_))
        ));
    }

    #[test]
    fn extensions() {
        assert_eq!(JsonFrontend.extensions(), &["json"]);
    }
}
