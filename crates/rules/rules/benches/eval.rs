use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::{TimeDelta, Utc};
use mailsieve_core::{EmailRecord, FieldName, MailAction};
use mailsieve_rules::engine::executor::evaluate_rule;
use mailsieve_rules::{Combinator, Condition, Predicate, Rule, RuleEngine, RuleSet};

fn test_record() -> EmailRecord {
    EmailRecord::new("bench-message")
        .with_from("newsletter@example.com")
        .with_to("user@example.com")
        .with_subject("Weekly digest: 10 things you missed")
        .with_body("Hello! Here is your weekly digest. Unsubscribe at any time.")
        .with_received_date(Utc::now() - TimeDelta::try_days(3).expect("valid day span"))
}

fn string_rule() -> Rule {
    Rule::new(
        vec![
            Condition::new(FieldName::Subject, Predicate::Contains, "digest"),
            Condition::new(FieldName::Body, Predicate::Contains, "unsubscribe"),
        ],
        Combinator::All,
        vec![MailAction::MoveToLabel {
            label: "Newsletters".into(),
        }],
    )
}

fn date_rule() -> Rule {
    Rule::new(
        vec![
            Condition::new(FieldName::ReceivedDate, Predicate::LessThan, "7 days"),
            Condition::new(FieldName::From, Predicate::DoesNotEqual, "boss@company.com"),
        ],
        Combinator::All,
        vec![MailAction::MarkAsRead],
    )
}

fn bench_evaluate_rule(c: &mut Criterion) {
    let set = RuleSet::compile(vec![string_rule()]).expect("rule set compiles");
    let rule = &set.rules()[0];
    let record = test_record();

    c.bench_function("evaluate_rule/string_all", |b| {
        b.iter(|| evaluate_rule(black_box(rule), black_box(&record)));
    });

    let set = RuleSet::compile(vec![date_rule()]).expect("rule set compiles");
    let rule = &set.rules()[0];

    c.bench_function("evaluate_rule/date_all", |b| {
        b.iter(|| evaluate_rule(black_box(rule), black_box(&record)));
    });
}

fn bench_process_record(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    let rules: Vec<Rule> = (0..20)
        .map(|i| {
            if i % 2 == 0 {
                string_rule()
            } else {
                date_rule()
            }
        })
        .collect();
    let engine = RuleEngine::new(RuleSet::compile(rules).expect("rule set compiles"));
    let record = Arc::new(test_record());

    c.bench_function("process_record/20_rules", |b| {
        b.iter(|| {
            let outcome = rt.block_on(engine.process_record(Arc::clone(&record)));
            black_box(outcome)
        });
    });
}

criterion_group!(benches, bench_evaluate_rule, bench_process_record);
criterion_main!(benches);
