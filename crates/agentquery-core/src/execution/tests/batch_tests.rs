//! Batches: slot count, order and error isolation.

use crate::execution::Outcome;
use crate::operation::ErrorCode;
use crate::test_support::ticket_schema;
use serde_json::json;

#[test]
fn one_query_is_a_single_outcome() {
    let outcome = ticket_schema().execute("count();").unwrap();
    assert!(matches!(outcome, Outcome::Single(_)));
    assert_eq!(outcome.len(), 1);
}

#[test]
fn batch_has_one_slot_per_query_in_order() {
    let outcome = ticket_schema()
        .execute("get(t-1); count(status=done); get(t-2) { title }")
        .unwrap();
    assert!(matches!(outcome, Outcome::Batch(_)));
    assert_eq!(
        outcome.to_value(),
        json!([
            { "id": "t-1", "status": "todo" },
            { "count": 1 },
            { "title": "Fix bug, urgent" }
        ]),
    );
}

#[test]
fn failing_slot_does_not_affect_siblings() {
    let outcome = ticket_schema()
        .execute("get(t-1); get(t-404); nope(); get(t-1) { bogus }; count()")
        .unwrap();
    assert_eq!(outcome.len(), 5);
    assert!(outcome.has_errors());

    let codes: Vec<_> = outcome
        .results()
        .iter()
        .map(|result| result.error().map(|err| err.code()))
        .collect();
    assert_eq!(
        codes,
        [
            None,
            Some(ErrorCode::NotFound),
            Some(ErrorCode::NotFound),
            Some(ErrorCode::Validation),
            None,
        ],
    );
    assert_eq!(outcome.to_value()[4], json!({ "count": 4 }));
}

#[test]
fn syntax_error_fails_the_whole_batch() {
    let err = ticket_schema().execute("get(t-1); get(").unwrap_err();
    assert_eq!(err.position().byte_offset(), 14);
}

#[test]
fn into_results_keeps_order() {
    let outcome = ticket_schema().execute("count(); count(status=todo)").unwrap();
    let results = outcome.into_results();
    assert_eq!(results[0].to_value(), json!({ "count": 4 }));
    assert_eq!(results[1].to_value(), json!({ "count": 2 }));
}
