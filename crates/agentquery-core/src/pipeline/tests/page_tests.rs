//! `skip`/`take` parsing and windowing.

use crate::operation::ErrorCode;
use crate::pipeline::Page;
use crate::pipeline::paginate_items;
use serde_json::json;

#[test]
fn absent_values_are_unbounded() {
    let page = Page::parse(None, None).unwrap();
    assert!(page.is_unbounded());
    assert_eq!(page.apply(vec![1, 2, 3]), [1, 2, 3]);
}

#[test]
fn skip_then_take() {
    let page = Page::parse(Some("1"), Some("2")).unwrap();
    assert_eq!(page, Page::new(Some(1), Some(2)));
    assert_eq!(paginate_items(vec![1, 2, 3, 4], &page), [2, 3]);
}

#[test]
fn take_zero_is_empty() {
    let page = Page::parse(None, Some("0")).unwrap();
    assert!(page.apply(vec![1, 2, 3]).is_empty());
}

#[test]
fn skip_past_end_is_empty() {
    let page = Page::new(Some(10), None);
    assert!(page.apply(vec![1, 2, 3]).is_empty());
}

#[test]
fn negative_and_non_numeric_values_are_rejected() {
    let err = Page::parse(Some("-1"), None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
    assert_eq!(err.message(), "skip must be a non-negative integer, got \"-1\"");
    assert_eq!(err.details()["param"], json!("skip"));

    let err = Page::parse(None, Some("ten")).unwrap_err();
    assert_eq!(err.message(), "take must be a non-negative integer, got \"ten\"");
    assert_eq!(err.details()["value"], json!("ten"));
}
