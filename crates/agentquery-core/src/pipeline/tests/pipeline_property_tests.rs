//! Property tests over generated element lists.

use crate::pipeline::Page;
use crate::pipeline::filter_items;
use crate::test_support::Ticket;
use crate::test_support::ticket;
use crate::test_support::ticket_schema;
use proptest::prelude::*;

fn arb_tickets() -> impl Strategy<Value = Vec<Ticket>> {
    prop::collection::vec(("[a-z]{1,6}", "[a-zA-Z]{1,8}", 0u8..5), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, status, priority))| {
                ticket(&format!("t-{i}"), &title, &status, priority, None)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn pagination_is_a_clamped_window(
        items in prop::collection::vec(any::<u32>(), 0..40),
        skip in 0usize..50,
        take in 0usize..50,
    ) {
        let page = Page::new(Some(skip), Some(take));
        let start = skip.min(items.len());
        let end = skip.saturating_add(take).min(items.len());
        prop_assert_eq!(page.apply(items.clone()), items[start..end].to_vec());
    }

    #[test]
    fn filter_ignores_case(items in arb_tickets(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let schema = ticket_schema();
        let wanted = items[pick.index(items.len())].status.clone();
        let lower = wanted.to_lowercase();
        let upper = wanted.to_uppercase();

        let by_lower = filter_items(items.clone(), &schema.predicate([("status", lower.as_str())]));
        let by_upper = filter_items(items.clone(), &schema.predicate([("status", upper.as_str())]));
        prop_assert!(!by_lower.is_empty());
        prop_assert_eq!(&by_lower, &by_upper);
        prop_assert!(by_lower.iter().all(|t| t.status.eq_ignore_ascii_case(&wanted)));
    }

    #[test]
    fn match_all_keeps_everything(items in arb_tickets()) {
        let schema = ticket_schema();
        let predicate = schema.predicate([("unknown", "x")]);
        prop_assert_eq!(filter_items(items.clone(), &predicate), items);
    }
}
