//! Property tests over arbitrary and generated query text.

use crate::tests::utils::parse_ok;
use proptest::prelude::*;

/// One well-formed query and the operation name it was built with.
fn arb_query() -> impl Strategy<Value = (String, String)> {
    let param = prop_oneof![
        "[a-z][a-z0-9_-]{0,6}",
        ("[a-z_]{1,6}", "[a-z0-9][a-z0-9-]{0,5}").prop_map(|(k, v)| format!("{k}={v}")),
        ("[a-z_]{1,6}", "[a-z ,;]{0,6}").prop_map(|(k, v)| format!("{k}=\"{v}\"")),
    ];
    (
        "[a-z_][a-z0-9_]{0,8}",
        prop::collection::vec(param, 0..4),
        prop::option::of(prop::collection::vec("[a-z][a-z_]{0,6}", 1..4)),
    )
        .prop_map(|(operation, params, fields)| {
            let mut text = format!("{operation}({})", params.join(", "));
            if let Some(fields) = fields {
                text.push_str(&format!(" {{ {} }}", fields.join(" ")));
            }
            (text, operation)
        })
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics(input in any::<String>()) {
        if let Err(err) = crate::parse(&input) {
            let _ = err.format_oneline();
            let _ = err.format_detailed(Some(&input));
            let _ = err.format_detailed(None);
        }
    }

    #[test]
    fn query_like_input_never_panics(input in "[a-z(){}=,;\" \\n-]{0,40}") {
        if let Err(err) = crate::parse(&input) {
            let _ = err.format_detailed(Some(&input));
        }
    }

    #[test]
    fn generated_batch_keeps_every_query_in_order(
        queries in prop::collection::vec(arb_query(), 1..8),
    ) {
        let src = queries.iter().map(|(text, _)| text.as_str()).collect::<Vec<_>>().join("; ");
        let batch = parse_ok(&src);
        prop_assert_eq!(batch.len(), queries.len());
        for (query, (_, operation)) in batch.queries.iter().zip(&queries) {
            prop_assert_eq!(query.operation.as_str(), operation.as_str());
        }
    }
}
