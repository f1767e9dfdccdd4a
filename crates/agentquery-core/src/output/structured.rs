use crate::execution::Outcome;
use crate::operation::ErrorCode;
use agentquery_parser::ParseError;
use serde_json::Value;
use serde_json::json;

pub(super) fn render(outcome: &Outcome) -> String {
    outcome.to_value().to_string()
}

/// `{"error": {"code": "PARSE_ERROR", "message", "details"?, "position"}}`
/// with a 1-based line and column.
pub fn parse_error_payload(err: &ParseError) -> Value {
    let pos = err.position();
    let mut details = json!({});
    if !err.got().is_empty() {
        details["got"] = json!(err.got());
    }
    if let Some(expected) = err.expected() {
        details["expected"] = json!(expected);
    }

    let mut error = json!({
        "code": ErrorCode::Parse.as_str(),
        "message": err.message(),
    });
    if details.as_object().is_some_and(|map| !map.is_empty()) {
        error["details"] = details;
    }
    error["position"] = json!({
        "offset": pos.byte_offset(),
        "line": pos.display_line(),
        "column": pos.display_column(),
    });
    json!({ "error": error })
}
