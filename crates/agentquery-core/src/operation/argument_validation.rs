use crate::operation::ErrorCode;
use crate::operation::MutationMetadata;
use crate::operation::OperationContext;
use crate::operation::OperationError;
use crate::pipeline::eq_ignore_case;
use serde_json::Map;
use serde_json::Value;

/// Checks a mutation's declared parameters before its handler runs.
///
/// Required parameters must be present as keyed arguments, except that any
/// positional argument satisfies them (it is usually the element id). Enum
/// parameters, when supplied, must match one of their values ignoring case.
/// All failures are collected; the returned error carries the first
/// failure's code and lists every failure under `details.errors`.
pub(crate) fn validate_mutation_args<T>(
    ctx: &OperationContext<'_, T>,
    metadata: &MutationMetadata,
) -> Result<(), OperationError> {
    let has_positional = ctx.positional_args().iter().any(|arg| !arg.is_empty());
    let mut failures: Vec<(ErrorCode, &str, String)> = vec![];

    for param in &metadata.parameters {
        let supplied = ctx.arg(&param.name);
        if param.required && supplied.is_none() && !has_positional {
            failures.push((
                ErrorCode::Required,
                param.name.as_str(),
                format!("required parameter {:?} is missing", param.name),
            ));
        }
        if let Some(value) = supplied
            && !param.enum_values.is_empty()
            && !param.enum_values.iter().any(|allowed| eq_ignore_case(allowed, value))
        {
            failures.push((
                ErrorCode::InvalidValue,
                param.name.as_str(),
                format!(
                    "invalid value {value:?} for {}, must be one of: {}",
                    param.name,
                    param.enum_values.join(", "),
                ),
            ));
        }
    }

    let Some((first_code, _, _)) = failures.first() else {
        return Ok(());
    };
    let message = failures
        .iter()
        .map(|(_, _, message)| message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    let errors: Vec<Value> = failures
        .iter()
        .map(|(code, field, message)| {
            let mut entry = Map::new();
            entry.insert("field".to_string(), Value::from(*field));
            entry.insert("code".to_string(), Value::from(code.as_str()));
            entry.insert("message".to_string(), Value::from(message.as_str()));
            Value::Object(entry)
        })
        .collect();
    Err(OperationError::new(*first_code, message).with_detail("errors", errors))
}
