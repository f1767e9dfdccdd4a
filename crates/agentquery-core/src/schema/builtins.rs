//! Read operations every schema gets unless the host registers the same
//! names itself.

use crate::operation::HandlerResult;
use crate::operation::OperationContext;
use crate::operation::OperationError;
use crate::operation::OperationMetadata;
use crate::operation::Output;
use crate::operation::ParameterDef;
use crate::pipeline::distinct_values;
use crate::pipeline::filter_items;
use serde_json::Value;

pub(crate) const SCHEMA_OPERATION: &str = "schema";
pub(crate) const DISTINCT_OPERATION: &str = "distinct";

/// `schema()`: the live introspection document.
pub(crate) fn schema_operation<T>(ctx: &OperationContext<'_, T>) -> HandlerResult<T> {
    Ok(Output::Metadata(ctx.schema().introspect()))
}

pub(crate) fn schema_operation_metadata() -> OperationMetadata {
    OperationMetadata::new(
        "Describes the fields, presets, operations, mutations, filterable and sortable fields of this schema.",
    )
    .example("schema()")
}

/// `distinct(field)`: unique values of a filterable field, first-seen order.
///
/// Other keyed parameters filter the elements first, as for any read.
pub(crate) fn distinct_operation<T>(ctx: &OperationContext<'_, T>) -> HandlerResult<T> {
    let field = ctx
        .positional_arg()
        .or_else(|| ctx.arg("field"))
        .ok_or_else(|| {
            OperationError::validation(
                "distinct requires a field name argument: distinct(field_name)",
            )
        })?;

    let schema = ctx.schema();
    let accessor = schema.filter_accessor(field).ok_or_else(|| {
        let available: Vec<&str> = schema.filterable_field_names().collect();
        OperationError::validation(format!("unknown filterable field: {field}"))
            .with_detail("field", field)
            .with_detail("available", available)
    })?;

    let items = filter_items(ctx.items()?, ctx.predicate());
    Ok(Output::Value(Value::from(distinct_values(&items, accessor))))
}

pub(crate) fn distinct_operation_metadata() -> OperationMetadata {
    OperationMetadata::new("Returns unique values for a filterable field.")
        .param(
            ParameterDef::new("field", "string")
                .required()
                .with_description("Name of a registered filterable field."),
        )
        .example("distinct(status)")
}
