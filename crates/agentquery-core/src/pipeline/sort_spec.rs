use crate::operation::OperationError;
use crate::pipeline::SortDirection;

const SORT_PREFIX: &str = "sort_";

/// One `sort_<field>=asc|desc` directive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Extracts sort directives from keyed parameters, in order.
    ///
    /// Keys without the `sort_` prefix are ignored. Whether the named field
    /// is actually sortable is checked when sorting.
    pub fn parse_all<'a>(
        named_args: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Vec<SortSpec>, OperationError> {
        let mut specs = vec![];
        for (key, value) in named_args {
            let Some(field) = key.strip_prefix(SORT_PREFIX) else {
                continue;
            };
            if field.is_empty() {
                return Err(OperationError::validation("sort_ prefix requires a field name")
                    .with_detail("arg", key));
            }
            let direction = SortDirection::parse(value).ok_or_else(|| {
                OperationError::validation(format!(
                    "sort direction must be 'asc' or 'desc', got {value:?}",
                ))
                .with_detail("field", field)
                .with_detail("value", value)
            })?;
            specs.push(SortSpec::new(field, direction));
        }
        Ok(specs)
    }
}
