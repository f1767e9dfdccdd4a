//! Handler-facing types: the per-invocation context, handler output, errors
//! and the metadata surfaced by introspection.

mod argument_validation;
mod error_code;
mod mutation_def;
mod mutation_metadata;
mod mutation_options;
mod operation_context;
mod operation_def;
mod operation_error;
mod operation_metadata;
mod output;
mod parameter_def;

pub(crate) use argument_validation::validate_mutation_args;
pub use error_code::ErrorCode;
pub use mutation_def::MutationDef;
pub use mutation_metadata::MutationMetadata;
pub use mutation_options::MutationOptions;
pub use operation_context::OperationContext;
pub use operation_def::HandlerResult;
pub use operation_def::OperationDef;
pub use operation_def::OperationHandler;
pub use operation_error::OperationError;
pub use operation_metadata::OperationMetadata;
pub use output::Output;
pub use parameter_def::ParameterDef;
