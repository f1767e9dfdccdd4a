use crate::operation::OperationContext;
use crate::operation::OperationError;
use crate::operation::OperationMetadata;
use crate::operation::Output;

pub type HandlerResult<T> = Result<Output<T>, OperationError>;

/// A handler callback. Used for both read operations and mutations.
pub type OperationHandler<T> =
    Box<dyn Fn(&OperationContext<'_, T>) -> HandlerResult<T> + Send + Sync>;

/// A registered read operation.
pub struct OperationDef<T> {
    pub(crate) name: String,
    pub(crate) handler: OperationHandler<T>,
    pub(crate) metadata: Option<OperationMetadata>,
}

impl<T> OperationDef<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> Option<&OperationMetadata> {
        self.metadata.as_ref()
    }
}

impl<T> std::fmt::Debug for OperationDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationDef")
            .field("name", &self.name)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
