use crate::operation::MutationMetadata;
use crate::operation::OperationHandler;

/// A registered mutation.
pub struct MutationDef<T> {
    pub(crate) name: String,
    pub(crate) handler: OperationHandler<T>,
    pub(crate) metadata: Option<MutationMetadata>,
}

impl<T> MutationDef<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> Option<&MutationMetadata> {
        self.metadata.as_ref()
    }

    /// Mutations without metadata are never destructive.
    pub fn is_destructive(&self) -> bool {
        self.metadata.as_ref().is_some_and(|meta| meta.destructive)
    }
}

impl<T> std::fmt::Debug for MutationDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationDef")
            .field("name", &self.name)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
