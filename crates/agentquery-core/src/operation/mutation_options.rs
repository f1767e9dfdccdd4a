/// Caller assertions for the mutation entry point.
///
/// These come from the transport boundary (e.g. CLI flags), never from the
/// schema.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MutationOptions {
    /// Required before any mutation marked `destructive` will run.
    pub confirmed: bool,
    /// Reaches handlers as [`OperationContext::is_dry_run`](crate::operation::OperationContext::is_dry_run).
    pub dry_run: bool,
}

impl MutationOptions {
    pub fn confirmed() -> Self {
        Self {
            confirmed: true,
            dry_run: false,
        }
    }

    pub fn dry_run() -> Self {
        Self {
            confirmed: false,
            dry_run: true,
        }
    }
}
