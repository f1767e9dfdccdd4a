//! The task-tracker domain served by the CLI.

mod task;
mod task_schema;
mod task_store;

pub(crate) use task::NewTask;
pub(crate) use task::Priority;
pub(crate) use task::Status;
pub(crate) use task::Task;
pub(crate) use task_schema::task_schema;
pub(crate) use task_store::TaskStore;
