use crate::tasks::NewTask;
use crate::tasks::Priority;
use crate::tasks::Status;
use crate::tasks::Task;
use agentquery::operation::OperationError;
use std::sync::RwLock;

struct StoreState {
    tasks: Vec<Task>,
    next_id: usize,
}

/// In-memory task storage shared between the loader and the mutation
/// handlers. Reads hand out snapshots.
pub(crate) struct TaskStore {
    state: RwLock<StoreState>,
}

impl TaskStore {
    pub(crate) fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.len() + 1;
        Self {
            state: RwLock::new(StoreState { tasks, next_id }),
        }
    }

    pub(crate) fn with_sample_tasks() -> Self {
        Self::new(sample_tasks())
    }

    pub(crate) fn snapshot(&self) -> Result<Vec<Task>, OperationError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.tasks.clone())
    }

    pub(crate) fn find(&self, id: &str) -> Result<Task, OperationError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        state
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub(crate) fn create(&self, new_task: NewTask) -> Result<Task, OperationError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let task = Task {
            id: format!("task-{}", state.next_id),
            name: new_task.name,
            status: new_task.status,
            assignee: new_task.assignee,
            priority: new_task.priority,
            description: String::new(),
        };
        state.next_id += 1;
        state.tasks.push(task.clone());
        log::debug!("created {}", task.id);
        Ok(task)
    }

    /// Applies `apply` to the task with `id` and returns the updated copy.
    pub(crate) fn update(
        &self,
        id: &str,
        apply: impl FnOnce(&mut Task),
    ) -> Result<Task, OperationError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;
        apply(task);
        Ok(task.clone())
    }

    pub(crate) fn remove(&self, id: &str) -> Result<Task, OperationError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let index = state
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;
        log::debug!("removing {id}");
        Ok(state.tasks.remove(index))
    }
}

fn not_found(id: &str) -> OperationError {
    OperationError::not_found(format!("task {id:?} not found")).with_detail("id", id)
}

fn poisoned() -> OperationError {
    OperationError::internal("task store lock poisoned")
}

fn sample_tasks() -> Vec<Task> {
    let task = |id: usize,
                name: &str,
                status: Status,
                assignee: &str,
                priority: Priority,
                description: &str| Task {
        id: format!("task-{id}"),
        name: name.to_string(),
        status,
        assignee: assignee.to_string(),
        priority,
        description: description.to_string(),
    };
    vec![
        task(1, "Auth service refactor", Status::InProgress, "alice", Priority::High, "Refactor auth to use JWT tokens"),
        task(2, "Dashboard performance", Status::Todo, "bob", Priority::Medium, "Optimize dashboard load time to under 2s"),
        task(3, "Fix login redirect bug", Status::Done, "alice", Priority::High, "Users get stuck on /callback after OAuth"),
        task(4, "Add dark mode", Status::Done, "carol", Priority::Low, "Implement dark mode toggle in settings"),
        task(5, "Pagination API", Status::InProgress, "dave", Priority::Medium, "Add cursor-based pagination to list endpoints"),
        task(6, "CI pipeline speedup", Status::Todo, "", Priority::Medium, "Reduce CI build time from 12min to under 5min"),
        task(7, "Write onboarding docs", Status::Done, "carol", Priority::Low, "New developer onboarding guide"),
        task(8, "Rate limiter middleware", Status::InProgress, "bob", Priority::High, "Add per-user rate limiting to public API"),
    ]
}
