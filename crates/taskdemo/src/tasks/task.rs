use std::str::FromStr;

/// Workflow state. Declaration order is sort order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub(crate) const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// Declaration order is sort order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub(crate) const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub(crate) struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Status {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "status",
                value: s.to_string(),
            })
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Task {
    pub id: String,
    pub name: String,
    pub status: Status,
    /// Empty when unassigned.
    pub assignee: String,
    pub priority: Priority,
    pub description: String,
}

/// Input to [`TaskStore::create`](crate::tasks::TaskStore::create). The store
/// assigns the id.
#[derive(Clone, Debug)]
pub(crate) struct NewTask {
    pub name: String,
    pub status: Status,
    pub assignee: String,
    pub priority: Priority,
}
