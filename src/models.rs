use serde::{Deserialize, Serialize};

fn default_open() -> bool {
    true
}

/// Represents a single task record in the store.
///
/// Field names in the serialized form are camelCase (`dueDate`, `subTasks`,
/// ...). Every field except `id` defaults when absent from stored data, so
/// records written by older versions load cleanly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned by the store and never reused.
    pub id: u64,
    /// Whether the task is still open. Closed tasks stay in the store.
    #[serde(default = "default_open")]
    pub open: bool,
    /// The task title.
    #[serde(default)]
    pub name: String,
    /// Free-form ordering hint. Persisted but not interpreted.
    #[serde(default)]
    pub sort: i64,
    /// Free-form text describing the task.
    #[serde(default)]
    pub description: String,
    /// Optional reference link.
    #[serde(default)]
    pub url: String,
    /// Due date in milliseconds since the epoch (0 = unset).
    #[serde(default)]
    pub due_date: i64,
    /// Scheduled date in milliseconds since the epoch (0 = unset).
    #[serde(default)]
    pub scheduled_date: i64,
    /// Creation timestamp in milliseconds since the epoch, set by the store.
    #[serde(default)]
    pub date_added: i64,
    /// Free-form comments.
    #[serde(default)]
    pub comments: String,
    /// Ids of child tasks, in the order they were attached.
    #[serde(default)]
    pub sub_tasks: Vec<u64>,
    /// Numeric priority.
    #[serde(default)]
    pub priority: i64,
    /// True if this record was created as a child of another task.
    #[serde(default)]
    pub sub_task: bool,
}

impl Default for Task {
    fn default() -> Self {
        Task {
            id: 0,
            open: true,
            name: String::new(),
            sort: 0,
            description: String::new(),
            url: String::new(),
            due_date: 0,
            scheduled_date: 0,
            date_added: 0,
            comments: String::new(),
            sub_tasks: Vec::new(),
            priority: 0,
            sub_task: false,
        }
    }
}
