use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::models::Task;
use crate::parse::parse_terse_input;
use crate::storage::Storage;

/// Owns the in-memory task collection and its persistence lifecycle.
///
/// The store tracks the highest id it has ever assigned and hands out
/// `largest_id + 1` to each new task, so ids are never reused even after a
/// removal. All mutation happens between one load at startup and one flush
/// at shutdown; there is no shared or global state.
pub struct TaskStore {
    tasks: Vec<Task>,
    largest_id: u64,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("largest_id", &self.largest_id)
            .finish_non_exhaustive()
    }
}

impl TaskStore {
    /// Creates an empty store. Whether a missing database file means "start
    /// empty" is the caller's policy, not the store's.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        TaskStore {
            tasks: Vec::new(),
            largest_id: 0,
            clock,
        }
    }

    /// Builds a store from the raw serialized task list.
    ///
    /// `largest_id` is derived as an explicit maximum over the loaded ids,
    /// so out-of-order or duplicate ids in the data cannot understate it.
    pub fn load(data: &str, clock: Box<dyn Clock>) -> Result<Self> {
        let tasks: Vec<Task> = serde_json::from_str(data)?;
        let largest_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Ok(TaskStore {
            tasks,
            largest_id,
            clock,
        })
    }

    /// Reads the task list through the storage collaborator.
    pub fn open(storage: &dyn Storage, clock: Box<dyn Clock>) -> Result<Self> {
        let data = storage.read_all()?;
        let store = Self::load(&data, clock)?;
        info!(tasks = store.tasks.len(), "task store opened");
        Ok(store)
    }

    /// Serializes the task list, in its current order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tasks)?)
    }

    /// Flushes the task list through the storage collaborator.
    ///
    /// Write failures surface as an error rather than being swallowed.
    pub fn close(&self, storage: &dyn Storage) -> Result<()> {
        storage.write_all(&self.to_json()?)?;
        info!(tasks = self.tasks.len(), "task store closed");
        Ok(())
    }

    /// All tasks, most recently added first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The highest id assigned so far (0 for an empty store).
    pub fn largest_id(&self) -> u64 {
        self.largest_id
    }

    /// Linear lookup by id. First match wins.
    pub fn get_task_by_id(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Creates a task from terse `key: value` input and inserts it at the
    /// front of the collection.
    ///
    /// With a `parent` id the new task becomes a subtask: its id is appended
    /// to the parent's `subTasks` list and its `subTask` flag is set. Fields
    /// absent from the input keep their defaults; `id` and `dateAdded` are
    /// always assigned by the store.
    pub fn create_task(&mut self, input: &str, parent: Option<u64>) -> Result<Task> {
        if input.trim().is_empty() {
            return Err(Error::InvalidInput);
        }
        let parent_idx = match parent {
            Some(pid) => Some(
                self.tasks
                    .iter()
                    .position(|t| t.id == pid)
                    .ok_or(Error::TaskNotFound(pid))?,
            ),
            None => None,
        };

        let mut task = Task::default();
        for (key, value) in parse_terse_input(input) {
            apply_field(&mut task, &key, &value);
        }
        task.id = self.largest_id + 1;
        task.date_added = self.clock.now_millis();
        task.sub_task = parent_idx.is_some();

        if let Some(idx) = parent_idx {
            self.tasks[idx].sub_tasks.push(task.id);
        }
        self.largest_id = task.id;
        self.tasks.insert(0, task.clone());
        debug!(id = task.id, subtask = task.sub_task, "task created");
        Ok(task)
    }

    /// Applies terse `key: value` input to an existing task.
    ///
    /// A `name` or `description` value starting with `+` is appended
    /// space-separated to the current value (the `+` is kept); everything
    /// else replaces the field wholesale.
    pub fn edit_task(&mut self, id: u64, input: &str) -> Result<Task> {
        let fields = parse_terse_input(input);
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;

        for (key, value) in fields {
            match key.as_str() {
                "name" if value.starts_with('+') => {
                    task.name = format!("{} {}", task.name, value);
                }
                "description" if value.starts_with('+') => {
                    task.description = format!("{} {}", task.description, value);
                }
                _ => apply_field(task, &key, &value),
            }
        }
        debug!(id, "task edited");
        Ok(task.clone())
    }

    /// Marks a task as closed. Closing an already-closed task is a no-op.
    pub fn close_task(&mut self, id: u64) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.open = false;
        debug!(id, "task closed");
        Ok(task.clone())
    }

    /// Removes a task from the collection, preserving the relative order of
    /// the rest, and returns it.
    ///
    /// References to the removed id in other tasks' `subTasks` lists are
    /// left in place; callers discovering children through a parent must
    /// tolerate ids that no longer resolve.
    pub fn remove_task(&mut self, id: u64) -> Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let task = self.tasks.remove(idx);
        debug!(id, "task removed");
        Ok(task)
    }
}

/// Assigns one parsed field onto a task, coercing to the field's type.
///
/// Integer and boolean fields keep their current value when the input does
/// not parse. `id`, `dateAdded`, `subTasks`, and `subTask` are managed by
/// the store and cannot be set through terse input; unknown keys are
/// dropped.
fn apply_field(task: &mut Task, key: &str, value: &str) {
    match key {
        "name" => task.name = value.to_string(),
        "description" => task.description = value.to_string(),
        "url" => task.url = value.to_string(),
        "comments" => task.comments = value.to_string(),
        "open" => {
            if let Ok(v) = value.parse() {
                task.open = v;
            }
        }
        "sort" => set_int(&mut task.sort, value),
        "dueDate" => set_int(&mut task.due_date, value),
        "scheduledDate" => set_int(&mut task.scheduled_date, value),
        "priority" => set_int(&mut task.priority, value),
        _ => {}
    }
}

fn set_int(field: &mut i64, value: &str) {
    if let Ok(v) = value.parse() {
        *field = v;
    }
}
