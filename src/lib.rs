//! # tasknest
//!
//! A small personal task-tracking library: load a task list from a single
//! JSON file, create/edit/close/remove tasks (including subtasks), and flush
//! the list back out. Presentation is deliberately out of scope — there is
//! no CLI surface here, only the engine a front end calls into.
//!
//! ## Features
//!
//! *   **Terse input**: tasks are created and edited from `key: value,
//!     key: value` text (e.g. `name: Buy milk, priority: 2`).
//! *   **Subtasks**: a task can be created under a parent, which records the
//!     child id in its `subTasks` list.
//! *   **Append edits**: a `name` or `description` value starting with `+`
//!     is appended to the existing text instead of replacing it.
//! *   **Stable ids**: ids are assigned monotonically and never reused,
//!     even after a task is removed.
//! *   **Data Persistence**: the whole list is one JSON document, written
//!     to a caller-chosen file (with an XDG-style default location).
//!
//! ## Usage
//!
//! ```
//! use tasknest::{SystemClock, TaskStore};
//!
//! let mut store = TaskStore::new(Box::new(SystemClock));
//! let task = store.create_task("name: Buy milk, priority: 2", None)?;
//! let sub = store.create_task("name: Check the fridge first", Some(task.id))?;
//! store.close_task(sub.id)?;
//! # Ok::<(), tasknest::Error>(())
//! ```
//!
//! Persistence goes through the [`Storage`] collaborator; [`FileStorage`]
//! is the shipped file-backed implementation:
//!
//! ```no_run
//! use tasknest::{FileStorage, SystemClock, TaskStore};
//!
//! let storage = FileStorage::default_location();
//! let mut store = TaskStore::open(&storage, Box::new(SystemClock))?;
//! store.create_task("name: Water the plants", None)?;
//! store.close(&storage)?;
//! # Ok::<(), tasknest::Error>(())
//! ```
//!
//! ## Data Storage
//!
//! By default tasks are saved in your local data directory:
//! *   Linux: `~/.local/share/tasknest/tasks.json`
//! *   macOS: `~/Library/Application Support/tasknest/tasks.json`
//! *   Windows: `%APPDATA%\tasknest\tasks.json`
//!
//! You can override this by setting the `TASKNEST_DB` environment variable,
//! or bypass it entirely with [`FileStorage::new`].
//!
//! The library is single-process and last-writer-wins: no file locking, no
//! multi-writer coordination.

pub mod clock;
pub mod error;
pub mod models;
pub mod parse;
pub mod storage;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use models::Task;
pub use storage::{FileStorage, Storage};
pub use store::TaskStore;
