use uuid::Uuid;

use crate::error::TaskError;
use crate::model::task::Task;

/// Raw storage primitives. No business validation lives here; that is the
/// service layer's job.
pub trait TaskStore {
    /// Stores a new task under a fresh id and returns it.
    fn create(&self, title: String) -> Result<Task, TaskError>;

    /// All live tasks in insertion order. An empty store yields an empty
    /// vec, never an error.
    fn list(&self) -> Result<Vec<Task>, TaskError>;

    /// Replaces the stored task with the same id. Returns whether a task
    /// was present to replace.
    fn update(&self, task: &Task) -> Result<bool, TaskError>;

    /// Removes the task if present. An absent id is `Ok(false)`, not an
    /// error, so callers can retry safely.
    fn delete_by_id(&self, id: &Uuid) -> Result<bool, TaskError>;

    /// Removes every task and returns how many were removed (0 for an
    /// already-empty store). Holds the store's write exclusively while
    /// committing, so a `create` that lands afterwards is never lost.
    fn delete_all(&self) -> Result<usize, TaskError>;
}
