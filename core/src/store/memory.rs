use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::TaskError;
use crate::model::task::Task;
use crate::store::traits::TaskStore;

/// In-memory task store. Insertion order is push order; a single instance
/// may be shared across concurrent callers, with the mutex making each
/// primitive atomic.
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        // A poisoned lock only means another thread panicked mid-mutation
        // of a Vec; the data itself is still well-formed.
        self.tasks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryTaskStore {
    fn create(&self, title: String) -> Result<Task, TaskError> {
        let task = Task::new(title);
        self.lock().push(task.clone());
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.lock().clone())
    }

    fn update(&self, task: &Task) -> Result<bool, TaskError> {
        let mut tasks = self.lock();
        match tasks.iter().position(|t| t.id == task.id) {
            Some(pos) => {
                tasks[pos] = task.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_by_id(&self, id: &Uuid) -> Result<bool, TaskError> {
        let mut tasks = self.lock();
        let initial_len = tasks.len();
        tasks.retain(|t| t.id != *id);
        Ok(tasks.len() < initial_len)
    }

    fn delete_all(&self) -> Result<usize, TaskError> {
        let mut tasks = self.lock();
        let removed = tasks.len();
        tasks.clear();
        Ok(removed)
    }
}
