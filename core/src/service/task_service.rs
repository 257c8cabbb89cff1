use uuid::Uuid;

use crate::error::TaskError;
use crate::model::task::Task;
use crate::store::TaskStore;

/// Business-rule layer between the API surface and the raw store.
///
/// Stateless; one instance can serve any number of calls, or a fresh one can
/// be built per request around a shared store.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task from a user-supplied title. The title is trimmed
    /// before storage; a title that is empty after trimming is rejected.
    pub fn create_task(&self, title: &str) -> Result<Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::Validation(
                "title must not be empty".to_string(),
            ));
        }
        self.store.create(title.to_string())
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.store.list()
    }

    /// Flips the completed flag. Returns whether a task with that id exists.
    pub fn toggle_task(&self, id: &Uuid) -> Result<bool, TaskError> {
        let tasks = self.store.list()?;
        match tasks.into_iter().find(|t| t.id == *id) {
            Some(mut task) => {
                task.toggle_completed();
                self.store.update(&task)
            }
            None => Ok(false),
        }
    }

    /// Deletes one task. An absent id returns `Ok(false)` ("nothing to
    /// delete") rather than an error, so lost-response retries are safe.
    pub fn delete_task(&self, id: &Uuid) -> Result<bool, TaskError> {
        self.store.delete_by_id(id)
    }

    /// Deletes every task and returns the count removed. Idempotent: on an
    /// already-empty store this returns `Ok(0)`, never an error, so a
    /// duplicate click or a retry after a lost response cannot fail.
    pub fn delete_all_tasks(&self) -> Result<usize, TaskError> {
        self.store.delete_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTaskStore;
    use anyhow::anyhow;

    fn service() -> TaskService<MemoryTaskStore> {
        TaskService::new(MemoryTaskStore::new())
    }

    /// Store whose every primitive fails, for checking propagation.
    struct BrokenStore;

    impl TaskStore for BrokenStore {
        fn create(&self, _title: String) -> Result<Task, TaskError> {
            Err(TaskError::Storage(anyhow!("disk on fire")))
        }
        fn list(&self) -> Result<Vec<Task>, TaskError> {
            Err(TaskError::Storage(anyhow!("disk on fire")))
        }
        fn update(&self, _task: &Task) -> Result<bool, TaskError> {
            Err(TaskError::Storage(anyhow!("disk on fire")))
        }
        fn delete_by_id(&self, _id: &Uuid) -> Result<bool, TaskError> {
            Err(TaskError::Storage(anyhow!("disk on fire")))
        }
        fn delete_all(&self) -> Result<usize, TaskError> {
            Err(TaskError::Storage(anyhow!("disk on fire")))
        }
    }

    #[test]
    fn create_task_trims_title() {
        let service = service();
        let task = service.create_task("  buy milk  ").unwrap();
        assert_eq!(task.title, "buy milk");
    }

    #[test]
    fn create_task_rejects_whitespace_only_titles() {
        let service = service();
        for title in ["", " ", "   ", "\t", " \n "] {
            let err = service.create_task(title).unwrap_err();
            assert!(matches!(err, TaskError::Validation(_)), "title {title:?}");
        }
        assert!(service.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn validation_happens_before_the_store_is_touched() {
        let service = TaskService::new(BrokenStore);
        let err = service.create_task("   ").unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[test]
    fn storage_failures_propagate_unretried() {
        let service = TaskService::new(BrokenStore);
        assert!(matches!(
            service.delete_all_tasks().unwrap_err(),
            TaskError::Storage(_)
        ));
        assert!(matches!(
            service.create_task("ok title").unwrap_err(),
            TaskError::Storage(_)
        ));
    }

    #[test]
    fn delete_task_missing_id_returns_false_without_side_effects() {
        let service = service();
        service.create_task("keep me").unwrap();

        assert!(!service.delete_task(&Uuid::new_v4()).unwrap());

        let tasks = service.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "keep me");
    }

    #[test]
    fn delete_all_reports_count_then_zero() {
        // Scenario: two tasks, then a full wipe, then a duplicate wipe.
        let service = service();
        service.create_task("a").unwrap();
        service.create_task("b").unwrap();

        assert_eq!(service.delete_all_tasks().unwrap(), 2);
        assert!(service.list_tasks().unwrap().is_empty());
        assert_eq!(service.delete_all_tasks().unwrap(), 0);
    }

    #[test]
    fn delete_all_on_empty_store_is_not_an_error() {
        let service = service();
        assert_eq!(service.delete_all_tasks().unwrap(), 0);
    }

    #[test]
    fn toggle_task_round_trips() {
        let service = service();
        let task = service.create_task("flip me").unwrap();

        assert!(service.toggle_task(&task.id).unwrap());
        assert!(service.list_tasks().unwrap()[0].completed);

        assert!(service.toggle_task(&task.id).unwrap());
        assert!(!service.list_tasks().unwrap()[0].completed);

        assert!(!service.toggle_task(&Uuid::new_v4()).unwrap());
    }
}
