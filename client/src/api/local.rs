use taskdeck_core::{Task, TaskError, TaskService, TaskStore};
use uuid::Uuid;

use super::{ApiError, TaskApi};

/// In-process task API wrapping a `TaskService` directly, performing the
/// same status mapping the HTTP surface does: validation failures become
/// 400, storage failures 500. Lets the TUI run without a server and lets
/// tests exercise the full stack in one process.
pub struct LocalTaskApi<S: TaskStore> {
    service: TaskService<S>,
}

impl<S: TaskStore> LocalTaskApi<S> {
    pub fn new(service: TaskService<S>) -> Self {
        Self { service }
    }
}

fn to_api_error(err: TaskError) -> ApiError {
    match err {
        TaskError::Validation(_) => ApiError::Server { status: 400 },
        TaskError::Storage(_) => ApiError::Server { status: 500 },
    }
}

impl<S: TaskStore> TaskApi for LocalTaskApi<S> {
    fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.service.list_tasks().map_err(to_api_error)
    }

    fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        self.service.create_task(title).map_err(to_api_error)
    }

    fn delete_task(&self, id: &Uuid) -> Result<(), ApiError> {
        // An unknown id is still success, exactly like the 204 on the wire.
        self.service.delete_task(id).map(|_| ()).map_err(to_api_error)
    }

    fn delete_all_tasks(&self) -> Result<(), ApiError> {
        self.service
            .delete_all_tasks()
            .map(|_| ())
            .map_err(to_api_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_core::MemoryTaskStore;

    fn api() -> LocalTaskApi<MemoryTaskStore> {
        LocalTaskApi::new(TaskService::new(MemoryTaskStore::new()))
    }

    #[test]
    fn empty_title_maps_to_400() {
        let api = api();
        match api.create_task("   ") {
            Err(ApiError::Server { status: 400 }) => {}
            other => panic!("expected 400, got {other:?}"),
        }
    }

    #[test]
    fn unknown_id_delete_is_success() {
        let api = api();
        api.delete_task(&Uuid::new_v4()).unwrap();
    }

    #[test]
    fn delete_all_succeeds_on_empty_store() {
        let api = api();
        api.delete_all_tasks().unwrap();
        api.delete_all_tasks().unwrap();
    }
}
