use taskdeck_core::Task;
use uuid::Uuid;

/// Client-side view of the task list plus transient UI state.
///
/// Pure container: no network calls happen here, and every instance is
/// owned by exactly one `TaskListController`. The two bulk-delete flags are
/// mutually exclusive; `deleting_all` is only reachable through the
/// confirming state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClientTaskStore {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    confirming_delete_all: bool,
    deleting_all: bool,
}

impl ClientTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_confirming_delete_all(&self) -> bool {
        self.confirming_delete_all
    }

    pub fn is_deleting_all(&self) -> bool {
        self.deleting_all
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Enters the confirming state. No-op if already confirming; refused
    /// while a bulk delete is running.
    pub fn begin_delete_all_confirmation(&mut self) {
        if self.deleting_all {
            return;
        }
        self.confirming_delete_all = true;
    }

    /// Leaves the confirming state. Only the confirming flag changes.
    pub fn cancel_delete_all_confirmation(&mut self) {
        self.confirming_delete_all = false;
    }

    pub(crate) fn begin_deleting_all(&mut self) {
        if self.confirming_delete_all {
            self.confirming_delete_all = false;
            self.deleting_all = true;
        }
    }

    pub(crate) fn finish_deleting_all(&mut self) {
        self.deleting_all = false;
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove_task(&mut self, id: &Uuid) {
        self.tasks.retain(|t| t.id != *id);
    }
}
