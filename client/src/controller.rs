use taskdeck_core::Task;
use uuid::Uuid;

use crate::api::{ApiError, TaskApi};
use crate::state::ClientTaskStore;

/// Request the controller wants issued against the task API. The driver
/// (the TUI loop, or a test) executes it and feeds the result back through
/// the matching `on_*` handler.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskCommand {
    Fetch,
    Create(String),
    Delete(Uuid),
    DeleteAll,
}

/// Orchestrates user actions against a `ClientTaskStore`, including the
/// two-step delete-all flow:
///
/// ```text
/// Idle -> Confirming -> Deleting -> Idle            (success)
/// Confirming -> Idle                                 (cancel)
/// Deleting -> Idle + error                           (failure)
/// ```
///
/// Requests are serialized: every event method refuses to emit a command
/// while another request is in flight. While `Deleting`, a second confirm
/// is impossible because the machine has left the confirming state, not
/// because anything is visually hidden.
pub struct TaskListController {
    store: ClientTaskStore,
    detached: bool,
}

impl TaskListController {
    pub fn new() -> Self {
        Self {
            store: ClientTaskStore::new(),
            detached: false,
        }
    }

    pub fn state(&self) -> &ClientTaskStore {
        &self.store
    }

    /// True while a request is in flight. All mutating triggers are inert
    /// until the matching response handler runs.
    pub fn busy(&self) -> bool {
        self.store.is_loading() || self.store.is_deleting_all()
    }

    /// Marks the owning view as gone. Responses arriving afterwards are
    /// dropped, so a late reply can never touch dead state.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn load(&mut self) -> Option<TaskCommand> {
        if self.busy() {
            return None;
        }
        self.store.set_error(None);
        self.store.set_loading(true);
        Some(TaskCommand::Fetch)
    }

    /// Submits a new title. No client-side validation: an empty title comes
    /// back as a 400 and surfaces through `error` like any other failure.
    pub fn submit_new(&mut self, title: &str) -> Option<TaskCommand> {
        if self.busy() {
            return None;
        }
        self.store.set_error(None);
        self.store.set_loading(true);
        Some(TaskCommand::Create(title.to_string()))
    }

    /// Single-item delete: no confirmation step. The task stays in `tasks`
    /// until the server acknowledges.
    pub fn delete_task(&mut self, id: &Uuid) -> Option<TaskCommand> {
        if self.busy() {
            return None;
        }
        self.store.set_error(None);
        self.store.set_loading(true);
        Some(TaskCommand::Delete(*id))
    }

    /// Whether the delete-all entry point should exist at all. False with
    /// an empty list, so bulk delete is unreachable when there is nothing
    /// to delete.
    pub fn can_request_delete_all(&self) -> bool {
        !self.store.tasks().is_empty()
            && !self.busy()
            && !self.store.is_confirming_delete_all()
    }

    /// Step one of the two-step flow. Pure state change, no request; the
    /// point of this step is that one click can never destroy anything.
    pub fn request_delete_all(&mut self) {
        if !self.can_request_delete_all() {
            return;
        }
        self.store.begin_delete_all_confirmation();
    }

    /// Backs out of the confirming state. Never issues a request and never
    /// touches `tasks`.
    pub fn cancel_delete_all(&mut self) {
        self.store.cancel_delete_all_confirmation();
    }

    /// Step two: actually issue the bulk delete. Only legal from the
    /// confirming state.
    pub fn confirm_delete_all(&mut self) -> Option<TaskCommand> {
        if !self.store.is_confirming_delete_all() {
            return None;
        }
        self.store.set_error(None);
        self.store.begin_deleting_all();
        Some(TaskCommand::DeleteAll)
    }

    pub fn on_tasks_loaded(&mut self, result: Result<Vec<Task>, ApiError>) {
        if self.detached {
            return;
        }
        self.store.set_loading(false);
        match result {
            Ok(tasks) => self.store.set_tasks(tasks),
            Err(err) => self.store.set_error(Some(err.user_message())),
        }
    }

    pub fn on_task_created(&mut self, result: Result<Task, ApiError>) {
        if self.detached {
            return;
        }
        self.store.set_loading(false);
        match result {
            Ok(task) => self.store.push_task(task),
            Err(err) => self.store.set_error(Some(err.user_message())),
        }
    }

    pub fn on_task_deleted(&mut self, id: &Uuid, result: Result<(), ApiError>) {
        if self.detached {
            return;
        }
        self.store.set_loading(false);
        match result {
            Ok(()) => self.store.remove_task(id),
            Err(err) => self.store.set_error(Some(err.user_message())),
        }
    }

    /// Ends the bulk delete. Only on success is the list cleared; a failure
    /// leaves `tasks` untouched so the UI never shows a false "no tasks"
    /// state, and the user must restart the two-step flow.
    pub fn on_delete_all_done(&mut self, result: Result<(), ApiError>) {
        if self.detached {
            return;
        }
        self.store.finish_deleting_all();
        match result {
            Ok(()) => self.store.set_tasks(Vec::new()),
            Err(err) => self.store.set_error(Some(err.user_message())),
        }
    }
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one command against an API and routes the result back into the
/// controller. This is the whole asynchronous boundary: between the event
/// method and the handler the controller refuses further mutations.
pub fn dispatch<A: TaskApi + ?Sized>(
    controller: &mut TaskListController,
    api: &A,
    command: TaskCommand,
) {
    match command {
        TaskCommand::Fetch => {
            let result = api.list_tasks();
            controller.on_tasks_loaded(result);
        }
        TaskCommand::Create(title) => {
            let result = api.create_task(&title);
            controller.on_task_created(result);
        }
        TaskCommand::Delete(id) => {
            let result = api.delete_task(&id);
            controller.on_task_deleted(&id, result);
        }
        TaskCommand::DeleteAll => {
            let result = api.delete_all_tasks();
            controller.on_delete_all_done(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LocalTaskApi;
    use taskdeck_core::{MemoryTaskStore, TaskService};

    fn seeded(titles: &[&str]) -> TaskListController {
        let mut controller = TaskListController::new();
        let tasks: Vec<Task> = titles.iter().map(|t| Task::new(t.to_string())).collect();
        let cmd = controller.load();
        assert_eq!(cmd, Some(TaskCommand::Fetch));
        controller.on_tasks_loaded(Ok(tasks));
        controller
    }

    fn server_error() -> ApiError {
        ApiError::Server { status: 500 }
    }

    #[test]
    fn delete_all_entry_point_absent_with_empty_list() {
        let mut controller = seeded(&[]);
        assert!(!controller.can_request_delete_all());

        controller.request_delete_all();
        assert!(!controller.state().is_confirming_delete_all());
    }

    #[test]
    fn cancel_returns_to_idle_with_state_bit_for_bit_unchanged() {
        // Scenario: Delete All -> Cancel leaves everything as it was.
        let mut controller = seeded(&["a", "b"]);
        let before = controller.state().clone();

        controller.request_delete_all();
        assert!(controller.state().is_confirming_delete_all());
        assert!(!controller.busy());

        controller.cancel_delete_all();
        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn confirm_transitions_to_deleting_and_blocks_everything() {
        let mut controller = seeded(&["a"]);
        controller.request_delete_all();

        let cmd = controller.confirm_delete_all();
        assert_eq!(cmd, Some(TaskCommand::DeleteAll));
        assert!(controller.state().is_deleting_all());
        assert!(controller.busy());

        // a second confirm is impossible: the machine left Confirming
        assert_eq!(controller.confirm_delete_all(), None);
        // so are all other mutating triggers
        assert_eq!(controller.load(), None);
        assert_eq!(controller.submit_new("x"), None);
        assert_eq!(controller.delete_task(&Uuid::new_v4()), None);
        assert!(!controller.can_request_delete_all());
    }

    #[test]
    fn delete_all_success_empties_list_and_hides_entry_point() {
        let mut controller = seeded(&["a", "b"]);
        controller.request_delete_all();
        controller.confirm_delete_all().unwrap();

        controller.on_delete_all_done(Ok(()));

        assert!(controller.state().tasks().is_empty());
        assert!(!controller.state().is_deleting_all());
        assert!(controller.state().error().is_none());
        // visibility precondition gone along with the tasks
        assert!(!controller.can_request_delete_all());
    }

    #[test]
    fn delete_all_failure_keeps_tasks_and_surfaces_error() {
        // Scenario: confirm, backend fails -> Idle + error, tasks intact.
        let mut controller = seeded(&["a", "b"]);
        controller.request_delete_all();
        controller.confirm_delete_all().unwrap();

        controller.on_delete_all_done(Err(server_error()));

        assert_eq!(controller.state().tasks().len(), 2);
        assert!(!controller.state().is_deleting_all());
        assert!(!controller.state().is_confirming_delete_all());
        assert!(controller.state().error().is_some());
        // the flow must be restarted from step one
        assert!(controller.can_request_delete_all());
    }

    #[test]
    fn confirm_without_request_is_refused() {
        let mut controller = seeded(&["a"]);
        assert_eq!(controller.confirm_delete_all(), None);
        assert!(!controller.state().is_deleting_all());
    }

    #[test]
    fn single_delete_removes_only_after_acknowledgement() {
        let mut controller = seeded(&["a", "b"]);
        let id = controller.state().tasks()[0].id;

        let cmd = controller.delete_task(&id);
        assert_eq!(cmd, Some(TaskCommand::Delete(id)));
        // still present until the server says so
        assert_eq!(controller.state().tasks().len(), 2);

        controller.on_task_deleted(&id, Ok(()));
        assert_eq!(controller.state().tasks().len(), 1);
        assert_ne!(controller.state().tasks()[0].id, id);
    }

    #[test]
    fn single_delete_failure_restores_nothing_because_nothing_was_removed() {
        let mut controller = seeded(&["a"]);
        let id = controller.state().tasks()[0].id;

        controller.delete_task(&id);
        controller.on_task_deleted(&id, Err(server_error()));

        assert_eq!(controller.state().tasks().len(), 1);
        assert!(controller.state().error().is_some());
    }

    #[test]
    fn mutating_requests_are_serialized() {
        let mut controller = seeded(&["a"]);

        assert!(controller.load().is_some());
        // in flight: everything else refuses
        assert_eq!(controller.load(), None);
        assert_eq!(controller.submit_new("x"), None);
        controller.request_delete_all();
        assert!(!controller.state().is_confirming_delete_all());

        controller.on_tasks_loaded(Ok(vec![Task::new("a".to_string())]));
        assert!(controller.load().is_some());
    }

    #[test]
    fn detached_controller_ignores_late_responses() {
        let mut controller = seeded(&["a", "b"]);
        controller.request_delete_all();
        controller.confirm_delete_all().unwrap();

        controller.detach();
        let before = controller.state().clone();

        controller.on_delete_all_done(Ok(()));
        assert_eq!(*controller.state(), before);

        controller.on_tasks_loaded(Ok(Vec::new()));
        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn fetch_failure_leaves_previous_tasks_visible() {
        let mut controller = seeded(&["a"]);

        controller.load();
        controller.on_tasks_loaded(Err(ApiError::Network("timed out".to_string())));

        assert_eq!(controller.state().tasks().len(), 1);
        assert!(controller.state().error().is_some());
        assert!(!controller.state().is_loading());
    }

    #[test]
    fn full_flow_against_the_in_process_stack() {
        // End to end: controller commands dispatched through LocalTaskApi
        // down to a real MemoryTaskStore.
        let api = LocalTaskApi::new(TaskService::new(MemoryTaskStore::new()));
        let mut controller = TaskListController::new();

        let cmd = controller.load().unwrap();
        dispatch(&mut controller, &api, cmd);
        assert!(controller.state().tasks().is_empty());

        for title in ["first", "second"] {
            let cmd = controller.submit_new(title).unwrap();
            dispatch(&mut controller, &api, cmd);
        }
        assert_eq!(controller.state().tasks().len(), 2);

        // empty title: refused by the service, surfaced as an inline error
        let cmd = controller.submit_new("   ").unwrap();
        dispatch(&mut controller, &api, cmd);
        assert_eq!(controller.state().tasks().len(), 2);
        assert!(controller.state().error().is_some());

        // two-step wipe
        controller.request_delete_all();
        let cmd = controller.confirm_delete_all().unwrap();
        dispatch(&mut controller, &api, cmd);
        assert!(controller.state().tasks().is_empty());
        assert!(api.list_tasks().unwrap().is_empty());
    }
}
