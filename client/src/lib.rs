pub mod api;
pub mod controller;
pub mod state;

pub use api::{ApiError, HttpTaskApi, LocalTaskApi, TaskApi};
pub use controller::{dispatch, TaskCommand, TaskListController};
pub use state::ClientTaskStore;
