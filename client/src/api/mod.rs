pub mod http;
pub mod local;

pub use http::HttpTaskApi;
pub use local::LocalTaskApi;

use taskdeck_core::Task;
use thiserror::Error;
use uuid::Uuid;

/// Client-side view of request failures. `Network` means the request never
/// produced a server answer (connectivity is at fault, not the data);
/// `Server` carries the HTTP status the server answered with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("server error (status {status})")]
    Server { status: u16 },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown to the user. Connectivity faults are worded
    /// differently from server faults so the user knows which side failed.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Server { status: 400 } => "The task title must not be empty.".to_string(),
            ApiError::Server { .. } => {
                "The server could not complete the request. Try again.".to_string()
            }
            ApiError::Decode(_) => {
                "The server sent an unexpected response. Try again.".to_string()
            }
        }
    }
}

/// Strongly-typed task API boundary. The controller only ever sees these
/// typed results, never raw response bodies.
///
/// The HTTP mapping (see `HttpTaskApi`):
///
/// - `list_tasks`       GET    /api/tasks       -> 200 + Task array
/// - `create_task`      POST   /api/tasks       -> 201 + Task (400 on empty title)
/// - `delete_task`      DELETE /api/tasks/{id}  -> 204, also for unknown ids
/// - `delete_all_tasks` DELETE /api/tasks       -> 204, idempotent
pub trait TaskApi {
    fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    fn create_task(&self, title: &str) -> Result<Task, ApiError>;
    fn delete_task(&self, id: &Uuid) -> Result<(), ApiError>;
    fn delete_all_tasks(&self) -> Result<(), ApiError>;
}
