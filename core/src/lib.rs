pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::TaskError;
pub use model::task::Task;
pub use service::task_service::TaskService;
pub use store::{FileTaskStore, MemoryTaskStore, TaskStore};
