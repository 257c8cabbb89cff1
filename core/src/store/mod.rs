pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileTaskStore;
pub use memory::MemoryTaskStore;
pub use traits::TaskStore;
