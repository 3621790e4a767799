//! Storage media the planner can be persisted into

pub mod memory_backend;
pub mod file_backend;

pub use memory_backend::MemoryBackend;
pub use file_backend::FileBackend;
