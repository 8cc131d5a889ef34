//! ProjectRepo implementations: SQLite (default), JSON file, in-memory.

pub mod json_repo;
pub mod memory_repo;
pub mod sqlite_repo;

pub use json_repo::JsonRepo;
pub use memory_repo::MemoryRepo;
pub use sqlite_repo::SqliteRepo;
