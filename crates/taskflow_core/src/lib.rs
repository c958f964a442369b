//! Core domain logic for TaskFlow.
//! This crate owns the task list state and its local persistence contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::filter::{FilterParseError, TaskFilter};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::theme::{Theme, ThemeParseError};
pub use service::command::{CommandOutcome, TaskCommand};
pub use service::task_registry::{TaskChange, TaskRegistry};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult};
pub use store::{TaskStore, TASKS_KEY, THEME_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
