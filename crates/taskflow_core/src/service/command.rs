//! Typed command dispatch for UI collaborators.
//!
//! Front ends translate user input into a `TaskCommand` and read the
//! `CommandOutcome`; they never reach into registry internals.

use crate::model::filter::TaskFilter;
use crate::model::task::{Task, TaskValidationError};
use crate::model::theme::Theme;
use crate::service::task_registry::TaskRegistry;
use crate::storage::KeyValueStorage;

/// One user intent against the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Add { content: String },
    Toggle { id: String },
    Delete { id: String },
    ClearCompleted,
    Reorder { source_id: String, target_id: String },
    SetFilter(TaskFilter),
    SetTheme(Theme),
    ToggleTheme,
}

/// Result of applying a `TaskCommand`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Task),
    /// `None` when no task had the id.
    Toggled(Option<Task>),
    Deleted(bool),
    ClearedCompleted(usize),
    Reordered(bool),
    FilterChanged(TaskFilter),
    ThemeChanged(Theme),
}

impl CommandOutcome {
    /// Whether the command found its target and changed something.
    pub fn is_applied(&self) -> bool {
        match self {
            Self::Toggled(task) => task.is_some(),
            Self::Deleted(applied) | Self::Reordered(applied) => *applied,
            Self::Added(_)
            | Self::ClearedCompleted(_)
            | Self::FilterChanged(_)
            | Self::ThemeChanged(_) => true,
        }
    }
}

impl<S: KeyValueStorage> TaskRegistry<S> {
    /// Applies one command.
    ///
    /// # Errors
    /// - `TaskValidationError` from `Add` with blank content; nothing changes.
    pub fn dispatch(&mut self, command: TaskCommand) -> Result<CommandOutcome, TaskValidationError> {
        let outcome = match command {
            TaskCommand::Add { content } => CommandOutcome::Added(self.add(&content)?),
            TaskCommand::Toggle { id } => CommandOutcome::Toggled(self.toggle(&id)),
            TaskCommand::Delete { id } => CommandOutcome::Deleted(self.delete(&id)),
            TaskCommand::ClearCompleted => CommandOutcome::ClearedCompleted(self.clear_completed()),
            TaskCommand::Reorder {
                source_id,
                target_id,
            } => CommandOutcome::Reordered(self.reorder(&source_id, &target_id)),
            TaskCommand::SetFilter(filter) => {
                self.set_filter(filter);
                CommandOutcome::FilterChanged(filter)
            }
            TaskCommand::SetTheme(theme) => {
                self.set_theme(theme);
                CommandOutcome::ThemeChanged(theme)
            }
            TaskCommand::ToggleTheme => CommandOutcome::ThemeChanged(self.toggle_theme()),
        };
        Ok(outcome)
    }
}
