//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record shared by storage and callers.
//! - Validate user input before a task exists.
//!
//! # Invariants
//! - `id` is opaque; fresh ids are UUID v4 text, loaded ids are kept verbatim.
//! - `content` is trimmed and never empty.
//! - `created_at` is kept as the exact stored string so a loaded collection
//!   serializes back byte-for-byte.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for TaskId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TaskId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Input validation failures raised before a task is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyContent,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::EmptyContent => write!(f, "task content must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do item.
///
/// Field order matches the persisted JSON layout:
/// `{"id","content","completed","createdAt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    content: String,
    #[serde(default)]
    completed: bool,
    #[serde(default = "now_iso8601")]
    created_at: String,
}

impl Task {
    /// Creates an incomplete task with a generated id and the current time.
    ///
    /// # Errors
    /// - `EmptyContent` when `content` is empty after trimming.
    pub fn new(content: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), content)
    }

    /// Creates an incomplete task with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: impl Into<TaskId>, content: &str) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: id.into(),
            content: content.trim().to_string(),
            completed: false,
            created_at: now_iso8601(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_blank() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.content.trim().is_empty() {
            return Err(TaskValidationError::EmptyContent);
        }
        Ok(())
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Creation time exactly as stored (ISO-8601, UTC).
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Parses `created_at`; `None` when the stored text is not RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|value| value.with_timezone(&Utc))
    }

    /// Flips completion state.
    pub fn toggle(&mut self) -> &mut Self {
        self.completed = !self.completed;
        self
    }
}

/// Current UTC time in the `YYYY-MM-DDTHH:MM:SS.mmmZ` form.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::now_iso8601;

    #[test]
    fn timestamp_uses_millisecond_zulu_form() {
        let stamp = now_iso8601();
        assert_eq!(stamp.len(), "2024-01-01T00:00:00.000Z".len());
        assert!(stamp.ends_with('Z'));
        assert_eq!(&stamp[19..20], ".");
    }
}
