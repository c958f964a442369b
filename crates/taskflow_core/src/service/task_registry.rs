//! Task registry use-case service.
//!
//! # Responsibility
//! - Own the ordered task collection and the active display filter.
//! - Apply add/toggle/delete/clear/reorder and persist after each one.
//! - Notify subscribers of every applied change.
//!
//! # Invariants
//! - Collection order is display and persistence order.
//! - Id lookups use first-match semantics; absence is `None`/`false`, never
//!   an error.
//! - Rejected input never mutates memory or storage.
//! - A failed persist leaves memory ahead of storage until the next save.

use crate::model::filter::TaskFilter;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::model::theme::Theme;
use crate::storage::KeyValueStorage;
use crate::store::TaskStore;
use log::{debug, info, warn};

/// Change applied by the registry, delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    Added(Task),
    Toggled(Task),
    Deleted(TaskId),
    ClearedCompleted { removed: usize },
    Reordered { source_id: TaskId, target_id: TaskId },
    FilterChanged(TaskFilter),
    ThemeChanged(Theme),
}

type Listener = Box<dyn FnMut(&TaskChange)>;

/// Owner of the task collection.
///
/// Not shared: collaborators get `&mut` access or clones of tasks.
pub struct TaskRegistry<S: KeyValueStorage> {
    store: TaskStore<S>,
    tasks: Vec<Task>,
    filter: TaskFilter,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStorage> TaskRegistry<S> {
    /// Loads the stored collection; filter starts at `All`.
    pub fn new(store: TaskStore<S>) -> Self {
        let tasks = store.load_tasks();
        info!(
            "event=registry_load module=registry status=ok count={}",
            tasks.len()
        );
        Self {
            store,
            tasks,
            filter: TaskFilter::default(),
            listeners: Vec::new(),
        }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    /// Registers a listener called after every applied change.
    pub fn subscribe(&mut self, listener: impl FnMut(&TaskChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new incomplete task and persists.
    ///
    /// # Errors
    /// - `EmptyContent` when `content` is blank; nothing changes.
    pub fn add(&mut self, content: &str) -> Result<Task, TaskValidationError> {
        let task = Task::new(content).map_err(|err| {
            warn!("event=task_add module=registry status=rejected reason={err}");
            err
        })?;

        self.tasks.push(task.clone());
        let persisted = self.persist();
        info!(
            "event=task_add module=registry status=ok task_id={} total={} persisted={persisted}",
            task.id(),
            self.tasks.len()
        );
        self.notify(TaskChange::Added(task.clone()));
        Ok(task)
    }

    /// Flips completion of the first task with `id`.
    pub fn toggle(&mut self, id: &str) -> Option<Task> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            debug!("event=task_toggle module=registry status=not_found task_id={id}");
            return None;
        };
        task.toggle();
        let updated = task.clone();

        let persisted = self.persist();
        info!(
            "event=task_toggle module=registry status=ok task_id={id} completed={} persisted={persisted}",
            updated.is_completed()
        );
        self.notify(TaskChange::Toggled(updated.clone()));
        Some(updated)
    }

    /// Removes the first task with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_delete module=registry status=not_found task_id={id}");
            return false;
        };
        let removed = self.tasks.remove(index);

        let persisted = self.persist();
        info!(
            "event=task_delete module=registry status=ok task_id={id} total={} persisted={persisted}",
            self.tasks.len()
        );
        self.notify(TaskChange::Deleted(removed.id().clone()));
        true
    }

    /// Drops every completed task, keeping the rest in order.
    ///
    /// Always persists, even when nothing was removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        let removed = before - self.tasks.len();

        let persisted = self.persist();
        info!(
            "event=tasks_clear_completed module=registry status=ok removed={removed} total={} persisted={persisted}",
            self.tasks.len()
        );
        self.notify(TaskChange::ClearedCompleted { removed });
        removed
    }

    /// Snapshot of the tasks the current filter shows, in collection order.
    pub fn filtered(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect()
    }

    /// Moves `source_id` to the slot `target_id` occupied.
    ///
    /// Both indices are taken from the full collection before the move; the
    /// source is removed and reinserted at the target's original index. So on
    /// `[a, b, c]`, `reorder(a, b)` yields `[b, a, c]` and `reorder(c, a)`
    /// yields `[c, a, b]`. Returns `false` without touching anything when
    /// either id is absent.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        let (Some(source_index), Some(target_index)) =
            (self.position(source_id), self.position(target_id))
        else {
            debug!(
                "event=task_reorder module=registry status=not_found source_id={source_id} target_id={target_id}"
            );
            return false;
        };

        let moved = self.tasks.remove(source_index);
        self.tasks.insert(target_index, moved);

        let persisted = self.persist();
        info!(
            "event=task_reorder module=registry status=ok source_id={source_id} target_id={target_id} from={source_index} to={target_index} persisted={persisted}"
        );
        self.notify(TaskChange::Reordered {
            source_id: TaskId::new(source_id),
            target_id: TaskId::new(target_id),
        });
        true
    }

    /// Changes the display filter. Not persisted.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        self.notify(TaskChange::FilterChanged(filter));
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Number of incomplete tasks, regardless of filter.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_completed()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.active_count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Full collection in order, ignoring the filter.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn theme(&self) -> Theme {
        self.store.theme()
    }

    /// Persists the theme and notifies; returns whether the write landed.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        let persisted = self.store.set_theme(theme);
        self.notify(TaskChange::ThemeChanged(theme));
        persisted
    }

    /// Switches light/dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn persist(&self) -> bool {
        self.store.save_tasks(&self.tasks)
    }

    fn notify(&mut self, change: TaskChange) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}
