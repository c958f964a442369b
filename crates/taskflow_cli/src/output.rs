//! Human and JSON rendering for CLI results.

use serde_json::Value;
use taskflow_core::Task;

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `[x] <id>  <content>` for completed, `[ ] ...` for active.
pub fn task_line(task: &Task) -> String {
    let mark = if task.is_completed() { 'x' } else { ' ' };
    format!("[{mark}] {}  {}", task.id(), task.content())
}

/// Footer wording shared with the list view.
pub fn tasks_left(active: usize) -> String {
    let suffix = if active == 1 { "" } else { "s" };
    format!("{active} task{suffix} left")
}
