//! Command-line surface for taskflow.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskflow_core::TaskFilter;

/// taskflow - a local to-do list
///
/// Tasks and the theme preference are kept in a SQLite file; each
/// invocation applies one action and exits.
#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database file holding tasks and theme
    #[arg(long, global = true, env = "TASKFLOW_DB", default_value = "taskflow.sqlite3")]
    pub db: PathBuf,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "TASKFLOW_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "TASKFLOW_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the end of the list
    Add {
        /// Task text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Flip a task between active and completed
    Toggle { id: String },

    /// Delete a task
    Delete { id: String },

    /// Delete every completed task
    ClearCompleted,

    /// Show tasks in list order
    List {
        /// Which tasks to show: all, active, completed
        #[arg(long, short, default_value = "all")]
        filter: TaskFilter,
    },

    /// Move SOURCE into the slot TARGET occupies
    Reorder { source: String, target: String },

    /// Print the number of active tasks
    Count,

    /// Show or change the theme preference
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}
