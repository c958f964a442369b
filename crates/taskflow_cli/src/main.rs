//! taskflow CLI entry point.
//!
//! # Responsibility
//! - Bootstrap logging and the SQLite-backed store.
//! - Translate one subcommand into one `TaskCommand` and render the outcome.
//!
//! Exit codes: 0 success, 1 unknown task id or bootstrap failure, 2 invalid
//! input.

mod cli;
mod output;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::{Cli, Commands, ThemeChoice};
use log::info;
use serde_json::json;
use std::path::Path;
use std::process::ExitCode;
use taskflow_core::db::open_db;
use taskflow_core::{
    default_log_level, flush_logging, init_logging, CommandOutcome, KeyValueStorage,
    SqliteStorage, TaskCommand, TaskRegistry, TaskStore, Theme,
};

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        start_logging(level, log_dir)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let storage = SqliteStorage::try_new(&conn).context("database is not usable")?;
    let mut registry = TaskRegistry::new(TaskStore::new(storage));
    info!(
        "event=cli_command module=cli status=start db={}",
        cli.db.display()
    );

    execute(&mut registry, cli.command, cli.json)
}

fn start_logging(level: &str, log_dir: &Path) -> anyhow::Result<()> {
    let absolute = if log_dir.is_absolute() {
        log_dir.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to resolve current directory")?
            .join(log_dir)
    };
    let absolute = absolute
        .to_str()
        .ok_or_else(|| anyhow!("log dir `{}` is not valid UTF-8", absolute.display()))?;
    init_logging(level, absolute).map_err(|err| anyhow!(err))
}

fn execute<S: KeyValueStorage>(
    registry: &mut TaskRegistry<S>,
    command: Commands,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let command = match command {
        Commands::Count => {
            let active = registry.active_count();
            if json {
                output::print_json(&json!({ "activeCount": active }))?;
            } else {
                println!("{}", output::tasks_left(active));
            }
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Theme { choice: None } => {
            let theme = registry.theme();
            if json {
                output::print_json(&json!({ "theme": theme.as_str() }))?;
            } else {
                println!("{theme}");
            }
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Theme {
            choice: Some(choice),
        } => match choice {
            ThemeChoice::Light => TaskCommand::SetTheme(Theme::Light),
            ThemeChoice::Dark => TaskCommand::SetTheme(Theme::Dark),
            ThemeChoice::Toggle => TaskCommand::ToggleTheme,
        },
        Commands::Add { content } => TaskCommand::Add {
            content: content.join(" "),
        },
        Commands::Toggle { id } => TaskCommand::Toggle { id },
        Commands::Delete { id } => TaskCommand::Delete { id },
        Commands::ClearCompleted => TaskCommand::ClearCompleted,
        Commands::List { filter } => TaskCommand::SetFilter(filter),
        Commands::Reorder { source, target } => TaskCommand::Reorder {
            source_id: source,
            target_id: target,
        },
    };

    let outcome = match registry.dispatch(command) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    render(registry, &outcome, json)?;
    if outcome.is_applied() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NOT_FOUND))
    }
}

fn render<S: KeyValueStorage>(
    registry: &TaskRegistry<S>,
    outcome: &CommandOutcome,
    json: bool,
) -> anyhow::Result<()> {
    match outcome {
        CommandOutcome::Added(task) => {
            if json {
                output::print_json(&json!({ "task": task }))?;
            } else {
                println!("Added {}", output::task_line(task));
            }
        }
        CommandOutcome::Toggled(Some(task)) => {
            if json {
                output::print_json(&json!({ "task": task }))?;
            } else {
                println!("{}", output::task_line(task));
            }
        }
        CommandOutcome::Toggled(None) => eprintln!("task not found"),
        CommandOutcome::Deleted(applied) | CommandOutcome::Reordered(applied) => {
            if json {
                output::print_json(&json!({ "applied": applied }))?;
            } else if !applied {
                eprintln!("task not found");
            }
        }
        CommandOutcome::ClearedCompleted(removed) => {
            if json {
                output::print_json(&json!({ "removed": removed }))?;
            } else {
                println!("Cleared {removed} completed task(s)");
            }
        }
        CommandOutcome::FilterChanged(filter) => {
            let tasks = registry.filtered();
            if json {
                output::print_json(&json!({
                    "filter": filter.as_str(),
                    "tasks": tasks,
                    "activeCount": registry.active_count(),
                }))?;
            } else {
                for task in &tasks {
                    println!("{}", output::task_line(task));
                }
                println!("{}", output::tasks_left(registry.active_count()));
            }
        }
        CommandOutcome::ThemeChanged(theme) => {
            if json {
                output::print_json(&json!({ "theme": theme.as_str() }))?;
            } else {
                println!("{theme}");
            }
        }
    }
    Ok(())
}
