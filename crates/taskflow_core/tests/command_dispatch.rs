use taskflow_core::{
    CommandOutcome, MemoryStorage, TaskCommand, TaskFilter, TaskRegistry, TaskStore,
    TaskValidationError, Theme,
};

fn add(registry: &mut TaskRegistry<&MemoryStorage>, content: &str) -> String {
    match registry
        .dispatch(TaskCommand::Add {
            content: content.to_string(),
        })
        .unwrap()
    {
        CommandOutcome::Added(task) => task.id().to_string(),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn dispatch_covers_full_task_lifecycle() {
    let storage = MemoryStorage::new();
    let mut registry = TaskRegistry::new(TaskStore::new(&storage));

    let a = add(&mut registry, "a");
    let b = add(&mut registry, "b");

    let toggled = registry
        .dispatch(TaskCommand::Toggle { id: a.clone() })
        .unwrap();
    assert!(matches!(&toggled, CommandOutcome::Toggled(Some(task)) if task.is_completed()));

    let reordered = registry
        .dispatch(TaskCommand::Reorder {
            source_id: b.clone(),
            target_id: a.clone(),
        })
        .unwrap();
    assert_eq!(reordered, CommandOutcome::Reordered(true));
    assert_eq!(registry.tasks()[0].id(), b.as_str());

    let filtered = registry
        .dispatch(TaskCommand::SetFilter(TaskFilter::Completed))
        .unwrap();
    assert_eq!(filtered, CommandOutcome::FilterChanged(TaskFilter::Completed));
    assert_eq!(registry.filtered().len(), 1);

    let cleared = registry.dispatch(TaskCommand::ClearCompleted).unwrap();
    assert_eq!(cleared, CommandOutcome::ClearedCompleted(1));

    let deleted = registry.dispatch(TaskCommand::Delete { id: b }).unwrap();
    assert_eq!(deleted, CommandOutcome::Deleted(true));
    assert!(registry.is_empty());
}

#[test]
fn dispatch_reports_not_found_as_unapplied_outcomes() {
    let storage = MemoryStorage::new();
    let mut registry = TaskRegistry::new(TaskStore::new(&storage));
    add(&mut registry, "only");

    let outcomes = [
        TaskCommand::Toggle {
            id: "missing".to_string(),
        },
        TaskCommand::Delete {
            id: "missing".to_string(),
        },
        TaskCommand::Reorder {
            source_id: "missing".to_string(),
            target_id: "also-missing".to_string(),
        },
    ]
    .into_iter()
    .map(|command| registry.dispatch(command).unwrap())
    .collect::<Vec<_>>();

    assert_eq!(
        outcomes,
        vec![
            CommandOutcome::Toggled(None),
            CommandOutcome::Deleted(false),
            CommandOutcome::Reordered(false),
        ]
    );
    assert!(outcomes.iter().all(|outcome| !outcome.is_applied()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn dispatch_rejects_blank_add() {
    let storage = MemoryStorage::new();
    let mut registry = TaskRegistry::new(TaskStore::new(&storage));

    let err = registry
        .dispatch(TaskCommand::Add {
            content: "  ".to_string(),
        })
        .unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyContent);
    assert!(registry.is_empty());
    assert!(storage.is_empty());
}

#[test]
fn dispatch_theme_commands() {
    let storage = MemoryStorage::new();
    let mut registry = TaskRegistry::new(TaskStore::new(&storage));

    assert_eq!(
        registry.dispatch(TaskCommand::ToggleTheme).unwrap(),
        CommandOutcome::ThemeChanged(Theme::Dark)
    );
    assert_eq!(
        registry
            .dispatch(TaskCommand::SetTheme(Theme::Light))
            .unwrap(),
        CommandOutcome::ThemeChanged(Theme::Light)
    );
    assert_eq!(registry.theme(), Theme::Light);
}
