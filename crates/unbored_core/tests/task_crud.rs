use unbored_core::{
    completion_rate, filter_tasks, FileBackend, MemoryBackend, Priority, StatusFilter, Store,
    StoreTaskRepository, Task, TaskRepository, TaskView,
};

fn repo_store() -> Store<MemoryBackend> {
    Store::new(MemoryBackend::new())
}

#[test]
fn add_then_list_round_trips_fields_exactly() {
    let store = repo_store();
    let repo = StoreTaskRepository::new(&store);

    let task = Task::new("water the plants", "balcony first", Priority::Low);
    let expected = task.clone();
    let after_add = repo.add(task);

    assert_eq!(after_add.len(), 1);
    let listed = repo.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], expected);
}

#[test]
fn add_appends_in_insertion_order() {
    let store = repo_store();
    let repo = StoreTaskRepository::new(&store);

    let first = Task::new("first", "", Priority::Medium);
    let second = Task::new("second", "", Priority::Medium);
    repo.add(first.clone());
    repo.add(second.clone());

    let listed = repo.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[test]
fn update_replaces_matching_record_and_preserves_order() {
    let store = repo_store();
    let repo = StoreTaskRepository::new(&store);

    let first = Task::new("first", "", Priority::Medium);
    let second = Task::new("second", "", Priority::Medium);
    let third = Task::new("third", "", Priority::Medium);
    repo.add(first.clone());
    repo.add(second.clone());
    repo.add(third.clone());

    let mut edited = second.clone();
    edited.title = "second, revised".to_string();
    edited.completed = true;
    let updated = repo.update(edited.clone());

    assert_eq!(updated.len(), 3);
    assert_eq!(updated[0].id, first.id);
    assert_eq!(updated[1], edited);
    assert_eq!(updated[2].id, third.id);
}

#[test]
fn update_of_unknown_id_is_a_no_op() {
    let store = repo_store();
    let repo = StoreTaskRepository::new(&store);

    let existing = Task::new("keep me", "", Priority::High);
    repo.add(existing.clone());

    let stranger = Task::new("never added", "", Priority::Low);
    let after = repo.update(stranger);

    assert_eq!(after, vec![existing]);
}

#[test]
fn delete_removes_only_matching_record() {
    let store = repo_store();
    let repo = StoreTaskRepository::new(&store);

    let first = Task::new("first", "", Priority::Medium);
    let second = Task::new("second", "", Priority::Medium);
    repo.add(first.clone());
    repo.add(second.clone());

    let after = repo.delete(&first.id);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, second.id);
    assert!(!repo.list().iter().any(|task| task.id == first.id));
}

#[test]
fn delete_of_unknown_id_is_idempotent() {
    let store = repo_store();
    let repo = StoreTaskRepository::new(&store);

    let task = Task::new("survivor", "", Priority::Medium);
    repo.add(task.clone());

    let after = repo.delete("no-such-id");
    assert_eq!(after, vec![task.clone()]);
    let again = repo.delete("no-such-id");
    assert_eq!(again, vec![task]);
}

#[test]
fn completion_rate_matches_rounded_percentage() {
    let store = repo_store();
    let repo = StoreTaskRepository::new(&store);

    assert_eq!(completion_rate(&repo.list()), 0);

    let mut done = Task::new("done", "", Priority::Low);
    done.completed = true;
    repo.add(done);
    repo.add(Task::new("open", "", Priority::Low));

    assert_eq!(completion_rate(&repo.list()), 50);
}

#[test]
fn view_sorts_newest_first_and_respects_filters() {
    let older = Task {
        id: "a".to_string(),
        title: "older".to_string(),
        description: String::new(),
        priority: Priority::Low,
        completed: false,
        created_at: 100,
    };
    let newer = Task {
        id: "b".to_string(),
        title: "newer".to_string(),
        description: String::new(),
        priority: Priority::High,
        completed: true,
        created_at: 200,
    };
    let tasks = vec![older.clone(), newer.clone()];

    let all = filter_tasks(&tasks, &TaskView::default());
    let ids: Vec<&str> = all.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);

    let active_only = TaskView {
        status: StatusFilter::Active,
        ..TaskView::default()
    };
    let active = filter_tasks(&tasks, &active_only);
    assert_eq!(active, vec![older.clone()]);

    let high_only = TaskView {
        status: StatusFilter::All,
        priorities: vec![Priority::High],
    };
    let high = filter_tasks(&tasks, &high_only);
    assert_eq!(high, vec![newer]);
}

#[test]
fn tasks_persist_across_repository_instances_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let task = Task::new("persisted", "across sessions", Priority::High);

    {
        let store = Store::new(FileBackend::new(dir.path()));
        let repo = StoreTaskRepository::new(&store);
        repo.add(task.clone());
    }

    let store = Store::new(FileBackend::new(dir.path()));
    let repo = StoreTaskRepository::new(&store);
    assert_eq!(repo.list(), vec![task]);
}
