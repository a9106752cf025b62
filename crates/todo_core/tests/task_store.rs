use todo_core::{
    decode_snapshot, CompletionSummary, KeyValueSlot, MemorySlot, StoreError, TaskId,
    TaskListStore, TaskValidationError, TASKS_SLOT_KEY,
};

fn snapshot(slot: &MemorySlot) -> Option<String> {
    slot.read(TASKS_SLOT_KEY).expect("slot read should succeed")
}

#[test]
fn empty_slot_initializes_empty_collection() {
    let slot = MemorySlot::new();
    let store = TaskListStore::initialize(&slot);

    assert!(store.is_empty());
    assert_eq!(snapshot(&slot), None);
}

#[test]
fn add_appends_and_persists_single_record() {
    let slot = MemorySlot::new();
    let mut store = TaskListStore::initialize(&slot);

    let id = store.add("Buy milk").expect("add should succeed");

    assert_eq!(store.len(), 1);
    let task = &store.tasks()[0];
    assert_eq!(task.id(), &id);
    assert_eq!(task.text(), "Buy milk");
    assert!(!task.is_completed());

    let raw = snapshot(&slot).expect("snapshot should be written");
    let persisted = decode_snapshot(&raw).expect("written snapshot should decode");
    assert_eq!(persisted, store.tasks());
}

#[test]
fn adds_preserve_call_order() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    let inputs = ["one", "  two", "three  ", "four"];

    for input in inputs {
        store.add(input).expect("add should succeed");
    }

    let texts: Vec<_> = store.tasks().iter().map(|task| task.text()).collect();
    assert_eq!(texts, vec!["one", "two", "three", "four"]);
}

#[test]
fn blank_add_is_rejected_without_writing() {
    let slot = MemorySlot::new();
    let mut store = TaskListStore::initialize(&slot);
    store.add("keep").expect("add should succeed");
    let before = snapshot(&slot);

    for input in ["", "   ", "\t\n"] {
        let err = store.add(input).expect_err("add should be rejected");
        assert!(matches!(
            err,
            StoreError::Validation(TaskValidationError::EmptyText)
        ));
        assert_eq!(err.to_string(), "Task cannot be empty");
    }

    assert_eq!(store.len(), 1);
    assert_eq!(snapshot(&slot), before);
}

#[test]
fn toggle_flips_only_target_and_summary_tracks_it() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    let walk = store.add("Walk dog").expect("add should succeed");

    assert!(store.toggle_complete(&walk).expect("toggle should succeed"));
    assert!(store.get(&walk).expect("task should exist").is_completed());
    assert_eq!(
        store.completion_summary(),
        CompletionSummary {
            completed: 1,
            total: 1
        }
    );

    let other = store.add("Feed cat").expect("add should succeed");
    assert!(!store.get(&other).expect("task should exist").is_completed());
}

#[test]
fn double_toggle_restores_original_value() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    let id = store.add("task").expect("add should succeed");

    store.toggle_complete(&id).expect("toggle should succeed");
    store.toggle_complete(&id).expect("toggle should succeed");

    assert!(!store.get(&id).expect("task should exist").is_completed());
}

#[test]
fn summary_after_three_adds_and_one_completion() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    let first = store.add("a").expect("add should succeed");
    store.add("b").expect("add should succeed");
    store.add("c").expect("add should succeed");
    store.toggle_complete(&first).expect("toggle should succeed");

    assert_eq!(
        store.completion_summary(),
        CompletionSummary {
            completed: 1,
            total: 3
        }
    );
}

#[test]
fn edit_replaces_text_and_keeps_other_fields() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    let first = store.add("first").expect("add should succeed");
    let second = store.add("second").expect("add should succeed");
    store.toggle_complete(&first).expect("toggle should succeed");

    assert!(store.edit(&first, "  renamed  ").expect("edit should succeed"));

    let tasks = store.tasks();
    assert_eq!(tasks[0].id(), &first);
    assert_eq!(tasks[0].text(), "renamed");
    assert!(tasks[0].is_completed());
    assert_eq!(tasks[1].id(), &second);
}

#[test]
fn blank_edit_leaves_text_and_snapshot_unchanged() {
    let slot = MemorySlot::new();
    let mut store = TaskListStore::initialize(&slot);
    let id = store.add("original").expect("add should succeed");
    let before = snapshot(&slot);

    let err = store.edit(&id, "").expect_err("edit should be rejected");

    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.get(&id).expect("task should exist").text(), "original");
    assert_eq!(snapshot(&slot), before);
}

#[test]
fn delete_preserves_relative_order() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    let a = store.add("a").expect("add should succeed");
    let b = store.add("b").expect("add should succeed");
    let c = store.add("c").expect("add should succeed");

    assert!(store.delete(&b).expect("delete should succeed"));

    let ids: Vec<_> = store.tasks().iter().map(|task| task.id().clone()).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn operations_on_deleted_id_are_silent_noops() {
    let slot = MemorySlot::new();
    let mut store = TaskListStore::initialize(&slot);
    let keep = store.add("keep").expect("add should succeed");
    let gone = store.add("gone").expect("add should succeed");
    store.delete(&gone).expect("delete should succeed");
    let before = snapshot(&slot);

    assert!(!store.toggle_complete(&gone).expect("toggle should succeed"));
    assert!(!store.edit(&gone, "revived").expect("edit should succeed"));
    assert!(!store.delete(&gone).expect("delete should succeed"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].id(), &keep);
    assert_eq!(snapshot(&slot), before);
}

#[test]
fn delete_of_unknown_id_changes_nothing() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    store.add("only").expect("add should succeed");

    let missing = TaskId::parse("does-not-exist").expect("id should parse");
    assert!(!store.delete(&missing).expect("delete should succeed"));
    assert_eq!(store.len(), 1);
}

#[test]
fn reinitialized_store_matches_original_collection() {
    let slot = MemorySlot::new();
    let mut store = TaskListStore::initialize(&slot);
    let a = store.add("Buy milk").expect("add should succeed");
    store.add("Walk dog").expect("add should succeed");
    store.add("Call mom").expect("add should succeed");
    store.toggle_complete(&a).expect("toggle should succeed");
    store.edit(&a, "Buy oat milk").expect("edit should succeed");

    let rehydrated = TaskListStore::initialize(&slot);

    assert_eq!(rehydrated.tasks(), store.tasks());
}

#[test]
fn malformed_snapshot_initializes_empty_collection() {
    for raw in [
        "",
        "not json",
        "{\"id\":\"a\"}",
        "[{\"id\":\"a\",\"text\":\"\",\"completed\":false}]",
        "[{\"id\":\"a\",\"text\":\"x\"},{\"id\":\"a\",\"text\":\"y\"}]",
    ] {
        let slot = MemorySlot::new();
        slot.write(TASKS_SLOT_KEY, raw).expect("slot write should succeed");

        let store = TaskListStore::initialize(&slot);
        assert!(store.is_empty(), "snapshot {raw:?} should hydrate empty");
    }
}

#[test]
fn malformed_snapshot_is_overwritten_by_next_mutation() {
    let slot = MemorySlot::new();
    slot.write(TASKS_SLOT_KEY, "corrupt").expect("slot write should succeed");

    let mut store = TaskListStore::initialize(&slot);
    store.add("fresh start").expect("add should succeed");

    let raw = snapshot(&slot).expect("snapshot should be written");
    let persisted = decode_snapshot(&raw).expect("written snapshot should decode");
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].text(), "fresh start");
}

#[test]
fn legacy_snapshot_hydrates_and_drops_extra_fields() {
    let slot = MemorySlot::new();
    slot.write(
        TASKS_SLOT_KEY,
        r#"[{"id":"1700000000000","text":"Legacy","completed":true,"isEditing":false}]"#,
    )
    .expect("slot write should succeed");

    let mut store = TaskListStore::initialize(&slot);
    let id = TaskId::parse("1700000000000").expect("id should parse");
    assert!(store.get(&id).expect("task should exist").is_completed());

    store.toggle_complete(&id).expect("toggle should succeed");
    assert_eq!(
        snapshot(&slot).as_deref(),
        Some(r#"[{"id":"1700000000000","text":"Legacy","completed":false}]"#)
    );
}

#[test]
fn custom_key_keeps_collections_apart() {
    let slot = MemorySlot::new();
    let mut work = TaskListStore::initialize_with_key(&slot, "work");
    work.add("report").expect("add should succeed");

    let home = TaskListStore::initialize(&slot);
    assert!(home.is_empty());
    assert_eq!(work.key(), "work");
    assert_eq!(TaskListStore::initialize_with_key(&slot, "work").len(), 1);
}

#[test]
fn generated_ids_are_unique() {
    let mut store = TaskListStore::initialize(MemorySlot::new());
    let ids: std::collections::HashSet<_> =
        (0..100).map(|i| store.add(&format!("task {i}")).expect("add should succeed")).collect();
    assert_eq!(ids.len(), 100);
}
