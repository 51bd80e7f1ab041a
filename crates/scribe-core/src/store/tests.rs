use super::*;
use std::sync::{Arc, Mutex};

fn recording_store() -> (FileStore, Arc<Mutex<Vec<StoreEvent>>>) {
    let mut store = FileStore::new();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    (store, events)
}

#[test]
fn test_create_canvas_is_empty_active_and_most_recent() {
    let mut store = FileStore::with_welcome_note();

    let doc = store.create_file("Test", DocumentKind::Canvas);

    assert_eq!(doc.name, "Test");
    assert_eq!(doc.content, "");
    assert_eq!(doc.kind, DocumentKind::Canvas);
    assert_eq!(store.active_id(), Some(&doc.id));
    assert_eq!(store.sorted_by_recent()[0].id, doc.id);
}

#[test]
fn test_create_note_has_default_content() {
    let mut store = FileStore::new();
    let doc = store.create_file("Ideas", DocumentKind::Note);
    assert_eq!(doc.content, "# New Note");
    assert_eq!(store.get(&doc.id), Some(&doc));
}

#[test]
fn test_create_accepts_empty_and_duplicate_names() {
    let mut store = FileStore::new();
    let a = store.create_file("", DocumentKind::Note);
    let b = store.create_file("", DocumentKind::Note);

    assert_ne!(a.id, b.id, "Documents should never share an id");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_delete_active_selects_first_remaining() {
    let mut store = FileStore::new();
    let first = store.create_file("first", DocumentKind::Note);
    let _second = store.create_file("second", DocumentKind::Note);
    let third = store.create_file("third", DocumentKind::Canvas);
    assert_eq!(store.active_id(), Some(&third.id));

    let removed = store.delete_file(&third.id).unwrap();

    assert_eq!(removed.name, "third");
    assert_eq!(store.active_id(), Some(&first.id));
    assert!(store.get(&third.id).is_none());
}

#[test]
fn test_delete_last_document_clears_selection() {
    let mut store = FileStore::new();
    let only = store.create_file("only", DocumentKind::Note);

    store.delete_file(&only.id);

    assert!(store.is_empty());
    assert_eq!(store.active_id(), None);
    assert!(store.active_file().is_none());
}

#[test]
fn test_delete_inactive_keeps_selection() {
    let mut store = FileStore::new();
    let first = store.create_file("first", DocumentKind::Note);
    let second = store.create_file("second", DocumentKind::Note);

    store.delete_file(&first.id);

    assert_eq!(store.active_id(), Some(&second.id));
}

#[test]
fn test_delete_unknown_is_noop() {
    let (mut store, events) = recording_store();
    store.create_file("keep", DocumentKind::Note);
    events.lock().unwrap().clear();

    assert!(store.delete_file(&DocumentId::from("missing")).is_none());
    assert_eq!(store.len(), 1);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_active_never_dangles_after_arbitrary_deletes() {
    let mut store = FileStore::with_welcome_note();
    let ids: Vec<DocumentId> = (0..6)
        .map(|i| store.create_file(&format!("doc {}", i), DocumentKind::Note).id)
        .collect();

    for (step, id) in ids.iter().enumerate().rev() {
        if step % 2 == 0 {
            store.set_active_file(Some(id));
        }
        store.delete_file(id);
        if let Some(active) = store.active_id() {
            assert!(store.get(active).is_some(), "Active id must reference a document");
        }
    }
}

#[test]
fn test_update_refreshes_timestamp_and_content() {
    let mut store = FileStore::new();
    let doc = store.create_file("n", DocumentKind::Note);

    assert!(store.update_file(&doc.id, "# Changed"));

    let updated = store.get(&doc.id).unwrap();
    assert_eq!(updated.content, "# Changed");
    assert!(updated.last_modified > doc.last_modified);
}

#[test]
fn test_update_unknown_is_noop() {
    let mut store = FileStore::with_welcome_note();
    let before = store.documents().to_vec();

    assert!(!store.update_file(&DocumentId::from("missing"), "x"));
    assert_eq!(store.documents(), before.as_slice());
}

#[test]
fn test_update_moves_document_to_front_of_recent() {
    let mut store = FileStore::new();
    let older = store.create_file("older", DocumentKind::Note);
    let _newer = store.create_file("newer", DocumentKind::Note);

    store.update_file(&older.id, "edited");

    assert_eq!(store.sorted_by_recent()[0].id, older.id);
    assert_eq!(store.documents()[0].id, older.id, "Storage order is unchanged");
}

#[test]
fn test_rename_keeps_timestamp() {
    let mut store = FileStore::new();
    let doc = store.create_file("draft", DocumentKind::Note);

    assert!(store.rename_file(&doc.id, "final"));

    let renamed = store.get(&doc.id).unwrap();
    assert_eq!(renamed.name, "final");
    assert_eq!(renamed.last_modified, doc.last_modified);
    assert!(!store.rename_file(&DocumentId::from("missing"), "x"));
}

#[test]
fn test_set_active_unknown_leaves_selection() {
    let mut store = FileStore::with_welcome_note();
    let before = store.active_id().cloned();

    assert!(!store.set_active_file(Some(&DocumentId::from("nope"))));
    assert_eq!(store.active_id().cloned(), before);
}

#[test]
fn test_set_active_none_clears_and_some_selects() {
    let mut store = FileStore::with_welcome_note();
    let doc = store.create_file("x", DocumentKind::Canvas);

    assert!(store.set_active_file(None));
    assert!(store.active_file().is_none());

    let welcome = DocumentId::from(WELCOME_NOTE_ID);
    assert!(store.set_active_file(Some(&welcome)));
    assert_eq!(store.active_file().unwrap().name, "Welcome to ScribeCanvas");

    let stamp = store.get(&doc.id).unwrap().last_modified;
    store.set_active_file(Some(&doc.id));
    assert_eq!(store.get(&doc.id).unwrap().last_modified, stamp);
}

#[test]
fn test_welcome_note_is_seeded_and_active() {
    let store = FileStore::with_welcome_note();
    let active = store.active_file().unwrap();

    assert_eq!(active.id.as_str(), WELCOME_NOTE_ID);
    assert!(active.is_note());
    assert!(active.content.starts_with("# Welcome to ScribeCanvas"));
    assert!(active.content.contains("- Ask the AI assistant for help"));
}

#[test]
fn test_events_are_emitted_in_order() {
    let (mut store, events) = recording_store();

    let doc = store.create_file("Sketch", DocumentKind::Canvas);
    store.update_file(&doc.id, "data:image/png;base64,");
    store.delete_file(&doc.id);

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            StoreEvent::Created {
                id: doc.id.clone(),
                kind: DocumentKind::Canvas,
                name: "Sketch".to_string(),
            },
            StoreEvent::ActiveChanged {
                id: Some(doc.id.clone()),
            },
            StoreEvent::Updated { id: doc.id.clone() },
            StoreEvent::Deleted {
                id: doc.id.clone(),
                name: "Sketch".to_string(),
            },
            StoreEvent::ActiveChanged { id: None },
        ]
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut store = FileStore::new();
    let count = Arc::new(Mutex::new(0usize));
    let sink = count.clone();
    let sub = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    store.create_file("a", DocumentKind::Note);
    assert!(store.unsubscribe(sub));
    store.create_file("b", DocumentKind::Note);

    assert_eq!(*count.lock().unwrap(), 2);
    assert!(!store.unsubscribe(sub));
}

#[test]
fn test_search_ignores_case_and_orders_by_recent() {
    let mut store = FileStore::with_welcome_note();
    let meeting = store.create_file("Meeting Notes", DocumentKind::Note);
    let sketch = store.create_file("Sketch", DocumentKind::Canvas);
    let notes = store.create_file("notes draft", DocumentKind::Note);
    store.update_file(&meeting.id, "# Agenda");

    let ids: Vec<_> = store.search("NOTES").iter().map(|d| d.id.clone()).collect();
    assert_eq!(ids, vec![meeting.id, notes.id]);
    assert!(!store.search("sket").is_empty());
    assert_eq!(store.search("sket")[0].id, sketch.id);
}

#[test]
fn test_search_empty_term_matches_everything() {
    let mut store = FileStore::with_welcome_note();
    store.create_file("Ideas", DocumentKind::Note);

    let all: Vec<_> = store.search("").iter().map(|d| d.id.clone()).collect();
    let recent: Vec<_> = store.sorted_by_recent().iter().map(|d| d.id.clone()).collect();
    assert_eq!(all, recent);
    assert_eq!(all.len(), 2);
}

#[test]
fn test_search_without_matches_is_empty() {
    let mut store = FileStore::with_welcome_note();
    store.create_file("Ideas", DocumentKind::Note);

    assert!(store.search("zebra").is_empty());
    assert_eq!(store.len(), 2);
}
