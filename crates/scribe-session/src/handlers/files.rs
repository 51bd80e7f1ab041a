use scribe_core::{Document, DocumentId, DocumentKind};

use crate::protocol::DocumentSummary;
use crate::state::GlobalState;

/// Drop the drawing session once its document is no longer the active one.
/// The next `open_canvas` rebuilds it from the stored content.
async fn sync_canvas(state: &GlobalState) {
    let active = state.store.read().await.active_id().cloned();
    let mut canvas = state.canvas.write().await;
    let stale = canvas
        .as_ref()
        .is_some_and(|session| Some(&session.document_id) != active.as_ref());
    if stale {
        log::debug!("closing canvas session, active document changed");
        *canvas = None;
    }
}

/// Handle "create file" from the sidebar
pub async fn handle_create_file(state: &GlobalState, name: &str, kind: DocumentKind) -> Document {
    let document = state.store.write().await.create_file(name, kind);
    log::info!("created {} {:?} ({})", kind, name, document.id);
    sync_canvas(state).await;
    document
}

/// Handle "delete file". Unknown ids are ignored.
pub async fn handle_delete_file(state: &GlobalState, id: &DocumentId) -> Option<Document> {
    let removed = state.store.write().await.delete_file(id);
    match &removed {
        Some(doc) => log::info!("deleted {:?} ({})", doc.name, doc.id),
        None => log::debug!("delete ignored, {} not found", id),
    }
    sync_canvas(state).await;
    removed
}

/// Handle "rename file". Unknown ids are ignored.
pub async fn handle_rename_file(state: &GlobalState, id: &DocumentId, name: &str) -> bool {
    state.store.write().await.rename_file(id, name)
}

/// Handle selection from the file list; `None` clears the selection.
pub async fn handle_select_file(state: &GlobalState, id: Option<&DocumentId>) -> bool {
    let changed = state.store.write().await.set_active_file(id);
    if changed {
        sync_canvas(state).await;
    }
    changed
}

/// Handle raw content replacement from an editor.
pub async fn handle_update_file(state: &GlobalState, id: &DocumentId, content: &str) -> bool {
    state.store.write().await.update_file(id, content)
}

pub async fn handle_active_file(state: &GlobalState) -> Option<Document> {
    state.store.read().await.active_file().cloned()
}

/// File list rows, most recently modified first. `filter` keeps rows whose
/// name contains it, ignoring case.
pub async fn handle_list_documents(
    state: &GlobalState,
    filter: Option<&str>,
) -> Vec<DocumentSummary> {
    let store = state.store.read().await;
    let rows = match filter {
        Some(term) => store.search(term),
        None => store.sorted_by_recent(),
    };
    rows.into_iter()
        .map(DocumentSummary::from)
        .collect()
}
